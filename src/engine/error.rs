use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenizeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot read dictionary {path}: {source}")]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Dictionary has no words: {0}")]
    EmptyDictionary(String),

    #[error("Segmentation failed: {0}")]
    Segmentation(String),

    #[error("JSON encoding failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TokenizeError>;
