use super::dictionary::{embedded_words, load_word_list};
use super::Segmenter;
use crate::engine::config::TokenizerConfig;
use crate::engine::{Result, TokenizeError};
use std::path::Path;
use tracing::{debug, info};
use wordcut_engine::{create_prefix_tree, Wordcut};

/// Dictionary-based maximal matching segmenter backed by `wordcut-engine`.
pub struct WordcutSegmenter {
    wordcut: Wordcut,
    word_count: usize,
}

impl WordcutSegmenter {
    /// Build from an in-memory word list.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Self> {
        let mut words: Vec<&str> = words
            .iter()
            .map(|w| w.as_ref().trim())
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return Err(TokenizeError::EmptyDictionary("word list".to_string()));
        }
        words.sort_unstable();
        words.dedup();

        let dict = create_prefix_tree(&words);
        Ok(Self {
            wordcut: Wordcut::new(dict),
            word_count: words.len(),
        })
    }

    /// Build from a newline-separated word list file.
    pub fn from_dictionary_file(path: &Path) -> Result<Self> {
        let words = load_word_list(path)?;
        Self::from_words(&words)
    }

    /// Build from the dictionary compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_words(embedded_words())
    }

    /// Use the data-home word list when present, the built-in one otherwise.
    ///
    /// A file that exists but cannot be read is an error, not a fallback.
    pub fn load(config: &TokenizerConfig) -> Result<Self> {
        let path = config.dictionary_path();
        let segmenter = if path.exists() {
            let segmenter = Self::from_dictionary_file(&path)?;
            info!(path = %path.display(), words = segmenter.word_count, "loaded dictionary");
            segmenter
        } else {
            debug!(path = %path.display(), "no dictionary in data home, using built-in list");
            Self::embedded()?
        };
        Ok(segmenter)
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

impl Segmenter for WordcutSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.wordcut.segment_into_strings(text))
    }

    fn name(&self) -> &str {
        "wordcut"
    }
}
