// Configuration for the tokenizer pipeline
// Defaults follow the PyThaiNLP conventions for the data location

use std::path::PathBuf;

/// Environment variable naming the segmentation data directory
pub const DATA_HOME_ENV: &str = "PYTHAINLP_DATA_HOME";

/// Data directory used when the environment does not provide one
pub const DEFAULT_DATA_HOME: &str = "/tmp/pythainlp-data";

/// Word list file looked up inside the data directory
pub const DEFAULT_DICTIONARY_FILE: &str = "words_th.txt";

/// Maximum number of unique tokens emitted
pub const DEFAULT_TOKEN_LIMIT: usize = 5;

/// Segmentation engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizerConfig {
    /// Directory holding engine data (default /tmp/pythainlp-data)
    pub data_home: PathBuf,

    /// Word list file name inside `data_home` (default words_th.txt)
    pub dictionary_file: String,

    /// Emit whitespace runs as tokens (default false)
    pub keep_whitespace: bool,
}

impl TokenizerConfig {
    pub fn dictionary_path(&self) -> PathBuf {
        self.data_home.join(&self.dictionary_file)
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            data_home: PathBuf::from(DEFAULT_DATA_HOME),
            dictionary_file: DEFAULT_DICTIONARY_FILE.to_string(),
            keep_whitespace: false,
        }
    }
}

/// Result list configuration
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    /// Unique tokens kept before scanning stops (default 5)
    pub max_tokens: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_TOKEN_LIMIT,
        }
    }
}

/// Master configuration combining all settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub tokenizer: TokenizerConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Reads the data directory from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(PathBuf::from))
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// A value that is present wins over the default; an empty value counts
    /// as absent since it cannot name a directory.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<PathBuf>,
    {
        let mut config = Self::default();
        // Unlike a plain setdefault, an empty value does not stick
        if let Some(data_home) = lookup(DATA_HOME_ENV).filter(|p| !p.as_os_str().is_empty()) {
            config.tokenizer.data_home = data_home;
        }
        config
    }
}
