use crate::engine::{Result, TokenizeError};
use lazy_static::lazy_static;
use std::path::Path;

/// Embedded Thai word list, about 62,000 entries
/// Source: PyThaiNLP words_th.txt, as distributed in the data/ directory of the
/// wordcut-engine crate
const EMBEDDED_DICTIONARY: &str = include_str!("../../data/words_th.txt");

lazy_static! {
    static ref EMBEDDED_WORDS: Vec<&'static str> = parse_word_list(EMBEDDED_DICTIONARY);
}

/// Words of the built-in Thai dictionary.
pub fn embedded_words() -> &'static [&'static str] {
    &EMBEDDED_WORDS
}

/// One word per line; surrounding whitespace and blank lines are ignored.
pub fn parse_word_list(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Read a word list file, failing if it is unreadable or holds no words.
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| TokenizeError::Dictionary {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = parse_word_list(&content)
        .into_iter()
        .map(str::to_string)
        .collect();

    if words.is_empty() {
        return Err(TokenizeError::EmptyDictionary(path.display().to_string()));
    }

    Ok(words)
}
