// Word segmentation - the engine sits behind `Segmenter`, the rest of the
// pipeline only sees ordered token lists

pub mod dictionary;
pub mod wordcut;

pub use wordcut::WordcutSegmenter;

use crate::engine::Result;
use tracing::debug;

/// A word segmentation engine.
pub trait Segmenter {
    /// Split `text` into word-level substrings in source order.
    ///
    /// Whitespace runs may come back as their own tokens; `word_tokenize`
    /// decides whether to keep them.
    fn segment(&self, text: &str) -> Result<Vec<String>>;

    /// Engine name used in diagnostics.
    fn name(&self) -> &str;
}

/// Tokenize `text` with `segmenter`, optionally excluding whitespace tokens.
///
/// With `keep_whitespace` off, whitespace-only tokens are discarded and the
/// remaining ones lose any surrounding spaces.
pub fn word_tokenize(
    segmenter: &dyn Segmenter,
    text: &str,
    keep_whitespace: bool,
) -> Result<Vec<String>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let segments = segmenter.segment(text)?;
    let total = segments.len();

    let tokens: Vec<String> = if keep_whitespace {
        segments
    } else {
        segments
            .into_iter()
            .filter(|token| !is_whitespace_token(token))
            .map(strip_spaces)
            .collect()
    };

    debug!(
        engine = segmenter.name(),
        segments = total,
        tokens = tokens.len(),
        "segmented text"
    );
    Ok(tokens)
}

fn is_whitespace_token(token: &str) -> bool {
    token.chars().all(char::is_whitespace)
}

fn strip_spaces(token: String) -> String {
    let stripped = token.trim_matches(' ');
    if stripped.len() == token.len() {
        token
    } else {
        stripped.to_string()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::engine::TokenizeError;
    use std::cell::Cell;

    /// Returns a fixed token list regardless of input.
    pub(crate) struct FixedSegmenter {
        pub tokens: Vec<&'static str>,
        pub calls: Cell<usize>,
    }

    impl FixedSegmenter {
        pub(crate) fn new(tokens: Vec<&'static str>) -> Self {
            Self {
                tokens,
                calls: Cell::new(0),
            }
        }
    }

    impl Segmenter for FixedSegmenter {
        fn segment(&self, _text: &str) -> Result<Vec<String>> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.tokens.iter().map(|t| t.to_string()).collect())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct FailingSegmenter;

    impl Segmenter for FailingSegmenter {
        fn segment(&self, _text: &str) -> Result<Vec<String>> {
            Err(TokenizeError::Segmentation("engine crashed".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_empty_text_skips_engine() {
        let segmenter = FixedSegmenter::new(vec!["ไม่", "ควร"]);
        let tokens = word_tokenize(&segmenter, "", false).unwrap();
        assert!(tokens.is_empty());
        assert_eq!(segmenter.calls.get(), 0);
    }

    #[test]
    fn test_whitespace_tokens_removed() {
        let segmenter = FixedSegmenter::new(vec!["แมว", " ", "วิ่ง", "\n", "\t ", "เร็ว"]);
        let tokens = word_tokenize(&segmenter, "แมว วิ่ง\nเร็ว", false).unwrap();
        assert_eq!(tokens, vec!["แมว", "วิ่ง", "เร็ว"]);
    }

    #[test]
    fn test_surrounding_spaces_stripped() {
        let segmenter = FixedSegmenter::new(vec![" แมว", "กิน "]);
        let tokens = word_tokenize(&segmenter, "แมว กิน", false).unwrap();
        assert_eq!(tokens, vec!["แมว", "กิน"]);
    }

    #[test]
    fn test_keep_whitespace_passes_through() {
        let segmenter = FixedSegmenter::new(vec!["แมว", " ", "กิน"]);
        let tokens = word_tokenize(&segmenter, "แมว กิน", true).unwrap();
        assert_eq!(tokens, vec!["แมว", " ", "กิน"]);
    }

    #[test]
    fn test_engine_error_propagates() {
        let result = word_tokenize(&FailingSegmenter, "ข้อความ", false);
        assert!(matches!(result, Err(TokenizeError::Segmentation(_))));
    }
}
