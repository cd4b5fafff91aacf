use serde::Serialize;

/// First-seen unique, non-empty tokens, capped at a limit.
///
/// Only `collect` builds one, so no instance ever holds a duplicate or an
/// empty string, and the order always follows the token stream.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Keywords(Vec<String>);

impl Keywords {
    /// Scan `tokens` in order, keeping each distinct non-empty token once.
    /// Scanning stops as soon as `limit` tokens are held.
    pub fn collect<I, S>(tokens: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String> + AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::with_capacity(limit.min(16));
        if limit == 0 {
            return Self(unique);
        }

        for token in tokens {
            let text = token.as_ref();
            if !text.is_empty() && !unique.iter().any(|seen| seen == text) {
                unique.push(token.into());
            }
            if unique.len() >= limit {
                break;
            }
        }

        Self(unique)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Keywords {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
