use crate::conf::ConfigError;
use ahash::AHashSet;
use std::path::Path;

/// Tokens excluded from word statistics. Loaded once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: AHashSet<String>,
}

impl StopWords {
    /// One word per line; surrounding whitespace and case are ignored.
    pub fn parse(contents: &str) -> Self {
        let words = contents
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::StopWords {
            path: path.to_path_buf(),
            source: e,
        })?;

        let stop_words = Self::parse(&contents);
        tracing::debug!(
            path = %path.display(),
            count = stop_words.len(),
            "stop words loaded"
        );
        Ok(stop_words)
    }

    /// `token` is expected to be lowercased already.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<String> for StopWords {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }
}
