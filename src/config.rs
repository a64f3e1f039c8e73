use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Inclusive range of n-gram lengths emitted by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgramRange {
    pub min_n: usize,
    pub max_n: usize,
}

impl NgramRange {
    pub fn new(min_n: usize, max_n: usize) -> Result<Self> {
        if min_n == 0 || min_n > max_n {
            return Err(Error::InvalidNgramRange { min_n, max_n });
        }
        Ok(Self { min_n, max_n })
    }
}

impl Default for NgramRange {
    fn default() -> Self {
        Self { min_n: 1, max_n: 2 }
    }
}

/// Stop-word policy applied before n-gram formation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StopWords {
    #[default]
    English,
    None,
    /// Caller-supplied list, compared after lowercasing
    Custom(Vec<String>),
}

/// Settings for one analysis run.
///
/// `Default` reproduces the reference vectorizer: unigrams and bigrams,
/// English stop words, tokens of two or more characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub ngram_range: NgramRange,
    pub stop_words: StopWords,
    pub min_token_len: usize,
    /// Fail with `EmptyVocabulary` instead of returning an all-zero matrix
    pub strict_vocabulary: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            ngram_range: NgramRange::default(),
            stop_words: StopWords::English,
            min_token_len: 2,
            strict_vocabulary: false,
        }
    }
}

impl AnalyzerConfig {
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Result<Self> {
        self.ngram_range = NgramRange::new(min_n, max_n)?;
        Ok(self)
    }

    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len;
        self
    }

    pub fn with_strict_vocabulary(mut self, strict: bool) -> Self {
        self.strict_vocabulary = strict;
        self
    }

    /// Re-check fields that may have been set directly or deserialized
    pub fn validate(&self) -> Result<()> {
        NgramRange::new(self.ngram_range.min_n, self.ngram_range.max_n).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_settings() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.ngram_range, NgramRange { min_n: 1, max_n: 2 });
        assert_eq!(config.stop_words, StopWords::English);
        assert_eq!(config.min_token_len, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_ngram_ranges() {
        assert!(matches!(NgramRange::new(0, 2), Err(Error::InvalidNgramRange { min_n: 0, max_n: 2 })));
        assert!(matches!(NgramRange::new(3, 2), Err(Error::InvalidNgramRange { .. })));
        let config = AnalyzerConfig { ngram_range: NgramRange { min_n: 2, max_n: 1 }, ..Default::default() };
        assert!(config.validate().is_err());
    }
}
