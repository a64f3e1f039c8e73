use std::collections::VecDeque;
use std::str::Split;

use crate::config::{AnalyzerConfig, NgramRange, StopWords};
use crate::error::Result;
use crate::vectorizer::stop_words;

/// Splits raw text into normalized terms.
///
/// Words are maximal runs of alphanumeric characters, lowercased. Words shorter
/// than `min_token_len` characters and stop words are dropped first, then every
/// n-gram in `ngram_range` is formed from adjacent surviving words and joined
/// with a single space.
///
/// # Examples
/// ```
/// use tf_idf_similarity::{AnalyzerConfig, Tokenizer};
/// let tokenizer = Tokenizer::new(&AnalyzerConfig::default()).unwrap();
/// let terms: Vec<String> = tokenizer.terms("The cat sat on the mat").collect();
/// assert_eq!(terms, vec!["cat", "sat", "cat sat", "mat", "sat mat"]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer {
    ngram_range: NgramRange,
    stop_words: StopList,
    min_token_len: usize,
}

#[derive(Debug, Clone)]
enum StopList {
    English,
    None,
    /// sorted, lowercased
    Custom(Vec<String>),
}

impl StopList {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        match self {
            StopList::English => stop_words::is_english_stop_word(word),
            StopList::None => false,
            StopList::Custom(list) => list.binary_search_by(|w| w.as_str().cmp(word)).is_ok(),
        }
    }
}

impl Tokenizer {
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        let stop_words = match &config.stop_words {
            StopWords::English => StopList::English,
            StopWords::None => StopList::None,
            StopWords::Custom(words) => {
                let mut list: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
                list.sort();
                list.dedup();
                StopList::Custom(list)
            }
        };
        Ok(Self {
            ngram_range: config.ngram_range,
            stop_words,
            min_token_len: config.min_token_len,
        })
    }

    /// Lazy term sequence for `text`.
    /// Calling this again on the same text yields the same sequence.
    pub fn terms<'a>(&'a self, text: &'a str) -> Terms<'a> {
        Terms {
            tokenizer: self,
            pieces: text.split(is_separator as fn(char) -> bool),
            window: VecDeque::with_capacity(self.ngram_range.max_n),
            pending: VecDeque::new(),
        }
    }

    /// Surviving words only, before n-gram formation
    pub fn words<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        text.split(is_separator as fn(char) -> bool)
            .filter_map(move |piece| self.normalize(piece))
    }

    fn normalize(&self, piece: &str) -> Option<String> {
        if piece.is_empty() {
            return None;
        }
        let word = piece.to_lowercase();
        if word.chars().count() < self.min_token_len || self.stop_words.contains(&word) {
            return None;
        }
        Some(word)
    }
}

#[inline]
fn is_separator(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Iterator returned by [`Tokenizer::terms`].
/// For each surviving word it yields the n-grams ending at that word, shortest first.
#[derive(Debug, Clone)]
pub struct Terms<'a> {
    tokenizer: &'a Tokenizer,
    pieces: Split<'a, fn(char) -> bool>,
    window: VecDeque<String>,
    pending: VecDeque<String>,
}

impl Iterator for Terms<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let NgramRange { min_n, max_n } = self.tokenizer.ngram_range;
        loop {
            if let Some(term) = self.pending.pop_front() {
                return Some(term);
            }
            let word = loop {
                let piece = self.pieces.next()?;
                if let Some(word) = self.tokenizer.normalize(piece) {
                    break word;
                }
            };
            if self.window.len() == max_n {
                self.window.pop_front();
            }
            self.window.push_back(word);

            let len = self.window.len();
            for n in min_n..=max_n.min(len) {
                let gram = self.window.range(len - n..).map(String::as_str).collect::<Vec<_>>().join(" ");
                self.pending.push_back(gram);
            }
        }
    }
}
