use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::vectorizer::token::Tokenizer;

/// Accumulates terms across the corpus, one document at a time.
///
/// Index assignment is first-seen order over the documents in the order they
/// are added, so identical input always gives identical indices.
#[derive(Debug)]
pub struct VocabularyBuilder<'t> {
    tokenizer: &'t Tokenizer,
    /// term -> document frequency; the map position is the term index
    doc_freqs: IndexMap<Box<str>, u64>,
    doc_num: u64,
}

impl<'t> VocabularyBuilder<'t> {
    pub fn new(tokenizer: &'t Tokenizer) -> Self {
        Self {
            tokenizer,
            doc_freqs: IndexMap::new(),
            doc_num: 0,
        }
    }

    /// Tokenize one document and fold its terms into the vocabulary.
    /// Document frequency grows by one per document, not per occurrence.
    pub fn add(&mut self, text: &str) -> &mut Self {
        let mut seen: HashSet<usize> = HashSet::new();
        for term in self.tokenizer.terms(text) {
            let entry = self.doc_freqs.entry(term.into_boxed_str());
            let index = entry.index();
            let doc_freq = entry.or_insert(0);
            if seen.insert(index) {
                *doc_freq += 1;
            }
        }
        self.doc_num += 1;
        self
    }

    /// Finish the pass.
    /// Fewer than two documents cannot be compared.
    pub fn build(self) -> Result<Vocabulary> {
        if self.doc_num < 2 {
            return Err(Error::InsufficientCorpus { found: self.doc_num as usize });
        }
        debug!(terms = self.doc_freqs.len(), documents = self.doc_num, "vocabulary built");
        Ok(Vocabulary {
            doc_freqs: self.doc_freqs,
            doc_num: self.doc_num,
        })
    }
}

/// Immutable term table: term -> (index, document frequency)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(with = "indexmap::map::serde_seq")]
    doc_freqs: IndexMap<Box<str>, u64>,
    doc_num: u64,
}

impl Vocabulary {
    /// Number of distinct terms
    #[inline]
    pub fn len(&self) -> usize {
        self.doc_freqs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.doc_freqs.is_empty()
    }

    /// Number of documents the vocabulary was built from
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.doc_freqs.get_index_of(term)
    }

    pub fn term(&self, index: usize) -> Option<&str> {
        self.doc_freqs.get_index(index).map(|(term, _)| &**term)
    }

    /// Document frequency by index, 0 when out of range
    pub fn doc_freq(&self, index: usize) -> u64 {
        self.doc_freqs.get_index(index).map_or(0, |(_, df)| *df)
    }

    /// (term, document frequency) in index order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.doc_freqs.iter().map(|(term, df)| (&**term, *df))
    }
}
