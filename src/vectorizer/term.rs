use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::utils::math::vector::ZeroSpVec;
use crate::vectorizer::vocabulary::Vocabulary;

/// TermFrequency struct
/// Raw occurrence counts of one document's terms, keyed by vocabulary index.
///
/// Terms missing from the vocabulary are ignored; with the vocabulary built
/// from the same corpus this never happens.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TermFrequency {
    counts: ZeroSpVec<u64>,
    total_term_count: u64,
}

impl TermFrequency {
    /// Count `terms` against `vocabulary`
    pub fn from_terms<I>(terms: I, vocabulary: &Vocabulary) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        // insertion order is first occurrence in the document, so this is deterministic
        let mut counts: IndexMap<usize, u64> = IndexMap::new();
        let mut total_term_count = 0;
        for term in terms {
            if let Some(index) = vocabulary.index_of(&term) {
                *counts.entry(index).or_insert(0) += 1;
                total_term_count += 1;
            }
        }
        Self {
            counts: ZeroSpVec::from_pairs(vocabulary.len(), counts),
            total_term_count,
        }
    }

    /// Count of the term at `index`
    #[inline]
    pub fn term_count(&self, index: usize) -> u64 {
        self.counts.get(index)
    }

    /// Sum of all counts
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Number of distinct terms present
    #[inline]
    pub fn term_num(&self) -> usize {
        self.counts.nnz()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_zero()
    }

    pub fn counts(&self) -> &ZeroSpVec<u64> {
        &self.counts
    }

    /// (index, count) in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.raw_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;
    use crate::vectorizer::{token::Tokenizer, vocabulary::VocabularyBuilder};

    #[test]
    fn counts_every_occurrence() {
        let tokenizer = Tokenizer::new(&AnalyzerConfig::default()).unwrap();
        let docs = ["cat cat dog", "dog bird"];
        let mut builder = VocabularyBuilder::new(&tokenizer);
        for doc in docs {
            builder.add(doc);
        }
        let vocab = builder.build().unwrap();

        let freq = TermFrequency::from_terms(tokenizer.terms(docs[0]), &vocab);
        let cat = vocab.index_of("cat").unwrap();
        let dog = vocab.index_of("dog").unwrap();
        let bird = vocab.index_of("bird").unwrap();
        assert_eq!(freq.term_count(cat), 2);
        assert_eq!(freq.term_count(dog), 1);
        assert_eq!(freq.term_count(bird), 0);
        assert_eq!(freq.term_count(vocab.index_of("cat cat").unwrap()), 1);
        assert_eq!(freq.term_count(vocab.index_of("cat dog").unwrap()), 1);
        assert_eq!(freq.term_sum(), 5);
        assert_eq!(freq.term_num(), 4);
        assert!(freq.iter().map(|(i, _)| i).collect::<Vec<_>>().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_document() {
        let tokenizer = Tokenizer::new(&AnalyzerConfig::default()).unwrap();
        let mut builder = VocabularyBuilder::new(&tokenizer);
        builder.add("sunlight").add("");
        let vocab = builder.build().unwrap();
        let freq = TermFrequency::from_terms(tokenizer.terms(""), &vocab);
        assert!(freq.is_empty());
        assert_eq!(freq.term_sum(), 0);
    }
}
