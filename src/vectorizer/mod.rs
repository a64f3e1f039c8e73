pub mod compare;
pub mod corpus;
pub mod evaluate;
pub mod serde;
pub mod stop_words;
pub mod term;
pub mod tfidf;
pub mod token;
pub mod vocabulary;

use std::marker::PhantomData;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::AnalyzerConfig;
use crate::error::{Error, Result};
use crate::vectorizer::{
    compare::SimilarityMatrix,
    corpus::Corpus,
    evaluate::report::SimilarityReport,
    serde::SimilarityData,
    term::TermFrequency,
    tfidf::{DefaultTFIDFEngine, DocumentVector, TFIDFEngine},
    token::Tokenizer,
    vocabulary::{Vocabulary, VocabularyBuilder},
};

/// Runs the similarity pipeline over a corpus.
///
/// Two explicit passes: the first builds the `Vocabulary`, the second weighs
/// every document against that fixed vocabulary. `E` selects the TF-IDF
/// calculation.
#[derive(Debug, Clone)]
pub struct SimilarityEngine<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    config: AnalyzerConfig,
    tokenizer: Tokenizer,
    _marker: PhantomData<fn() -> E>,
}

impl<E> SimilarityEngine<E>
where
    E: TFIDFEngine,
{
    /// Create a new engine; rejects an invalid configuration
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let tokenizer = Tokenizer::new(&config)?;
        Ok(Self {
            config,
            tokenizer,
            _marker: PhantomData,
        })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Tokenize, weigh and compare every document of `corpus`.
    ///
    /// The corpus is validated before any tokenization. An empty vocabulary is
    /// a degenerate but valid result (all similarities 0.0) unless
    /// `strict_vocabulary` is set.
    pub fn analyze(&self, corpus: &Corpus) -> Result<Analysis> {
        corpus.validate()?;

        let mut builder = VocabularyBuilder::new(&self.tokenizer);
        for text in corpus.texts() {
            builder.add(text);
        }
        let vocabulary = builder.build()?;

        if vocabulary.is_empty() {
            if self.config.strict_vocabulary {
                return Err(Error::EmptyVocabulary);
            }
            warn!(documents = corpus.doc_num(), "no terms survived tokenization, all similarities are 0.0");
        }

        let idf = E::idf_vec(&vocabulary);
        let tokenizer = &self.tokenizer;
        let texts: Vec<&str> = corpus.texts().collect();
        let frequencies: Vec<TermFrequency> = texts
            .par_iter()
            .map(|text| TermFrequency::from_terms(tokenizer.terms(text), &vocabulary))
            .collect();
        let vectors: Vec<DocumentVector> = frequencies
            .par_iter()
            .map(|freq| E::weigh(freq, &idf))
            .collect();
        let empty = vectors.iter().filter(|v| v.is_zero()).count();
        if empty > 0 {
            debug!(empty, "documents without surviving terms");
        }

        let matrix = SimilarityMatrix::from_vectors(&vectors);
        info!(
            documents = corpus.doc_num(),
            terms = vocabulary.len(),
            "similarity matrix computed"
        );

        Ok(Analysis {
            ids: corpus.ids().map(str::to_string).collect(),
            config: self.config.clone(),
            vocabulary,
            frequencies,
            vectors,
            matrix,
        })
    }
}

/// Result of one run: everything derived from the corpus, in document order
#[derive(Debug, Clone)]
pub struct Analysis {
    ids: Vec<String>,
    config: AnalyzerConfig,
    vocabulary: Vocabulary,
    frequencies: Vec<TermFrequency>,
    vectors: Vec<DocumentVector>,
    matrix: SimilarityMatrix,
}

impl Analysis {
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn frequencies(&self) -> &[TermFrequency] {
        &self.frequencies
    }

    pub fn vectors(&self) -> &[DocumentVector] {
        &self.vectors
    }

    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    /// True when no document had any surviving term
    pub fn is_degenerate(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// Similarity by document id
    pub fn similarity(&self, left: &str, right: &str) -> Option<f64> {
        let i = self.ids.iter().position(|id| id == left)?;
        let j = self.ids.iter().position(|id| id == right)?;
        Some(self.matrix.get(i, j))
    }

    /// Pair list and flags at `threshold`
    pub fn report(&self, threshold: f64) -> Result<SimilarityReport> {
        SimilarityReport::generate(&self.matrix, &self.ids, threshold)
    }

    /// Most frequent single words across the corpus, by total count.
    /// Ties keep vocabulary order.
    pub fn common_terms(&self, limit: usize) -> Vec<(&str, u64)> {
        let mut totals = vec![0u64; self.vocabulary.len()];
        for freq in &self.frequencies {
            for (index, count) in freq.iter() {
                totals[index] += count;
            }
        }
        let mut terms: Vec<(&str, u64)> = self
            .vocabulary
            .iter()
            .zip(totals)
            .filter(|((term, _), _)| !term.contains(' '))
            .map(|((term, _), total)| (term, total))
            .collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1));
        terms.truncate(limit);
        terms
    }

    /// Serializable snapshot including the report at `threshold`
    pub fn to_data(&self, threshold: f64) -> Result<SimilarityData> {
        Ok(SimilarityData {
            ids: self.ids.clone(),
            matrix: self.matrix.clone(),
            report: self.report(threshold)?,
            config: self.config.clone(),
        })
    }
}

/// Analyze `corpus` with the reference configuration
pub fn compute_similarity(corpus: &Corpus) -> Result<Analysis> {
    SimilarityEngine::<DefaultTFIDFEngine>::new(AnalyzerConfig::default())?.analyze(corpus)
}
