/// This crate scores pairwise document similarity with TF-IDF vectors and
/// flags pairs that are likely derived from one another.
pub mod config;
pub mod error;
pub mod loader;
pub mod utils;
pub mod vectorizer;

/// Similarity Engine
/// The top-level struct of this crate. It runs the whole pipeline over a
/// `Corpus` in two explicit passes:
/// - pass 1 tokenizes every document and builds an immutable `Vocabulary`
/// - pass 2 weighs each document against that vocabulary (in parallel)
///   and compares every pair of unit vectors (in parallel)
///
/// `SimilarityEngine<E>` is generic over the TF-IDF calculation engine `E`.
/// The result is an `Analysis` holding ids, vocabulary, vectors and the
/// similarity matrix, from which reports are generated.
pub use vectorizer::{compute_similarity, Analysis, SimilarityEngine};

/// Corpus
/// Ordered mapping of document id to raw text for one run.
/// Ids are non-empty and unique; at least two documents are needed.
pub use vectorizer::corpus::Corpus;

/// Tokenizer
/// Lowercases, splits on non-alphanumeric runs, drops short tokens and stop
/// words, then forms n-grams from adjacent surviving words.
pub use vectorizer::token::{Terms, Tokenizer};

/// Vocabulary and its builder
/// Terms get stable indices in first-seen order; document frequency counts
/// each document at most once.
pub use vectorizer::vocabulary::{Vocabulary, VocabularyBuilder};

/// Term Frequency structure
/// Raw per-document counts keyed by vocabulary index.
pub use vectorizer::term::TermFrequency;

/// TF IDF Calculation Engine Trait
/// `DefaultTFIDFEngine` uses raw counts, `SublinearTFIDFEngine` uses
/// 1 + ln(count). Both use the smoothed IDF ln((1 + N) / (1 + df)) + 1 and
/// L2-normalize.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, DocumentVector, SublinearTFIDFEngine, TFIDFEngine};

/// Similarity Matrix
/// Symmetric, values in [0, 1].
pub use vectorizer::compare::SimilarityMatrix;

/// Report structures
/// - `SimilarityReport`: every pair in combinatorial order plus flags
/// - `PairScore`: one pair and its score
/// - `Flag`: a pair at or above the threshold (possible plagiarism)
pub use vectorizer::evaluate::report::{Flag, PairScore, SimilarityReport};

/// Export data for presentation layers
/// # Serialization
/// CBOR via `to_cbor_writer` / `from_cbor_reader`.
pub use vectorizer::serde::SimilarityData;

pub use config::{AnalyzerConfig, NgramRange, StopWords};
pub use error::{Error, Result};
pub use loader::load_dir;
