use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Fewer than two documents were supplied
    #[error("need at least 2 documents to compare, found {found}")]
    InsufficientCorpus { found: usize },

    /// Every document was empty or made only of stop words
    #[error("vocabulary is empty: no terms survived tokenization")]
    EmptyVocabulary,

    #[error("threshold {0} is outside [0, 1]")]
    InvalidThreshold(f64),

    #[error("document identifier must not be empty")]
    EmptyDocumentId,

    #[error("duplicate document identifier {0:?}")]
    DuplicateDocument(String),

    #[error("invalid n-gram range ({min_n}, {max_n})")]
    InvalidNgramRange { min_n: usize, max_n: usize },

    #[error("{ids} document ids given for a {size}x{size} similarity matrix")]
    ShapeMismatch { ids: usize, size: usize },

    #[error("folder {0:?} not found")]
    MissingDirectory(PathBuf),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Cbor(#[from] serde_cbor::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
