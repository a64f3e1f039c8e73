use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Ordered collection of documents for one run.
///
/// Keeps document id and raw text in insertion order; that order is the
/// document ordering used by every later stage (vocabulary indices,
/// matrix rows, pair enumeration). Text is never mutated after it is added.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: IndexMap<Box<str>, Box<str>>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self { documents: IndexMap::new() }
    }

    /// Build from (id, text) pairs in iteration order
    pub fn from_pairs<I, K, T>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<String>,
    {
        let mut corpus = Self::new();
        for (id, text) in pairs {
            corpus.add_document(id, text)?;
        }
        Ok(corpus)
    }

    /// Add a document.
    /// Ids must be non-empty and unique within the corpus.
    pub fn add_document(&mut self, id: impl Into<String>, text: impl Into<String>) -> Result<()> {
        let id: String = id.into();
        if id.is_empty() {
            return Err(Error::EmptyDocumentId);
        }
        if self.documents.contains_key(id.as_str()) {
            return Err(Error::DuplicateDocument(id));
        }
        self.documents.insert(id.into_boxed_str(), text.into().into_boxed_str());
        Ok(())
    }

    /// A similarity run needs at least two documents
    pub fn validate(&self) -> Result<()> {
        if self.documents.len() < 2 {
            return Err(Error::InsufficientCorpus { found: self.documents.len() });
        }
        Ok(())
    }

    #[inline]
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.documents.get(id).map(|text| &**text)
    }

    /// (id, text) in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.documents.iter().map(|(id, text)| (&**id, &**text))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(|id| &**id)
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.documents.values().map(|text| &**text)
    }
}
