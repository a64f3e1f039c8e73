use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::vectorizer::{compare::SimilarityMatrix, evaluate::report::SimilarityReport};

/// Serializable snapshot of one run for presentation layers
/// (heatmap of `matrix` labelled by `ids`, printed pair list, flags).
///
/// Holds no vectors or vocabulary; it is output, not state to resume from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityData {
    pub ids: Vec<String>,
    pub matrix: SimilarityMatrix,
    pub report: SimilarityReport,
    pub config: AnalyzerConfig,
}

impl SimilarityData {
    /// Encode as CBOR
    pub fn to_cbor_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_cbor::to_writer(writer, self)?;
        Ok(())
    }

    pub fn to_cbor_vec(&self) -> Result<Vec<u8>> {
        Ok(serde_cbor::to_vec(self)?)
    }

    /// Decode from CBOR
    pub fn from_cbor_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_cbor::from_reader(reader)?)
    }
}
