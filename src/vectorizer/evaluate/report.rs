use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::vectorizer::compare::SimilarityMatrix;

/// Similarity of one unordered document pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairScore {
    pub left: String,
    pub right: String,
    pub score: f64,
}

/// A pair at or above the threshold: possible plagiarism
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flag {
    pub left: String,
    pub right: String,
    pub score: f64,
}

/// Pair scores and flags for one threshold
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityReport {
    /// every pair i < j, i outer, j inner
    pub pairs: Vec<PairScore>,
    /// subsequence of `pairs` with score >= threshold
    pub flags: Vec<Flag>,
    pub threshold: f64,
}

impl SimilarityReport {
    /// Enumerate all pairs and flag those scoring at least `threshold`.
    ///
    /// The threshold is checked before anything is computed; NaN or a value
    /// outside [0, 1] is an error.
    pub fn generate<S: AsRef<str>>(matrix: &SimilarityMatrix, ids: &[S], threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::InvalidThreshold(threshold));
        }
        if ids.len() != matrix.size() {
            return Err(Error::ShapeMismatch { ids: ids.len(), size: matrix.size() });
        }

        let size = ids.len();
        let mut pairs = Vec::with_capacity(size * size.saturating_sub(1) / 2);
        for i in 0..size {
            for j in i + 1..size {
                pairs.push(PairScore {
                    left: ids[i].as_ref().to_string(),
                    right: ids[j].as_ref().to_string(),
                    score: matrix.get(i, j),
                });
            }
        }
        let flags = pairs
            .iter()
            .filter(|pair| pair.score >= threshold)
            .map(|pair| Flag { left: pair.left.clone(), right: pair.right.clone(), score: pair.score })
            .collect();

        Ok(Self { pairs, flags, threshold })
    }

    /// Pairs by descending score; ties keep enumeration order
    pub fn ranked(&self) -> Vec<&PairScore> {
        let mut ranked: Vec<&PairScore> = self.pairs.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    #[inline]
    pub fn is_flagged(&self, pair: &PairScore) -> bool {
        pair.score >= self.threshold
    }
}

/// Plain-text summary, one line per pair, followed by a warning line for
/// each flagged pair.
impl fmt::Display for SimilarityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pair in &self.pairs {
            writeln!(f, "{} ↔ {} : Similarity = {:.1}%", pair.left, pair.right, pair.score * 100.0)?;
            if self.is_flagged(pair) {
                writeln!(f, "⚠️ Possible plagiarism between '{}' and '{}'", pair.left, pair.right)?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for SimilarityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "SimilarityReport (threshold {}) [", self.threshold)?;
            for pair in &self.pairs {
                let mark = if self.is_flagged(pair) { " !" } else { "" };
                writeln!(f, "    {:?} / {:?}: {:.6}{}", pair.left, pair.right, pair.score, mark)?;
            }
            write!(f, "]")
        } else {
            f.debug_struct("SimilarityReport")
                .field("pairs", &self.pairs)
                .field("flags", &self.flags)
                .field("threshold", &self.threshold)
                .finish()
        }
    }
}
