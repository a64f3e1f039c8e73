use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::vectorizer::tfidf::DocumentVector;

/// Square, symmetric matrix of pairwise cosine similarities, row-major.
///
/// Entries lie in [0, 1]. The diagonal is 1.0 for a document with terms and
/// 0.0 for one whose vector is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Pairwise dot products of unit-length (or zero) vectors.
    ///
    /// Only the upper triangle is computed; each rayon task owns one row
    /// buffer, and the rows are mirrored into the full matrix afterwards.
    pub fn from_vectors(vectors: &[DocumentVector]) -> Self {
        let size = vectors.len();
        let upper: Vec<Vec<f64>> = (0..size)
            .into_par_iter()
            .map(|i| {
                vectors[i + 1..]
                    .iter()
                    .map(|other| vectors[i].dot::<f64>(other).clamp(0.0, 1.0))
                    .collect()
            })
            .collect();

        let mut values = vec![0.0; size * size];
        for (i, row) in upper.into_iter().enumerate() {
            values[i * size + i] = if vectors[i].is_zero() { 0.0 } else { 1.0 };
            for (offset, score) in row.into_iter().enumerate() {
                let j = i + 1 + offset;
                values[i * size + j] = score;
                values[j * size + i] = score;
            }
        }
        Self { size, values }
    }

    /// Number of documents (rows and columns)
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Similarity of documents `i` and `j`.
    ///
    /// # Panics
    /// If either position is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.size && j < self.size, "({i}, {j}) out of range for size {}", self.size);
        self.values[i * self.size + j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact(0) panics; an empty matrix has no rows
        self.values.chunks_exact(self.size.max(1))
    }

    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tolerance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(len: usize, pairs: Vec<(usize, f64)>) -> DocumentVector {
        DocumentVector::from_pairs(len, pairs).l2_normalized()
    }

    #[test]
    fn symmetric_bounded_with_unit_diagonal() {
        let vectors = vec![
            unit(4, vec![(0, 1.0), (1, 2.0)]),
            unit(4, vec![(1, 1.0), (2, 1.0)]),
            unit(4, vec![(3, 5.0)]),
            unit(4, vec![(0, 1.0), (1, 2.0)]),
        ];
        let m = SimilarityMatrix::from_vectors(&vectors);
        assert_eq!(m.size(), 4);
        assert!(m.is_symmetric(0.0));
        for i in 0..4 {
            assert_eq!(m.get(i, i), 1.0);
            for j in 0..4 {
                assert!((0.0..=1.0).contains(&m.get(i, j)));
            }
        }
        assert_eq!(m.get(0, 2), 0.0);
        assert!((m.get(0, 3) - 1.0).abs() < 1e-12);
        let expected = 2.0 / (5.0f64.sqrt() * 2.0f64.sqrt());
        assert!((m.get(0, 1) - expected).abs() < 1e-12);
        assert_eq!(m.row(1).len(), 4);
        assert_eq!(m.rows().count(), 4);
    }

    #[test]
    fn zero_vector_scores_zero_everywhere() {
        let vectors = vec![unit(2, vec![(0, 1.0)]), DocumentVector::new(2), unit(2, vec![(0, 3.0), (1, 1.0)])];
        let m = SimilarityMatrix::from_vectors(&vectors);
        assert!(m.row(1).iter().all(|&s| s == 0.0));
        assert_eq!(m.get(0, 1), 0.0);
        assert_eq!(m.get(2, 1), 0.0);
    }

    #[test]
    fn empty_input() {
        let m = SimilarityMatrix::from_vectors(&[]);
        assert_eq!(m.size(), 0);
        assert_eq!(m.rows().count(), 0);
    }
}
