pub mod math;

use num::Num;
use serde::{Deserialize, Serialize};

use crate::utils::sort::sort_by_index;

/// ZeroSpVec is a sparse vector whose implicit entries are zero.
/// Non-zero entries are kept as parallel `inds`/`vals` arrays,
/// sorted by ascending index with no duplicate indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroSpVec<N>
where
    N: Num + Copy,
{
    len: usize,
    inds: Vec<u32>,
    vals: Vec<N>,
}

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// All-zero vector of dimension `len`
    pub fn new(len: usize) -> Self {
        Self { len, inds: Vec::new(), vals: Vec::new() }
    }

    /// Build from unsorted (index, value) pairs.
    /// Indices must be unique and below `len`; zero values are dropped.
    pub fn from_pairs(len: usize, pairs: impl IntoIterator<Item = (usize, N)>) -> Self {
        let (mut inds, mut vals): (Vec<u32>, Vec<N>) = pairs
            .into_iter()
            .filter(|(_, v)| !v.is_zero())
            .map(|(i, v)| {
                debug_assert!(i < len, "index {i} out of range for length {len}");
                (i as u32, v)
            })
            .unzip();
        sort_by_index(&mut inds, &mut vals);
        debug_assert!(inds.windows(2).all(|w| w[0] < w[1]), "duplicate index");
        Self { len, inds, vals }
    }

    /// Dimension
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of stored non-zero entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.inds.is_empty()
    }

    /// Value at `index`, zero when absent
    pub fn get(&self, index: usize) -> N {
        match self.inds.binary_search(&(index as u32)) {
            Ok(pos) => self.vals[pos],
            Err(_) => N::zero(),
        }
    }

    /// Non-zero entries in ascending index order
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.inds.iter().zip(self.vals.iter()).map(|(&i, &v)| (i as usize, v))
    }

    pub fn values(&self) -> &[N] {
        &self.vals
    }

    /// Apply `f` to every stored value, keeping the sparsity pattern.
    /// Entries mapped to zero are dropped.
    pub fn map_values<M, F>(&self, mut f: F) -> ZeroSpVec<M>
    where
        M: Num + Copy,
        F: FnMut(usize, N) -> M,
    {
        let mut inds = Vec::with_capacity(self.nnz());
        let mut vals = Vec::with_capacity(self.nnz());
        for (i, v) in self.raw_iter() {
            let mapped = f(i, v);
            if !mapped.is_zero() {
                inds.push(i as u32);
                vals.push(mapped);
            }
        }
        ZeroSpVec { len: self.len, inds, vals }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_sorts_and_drops_zeros() {
        let v = ZeroSpVec::from_pairs(10, vec![(7, 2.0), (1, 0.0), (3, 1.5), (0, 4.0)]);
        assert_eq!(v.len(), 10);
        assert_eq!(v.nnz(), 3);
        assert_eq!(v.raw_iter().collect::<Vec<_>>(), vec![(0, 4.0), (3, 1.5), (7, 2.0)]);
        assert_eq!(v.get(3), 1.5);
        assert_eq!(v.get(4), 0.0);
    }

    #[test]
    fn zero_vector() {
        let v: ZeroSpVec<u64> = ZeroSpVec::new(5);
        assert!(v.is_zero());
        assert_eq!(v.get(2), 0);
    }

    #[test]
    fn map_values_changes_type() {
        let counts: ZeroSpVec<u64> = ZeroSpVec::from_pairs(4, vec![(2, 3u64), (0, 1)]);
        let weights: ZeroSpVec<f64> = counts.map_values(|i, c| c as f64 * (i as f64 + 1.0));
        assert_eq!(weights.raw_iter().collect::<Vec<_>>(), vec![(0, 1.0), (2, 9.0)]);
    }
}
