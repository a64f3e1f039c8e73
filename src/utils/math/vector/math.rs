use std::{cmp::Ordering, ops::AddAssign};

use num::{Float, Num};

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// Dot product by merge-joining the two index lists.
    /// Accumulates in ascending index order, so the result is reproducible.
    ///
    /// # Arguments
    /// * `other` - vector of the same dimension
    #[inline]
    pub fn dot<R>(&self, other: &Self) -> R
    where
        R: Num + AddAssign + Copy,
        N: Into<R>,
    {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );

        let mut result = R::zero();
        if self.is_zero() || other.is_zero() {
            return result;
        }

        let mut a = self.raw_iter().peekable();
        let mut b = other.raw_iter().peekable();
        while let (Some(&(ia, va)), Some(&(ib, vb))) = (a.peek(), b.peek()) {
            match ia.cmp(&ib) {
                Ordering::Equal => {
                    result += va.into() * vb.into();
                    a.next();
                    b.next();
                }
                Ordering::Less => {
                    a.next();
                }
                Ordering::Greater => {
                    b.next();
                }
            }
        }
        result
    }

    #[inline]
    pub fn norm_sq<R>(&self) -> R
    where
        R: Num + AddAssign + Copy,
        N: Into<R>,
    {
        let mut result = R::zero();
        for &v in self.values() {
            let v: R = v.into();
            result += v * v;
        }
        result
    }
}

impl<N> ZeroSpVec<N>
where
    N: Float + AddAssign,
{
    /// Euclidean norm
    #[inline]
    pub fn norm(&self) -> N {
        let mut sum = N::zero();
        for &v in self.values() {
            sum += v * v;
        }
        sum.sqrt()
    }

    /// Unit-length copy of this vector.
    /// A vector with zero norm stays the zero vector.
    pub fn l2_normalized(&self) -> Self {
        let norm = self.norm();
        if norm.is_zero() {
            return ZeroSpVec::new(self.len());
        }
        self.map_values(|_, v| v / norm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_skips_disjoint_indices() {
        let a = ZeroSpVec::from_pairs(6, vec![(0, 1.0), (2, 2.0), (5, 3.0)]);
        let b = ZeroSpVec::from_pairs(6, vec![(1, 4.0), (2, 5.0), (5, 0.5)]);
        let d: f64 = a.dot(&b);
        assert_eq!(d, 2.0 * 5.0 + 3.0 * 0.5);
    }

    #[test]
    fn dot_with_zero_vector_is_zero() {
        let a = ZeroSpVec::from_pairs(3, vec![(0, 1.0), (2, 2.0)]);
        let z = ZeroSpVec::new(3);
        assert_eq!(a.dot::<f64>(&z), 0.0);
        assert_eq!(z.dot::<f64>(&a), 0.0);
    }

    #[test]
    fn normalization() {
        let a = ZeroSpVec::from_pairs(4, vec![(1, 3.0f64), (3, 4.0)]);
        assert_eq!(a.norm(), 5.0);
        assert_eq!(a.norm_sq::<f64>(), 25.0);
        let unit = a.l2_normalized();
        assert!((unit.norm() - 1.0).abs() < 1e-12);
        assert_eq!(unit.get(1), 0.6);

        let zero: ZeroSpVec<f64> = ZeroSpVec::new(4);
        assert!(zero.l2_normalized().is_zero());
    }
}
