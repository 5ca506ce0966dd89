pub mod math;

use num::Num;

/// ZeroSpVec is a sparse vector that treats zero elements as absent.
/// It holds `inds` and `vals`:
/// `inds` keeps the position of each stored element,
/// `vals` keeps its value.
///
/// Stored positions are guaranteed to be strictly ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroSpVec<N>
where
    N: Num,
{
    inds: Vec<usize>,
    vals: Vec<N>,
    len: usize,
}

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    #[inline]
    pub fn new() -> Self {
        ZeroSpVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len: 0,
        }
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        ZeroSpVec {
            inds: Vec::with_capacity(cap),
            vals: Vec::with_capacity(cap),
            len: 0,
        }
    }

    /// Build a vector of dimension `len` from `(index, value)` pairs in any order.
    /// Zero values are dropped.
    ///
    /// # Arguments
    /// * `len` - dimension of the vector
    /// * `pairs` - elements, each index must be unique and `< len`
    pub fn from_unsorted(len: usize, mut pairs: Vec<(usize, N)>) -> Self {
        pairs.retain(|(_, val)| *val != N::zero());
        pairs.sort_unstable_by_key(|(idx, _)| *idx);
        debug_assert!(
            pairs.windows(2).all(|w| w[0].0 < w[1].0),
            "duplicate index in sparse vector input"
        );
        debug_assert!(pairs.last().map_or(true, |(idx, _)| *idx < len));
        let (inds, vals) = pairs.into_iter().unzip();
        ZeroSpVec { inds, vals, len }
    }

    /// dense push: appends one dimension, storing it only when non-zero
    #[inline]
    pub fn push(&mut self, elem: N) {
        if elem != N::zero() {
            self.inds.push(self.len);
            self.vals.push(elem);
        }
        self.len += 1;
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&N> {
        if index >= self.len {
            return None;
        }
        match self.inds.binary_search(&index) {
            Ok(pos) => self.vals.get(pos),
            Err(_) => None,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// dimension
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// number of stored (non-zero) elements
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.inds
    }

    #[inline]
    pub fn values(&self) -> &[N] {
        &self.vals
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.inds.shrink_to_fit();
        self.vals.shrink_to_fit();
    }
}

impl<N> Default for ZeroSpVec<N>
where
    N: Num + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> From<Vec<N>> for ZeroSpVec<N>
where
    N: Num + Copy,
{
    fn from(dense: Vec<N>) -> Self {
        let mut vec = ZeroSpVec::with_capacity(dense.len());
        for elem in dense {
            vec.push(elem);
        }
        vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_skips_zeros_but_counts_dimension() {
        let vec: ZeroSpVec<f32> = ZeroSpVec::from(vec![0.0, 1.5, 0.0, 2.0]);
        assert_eq!(vec.len(), 4);
        assert_eq!(vec.nnz(), 2);
        assert_eq!(vec.indices(), &[1, 3]);
        assert_eq!(vec.get(1), Some(&1.5));
        assert_eq!(vec.get(2), None);
        assert_eq!(vec.get(9), None);
    }

    #[test]
    fn from_unsorted_orders_indices() {
        let vec = ZeroSpVec::from_unsorted(10, vec![(7, 1.0_f64), (2, 3.0), (5, 0.0)]);
        assert_eq!(vec.indices(), &[2, 7]);
        assert_eq!(vec.values(), &[3.0, 1.0]);
        assert_eq!(vec.len(), 10);
    }
}
