use std::cmp::Ordering;

use num::{Float, Num};

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// ドット積を計算するメソッド
    ///
    /// # Arguments
    /// * `other` - 他のベクトル
    ///
    /// # Returns
    /// * `f64` - ドット積の結果
    #[inline]
    pub fn dot(&self, other: &Self) -> f64
    where
        N: Into<f64>,
    {
        let self_inds = self.indices();
        let self_vals = self.values();
        let other_inds = other.indices();
        let other_vals = other.values();

        let mut result = 0_f64;
        if self_inds.is_empty() || other_inds.is_empty() {
            return result;
        }

        let mut i = 0;
        let mut j = 0;
        while i < self_inds.len() && j < other_inds.len() {
            match self_inds[i].cmp(&other_inds[j]) {
                Ordering::Equal => {
                    result += self_vals[i].into() * other_vals[j].into();
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        result
    }

    /// ユークリッドノルム
    #[inline]
    pub fn norm(&self) -> f64
    where
        N: Into<f64>,
    {
        self.values()
            .iter()
            .map(|&val| {
                let val: f64 = val.into();
                val * val
            })
            .sum::<f64>()
            .sqrt()
    }
}

impl<N> ZeroSpVec<N>
where
    N: Float,
{
    /// Scale to unit Euclidean norm in place.
    /// A zero-norm vector is left untouched.
    pub fn l2_normalize(&mut self) {
        let norm = self
            .vals
            .iter()
            .fold(N::zero(), |acc, &val| acc + val * val)
            .sqrt();
        if norm == N::zero() || !norm.is_finite() {
            return;
        }
        for val in self.vals.iter_mut() {
            *val = *val / norm;
        }
    }
}
