//! Sparse storage of hopping amplitudes between lattice sites.

use std::collections::BTreeMap;
use ndarray as nd;
use num_complex::Complex64 as C64;
use num_traits::Zero;
use crate::error::NumericalError;

/// A tight-binding model on `n` sites: a mapping from `(to, from)` site index
/// pairs to complex hopping amplitudes.
///
/// Amplitudes added more than once at the same index pair accumulate.
/// Off-diagonal terms are usually added through [`Self::add_hc`], which keeps
/// the model Hermitian by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct LatticeModel {
    n: usize,
    amps: BTreeMap<(usize, usize), C64>,
}

impl LatticeModel {
    /// Create an empty model on `n` sites.
    pub fn new(n: usize) -> Self {
        Self { n, amps: BTreeMap::new() }
    }

    /// Number of sites.
    pub fn basis_size(&self) -> usize { self.n }

    /// Number of stored (non-accumulated) amplitudes.
    pub fn len(&self) -> usize { self.amps.len() }

    /// Return `true` if no amplitudes are stored.
    pub fn is_empty(&self) -> bool { self.amps.is_empty() }

    /// Add `amp` to the amplitude at `(to, from)`.
    ///
    /// *Panics if either index is out of bounds*.
    pub fn add(&mut self, amp: C64, to: usize, from: usize) -> &mut Self {
        assert!(
            to < self.n && from < self.n,
            "LatticeModel::add: index ({}, {}) out of bounds for {} sites",
            to, from, self.n,
        );
        *self.amps.entry((to, from)).or_insert_with(C64::zero) += amp;
        self
    }

    /// Add `amp` at `(to, from)` along with its Hermitian conjugate at
    /// `(from, to)`.
    ///
    /// If `to == from`, this adds `amp + amp*` to the diagonal.
    ///
    /// *Panics if either index is out of bounds*.
    pub fn add_hc(&mut self, amp: C64, to: usize, from: usize) -> &mut Self {
        self.add(amp, to, from).add(amp.conj(), from, to)
    }

    /// Get the amplitude at `(to, from)`, zero if none was added.
    pub fn get(&self, to: usize, from: usize) -> C64 {
        self.amps.get(&(to, from)).copied().unwrap_or_else(C64::zero)
    }

    /// Iterate over all stored amplitudes in row-major index order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), C64)> + '_ {
        self.amps.iter().map(|(idx, amp)| (*idx, *amp))
    }

    /// Return `true` if every amplitude equals the conjugate of its transpose
    /// partner to within `tol`.
    pub fn is_hermitian(&self, tol: f64) -> bool {
        self.iter()
            .all(|((i, j), amp)| (amp - self.get(j, i).conj()).norm() <= tol)
    }

    /// Convert to a dense complex matrix.
    pub fn to_dense(&self) -> nd::Array2<C64> {
        let mut H: nd::Array2<C64> = nd::Array2::zeros((self.n, self.n));
        self.iter().for_each(|((i, j), amp)| { H[[i, j]] = amp; });
        H
    }

    /// Convert to a dense real matrix, failing if any amplitude carries an
    /// imaginary part larger than `tol` in magnitude.
    pub fn to_real(&self, tol: f64) -> Result<nd::Array2<f64>, NumericalError> {
        let mut H: nd::Array2<f64> = nd::Array2::zeros((self.n, self.n));
        for ((i, j), amp) in self.iter() {
            if amp.im.abs() > tol {
                return Err(NumericalError::ComplexAmplitude(i, j, amp.im));
            }
            H[[i, j]] = amp.re;
        }
        Ok(H)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hermitian_by_construction() {
        let mut model = LatticeModel::new(3);
        model
            .add(C64::from(1.0), 0, 0)
            .add_hc(C64::new(-0.5, 0.25), 1, 0)
            .add_hc(C64::from(-0.5), 2, 1);
        assert_eq!(model.len(), 5);
        assert!(model.is_hermitian(0.0));
        assert_eq!(model.get(0, 1), C64::new(-0.5, -0.25));
        assert_eq!(model.get(2, 0), C64::zero());

        model.add(C64::from(1.0), 2, 0);
        assert!(!model.is_hermitian(1e-12));
    }

    #[test]
    fn amplitudes_accumulate() {
        let mut model = LatticeModel::new(2);
        model.add(C64::from(1.0), 1, 1).add(C64::from(2.5), 1, 1);
        assert_eq!(model.get(1, 1), C64::from(3.5));
        model.add_hc(C64::from(1.0), 0, 0);
        assert_eq!(model.get(0, 0), C64::from(2.0));
    }

    #[test]
    fn dense_conversions() {
        let mut model = LatticeModel::new(2);
        model.add(C64::from(2.0), 0, 0).add_hc(C64::from(-1.0), 1, 0);
        let H = model.to_real(0.0).unwrap();
        assert_eq!(H, nd::array![[2.0, -1.0], [-1.0, 0.0]]);
        let Hc = model.to_dense();
        assert_eq!(Hc[[0, 1]], C64::from(-1.0));

        model.add_hc(C64::new(0.0, 1e-3), 1, 0);
        assert!(matches!(
            model.to_real(1e-6),
            Err(NumericalError::ComplexAmplitude(_, _, _)),
        ));
    }

    #[test]
    #[should_panic]
    fn out_of_bounds() {
        LatticeModel::new(2).add(C64::from(1.0), 2, 0);
    }
}
