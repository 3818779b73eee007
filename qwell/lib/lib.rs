#![allow(non_snake_case)]

//! Computes the lowest electron subband energies of a one-dimensional
//! AlGaAs/GaAs/AlGaAs quantum well as a function of in-plane wavevector using
//! an effective-mass tight-binding discretization, and renders the resulting
//! dispersion.
//!
//! The pipeline runs strictly forward:
//! - [`units`]: natural unit system and derived constants (ħ, *m*ₑ, ...)
//! - [`hamiltonian`]: per-site classification of the heterostructure and
//!   assembly of the discretized Hamiltonian as a [`LatticeModel`]
//! - [`eigen`]: dense symmetric eigensolve, ascending eigenvalues
//! - [`sweep`]: wavevector (or well width) sweeps collecting the two lowest
//!   eigenvalues into a [`Dispersion`] grid
//! - [`plot`]: PNG rendering of a [`Dispersion`]
//!
//! See [`docs`] for theoretical background.
//!
//! [`LatticeModel`]: lattice::LatticeModel
//! [`Dispersion`]: sweep::Dispersion

pub mod error;
pub mod units;
pub mod material;
pub mod lattice;
pub mod hamiltonian;
pub mod eigen;
pub mod sweep;
pub mod plot;

pub mod docs;

/// Number of bands collected per sample.
pub const N_BANDS: usize = 2;

pub(crate) const DEF_SYMM_TOL: f64 = 1e-12;

pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
