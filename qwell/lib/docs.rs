//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Discretization](#discretization)
//! - [Interfaces](#interfaces)
//! - [Units](#units)
//!
//! # Background
//! An electron in the conduction band of a layered semiconductor moves freely
//! in the plane of the layers and is confined along the growth direction *z*.
//! In the effective-mass approximation the envelope wavefunction separates as
//! ψ(*z*) exp(*i* **k**·**r**), and ψ obeys the one-dimensional equation
//! ```text
//!     ħ²   ∂²ψ            ħ² k²
//! - ---- ----- + (E_c(z) + -----) ψ = E ψ
//!   2 m(z) ∂z²             2 m(z)
//! ```
//! where *E*_c(*z*) is the conduction-band offset and *m*(*z*) the effective
//! mass of whichever material occupies *z*. The in-plane wavevector *k* enters
//! only as a position-dependent energy shift, so each bound state traces out a
//! subband *E*ₙ(*k*) as *k* varies. For a GaAs well between Al₀.₃Ga₀.₇As
//! barriers, the barrier offset (0.375 eV) bounds the energies of confined
//! states at *k* = 0.
//!
//! # Discretization
//! Sampling *z* on a uniform lattice *z*[*n*] = *n a* and replacing the second
//! derivative with the three-point stencil
//! ```text
//! ∂²ψ    ψ[n + 1] - 2 ψ[n] + ψ[n - 1]
//! --- ≈ ----------------------------
//! ∂z²                a²
//! ```
//! turns the equation above into a tridiagonal matrix eigenvalue problem,
//! ```text
//! H[n, n]     = E_c[n] + 2 t[n] + t'[n] k²
//! H[n, n ± 1] = -t
//!
//!        ħ²                ħ²
//! t = ------- ,     t' = -----
//!     2 m a²             2 m
//! ```
//! Truncating the lattice at either end imposes hard-wall boundary conditions
//! deep inside the barriers, where bound-state wavefunctions have already
//! decayed. For a uniform lattice of *N* sites the spectrum is known exactly:
//! ```text
//!                        π j
//! E[j] = E_c + 2 t - 2 t cos(-----),   j = 1, ..., N
//!                         N + 1
//! ```
//! and is used as a check on the assembled matrix.
//!
//! # Interfaces
//! Where the lattice crosses from barrier to well, the two sites just inside
//! the well are given the arithmetic mean of the barrier and well values of
//! *E*_c, *t*, and *t'* on the diagonal, while bonds inside the well take the
//! well's *t* and all other bonds the barrier's. This is a simple averaging
//! rule rather than a current-conserving matching condition for
//! position-dependent mass, but it keeps the matrix real and symmetric.
//!
//! # Units
//! All quantities are plain numbers in a natural unit system fixed by one scale
//! for each of charge, count, energy, length, temperature, and time (see
//! [`UnitSystem`][crate::units::UnitSystem]). The conventional choice here is
//! coulombs, particles, electronvolts, ångströms, kelvin, and seconds, giving
//! ```text
//! ħ  ≈ 6.582e-16  eV s
//! mₑ ≈ 5.686e-32  eV s² Å⁻²
//! ħ² / 2 mₑ ≈ 3.810 eV Å²
//! ```
//! so that wavevectors are in Å⁻¹ and eigenvalues in eV. With *a* = 3 Å and
//! *m* = 0.07 *m*ₑ, the GaAs hopping energy is *t* ≈ 6.05 eV.
