//! Assembly of the discretized effective-mass Hamiltonian for a
//! barrier/well/barrier heterostructure.
//!
//! The lattice has `2 * barrier_sites + well_sites` sites with spacing *a*.
//! For a material with effective mass *m* and band offset *E*, the hopping
//! prefactor is *t* = ħ²/2*ma*² and the in-plane kinetic prefactor is
//! *t'* = ħ²/2*m*, giving matrix elements
//! ```text
//! H[n, n]     = E + 2 t + t' k²
//! H[n, n ± 1] = -t
//! ```
//! The first and last well sites sit on a material interface and take the
//! arithmetic mean of the barrier and well values of *E*, *t*, and *t'* on the
//! diagonal. Bonds lying entirely inside the well use the well's *t*; all
//! other bonds use the barrier's.
//!
//! See [`docs`][crate::docs#discretization] for details.

use num_complex::Complex64 as C64;
use crate::{
    N_BANDS,
    error::ConfigError,
    lattice::LatticeModel,
    material::Material,
    units::UnitSystem,
};

/// Classification of a single lattice site.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Site {
    /// Bulk site of the left barrier.
    LeftBarrier,
    /// First well site, adjacent to the left barrier.
    LeftInterface,
    /// Bulk well site.
    Well,
    /// Last well site, adjacent to the right barrier.
    RightInterface,
    /// Bulk site of the right barrier.
    RightBarrier,
}

impl Site {
    /// Return `true` if `self` belongs to the well region, including its
    /// interface sites.
    pub fn in_well(self) -> bool {
        matches!(self, Self::LeftInterface | Self::Well | Self::RightInterface)
    }

    /// Return `true` if `self` is one of the two interface sites.
    pub fn is_interface(self) -> bool {
        matches!(self, Self::LeftInterface | Self::RightInterface)
    }
}

// per-material matrix element prefactors
#[derive(Copy, Clone, Debug, PartialEq)]
struct Prefactors {
    // band offset
    e: f64,
    // ħ²/2ma²
    t: f64,
    // ħ²/2m
    tp: f64,
}

impl Prefactors {
    fn new(mat: Material, hbar: f64, a: f64) -> Self {
        let tp = hbar.powi(2) / (2.0 * mat.mass);
        Self { e: mat.offset, t: tp / a.powi(2), tp }
    }

    fn mean(l: Self, r: Self) -> Self {
        Self {
            e: (l.e + r.e) / 2.0,
            t: (l.t + r.t) / 2.0,
            tp: (l.tp + r.tp) / 2.0,
        }
    }

    fn onsite(&self, k: f64) -> f64 {
        self.e + 2.0 * self.t + self.tp * k.powi(2)
    }
}

/// A one-dimensional barrier/well/barrier stack discretized on a uniform
/// lattice.
///
/// The site classification table is computed once on construction; only the
/// wavevector changes between calls to [`Self::hamiltonian`].
#[derive(Clone, Debug, PartialEq)]
pub struct Heterostructure {
    spacing: f64,
    barrier_sites: usize,
    well_sites: usize,
    barrier: Material,
    well: Material,
    sites: Vec<Site>,
}

impl Heterostructure {
    /// Create a new `Heterostructure` with explicit site counts for each
    /// barrier and for the well.
    ///
    /// Fails if the lattice spacing is not positive, if either material is
    /// invalid, or if the lattice is too small to hold two eigenvalues and
    /// separate its interface sites.
    pub fn new(
        spacing: f64,
        barrier_sites: usize,
        well_sites: usize,
        barrier: Material,
        well: Material,
    ) -> Result<Self, ConfigError> {
        ConfigError::check_spacing(spacing)?;
        barrier.check()?;
        well.check()?;
        let n
            = barrier_sites.checked_mul(2)
            .and_then(|b| b.checked_add(well_sites))
            .ok_or(ConfigError::TooManySites {
                barrier_sites,
                well_sites: well_sites as f64,
            })?;
        let n_interface = well_sites.min(2);
        ConfigError::check_sites(n, N_BANDS.max(2 * n_interface + 1))?;
        let sites: Vec<Site>
            = (0..n).map(|k| classify(k, barrier_sites, well_sites)).collect();
        Ok(Self { spacing, barrier_sites, well_sites, barrier, well, sites })
    }

    /// Like [`Self::new`], but derive the number of well sites from a
    /// physical well length by truncating `well_length / spacing`.
    pub fn from_well_length(
        spacing: f64,
        barrier_sites: usize,
        well_length: f64,
        barrier: Material,
        well: Material,
    ) -> Result<Self, ConfigError> {
        ConfigError::check_spacing(spacing)?;
        ConfigError::check_well_length(well_length)?;
        let well_sites = (well_length / spacing).floor();
        // `as` saturates
        (well_sites < usize::MAX as f64).then_some(())
            .ok_or(ConfigError::TooManySites { barrier_sites, well_sites })?;
        Self::new(spacing, barrier_sites, well_sites as usize, barrier, well)
    }

    /// The reference Al₀.₃Ga₀.₇As/GaAs/Al₀.₃Ga₀.₇As well: 3 Å spacing, 100
    /// barrier sites on each side, and a 69 Å (23-site) well.
    ///
    /// `units` must measure energy in eV for the tabulated band offsets to
    /// be meaningful.
    pub fn reference(units: &UnitSystem) -> Result<Self, ConfigError> {
        let m_e = units.m_e();
        Self::from_well_length(
            3.0,
            100,
            69.0,
            Material::algaas(m_e),
            Material::gallium_arsenide(m_e),
        )
    }

    /// Return a copy of `self` with a different number of well sites.
    pub fn with_well_sites(&self, well_sites: usize)
        -> Result<Self, ConfigError>
    {
        Self::new(
            self.spacing, self.barrier_sites, well_sites, self.barrier, self.well)
    }

    /// Return a copy of `self` with the number of well sites derived from a
    /// new physical well length, as in [`Self::from_well_length`].
    pub fn with_well_length(&self, well_length: f64)
        -> Result<Self, ConfigError>
    {
        Self::from_well_length(
            self.spacing, self.barrier_sites, well_length, self.barrier, self.well)
    }

    /// Lattice spacing.
    pub fn spacing(&self) -> f64 { self.spacing }

    /// Number of sites in each barrier.
    pub fn barrier_sites(&self) -> usize { self.barrier_sites }

    /// Number of sites in the well.
    pub fn well_sites(&self) -> usize { self.well_sites }

    /// Physical length of the well.
    pub fn well_length(&self) -> f64 { self.well_sites as f64 * self.spacing }

    /// Total number of lattice sites.
    pub fn site_count(&self) -> usize { self.sites.len() }

    /// The per-site classification table.
    pub fn sites(&self) -> &[Site] { &self.sites }

    /// Barrier material.
    pub fn barrier(&self) -> Material { self.barrier }

    /// Well material.
    pub fn well(&self) -> Material { self.well }

    /// Build the lattice model for in-plane wavevector `k`.
    pub fn hamiltonian(&self, units: &UnitSystem, k: f64) -> LatticeModel {
        let hbar = units.hbar();
        let pb = Prefactors::new(self.barrier, hbar, self.spacing);
        let pw = Prefactors::new(self.well, hbar, self.spacing);
        let pi = Prefactors::mean(pb, pw);
        let mut model = LatticeModel::new(self.site_count());
        for (n, site) in self.sites.iter().enumerate() {
            let diag
                = match site {
                    Site::LeftBarrier | Site::RightBarrier => pb.onsite(k),
                    Site::LeftInterface | Site::RightInterface => pi.onsite(k),
                    Site::Well => pw.onsite(k),
                };
            model.add(C64::from(diag), n, n);
        }
        for (n, pair) in self.sites.windows(2).enumerate() {
            let t
                = if pair[0].in_well() && pair[1].in_well() {
                    pw.t
                } else {
                    pb.t
                };
            model.add_hc(C64::from(-t), n + 1, n);
        }
        model
    }
}

fn classify(n: usize, barrier_sites: usize, well_sites: usize) -> Site {
    if n < barrier_sites {
        Site::LeftBarrier
    } else if n >= barrier_sites + well_sites {
        Site::RightBarrier
    } else if n == barrier_sites {
        Site::LeftInterface
    } else if n == barrier_sites + well_sites - 1 {
        Site::RightInterface
    } else {
        Site::Well
    }
}
