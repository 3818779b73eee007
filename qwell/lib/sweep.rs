//! Sweeps over wavevector or well width, collecting the lowest eigenvalues at
//! each sample.
//!
//! Samples are independent: each builds its own [`LatticeModel`], solves it,
//! and discards it. With `threads > 0` the samples are scattered over a
//! [`rayon`] pool and gathered back into the result grid by column index. A
//! failure in any sample aborts the whole sweep; there are no partial results.
//!
//! [`LatticeModel`]: crate::lattice::LatticeModel

use log::{ debug, info };
use ndarray as nd;
use rayon::prelude::*;
use crate::{
    N_BANDS,
    eigen::{ self, NResult },
    error::{ ConfigError, QwResult },
    hamiltonian::Heterostructure,
    units::UnitSystem,
};

/// Lowest eigenvalues collected over a one-dimensional sweep.
///
/// `energies` has shape `(N_BANDS, samples)`; column `c` holds the eigenvalues
/// for `x[c]` in ascending order.
#[derive(Clone, Debug, PartialEq)]
pub struct Dispersion {
    x: nd::Array1<f64>,
    energies: nd::Array2<f64>,
}

impl Dispersion {
    /// Sweep coordinates (wavevector or well length).
    pub fn x(&self) -> &nd::Array1<f64> { &self.x }

    /// The full `(N_BANDS, samples)` grid.
    pub fn energies(&self) -> &nd::Array2<f64> { &self.energies }

    /// Eigenvalues of band `i` (0 = lowest) over the sweep.
    ///
    /// *Panics if `i >= N_BANDS`*.
    pub fn band(&self, i: usize) -> nd::ArrayView1<'_, f64> {
        self.energies.row(i)
    }

    /// Number of samples.
    pub fn samples(&self) -> usize { self.x.len() }

    /// Smallest and largest energies anywhere in the grid.
    pub fn energy_range(&self) -> (f64, f64) {
        self.energies.iter()
            .fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(lo, hi), e| (lo.min(*e), hi.max(*e)),
            )
    }
}

// solve `f` at every point of `x`, serially if `threads == 0`
fn collect<F>(x: nd::Array1<f64>, threads: usize, f: F) -> QwResult<Dispersion>
where F: Fn(usize, f64) -> NResult<nd::Array1<f64>> + Sync
{
    let columns: Vec<nd::Array1<f64>>
        = if threads == 0 {
            x.iter().enumerate()
                .map(|(c, xc)| f(c, *xc))
                .collect::<NResult<Vec<_>>>()?
        } else {
            let pool
                = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| ConfigError::ThreadPool(e.to_string()))?;
            let xs: Vec<f64> = x.to_vec();
            pool.install(|| {
                xs.par_iter().enumerate()
                    .map(|(c, xc)| f(c, *xc))
                    .collect::<NResult<Vec<_>>>()
            })?
        };
    let mut energies: nd::Array2<f64> = nd::Array2::zeros((N_BANDS, x.len()));
    columns.iter().zip(energies.columns_mut())
        .for_each(|(ev, mut col)| { col.assign(ev); });
    Ok(Dispersion { x, energies })
}

/// Wavevector sweep over a closed interval.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sweep {
    /// Lower bound on the wavevector.
    pub k_min: f64,
    /// Upper bound on the wavevector (inclusive).
    pub k_max: f64,
    /// Number of equally spaced samples.
    pub samples: usize,
    /// Size of the worker pool; 0 to run serially (default: 0).
    pub threads: usize,
}

impl Default for Sweep {
    fn default() -> Self {
        Self { k_min: 0.0, k_max: 0.05, samples: 100, threads: 0 }
    }
}

impl Sweep {
    /// Create a new serial `Sweep`.
    pub fn new(k_min: f64, k_max: f64, samples: usize)
        -> Result<Self, ConfigError>
    {
        let sweep = Self { k_min, k_max, samples, threads: 0 };
        sweep.check()?;
        Ok(sweep)
    }

    /// Set the size of the worker pool.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    fn check(&self) -> Result<(), ConfigError> {
        ConfigError::check_range(self.k_min, self.k_max)?;
        (self.samples > 0).then_some(()).ok_or(ConfigError::NoSamples)
    }

    /// The sampled wavevectors.
    pub fn wavevectors(&self) -> nd::Array1<f64> {
        nd::Array1::linspace(self.k_min, self.k_max, self.samples)
    }

    /// Compute the two lowest eigenvalues at every sampled wavevector.
    pub fn run(&self, hs: &Heterostructure, units: &UnitSystem)
        -> QwResult<Dispersion>
    {
        self.check()?;
        info!(
            "sweeping k over [{}, {}] ({} samples, {} sites)",
            self.k_min, self.k_max, self.samples, hs.site_count(),
        );
        let disp
            = collect(self.wavevectors(), self.threads, |c, k| {
                let evals = eigen::lowest_model(&hs.hamiltonian(units, k), N_BANDS)?;
                debug!("sample {}: k = {:.5}, E = {:.6}", c, k, evals);
                Ok(evals)
            })?;
        info!("sweep complete");
        Ok(disp)
    }
}

/// Sweep over the physical well length at fixed wavevector.
#[derive(Clone, Debug, PartialEq)]
pub struct WidthScan {
    /// Wavevector.
    pub k: f64,
    /// Well lengths; each is truncated to a whole number of lattice sites.
    pub lengths: Vec<f64>,
    /// Size of the worker pool; 0 to run serially.
    pub threads: usize,
}

impl WidthScan {
    /// Create a new serial `WidthScan` over `samples` equally spaced lengths
    /// in `[l_min, l_max]`.
    pub fn linspace(k: f64, l_min: f64, l_max: f64, samples: usize)
        -> Result<Self, ConfigError>
    {
        ConfigError::check_range(l_min, l_max)?;
        ConfigError::check_well_length(l_min)?;
        (samples > 0).then_some(()).ok_or(ConfigError::NoSamples)?;
        let lengths = nd::Array1::linspace(l_min, l_max, samples).to_vec();
        Ok(Self { k, lengths, threads: 0 })
    }

    /// Set the size of the worker pool.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Compute the two lowest eigenvalues for every well length, keeping the
    /// lattice spacing, barrier width, and materials of `base`.
    ///
    /// All structures are validated before any eigensolve is performed. The
    /// returned sweep coordinates are the truncated well lengths.
    pub fn run(&self, base: &Heterostructure, units: &UnitSystem)
        -> QwResult<Dispersion>
    {
        (!self.lengths.is_empty()).then_some(()).ok_or(ConfigError::NoSamples)?;
        let structures: Vec<Heterostructure>
            = self.lengths.iter()
            .map(|l| base.with_well_length(*l))
            .collect::<Result<_, _>>()?;
        let x: nd::Array1<f64>
            = structures.iter().map(|hs| hs.well_length()).collect();
        info!(
            "scanning {} well lengths at k = {}", structures.len(), self.k);
        let disp
            = collect(x, self.threads, |c, l| {
                let hs = &structures[c];
                let evals
                    = eigen::lowest_model(&hs.hamiltonian(units, self.k), N_BANDS)?;
                debug!("sample {}: L = {:.1}, E = {:.6}", c, l, evals);
                Ok(evals)
            })?;
        info!("scan complete");
        Ok(disp)
    }
}
