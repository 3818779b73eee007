//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! Errors fall into three categories: configuration ([`ConfigError`], raised
//! before any numerical work), numerical ([`NumericalError`], raised by the
//! eigensolver and aborting a sweep), and output ([`PlotError`], raised at the
//! point of writing an image). [`QwError`] unifies all three.
//!
//! [anyhow]: https://crates.io/crates/anyhow

use std::path::PathBuf;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when experiment parameters or the unit system are invalid.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when a unit scale string is not of the form `"<factor>
    /// <unit>"`.
    #[error("malformed unit scale '{0}'; expected '<factor> <unit>'")]
    BadScale(String),

    /// Returned when a unit symbol is not recognized for its quantity.
    #[error("unknown {quantity} unit '{unit}'")]
    UnknownUnit { quantity: &'static str, unit: String },

    /// Returned when a unit scale factor is not strictly positive and finite.
    #[error("unit scale factors must be positive and finite; got {0}")]
    BadScaleFactor(f64),

    /// Returned when a unit system is installed a second time.
    #[error("the process-wide unit system has already been initialized")]
    AlreadyInitialized,

    /// Returned when a non-positive lattice spacing is encountered.
    #[error("lattice spacing must be positive and finite; got {0}")]
    BadSpacing(f64),

    /// Returned when a physical well length is negative or non-finite.
    #[error("well length must be non-negative and finite; got {0}")]
    BadWellLength(f64),

    /// Returned when a lattice has too few sites to carry the requested
    /// number of bands.
    #[error("lattice must have at least {min} sites; got {got}")]
    TooFewSites { min: usize, got: usize },

    /// Returned when the number of lattice sites overflows `usize`.
    #[error("too many lattice sites: {barrier_sites} barrier, {well_sites} well")]
    TooManySites { barrier_sites: usize, well_sites: f64 },

    /// Returned when a material parameter is non-finite or a mass is
    /// non-positive.
    #[error("bad material parameters: mass = {mass}, offset = {offset}")]
    BadMaterial { mass: f64, offset: f64 },

    /// Returned when a sweep has no samples.
    #[error("sweeps must contain at least one sample")]
    NoSamples,

    /// Returned when a sweep range is inverted or non-finite.
    #[error("bad sweep range: [{0}, {1}]")]
    BadRange(f64, f64),

    /// Returned when plot bounds are inverted or non-finite.
    #[error("bad plot bounds: [{0}, {1}]")]
    BadBounds(f64, f64),

    /// Returned when a thread pool cannot be constructed.
    #[error("could not build thread pool: {0}")]
    ThreadPool(String),
}

impl ConfigError {
    pub(crate) fn check_spacing(a: f64) -> Result<(), Self> {
        (a.is_finite() && a > 0.0).then_some(()).ok_or(Self::BadSpacing(a))
    }

    pub(crate) fn check_well_length(l: f64) -> Result<(), Self> {
        (l.is_finite() && l >= 0.0).then_some(()).ok_or(Self::BadWellLength(l))
    }

    pub(crate) fn check_sites(got: usize, min: usize) -> Result<(), Self> {
        (got >= min).then_some(()).ok_or(Self::TooFewSites { min, got })
    }

    pub(crate) fn check_range(lo: f64, hi: f64) -> Result<(), Self> {
        (lo.is_finite() && hi.is_finite() && lo <= hi)
            .then_some(()).ok_or(Self::BadRange(lo, hi))
    }

    pub(crate) fn check_bounds(lo: f64, hi: f64) -> Result<(), Self> {
        (lo.is_finite() && hi.is_finite() && lo < hi)
            .then_some(()).ok_or(Self::BadBounds(lo, hi))
    }
}

/// Returned from the eigensolver and from conversions of a lattice model to a
/// dense matrix.
#[derive(Debug, Error)]
pub enum NumericalError {
    /// Returned when a matrix is not square.
    #[error("matrix must be square; got shape ({0}, {1})")]
    NotSquare(usize, usize),

    /// Returned when a matrix is not symmetric within tolerance.
    #[error("matrix is not symmetric at ({0}, {1})")]
    NotSymmetric(usize, usize),

    /// Returned when a matrix contains NaN or infinite entries.
    #[error("matrix contains a non-finite entry at ({0}, {1})")]
    NonFinite(usize, usize),

    /// Returned when a real matrix is requested from a model carrying a
    /// non-negligible imaginary amplitude.
    #[error("amplitude at ({0}, {1}) has non-zero imaginary part {2}")]
    ComplexAmplitude(usize, usize, f64),

    /// Returned when fewer eigenvalues than requested are available.
    #[error("requested {wanted} eigenvalues but only {got} are available")]
    TooFewEigenvalues { wanted: usize, got: usize },

    /// [`LinalgError`].
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),
}

/// Returned from functions in [`plot`][crate::plot].
#[derive(Debug, Error)]
pub enum PlotError {
    /// Returned when an output directory cannot be created.
    #[error("could not create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Returned when the drawing backend fails, including when the image
    /// cannot be written.
    #[error("could not draw {path:?}: {reason}")]
    Draw { path: PathBuf, reason: String },

    /// [`ConfigError`] for bad plot parameters.
    #[error("plot config error: {0}")]
    Config(#[from] ConfigError),
}

/// Top-level error type for the full computational pipeline.
#[derive(Debug, Error)]
pub enum QwError {
    /// [`ConfigError`]
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// [`NumericalError`]
    #[error("numerical error: {0}")]
    Numerical(#[from] NumericalError),

    /// [`PlotError`]
    #[error("output error: {0}")]
    Plot(#[from] PlotError),
}

impl QwError {
    /// Return the broad category of the error: `"configuration"`,
    /// `"numerical"`, or `"io"`.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "configuration",
            Self::Numerical(_) => "numerical",
            Self::Plot(PlotError::Config(_)) => "configuration",
            Self::Plot(_) => "io",
        }
    }
}

pub type QwResult<T> = Result<T, QwError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checks_accept_valid_and_reject_invalid() {
        assert!(ConfigError::check_spacing(3.0).is_ok());
        assert!(ConfigError::check_spacing(0.0).is_err());
        assert!(ConfigError::check_spacing(f64::NAN).is_err());
        assert!(ConfigError::check_well_length(0.0).is_ok());
        assert!(ConfigError::check_well_length(-1.0).is_err());
        assert!(ConfigError::check_sites(2, 2).is_ok());
        assert!(matches!(
            ConfigError::check_sites(1, 2),
            Err(ConfigError::TooFewSites { min: 2, got: 1 }),
        ));
        assert!(ConfigError::check_range(0.0, 0.0).is_ok());
        assert!(ConfigError::check_range(1.0, 0.0).is_err());
        assert!(ConfigError::check_bounds(0.0, 0.0).is_err());
    }

    #[test]
    fn categories() {
        let e: QwError = ConfigError::NoSamples.into();
        assert_eq!(e.category(), "configuration");
        let e: QwError = NumericalError::NotSquare(2, 3).into();
        assert_eq!(e.category(), "numerical");
        let e: QwError = PlotError::Draw {
            path: "x.png".into(),
            reason: "nope".into(),
        }.into();
        assert_eq!(e.category(), "io");
    }
}
