#![allow(non_upper_case_globals)]

//! Natural unit system and derived physical constants.
//!
//! A [`UnitSystem`] fixes one scale for each of the six base quantities
//! (charge, count, energy, length, temperature, time). Every physical quantity
//! handled elsewhere in this crate is a plain `f64` expressed in these units,
//! so eigenvalues are only meaningful relative to the system they were
//! computed in. The conventional choice is
//! ```text
//! charge: C   count: pcs   energy: eV   length: Å   temperature: K   time: s
//! ```
//! under which ħ ≈ 6.58e-16 eV s and ħ²/2*m*ₑ ≈ 3.81 eV Å².
//!
//! ```
//! use qwell::units::UnitSystem;
//!
//! let uu = UnitSystem::new(["1 C", "1 pcs", "1 eV", "1 Ao", "1 K", "1 s"])
//!     .unwrap();
//! let hbar = uu.hbar();
//! let me = uu.m_e();
//! assert!((hbar * hbar / 2.0 / me - 3.80998).abs() < 1e-4);
//! ```
//!
//! Concrete physical constants are taken from NIST.

use std::sync::OnceLock;
use crate::error::ConfigError;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / std::f64::consts::PI;
//                +/- 0 (exact)

/// Avogadro's number
pub const NA: f64 = 6.02214076e23;
//              +/- 0 (exact)

/// Boltzmann's constant (J K^-1)
pub const kB: f64 = 1.380649e-23;
//              +/- 0 (exact)

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// proton mass (kg)
pub const mp: f64 = 1.67262192369e-27;
//              +/- 0.00000000051e-27

/// The conventional scales: coulomb, particle count, electronvolt, ångström,
/// kelvin, second.
pub const STANDARD_SCALES: [&str; 6]
    = ["1 C", "1 pcs", "1 eV", "1 Ao", "1 K", "1 s"];

static INSTALLED: OnceLock<UnitSystem> = OnceLock::new();

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Quantity {
    Charge,
    Count,
    Energy,
    Length,
    Temperature,
    Time,
}

impl Quantity {
    fn name(self) -> &'static str {
        match self {
            Self::Charge => "charge",
            Self::Count => "count",
            Self::Energy => "energy",
            Self::Length => "length",
            Self::Temperature => "temperature",
            Self::Time => "time",
        }
    }

    // size of one `unit` in SI (C, particles, J, m, K, s)
    fn si_value(self, unit: &str) -> Option<f64> {
        let v = match (self, unit) {
            (Self::Charge, "kC") => 1e3,
            (Self::Charge, "C") => 1.0,
            (Self::Charge, "mC") => 1e-3,
            (Self::Charge, "uC") => 1e-6,
            (Self::Charge, "nC") => 1e-9,
            (Self::Charge, "pC") => 1e-12,
            (Self::Charge, "fC") => 1e-15,
            (Self::Charge, "aC") => 1e-18,
            (Self::Count, "pcs") => 1.0,
            (Self::Count, "mol") => NA,
            (Self::Energy, "GeV") => e * 1e9,
            (Self::Energy, "MeV") => e * 1e6,
            (Self::Energy, "keV") => e * 1e3,
            (Self::Energy, "eV") => e,
            (Self::Energy, "meV") => e * 1e-3,
            (Self::Energy, "ueV") => e * 1e-6,
            (Self::Energy, "J") => 1.0,
            (Self::Length, "m") => 1.0,
            (Self::Length, "mm") => 1e-3,
            (Self::Length, "um") => 1e-6,
            (Self::Length, "nm") => 1e-9,
            (Self::Length, "Ao") => 1e-10,
            (Self::Length, "pm") => 1e-12,
            (Self::Length, "fm") => 1e-15,
            (Self::Length, "am") => 1e-18,
            (Self::Temperature, "kK") => 1e3,
            (Self::Temperature, "K") => 1.0,
            (Self::Temperature, "mK") => 1e-3,
            (Self::Temperature, "uK") => 1e-6,
            (Self::Temperature, "nK") => 1e-9,
            (Self::Time, "s") => 1.0,
            (Self::Time, "ms") => 1e-3,
            (Self::Time, "us") => 1e-6,
            (Self::Time, "ns") => 1e-9,
            (Self::Time, "ps") => 1e-12,
            (Self::Time, "fs") => 1e-15,
            (Self::Time, "as") => 1e-18,
            _ => return None,
        };
        Some(v)
    }

    // parse "<factor> <unit>" into an SI scale
    fn parse_scale(self, scale: &str) -> Result<f64, ConfigError> {
        let mut tokens = scale.split_whitespace();
        let (factor, unit)
            = match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(f), Some(u), None) => (f, u),
                _ => { return Err(ConfigError::BadScale(scale.to_string())); },
            };
        let factor: f64
            = factor.parse()
            .map_err(|_| ConfigError::BadScale(scale.to_string()))?;
        if !(factor.is_finite() && factor > 0.0) {
            return Err(ConfigError::BadScaleFactor(factor));
        }
        let unit_si
            = self.si_value(unit)
            .ok_or_else(|| {
                ConfigError::UnknownUnit {
                    quantity: self.name(),
                    unit: unit.to_string(),
                }
            })?;
        Ok(factor * unit_si)
    }
}

/// An immutable set of base-unit scales, each stored as its size in SI.
///
/// Derived constants are returned as numerical values in this system. Nothing
/// in the library reads a global unit system; a reference to one is passed to
/// every function that needs it. [`Self::install`] is provided for
/// applications that want a single process-wide instance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UnitSystem {
    charge: f64,
    count: f64,
    energy: f64,
    length: f64,
    temperature: f64,
    time: f64,
}

impl Default for UnitSystem {
    fn default() -> Self { Self::standard() }
}

impl UnitSystem {
    /// Construct from six scale strings of the form `"<factor> <unit>"`,
    /// ordered as (charge, count, energy, length, temperature, time).
    ///
    /// Recognized units:
    /// - charge: `kC`, `C`, `mC`, `uC`, `nC`, `pC`, `fC`, `aC`
    /// - count: `pcs`, `mol`
    /// - energy: `GeV`, `MeV`, `keV`, `eV`, `meV`, `ueV`, `J`
    /// - length: `m`, `mm`, `um`, `nm`, `Ao`, `pm`, `fm`, `am`
    /// - temperature: `kK`, `K`, `mK`, `uK`, `nK`
    /// - time: `s`, `ms`, `us`, `ns`, `ps`, `fs`, `as`
    pub fn new(scales: [&str; 6]) -> Result<Self, ConfigError> {
        let [q, n, en, l, tp, t] = scales;
        Ok(Self {
            charge: Quantity::Charge.parse_scale(q)?,
            count: Quantity::Count.parse_scale(n)?,
            energy: Quantity::Energy.parse_scale(en)?,
            length: Quantity::Length.parse_scale(l)?,
            temperature: Quantity::Temperature.parse_scale(tp)?,
            time: Quantity::Time.parse_scale(t)?,
        })
    }

    /// Coulombs, particles, electronvolts, ångströms, kelvin, seconds.
    pub fn standard() -> Self {
        Self {
            charge: 1.0,
            count: 1.0,
            energy: e,
            length: 1e-10,
            temperature: 1.0,
            time: 1.0,
        }
    }

    /// Store `self` as the process-wide unit system and return a `'static`
    /// reference to it.
    ///
    /// Fails with [`ConfigError::AlreadyInitialized`] on every call after the
    /// first.
    pub fn install(self) -> Result<&'static Self, ConfigError> {
        INSTALLED.set(self).map_err(|_| ConfigError::AlreadyInitialized)?;
        INSTALLED.get().ok_or(ConfigError::AlreadyInitialized)
    }

    /// Get the process-wide unit system, if one has been installed.
    pub fn installed() -> Option<&'static Self> { INSTALLED.get() }

    /// Size of the charge unit in coulombs.
    pub fn charge(&self) -> f64 { self.charge }

    /// Size of the count unit in particles.
    pub fn count(&self) -> f64 { self.count }

    /// Size of the energy unit in joules.
    pub fn energy(&self) -> f64 { self.energy }

    /// Size of the length unit in meters.
    pub fn length(&self) -> f64 { self.length }

    /// Size of the temperature unit in kelvin.
    pub fn temperature(&self) -> f64 { self.temperature }

    /// Size of the time unit in seconds.
    pub fn time(&self) -> f64 { self.time }

    // size of the derived mass unit (energy × time² / length²) in kilograms
    fn mass(&self) -> f64 {
        self.energy * self.time.powi(2) / self.length.powi(2)
    }

    /// Reduced Planck constant.
    pub fn hbar(&self) -> f64 { hbar / (self.energy * self.time) }

    /// Electron rest mass.
    pub fn m_e(&self) -> f64 { me / self.mass() }

    /// Proton rest mass.
    pub fn m_p(&self) -> f64 { mp / self.mass() }

    /// Elementary charge.
    pub fn e(&self) -> f64 { e / self.charge }

    /// Boltzmann constant.
    pub fn k_b(&self) -> f64 { kB * self.temperature / self.energy }

    /// Avogadro constant, in count units per mole.
    pub fn n_a(&self) -> f64 { NA / self.count }

    /// Convert an energy in joules to natural units.
    pub fn to_natural_energy(&self, x: f64) -> f64 { x / self.energy }

    /// Convert an energy in natural units to joules.
    pub fn from_natural_energy(&self, x: f64) -> f64 { x * self.energy }

    /// Convert a length in meters to natural units.
    pub fn to_natural_length(&self, x: f64) -> f64 { x / self.length }

    /// Convert a length in natural units to meters.
    pub fn from_natural_length(&self, x: f64) -> f64 { x * self.length }

    /// Convert a time in seconds to natural units.
    pub fn to_natural_time(&self, x: f64) -> f64 { x / self.time }

    /// Convert a time in natural units to seconds.
    pub fn from_natural_time(&self, x: f64) -> f64 { x * self.time }
}
