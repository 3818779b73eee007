//! Bulk material parameters.

use crate::error::ConfigError;

/// Effective mass and conduction-band offset of a bulk semiconductor.
///
/// Both values are expressed in the [natural units][crate::units] of the
/// surrounding computation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    /// Effective mass.
    pub mass: f64,
    /// Conduction-band offset energy.
    pub offset: f64,
}

impl Material {
    /// Create a new `Material`, checking that the mass is positive and both
    /// values are finite.
    pub fn new(mass: f64, offset: f64) -> Result<Self, ConfigError> {
        let mat = Self { mass, offset };
        mat.check()?;
        Ok(mat)
    }

    pub(crate) fn check(&self) -> Result<(), ConfigError> {
        (self.mass.is_finite() && self.mass > 0.0 && self.offset.is_finite())
            .then_some(())
            .ok_or(ConfigError::BadMaterial {
                mass: self.mass,
                offset: self.offset,
            })
    }

    /// Linearly interpolate between two materials, giving the alloy
    /// `x·a + (1 - x)·b`.
    ///
    /// For example, Al₀.₃Ga₀.₇As is `alloy(0.3, aluminum_arsenide,
    /// gallium_arsenide)`.
    pub fn alloy(x: f64, a: Self, b: Self) -> Self {
        Self {
            mass: x * a.mass + (1.0 - x) * b.mass,
            offset: x * a.offset + (1.0 - x) * b.offset,
        }
    }

    /// GaAs in a system where masses are in units of `m_e` and energies in
    /// eV: *m* = 0.07 *m*ₑ, offset 0.
    pub fn gallium_arsenide(m_e: f64) -> Self {
        Self { mass: 0.07 * m_e, offset: 0.0 }
    }

    /// AlAs in a system where masses are in units of `m_e` and energies in
    /// eV: *m* = 0.15 *m*ₑ, offset 1.25 eV.
    pub fn aluminum_arsenide(m_e: f64) -> Self {
        Self { mass: 0.15 * m_e, offset: 1.25 }
    }

    /// Al₀.₃Ga₀.₇As, interpolated from [`Self::aluminum_arsenide`] and
    /// [`Self::gallium_arsenide`].
    pub fn algaas(m_e: f64) -> Self {
        Self::alloy(0.3, Self::aluminum_arsenide(m_e), Self::gallium_arsenide(m_e))
    }
}
