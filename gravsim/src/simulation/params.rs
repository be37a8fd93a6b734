//! Numerical and physical parameters for the simulation
//!
//! - fixed literals: force softening and the two trail caps
//! - `UnitSystem`: the four physical constants the gravitational constant
//!   is rescaled from, so force magnitudes come out in internal units

/// Softening length added in quadrature to the pair separation
pub const SOFTENING: f64 = 1e-2;

/// Maximum number of trail points kept on a live body
pub const HISTORY_CAP: usize = 4000;

/// Maximum number of trail points carried into a merge result
pub const MERGED_HISTORY_CAP: usize = 200;

/// Gravitational constant in SI units (m^3 kg^-1 s^-2)
pub const G_SI: f64 = 6.67430e-11;

/// Earth radius in metres
pub const EARTH_RADIUS_M: f64 = 6.371e6;

/// Earth mass in kilograms
pub const EARTH_MASS_KG: f64 = 5.9722e24;

/// Two hours in seconds
pub const TWO_HOURS_S: f64 = 7200.0;

/// Physical constants that define the internal unit system
///
/// One unit of length is `length_m` metres, one unit of mass is `mass_kg`
/// kilograms and one unit of time is `time_step_s` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitSystem {
    pub g_si: f64, // gravitational constant, SI
    pub length_m: f64, // reference length
    pub mass_kg: f64, // reference mass
    pub time_step_s: f64, // reference time step
}

impl UnitSystem {
    /// Gravitational constant expressed in internal units:
    /// `G = G_SI * T^2 / L^3 * M`
    pub fn gravitational_constant(&self) -> f64 {
        self.g_si * (self.time_step_s * self.time_step_s) / self.length_m.powi(3) * self.mass_kg
    }
}

impl Default for UnitSystem {
    /// Earth radii, Earth masses and two-hour ticks
    fn default() -> Self {
        Self {
            g_si: G_SI,
            length_m: EARTH_RADIUS_M,
            mass_kg: EARTH_MASS_KG,
            time_step_s: TWO_HOURS_S,
        }
    }
}
