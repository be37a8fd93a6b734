//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario file is a thin, `serde`-deserializable description of:
//!
//! - [`UnitsConfig`]    – physical constants the engine derives `G` from
//! - [`RunConfig`]      – how the headless driver advances the engine
//! - [`BodyConfig`]     – initial state for each body
//! - [`ScenarioConfig`] – top-level wrapper
//!
//! # YAML format
//!
//! ```yaml
//! units:                    # optional, defaults to Earth radii / Earth masses / 2h
//!   g_si: 6.6743e-11
//!   length_m: 6.371e6
//!   mass_kg: 5.9722e24
//!   time_step_s: 7200.0
//!
//! run:
//!   dt: 0.0166666667        # base step handed to the engine
//!   steps: 10000            # number of ticks
//!   timescale: 1.0          # dt multiplier
//!   world_bounds: 2.0e7     # optional, bodies beyond are dropped after each tick
//!   max_bodies: 30          # optional, extra bodies in the file are ignored
//!   report_every: 1000      # ticks between progress logs
//!
//! bodies:
//!   - x: [ -0.5, 0.0 ]
//!     v: [  0.0, 1.0 ]
//!     m: 1.0
//!     radius: 0.02
//!     colour: "#1e90ff"     # optional, defaults to "white"
//! ```

use serde::Deserialize;

use crate::error::SimError;
use crate::simulation::params::{UnitSystem, EARTH_MASS_KG, EARTH_RADIUS_M, G_SI, TWO_HOURS_S};
use crate::simulation::states::{BodySpec, Colour, NVec2};

/// Physical constants for the internal unit system
#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct UnitsConfig {
    pub g_si: f64,        // gravitational constant in SI
    pub length_m: f64,    // one length unit in metres
    pub mass_kg: f64,     // one mass unit in kilograms
    pub time_step_s: f64, // one time unit in seconds
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            g_si: G_SI,
            length_m: EARTH_RADIUS_M,
            mass_kg: EARTH_MASS_KG,
            time_step_s: TWO_HOURS_S,
        }
    }
}

impl From<UnitsConfig> for UnitSystem {
    fn from(cfg: UnitsConfig) -> Self {
        UnitSystem {
            g_si: cfg.g_si,
            length_m: cfg.length_m,
            mass_kg: cfg.mass_kg,
            time_step_s: cfg.time_step_s,
        }
    }
}

fn default_dt() -> f64 {
    1.0 / 60.0
}

fn default_timescale() -> f64 {
    1.0
}

fn default_report_every() -> u64 {
    1000
}

/// Settings for the headless driver loop
#[derive(Deserialize, Debug, Clone)]
pub struct RunConfig {
    #[serde(default = "default_dt")]
    pub dt: f64, // base step, one animation frame by default
    pub steps: u64, // ticks to run
    #[serde(default = "default_timescale")]
    pub timescale: f64, // multiplies dt
    #[serde(default)]
    pub world_bounds: Option<f64>, // cull bodies outside |x|,|y| < bound
    #[serde(default)]
    pub max_bodies: Option<usize>, // caller-side population cap
    #[serde(default = "default_report_every")]
    pub report_every: u64, // ticks between progress logs, 0 = never
}

/// Initial state of a single body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // position
    pub v: Vec<f64>, // velocity
    pub m: f64,      // mass, finite and > 0
    pub radius: f64, // collision radius, finite and >= 0
    #[serde(default)]
    pub colour: Colour, // opaque display tag
}

fn to_vec2(field: &'static str, values: &[f64]) -> Result<NVec2, SimError> {
    match values {
        [x, y] if x.is_finite() && y.is_finite() => Ok(NVec2::new(*x, *y)),
        [x, y] => Err(SimError::NonFiniteVector { field, x: *x, y: *y }),
        _ => Err(SimError::DimensionMismatch {
            field,
            expected: 2,
            got: values.len(),
        }),
    }
}

impl TryFrom<&BodyConfig> for BodySpec {
    type Error = SimError;

    fn try_from(bc: &BodyConfig) -> Result<Self, Self::Error> {
        Ok(BodySpec::new(to_vec2("x", &bc.x)?, to_vec2("v", &bc.v)?, bc.m, bc.radius)
            .with_colour(bc.colour.clone()))
    }
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub units: UnitsConfig,
    pub run: RunConfig,
    pub bodies: Vec<BodyConfig>,
}
