//! Core state types for the N-body simulation.
//!
//! - `NVec2`    fixed 2-component vector every body uses
//! - `Colour`   opaque display tag carried through the engine untouched
//! - `BodySpec` construction data supplied by spawners/editors/scenarios
//! - `Body`     live body: kinematic state, per-tick acceleration and a
//!              bounded trail of past positions

use std::collections::VecDeque;

use nalgebra::Vector2;
use serde::Deserialize;

use crate::error::SimError;
use super::params::HISTORY_CAP;

pub type NVec2 = Vector2<f64>;

/// Display colour, stored as given and never interpreted by the engine
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Colour(String);

impl Colour {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::new("white")
    }
}

impl From<&str> for Colour {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Colour {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Full initial state of a body, before validation
#[derive(Debug, Clone, PartialEq)]
pub struct BodySpec {
    pub position: NVec2,
    pub velocity: NVec2,
    pub mass: f64,
    pub radius: f64,
    pub colour: Colour,
}

impl BodySpec {
    pub fn new(position: NVec2, velocity: NVec2, mass: f64, radius: f64) -> Self {
        Self {
            position,
            velocity,
            mass,
            radius,
            colour: Colour::default(),
        }
    }

    pub fn with_colour(mut self, colour: impl Into<Colour>) -> Self {
        self.colour = colour.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub position: NVec2, // position
    pub velocity: NVec2, // velocity
    pub colour: Colour, // display tag
    acceleration: NVec2, // recomputed every tick
    mass: f64, // always finite and > 0
    radius: f64, // always finite and >= 0
    history: VecDeque<NVec2>, // oldest first, at most HISTORY_CAP long
}

fn check_mass(mass: f64) -> Result<f64, SimError> {
    // also rejects NaN; an infinite mass turns F / m into inf / inf
    if mass > 0.0 && mass.is_finite() {
        Ok(mass)
    } else {
        Err(SimError::InvalidMass(mass))
    }
}

fn check_radius(radius: f64) -> Result<f64, SimError> {
    if radius >= 0.0 && radius.is_finite() {
        Ok(radius)
    } else {
        Err(SimError::InvalidRadius(radius))
    }
}

impl Body {
    /// Build a body at rest in its trail: zero acceleration, empty history
    pub fn new(spec: BodySpec) -> Result<Self, SimError> {
        Ok(Self {
            position: spec.position,
            velocity: spec.velocity,
            colour: spec.colour,
            acceleration: NVec2::zeros(),
            mass: check_mass(spec.mass)?,
            radius: check_radius(spec.radius)?,
            history: VecDeque::new(),
        })
    }

    /// Assemble a body from parts that are already known to be valid
    /// (merge results). Callers guarantee `mass > 0` and `radius >= 0`.
    pub(crate) fn from_parts(
        position: NVec2,
        velocity: NVec2,
        mass: f64,
        radius: f64,
        colour: Colour,
        history: VecDeque<NVec2>,
    ) -> Self {
        debug_assert!(mass > 0.0 && radius >= 0.0);
        Self {
            position,
            velocity,
            colour,
            acceleration: NVec2::zeros(),
            mass,
            radius,
            history,
        }
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn acceleration(&self) -> NVec2 {
        self.acceleration
    }

    /// Past positions, oldest first
    pub fn history(&self) -> &VecDeque<NVec2> {
        &self.history
    }

    pub fn set_mass(&mut self, mass: f64) -> Result<(), SimError> {
        self.mass = check_mass(mass)?;
        Ok(())
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<(), SimError> {
        self.radius = check_radius(radius)?;
        Ok(())
    }

    /// m * v
    pub fn momentum(&self) -> NVec2 {
        self.mass * self.velocity
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Zero the acceleration; called once per tick before any force
    pub fn reset_acceleration(&mut self) {
        self.acceleration = NVec2::zeros();
    }

    /// a += F / m
    pub fn apply_force(&mut self, force: NVec2) {
        self.acceleration += force / self.mass;
    }

    /// Semi-implicit Euler step, then record the new position in the trail
    /// - v_n+1 = v_n + dt * a_n
    /// - x_n+1 = x_n + dt * v_n+1
    pub fn integrate(&mut self, dt: f64) {
        self.velocity += dt * self.acceleration;
        self.position += dt * self.velocity;

        self.history.push_back(self.position);
        if self.history.len() > HISTORY_CAP {
            self.history.pop_front();
        }
    }
}
