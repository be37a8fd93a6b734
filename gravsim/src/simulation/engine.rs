//! The simulation engine: owns the bodies and advances them one tick at a time
//!
//! Each `step(dt)` runs, in order:
//! 1. reset every body's acceleration
//! 2. accumulate pairwise softened gravity
//! 3. semi-implicit Euler integration of every body
//! 4. chain-merge collision resolution
//! 5. advance the clock

use tracing::debug;

use crate::error::SimError;
use super::collision::{are_colliding, merge_bodies};
use super::forces::NewtonianGravity;
use super::params::{UnitSystem, SOFTENING};
use super::states::{Body, BodySpec, NVec2};
use super::vector::distance;

#[derive(Debug, Clone)]
pub struct SimulationEngine {
    bodies: Vec<Body>, // merge precedence follows this order
    time: f64, // elapsed simulation time
    gravity: NewtonianGravity,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationEngine {
    /// Empty engine in the default unit system
    pub fn new() -> Self {
        Self::with_units(UnitSystem::default())
    }

    /// Empty engine; `G` is derived from `units` once, here
    pub fn with_units(units: UnitSystem) -> Self {
        Self {
            bodies: Vec::new(),
            time: 0.0,
            gravity: NewtonianGravity {
                g: units.gravitational_constant(),
                softening: SOFTENING,
            },
        }
    }

    /// Engine seeded with already-built bodies
    pub fn with_bodies(bodies: Vec<Body>, units: UnitSystem) -> Self {
        let mut engine = Self::with_units(units);
        engine.bodies = bodies;
        engine
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Edit a body between steps
    pub fn body_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Gravitational constant in internal units
    pub fn g(&self) -> f64 {
        self.gravity.g
    }

    /// Validate `spec` and append the new body; returns its index
    pub fn add_body(&mut self, spec: BodySpec) -> Result<usize, SimError> {
        let body = Body::new(spec)?;
        Ok(self.insert_body(body))
    }

    /// Append an already-built body; returns its index
    pub fn insert_body(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Remove the body at `index`, shifting later bodies down
    pub fn remove_body(&mut self, index: usize) -> Result<Body, SimError> {
        if index >= self.bodies.len() {
            return Err(SimError::IndexOutOfRange {
                index,
                len: self.bodies.len(),
            });
        }
        let body = self.bodies.remove(index);
        debug!(index, mass = body.mass(), "removed body");
        Ok(body)
    }

    /// Drop all bodies and rewind the clock
    pub fn reset(&mut self) {
        self.bodies.clear();
        self.time = 0.0;
    }

    /// Advance the whole system by `dt`
    /// `dt == 0` only re-runs collision resolution, `dt < 0` runs backwards
    pub fn step(&mut self, dt: f64) {
        for body in self.bodies.iter_mut() {
            body.reset_acceleration();
        }

        self.gravity.accumulate(&mut self.bodies);

        for body in self.bodies.iter_mut() {
            body.integrate(dt);
        }

        self.resolve_collisions();

        self.time += dt;
    }

    /// Chain-merge: body i absorbs every later body it overlaps, testing
    /// each later body against the running (already merged) result
    fn resolve_collisions(&mut self) {
        let n = self.bodies.len();
        if n < 2 {
            return;
        }

        // None marks a body consumed by an earlier merge
        let mut slots: Vec<Option<Body>> = std::mem::take(&mut self.bodies)
            .into_iter()
            .map(Some)
            .collect();
        let mut survivors = Vec::with_capacity(n);

        for i in 0..n {
            let Some(mut running) = slots[i].take() else {
                continue;
            };

            for j in (i + 1)..n {
                let hit = matches!(&slots[j], Some(other) if are_colliding(&running, other));
                if !hit {
                    continue;
                }
                if let Some(other) = slots[j].take() {
                    debug!(
                        survivor = i,
                        absorbed = j,
                        mass = running.mass() + other.mass(),
                        "merged bodies"
                    );
                    running = merge_bodies(&running, &other);
                }
            }

            survivors.push(running);
        }

        self.bodies = survivors;
    }

    /// Remove every body outside the square |x| < bound, |y| < bound
    /// Returns how many were dropped
    pub fn retain_within_bounds(&mut self, bound: f64) -> usize {
        let before = self.bodies.len();
        self.bodies
            .retain(|b| b.position.x.abs() < bound && b.position.y.abs() < bound);
        let removed = before - self.bodies.len();
        if removed > 0 {
            debug!(removed, bound, "culled bodies outside world bounds");
        }
        removed
    }

    /// Index of the first body whose disc contains `point`
    pub fn body_at(&self, point: NVec2) -> Option<usize> {
        self.bodies
            .iter()
            .position(|b| distance(point, b.position) <= b.radius())
    }

    /// Empty every body's trail
    pub fn clear_trails(&mut self) {
        for body in self.bodies.iter_mut() {
            body.clear_history();
        }
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(Body::mass).sum()
    }

    /// Sum of m * v
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + b.momentum())
    }

    /// Mass-weighted mean position, zero for an empty engine
    pub fn center_of_mass(&self) -> NVec2 {
        let total = self.total_mass();
        if total == 0.0 {
            return NVec2::zeros();
        }
        let weighted = self
            .bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + b.mass() * b.position);
        weighted / total
    }
}
