//! Softened Newtonian gravity between every pair of bodies
//!
//! Forces, not accelerations, are produced here: each pair's force is
//! handed to both bodies through `Body::apply_force`, which divides by the
//! receiving body's own mass.

use super::states::{Body, NVec2};
use super::vector::{norm, normalize, scale, subtract};

/// 2D Newtonian gravity with a fixed softening length
/// `F = G * mi * mj / (d^2 + eps^2)` along the line between the centers,
/// so the magnitude stays finite down to zero separation
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant, internal units
    pub softening: f64, // eps
}

impl NewtonianGravity {
    /// Force on `a` due to `b`; the force on `b` is its exact negation
    pub fn pair_force(&self, a: &Body, b: &Body) -> NVec2 {
        // r points from a to b, so a is pulled along +r
        let r = subtract(b.position, a.position);
        let d = norm(r);

        let eps2 = self.softening * self.softening;
        let magnitude = self.g * a.mass() * b.mass() / (d * d + eps2);

        scale(normalize(r), magnitude)
    }

    /// Apply the pair force to every unordered pair (i, j) with i < j
    /// +F on body i, -F on body j, each pair visited once
    pub fn accumulate(&self, bodies: &mut [Body]) {
        let n = bodies.len();
        if n < 2 {
            return;
        }

        for i in 0..n {
            // split so body i and the tail j > i can be borrowed together
            let (head, tail) = bodies.split_at_mut(i + 1);
            let bi = &mut head[i];

            for bj in tail.iter_mut() {
                let force = self.pair_force(bi, bj);
                bi.apply_force(force);
                bj.apply_force(-force);
            }
        }
    }
}
