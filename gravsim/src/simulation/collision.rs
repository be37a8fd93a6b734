//! Overlap test and perfectly inelastic merge of two bodies

use std::collections::VecDeque;

use super::params::MERGED_HISTORY_CAP;
use super::states::{Body, NVec2};
use super::vector::{add, dot, scale, subtract};

/// Bodies touching or overlapping count as colliding
pub fn are_colliding(a: &Body, b: &Body) -> bool {
    let d = subtract(a.position, b.position);
    let min_dist = a.radius() + b.radius();
    dot(d, d) <= min_dist * min_dist
}

/// Merge `a` and `b` into a single body at their center of mass
///
/// Mass and momentum are conserved, cross-sectional area is conserved
/// (`r = sqrt(ra^2 + rb^2)`), the heavier body's colour wins with ties going
/// to `a`, and the trails are concatenated and cut to the most recent
/// `MERGED_HISTORY_CAP` points.
pub fn merge_bodies(a: &Body, b: &Body) -> Body {
    let (ma, mb) = (a.mass(), b.mass());
    let total = ma + mb;

    let weighted = |xa: NVec2, xb: NVec2| add(scale(xa, ma), scale(xb, mb)) / total;
    let position = weighted(a.position, b.position);
    let velocity = weighted(a.velocity, b.velocity);

    let radius = (a.radius() * a.radius() + b.radius() * b.radius()).sqrt();

    let colour = if ma >= mb { a.colour.clone() } else { b.colour.clone() };

    let combined = a.history().len() + b.history().len();
    let skip = combined.saturating_sub(MERGED_HISTORY_CAP);
    let history: VecDeque<NVec2> = a
        .history()
        .iter()
        .chain(b.history().iter())
        .skip(skip)
        .copied()
        .collect();

    Body::from_parts(position, velocity, total, radius, colour, history)
}
