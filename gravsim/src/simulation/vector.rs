//! Pure vector helpers over [`NVec2`]
//!
//! Thin, named wrappers around nalgebra so the force law and merge code
//! read the same way the physics is written down. None of these keep state
//! or alias their inputs (everything is `Copy`).

use super::states::NVec2;

/// a + b
#[inline]
pub fn add(a: NVec2, b: NVec2) -> NVec2 {
    a + b
}

/// a - b
#[inline]
pub fn subtract(a: NVec2, b: NVec2) -> NVec2 {
    a - b
}

/// s * a
#[inline]
pub fn scale(a: NVec2, s: f64) -> NVec2 {
    a * s
}

#[inline]
pub fn dot(a: NVec2, b: NVec2) -> f64 {
    a.dot(&b)
}

/// Euclidean length
#[inline]
pub fn norm(a: NVec2) -> f64 {
    a.norm()
}

/// |a - b|
#[inline]
pub fn distance(a: NVec2, b: NVec2) -> f64 {
    norm(subtract(a, b))
}

/// Unit vector along `a`
/// A zero-length input gives the zero vector, so a pair of coincident
/// bodies exerts no force on each other instead of producing NaN
#[inline]
pub fn normalize(a: NVec2) -> NVec2 {
    let n = norm(a);
    if n == 0.0 {
        NVec2::zeros()
    } else {
        scale(a, n.recip())
    }
}
