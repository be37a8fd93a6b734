//! Error type shared by the engine, body construction and scenario loading.

use thiserror::Error;

/// Everything the library can reject.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Mass must be finite and strictly positive, otherwise `a = F / m` is not finite.
    #[error("mass must be finite and strictly positive, got {0}")]
    InvalidMass(f64),

    /// Radius must be finite and zero or positive.
    #[error("radius must be finite and not negative, got {0}")]
    InvalidRadius(f64),

    /// A body index that does not exist in the engine.
    #[error("body index {index} out of range (engine holds {len} bodies)")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of bodies at the time of the call.
        len: usize,
    },

    /// A configured vector had the wrong number of components.
    #[error("{field} must have {expected} components, got {got}")]
    DimensionMismatch {
        /// Which config field was malformed (`x` or `v`).
        field: &'static str,
        expected: usize,
        got: usize,
    },

    /// A configured vector component was NaN or infinite.
    #[error("{field} must have finite components, got [{x}, {y}]")]
    NonFiniteVector { field: &'static str, x: f64, y: f64 },

    /// A run setting (dt, timescale, bound) that the driver cannot use.
    #[error("invalid run setting `{name}`: {value}")]
    InvalidRunSetting { name: &'static str, value: f64 },
}
