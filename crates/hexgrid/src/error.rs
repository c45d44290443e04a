//! Error types for hexgrid.
//!
//! The geometric operations are total; only construction from untrusted
//! input (explicit cube triples, layout configuration, parsed names) fails.

use thiserror::Error;

/// Result type for hexgrid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building hexgrid values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Cube components that do not satisfy `dq + dr + ds == 0`.
    #[error("invalid delta ({dq}, {dr}, {ds}): components must sum to zero")]
    InvalidDelta { dq: i32, dr: i32, ds: i32 },

    /// Layout size must be finite and strictly positive on both axes.
    #[error("invalid layout size ({x}, {y}): must be finite and positive")]
    InvalidSize { x: f64, y: f64 },

    /// Layout origin must be finite.
    #[error("invalid layout origin ({x}, {y}): must be finite")]
    InvalidOrigin { x: f64, y: f64 },

    /// Unrecognized direction name.
    #[error("unknown direction: {0}")]
    UnknownDirection(String),

    /// Unrecognized diagonal name.
    #[error("unknown diagonal: {0}")]
    UnknownDiagonal(String),

    /// Unrecognized orientation name.
    #[error("unknown orientation: {0}")]
    UnknownOrientation(String),
}
