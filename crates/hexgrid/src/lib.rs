//! Hexgrid
//!
//! Coordinate geometry for hexagonal tessellations.
//!
//! # Coordinates
//!
//! Cells are addressed with axial coordinates (q, r) and an implicit third
//! cube axis s = -q - r. Arithmetic, distance and direction work on cube
//! [`Delta`]s, whose components always sum to zero.
//!
//! # Enumeration
//!
//! Two metrics are supported:
//!
//! - Grid steps: [`line`], [`range`] and [`ring`]
//! - Pixel radius: [`Layout::ring_for`] and [`Layout::area_for`], which
//!   approximate a circle in screen space with hexes
//!
//! Enumerations return a [`HexSet`]; only [`line`] is ordered.
//!
//! # Pixel space
//!
//! A [`Layout`] maps hexes to pixels and back for one of the two
//! [`Orientation`]s (pointy-top or flat-top), with independent x and y
//! scale.
//!
//! Every function here is pure. Nothing holds state between calls.

mod circle;
mod config;
mod direction;
mod error;
mod hex;
mod layout;
mod line;
mod range;

use std::collections::HashSet;

pub use config::LayoutConfig;
pub use direction::{Diagonal, Direction};
pub use error::{Error, Result};
pub use hex::{Delta, FractionalHex, Hex};
pub use layout::{Layout, Orientation, OrientationKind, PixelPoint, PIXEL_TOLERANCE};
pub use line::line;
pub use range::{range, range_size, ring, ring_size};

/// An unordered set of hexes, as returned by the enumeration queries.
pub type HexSet = HashSet<Hex>;
