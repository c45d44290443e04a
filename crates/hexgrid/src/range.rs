//! Grid-distance enumeration: filled hexagons and hexagonal rings.
//!
//! Both queries return the empty set for any radius below 1.
//!
//! - Ring n > 0: 6n hexes
//! - Range n > 0: 1 + 3n(n+1) hexes

use std::cmp;

use tracing::trace;

use crate::direction::Direction;
use crate::hex::{Delta, Hex};
use crate::HexSet;

/// Number of hexes [`ring`] returns for `radius`.
#[inline]
pub const fn ring_size(radius: i32) -> usize {
    if radius < 1 {
        0
    } else {
        6 * radius as usize
    }
}

/// Number of hexes [`range`] returns for `radius`.
///
/// Formula: 1 + 3n(n+1)
#[inline]
pub const fn range_size(radius: i32) -> usize {
    if radius < 1 {
        0
    } else {
        let n = radius as usize;
        1 + 3 * n * (n + 1)
    }
}

/// All hexes within `radius` steps of `center`.
pub fn range(center: Hex, radius: i32) -> HexSet {
    let mut results = HexSet::with_capacity(range_size(radius));
    if radius < 1 {
        return results;
    }

    for x in -radius..=radius {
        // Clamping y keeps z = -x - y inside the radius too; iterating
        // y over the full [-radius, radius] would give a rhombus.
        let y_min = cmp::max(-radius, -x - radius);
        let y_max = cmp::min(radius, -x + radius);
        for y in y_min..=y_max {
            results.insert(center + Delta::new(x, y));
        }
    }

    trace!(%center, radius, len = results.len(), "range");
    results
}

/// The hexes exactly `radius` steps from `center`.
///
/// The walk starts `radius` steps out in [`Direction::PosS`] and then runs
/// the six edges of the hexagon, `radius` steps each. Edge directions follow
/// the enumeration order cyclically, beginning two places after `PosS`, so
/// the walk turns at each corner and ends back at its start.
pub fn ring(center: Hex, radius: i32) -> HexSet {
    let mut results = HexSet::with_capacity(ring_size(radius));
    if radius < 1 {
        return results;
    }

    let mut hex = center + Direction::PosS.delta() * radius;
    let first_edge = Direction::PosS.index() + 2;
    for edge in 0..6 {
        let direction = Direction::ALL[(first_edge + edge) % 6];
        for _ in 0..radius {
            hex = hex.neighbor(direction);
            results.insert(hex);
        }
    }

    trace!(%center, radius, len = results.len(), "ring");
    results
}
