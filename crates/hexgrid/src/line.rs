//! Straight lines across the grid.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::direction::Direction;
use crate::hex::{FractionalHex, Hex};

/// The hexes on the straight path from `a` to `b`, both inclusive.
///
/// The path has exactly `a.distance(b) + 1` entries, starts at `a`, ends at
/// `b`, and every consecutive pair are neighbors. Cube coordinates are
/// sampled at `t = i / n` for `i` in `0..=n` and rounded with
/// [`FractionalHex::round`].
///
/// If a sample rounds onto a hex already on the path, the path steps on
/// from it in the direction of `b - a` until it reaches an unvisited hex.
pub fn line(a: Hex, b: Hex) -> Vec<Hex> {
    let n = a.distance(b);
    if n == 0 {
        return vec![a];
    }

    let direction = (b - a).direction();
    let steps = n as usize;
    let mut path = Vec::with_capacity(steps + 1);
    let mut visited = HashSet::with_capacity(steps + 1);

    for i in 0..=n {
        let t = f64::from(i) / f64::from(n);
        let sample = FractionalHex::lerp(a, b, t).round();
        path.push(claim(sample, direction, &mut visited));
    }

    if path.last() != Some(&b) {
        path.push(b);
    }

    trace!(%a, %b, len = path.len(), "line");
    path
}

/// Marks the first hex not yet in `visited`, starting at `hex` and stepping
/// towards `direction`, and returns it.
fn claim(mut hex: Hex, direction: Direction, visited: &mut HashSet<Hex>) -> Hex {
    while !visited.insert(hex) {
        debug!(%hex, %direction, "line sample collided, stepping on");
        hex = hex.neighbor(direction);
    }
    hex
}
