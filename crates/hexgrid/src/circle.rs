//! Pixel-radius enumeration: approximating circles with hexes.
//!
//! The outline is traced with the midpoint circle algorithm in pixel space
//! around the whole-pixel center of the center hex (see
//! [`Layout::pixel_center_for`]), and every sampled pixel is mapped back to
//! the hex containing it.

use tracing::{debug, trace};

use crate::hex::Hex;
use crate::layout::{Layout, PixelPoint};
use crate::line::line;
use crate::HexSet;

impl Layout {
    /// Hexes whose area the circle of `radius` pixels around `center`
    /// passes through.
    ///
    /// A radius smaller than the hex size on both axes cannot resolve a
    /// ring, and yields just `{center}`.
    pub fn ring_for(&self, center: Hex, radius: i32) -> HexSet {
        let mut result = HexSet::new();
        let size = self.size();
        if f64::from(radius) < size.x && f64::from(radius) < size.y {
            debug!(%center, radius, "pixel radius below hex size");
            result.insert(center);
            return result;
        }

        let origin = self.pixel_center_for(center);
        let (mut px, mut py) = (radius, 0);
        let mut decision = 1 - radius;

        while px > py {
            py += 1;
            if decision <= 0 {
                decision += 2 * py + 1;
            } else {
                px -= 1;
                decision += 2 * py - 2 * px + 1;
            }

            if px < py {
                break;
            }

            for (dx, dy) in octants(px, py) {
                let point = origin + PixelPoint::new(f64::from(dx), f64::from(dy));
                result.insert(self.hex_for(point));
            }
        }

        trace!(%center, radius, len = result.len(), "ring_for");
        result
    }

    /// Hexes inside the circle of `radius` pixels around `center`.
    ///
    /// The disk is filled by drawing a [`line`] from every hex of
    /// [`Layout::ring_for`] back to `center`.
    pub fn area_for(&self, center: Hex, radius: i32) -> HexSet {
        let ring = self.ring_for(center, radius);
        let mut result = HexSet::with_capacity(ring.len() * 2);
        for hex in ring {
            result.extend(line(hex, center));
        }

        trace!(%center, radius, len = result.len(), "area_for");
        result
    }
}

/// The eight reflections of an octant point.
fn octants(x: i32, y: i32) -> [(i32, i32); 8] {
    [
        (x, y),
        (-x, y),
        (x, -y),
        (-x, -y),
        (y, x),
        (-y, x),
        (y, -x),
        (-y, -x),
    ]
}
