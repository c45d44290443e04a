//! Mapping between hex coordinates and continuous pixel space.
//!
//! A [`Layout`] is an affine transform: an [`Orientation`] matrix, a
//! per-axis size (non-uniform stretching is allowed) and an origin offset.
//! Two orientations exist, pointy-top and flat-top, both compile-time
//! constants.
//!
//! Pixel results are only reproducible up to floating point error; compare
//! them with [`PixelPoint::approx_eq`] and [`PIXEL_TOLERANCE`].

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::hex::{FractionalHex, Hex};

/// Tolerance for comparing pixel coordinates.
pub const PIXEL_TOLERANCE: f64 = 1e-4;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A point in continuous pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPoint {
    /// Horizontal coordinate, growing to the right.
    pub x: f64,
    /// Vertical coordinate, growing downwards.
    pub y: f64,
}

impl PixelPoint {
    /// The point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True if both coordinates are within `tolerance` of `other`'s.
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for PixelPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for PixelPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

/// Names the two supported orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OrientationKind {
    /// Corners at top and bottom.
    #[cfg_attr(feature = "serde", serde(alias = "pointy-top"))]
    Pointy,
    /// Edges at top and bottom.
    #[cfg_attr(feature = "serde", serde(alias = "flat-top"))]
    Flat,
}

impl OrientationKind {
    /// The orientation constant this kind names.
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::Pointy => Orientation::POINTY,
            Self::Flat => Orientation::FLAT,
        }
    }
}

impl fmt::Display for OrientationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pointy => "pointy",
            Self::Flat => "flat",
        })
    }
}

impl FromStr for OrientationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pointy" | "pointy-top" => Ok(Self::Pointy),
            "flat" | "flat-top" => Ok(Self::Flat),
            _ => Err(Error::UnknownOrientation(s.to_string())),
        }
    }
}

/// Fixed geometry of a hex orientation.
///
/// `forward` maps axial (q, r) to unscaled pixels and `inverse` maps back,
/// both as row-major 2x2 matrices. Corner `k` sits at angle
/// `60° * (start_angle + k)` from the center; `cos`/`sin` hold those
/// angles precomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    kind: OrientationKind,
    forward: [f64; 4],
    inverse: [f64; 4],
    start_angle: f64,
    cos: [f64; 6],
    sin: [f64; 6],
}

impl Orientation {
    /// Pointy-top hexes: corners at 30°, 90°, ..., 330°.
    pub const POINTY: Self = Self {
        kind: OrientationKind::Pointy,
        forward: [SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0],
        inverse: [SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
        start_angle: 0.5,
        cos: [SQRT_3 / 2.0, 0.0, -SQRT_3 / 2.0, -SQRT_3 / 2.0, 0.0, SQRT_3 / 2.0],
        sin: [0.5, 1.0, 0.5, -0.5, -1.0, -0.5],
    };

    /// Flat-top hexes: corners at 0°, 60°, ..., 300°.
    pub const FLAT: Self = Self {
        kind: OrientationKind::Flat,
        forward: [3.0 / 2.0, 0.0, SQRT_3 / 2.0, SQRT_3],
        inverse: [2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0],
        start_angle: 0.0,
        cos: [1.0, 0.5, -0.5, -1.0, -0.5, 0.5],
        sin: [0.0, SQRT_3 / 2.0, SQRT_3 / 2.0, 0.0, -SQRT_3 / 2.0, -SQRT_3 / 2.0],
    };

    /// Which of the two orientations this is.
    pub const fn kind(&self) -> OrientationKind {
        self.kind
    }

    /// Angle of corner 0, in sixths of a turn.
    pub const fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Unit-size offset of corner `corner` (taken modulo 6) from the center.
    pub const fn corner_offset(&self, corner: usize) -> (f64, f64) {
        (self.cos[corner % 6], self.sin[corner % 6])
    }

    /// Corners shared with the neighbor in `direction`.
    ///
    /// Returns two `(corner of this hex, corner of the neighbor)` pairs that
    /// land on the same pixel, or `None` for [`Direction::Undefined`].
    pub const fn shared_corners(&self, direction: Direction) -> Option<[(usize, usize); 2]> {
        if matches!(direction, Direction::Undefined) {
            return None;
        }
        // Pointy corners start half a step later, so edges shift by one.
        let base = match self.kind {
            OrientationKind::Pointy => 5,
            OrientationKind::Flat => 6,
        };
        let first = (base - direction.index()) % 6;
        let second = (first + 1) % 6;
        Some([(first, (first + 4) % 6), (second, (second + 2) % 6)])
    }
}

/// Size, origin and orientation of a hex grid in pixel space.
///
/// `Layout` holds no other state. Every transform is a pure function of the
/// layout and its argument.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::config::LayoutConfig", into = "crate::config::LayoutConfig")
)]
pub struct Layout {
    orientation: Orientation,
    size: PixelPoint,
    origin: PixelPoint,
}

impl Layout {
    /// Create a layout.
    ///
    /// Fails if either size component is not finite and positive, or the
    /// origin is not finite.
    pub fn new(orientation: Orientation, size: PixelPoint, origin: PixelPoint) -> Result<Self> {
        if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
            return Err(Error::InvalidSize {
                x: size.x,
                y: size.y,
            });
        }
        if !origin.is_finite() {
            return Err(Error::InvalidOrigin {
                x: origin.x,
                y: origin.y,
            });
        }
        Ok(Self {
            orientation,
            size,
            origin,
        })
    }

    /// Create a layout with the same size on both axes.
    pub fn uniform(orientation: Orientation, size: f64, origin: PixelPoint) -> Result<Self> {
        Self::new(orientation, PixelPoint::new(size, size), origin)
    }

    /// Orientation of the grid.
    pub const fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    /// Per-axis hex size: the distance from center to corner before
    /// stretching.
    pub const fn size(&self) -> PixelPoint {
        self.size
    }

    /// Pixel position of the center of `Hex::ORIGIN`.
    pub const fn origin(&self) -> PixelPoint {
        self.origin
    }

    /// Pixel center of `hex`.
    pub fn center_for(&self, hex: Hex) -> PixelPoint {
        self.offset_for(hex) + self.origin
    }

    /// Pixel center of `hex` snapped to whole pixels.
    ///
    /// The offset from the origin is truncated toward zero on each axis.
    pub fn pixel_center_for(&self, hex: Hex) -> PixelPoint {
        let offset = self.offset_for(hex);
        PixelPoint::new(offset.x.trunc(), offset.y.trunc()) + self.origin
    }

    /// Center of `hex` relative to the origin.
    fn offset_for(&self, hex: Hex) -> PixelPoint {
        let m = &self.orientation.forward;
        let q = f64::from(hex.q);
        let r = f64::from(hex.r);
        PixelPoint {
            x: (m[0] * q + m[1] * r) * self.size.x,
            y: (m[2] * q + m[3] * r) * self.size.y,
        }
    }

    /// The continuous cube position under a pixel.
    pub fn fractional_hex_for(&self, point: PixelPoint) -> FractionalHex {
        let m = &self.orientation.inverse;
        let x = (point.x - self.origin.x) / self.size.x;
        let y = (point.y - self.origin.y) / self.size.y;
        FractionalHex::new(m[0] * x + m[1] * y, m[2] * x + m[3] * y)
    }

    /// The hex containing a pixel.
    pub fn hex_for(&self, point: PixelPoint) -> Hex {
        self.fractional_hex_for(point).round()
    }

    /// Top-left corner of the bounding box of `hex`.
    pub fn top_left_for(&self, hex: Hex) -> PixelPoint {
        self.center_for(hex) - self.size
    }

    /// The six corners of `hex`, in orientation order.
    pub fn corners(&self, hex: Hex) -> [PixelPoint; 6] {
        let center = self.center_for(hex);
        std::array::from_fn(|k| {
            let (cos, sin) = self.orientation.corner_offset(k);
            PixelPoint {
                x: center.x + self.size.x * cos,
                y: center.y + self.size.y * sin,
            }
        })
    }

    /// The six corners of `hex` followed by its center.
    pub fn vertices(&self, hex: Hex) -> [PixelPoint; 7] {
        let corners = self.corners(hex);
        let center = self.center_for(hex);
        std::array::from_fn(|k| if k < 6 { corners[k] } else { center })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::hexes;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    fn layout(orientation: Orientation, size: f64, x: f64, y: f64) -> Layout {
        Layout::uniform(orientation, size, PixelPoint::new(x, y)).unwrap()
    }

    fn assert_points(result: &[PixelPoint], expected: &[(f64, f64)]) {
        assert_eq!(result.len(), expected.len());
        for (k, (point, &(x, y))) in result.iter().zip(expected).enumerate() {
            assert!(
                point.approx_eq(PixelPoint::new(x, y), PIXEL_TOLERANCE),
                "vertex {}: expected ({}, {}), got {}",
                k,
                x,
                y,
                point
            );
        }
    }

    #[test]
    fn trig_pairs_match_start_angle() {
        for orientation in [Orientation::POINTY, Orientation::FLAT] {
            for k in 0..6 {
                let angle = 2.0 * PI * (orientation.start_angle() + k as f64) / 6.0;
                let (cos, sin) = orientation.corner_offset(k);
                assert!((cos - angle.cos()).abs() < 1e-12, "{:?} corner {}", orientation.kind(), k);
                assert!((sin - angle.sin()).abs() < 1e-12, "{:?} corner {}", orientation.kind(), k);
            }
        }
    }

    #[test]
    fn inverse_undoes_forward() {
        for o in [Orientation::POINTY, Orientation::FLAT] {
            let (f, b) = (o.forward, o.inverse);
            let product = [
                b[0] * f[0] + b[1] * f[2],
                b[0] * f[1] + b[1] * f[3],
                b[2] * f[0] + b[3] * f[2],
                b[2] * f[1] + b[3] * f[3],
            ];
            for (got, want) in product.iter().zip([1.0, 0.0, 0.0, 1.0]) {
                assert!((got - want).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn screen_conversion() {
        let layout = layout(Orientation::FLAT, 10.0, 0.0, 0.0);
        let plan = [
            (Hex::new(0, 0), (0.0, 0.0), (-10.0, -10.0)),
            (Hex::new(2, -1), (30.0, 0.0), (20.0, -10.0)),
            (Hex::new(-2, 4), (-30.0, 51.9615), (-40.0, 41.9615)),
        ];
        for (hex, (cx, cy), (tx, ty)) in plan {
            let center = layout.center_for(hex);
            assert!(center.approx_eq(PixelPoint::new(cx, cy), PIXEL_TOLERANCE), "{}", center);
            assert_eq!(layout.hex_for(center), hex);
            let top_left = layout.top_left_for(hex);
            assert!(top_left.approx_eq(PixelPoint::new(tx, ty), PIXEL_TOLERANCE), "{}", top_left);
        }
        // A pixel off-center still lands in the same hex.
        assert_eq!(layout.hex_for(PixelPoint::new(-30.0, 51.0)), Hex::new(-2, 4));
    }

    #[test]
    fn pixel_center_truncates_toward_zero() {
        let pointy = layout(Orientation::POINTY, 10.0, 0.0, 0.0);
        assert_eq!(pointy.pixel_center_for(Hex::new(1, 0)), PixelPoint::new(17.0, 0.0));
        assert_eq!(pointy.pixel_center_for(Hex::new(-1, 0)), PixelPoint::new(-17.0, 0.0));

        let flat = layout(Orientation::FLAT, 10.0, 0.5, 2.0);
        assert_eq!(flat.pixel_center_for(Hex::new(-2, 4)), PixelPoint::new(-29.5, 53.0));
        assert_eq!(flat.pixel_center_for(Hex::ORIGIN), flat.origin());
    }

    #[test]
    fn size_accessor() {
        let plan = [
            (layout(Orientation::POINTY, 10.0, 0.0, 0.0), 10.0),
            (layout(Orientation::FLAT, 100.0, 0.0, 0.0), 100.0),
            (layout(Orientation::POINTY, 1000.0, 10.0, 10.0), 1000.0),
        ];
        for (layout, expected) in plan {
            assert_eq!(layout.size(), PixelPoint::new(expected, expected));
        }
    }

    #[test]
    fn rejects_bad_layouts() {
        let o = Orientation::POINTY;
        assert_eq!(
            Layout::new(o, PixelPoint::new(0.0, 5.0), PixelPoint::ZERO),
            Err(Error::InvalidSize { x: 0.0, y: 5.0 })
        );
        assert!(Layout::new(o, PixelPoint::new(5.0, -1.0), PixelPoint::ZERO).is_err());
        assert!(Layout::uniform(o, f64::NAN, PixelPoint::ZERO).is_err());
        assert!(matches!(
            Layout::uniform(o, 5.0, PixelPoint::new(f64::INFINITY, 0.0)),
            Err(Error::InvalidOrigin { .. })
        ));
    }

    #[test]
    fn vertices() {
        let plan: [(Layout, Hex, [(f64, f64); 7]); 5] = [
            (
                layout(Orientation::POINTY, 10.0, 0.0, 0.0),
                Hex::new(0, 0),
                [
                    (8.6603, 5.0), (0.0, 10.0), (-8.6603, 5.0),
                    (-8.6603, -5.0), (0.0, -10.0), (8.6603, -5.0),
                    (0.0, 0.0),
                ],
            ),
            (
                layout(Orientation::POINTY, 20.0, 0.0, 0.0),
                Hex::new(0, 0),
                [
                    (17.3205, 10.0), (0.0, 20.0), (-17.3205, 10.0),
                    (-17.3205, -10.0), (0.0, -20.0), (17.3205, -10.0),
                    (0.0, 0.0),
                ],
            ),
            (
                layout(Orientation::FLAT, 10.0, 0.0, 0.0),
                Hex::new(3, -2),
                [
                    (55.0, -8.6603), (50.0, 0.0), (40.0, 0.0),
                    (35.0, -8.6603), (40.0, -17.3205), (50.0, -17.3205),
                    (45.0, -8.6603),
                ],
            ),
            (
                layout(Orientation::FLAT, 10.0, 0.0, 0.0),
                Hex::new(3, -1),
                [
                    (55.0, 8.6603), (50.0, 17.3205), (40.0, 17.3205),
                    (35.0, 8.6603), (40.0, 0.0), (50.0, 0.0),
                    (45.0, 8.6603),
                ],
            ),
            (
                layout(Orientation::POINTY, 20.0, 40.0, 40.0),
                Hex::new(4, 6),
                [
                    (299.8076, 230.0), (282.4871, 240.0), (265.1666, 230.0),
                    (265.1666, 210.0), (282.4871, 200.0), (299.8076, 210.0),
                    (282.4871, 220.0),
                ],
            ),
        ];
        for (layout, hex, expected) in plan {
            assert_points(&layout.vertices(hex), &expected);
        }
    }

    #[test]
    fn corners_are_vertices_without_center() {
        let layout = layout(Orientation::FLAT, 12.0, 3.0, -7.0);
        let hex = Hex::new(-5, 2);
        assert_eq!(layout.corners(hex)[..], layout.vertices(hex)[..6]);
        assert_eq!(layout.vertices(hex)[6], layout.center_for(hex));
    }

    #[test]
    fn known_shared_vertices() {
        let plan = [
            (Orientation::POINTY, (0, 0), (1, 0), 0, 2),
            (Orientation::POINTY, (1, 0), (2, 0), 0, 2),
            (Orientation::POINTY, (2, 0), (3, 0), 0, 2),
            (Orientation::FLAT, (0, 0), (1, 0), 0, 4),
            (Orientation::FLAT, (1, 0), (2, 0), 0, 4),
            (Orientation::FLAT, (2, 0), (3, 0), 0, 4),
        ];
        for (k, (orientation, (aq, ar), (bq, br), va, vb)) in plan.into_iter().enumerate() {
            let layout = layout(orientation, 32.0, 0.0, 0.0);
            let v1 = layout.vertices(Hex::new(aq, ar));
            let v2 = layout.vertices(Hex::new(bq, br));
            assert!(
                v1[va].approx_eq(v2[vb], PIXEL_TOLERANCE),
                "index {}: vertex {} doesn't equal matching neighbor vertex {}",
                k,
                v1[va],
                v2[vb]
            );
        }
    }

    #[test]
    fn shared_corner_table() {
        assert_eq!(
            Orientation::POINTY.shared_corners(Direction::PosQ),
            Some([(5, 3), (0, 2)])
        );
        assert_eq!(
            Orientation::FLAT.shared_corners(Direction::PosQ),
            Some([(0, 4), (1, 3)])
        );
        assert_eq!(Orientation::FLAT.shared_corners(Direction::Undefined), None);
    }

    #[test]
    fn orientation_names() {
        assert_eq!("pointy".parse::<OrientationKind>(), Ok(OrientationKind::Pointy));
        assert_eq!("Flat-Top".parse::<OrientationKind>(), Ok(OrientationKind::Flat));
        assert!("skewed".parse::<OrientationKind>().is_err());
        assert_eq!(OrientationKind::Flat.to_string(), "flat");
        assert_eq!(OrientationKind::Pointy.orientation(), Orientation::POINTY);
    }

    fn layouts() -> impl Strategy<Value = Layout> {
        (
            prop_oneof![Just(Orientation::POINTY), Just(Orientation::FLAT)],
            1.0f64..64.0,
            1.0f64..64.0,
            -500.0f64..500.0,
            -500.0f64..500.0,
        )
            .prop_map(|(o, sx, sy, ox, oy)| {
                Layout::new(o, PixelPoint::new(sx, sy), PixelPoint::new(ox, oy)).unwrap()
            })
    }

    proptest! {
        #[test]
        fn center_round_trips(layout in layouts(), hex in hexes()) {
            prop_assert_eq!(layout.hex_for(layout.center_for(hex)), hex);
        }

        #[test]
        fn neighbors_share_two_corners(layout in layouts(), hex in hexes()) {
            let own = layout.corners(hex);
            for direction in Direction::ALL {
                let theirs = layout.corners(hex.neighbor(direction));
                let pairs = layout.orientation().shared_corners(direction).unwrap();
                for (mine, other) in pairs {
                    prop_assert!(
                        own[mine].approx_eq(theirs[other], PIXEL_TOLERANCE),
                        "{}: {} vs {}", direction, own[mine], theirs[other]
                    );
                }
            }
        }
    }
}
