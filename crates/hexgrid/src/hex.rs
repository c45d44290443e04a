//! Hexagonal coordinate algebra.
//!
//! Positions use axial coordinates: two stored axes (q, r) at 60 degrees,
//! with the implicit third cube axis s = -q - r. Storing two values means
//! the cube invariant cannot drift.
//!
//! Displacements between positions are [`Delta`]s, which carry all three
//! cube components. Every constructor of a `Delta` keeps
//! `dq + dr + ds == 0`, so distance and direction can be read directly off
//! the components.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::direction::{Diagonal, Direction};
use crate::error::{Error, Result};

/// A single cell of the hex grid.
///
/// Equality and hashing use (q, r) only. Two hexes with equal coordinates
/// are the same cell no matter how they were derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hex {
    /// First axial coordinate
    pub q: i32,
    /// Second axial coordinate
    pub r: i32,
}

impl Hex {
    /// Origin of the coordinate system.
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// Create a new hex from axial coordinates.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Compute the implicit third axis: s = -q - r.
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Displacement of this hex from the origin.
    pub const fn to_delta(self) -> Delta {
        Delta::new(self.q, self.r)
    }

    /// Grid-step distance between two hexes.
    pub fn distance(self, other: Self) -> u32 {
        (self - other).length()
    }

    /// The hex one step away in `direction`.
    ///
    /// [`Direction::Undefined`] maps to the zero delta, so it returns `self`.
    pub fn neighbor(self, direction: Direction) -> Self {
        self + direction.delta()
    }

    /// The hex across the corner in `diagonal`.
    pub fn diagonal_neighbor(self, diagonal: Diagonal) -> Self {
        self + diagonal.delta()
    }

    /// All six edge neighbors, in direction order.
    pub fn neighbors(self) -> [Self; 6] {
        Direction::ALL.map(|direction| self.neighbor(direction))
    }

    /// Rotate this hex 60 degrees clockwise around `origin`.
    pub fn rotate_clockwise(self, origin: Self) -> Self {
        origin + (self - origin).rotate_clockwise()
    }

    /// Rotate this hex 60 degrees counter-clockwise around `origin`.
    pub fn rotate_counter_clockwise(self, origin: Self) -> Self {
        origin + (self - origin).rotate_counter_clockwise()
    }

    pub(crate) fn to_fractional(self) -> FractionalHex {
        FractionalHex::new(f64::from(self.q), f64::from(self.r))
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s())
    }
}

/// The displacement between two hexes, in cube components.
///
/// Constraint: `dq + dr + ds == 0`. The fields are private and every
/// constructor upholds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(i32, i32, i32)", into = "(i32, i32, i32)")
)]
pub struct Delta {
    dq: i32,
    dr: i32,
    ds: i32,
}

impl Delta {
    /// The zero displacement.
    pub const ZERO: Self = Self { dq: 0, dr: 0, ds: 0 };

    /// Create a delta from two axial components, deriving the third.
    pub const fn new(dq: i32, dr: i32) -> Self {
        Self {
            dq,
            dr,
            ds: -dq - dr,
        }
    }

    /// Create a delta from explicit cube components.
    pub fn from_cube(dq: i32, dr: i32, ds: i32) -> Result<Self> {
        if i64::from(dq) + i64::from(dr) + i64::from(ds) != 0 {
            return Err(Error::InvalidDelta { dq, dr, ds });
        }
        Ok(Self { dq, dr, ds })
    }

    /// Displacement along the q axis.
    pub const fn dq(&self) -> i32 {
        self.dq
    }

    /// Displacement along the r axis.
    pub const fn dr(&self) -> i32 {
        self.dr
    }

    /// Displacement along the s axis.
    pub const fn ds(&self) -> i32 {
        self.ds
    }

    /// The hex reached by applying this delta to the origin.
    pub const fn to_hex(self) -> Hex {
        Hex::new(self.dq, self.dr)
    }

    /// Absolute value of each cube component, as `[q, r, s]`.
    pub const fn abs(self) -> [u32; 3] {
        [
            self.dq.unsigned_abs(),
            self.dr.unsigned_abs(),
            self.ds.unsigned_abs(),
        ]
    }

    /// Multiply every component by `k`.
    pub const fn scale(self, k: i32) -> Self {
        Self {
            dq: self.dq * k,
            dr: self.dr * k,
            ds: self.ds * k,
        }
    }

    /// Hex distance covered by this delta: `(|dq| + |dr| + |ds|) / 2`.
    ///
    /// The sum is always even for a zero-sum delta.
    pub const fn length(self) -> u32 {
        let [q, r, s] = self.abs();
        (q + r + s) / 2
    }

    /// Classify this delta into one of the six directions.
    ///
    /// See [`Direction::of`].
    pub fn direction(self) -> Direction {
        Direction::of(self)
    }

    /// Rotate 60 degrees clockwise: `(q, r, s) -> (-r, -s, -q)`.
    pub const fn rotate_clockwise(self) -> Self {
        Self {
            dq: -self.dr,
            dr: -self.ds,
            ds: -self.dq,
        }
    }

    /// Rotate 60 degrees counter-clockwise: `(q, r, s) -> (-s, -q, -r)`.
    pub const fn rotate_counter_clockwise(self) -> Self {
        Self {
            dq: -self.ds,
            dr: -self.dq,
            ds: -self.dr,
        }
    }
}

impl TryFrom<(i32, i32, i32)> for Delta {
    type Error = Error;

    fn try_from((dq, dr, ds): (i32, i32, i32)) -> Result<Self> {
        Self::from_cube(dq, dr, ds)
    }
}

impl From<Delta> for (i32, i32, i32) {
    fn from(delta: Delta) -> Self {
        (delta.dq, delta.dr, delta.ds)
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.dq, self.dr, self.ds)
    }
}

impl Add<Delta> for Hex {
    type Output = Hex;

    #[inline]
    fn add(self, delta: Delta) -> Hex {
        Hex {
            q: self.q + delta.dq,
            r: self.r + delta.dr,
        }
    }
}

impl Sub<Delta> for Hex {
    type Output = Hex;

    #[inline]
    fn sub(self, delta: Delta) -> Hex {
        self + -delta
    }
}

impl Sub for Hex {
    type Output = Delta;

    /// `a - b` is the delta that takes `b` to `a`.
    #[inline]
    fn sub(self, other: Hex) -> Delta {
        Delta::new(self.q - other.q, self.r - other.r)
    }
}

impl Add for Delta {
    type Output = Delta;

    #[inline]
    fn add(self, other: Delta) -> Delta {
        Delta {
            dq: self.dq + other.dq,
            dr: self.dr + other.dr,
            ds: self.ds + other.ds,
        }
    }
}

impl Neg for Delta {
    type Output = Delta;

    #[inline]
    fn neg(self) -> Delta {
        self.scale(-1)
    }
}

impl Mul<i32> for Delta {
    type Output = Delta;

    #[inline]
    fn mul(self, k: i32) -> Delta {
        self.scale(k)
    }
}

/// A point in continuous cube space, not necessarily a cell center.
///
/// Produced by interpolation and by pixel lookups, and turned back into a
/// [`Hex`] with [`FractionalHex::round`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FractionalHex {
    /// Continuous q coordinate
    pub q: f64,
    /// Continuous r coordinate
    pub r: f64,
    /// Continuous s coordinate
    pub s: f64,
}

impl FractionalHex {
    /// Create from two axial components, deriving `s = -q - r`.
    pub fn new(q: f64, r: f64) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Linear interpolation between two hex centers in cube space.
    pub fn lerp(a: Hex, b: Hex, t: f64) -> Self {
        let a = a.to_fractional();
        let b = b.to_fractional();
        Self {
            q: a.q + (b.q - a.q) * t,
            r: a.r + (b.r - a.r) * t,
            s: a.s + (b.s - a.s) * t,
        }
    }

    /// Round to the nearest cell while keeping the cube invariant.
    ///
    /// Each component is rounded on its own, then the component with the
    /// largest rounding error is recomputed from the other two. Ties go to
    /// q first, then r, and s takes whatever is left.
    pub fn round(self) -> Hex {
        let mut q = self.q.round();
        let mut r = self.r.round();
        let s = self.s.round();

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = -r - s;
        } else if r_diff > s_diff {
            r = -q - s;
        }
        // Otherwise s is the corrected axis, and it is never stored.

        Hex::new(q as i32, r as i32)
    }
}
