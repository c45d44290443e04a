//! Edge directions and corner diagonals.
//!
//! Both are closed enumerations: six meaningful values plus an `Undefined`
//! sentinel that maps to the zero delta. Table lookups are exhaustive by
//! construction, so no index can fall outside the tables.
//!
//! The enumeration order is significant. Ring walking in [`crate::ring`]
//! steps through the directions in this order.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::hex::Delta;

/// One of the six edge-adjacent neighbor directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Cube delta (+1, 0, -1)
    PosQ,
    /// Cube delta (+1, -1, 0)
    NegR,
    /// Cube delta (0, -1, +1)
    PosS,
    /// Cube delta (-1, 0, +1)
    NegQ,
    /// Cube delta (-1, +1, 0)
    PosR,
    /// Cube delta (0, +1, -1)
    NegS,
    /// Placeholder with no geometric meaning. Its delta is zero.
    Undefined,
}

/// Unit deltas for each direction, indexed by discriminant.
const NEIGHBORS: [Delta; 7] = [
    Delta::new(1, 0),  // PosQ
    Delta::new(1, -1), // NegR
    Delta::new(0, -1), // PosS
    Delta::new(-1, 0), // NegQ
    Delta::new(-1, 1), // PosR
    Delta::new(0, 1),  // NegS
    Delta::ZERO,       // Undefined
];

impl Direction {
    /// The six meaningful directions, in enumeration order.
    pub const ALL: [Self; 6] = [
        Self::PosQ,
        Self::NegR,
        Self::PosS,
        Self::NegQ,
        Self::PosR,
        Self::NegS,
    ];

    /// Position in the enumeration (`Undefined` is 6).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit delta for one step in this direction.
    pub const fn delta(self) -> Delta {
        NEIGHBORS[self as usize]
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Self::PosQ => Self::NegQ,
            Self::NegR => Self::PosR,
            Self::PosS => Self::NegS,
            Self::NegQ => Self::PosQ,
            Self::PosR => Self::NegR,
            Self::NegS => Self::PosS,
            Self::Undefined => Self::Undefined,
        }
    }

    /// Classify an arbitrary delta.
    ///
    /// The cube axis with the largest magnitude picks the direction and its
    /// sign picks Pos/Neg. Ties prefer q over r, and r over s. Line drawing
    /// depends on this exact order to stay deterministic.
    ///
    /// The zero delta has no direction and yields `Undefined`; every other
    /// delta yields one of [`Direction::ALL`].
    pub fn of(delta: Delta) -> Self {
        if delta == Delta::ZERO {
            return Self::Undefined;
        }

        let [q, r, s] = delta.abs();
        if q >= r && q >= s {
            if delta.dq() < 0 {
                Self::NegQ
            } else {
                Self::PosQ
            }
        } else if r >= s {
            if delta.dr() < 0 {
                Self::NegR
            } else {
                Self::PosR
            }
        } else if delta.ds() < 0 {
            Self::NegS
        } else {
            Self::PosS
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::PosQ => "PosQ",
            Self::NegR => "NegR",
            Self::PosS => "PosS",
            Self::NegQ => "NegQ",
            Self::PosR => "PosR",
            Self::NegS => "NegS",
            Self::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .chain([Self::Undefined])
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownDirection(s.to_string()))
    }
}

/// One of the six corner-adjacent (two-step) diagonal moves.
///
/// Diagonal `i` is the sum of direction `i` and direction `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagonal {
    /// Cube delta (+2, -1, -1)
    PosQ,
    /// Cube delta (+1, -2, +1)
    NegR,
    /// Cube delta (-1, -1, +2)
    PosS,
    /// Cube delta (-2, +1, +1)
    NegQ,
    /// Cube delta (-1, +2, -1)
    PosR,
    /// Cube delta (+1, +1, -2)
    NegS,
    /// Placeholder with no geometric meaning. Its delta is zero.
    Undefined,
}

const DIAGONALS: [Delta; 7] = [
    Delta::new(2, -1),  // PosQ
    Delta::new(1, -2),  // NegR
    Delta::new(-1, -1), // PosS
    Delta::new(-2, 1),  // NegQ
    Delta::new(-1, 2),  // PosR
    Delta::new(1, 1),   // NegS
    Delta::ZERO,        // Undefined
];

impl Diagonal {
    /// The six meaningful diagonals, in enumeration order.
    pub const ALL: [Self; 6] = [
        Self::PosQ,
        Self::NegR,
        Self::PosS,
        Self::NegQ,
        Self::PosR,
        Self::NegS,
    ];

    /// Position in the enumeration (`Undefined` is 6).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Delta for one diagonal move.
    pub const fn delta(self) -> Delta {
        DIAGONALS[self as usize]
    }

    const fn name(self) -> &'static str {
        match self {
            Self::PosQ => "PosQ",
            Self::NegR => "NegR",
            Self::PosS => "PosS",
            Self::NegQ => "NegQ",
            Self::PosR => "PosR",
            Self::NegS => "NegS",
            Self::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for Diagonal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Diagonal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .chain([Self::Undefined])
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownDiagonal(s.to_string()))
    }
}
