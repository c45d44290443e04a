//! Plain-data layout configuration.
//!
//! [`LayoutConfig`] is what a host application stores or loads: an
//! orientation name, a per-axis size and an origin. Converting it into a
//! [`Layout`] validates it. With the `serde` feature, `Layout` itself
//! deserializes through this type, so an invalid layout never loads.

use crate::error::Error;
use crate::layout::{Layout, OrientationKind, PixelPoint};

/// Serializable description of a [`Layout`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Pointy-top or flat-top.
    pub orientation: OrientationKind,
    /// Per-axis hex size in pixels.
    pub size: PixelPoint,
    /// Pixel center of the origin hex. Defaults to (0, 0).
    #[cfg_attr(feature = "serde", serde(default))]
    pub origin: PixelPoint,
}

impl LayoutConfig {
    /// Config with the same size on both axes and the origin at (0, 0).
    pub const fn uniform(orientation: OrientationKind, size: f64) -> Self {
        Self {
            orientation,
            size: PixelPoint::new(size, size),
            origin: PixelPoint::ZERO,
        }
    }
}

impl TryFrom<LayoutConfig> for Layout {
    type Error = Error;

    fn try_from(config: LayoutConfig) -> Result<Self, Self::Error> {
        Layout::new(config.orientation.orientation(), config.size, config.origin)
    }
}

impl From<Layout> for LayoutConfig {
    fn from(layout: Layout) -> Self {
        layout.config()
    }
}

impl Layout {
    /// The configuration this layout was built from.
    pub fn config(&self) -> LayoutConfig {
        LayoutConfig {
            orientation: self.orientation().kind(),
            size: self.size(),
            origin: self.origin(),
        }
    }
}
