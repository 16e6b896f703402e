//! The chip canvas.

use serde::{Deserialize, Serialize};

/// The rectangular chip canvas. Immutable once constructed; owned by
/// [`Input`](crate::Input) and borrowed by every encoder that needs the
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chip {
    /// Left edge.
    pub origin_x: i64,
    /// Bottom edge.
    pub origin_y: i64,
    /// Extent along x.
    pub width: i64,
    /// Extent along y.
    pub height: i64,
}

impl Chip {
    /// A chip with an explicit origin.
    pub fn new(origin_x: i64, origin_y: i64, width: i64, height: i64) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    /// A chip of the given extent centered on the coordinate origin.
    pub fn centered(width: i64, height: i64) -> Self {
        Self {
            origin_x: -width / 2,
            origin_y: -height / 2,
            width,
            height,
        }
    }

    /// Left edge.
    pub fn x_min(&self) -> i64 {
        self.origin_x
    }

    /// Right edge.
    pub fn x_max(&self) -> i64 {
        self.origin_x + self.width
    }

    /// Bottom edge.
    pub fn y_min(&self) -> i64 {
        self.origin_y
    }

    /// Top edge.
    pub fn y_max(&self) -> i64 {
        self.origin_y + self.height
    }
}
