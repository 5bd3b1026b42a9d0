//! Geometric value types
//!
//! Positions, dimensions, and axis-aligned bounds in centimeters.
//! Cabinets and consoles use a corner origin (x rightward, y upward,
//! z from back to front); tables use a tabletop-center origin with legs
//! extending into negative y. The assembler documents which convention
//! applies to each product type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 3D position in centimeters.
///
/// Components always refer to the center of the component they place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// X-axis position (width direction)
    pub x: f64,
    /// Y-axis position (height direction)
    pub y: f64,
    /// Z-axis position (depth direction)
    pub z: f64,
}

impl Position {
    /// Create a new position
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin position
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// This position translated by the given offsets
    pub fn translated(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// True if all components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1}, {:.1})", self.x, self.y, self.z)
    }
}

/// Outer dimensions of a product or component, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Extent along the X axis
    pub width: f64,
    /// Extent along the Y axis
    pub height: f64,
    /// Extent along the Z axis
    pub depth: f64,
}

impl Dimensions {
    /// Create a new dimension triple
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// True if all extents are finite numbers
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.depth.is_finite()
    }

    /// True if all extents are strictly positive
    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.depth > 0.0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1} x {:.1} x {:.1} cm",
            self.width, self.height, self.depth
        )
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner
    pub min: Position,
    /// Maximum corner
    pub max: Position,
}

impl Bounds {
    /// Create bounds from two corner positions
    pub fn new(min: Position, max: Position) -> Self {
        Self { min, max }
    }

    /// Bounds spanning from the origin to the given dimensions
    pub fn from_dimensions(dims: Dimensions) -> Self {
        Self {
            min: Position::ZERO,
            max: Position::new(dims.width, dims.height, dims.depth),
        }
    }

    /// Bounds centered on a position with the given extents
    pub fn from_center(center: Position, size: Dimensions) -> Self {
        let half = Position::new(size.width / 2.0, size.height / 2.0, size.depth / 2.0);
        Self {
            min: Position::new(center.x - half.x, center.y - half.y, center.z - half.z),
            max: Position::new(center.x + half.x, center.y + half.y, center.z + half.z),
        }
    }

    /// Check whether a position lies inside the bounds, with tolerance
    /// for floating rounding at the faces.
    pub fn contains(&self, p: Position) -> bool {
        const EPS: f64 = 1e-9;
        p.x >= self.min.x - EPS
            && p.x <= self.max.x + EPS
            && p.y >= self.min.y - EPS
            && p.y <= self.max.y + EPS
            && p.z >= self.min.z - EPS
            && p.z <= self.max.z + EPS
    }

    /// The center of the bounds
    pub fn center(&self) -> Position {
        Position::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// The extents of the bounds
    pub fn size(&self) -> Dimensions {
        Dimensions::new(
            self.max.x - self.min.x,
            self.max.y - self.min.y,
            self.max.z - self.min.z,
        )
    }
}
