//! Type-safe coordinate spaces.
//!
//! # Coordinate Spaces
//!
//! - **Design space**: feet, origin at the bottom-left of the plot. Placed
//!   items always store their position here.
//! - **Surface space**: pixels, origin at the top-left of whatever surface the
//!   design is rendered onto. Only input and rendering deal in pixels.

use crate::{DesignError, Result};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Position in design space (feet).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DesignPoint(pub DVec2);

/// Offset in design space (feet).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DesignDelta(pub DVec2);

/// Position in surface space (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfacePoint(pub DVec2);

/// Size of the rendering surface (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceSize(pub DVec2);

/// Real-world size of a design plot in feet.
///
/// Both dimensions are positive and finite; the only way to get one is
/// through [`DesignExtent::new`] (or deserialization, which runs the same check).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawExtent")]
pub struct DesignExtent {
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
struct RawExtent {
    width: f64,
    height: f64,
}

impl TryFrom<RawExtent> for DesignExtent {
    type Error = DesignError;

    fn try_from(raw: RawExtent) -> Result<Self> {
        Self::new(raw.width, raw.height)
    }
}

impl DesignExtent {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && width > 0.0) || !(height.is_finite() && height > 0.0) {
            return Err(DesignError::InvalidConfiguration(format!(
                "design dimensions must be positive, got {width} x {height} ft"
            )));
        }
        Ok(Self { width, height })
    }

    /// For constants already known to be positive.
    pub(crate) const fn from_trusted(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> DesignPoint {
        DesignPoint::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Whether a point lies on the nominal plot. Positions outside are legal,
    /// they just fall off the drawn area.
    pub fn contains(&self, point: DesignPoint) -> bool {
        (0.0..=self.width).contains(&point.x()) && (0.0..=self.height).contains(&point.y())
    }
}

// === DesignPoint ===

impl DesignPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }
}

impl From<DVec2> for DesignPoint {
    fn from(v: DVec2) -> Self {
        Self(v)
    }
}

impl Add<DesignDelta> for DesignPoint {
    type Output = DesignPoint;

    fn add(self, delta: DesignDelta) -> Self::Output {
        DesignPoint(self.0 + delta.0)
    }
}

impl Sub for DesignPoint {
    type Output = DesignDelta;

    /// Subtracting two points gives a delta.
    fn sub(self, other: DesignPoint) -> Self::Output {
        DesignDelta(self.0 - other.0)
    }
}

// === DesignDelta ===

impl DesignDelta {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self(DVec2::new(dx, dy))
    }

    pub fn dx(&self) -> f64 {
        self.0.x
    }

    pub fn dy(&self) -> f64 {
        self.0.y
    }
}

// === SurfacePoint ===

impl SurfacePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn distance(&self, other: SurfacePoint) -> f64 {
        self.0.distance(other.0)
    }
}

impl From<DVec2> for SurfacePoint {
    fn from(v: DVec2) -> Self {
        Self(v)
    }
}

// === SurfaceSize ===

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self(DVec2::new(width, height))
    }

    pub fn width(&self) -> f64 {
        self.0.x
    }

    pub fn height(&self) -> f64 {
        self.0.y
    }

    /// Whether both dimensions are positive and finite. Nothing can be
    /// converted to or from a surface without area.
    pub fn has_area(&self) -> bool {
        self.0.is_finite() && self.0.x > 0.0 && self.0.y > 0.0
    }
}
