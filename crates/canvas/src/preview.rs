//! Pseudo-3D preview projection.
//!
//! Not a real camera: the plan is squeezed by 1.5 and skewed so each item
//! reads as a box standing on a tilted ground plane.

use design::{DesignExtent, PlacedItem, PlacementId, SurfacePoint, SurfaceSize};
use serde::{Deserialize, Serialize};

const SQUEEZE: f64 = 1.5;
const SKEW_X: f64 = 0.3;
const SKEW_Y: f64 = 0.2;

/// Drawn width of every preview box, in pixels.
pub const PREVIEW_BOX_WIDTH: f64 = 15.0;

/// Default and step for the stored camera angle, in degrees.
pub const DEFAULT_CAMERA_ANGLE: f64 = 45.0;
pub const CAMERA_STEP: f64 = 15.0;

/// One placed item as drawn in the preview.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreviewBox {
    pub item: PlacementId,
    /// Projected anchor; the box is centered here.
    pub center: SurfacePoint,
    pub width: f64,
    pub height: f64,
}

impl PreviewBox {
    /// Top-left corner of the box rectangle.
    pub fn origin(&self) -> SurfacePoint {
        SurfacePoint::new(
            self.center.x() - self.width / 2.0,
            self.center.y() - self.height / 2.0,
        )
    }
}

/// Project a design position onto the preview surface.
pub fn project(x: f64, y: f64, surface: SurfaceSize, extent: DesignExtent) -> SurfacePoint {
    let scale_x = surface.width() / (extent.width() * SQUEEZE);
    let scale_y = surface.height() / (extent.height() * SQUEEZE);
    SurfacePoint::new(
        x * scale_x + y * scale_x * SKEW_X,
        (surface.height() - y * scale_y) + x * scale_y * SKEW_Y,
    )
}

/// Box height in pixels for an item of the given real height (feet).
pub fn box_height(height_ft: f64) -> f64 {
    height_ft / 10.0 * 2.0
}

pub fn preview_box(item: &PlacedItem, surface: SurfaceSize, extent: DesignExtent) -> PreviewBox {
    PreviewBox {
        item: item.id,
        center: project(item.position.x(), item.position.y(), surface, extent),
        width: PREVIEW_BOX_WIDTH,
        height: box_height(item.item.height),
    }
}

/// Wrap an angle into `[0, 360)`.
pub fn normalize_angle(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}
