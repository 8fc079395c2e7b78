use design::{DesignExtent, DesignPoint, SurfacePoint, SurfaceSize};
use glam::DVec2;

/// Linear map between a design plot (feet) and a rendering surface (pixels).
///
/// The design's y axis points up from the bottom-left corner; the surface's
/// points down from the top-left, so y is flipped in both directions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTransform {
    pub surface: SurfaceSize,
    pub extent: DesignExtent,
}

impl ScaleTransform {
    pub fn new(surface: SurfaceSize, extent: DesignExtent) -> Self {
        Self { surface, extent }
    }

    /// Pixels per foot along each axis.
    pub fn scale(&self) -> DVec2 {
        self.surface.0 / self.extent.as_dvec2()
    }

    /// Convert a design point to surface coordinates.
    pub fn to_screen(&self, point: DesignPoint) -> SurfacePoint {
        to_screen(point, self.surface, self.extent)
    }

    /// Convert a surface point to design coordinates.
    pub fn to_design(&self, point: SurfacePoint) -> DesignPoint {
        to_design(point, self.surface, self.extent)
    }

    pub fn feet_to_pixels_x(&self, feet: f64) -> f64 {
        feet * self.surface.width() / self.extent.width()
    }

    pub fn feet_to_pixels_y(&self, feet: f64) -> f64 {
        feet * self.surface.height() / self.extent.height()
    }

    /// Convert a pixel length along x to feet.
    pub fn pixels_to_feet_x(&self, pixels: f64) -> f64 {
        pixels * self.extent.width() / self.surface.width()
    }

    /// Convert a pixel length along y to feet.
    pub fn pixels_to_feet_y(&self, pixels: f64) -> f64 {
        pixels * self.extent.height() / self.surface.height()
    }
}

/// `px_x = x * sw / dw`, `px_y = sh - y * sh / dh`.
pub fn to_screen(point: DesignPoint, surface: SurfaceSize, extent: DesignExtent) -> SurfacePoint {
    SurfacePoint::new(
        point.x() * surface.width() / extent.width(),
        surface.height() - point.y() * surface.height() / extent.height(),
    )
}

/// Inverse of [`to_screen`]. A zero-sized surface yields non-finite coordinates.
pub fn to_design(point: SurfacePoint, surface: SurfaceSize, extent: DesignExtent) -> DesignPoint {
    DesignPoint::new(
        point.x() * extent.width() / surface.width(),
        (surface.height() - point.y()) * extent.height() / surface.height(),
    )
}
