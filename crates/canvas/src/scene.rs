use crate::{PreviewBox, ViewMode};
use design::{DesignExtent, PlacementId, Stroke, SurfacePoint, SurfaceSize};
use serde::{Deserialize, Serialize};

pub const PLAN_GRID_DIVISIONS: u32 = 10;
pub const PREVIEW_GRID_DIVISIONS: u32 = 8;

const PEN_MODE_SUFFIX: &str = " [✏️ Pen Mode]";

/// A placed item drawn as a labeled circle in plan view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemMarker {
    pub item: PlacementId,
    pub center: SurfacePoint,
    pub radius: f64,
    pub label: String,
    pub selected: bool,
}

/// A straight line on the background grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub from: SurfacePoint,
    pub to: SurfacePoint,
}

/// Everything a front end needs to draw one frame, in surface pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub mode: ViewMode,
    pub surface: SurfaceSize,
    pub grid: Vec<GridLine>,
    /// Plan view only.
    pub markers: Vec<ItemMarker>,
    /// Preview only.
    pub boxes: Vec<PreviewBox>,
    pub strokes: Vec<Stroke>,
    /// Samples of the stroke currently being drawn, if any.
    pub pending_stroke: Vec<SurfacePoint>,
    pub caption: String,
}

impl Scene {
    pub fn grid_divisions(&self) -> u32 {
        match self.mode {
            ViewMode::Plan => PLAN_GRID_DIVISIONS,
            ViewMode::Preview => PREVIEW_GRID_DIVISIONS,
        }
    }
}

pub fn marker_label(quantity: u32) -> String {
    format!("×{quantity}")
}

pub fn plan_caption(extent: DesignExtent, pen_mode: bool) -> String {
    let mut caption = format!(
        "2D View: {}ft × {}ft",
        extent.width() as i64,
        extent.height() as i64
    );
    if pen_mode {
        caption.push_str(PEN_MODE_SUFFIX);
    }
    caption
}

pub fn preview_caption(camera_angle: f64, pen_mode: bool) -> String {
    let mut caption = format!("3D View (Isometric) - Camera: {}°", camera_angle as i64);
    if pen_mode {
        caption.push_str(PEN_MODE_SUFFIX);
    }
    caption
}

/// Evenly spaced vertical and horizontal lines across the surface.
pub fn plan_grid(surface: SurfaceSize) -> Vec<GridLine> {
    let n = PLAN_GRID_DIVISIONS;
    let cell_w = surface.width() / n as f64;
    let cell_h = surface.height() / n as f64;
    let mut lines = Vec::with_capacity(2 * (n as usize + 1));
    for i in 0..=n {
        let x = i as f64 * cell_w;
        lines.push(GridLine {
            from: SurfacePoint::new(x, 0.0),
            to: SurfacePoint::new(x, surface.height()),
        });
    }
    for j in 0..=n {
        let y = j as f64 * cell_h;
        lines.push(GridLine {
            from: SurfacePoint::new(0.0, y),
            to: SurfacePoint::new(surface.width(), y),
        });
    }
    lines
}

/// Fanned grid lines that suggest a tilted ground plane.
pub fn preview_grid(surface: SurfaceSize) -> Vec<GridLine> {
    let n = PREVIEW_GRID_DIVISIONS;
    let cell_w = surface.width() / n as f64;
    let cell_h = surface.height() / n as f64;
    let mut lines = Vec::with_capacity(2 * (n as usize + 1));
    for i in 0..=n {
        let x = i as f64 * cell_w;
        let y = i as f64 * cell_h;
        lines.push(GridLine {
            from: SurfacePoint::new(x, 0.0),
            to: SurfacePoint::new(x * 1.2, surface.height()),
        });
        lines.push(GridLine {
            from: SurfacePoint::new(0.0, y),
            to: SurfacePoint::new(surface.width(), y * 1.1),
        });
    }
    lines
}
