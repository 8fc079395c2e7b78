use crate::coords::SurfacePoint;
use crate::HexColor;
use serde::{Deserialize, Serialize};

/// A committed freehand annotation.
///
/// Points are raw surface-space samples as they were drawn. Strokes are never
/// edited after commit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub points: Vec<SurfacePoint>,
    pub color: HexColor,
    pub width: f64,
    /// Reserved for path smoothing; always false for now.
    #[serde(default)]
    pub smoothed: bool,
}

impl Stroke {
    pub fn new(points: Vec<SurfacePoint>, color: HexColor, width: f64) -> Self {
        Self {
            points,
            color,
            width,
            smoothed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs, for drawing as line segments.
    pub fn segments(&self) -> impl Iterator<Item = (SurfacePoint, SurfacePoint)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}
