//! Interactive canvas core: pointer handling, pen strokes and render scenes
//! for a [`Design`](design::Design), with no UI framework attached.

mod canvas;
pub mod preview;
mod recorder;
pub mod scale;
pub mod scene;

pub use canvas::{
    Canvas, CanvasConfig, CanvasEvent, Capabilities, Interaction, PenSettings, Tool, ViewMode,
    DEFAULT_PEN_WIDTH, DEFAULT_SCATTER_RADIUS_PX, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH,
    MAX_PEN_WIDTH, MIN_PEN_WIDTH,
};
pub use hit_test::FOOTPRINT_RADIUS_PX;
pub use preview::PreviewBox;
pub use recorder::StrokeRecorder;
pub use scale::ScaleTransform;
pub use scene::{GridLine, ItemMarker, Scene};
