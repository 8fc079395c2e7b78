use crate::hit_test::{self, FOOTPRINT_RADIUS_PX};
use crate::preview::{self, CAMERA_STEP, DEFAULT_CAMERA_ANGLE};
use crate::scene::{self, ItemMarker, Scene};
use crate::{ScaleTransform, StrokeRecorder};
use chrono::{DateTime, Utc};
use design::{
    CatalogItem, Design, DesignError, DesignPoint, HexColor, Inventory, PlacedItem, PlacementId,
    Result, SurfacePoint, SurfaceSize,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum_macros::{Display, EnumIter, EnumString};

pub const DEFAULT_SURFACE_WIDTH: f64 = 800.0;
pub const DEFAULT_SURFACE_HEIGHT: f64 = 600.0;
pub const DEFAULT_SCATTER_RADIUS_PX: f64 = 150.0;
pub const DEFAULT_PEN_WIDTH: f64 = 2.0;
pub const MIN_PEN_WIDTH: f64 = 0.5;
pub const MAX_PEN_WIDTH: f64 = 10.0;

/// Current tool mode.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Tool {
    #[default]
    Select,
    Pen,
}

/// Which projection the scene is drawn with.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Plan,
    Preview,
}

/// Optional features. A basic build runs with both off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub pen: bool,
    pub preview: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            pen: true,
            preview: true,
        }
    }
}

impl Capabilities {
    pub fn basic() -> Self {
        Self {
            pen: false,
            preview: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PenSettings {
    pub color: HexColor,
    pub width: f64,
}

impl Default for PenSettings {
    fn default() -> Self {
        Self {
            color: HexColor::BLACK,
            width: DEFAULT_PEN_WIDTH,
        }
    }
}

impl PenSettings {
    /// Clamp a requested width into the supported range.
    pub fn clamp_width(width: f64) -> Result<f64> {
        if !width.is_finite() {
            return Err(DesignError::InvalidConfiguration(format!(
                "pen width must be a finite number, got {width}"
            )));
        }
        Ok(width.clamp(MIN_PEN_WIDTH, MAX_PEN_WIDTH))
    }
}

/// Startup settings for a [`Canvas`].
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasConfig {
    pub surface: SurfaceSize,
    pub capabilities: Capabilities,
    pub pen: PenSettings,
    /// New items land this many pixels (at most) away from the design center.
    pub scatter_radius_px: f64,
    pub footprint_radius_px: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceSize::new(DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT),
            capabilities: Capabilities::default(),
            pen: PenSettings::default(),
            scatter_radius_px: DEFAULT_SCATTER_RADIUS_PX,
            footprint_radius_px: FOOTPRINT_RADIUS_PX,
        }
    }
}

impl CanvasConfig {
    pub fn basic() -> Self {
        Self {
            capabilities: Capabilities::basic(),
            ..Self::default()
        }
    }
}

/// Pointer interaction state.
///
/// `pointer` and `origin` are captured at pointer-down, in design space, so a
/// drag always moves the item by the total pointer travel since that moment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Interaction {
    #[default]
    Idle,
    Selected {
        item: PlacementId,
        pointer: DesignPoint,
        origin: DesignPoint,
    },
    Dragging {
        item: PlacementId,
        pointer: DesignPoint,
        origin: DesignPoint,
    },
    /// A pen gesture is open.
    Drawing,
}

impl Interaction {
    /// The placement this interaction refers to, if any.
    pub fn item(&self) -> Option<PlacementId> {
        match self {
            Interaction::Selected { item, .. } | Interaction::Dragging { item, .. } => Some(*item),
            Interaction::Idle | Interaction::Drawing => None,
        }
    }
}

/// Events emitted by the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanvasEvent {
    ItemAdded(PlacementId),
    ItemRemoved(PlacementId),
    ItemsCleared,
    ItemMoved(PlacementId),
    SelectionChanged,
    StrokeCommitted(usize),
    StrokesCleared,
    ToolChanged(Tool),
    ViewModeChanged(ViewMode),
    DesignReplaced,
    ContentChanged,
}

/// The editing session around one design.
pub struct Canvas {
    design: Design,
    surface: SurfaceSize,
    tool: Tool,
    view_mode: ViewMode,
    pen: PenSettings,
    capabilities: Capabilities,
    camera_angle: f64,
    interaction: Interaction,
    recorder: StrokeRecorder,
    scatter_radius_px: f64,
    footprint_radius_px: f64,
    events: Vec<CanvasEvent>,
}

impl Canvas {
    pub fn new(design: Design, config: CanvasConfig) -> Self {
        Self {
            design,
            surface: config.surface,
            tool: Tool::Select,
            view_mode: ViewMode::Plan,
            pen: config.pen,
            capabilities: config.capabilities,
            camera_angle: DEFAULT_CAMERA_ANGLE,
            interaction: Interaction::Idle,
            recorder: StrokeRecorder::new(),
            scatter_radius_px: config.scatter_radius_px.max(0.0),
            footprint_radius_px: config.footprint_radius_px.max(0.0),
            events: Vec::new(),
        }
    }

    pub fn design(&self) -> &Design {
        &self.design
    }

    /// Record a successful save of the current design.
    pub fn mark_saved(&mut self, modified_at: DateTime<Utc>) {
        self.design.modified_at = modified_at;
    }

    /// Swap in another design, returning the previous one.
    pub fn replace_design(&mut self, design: Design) -> Design {
        self.cancel_gesture();
        log::debug!("replacing design {} with {}", self.design.name, design.name);
        self.events.push(CanvasEvent::DesignReplaced);
        self.events.push(CanvasEvent::ContentChanged);
        std::mem::replace(&mut self.design, design)
    }

    pub fn rename(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DesignError::InvalidConfiguration(
                "design name must not be empty".into(),
            ));
        }
        self.design.name = name;
        self.events.push(CanvasEvent::ContentChanged);
        Ok(())
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.design.notes = notes.into();
        self.events.push(CanvasEvent::ContentChanged);
    }

    pub fn transform(&self) -> ScaleTransform {
        ScaleTransform::new(self.surface, self.design.extent())
    }

    pub fn surface_size(&self) -> SurfaceSize {
        self.surface
    }

    /// Resizing never moves items; their positions are in feet.
    pub fn set_surface_size(&mut self, surface: SurfaceSize) -> Result<()> {
        if !surface.has_area() {
            return Err(DesignError::InvalidConfiguration(format!(
                "surface size must be positive, got {} x {} px",
                surface.width(),
                surface.height()
            )));
        }
        self.surface = surface;
        Ok(())
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    // === Items ===

    /// Place a catalog item near the design center with a random offset.
    pub fn add_item(&mut self, item: Arc<CatalogItem>) -> PlacementId {
        let center = self.design.extent().center();
        if !self.surface.has_area() {
            return self.add_item_at(item, center);
        }
        let radius = self.scatter_radius_px;
        let mut rng = rand::rng();
        let (dx, dy) = (
            rng.random_range(-radius..=radius),
            rng.random_range(-radius..=radius),
        );
        let transform = self.transform();
        let position = DesignPoint::new(
            center.x() + transform.pixels_to_feet_x(dx),
            center.y() + transform.pixels_to_feet_y(dy),
        );
        self.add_item_at(item, position)
    }

    pub fn add_item_at(&mut self, item: Arc<CatalogItem>, position: DesignPoint) -> PlacementId {
        log::debug!("placing {} at {:?}", item.name, position.0);
        let id = self.design.push_item(PlacedItem::new(item, position));
        self.events.push(CanvasEvent::ItemAdded(id));
        self.events.push(CanvasEvent::ContentChanged);
        id
    }

    pub fn remove_item(&mut self, id: PlacementId) -> Result<PlacedItem> {
        let removed = self
            .design
            .remove_item(id)
            .ok_or(DesignError::UnknownPlacement(id))?;
        if self.interaction.item() == Some(id) {
            self.interaction = Interaction::Idle;
            self.events.push(CanvasEvent::SelectionChanged);
        }
        self.events.push(CanvasEvent::ItemRemoved(id));
        self.events.push(CanvasEvent::ContentChanged);
        Ok(removed)
    }

    /// Remove every placed item. Strokes are kept.
    pub fn remove_all_items(&mut self) -> usize {
        let count = self.design.clear_items();
        if self.interaction.item().is_some() {
            self.interaction = Interaction::Idle;
            self.events.push(CanvasEvent::SelectionChanged);
        }
        if count > 0 {
            self.events.push(CanvasEvent::ItemsCleared);
            self.events.push(CanvasEvent::ContentChanged);
        }
        count
    }

    pub fn clear_strokes(&mut self) -> usize {
        let count = self.design.clear_strokes();
        if count > 0 {
            self.events.push(CanvasEvent::StrokesCleared);
            self.events.push(CanvasEvent::ContentChanged);
        }
        count
    }

    /// Topmost item under a surface point.
    pub fn item_at(&self, point: SurfacePoint) -> Option<PlacementId> {
        hit_test::item_at(
            &self.design.items,
            &self.transform(),
            point,
            self.footprint_radius_px,
        )
    }

    // === Pointer input ===

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn selected(&self) -> Option<PlacementId> {
        self.interaction.item()
    }

    /// Begin a gesture. Returns the item picked up, if any.
    ///
    /// With the pen tool this opens a stroke instead. Item picking only
    /// happens in plan view.
    pub fn pointer_down(&mut self, point: SurfacePoint) -> Option<PlacementId> {
        let previous = self.selected();
        self.recorder.cancel();

        let next = match self.tool {
            Tool::Pen => {
                self.recorder.begin(point);
                Interaction::Drawing
            }
            Tool::Select if self.view_mode == ViewMode::Plan && self.surface.has_area() => {
                match self.item_at(point).and_then(|id| self.design.item(id)) {
                    Some(item) => Interaction::Selected {
                        item: item.id,
                        pointer: self.transform().to_design(point),
                        origin: item.position,
                    },
                    None => Interaction::Idle,
                }
            }
            Tool::Select => Interaction::Idle,
        };

        log::debug!("pointer down at {:?}: {:?}", point.0, next);
        self.interaction = next;
        if previous != self.selected() {
            self.events.push(CanvasEvent::SelectionChanged);
        }
        self.selected()
    }

    /// Continue a gesture. Returns the item moved, if any.
    pub fn pointer_move(&mut self, point: SurfacePoint) -> Option<PlacementId> {
        match self.interaction {
            Interaction::Selected {
                item,
                pointer,
                origin,
            }
            | Interaction::Dragging {
                item,
                pointer,
                origin,
            } => {
                let current = self.transform().to_design(point);
                let position = origin + (current - pointer);
                if !self.design.move_item(item, position) {
                    // Item vanished underneath the drag.
                    self.interaction = Interaction::Idle;
                    self.events.push(CanvasEvent::SelectionChanged);
                    return None;
                }
                self.interaction = Interaction::Dragging {
                    item,
                    pointer,
                    origin,
                };
                self.events.push(CanvasEvent::ItemMoved(item));
                Some(item)
            }
            Interaction::Drawing => {
                self.recorder.extend(point);
                None
            }
            Interaction::Idle => None,
        }
    }

    /// End the gesture. Returns the index of a newly committed stroke.
    pub fn pointer_up(&mut self) -> Option<usize> {
        match std::mem::take(&mut self.interaction) {
            Interaction::Drawing => {
                let stroke = self.recorder.finish(self.pen.color, self.pen.width)?;
                log::debug!("committing stroke with {} points", stroke.len());
                self.design.push_stroke(stroke);
                let index = self.design.strokes.len() - 1;
                self.events.push(CanvasEvent::StrokeCommitted(index));
                self.events.push(CanvasEvent::ContentChanged);
                Some(index)
            }
            Interaction::Dragging { item, .. } => {
                log::debug!("finished dragging {item}");
                self.events.push(CanvasEvent::SelectionChanged);
                self.events.push(CanvasEvent::ContentChanged);
                None
            }
            Interaction::Selected { .. } => {
                self.events.push(CanvasEvent::SelectionChanged);
                None
            }
            Interaction::Idle => None,
        }
    }

    /// Abandon whatever gesture is in progress without committing it.
    fn cancel_gesture(&mut self) {
        self.recorder.cancel();
        let previous = std::mem::take(&mut self.interaction);
        if previous.item().is_some() {
            self.events.push(CanvasEvent::SelectionChanged);
        }
    }

    // === Tools ===

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switch tools. An open gesture is discarded.
    pub fn set_tool(&mut self, tool: Tool) -> Result<()> {
        if tool == Tool::Pen && !self.capabilities.pen {
            return Err(DesignError::Unsupported("pen mode"));
        }
        if tool == self.tool {
            return Ok(());
        }
        self.cancel_gesture();
        log::debug!("tool {} -> {}", self.tool, tool);
        self.tool = tool;
        self.events.push(CanvasEvent::ToolChanged(tool));
        Ok(())
    }

    pub fn toggle_pen(&mut self) -> Result<Tool> {
        let next = match self.tool {
            Tool::Pen => Tool::Select,
            Tool::Select => Tool::Pen,
        };
        self.set_tool(next)?;
        Ok(next)
    }

    pub fn pen(&self) -> PenSettings {
        self.pen
    }

    pub fn set_pen_color(&mut self, color: HexColor) {
        self.pen.color = color;
    }

    /// Returns the width actually applied after clamping.
    pub fn set_pen_width(&mut self, width: f64) -> Result<f64> {
        self.pen.width = PenSettings::clamp_width(width)?;
        Ok(self.pen.width)
    }

    // === Views ===

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) -> Result<()> {
        if mode == ViewMode::Preview && !self.capabilities.preview {
            return Err(DesignError::Unsupported("3D preview"));
        }
        if mode == self.view_mode {
            return Ok(());
        }
        self.cancel_gesture();
        self.view_mode = mode;
        self.events.push(CanvasEvent::ViewModeChanged(mode));
        Ok(())
    }

    pub fn camera_angle(&self) -> f64 {
        self.camera_angle
    }

    /// Turn the preview camera by whole steps. Returns the new angle.
    ///
    /// The angle is kept and shown, but the projection ignores it.
    pub fn rotate_preview(&mut self, steps: i32) -> Result<f64> {
        if !self.capabilities.preview {
            return Err(DesignError::Unsupported("3D preview"));
        }
        self.camera_angle = preview::normalize_angle(self.camera_angle + steps as f64 * CAMERA_STEP);
        Ok(self.camera_angle)
    }

    // === Derived ===

    pub fn inventory(&self) -> Inventory {
        self.design.inventory()
    }

    pub fn inventory_report(&self) -> String {
        self.inventory().report()
    }

    /// Display list for the current state.
    pub fn scene(&self) -> Scene {
        let extent = self.design.extent();
        let pen_mode = self.tool == Tool::Pen;
        let selected = self.selected();

        let (grid, markers, boxes, caption) = match self.view_mode {
            ViewMode::Plan => {
                let transform = self.transform();
                let markers = self
                    .design
                    .items
                    .iter()
                    .map(|item| ItemMarker {
                        item: item.id,
                        center: transform.to_screen(item.position),
                        radius: self.footprint_radius_px,
                        label: scene::marker_label(item.quantity),
                        selected: selected == Some(item.id),
                    })
                    .collect();
                (
                    scene::plan_grid(self.surface),
                    markers,
                    Vec::new(),
                    scene::plan_caption(extent, pen_mode),
                )
            }
            ViewMode::Preview => {
                let boxes = self
                    .design
                    .items
                    .iter()
                    .map(|item| preview::preview_box(item, self.surface, extent))
                    .collect();
                (
                    scene::preview_grid(self.surface),
                    Vec::new(),
                    boxes,
                    scene::preview_caption(self.camera_angle, pen_mode),
                )
            }
        };

        Scene {
            mode: self.view_mode,
            surface: self.surface,
            grid,
            markers,
            boxes,
            strokes: self.design.strokes.clone(),
            pending_stroke: self.recorder.points().to_vec(),
            caption,
        }
    }

    /// Drain the events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<CanvasEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{PLAN_GRID_DIVISIONS, PREVIEW_GRID_DIVISIONS};
    use design::CatalogId;

    fn hosta() -> Arc<CatalogItem> {
        Arc::new(CatalogItem::new(CatalogId(7), "Hosta", "Perennials", 2.0, 2.0, 12.0))
    }

    fn canvas() -> Canvas {
        Canvas::new(Design::untitled(), CanvasConfig::default())
    }

    fn px(x: f64, y: f64) -> SurfacePoint {
        SurfacePoint::new(x, y)
    }

    #[test]
    fn test_select_and_drag_scenario() {
        let mut canvas = canvas();
        let id = canvas.add_item_at(hosta(), DesignPoint::new(20.0, 15.0));

        assert_eq!(canvas.pointer_down(px(400.0, 300.0)), Some(id));
        assert!(matches!(canvas.interaction(), Interaction::Selected { .. }));

        assert_eq!(canvas.pointer_move(px(500.0, 300.0)), Some(id));
        assert!(matches!(canvas.interaction(), Interaction::Dragging { .. }));
        assert_eq!(canvas.design().item(id).unwrap().position, DesignPoint::new(25.0, 15.0));

        assert_eq!(canvas.pointer_up(), None);
        assert_eq!(canvas.interaction(), Interaction::Idle);
        assert_eq!(canvas.design().item(id).unwrap().position, DesignPoint::new(25.0, 15.0));
    }

    #[test]
    fn test_drag_has_no_drift() {
        let mut canvas = canvas();
        let id = canvas.add_item_at(hosta(), DesignPoint::new(20.0, 15.0));
        canvas.pointer_down(px(400.0, 300.0));
        for step in 1..=100 {
            canvas.pointer_move(px(400.0 + step as f64, 300.0 - step as f64 * 0.5));
        }
        let position = canvas.design().item(id).unwrap().position;
        // 100px right, 50px up at 20px/ft.
        assert!((position.x() - 25.0).abs() < 1e-9);
        assert!((position.y() - 17.5).abs() < 1e-9);

        // Moving back to the start restores the origin exactly.
        canvas.pointer_move(px(400.0, 300.0));
        assert_eq!(canvas.design().item(id).unwrap().position, DesignPoint::new(20.0, 15.0));
    }

    #[test]
    fn test_miss_goes_idle() {
        let mut canvas = canvas();
        canvas.add_item_at(hosta(), DesignPoint::new(20.0, 15.0));
        assert_eq!(canvas.pointer_down(px(100.0, 100.0)), None);
        assert_eq!(canvas.interaction(), Interaction::Idle);
        assert_eq!(canvas.pointer_move(px(120.0, 100.0)), None);
    }

    #[test]
    fn test_later_item_is_picked_first() {
        let mut canvas = canvas();
        canvas.add_item_at(hosta(), DesignPoint::new(20.0, 15.0));
        let top = canvas.add_item_at(hosta(), DesignPoint::new(20.0, 15.0));
        assert_eq!(canvas.pointer_down(px(400.0, 300.0)), Some(top));
    }

    #[test]
    fn test_removing_dragged_item_cancels_drag() {
        let mut canvas = canvas();
        let id = canvas.add_item_at(hosta(), DesignPoint::new(20.0, 15.0));
        canvas.pointer_down(px(400.0, 300.0));
        canvas.pointer_move(px(410.0, 300.0));

        canvas.remove_item(id).unwrap();
        assert_eq!(canvas.interaction(), Interaction::Idle);
        assert_eq!(canvas.pointer_move(px(450.0, 300.0)), None);
        assert!(matches!(
            canvas.remove_item(id),
            Err(DesignError::UnknownPlacement(_))
        ));
    }

    #[test]
    fn test_pen_stroke_records_moves() {
        let mut canvas = canvas();
        canvas.set_tool(Tool::Pen).unwrap();
        canvas.set_pen_color("#FF0000".parse().unwrap());

        canvas.pointer_down(px(10.0, 10.0));
        canvas.pointer_move(px(20.0, 15.0));
        canvas.pointer_move(px(30.0, 25.0));
        assert_eq!(canvas.pointer_up(), Some(0));

        let stroke = &canvas.design().strokes[0];
        assert_eq!(stroke.points, vec![px(10.0, 10.0), px(20.0, 15.0), px(30.0, 25.0)]);
        assert_eq!(stroke.color, HexColor::new(255, 0, 0));
        assert_eq!(stroke.width, DEFAULT_PEN_WIDTH);
    }

    #[test]
    fn test_pen_click_commits_nothing() {
        let mut canvas = canvas();
        canvas.set_tool(Tool::Pen).unwrap();
        canvas.pointer_down(px(10.0, 10.0));
        assert_eq!(canvas.pointer_up(), None);
        assert!(canvas.design().strokes.is_empty());
    }

    #[test]
    fn test_pen_ignores_items_under_pointer() {
        let mut canvas = canvas();
        let id = canvas.add_item_at(hosta(), DesignPoint::new(20.0, 15.0));
        canvas.set_tool(Tool::Pen).unwrap();
        assert_eq!(canvas.pointer_down(px(400.0, 300.0)), None);
        canvas.pointer_move(px(500.0, 300.0));
        canvas.pointer_up();
        assert_eq!(canvas.design().item(id).unwrap().position, DesignPoint::new(20.0, 15.0));
        assert_eq!(canvas.design().strokes.len(), 1);
    }

    #[test]
    fn test_switching_tool_mid_stroke_discards_it() {
        let mut canvas = canvas();
        canvas.set_tool(Tool::Pen).unwrap();
        canvas.pointer_down(px(10.0, 10.0));
        canvas.pointer_move(px(20.0, 20.0));
        canvas.set_tool(Tool::Select).unwrap();
        assert_eq!(canvas.pointer_up(), None);
        assert!(canvas.design().strokes.is_empty());
        assert!(canvas.scene().pending_stroke.is_empty());
    }

    #[test]
    fn test_basic_capabilities_reject_pen_and_preview() {
        let mut canvas = Canvas::new(Design::untitled(), CanvasConfig::basic());
        assert!(matches!(canvas.set_tool(Tool::Pen), Err(DesignError::Unsupported(_))));
        assert!(matches!(canvas.toggle_pen(), Err(DesignError::Unsupported(_))));
        assert!(matches!(
            canvas.set_view_mode(ViewMode::Preview),
            Err(DesignError::Unsupported(_))
        ));
        assert!(canvas.rotate_preview(1).is_err());
        assert_eq!(canvas.tool(), Tool::Select);
    }

    #[test]
    fn test_pen_width_is_clamped() {
        let mut canvas = canvas();
        assert_eq!(canvas.set_pen_width(25.0).unwrap(), MAX_PEN_WIDTH);
        assert_eq!(canvas.set_pen_width(0.1).unwrap(), MIN_PEN_WIDTH);
        assert_eq!(canvas.set_pen_width(4.0).unwrap(), 4.0);
        assert!(canvas.set_pen_width(f64::NAN).is_err());
        assert_eq!(canvas.pen().width, 4.0);
    }

    #[test]
    fn test_add_item_scatters_near_center() {
        let mut canvas = canvas();
        for _ in 0..50 {
            let id = canvas.add_item(hosta());
            let position = canvas.design().item(id).unwrap().position;
            // 150px at 20px/ft is 7.5ft.
            assert!((position.x() - 20.0).abs() <= 7.5);
            assert!((position.y() - 15.0).abs() <= 7.5);
        }
        assert_eq!(canvas.design().items.len(), 50);
    }

    #[test]
    fn test_events_are_drained() {
        let mut canvas = canvas();
        let id = canvas.add_item_at(hosta(), DesignPoint::new(20.0, 15.0));
        assert_eq!(
            canvas.take_events(),
            vec![CanvasEvent::ItemAdded(id), CanvasEvent::ContentChanged]
        );
        assert!(canvas.take_events().is_empty());

        canvas.remove_all_items();
        assert_eq!(
            canvas.take_events(),
            vec![CanvasEvent::ItemsCleared, CanvasEvent::ContentChanged]
        );
    }

    #[test]
    fn test_plan_scene() {
        let mut canvas = canvas();
        let id = canvas.add_item_at(hosta(), DesignPoint::new(20.0, 15.0));
        canvas.pointer_down(px(400.0, 300.0));

        let scene = canvas.scene();
        assert_eq!(scene.mode, ViewMode::Plan);
        assert_eq!(scene.grid_divisions(), PLAN_GRID_DIVISIONS);
        assert_eq!(scene.markers.len(), 1);
        assert_eq!(scene.markers[0].item, id);
        assert_eq!(scene.markers[0].center, px(400.0, 300.0));
        assert_eq!(scene.markers[0].label, "×1");
        assert!(scene.markers[0].selected);
        assert!(scene.boxes.is_empty());
        assert_eq!(scene.caption, "2D View: 40ft × 30ft");
    }

    #[test]
    fn test_preview_scene_and_rotation() {
        let mut canvas = canvas();
        canvas.add_item_at(hosta(), DesignPoint::new(0.0, 0.0));
        canvas.set_view_mode(ViewMode::Preview).unwrap();
        assert_eq!(canvas.rotate_preview(2).unwrap(), 75.0);

        let scene = canvas.scene();
        assert_eq!(scene.grid_divisions(), PREVIEW_GRID_DIVISIONS);
        assert!(scene.markers.is_empty());
        assert_eq!(scene.boxes.len(), 1);
        assert_eq!(scene.boxes[0].center, px(0.0, 600.0));
        assert_eq!(scene.caption, "3D View (Isometric) - Camera: 75°");

        // No picking in preview.
        assert_eq!(canvas.pointer_down(px(0.0, 600.0)), None);
    }

    #[test]
    fn test_replace_design_resets_gesture() {
        let mut canvas = canvas();
        canvas.add_item_at(hosta(), DesignPoint::new(20.0, 15.0));
        canvas.pointer_down(px(400.0, 300.0));

        let old = canvas.replace_design(Design::new("Back Yard", 60.0, 40.0).unwrap());
        assert_eq!(old.items.len(), 1);
        assert_eq!(canvas.interaction(), Interaction::Idle);
        assert_eq!(canvas.design().name, "Back Yard");
        assert_eq!(canvas.transform().scale().x, 800.0 / 60.0);
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Tool::Pen).unwrap(), "\"pen\"");
        assert_eq!("preview".parse::<ViewMode>().unwrap(), ViewMode::Preview);
        assert_eq!(Tool::Select.to_string(), "select");
        let json = serde_json::to_value(Interaction::Idle).unwrap();
        assert_eq!(json["state"], "idle");
    }

    #[test]
    fn test_surface_without_area_is_rejected() {
        let mut canvas = canvas();
        for (w, h) in [(0.0, 0.0), (800.0, 0.0), (-1.0, 600.0), (f64::NAN, 600.0)] {
            assert!(matches!(
                canvas.set_surface_size(SurfaceSize::new(w, h)),
                Err(DesignError::InvalidConfiguration(_))
            ));
        }
        assert_eq!(canvas.surface_size(), SurfaceSize::new(800.0, 600.0));
        canvas.set_surface_size(SurfaceSize::new(1024.0, 768.0)).unwrap();
        assert_eq!(canvas.surface_size(), SurfaceSize::new(1024.0, 768.0));
    }

    #[test]
    fn test_zero_surface_keeps_positions_finite() {
        let config = CanvasConfig {
            surface: SurfaceSize::new(0.0, 0.0),
            ..CanvasConfig::default()
        };
        let mut canvas = Canvas::new(Design::untitled(), config);

        let id = canvas.add_item(hosta());
        assert_eq!(canvas.design().item(id).unwrap().position, DesignPoint::new(20.0, 15.0));

        // Every item projects onto the same point; nothing is picked or moved.
        assert_eq!(canvas.pointer_down(px(0.0, 0.0)), None);
        assert_eq!(canvas.pointer_move(px(5.0, 5.0)), None);
        canvas.pointer_up();
        assert_eq!(canvas.design().item(id).unwrap().position, DesignPoint::new(20.0, 15.0));
        assert!(canvas.design().check_finite().is_ok());
    }

    #[test]
    fn test_mark_saved_updates_timestamp_only() {
        let mut canvas = canvas();
        canvas.add_item_at(hosta(), DesignPoint::new(1.0, 1.0));
        canvas.take_events();
        let saved_at = canvas.design().modified_at + chrono::Duration::seconds(5);

        canvas.mark_saved(saved_at);
        assert_eq!(canvas.design().modified_at, saved_at);
        assert_eq!(canvas.design().items.len(), 1);
        assert!(canvas.take_events().is_empty());
    }

    #[test]
    fn test_rename_rejects_blank() {
        let mut canvas = canvas();
        assert!(canvas.rename("   ").is_err());
        canvas.rename("Front Garden").unwrap();
        assert_eq!(canvas.design().name, "Front Garden");
    }
}
