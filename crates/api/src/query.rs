//! Landscape queries - read-only access to session state.
//!
//! Queries allow inspecting the session without modifying it.

use crate::Target;
use canvas::{Interaction, PenSettings, Scene, Tool, ViewMode};
use chrono::{DateTime, Utc};
use design::{
    CatalogId, CatalogItem, Design, DesignId, DesignPoint, Inventory, PlacedItem, PlacementId,
    Stroke, SurfacePoint,
};
use serde::{Deserialize, Serialize};

/// A query for session state (read-only).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Query {
    /// Get the whole current design.
    GetDesign,

    /// Get placed items, all of them unless a target is given.
    GetItems {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<Target>,
    },

    /// Get committed strokes.
    GetStrokes,

    /// Get the grouped inventory.
    GetInventory,

    /// Get the inventory as a fixed-width text table.
    GetInventoryReport,

    /// List saved designs, newest first.
    ListDesigns,

    /// Get catalog entries, optionally for one category.
    GetCatalog {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        category: Option<String>,
    },

    /// Get the distinct catalog categories.
    GetCategories,

    /// Get the pointer interaction and tool state.
    GetInteraction,

    /// Get the display list for the current view.
    GetScene,
}

/// Response to a query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueryResult {
    Design { design: Design },

    Items { items: Vec<ItemInfo> },

    Strokes { strokes: Vec<Stroke> },

    Inventory { inventory: Inventory },

    Report { text: String },

    Designs { designs: Vec<DesignSummary> },

    Catalog { items: Vec<CatalogItem> },

    Categories { categories: Vec<String> },

    Interaction {
        interaction: Interaction,
        tool: Tool,
        view_mode: ViewMode,
        pen: PenSettings,
        camera_angle: f64,
    },

    Scene { scene: Scene },

    /// Error result.
    Error { message: String },
}

impl QueryResult {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// Serializable placed-item information.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemInfo {
    pub id: PlacementId,
    pub catalog_id: CatalogId,
    pub name: String,
    pub category: String,
    /// Feet.
    pub position: DesignPoint,
    /// Pixels on the current surface.
    pub screen: SurfacePoint,
    pub quantity: u32,
}

impl ItemInfo {
    pub fn new(item: &PlacedItem, screen: SurfacePoint) -> Self {
        Self {
            id: item.id,
            catalog_id: item.catalog_id(),
            name: item.item.name.clone(),
            category: item.item.category.clone(),
            position: item.position,
            screen,
            quantity: item.quantity,
        }
    }
}

/// One line of a design listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesignSummary {
    pub id: DesignId,
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub item_count: usize,
    pub stroke_count: usize,
    pub modified_at: DateTime<Utc>,
}

impl From<&Design> for DesignSummary {
    fn from(design: &Design) -> Self {
        Self {
            id: design.id,
            name: design.name.clone(),
            width: design.width(),
            height: design.height(),
            item_count: design.items.len(),
            stroke_count: design.strokes.len(),
            modified_at: design.modified_at,
        }
    }
}
