use crate::coords::{DesignDelta, DesignPoint};
use crate::PlacementId;
use catalog::{CatalogId, CatalogItem};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A catalog item placed on a design.
///
/// The catalog entry is shared, never copied per placement. Position is in
/// design space (feet) and is intentionally not clamped to the plot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub id: PlacementId,
    pub item: Arc<CatalogItem>,
    pub position: DesignPoint,
    /// Always at least 1. Not used by inventory grouping, which counts placements.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Degrees. Stored but not rendered.
    #[serde(default)]
    pub rotation: f64,
}

fn default_quantity() -> u32 {
    1
}

impl PlacedItem {
    pub fn new(item: Arc<CatalogItem>, position: DesignPoint) -> Self {
        Self {
            id: PlacementId::new(),
            item,
            position,
            quantity: 1,
            rotation: 0.0,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn catalog_id(&self) -> CatalogId {
        self.item.id
    }

    /// Move the item by a delta.
    pub fn translate(&mut self, delta: DesignDelta) {
        self.position = self.position + delta;
    }
}
