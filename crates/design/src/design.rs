use crate::coords::{DesignExtent, DesignPoint};
use crate::{DesignError, DesignId, Inventory, PlacedItem, PlacementId, Result, Stroke};
use catalog::Catalog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DESIGN_NAME: &str = "New Landscape";
/// Feet.
pub const DEFAULT_DESIGN_WIDTH: f64 = 40.0;
/// Feet.
pub const DEFAULT_DESIGN_HEIGHT: f64 = 30.0;

/// A landscape design: the aggregate that gets saved and loaded.
///
/// Owns its placements and strokes by value, so cloning a design clones
/// everything on it. The plot extent is fixed at creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub id: DesignId,
    /// Also the persistence key.
    pub name: String,
    extent: DesignExtent,
    /// Placed items, in z-order (back to front).
    #[serde(default)]
    pub items: Vec<PlacedItem>,
    #[serde(default)]
    pub strokes: Vec<Stroke>,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    /// Placeholder for shared editing; nothing reads it yet.
    #[serde(default)]
    pub collaborators: Vec<String>,
}

impl Design {
    /// Create an empty design. Fails on non-positive dimensions.
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Result<Self> {
        Ok(Self::with_extent(name, DesignExtent::new(width, height)?))
    }

    pub fn with_extent(name: impl Into<String>, extent: DesignExtent) -> Self {
        let now = Utc::now();
        Self {
            id: DesignId::new(),
            name: name.into(),
            extent,
            items: Vec::new(),
            strokes: Vec::new(),
            notes: String::new(),
            created_at: now,
            modified_at: now,
            collaborators: Vec::new(),
        }
    }

    /// A 40 x 30 ft design named "New Landscape".
    pub fn untitled() -> Self {
        let extent = DesignExtent::from_trusted(DEFAULT_DESIGN_WIDTH, DEFAULT_DESIGN_HEIGHT);
        Self::with_extent(DEFAULT_DESIGN_NAME, extent)
    }

    pub fn extent(&self) -> DesignExtent {
        self.extent
    }

    pub fn width(&self) -> f64 {
        self.extent.width()
    }

    pub fn height(&self) -> f64 {
        self.extent.height()
    }

    /// Refresh the modified timestamp.
    pub fn touch(&mut self) {
        self.modified_at = Utc::now();
    }

    /// Check invariants that serde alone can't express.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DesignError::InvalidConfiguration(
                "design name must not be empty".into(),
            ));
        }
        if let Some(item) = self.items.iter().find(|item| item.quantity == 0) {
            return Err(DesignError::InvalidConfiguration(format!(
                "placed item {} has zero quantity",
                item.id
            )));
        }
        Ok(())
    }

    /// Check that every stored coordinate is a finite number. JSON has no
    /// encoding for NaN or infinity.
    pub fn check_finite(&self) -> Result<()> {
        let encoding = |reason: String| DesignError::Encoding {
            name: self.name.clone(),
            reason,
        };
        if let Some(item) = self.items.iter().find(|item| !item.position.0.is_finite()) {
            return Err(encoding(format!(
                "placed item {} has non-finite position {:?}",
                item.id, item.position.0
            )));
        }
        if let Some(index) = self.strokes.iter().position(|stroke| {
            !stroke.width.is_finite() || stroke.points.iter().any(|point| !point.0.is_finite())
        }) {
            return Err(encoding(format!("stroke {index} has non-finite values")));
        }
        if !self.items.iter().all(|item| item.rotation.is_finite()) {
            return Err(encoding("placed item has non-finite rotation".into()));
        }
        Ok(())
    }

    /// Point every placement at the catalog's shared entry for its id.
    ///
    /// Decoded designs carry their own copies of catalog entries; after this
    /// they share the catalog's. Fails on ids the catalog doesn't know,
    /// leaving the design untouched.
    pub fn rebind(&mut self, catalog: &Catalog) -> Result<()> {
        let entries = self
            .items
            .iter()
            .map(|item| {
                catalog
                    .get(item.catalog_id())
                    .cloned()
                    .ok_or(DesignError::UnknownCatalogItem(item.catalog_id()))
            })
            .collect::<Result<Vec<_>>>()?;
        for (item, entry) in self.items.iter_mut().zip(entries) {
            item.item = entry;
        }
        Ok(())
    }

    pub fn item(&self, id: PlacementId) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: PlacementId) -> Option<&mut PlacedItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn push_item(&mut self, item: PlacedItem) -> PlacementId {
        let id = item.id;
        self.items.push(item);
        id
    }

    pub fn remove_item(&mut self, id: PlacementId) -> Option<PlacedItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Remove every placed item, returning how many there were.
    pub fn clear_items(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        count
    }

    /// Set a placed item's position. Returns false if no item has that id.
    pub fn move_item(&mut self, id: PlacementId, position: DesignPoint) -> bool {
        match self.item_mut(id) {
            Some(item) => {
                item.position = position;
                true
            }
            None => false,
        }
    }

    pub fn push_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn clear_strokes(&mut self) -> usize {
        let count = self.strokes.len();
        self.strokes.clear();
        count
    }

    pub fn inventory(&self) -> Inventory {
        Inventory::from_items(&self.items)
    }
}

impl Default for Design {
    fn default() -> Self {
        Self::untitled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HexColor, SurfacePoint};
    use catalog::{CatalogId, CatalogItem};
    use std::sync::Arc;

    fn shrub() -> Arc<CatalogItem> {
        Arc::new(CatalogItem::new(CatalogId(3), "Boxwood", "Shrubs", 3.0, 4.0, 25.0))
    }

    #[test]
    fn test_new_rejects_degenerate_dimensions() {
        assert!(matches!(
            Design::new("Flat", 0.0, 30.0),
            Err(DesignError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Design::new("Flat", 40.0, -5.0),
            Err(DesignError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_untitled_defaults() {
        let design = Design::untitled();
        assert_eq!(design.name, DEFAULT_DESIGN_NAME);
        assert_eq!(design.width(), 40.0);
        assert_eq!(design.height(), 30.0);
        assert_eq!(design.created_at, design.modified_at);
    }

    #[test]
    fn test_item_lifecycle() {
        let mut design = Design::untitled();
        let a = design.push_item(PlacedItem::new(shrub(), DesignPoint::new(1.0, 1.0)));
        let b = design.push_item(PlacedItem::new(shrub(), DesignPoint::new(2.0, 2.0)));

        assert!(design.move_item(a, DesignPoint::new(5.0, 6.0)));
        assert_eq!(design.item(a).unwrap().position, DesignPoint::new(5.0, 6.0));

        let removed = design.remove_item(b).unwrap();
        assert_eq!(removed.id, b);
        assert!(design.item(b).is_none());
        assert!(!design.move_item(b, DesignPoint::default()));

        assert_eq!(design.clear_items(), 1);
        assert!(design.items.is_empty());
    }

    #[test]
    fn test_clone_copies_placements() {
        let mut design = Design::untitled();
        let id = design.push_item(PlacedItem::new(shrub(), DesignPoint::new(1.0, 1.0)));
        let snapshot = design.clone();

        design.move_item(id, DesignPoint::new(9.0, 9.0));
        assert_eq!(snapshot.item(id).unwrap().position, DesignPoint::new(1.0, 1.0));
    }

    #[test]
    fn test_touch_advances_modified_only() {
        let mut design = Design::untitled();
        let created = design.created_at;
        std::thread::sleep(std::time::Duration::from_millis(2));
        design.touch();
        assert_eq!(design.created_at, created);
        assert!(design.modified_at > created);
    }

    #[test]
    fn test_validate_flags_empty_name_and_zero_quantity() {
        let mut design = Design::untitled();
        assert!(design.validate().is_ok());

        let mut placed = PlacedItem::new(shrub(), DesignPoint::default());
        placed.quantity = 0;
        design.push_item(placed);
        assert!(design.validate().is_err());

        let mut unnamed = Design::untitled();
        unnamed.name = "   ".into();
        assert!(unnamed.validate().is_err());
    }

    #[test]
    fn test_rebind_shares_catalog_entries() {
        let catalog = Catalog::new([shrub().as_ref().clone()]);
        let mut design = Design::untitled();
        design.push_item(PlacedItem::new(shrub(), DesignPoint::new(1.0, 1.0)));
        design.push_item(PlacedItem::new(shrub(), DesignPoint::new(2.0, 2.0)));

        let json = serde_json::to_string(&design).unwrap();
        let mut decoded: Design = serde_json::from_str(&json).unwrap();
        // Edited on disk: same id, different cost.
        decoded.items[1].item = Arc::new(CatalogItem {
            cost: 9999.0,
            ..shrub().as_ref().clone()
        });

        decoded.rebind(&catalog).unwrap();
        let shared = catalog.get(CatalogId(3)).unwrap();
        assert!(decoded.items.iter().all(|item| Arc::ptr_eq(&item.item, shared)));
        assert_eq!(decoded.inventory().subtotal, 50.0);
    }

    #[test]
    fn test_rebind_rejects_unknown_ids() {
        let catalog = Catalog::new(Vec::<CatalogItem>::new());
        let mut design = Design::untitled();
        design.push_item(PlacedItem::new(shrub(), DesignPoint::default()));
        assert!(matches!(
            design.rebind(&catalog),
            Err(DesignError::UnknownCatalogItem(CatalogId(3)))
        ));
        assert_eq!(design.items[0].item.cost, 25.0);
    }

    #[test]
    fn test_check_finite_flags_nan_and_infinity() {
        let mut design = Design::untitled();
        let id = design.push_item(PlacedItem::new(shrub(), DesignPoint::new(1.0, 1.0)));
        assert!(design.check_finite().is_ok());

        design.move_item(id, DesignPoint::new(f64::NAN, 1.0));
        assert!(matches!(design.check_finite(), Err(DesignError::Encoding { .. })));

        design.move_item(id, DesignPoint::new(1.0, 1.0));
        design.push_stroke(Stroke::new(
            vec![SurfacePoint::new(0.0, 0.0), SurfacePoint::new(f64::INFINITY, 0.0)],
            HexColor::BLACK,
            2.0,
        ));
        assert!(matches!(design.check_finite(), Err(DesignError::Encoding { .. })));
    }

    #[test]
    fn test_json_round_trip() {
        let mut design = Design::new("Backyard", 55.5, 32.25).unwrap();
        design.notes = "Shade on the north side".into();
        design.collaborators.push("pat@example.com".into());
        design.push_item(
            PlacedItem::new(shrub(), DesignPoint::new(12.125, 7.3))
                .with_quantity(2)
                .with_rotation(45.0),
        );
        design.push_stroke(Stroke::new(
            vec![SurfacePoint::new(10.5, 20.25), SurfacePoint::new(11.0, 22.0)],
            HexColor::new(0x33, 0x99, 0x00),
            3.5,
        ));

        let json = serde_json::to_string(&design).unwrap();
        let back: Design = serde_json::from_str(&json).unwrap();
        assert_eq!(back, design);
    }
}
