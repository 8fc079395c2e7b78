//! Design model for the landscape designer.
//!
//! A [`Design`] is a flat, ordered list of placed catalog items plus freehand
//! annotation strokes. Items render in insertion order, so later items sit on
//! top of earlier ones.

pub mod coords;
mod color;
mod design;
mod error;
mod ids;
mod inventory;
mod placed;
mod stroke;

pub use catalog::{Catalog, CatalogId, CatalogItem};
pub use color::{HexColor, ParseColorError};
pub use coords::{DesignDelta, DesignExtent, DesignPoint, SurfacePoint, SurfaceSize};
pub use design::{Design, DEFAULT_DESIGN_HEIGHT, DEFAULT_DESIGN_NAME, DEFAULT_DESIGN_WIDTH};
pub use error::{DesignError, Result};
pub use ids::{DesignId, PlacementId};
pub use inventory::{Inventory, InventoryLine, EMPTY_INVENTORY_MESSAGE};
pub use placed::PlacedItem;
pub use stroke::Stroke;
