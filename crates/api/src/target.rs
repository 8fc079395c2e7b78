//! Target specification for commands.
//!
//! Commands need to say which placed items they operate on, and add commands
//! need to name a catalog entry.

use design::{Catalog, CatalogId, CatalogItem, PlacementId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Specifies which placed items a command targets.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// The item under the current selection (most common for user actions).
    #[default]
    Selection,

    /// Specific item by ID.
    Item(PlacementId),

    /// Multiple specific items by ID.
    Items(Vec<PlacementId>),

    /// Every placement of one catalog entry.
    Catalog(CatalogId),

    /// All items on the design.
    All,
}

impl From<PlacementId> for Target {
    fn from(id: PlacementId) -> Self {
        Self::Item(id)
    }
}

impl From<Vec<PlacementId>> for Target {
    fn from(ids: Vec<PlacementId>) -> Self {
        Self::Items(ids)
    }
}

/// A catalog entry named by id or by display name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogRef {
    Id(CatalogId),
    Name(String),
}

impl CatalogRef {
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Option<&'a Arc<CatalogItem>> {
        match self {
            CatalogRef::Id(id) => catalog.get(*id),
            CatalogRef::Name(name) => catalog.find_by_name(name),
        }
    }
}

impl From<CatalogId> for CatalogRef {
    fn from(id: CatalogId) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for CatalogRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}
