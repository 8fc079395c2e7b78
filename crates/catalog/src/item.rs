use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a catalog entry.
///
/// Shared by every placement of the same plant or material. Ordering follows
/// the numeric value, which is what inventory reports sort by.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogId(pub u32);

impl fmt::Debug for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CatalogId({})", self.0)
    }
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A plant or material type that can be placed on a design.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: CatalogId,
    pub name: String,
    pub category: String,
    /// Recommended spacing between plantings, in feet.
    pub spacing: f64,
    /// Mature height, in feet.
    pub height: f64,
    /// Cost per placement.
    pub cost: f64,
}

impl CatalogItem {
    pub fn new(
        id: CatalogId,
        name: impl Into<String>,
        category: impl Into<String>,
        spacing: f64,
        height: f64,
        cost: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            spacing,
            height,
            cost,
        }
    }

    /// One-line library listing, e.g. `Rose (Hybrid Tea) - 3ft H, 2ft S - $15`.
    pub fn summary(&self) -> String {
        format!(
            "{} - {}ft H, {}ft S - ${:.0}",
            self.name, self.height, self.spacing, self.cost
        )
    }
}
