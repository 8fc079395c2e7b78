//! Plant and material catalog.
//!
//! The catalog is a fixed, read-only table of item definitions. It is built
//! once and shared by reference (usually behind an `Arc`) with everything that
//! places items, so tests can construct their own small catalogs.

mod builtin;
mod item;

pub use item::{CatalogId, CatalogItem};

use std::sync::Arc;

/// An immutable collection of catalog items, in table order.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    items: Vec<Arc<CatalogItem>>,
}

impl Catalog {
    /// Build a catalog from explicit items.
    pub fn new(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        Self {
            items: items.into_iter().map(Arc::new).collect(),
        }
    }

    /// The built-in plant and hardscape table.
    pub fn builtin() -> Self {
        Self::new(builtin::entries())
    }

    pub fn items(&self) -> &[Arc<CatalogItem>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by its stable identity.
    pub fn get(&self, id: CatalogId) -> Option<&Arc<CatalogItem>> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Look up an item by its position in the table.
    pub fn get_index(&self, index: usize) -> Option<&Arc<CatalogItem>> {
        self.items.get(index)
    }

    /// Case-insensitive lookup by display name.
    pub fn find_by_name(&self, name: &str) -> Option<&Arc<CatalogItem>> {
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }

    /// All items in a category, in table order.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Arc<CatalogItem>> + 'a {
        self.items.iter().filter(move |item| item.category == category)
    }

    /// Distinct category labels, sorted ascending.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.items.iter().map(|item| item.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
