//! Inventory and cost tally derived from placed items.
//!
//! Placements are grouped by catalog identity. A group's count is the number
//! of placements in it; the per-placement `quantity` field is not summed.

use crate::PlacedItem;
use catalog::{CatalogId, CatalogItem};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

pub const EMPTY_INVENTORY_MESSAGE: &str = "No items added yet";

const REPORT_TITLE: &str = "INVENTORY & COST";
const NAME_WIDTH: usize = 25;
const QUANTITY_WIDTH: usize = 10;
const COST_WIDTH: usize = 12;
const RULE_WIDTH: usize = 62;

/// One grouped row of the inventory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryLine {
    pub catalog_id: CatalogId,
    pub name: String,
    pub count: usize,
    pub unit_cost: f64,
    pub line_total: f64,
}

/// Grouped counts and costs, ordered by catalog identity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub lines: Vec<InventoryLine>,
    pub subtotal: f64,
}

impl Inventory {
    pub fn from_items(items: &[PlacedItem]) -> Self {
        let mut groups: BTreeMap<CatalogId, (&Arc<CatalogItem>, usize)> = BTreeMap::new();
        for placed in items {
            groups
                .entry(placed.catalog_id())
                .or_insert((&placed.item, 0))
                .1 += 1;
        }

        let lines: Vec<InventoryLine> = groups
            .into_iter()
            .map(|(catalog_id, (item, count))| InventoryLine {
                catalog_id,
                name: item.name.clone(),
                count,
                unit_cost: item.cost,
                line_total: item.cost * count as f64,
            })
            .collect();
        let subtotal = lines.iter().map(|line| line.line_total).sum();

        Self { lines, subtotal }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of placements across all lines.
    pub fn placement_count(&self) -> usize {
        self.lines.iter().map(|line| line.count).sum()
    }

    pub fn line(&self, id: CatalogId) -> Option<&InventoryLine> {
        self.lines.iter().find(|line| line.catalog_id == id)
    }

    /// Fixed-width text table, or the empty-state message.
    pub fn report(&self) -> String {
        let mut text = format!("{REPORT_TITLE}\n{}\n\n", "=".repeat(RULE_WIDTH));
        if self.is_empty() {
            text.push_str(EMPTY_INVENTORY_MESSAGE);
            text.push('\n');
            return text;
        }

        text.push_str(&row("Name", "Quantity", "Unit Cost", "Total"));
        text.push_str(&"-".repeat(RULE_WIDTH));
        text.push('\n');
        for line in &self.lines {
            text.push_str(&row(
                &fit(&line.name, NAME_WIDTH),
                &line.count.to_string(),
                &money(line.unit_cost),
                &money(line.line_total),
            ));
        }
        text.push_str(&"-".repeat(RULE_WIDTH));
        text.push('\n');
        text.push_str(&row("TOTAL", "", "", &money(self.subtotal)));
        text
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report())
    }
}

fn row(name: &str, quantity: &str, unit_cost: &str, total: &str) -> String {
    format!(
        "{name:<nw$} {quantity:<qw$} {unit_cost:<cw$} {total}\n",
        nw = NAME_WIDTH,
        qw = QUANTITY_WIDTH,
        cw = COST_WIDTH,
    )
}

fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Truncate to `width` characters so long names don't break the columns.
fn fit(name: &str, width: usize) -> String {
    name.chars().take(width).collect()
}
