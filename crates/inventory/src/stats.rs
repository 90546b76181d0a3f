use std::collections::BTreeMap;

use serde::Serialize;

use crate::item::InventoryItem;
use crate::status::ItemStatus;

/// Aggregate counts for an inventory list, as the overview screens show
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InventoryStats {
    pub total_items: usize,
    /// Count per status; statuses with no items are omitted.
    pub by_status: BTreeMap<ItemStatus, usize>,
    /// Sum of item prices, smallest currency unit.
    pub total_value: u64,
}

impl InventoryStats {
    pub fn compute(items: &[InventoryItem]) -> Self {
        let mut by_status: BTreeMap<ItemStatus, usize> = BTreeMap::new();
        let mut total_value: u64 = 0;
        for item in items {
            *by_status.entry(item.status).or_insert(0) += 1;
            total_value += item.price;
        }
        Self {
            total_items: items.len(),
            by_status,
            total_value,
        }
    }

    pub fn count(&self, status: ItemStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}
