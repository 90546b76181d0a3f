use serde::{Deserialize, Serialize};

use tradewind_core::{BundleId, ItemId};
use tradewind_inventory::InventoryItem;

/// Reference to one item inside a combined shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundledItemRef {
    pub item_id: ItemId,
    pub display_name: String,
}

/// A shipment record as the shipment backend reports it.
///
/// Only records with `is_bundle` set participate in matching; the rest are
/// single-item shipments the matcher ignores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleShipment {
    pub bundle_id: BundleId,
    pub tracking_number: String,
    pub is_bundle: bool,
    #[serde(default)]
    pub bundled_items: Vec<BundledItemRef>,
}

/// Annotate items that ship together in a combined shipment.
///
/// Bundles and their member lists are walked in input order and the first
/// bundle containing an item wins; later matches for the same item are
/// ignored, so the order of both lists is significant. `bundle_peers` holds
/// the other members' display names, never the item's own. Items without a
/// match keep their "no bundle" defaults.
pub fn annotate(items: &mut [InventoryItem], shipments: &[BundleShipment]) {
    let bundles: Vec<&BundleShipment> = shipments.iter().filter(|s| s.is_bundle).collect();
    if bundles.is_empty() {
        return;
    }

    for item in items.iter_mut() {
        for bundle in &bundles {
            if bundle.bundled_items.iter().any(|m| m.item_id == item.id) {
                item.bundle_id = Some(bundle.bundle_id.clone());
                item.is_bundle_item = true;
                item.bundle_tracking_number = Some(bundle.tracking_number.clone());
                item.bundle_peers = bundle
                    .bundled_items
                    .iter()
                    .filter(|m| m.item_id != item.id)
                    .map(|m| m.display_name.clone())
                    .collect();
                break;
            }
        }
    }
}
