//! Wire shapes for the backend's item and shipment endpoints.
//!
//! The backend's own format is immaterial to the core's logic; these types
//! capture just enough shape to convert into the domain records, and the
//! conversions are where unknown statuses get rejected.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use tradewind_bundles::{BundleShipment, BundledItemRef};
use tradewind_core::{BundleId, ItemId, WorkflowResult};
use tradewind_inventory::{InventoryItem, ItemMetadata, ItemStatus};

/// Envelope of the paginated item list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemListResponse {
    pub data: Vec<ItemRecord>,
}

/// Item record as the list/detail/barcode endpoints return it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: String,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub price: u64,
    pub status: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub inspected_at: Option<DateTime<Utc>>,
    /// Opaque; may be an object or a JSON-encoded string.
    #[serde(default)]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub entry_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assigned_staff: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ItemRecord {
    /// Convert into the domain item.
    ///
    /// Unknown statuses are rejected here, at the decode boundary, instead
    /// of leaking into downstream branches. Metadata decodes defensively and
    /// never fails. Bundle annotations start at their defaults.
    pub fn into_item(self) -> WorkflowResult<InventoryItem> {
        let status: ItemStatus = self.status.parse()?;
        let metadata = ItemMetadata::decode(self.metadata.as_ref());
        Ok(InventoryItem {
            id: ItemId::new(self.id),
            sku: self.sku,
            name: self.name,
            category: self.category,
            condition: self.condition,
            price: self.price,
            status,
            location: self.location.unwrap_or_default(),
            inspected_at: self.inspected_at,
            metadata,
            entry_date: self.entry_date,
            assigned_staff: self.assigned_staff,
            notes: self.notes,
            bundle_id: None,
            is_bundle_item: false,
            bundle_tracking_number: None,
            bundle_peers: Vec::new(),
        })
    }
}

/// Envelope of the shipment list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ShipmentListResponse {
    pub items: Vec<ShipmentRecord>,
}

/// Shipment record with the combined-shipment marker.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRecord {
    pub id: String,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub is_bundle: bool,
    #[serde(default)]
    pub bundled_items: Vec<BundledItemRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundledItemRecord {
    pub item_id: String,
    #[serde(default)]
    pub display_name: String,
}

impl ShipmentRecord {
    pub fn into_shipment(self) -> BundleShipment {
        BundleShipment {
            bundle_id: BundleId::new(self.id),
            tracking_number: self.tracking_number.unwrap_or_default(),
            is_bundle: self.is_bundle,
            bundled_items: self
                .bundled_items
                .into_iter()
                .map(|m| BundledItemRef {
                    item_id: ItemId::new(m.item_id),
                    display_name: m.display_name,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tradewind_core::WorkflowError;

    #[test]
    fn item_record_decodes_and_converts() {
        let record: ItemRecord = serde_json::from_value(json!({
            "id": "itm-1",
            "sku": "CAM-001",
            "name": "Canon EOS R5",
            "category": "camera",
            "condition": "excellent",
            "price": 450000,
            "status": "storage",
            "location": "A-01",
            "inspectedAt": "2024-01-01T00:00:00Z",
            "metadata": "{\"photographyDate\":\"2024-01-02T00:00:00Z\"}"
        }))
        .unwrap();

        let item = record.into_item().unwrap();
        assert_eq!(item.status, ItemStatus::Storage);
        assert_eq!(item.location, "A-01");
        assert!(item.inspected_at.is_some());
        assert!(item.metadata.photography_date.is_some());
        assert_eq!(item.bundle_id, None);
    }

    #[test]
    fn unknown_status_is_rejected_at_the_boundary() {
        let record: ItemRecord = serde_json::from_value(json!({
            "id": "itm-1",
            "sku": "CAM-001",
            "name": "Canon EOS R5",
            "status": "teleported"
        }))
        .unwrap();

        match record.into_item().unwrap_err() {
            WorkflowError::Validation(msg) => assert!(msg.contains("teleported")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn malformed_metadata_does_not_fail_conversion() {
        let record: ItemRecord = serde_json::from_value(json!({
            "id": "itm-1",
            "sku": "CAM-001",
            "name": "Canon EOS R5",
            "status": "inbound",
            "metadata": "{broken"
        }))
        .unwrap();

        let item = record.into_item().unwrap();
        assert_eq!(item.metadata, ItemMetadata::default());
    }

    #[test]
    fn shipment_record_converts_preserving_member_order() {
        let record: ShipmentRecord = serde_json::from_value(json!({
            "id": "bdl-1",
            "trackingNumber": "TRK-100",
            "isBundle": true,
            "bundledItems": [
                { "itemId": "itm-2", "displayName": "Sony FE 24-70mm" },
                { "itemId": "itm-1", "displayName": "Canon EOS R5" }
            ]
        }))
        .unwrap();

        let shipment = record.into_shipment();
        assert!(shipment.is_bundle);
        assert_eq!(shipment.tracking_number, "TRK-100");
        assert_eq!(shipment.bundled_items[0].item_id, ItemId::new("itm-2"));
        assert_eq!(shipment.bundled_items[1].item_id, ItemId::new("itm-1"));
    }
}
