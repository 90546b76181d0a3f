use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tradewind_core::{BundleId, ItemId};

use crate::eligibility::{self, EligibilityResult};
use crate::metadata::ItemMetadata;
use crate::progress::{self, InspectionPhotographyStatus};
use crate::status::ItemStatus;

/// An inventory item as the warehouse workflow sees it.
///
/// Intake creates items in `Inbound`; staff actions advance `status`; the
/// shelf-move protocol changes `location` only. Bundle fields stay at their
/// "no bundle" defaults until the bundle matcher has run over the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub condition: String,
    /// Price in smallest currency unit.
    pub price: u64,
    pub status: ItemStatus,
    /// Free-text shelf code.
    pub location: String,
    pub inspected_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub metadata: ItemMetadata,
    #[serde(default)]
    pub entry_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assigned_staff: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,

    // Bundle annotations, written only by the bundle matcher.
    #[serde(default)]
    pub bundle_id: Option<BundleId>,
    #[serde(default)]
    pub is_bundle_item: bool,
    #[serde(default)]
    pub bundle_tracking_number: Option<String>,
    /// Display names of the other items in the same bundle.
    #[serde(default)]
    pub bundle_peers: Vec<String>,
}

impl InventoryItem {
    /// Photography completion time, which lives inside the metadata record.
    pub fn photography_date(&self) -> Option<DateTime<Utc>> {
        self.metadata.photography_date
    }

    /// Current listing eligibility, recomputed from the item's fields.
    pub fn eligibility(&self) -> EligibilityResult {
        eligibility::evaluate(self.status, self.inspected_at, self.photography_date())
    }

    /// Current inspection/photography pipeline status.
    pub fn progress(&self) -> InspectionPhotographyStatus {
        progress::derive(&self.metadata)
    }

    /// Reset bundle annotations to their "no bundle" defaults.
    pub fn clear_bundle(&mut self) {
        self.bundle_id = None;
        self.is_bundle_item = false;
        self.bundle_tracking_number = None;
        self.bundle_peers.clear();
    }
}
