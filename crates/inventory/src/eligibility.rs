use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::item::InventoryItem;
use crate::status::ItemStatus;

/// One precondition for listing an item for sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ListingRequirement {
    StockReady,
    InspectionComplete,
    PhotographyComplete,
}

impl ListingRequirement {
    /// Evaluation order; the first unmet entry names the overall reason.
    pub const ALL: [ListingRequirement; 3] = [
        ListingRequirement::StockReady,
        ListingRequirement::InspectionComplete,
        ListingRequirement::PhotographyComplete,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ListingRequirement::StockReady => "item in storage",
            ListingRequirement::InspectionComplete => "inspection complete",
            ListingRequirement::PhotographyComplete => "photography complete",
        }
    }

    fn unmet_reason(&self) -> &'static str {
        match self {
            ListingRequirement::StockReady => "item is not in storage",
            ListingRequirement::InspectionComplete => "inspection is not complete",
            ListingRequirement::PhotographyComplete => "photography is not complete",
        }
    }
}

/// Per-requirement outcome inside an [`EligibilityResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementCheck {
    pub requirement: ListingRequirement,
    pub label: &'static str,
    pub met: bool,
}

/// Listing decision with the full requirement breakdown.
///
/// Recomputed on every evaluation, never persisted. All three requirements
/// are always present and independently marked, so a progress view can show
/// more than just the first failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityResult {
    pub can_list: bool,
    pub overall_reason: String,
    /// All requirements in evaluation order.
    pub requirements: Vec<RequirementCheck>,
}

impl EligibilityResult {
    pub fn requirement(&self, requirement: ListingRequirement) -> Option<&RequirementCheck> {
        self.requirements.iter().find(|c| c.requirement == requirement)
    }
}

/// Compatibility policy for storage items with no inspection timestamp.
///
/// The legacy shelving path stamped `inspected_at` in the same update that
/// moved an item into storage, so records written before that path existed
/// can sit in storage with the timestamp missing. `AssumeOnStorage` treats
/// those as inspected at evaluation time; `Strict` lets the persisted
/// record decide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InspectionBackfill {
    #[default]
    Strict,
    AssumeOnStorage,
}

/// Evaluate listing eligibility under the default (`Strict`) policy.
pub fn evaluate(
    status: ItemStatus,
    inspected_at: Option<DateTime<Utc>>,
    photography_date: Option<DateTime<Utc>>,
) -> EligibilityResult {
    evaluate_with_policy(
        status,
        inspected_at,
        photography_date,
        InspectionBackfill::Strict,
    )
}

/// Evaluate listing eligibility.
///
/// Requirements are checked in [`ListingRequirement::ALL`] order and the
/// first unmet one determines `overall_reason`; each requirement is still
/// reported independently.
pub fn evaluate_with_policy(
    status: ItemStatus,
    inspected_at: Option<DateTime<Utc>>,
    photography_date: Option<DateTime<Utc>>,
    backfill: InspectionBackfill,
) -> EligibilityResult {
    let stock_ready = status == ItemStatus::Storage;
    let inspection_complete = inspected_at.is_some()
        || (backfill == InspectionBackfill::AssumeOnStorage && stock_ready);
    let photography_complete = photography_date.is_some();

    let requirements: Vec<RequirementCheck> = ListingRequirement::ALL
        .into_iter()
        .map(|requirement| {
            let met = match requirement {
                ListingRequirement::StockReady => stock_ready,
                ListingRequirement::InspectionComplete => inspection_complete,
                ListingRequirement::PhotographyComplete => photography_complete,
            };
            RequirementCheck {
                requirement,
                label: requirement.label(),
                met,
            }
        })
        .collect();

    let first_unmet = requirements.iter().find(|c| !c.met);
    let overall_reason = match first_unmet {
        Some(check) => check.requirement.unmet_reason().to_string(),
        None => "ready to list".to_string(),
    };

    EligibilityResult {
        can_list: first_unmet.is_none(),
        overall_reason,
        requirements,
    }
}

/// Filter `items` down to the listable subsequence.
///
/// Defined in terms of [`evaluate`] per item so the list view and the
/// filter can never disagree.
pub fn filter_listable(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    items.iter().filter(|item| item.eligibility().can_list).collect()
}
