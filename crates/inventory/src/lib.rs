//! Inventory domain module.
//!
//! This crate contains the item status vocabulary, the item record with its
//! defensively-decoded metadata, the inspection/photography deriver, and the
//! listing eligibility engine, implemented purely as deterministic domain
//! logic (no IO, no HTTP, no storage).

pub mod eligibility;
pub mod item;
pub mod metadata;
pub mod progress;
pub mod stats;
pub mod status;

pub use eligibility::{
    EligibilityResult, InspectionBackfill, ListingRequirement, RequirementCheck, evaluate,
    evaluate_with_policy, filter_listable,
};
pub use item::InventoryItem;
pub use metadata::ItemMetadata;
pub use stats::InventoryStats;
pub use progress::{InspectionPhotographyStatus, ProgressState, derive};
pub use status::ItemStatus;
