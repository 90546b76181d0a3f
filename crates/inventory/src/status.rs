use core::str::FromStr;

use serde::{Deserialize, Serialize};

use tradewind_core::WorkflowError;

/// Item status lifecycle.
///
/// The set is closed: decode boundaries reject unknown values instead of
/// accepting them, and every downstream decision branches exhaustively so a
/// new status is a compile-time-visible change everywhere it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Inbound,
    Inspection,
    Storage,
    Listing,
    Ordered,
    Shipping,
    Sold,
    Returned,
    OnHold,
    Maintenance,
    Cancelled,
}

impl ItemStatus {
    /// Every member of the vocabulary, in lifecycle order.
    pub const ALL: [ItemStatus; 11] = [
        ItemStatus::Inbound,
        ItemStatus::Inspection,
        ItemStatus::Storage,
        ItemStatus::Listing,
        ItemStatus::Ordered,
        ItemStatus::Shipping,
        ItemStatus::Sold,
        ItemStatus::Returned,
        ItemStatus::OnHold,
        ItemStatus::Maintenance,
        ItemStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Inbound => "inbound",
            ItemStatus::Inspection => "inspection",
            ItemStatus::Storage => "storage",
            ItemStatus::Listing => "listing",
            ItemStatus::Ordered => "ordered",
            ItemStatus::Shipping => "shipping",
            ItemStatus::Sold => "sold",
            ItemStatus::Returned => "returned",
            ItemStatus::OnHold => "on_hold",
            ItemStatus::Maintenance => "maintenance",
            ItemStatus::Cancelled => "cancelled",
        }
    }

    /// Operator-facing display label.
    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Inbound => "awaiting intake",
            ItemStatus::Inspection => "under inspection",
            ItemStatus::Storage => "in storage",
            ItemStatus::Listing => "listed for sale",
            ItemStatus::Ordered => "ordered",
            ItemStatus::Shipping => "shipping",
            ItemStatus::Sold => "sold",
            ItemStatus::Returned => "returned",
            ItemStatus::OnHold => "on hold",
            ItemStatus::Maintenance => "in maintenance",
            ItemStatus::Cancelled => "cancelled",
        }
    }

    /// Suggested next workflow step for an item in this status, if any.
    pub fn next_step(&self) -> Option<&'static str> {
        match self {
            ItemStatus::Inbound => Some("start inspection"),
            ItemStatus::Inspection => Some("complete inspection and shelve"),
            ItemStatus::Storage => Some("list for sale"),
            ItemStatus::Listing => None,
            ItemStatus::Ordered => Some("pick and pack"),
            ItemStatus::Shipping => None,
            ItemStatus::Sold => None,
            ItemStatus::Returned => Some("re-inspect"),
            ItemStatus::OnHold => Some("resolve hold"),
            ItemStatus::Maintenance => Some("finish maintenance"),
            ItemStatus::Cancelled => None,
        }
    }
}

impl core::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inbound" => Ok(ItemStatus::Inbound),
            "inspection" => Ok(ItemStatus::Inspection),
            "storage" => Ok(ItemStatus::Storage),
            "listing" => Ok(ItemStatus::Listing),
            "ordered" => Ok(ItemStatus::Ordered),
            "shipping" => Ok(ItemStatus::Shipping),
            "sold" => Ok(ItemStatus::Sold),
            "returned" => Ok(ItemStatus::Returned),
            "on_hold" => Ok(ItemStatus::OnHold),
            "maintenance" => Ok(ItemStatus::Maintenance),
            "cancelled" => Ok(ItemStatus::Cancelled),
            other => Err(WorkflowError::validation(format!(
                "unknown item status: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_member_of_the_vocabulary() {
        for status in ItemStatus::ALL {
            assert_eq!(status.as_str().parse::<ItemStatus>().unwrap(), status);
        }
    }

    #[test]
    fn rejects_unknown_status() {
        let err = "archived".parse::<ItemStatus>().unwrap_err();
        match err {
            WorkflowError::Validation(msg) => assert!(msg.contains("archived")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn serde_round_trips_snake_case() {
        let json = serde_json::to_string(&ItemStatus::OnHold).unwrap();
        assert_eq!(json, "\"on_hold\"");
        let back: ItemStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ItemStatus::OnHold);
    }

    #[test]
    fn serde_rejects_unknown_status() {
        assert!(serde_json::from_str::<ItemStatus>("\"misplaced\"").is_err());
    }

    #[test]
    fn every_status_has_a_label() {
        for status in ItemStatus::ALL {
            assert!(!status.label().is_empty());
        }
    }
}
