use tradewind_bundles as bundles;
use tradewind_core::{WorkflowError, WorkflowResult};
use tradewind_inventory::{InspectionBackfill, InventoryItem, evaluate_with_policy};
use tradewind_gateway::{Backend, ItemFilter};
use tradewind_scanning::{MoveRequest, ScanEvent, ScanPurpose, validate_scan};

/// Result of dispatching one completed scan.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// Product scan matched an item.
    Product(Box<InventoryItem>),
    /// Product scan was well-formed but matched nothing. Terminal, not a
    /// failure of the scan itself.
    NoMatch,
    /// Location scan captured a shelf code.
    LocationCaptured(String),
}

/// Operator-station orchestration over a backend.
///
/// Composes the domain crates the way a screen needs them: the item list
/// with best-effort bundle enrichment, scan dispatch, and move submission.
pub struct Station<B: Backend> {
    backend: B,
    backfill: InspectionBackfill,
}

impl<B: Backend> Station<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            backfill: InspectionBackfill::default(),
        }
    }

    /// Use a non-default inspection-backfill policy for eligibility checks.
    pub fn with_backfill(backend: B, backfill: InspectionBackfill) -> Self {
        Self { backend, backfill }
    }

    /// Fetch the item list, then enrich it with bundle annotations.
    ///
    /// The two fetches are sequenced, not parallel, and the second is
    /// best-effort: a shipment fetch failure is logged and the list is
    /// returned unannotated. Enrichment completes (success or caught
    /// failure) before the list is handed back, so a consumer never sees a
    /// partially-annotated list.
    pub async fn load_inventory(&self, filter: &ItemFilter) -> WorkflowResult<Vec<InventoryItem>> {
        let mut items = self.backend.list_items(filter).await?;

        match self.backend.list_shipments().await {
            Ok(shipments) => bundles::annotate(&mut items, &shipments),
            Err(err) => {
                let failure = WorkflowError::enrichment(err.to_string());
                tracing::warn!(error = %failure, "bundle enrichment skipped");
            }
        }

        Ok(items)
    }

    /// Handle a completed scan according to its purpose.
    ///
    /// The payload is validated first; a malformed scan is a validation
    /// error the caller surfaces and clears. A well-formed product scan is
    /// looked up; "no match" is a normal outcome. Transport errors bubble to
    /// the caller with the scan untouched so the operator can retry.
    pub async fn handle_scan(&self, event: &ScanEvent) -> WorkflowResult<ScanOutcome> {
        validate_scan(event.purpose, &event.raw)?;

        match event.purpose {
            ScanPurpose::Product => match self.backend.find_by_barcode(&event.raw).await? {
                Some(item) => Ok(ScanOutcome::Product(Box::new(item))),
                None => Ok(ScanOutcome::NoMatch),
            },
            ScanPurpose::Location | ScanPurpose::LocationMove => {
                Ok(ScanOutcome::LocationCaptured(event.raw.clone()))
            }
        }
    }

    /// Listing-eligible subsequence of `items` under this station's policy.
    ///
    /// Evaluates every item individually, the same way the list view does.
    pub fn listable<'a>(&self, items: &'a [InventoryItem]) -> Vec<&'a InventoryItem> {
        items
            .iter()
            .filter(|item| {
                evaluate_with_policy(
                    item.status,
                    item.inspected_at,
                    item.photography_date(),
                    self.backfill,
                )
                .can_list
            })
            .collect()
    }

    /// Record a confirmed shelf move.
    pub async fn submit_move(&self, request: &MoveRequest) -> WorkflowResult<()> {
        self.backend.submit_move(request).await
    }
}
