//! Backend boundary: the operations this core consumes but does not
//! implement.

use tradewind_bundles::BundleShipment;
use tradewind_core::{ItemId, WorkflowError, WorkflowResult};
use tradewind_inventory::{InventoryItem, ItemStatus};
use tradewind_scanning::MoveRequest;

use crate::config::BackendConfig;
use crate::dto::{ItemListResponse, ItemRecord, ShipmentListResponse};

/// Query parameters for the paginated item list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub status: Option<ItemStatus>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// The warehouse backend as this core consumes it.
///
/// Implementations own wire format and verb naming; only the shapes and the
/// not-found / transport distinction are part of the contract here.
/// `find_by_barcode` returns `Ok(None)` for a clean miss, which is a
/// legitimate outcome, not an error.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn list_items(&self, filter: &ItemFilter) -> WorkflowResult<Vec<InventoryItem>>;

    async fn get_item(&self, id: &ItemId) -> WorkflowResult<InventoryItem>;

    async fn find_by_barcode(&self, barcode: &str) -> WorkflowResult<Option<InventoryItem>>;

    async fn list_shipments(&self) -> WorkflowResult<Vec<BundleShipment>>;

    /// Fire-and-forget from the workflow's perspective; persistence
    /// confirmation is the backend's concern.
    async fn submit_move(&self, request: &MoveRequest) -> WorkflowResult<()>;
}

/// HTTP implementation of [`Backend`].
pub struct HttpBackend {
    base_url: String,
    http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> WorkflowResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| WorkflowError::transport(e.to_string()))?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: String) -> WorkflowResult<T> {
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| WorkflowError::transport(e.to_string()))?;
        check_status(response.status())?;
        response
            .json::<T>()
            .await
            .map_err(|e| WorkflowError::transport(format!("malformed response: {e}")))
    }
}

/// 404 means not-found; anything else non-2xx is a transport fault.
fn check_status(status: reqwest::StatusCode) -> WorkflowResult<()> {
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(WorkflowError::NotFound);
    }
    if !status.is_success() {
        return Err(WorkflowError::transport(format!(
            "backend returned {status}"
        )));
    }
    Ok(())
}

impl Backend for HttpBackend {
    async fn list_items(&self, filter: &ItemFilter) -> WorkflowResult<Vec<InventoryItem>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(status) = filter.status {
            query.push(("status", status.to_string()));
        }
        if let Some(category) = &filter.category {
            query.push(("category", category.clone()));
        }
        if let Some(search) = &filter.search {
            query.push(("search", search.clone()));
        }
        if let Some(page) = filter.page {
            query.push(("page", page.to_string()));
        }
        if let Some(page_size) = filter.page_size {
            query.push(("limit", page_size.to_string()));
        }

        let response = self
            .http
            .get(format!("{}/inventory", self.base_url))
            .query(&query)
            .send()
            .await
            .map_err(|e| WorkflowError::transport(e.to_string()))?;
        check_status(response.status())?;
        let body: ItemListResponse = response
            .json()
            .await
            .map_err(|e| WorkflowError::transport(format!("malformed response: {e}")))?;

        body.data.into_iter().map(ItemRecord::into_item).collect()
    }

    async fn get_item(&self, id: &ItemId) -> WorkflowResult<InventoryItem> {
        let record: ItemRecord = self
            .get_json(format!("{}/inventory/{}", self.base_url, id))
            .await?;
        record.into_item()
    }

    async fn find_by_barcode(&self, barcode: &str) -> WorkflowResult<Option<InventoryItem>> {
        let url = format!("{}/products/barcode/{}", self.base_url, barcode);
        match self.get_json::<ItemRecord>(url).await {
            Ok(record) => record.into_item().map(Some),
            Err(WorkflowError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn list_shipments(&self) -> WorkflowResult<Vec<BundleShipment>> {
        let body: ShipmentListResponse = self
            .get_json(format!("{}/shipping", self.base_url))
            .await?;
        Ok(body
            .items
            .into_iter()
            .map(|record| record.into_shipment())
            .collect())
    }

    async fn submit_move(&self, request: &MoveRequest) -> WorkflowResult<()> {
        let response = self
            .http
            .post(format!("{}/inventory/movement", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| WorkflowError::transport(e.to_string()))?;
        check_status(response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_status_maps_to_not_found() {
        assert_eq!(
            check_status(reqwest::StatusCode::NOT_FOUND),
            Err(WorkflowError::NotFound)
        );
    }

    #[test]
    fn other_failures_map_to_transport() {
        for status in [
            reqwest::StatusCode::BAD_REQUEST,
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            reqwest::StatusCode::BAD_GATEWAY,
        ] {
            match check_status(status) {
                Err(WorkflowError::Transport(msg)) => {
                    assert!(msg.contains(status.as_str()));
                }
                other => panic!("expected Transport for {status}, got {other:?}"),
            }
        }
    }

    #[test]
    fn success_statuses_pass() {
        assert!(check_status(reqwest::StatusCode::OK).is_ok());
        assert!(check_status(reqwest::StatusCode::CREATED).is_ok());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let backend = HttpBackend::new(&BackendConfig {
            base_url: "http://backend/api/".to_string(),
            ..BackendConfig::default()
        })
        .unwrap();
        assert_eq!(backend.base_url, "http://backend/api");
    }
}
