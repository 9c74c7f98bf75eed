//! Inventory dispatch endpoint

use crate::error::ClientResult;
use crate::http::HttpClient;
use serde_json::Value;
use shared::models::{DISPATCH_PATH, DispatchRequest};
use std::sync::Arc;

pub struct InventoryService<C> {
    client: Arc<C>,
}

impl<C> Clone for InventoryService<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

impl<C: HttpClient> InventoryService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// `POST /api/Inventory/dispatch`; no client-side checks here
    pub async fn dispatch(&self, request: &DispatchRequest) -> ClientResult<Value> {
        let response: Value = self.client.post(DISPATCH_PATH, request).await?;
        tracing::info!(
            vehicle_id = request.vehicle_id,
            dealer_id = request.dealer_id,
            quantity = request.quantity,
            "Inventory dispatched"
        );
        Ok(response)
    }
}
