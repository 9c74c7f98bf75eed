//! Sale contract endpoints (list and create only)

use crate::error::ClientResult;
use crate::http::HttpClient;
use serde_json::Value;
use shared::models::{Resource, SaleContract, SaleContractCreate};
use shared::response::{normalize_item, normalize_list};
use std::sync::Arc;

pub struct SaleContractService<C> {
    client: Arc<C>,
}

impl<C> Clone for SaleContractService<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

impl<C: HttpClient> SaleContractService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<SaleContract>> {
        let body: Value = self.client.get(SaleContract::PATH).await?;
        Ok(normalize_list(body)?)
    }

    /// Returns the stored contract if the backend echoes it
    pub async fn create(&self, contract: &SaleContractCreate) -> ClientResult<Option<SaleContract>> {
        let response: Value = self.client.post(SaleContract::PATH, contract).await?;
        let stored = normalize_item::<SaleContract>(response)
            .ok()
            .filter(|c| c.sale_contract_id != 0);
        tracing::info!(
            order_id = contract.order_id,
            contract_id = ?stored.as_ref().map(|c| c.sale_contract_id),
            "Created sale contract"
        );
        Ok(stored)
    }
}
