//! Read-only report endpoints

use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;
use serde_json::Value;
use shared::models::{DealerRevenue, DebtReport};
use shared::response::normalize_list;
use std::sync::Arc;

const DEALER_DEBTS_PATH: &str = "/api/DebtReport/Dealers";
const CUSTOMER_DEBTS_PATH: &str = "/api/DebtReport/Customers";
const DEALER_REVENUE_PATH: &str = "/api/DealerRevenue";

pub struct ReportService<C> {
    client: Arc<C>,
}

impl<C> Clone for ReportService<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

impl<C: HttpClient> ReportService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn dealer_debts(&self) -> ClientResult<Vec<DebtReport>> {
        let body: Value = self.client.get(DEALER_DEBTS_PATH).await?;
        Ok(normalize_list(body)?)
    }

    pub async fn customer_debts(&self) -> ClientResult<Vec<DebtReport>> {
        let body: Value = self.client.get(CUSTOMER_DEBTS_PATH).await?;
        Ok(normalize_list(body)?)
    }

    /// A 404 means no revenue has been booked yet and reads as an empty list
    pub async fn dealer_revenue(&self) -> ClientResult<Vec<DealerRevenue>> {
        match self.client.get::<Value>(DEALER_REVENUE_PATH).await {
            Ok(body) => Ok(normalize_list(body)?),
            Err(ClientError::NotFound(_)) => {
                tracing::debug!("Dealer revenue not available, treating as empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}
