//! Customer / user identity lookups

use crate::error::ClientResult;
use crate::http::HttpClient;
use serde_json::Value;
use shared::models::Identity;
use shared::response::{normalize_item, normalize_list};
use std::collections::HashMap;
use std::sync::Arc;

const CUSTOMER_PATH: &str = "/api/Customer";
const USER_PATH: &str = "/api/User";

pub struct IdentityService<C> {
    client: Arc<C>,
}

impl<C> Clone for IdentityService<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

impl<C: HttpClient> IdentityService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn customer(&self, id: i64) -> ClientResult<Identity> {
        let body: Value = self.client.get(&format!("{}/{}", CUSTOMER_PATH, id)).await?;
        Ok(normalize_item(body)?)
    }

    pub async fn user(&self, id: i64) -> ClientResult<Identity> {
        let body: Value = self.client.get(&format!("{}/{}", USER_PATH, id)).await?;
        Ok(normalize_item(body)?)
    }

    /// Customer record first, user record if there is no customer with that id
    pub async fn lookup(&self, id: i64) -> ClientResult<Identity> {
        match self.customer(id).await {
            Err(e) if e.is_not_found() => {
                tracing::debug!(id, "No customer record, falling back to user");
                self.user(id).await
            }
            other => other,
        }
    }

    pub async fn users(&self) -> ClientResult<Vec<Identity>> {
        let body: Value = self.client.get(USER_PATH).await?;
        Ok(normalize_list(body)?)
    }

    /// User id -> display name, for resolving ids in lists
    pub async fn user_name_map(&self) -> ClientResult<HashMap<i64, String>> {
        Ok(self
            .users()
            .await?
            .into_iter()
            .map(|u| (u.id, u.display_name()))
            .collect())
    }
}
