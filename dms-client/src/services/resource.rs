//! Generic CRUD over a [`Resource`] endpoint

use crate::error::{ClientError, ClientResult};
use crate::http::{FilePart, HttpClient};
use serde_json::Value;
use shared::error::is_foreign_key_violation;
use shared::models::{DealerOrder, Delivery, Order, OrderAttachments, Payment, Resource};
use shared::response::{normalize_item, normalize_list};
use std::marker::PhantomData;
use std::sync::Arc;

/// List / get / create / update / delete for one record type
pub struct ResourceService<C, R> {
    client: Arc<C>,
    _resource: PhantomData<fn() -> R>,
}

pub type OrderService<C> = ResourceService<C, Order>;
pub type DealerOrderService<C> = ResourceService<C, DealerOrder>;
pub type PaymentService<C> = ResourceService<C, Payment>;
pub type DeliveryService<C> = ResourceService<C, Delivery>;

impl<C, R> Clone for ResourceService<C, R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _resource: PhantomData,
        }
    }
}

impl<C: HttpClient, R: Resource> ResourceService<C, R> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    /// `GET {PATH}`, whatever shape the list arrives in
    pub async fn list(&self) -> ClientResult<Vec<R>> {
        let body: Value = self.client.get(R::PATH).await?;
        let items: Vec<R> = normalize_list(body)?;
        tracing::debug!(resource = R::NAME, count = items.len(), "Fetched list");
        Ok(items)
    }

    /// `GET {PATH}/{id}`
    pub async fn get(&self, id: i64) -> ClientResult<R> {
        let body: Value = self.client.get(&R::item_path(id)).await?;
        Ok(normalize_item(body)?)
    }

    /// `POST {PATH}` with the placeholder id `0`
    ///
    /// Returns the stored record when the backend echoes it, otherwise the
    /// submitted one.
    pub async fn create(&self, record: &R) -> ClientResult<R> {
        let mut body = record.clone();
        body.set_id(0);
        let response: Value = self.client.post(R::PATH, &body).await?;
        let created = match normalize_item::<R>(response) {
            Ok(stored) if stored.id() != 0 => stored,
            Ok(_) => body,
            Err(e) => {
                tracing::debug!(resource = R::NAME, error = %e, "Create response carried no record");
                body
            }
        };
        tracing::info!(resource = R::NAME, id = created.id(), "Created");
        Ok(created)
    }

    /// Full-record `PUT {PATH}/{id}`
    pub async fn update(&self, record: &R) -> ClientResult<()> {
        let id = record.id();
        let _: Value = self.client.put(&R::item_path(id), record).await?;
        tracing::info!(resource = R::NAME, id, "Updated");
        Ok(())
    }

    /// `DELETE {PATH}/{id}`
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        match self.client.delete::<Value>(&R::item_path(id)).await {
            Ok(_) => {
                tracing::info!(resource = R::NAME, id, "Deleted");
                Ok(())
            }
            Err(e) if is_foreign_key_violation(&e.user_message()) => {
                tracing::warn!(resource = R::NAME, id, error = %e, "Delete blocked by reference");
                Err(ClientError::Referenced(format!(
                    "Không thể xóa {} #{} vì đang được dữ liệu khác tham chiếu",
                    R::NAME,
                    id
                )))
            }
            Err(e) => Err(e),
        }
    }
}

impl<C: HttpClient> ResourceService<C, Order> {
    /// `POST /api/Order/{id}/attachments` as multipart
    /// (`attachmentImage`, `attachmentFile`)
    pub async fn upload_attachments(
        &self,
        order_id: i64,
        attachments: OrderAttachments,
    ) -> ClientResult<()> {
        if attachments.is_empty() {
            return Ok(());
        }
        let mut parts = Vec::with_capacity(2);
        if let Some(image) = attachments.image {
            parts.push(FilePart::new("attachmentImage", image));
        }
        if let Some(file) = attachments.file {
            parts.push(FilePart::new("attachmentFile", file));
        }
        let path = format!("{}/attachments", Order::item_path(order_id));
        let _: Value = self.client.post_multipart(&path, parts).await?;
        tracing::info!(order_id, "Uploaded order attachments");
        Ok(())
    }
}
