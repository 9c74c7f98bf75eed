//! Delivery creation for a dealer order whose vehicle has arrived

use super::{LifecycleOrchestrator, WorkflowError, WorkflowResult};
use crate::http::HttpClient;
use shared::lifecycle::{DeliveryStatus, LifecycleAction};
use shared::models::{DealerOrder, Delivery};
use shared::util::today;

impl<C: HttpClient> LifecycleOrchestrator<C> {
    /// Delivery form pre-filled from the dealer order
    pub fn delivery_draft(&self, dealer_order: &DealerOrder) -> WorkflowResult<Delivery> {
        self.gate_dealer_order(LifecycleAction::CreateDelivery, dealer_order)?;
        Ok(Delivery {
            user_id: dealer_order.user_id,
            order_id: dealer_order.order_id,
            vehicle_id: dealer_order.vehicle_id,
            color: dealer_order.color.clone(),
            delivery_date: Some(today()),
            delivery_status: DeliveryStatus::Pending,
            ..Default::default()
        })
    }

    pub async fn create_delivery(
        &self,
        dealer_order: &DealerOrder,
        draft: &Delivery,
    ) -> WorkflowResult<Delivery> {
        self.gate_dealer_order(LifecycleAction::CreateDelivery, dealer_order)?;
        if draft.vehicle_id <= 0 {
            return Err(WorkflowError::Validation("Mã xe không hợp lệ".into()));
        }
        if draft.delivery_date.as_deref().is_none_or(|d| d.trim().is_empty()) {
            return Err(WorkflowError::Validation(
                "Ngày giao xe không được để trống".into(),
            ));
        }
        let created = self.deliveries.create(draft).await?;
        tracing::info!(
            dealer_order_id = dealer_order.dealer_order_id,
            delivery_id = created.delivery_id,
            "Delivery created"
        );
        Ok(created)
    }
}
