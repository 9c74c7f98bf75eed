//! Inventory dispatch for a confirmed dealer order
//!
//! Two writes: the dispatch itself, then the dealer order's status. The
//! backend offers no restock endpoint, so a failed status write cannot be
//! undone from here. It is reported as a partial outcome for manual
//! reconciliation instead of as success.

use super::{LifecycleOrchestrator, WorkflowError, WorkflowResult};
use crate::http::HttpClient;
use shared::error::{AppError, DispatchFailure, ErrorCode};
use shared::lifecycle::{DealerOrderStatus, LifecycleAction, check_dealer_order_transition};
use shared::models::{DealerOrder, DispatchRequest};

/// Result of a dispatch whose inventory write succeeded
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    /// Dealer order as now stored (unchanged if the status write failed)
    pub dealer_order: DealerOrder,
    /// Whether the VEHICLE_DELIVERED status write succeeded
    pub status_synced: bool,
    pub status_error: Option<String>,
}

impl DispatchOutcome {
    /// Stock left the manufacturer but the dealer order still shows the old status
    pub fn needs_reconciliation(&self) -> bool {
        !self.status_synced
    }

    /// Operator warning for a partial dispatch
    pub fn warning(&self) -> Option<AppError> {
        if self.status_synced {
            return None;
        }
        let mut warning = AppError::new(ErrorCode::DispatchStatusStale)
            .with_detail("dealer_order_id", self.dealer_order.dealer_order_id);
        if let Some(cause) = &self.status_error {
            warning = warning.with_detail("cause", cause.as_str());
        }
        Some(warning)
    }
}

impl<C: HttpClient> LifecycleOrchestrator<C> {
    /// Manual dealer order status edit, written back as a full-record PUT
    pub async fn set_dealer_order_status(
        &self,
        dealer_order: &DealerOrder,
        status: DealerOrderStatus,
    ) -> WorkflowResult<DealerOrder> {
        self.gate_dealer_order(LifecycleAction::EditDealerOrderStatus, dealer_order)?;
        check_dealer_order_transition(&dealer_order.status, &status, &self.role())?;

        let mut updated = dealer_order.clone();
        updated.status = status;
        self.dealer_orders.update(&updated).await?;

        tracing::info!(
            dealer_order_id = dealer_order.dealer_order_id,
            from = %dealer_order.status,
            to = %updated.status,
            "Dealer order status updated"
        );
        Ok(updated)
    }

    /// Dispatch stock for a CONFIRMED dealer order, then mark it VEHICLE_DELIVERED
    pub async fn dispatch(&self, dealer_order: &DealerOrder) -> WorkflowResult<DispatchOutcome> {
        let dealer_order_id = dealer_order.dealer_order_id;

        // 1. State and role
        self.gate_dealer_order(LifecycleAction::DispatchInventory, dealer_order)?;

        // 2. Client-side checks, before any request
        let request = DispatchRequest::from(dealer_order);
        request
            .validate()
            .map_err(|e| WorkflowError::Validation(e.to_string()))?;

        // 3. Decrement manufacturer stock
        if let Err(e) = self.inventory.dispatch(&request).await {
            let backend = e.user_message();
            let kind = DispatchFailure::classify(&backend);
            tracing::error!(
                dealer_order_id,
                kind = ?kind,
                error = %e,
                "Dispatch rejected"
            );
            return Err(WorkflowError::Dispatch {
                kind,
                message: kind.user_message(&backend),
            });
        }

        // 4. Record the new status
        let mut delivered = dealer_order.clone();
        delivered.status = DealerOrderStatus::VehicleDelivered;
        match self.dealer_orders.update(&delivered).await {
            Ok(()) => {
                tracing::info!(dealer_order_id, "Dispatch completed");
                Ok(DispatchOutcome {
                    dealer_order: delivered,
                    status_synced: true,
                    status_error: None,
                })
            }
            Err(e) => {
                tracing::warn!(
                    dealer_order_id,
                    error = %e,
                    "Stock dispatched but dealer order status not updated, needs reconciliation"
                );
                Ok(DispatchOutcome {
                    dealer_order: dealer_order.clone(),
                    status_synced: false,
                    status_error: Some(e.user_message()),
                })
            }
        }
    }
}
