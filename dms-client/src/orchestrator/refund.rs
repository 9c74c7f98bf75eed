//! Refund saga for a cancelled dealer order
//!
//! 1. find the order's payment (refusing if one is already REFUNDED)
//! 2. mark the payment REFUNDED
//! 3. mark the dealer order's payment status REFUNDED
//!
//! If step 3 fails the payment is restored to its original status. If that
//! fails too, both records are reported for manual reconciliation.

use super::{LifecycleOrchestrator, WorkflowError, WorkflowResult};
use crate::http::HttpClient;
use shared::lifecycle::{DealerPaymentStatus, LifecycleAction, PaymentStatus};
use shared::models::{DealerOrder, Payment, refunded_order_ids};
use std::collections::HashSet;

/// Records as stored after a successful refund
#[derive(Debug, Clone, PartialEq)]
pub struct RefundOutcome {
    pub payment: Payment,
    pub dealer_order: DealerOrder,
}

impl<C: HttpClient> LifecycleOrchestrator<C> {
    /// Refund the payment behind a cancelled dealer order
    pub async fn refund(&self, dealer_order: &DealerOrder) -> WorkflowResult<RefundOutcome> {
        let order_id = dealer_order.order_id;
        let dealer_order_id = dealer_order.dealer_order_id;

        // 1. State and role
        self.gate_dealer_order(LifecycleAction::Refund, dealer_order)?;

        // 2. Fresh payments; the already-refunded gate comes before the lookup
        let payments = self.payments.list().await?;
        if payments
            .iter()
            .any(|p| p.order_id == order_id && p.is_refunded())
        {
            return Err(WorkflowError::AlreadyRefunded { order_id });
        }
        let original = payments
            .into_iter()
            .find(|p| p.order_id == order_id)
            .ok_or(WorkflowError::PaymentNotFound { order_id })?;
        let payment_id = original.payment_id;

        // 3. Mark the payment refunded; failure aborts with nothing changed
        let mut refunded = original.clone();
        refunded.status = PaymentStatus::Refunded;
        self.payments.update(&refunded).await?;
        tracing::info!(order_id, payment_id, "Payment marked refunded");

        // 4. Mark the dealer order refunded
        let mut updated = dealer_order.clone();
        updated.payment_status = DealerPaymentStatus::Refunded;
        let cause = match self.dealer_orders.update(&updated).await {
            Ok(()) => {
                tracing::info!(order_id, payment_id, dealer_order_id, "Refund completed");
                return Ok(RefundOutcome {
                    payment: refunded,
                    dealer_order: updated,
                });
            }
            Err(e) => e,
        };

        // 5. Compensate: restore the payment
        tracing::warn!(
            dealer_order_id,
            payment_id,
            error = %cause,
            "Dealer order update failed, restoring payment"
        );
        match self.payments.update(&original).await {
            Ok(()) => {
                tracing::warn!(payment_id, status = %original.status, "Payment restored");
                Err(WorkflowError::RefundRolledBack {
                    payment_id,
                    dealer_order_id,
                    cause,
                })
            }
            Err(compensation) => {
                tracing::error!(
                    payment_id,
                    dealer_order_id,
                    cause = %cause,
                    compensation = %compensation,
                    "Payment REFUNDED but dealer order not, needs manual reconciliation"
                );
                Err(WorkflowError::Inconsistent {
                    payment_id,
                    dealer_order_id,
                    cause,
                    compensation,
                })
            }
        }
    }

    /// Order ids with a REFUNDED payment, from a fresh payment list
    pub async fn refunded_order_ids(&self) -> WorkflowResult<HashSet<i64>> {
        let payments = self.payments.list().await?;
        Ok(refunded_order_ids(&payments))
    }
}
