//! Dealer order board
//!
//! State behind the dealer-order screen: the list, the payments it is
//! checked against, and which actions each row offers the current operator.

use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::services::{DealerOrderService, PaymentService};
use crate::session::SessionStore;
use shared::filter::filter_by_search;
use shared::lifecycle::{LifecycleAction, Role, dealer_order_actions};
use shared::models::{DealerOrder, Payment, refunded_order_ids};
use std::collections::HashSet;
use std::sync::Arc;

pub struct DealerOrderBoard<C> {
    dealer_orders: DealerOrderService<C>,
    payments: PaymentService<C>,
    session: Arc<dyn SessionStore>,
    rows: Vec<DealerOrder>,
    payment_rows: Vec<Payment>,
    refunded: HashSet<i64>,
}

impl<C: HttpClient> DealerOrderBoard<C> {
    /// Empty board; call [`refresh`](Self::refresh) to load it
    pub fn new(client: Arc<C>) -> Self {
        Self {
            session: client.session().clone(),
            dealer_orders: DealerOrderService::new(client.clone()),
            payments: PaymentService::new(client),
            rows: Vec::new(),
            payment_rows: Vec::new(),
            refunded: HashSet::new(),
        }
    }

    /// Re-fetch dealer orders and payments
    ///
    /// On failure the previous contents are kept.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        let rows = self.dealer_orders.list().await?;
        let payments = self.payments.list().await?;

        self.refunded = refunded_order_ids(&payments);
        self.rows = rows;
        self.payment_rows = payments;
        tracing::debug!(
            dealer_orders = self.rows.len(),
            payments = self.payment_rows.len(),
            refunded = self.refunded.len(),
            "Dealer order board refreshed"
        );
        Ok(())
    }

    pub fn rows(&self) -> &[DealerOrder] {
        &self.rows
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payment_rows
    }

    pub fn role(&self) -> Role {
        self.session.role()
    }

    /// Order ids with a REFUNDED payment, as of the last refresh
    pub fn refunded_order_ids(&self) -> &HashSet<i64> {
        &self.refunded
    }

    /// Whether the row's source order has a REFUNDED payment; the row's own
    /// `paymentStatus` is not consulted, same as the refund itself
    pub fn is_refunded(&self, dealer_order: &DealerOrder) -> bool {
        self.refunded.contains(&dealer_order.order_id)
    }

    /// Actions to offer on a row for the signed-in operator
    pub fn available_actions(&self, dealer_order: &DealerOrder) -> Vec<LifecycleAction> {
        dealer_order_actions(
            &dealer_order.status,
            &self.role(),
            self.is_refunded(dealer_order),
        )
    }

    /// Rows matching a search term; an empty term matches everything
    pub fn filtered(&self, term: &str) -> Vec<&DealerOrder> {
        filter_by_search(&self.rows, term)
    }
}
