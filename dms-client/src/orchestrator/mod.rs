//! Order lifecycle orchestrator
//!
//! Drives an order from approval to delivery, and a cancelled dealer order
//! through refund, by issuing the fixed sequence of REST calls each step
//! needs. Every operation checks the lifecycle table in
//! [`shared::lifecycle`] before touching the network.
//!
//! Calls within one operation are awaited one after another. Nothing is
//! retried; a failed step surfaces as a [`WorkflowError`].

mod delivery;
mod dispatch;
mod error;
mod order;
mod refund;

pub use dispatch::DispatchOutcome;
pub use error::{WorkflowError, WorkflowResult};
pub use refund::RefundOutcome;

use crate::http::HttpClient;
use crate::services::{
    DealerOrderService, DeliveryService, IdentityService, InventoryService, OrderService,
    PaymentService, SaleContractService,
};
use crate::session::SessionStore;
use shared::lifecycle::{
    ActionDenied, LifecycleAction, Role, check_dealer_order_action, check_order_action,
};
use shared::models::{DealerOrder, Order};
use std::sync::Arc;

/// Order lifecycle orchestrator
pub struct LifecycleOrchestrator<C> {
    orders: OrderService<C>,
    contracts: SaleContractService<C>,
    dealer_orders: DealerOrderService<C>,
    payments: PaymentService<C>,
    deliveries: DeliveryService<C>,
    identity: IdentityService<C>,
    inventory: InventoryService<C>,
    session: Arc<dyn SessionStore>,
}

impl<C> Clone for LifecycleOrchestrator<C> {
    fn clone(&self) -> Self {
        Self {
            orders: self.orders.clone(),
            contracts: self.contracts.clone(),
            dealer_orders: self.dealer_orders.clone(),
            payments: self.payments.clone(),
            deliveries: self.deliveries.clone(),
            identity: self.identity.clone(),
            inventory: self.inventory.clone(),
            session: self.session.clone(),
        }
    }
}

impl<C: HttpClient> LifecycleOrchestrator<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            session: client.session().clone(),
            orders: OrderService::new(client.clone()),
            contracts: SaleContractService::new(client.clone()),
            dealer_orders: DealerOrderService::new(client.clone()),
            payments: PaymentService::new(client.clone()),
            deliveries: DeliveryService::new(client.clone()),
            identity: IdentityService::new(client.clone()),
            inventory: InventoryService::new(client),
        }
    }

    /// Role of the signed-in operator
    pub fn role(&self) -> Role {
        self.session.role()
    }

    /// Gate an order action; an unapproved order reports `NotApproved`
    fn gate_order(&self, action: LifecycleAction, order: &Order) -> WorkflowResult<()> {
        check_order_action(action, &order.status, &self.role()).map_err(|e| match e {
            ActionDenied::State { .. } => WorkflowError::NotApproved {
                order_id: order.order_id,
            },
            other => other.into(),
        })
    }

    /// Gate a dealer order action on state and role; the refund flag is
    /// checked separately against fresh payments
    fn gate_dealer_order(
        &self,
        action: LifecycleAction,
        dealer_order: &DealerOrder,
    ) -> WorkflowResult<()> {
        check_dealer_order_action(action, &dealer_order.status, &self.role(), false)
            .map_err(Into::into)
    }
}
