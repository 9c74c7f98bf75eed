//! Order approval and the records created from an approved order

use super::{LifecycleOrchestrator, WorkflowError, WorkflowResult};
use crate::http::HttpClient;
use shared::lifecycle::{
    DealerOrderStatus, DealerPaymentStatus, LifecycleAction, OrderStatus, PaymentMethod,
    PaymentStatus, check_order_transition,
};
use shared::models::{
    DealerOrder, Identity, Order, Payment, SaleContract, SaleContractCreate, SaleContractDraft,
};
use shared::util::today;

impl<C: HttpClient> LifecycleOrchestrator<C> {
    /// Manual status edit, written back as a full-record PUT
    pub async fn set_order_status(
        &self,
        order: &Order,
        status: OrderStatus,
    ) -> WorkflowResult<Order> {
        // 1. Check action and transition
        self.gate_order(LifecycleAction::EditOrderStatus, order)?;
        check_order_transition(&order.status, &status, &self.role())?;

        // 2. Write the whole record with the new status
        let mut updated = order.clone();
        updated.status = status;
        self.orders.update(&updated).await?;

        tracing::info!(
            order_id = order.order_id,
            from = %order.status,
            to = %updated.status,
            "Order status updated"
        );
        Ok(updated)
    }

    /// PENDING -> approved
    pub async fn approve_order(&self, order: &Order) -> WorkflowResult<Order> {
        match order.status {
            OrderStatus::Pending => {}
            ref other => {
                return Err(WorkflowError::InvalidTransition(format!(
                    "order {} cannot be approved from {}",
                    order.order_id, other
                )));
            }
        }
        self.set_order_status(order, OrderStatus::Approved).await
    }

    /// Pre-filled contract form for an approved order
    ///
    /// Fails with `NotApproved` before any request when the order is not
    /// approved. Customer details come from the customer record, or the user
    /// record when there is no customer with that id.
    pub async fn contract_draft(&self, order: &Order) -> WorkflowResult<SaleContractDraft> {
        // 1. Gate without touching the network
        self.gate_order(LifecycleAction::CreateContract, order)?;

        // 2. Identity lookup; display-only, so a failure leaves the fields blank
        let identity = match self.identity.lookup(order.user_id).await {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(
                    order_id = order.order_id,
                    user_id = order.user_id,
                    error = %e,
                    "Customer lookup failed, contract form left blank"
                );
                Identity::default()
            }
        };

        // 3. Pre-fill
        let signer = self
            .session
            .user()
            .map(|u| u.full_name.unwrap_or(u.username))
            .unwrap_or_default();

        Ok(SaleContractDraft {
            order_id: order.order_id,
            user_id: order.user_id,
            contract_date: today(),
            terms: String::new(),
            signed_by_dealer: signer,
            customer_name: identity.full_name.clone().or(identity.username.clone()),
            phone: identity.phone,
            email: identity.email,
            address: identity.address.or(order.delivery_address.clone()),
            payment_method: PaymentMethod::default(),
            cccd: identity.cccd.unwrap_or_default(),
            contract_image: None,
            contract_file: None,
        })
    }

    /// Submit a contract draft; customer identity fields are not sent
    pub async fn create_contract(
        &self,
        order: &Order,
        draft: &SaleContractDraft,
    ) -> WorkflowResult<Option<SaleContract>> {
        self.gate_order(LifecycleAction::CreateContract, order)?;
        if draft.order_id != order.order_id {
            return Err(WorkflowError::Validation(format!(
                "Hợp đồng không thuộc đơn hàng #{}",
                order.order_id
            )));
        }
        if draft.contract_date.trim().is_empty() {
            return Err(WorkflowError::Validation(
                "Ngày hợp đồng không được để trống".into(),
            ));
        }

        let body = SaleContractCreate::from(draft);
        Ok(self.contracts.create(&body).await?)
    }

    /// Payment form for an approved order: amount from `finalPrice`, else
    /// `totalAmount`, else zero
    pub fn payment_draft(&self, order: &Order) -> WorkflowResult<Payment> {
        self.gate_order(LifecycleAction::CreatePayment, order)?;
        Ok(Payment {
            order_id: order.order_id,
            payment_date: Some(today()),
            amount: order.effective_amount(),
            method: PaymentMethod::default(),
            status: PaymentStatus::Pending,
            ..Default::default()
        })
    }

    pub async fn create_payment(
        &self,
        order: &Order,
        method: PaymentMethod,
        status: PaymentStatus,
        amount: f64,
    ) -> WorkflowResult<Payment> {
        self.gate_order(LifecycleAction::CreatePayment, order)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(WorkflowError::Validation(
                "Số tiền thanh toán không hợp lệ".into(),
            ));
        }

        let payment = Payment {
            order_id: order.order_id,
            payment_date: Some(today()),
            amount,
            method,
            status,
            ..Default::default()
        };
        Ok(self.payments.create(&payment).await?)
    }

    /// Stock requisition for an approved order: one unit, unpaid
    pub fn dealer_order_draft(
        &self,
        order: &Order,
        dealer_user_id: i64,
    ) -> WorkflowResult<DealerOrder> {
        self.gate_order(LifecycleAction::CreateDealerOrder, order)?;
        Ok(DealerOrder {
            user_id: dealer_user_id,
            order_id: order.order_id,
            vehicle_id: order.vehicle_id,
            quantity: 1,
            color: order.color.clone(),
            order_date: Some(today()),
            status: DealerOrderStatus::Pending,
            payment_status: DealerPaymentStatus::Unpaid,
            total_amount: order.effective_amount(),
            ..Default::default()
        })
    }

    pub async fn create_dealer_order(
        &self,
        order: &Order,
        draft: &DealerOrder,
    ) -> WorkflowResult<DealerOrder> {
        self.gate_order(LifecycleAction::CreateDealerOrder, order)?;
        if draft.user_id <= 0 {
            return Err(WorkflowError::Validation("Mã đại lý không hợp lệ".into()));
        }
        if draft.quantity <= 0 {
            return Err(WorkflowError::Validation("Số lượng xe không hợp lệ".into()));
        }
        Ok(self.dealer_orders.create(draft).await?)
    }
}
