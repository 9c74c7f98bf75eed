//! Order lifecycle state machine
//!
//! - **status**: status enums for every record kind
//! - **role**: operator roles
//! - **transitions**: transition table and action guards
//!
//! # Order flow
//!
//! ```text
//! Order:        PENDING ──approve──▶ approved ──▶ COMPLETED
//!                  │                    │
//!                  └──────────▶ CANCELLED ◀┘
//!
//! DealerOrder:  PENDING ─▶ CONFIRMED ─dispatch─▶ VEHICLE_DELIVERED ─▶ DELIVERED ─▶ COMPLETED
//!                  │           │
//!                  └─▶ CANCELLED ◀┘ ──refund──▶ paymentStatus = REFUNDED
//! ```

#[macro_use]
mod status;
mod role;
mod transitions;

pub use role::Role;
pub use status::{
    DealerOrderStatus, DealerPaymentStatus, DeliveryStatus, OrderStatus, PaymentMethod,
    PaymentStatus,
};
pub use transitions::{
    check_dealer_order_action, check_dealer_order_transition, check_order_action,
    check_order_transition, dealer_order_actions, order_actions, ActionDenied, LifecycleAction,
    RoleGuard, Transition, DEALER_ORDER_ACTIONS, DEALER_ORDER_TRANSITIONS, ORDER_ACTIONS,
    ORDER_TRANSITIONS,
};
