//! Transition and action tables for orders and dealer orders
//!
//! Each transition names its predecessor state, successor state, the role
//! allowed to perform it and the actions it unlocks. Action availability is a
//! pure function of (state, role, refund flag), so any surface can ask
//! which actions to offer without duplicating conditions.

use super::role::Role;
use super::status::{DealerOrderStatus, OrderStatus};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which roles may perform an action or transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleGuard {
    Any,
    EvmStaffOnly,
    NonEvmStaff,
}

impl RoleGuard {
    pub fn admits(&self, role: &Role) -> bool {
        match self {
            Self::Any => true,
            Self::EvmStaffOnly => role.is_evm_staff(),
            Self::NonEvmStaff => !role.is_evm_staff(),
        }
    }
}

/// Side-effecting operator actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleAction {
    // Order
    EditOrderStatus,
    CreateContract,
    CreatePayment,
    CreateDealerOrder,
    // Dealer order
    EditDealerOrderStatus,
    DispatchInventory,
    CreateDelivery,
    Refund,
}

pub const ORDER_ACTIONS: &[LifecycleAction] = &[
    LifecycleAction::EditOrderStatus,
    LifecycleAction::CreateContract,
    LifecycleAction::CreatePayment,
    LifecycleAction::CreateDealerOrder,
];

pub const DEALER_ORDER_ACTIONS: &[LifecycleAction] = &[
    LifecycleAction::EditDealerOrderStatus,
    LifecycleAction::DispatchInventory,
    LifecycleAction::CreateDelivery,
    LifecycleAction::Refund,
];

impl LifecycleAction {
    pub fn role_guard(&self) -> RoleGuard {
        match self {
            Self::EditOrderStatus
            | Self::CreateContract
            | Self::CreatePayment
            | Self::CreateDealerOrder => RoleGuard::Any,
            Self::EditDealerOrderStatus | Self::DispatchInventory => RoleGuard::EvmStaffOnly,
            Self::CreateDelivery | Self::Refund => RoleGuard::NonEvmStaff,
        }
    }
}

/// One row of a transition table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<S: 'static> {
    pub from: S,
    pub to: S,
    pub guard: RoleGuard,
    /// Actions that become available once `to` is reached
    pub unlocks: &'static [LifecycleAction],
}

pub static ORDER_TRANSITIONS: &[Transition<OrderStatus>] = &[
    Transition {
        from: OrderStatus::Pending,
        to: OrderStatus::Approved,
        guard: RoleGuard::Any,
        unlocks: &[
            LifecycleAction::CreateContract,
            LifecycleAction::CreatePayment,
            LifecycleAction::CreateDealerOrder,
        ],
    },
    Transition {
        from: OrderStatus::Pending,
        to: OrderStatus::Cancelled,
        guard: RoleGuard::Any,
        unlocks: &[],
    },
    Transition {
        from: OrderStatus::Approved,
        to: OrderStatus::Cancelled,
        guard: RoleGuard::Any,
        unlocks: &[],
    },
    Transition {
        from: OrderStatus::Approved,
        to: OrderStatus::Completed,
        guard: RoleGuard::Any,
        unlocks: &[],
    },
];

pub static DEALER_ORDER_TRANSITIONS: &[Transition<DealerOrderStatus>] = &[
    Transition {
        from: DealerOrderStatus::Pending,
        to: DealerOrderStatus::Confirmed,
        guard: RoleGuard::EvmStaffOnly,
        unlocks: &[LifecycleAction::DispatchInventory],
    },
    Transition {
        from: DealerOrderStatus::Pending,
        to: DealerOrderStatus::Cancelled,
        guard: RoleGuard::EvmStaffOnly,
        unlocks: &[LifecycleAction::Refund],
    },
    Transition {
        from: DealerOrderStatus::Confirmed,
        to: DealerOrderStatus::Cancelled,
        guard: RoleGuard::EvmStaffOnly,
        unlocks: &[LifecycleAction::Refund],
    },
    // Written by the dispatch flow right after stock leaves the manufacturer
    Transition {
        from: DealerOrderStatus::Confirmed,
        to: DealerOrderStatus::VehicleDelivered,
        guard: RoleGuard::EvmStaffOnly,
        unlocks: &[LifecycleAction::CreateDelivery],
    },
    Transition {
        from: DealerOrderStatus::VehicleDelivered,
        to: DealerOrderStatus::Delivered,
        guard: RoleGuard::EvmStaffOnly,
        unlocks: &[LifecycleAction::CreateDelivery],
    },
    Transition {
        from: DealerOrderStatus::VehicleDelivered,
        to: DealerOrderStatus::Completed,
        guard: RoleGuard::EvmStaffOnly,
        unlocks: &[],
    },
    Transition {
        from: DealerOrderStatus::Delivered,
        to: DealerOrderStatus::Completed,
        guard: RoleGuard::EvmStaffOnly,
        unlocks: &[],
    },
];

/// Why an action or transition is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionDenied {
    #[error("Role {role} may not perform {action:?}")]
    Role { action: LifecycleAction, role: String },

    #[error("{action:?} is not available while status is {status}")]
    State { action: LifecycleAction, status: String },

    #[error("Order has already been refunded")]
    AlreadyRefunded,

    #[error("{action:?} does not apply to this record")]
    WrongEntity { action: LifecycleAction },

    #[error("Transition {from} -> {to} is not allowed")]
    Transition { from: String, to: String },

    #[error("Role {role} may not move {from} -> {to}")]
    TransitionRole { from: String, to: String, role: String },
}

/// Check whether an order action is available
pub fn check_order_action(
    action: LifecycleAction,
    status: &OrderStatus,
    role: &Role,
) -> Result<(), ActionDenied> {
    let state_ok = match action {
        LifecycleAction::EditOrderStatus => true,
        LifecycleAction::CreateContract
        | LifecycleAction::CreatePayment
        | LifecycleAction::CreateDealerOrder => *status == OrderStatus::Approved,
        _ => return Err(ActionDenied::WrongEntity { action }),
    };
    if !state_ok {
        return Err(ActionDenied::State {
            action,
            status: status.to_string(),
        });
    }
    if !action.role_guard().admits(role) {
        return Err(ActionDenied::Role {
            action,
            role: role.to_string(),
        });
    }
    Ok(())
}

/// Check whether a dealer order action is available
///
/// `already_refunded` is whether a REFUNDED payment exists for the dealer
/// order's source order.
pub fn check_dealer_order_action(
    action: LifecycleAction,
    status: &DealerOrderStatus,
    role: &Role,
    already_refunded: bool,
) -> Result<(), ActionDenied> {
    let state_ok = match action {
        LifecycleAction::EditDealerOrderStatus => true,
        LifecycleAction::DispatchInventory => *status == DealerOrderStatus::Confirmed,
        LifecycleAction::CreateDelivery => status.is_delivered(),
        LifecycleAction::Refund => *status == DealerOrderStatus::Cancelled,
        _ => return Err(ActionDenied::WrongEntity { action }),
    };
    if !state_ok {
        return Err(ActionDenied::State {
            action,
            status: status.to_string(),
        });
    }
    if !action.role_guard().admits(role) {
        return Err(ActionDenied::Role {
            action,
            role: role.to_string(),
        });
    }
    if action == LifecycleAction::Refund && already_refunded {
        return Err(ActionDenied::AlreadyRefunded);
    }
    Ok(())
}

/// Actions to offer for an order
pub fn order_actions(status: &OrderStatus, role: &Role) -> Vec<LifecycleAction> {
    ORDER_ACTIONS
        .iter()
        .copied()
        .filter(|a| check_order_action(*a, status, role).is_ok())
        .collect()
}

/// Actions to offer for a dealer order
pub fn dealer_order_actions(
    status: &DealerOrderStatus,
    role: &Role,
    already_refunded: bool,
) -> Vec<LifecycleAction> {
    DEALER_ORDER_ACTIONS
        .iter()
        .copied()
        .filter(|a| check_dealer_order_action(*a, status, role, already_refunded).is_ok())
        .collect()
}

/// Look up a transition and verify the role guard. Same-state edits are
/// accepted without a table row.
fn check_transition<S: PartialEq + std::fmt::Display + 'static>(
    table: &'static [Transition<S>],
    from: &S,
    to: &S,
    role: &Role,
) -> Result<Option<&'static Transition<S>>, ActionDenied> {
    if from == to {
        return Ok(None);
    }
    let row = table
        .iter()
        .find(|t| t.from == *from && t.to == *to)
        .ok_or_else(|| ActionDenied::Transition {
            from: from.to_string(),
            to: to.to_string(),
        })?;
    if !row.guard.admits(role) {
        return Err(ActionDenied::TransitionRole {
            from: from.to_string(),
            to: to.to_string(),
            role: role.to_string(),
        });
    }
    Ok(Some(row))
}

pub fn check_order_transition(
    from: &OrderStatus,
    to: &OrderStatus,
    role: &Role,
) -> Result<Option<&'static Transition<OrderStatus>>, ActionDenied> {
    check_transition(ORDER_TRANSITIONS, from, to, role)
}

pub fn check_dealer_order_transition(
    from: &DealerOrderStatus,
    to: &DealerOrderStatus,
    role: &Role,
) -> Result<Option<&'static Transition<DealerOrderStatus>>, ActionDenied> {
    check_transition(DEALER_ORDER_TRANSITIONS, from, to, role)
}
