use crate::error::ClientError;
use shared::error::{AppError, DispatchFailure, ErrorCode};
use shared::lifecycle::ActionDenied;
use thiserror::Error;

/// Lifecycle operation errors
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Order {order_id} is not approved")]
    NotApproved { order_id: i64 },

    #[error("Permission denied: {0}")]
    Forbidden(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// Rejected before any request was sent
    #[error("{0}")]
    Validation(String),

    #[error("{message}")]
    Dispatch {
        kind: DispatchFailure,
        message: String,
    },

    #[error("Order {order_id} has already been refunded")]
    AlreadyRefunded { order_id: i64 },

    #[error("No payment found for order {order_id}")]
    PaymentNotFound { order_id: i64 },

    /// Payment was marked refunded, the dealer order update failed, and the
    /// payment was restored
    #[error(
        "Refund of payment {payment_id} rolled back: dealer order {dealer_order_id} could not be updated: {cause}"
    )]
    RefundRolledBack {
        payment_id: i64,
        dealer_order_id: i64,
        #[source]
        cause: ClientError,
    },

    /// Payment is REFUNDED but the dealer order is not, and restoring the
    /// payment failed too; needs manual reconciliation
    #[error(
        "Refund left payment {payment_id} and dealer order {dealer_order_id} inconsistent: {cause}; restoring payment failed: {compensation}"
    )]
    Inconsistent {
        payment_id: i64,
        dealer_order_id: i64,
        cause: ClientError,
        compensation: ClientError,
    },

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl WorkflowError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::NotApproved { .. } => ErrorCode::OrderNotApproved,
            Self::Forbidden(_) => ErrorCode::RoleRequired,
            Self::InvalidTransition(_) => ErrorCode::InvalidStatusTransition,
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::Dispatch { kind, .. } => kind.error_code(),
            Self::AlreadyRefunded { .. } => ErrorCode::PaymentAlreadyRefunded,
            Self::PaymentNotFound { .. } => ErrorCode::PaymentNotFound,
            Self::RefundRolledBack { .. } => ErrorCode::RefundRolledBack,
            Self::Inconsistent { .. } => ErrorCode::RefundInconsistent,
            Self::Client(e) => e.error_code(),
        }
    }
}

impl From<ActionDenied> for WorkflowError {
    fn from(err: ActionDenied) -> Self {
        match err {
            ActionDenied::Role { .. } | ActionDenied::TransitionRole { .. } => {
                Self::Forbidden(err.to_string())
            }
            ActionDenied::State { .. }
            | ActionDenied::WrongEntity { .. }
            | ActionDenied::Transition { .. }
            | ActionDenied::AlreadyRefunded => Self::InvalidTransition(err.to_string()),
        }
    }
}

impl From<WorkflowError> for AppError {
    fn from(err: WorkflowError) -> Self {
        let code = err.error_code();
        match err {
            WorkflowError::NotApproved { order_id }
            | WorkflowError::AlreadyRefunded { order_id }
            | WorkflowError::PaymentNotFound { order_id } => {
                AppError::new(code).with_detail("order_id", order_id)
            }
            WorkflowError::Dispatch { message, .. } | WorkflowError::Validation(message) => {
                AppError::with_message(code, message)
            }
            WorkflowError::RefundRolledBack {
                payment_id,
                dealer_order_id,
                ref cause,
            } => AppError::with_message(code, cause.user_message())
                .with_detail("payment_id", payment_id)
                .with_detail("dealer_order_id", dealer_order_id),
            WorkflowError::Inconsistent {
                payment_id,
                dealer_order_id,
                ..
            } => AppError::new(code)
                .with_detail("payment_id", payment_id)
                .with_detail("dealer_order_id", dealer_order_id),
            WorkflowError::Client(e) => e.into(),
            other => AppError::with_message(code, other.to_string()),
        }
    }
}

/// Result type for lifecycle operations
pub type WorkflowResult<T> = Result<T, WorkflowError>;
