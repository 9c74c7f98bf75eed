//! Unified error codes for the dealer management client
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order / dealer order errors
//! - 5xxx: Payment errors
//! - 6xxx: Inventory errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they serialize compactly
/// and can be shared with any front end that renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Referenced by another record (FOREIGN KEY)
    ReferencedRecord = 4,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,

    // ==================== 4xxx: Order ====================
    /// Order is not approved
    OrderNotApproved = 4001,
    /// Status transition is not allowed
    InvalidStatusTransition = 4002,

    // ==================== 5xxx: Payment ====================
    /// No payment for the order
    PaymentNotFound = 5001,
    /// Payment has already been refunded
    PaymentAlreadyRefunded = 5002,
    /// Refund was rolled back after a partial failure
    RefundRolledBack = 5003,
    /// Refund left payment and dealer order out of sync
    RefundInconsistent = 5004,

    // ==================== 6xxx: Inventory ====================
    /// Not enough vehicles in manufacturer stock
    OutOfStock = 6001,
    /// Vehicle is invalid or unknown
    VehicleInvalid = 6002,
    /// Dealer is invalid or unknown
    DealerInvalid = 6003,
    /// Dispatch failed for another reason
    DispatchFailed = 6004,
    /// Dispatch applied but dealer order status was not updated
    DispatchStatusStale = 6005,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network error
    NetworkError = 9002,
    /// Request timed out
    TimeoutError = 9003,
    /// Configuration error
    ConfigError = 9004,
    /// Response body has an unexpected shape
    InvalidResponse = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::ReferencedRecord => "Record is referenced by other records",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "Specific role is required",

            // Order
            ErrorCode::OrderNotApproved => "Order is not approved",
            ErrorCode::InvalidStatusTransition => "Status transition is not allowed",

            // Payment
            ErrorCode::PaymentNotFound => "No payment found for order",
            ErrorCode::PaymentAlreadyRefunded => "Payment has already been refunded",
            ErrorCode::RefundRolledBack => "Refund was rolled back",
            ErrorCode::RefundInconsistent => "Refund left records out of sync",

            // Inventory
            ErrorCode::OutOfStock => "Not enough vehicles in stock",
            ErrorCode::VehicleInvalid => "Vehicle is invalid",
            ErrorCode::DealerInvalid => "Dealer is invalid",
            ErrorCode::DispatchFailed => "Dispatch failed",
            ErrorCode::DispatchStatusStale => "Dispatch applied but status not updated",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Request timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::InvalidResponse => "Unexpected response format",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::ReferencedRecord),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),

            // Order
            4001 => Ok(ErrorCode::OrderNotApproved),
            4002 => Ok(ErrorCode::InvalidStatusTransition),

            // Payment
            5001 => Ok(ErrorCode::PaymentNotFound),
            5002 => Ok(ErrorCode::PaymentAlreadyRefunded),
            5003 => Ok(ErrorCode::RefundRolledBack),
            5004 => Ok(ErrorCode::RefundInconsistent),

            // Inventory
            6001 => Ok(ErrorCode::OutOfStock),
            6002 => Ok(ErrorCode::VehicleInvalid),
            6003 => Ok(ErrorCode::DealerInvalid),
            6004 => Ok(ErrorCode::DispatchFailed),
            6005 => Ok(ErrorCode::DispatchStatusStale),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::NetworkError),
            9003 => Ok(ErrorCode::TimeoutError),
            9004 => Ok(ErrorCode::ConfigError),
            9005 => Ok(ErrorCode::InvalidResponse),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ReferencedRecord.code(), 4);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::PermissionDenied.code(), 2001);
        assert_eq!(ErrorCode::OrderNotApproved.code(), 4001);
        assert_eq!(ErrorCode::PaymentAlreadyRefunded.code(), 5002);
        assert_eq!(ErrorCode::OutOfStock.code(), 6001);
        assert_eq!(ErrorCode::DispatchStatusStale.code(), 6005);
        assert_eq!(ErrorCode::InvalidResponse.code(), 9005);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::OutOfStock.is_success());
    }

    #[test]
    fn test_try_from_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::ReferencedRecord,
            ErrorCode::NotAuthenticated,
            ErrorCode::RoleRequired,
            ErrorCode::InvalidStatusTransition,
            ErrorCode::RefundInconsistent,
            ErrorCode::DealerInvalid,
            ErrorCode::ConfigError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(9999), Err(InvalidErrorCode(9999)));
        assert_eq!(ErrorCode::try_from(3001), Err(InvalidErrorCode(3001)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::OutOfStock).unwrap();
        assert_eq!(json, "6001");
        let code: ErrorCode = serde_json::from_str("5002").unwrap();
        assert_eq!(code, ErrorCode::PaymentAlreadyRefunded);
        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_display_and_message() {
        assert_eq!(ErrorCode::OrderNotApproved.to_string(), "4001");
        assert_eq!(ErrorCode::OutOfStock.message(), "Not enough vehicles in stock");
        assert_eq!(InvalidErrorCode(42).to_string(), "invalid error code: 42");
    }
}
