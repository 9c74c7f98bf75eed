//! Unified error system for the dealer management client
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`DispatchFailure`]: Classification of inventory dispatch failures
//! - [`extract_error_message`]: Message extraction from failed HTTP responses
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Contract errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Inventory errors
//! - 7xxx: Delivery errors
//! - 8xxx: Report errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::OrderNotApproved);
//! let err = AppError::validation("Màu xe không được để trống")
//!     .with_detail("field", "color");
//! ```

mod category;
mod codes;
mod dispatch;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use dispatch::DispatchFailure;
pub use types::{AppError, AppResult};

use ::http::StatusCode;

/// Extract the most useful message from a failed response body
///
/// Tries the JSON fields `message`, `error` and `title` in that order, then the
/// raw body text, then the status line (e.g. `404 Not Found`).
pub fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error", "title"] {
            if let Some(text) = map.get(key).and_then(|v| v.as_str())
                && !text.trim().is_empty()
            {
                return text.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

/// Whether a backend message reports a foreign key violation
pub fn is_foreign_key_violation(message: &str) -> bool {
    message.to_uppercase().contains("FOREIGN KEY")
}
