//! Dispatch failure classification
//!
//! The inventory backend reports failures as free text only. Until it grows a
//! structured code, failures are classified by case-insensitive substring
//! match. The keyword table must stay exactly as below, and no further
//! categories are inferred.

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

const STOCK_KEYWORDS: &[&str] = &["stock", "tồn kho", "hết hàng", "insufficient", "quantity"];
const VEHICLE_KEYWORDS: &[&str] = &["vehicle", "xe"];
const DEALER_KEYWORDS: &[&str] = &["dealer", "đại lý"];

/// Classified dispatch failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DispatchFailure {
    /// Manufacturer stock is insufficient
    OutOfStock,
    /// Vehicle does not exist or is not dispatchable
    Vehicle,
    /// Dealer does not exist or cannot receive stock
    Dealer,
    /// Anything else
    Generic,
}

impl DispatchFailure {
    /// Classify a backend error message. Categories are checked in table order.
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();
        let hit = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

        if hit(STOCK_KEYWORDS) {
            Self::OutOfStock
        } else if hit(VEHICLE_KEYWORDS) {
            Self::Vehicle
        } else if hit(DEALER_KEYWORDS) {
            Self::Dealer
        } else {
            Self::Generic
        }
    }

    /// Operator-facing message prefix
    pub fn headline(&self) -> &'static str {
        match self {
            Self::OutOfStock => "Không đủ xe trong kho để xuất",
            Self::Vehicle => "Lỗi thông tin xe",
            Self::Dealer => "Lỗi thông tin đại lý",
            Self::Generic => "Xuất kho thất bại",
        }
    }

    /// Full operator-facing message including the backend text
    pub fn user_message(&self, backend_message: &str) -> String {
        if backend_message.trim().is_empty() {
            self.headline().to_string()
        } else {
            format!("{}: {}", self.headline(), backend_message)
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::OutOfStock => ErrorCode::OutOfStock,
            Self::Vehicle => ErrorCode::VehicleInvalid,
            Self::Dealer => ErrorCode::DealerInvalid,
            Self::Generic => ErrorCode::DispatchFailed,
        }
    }
}
