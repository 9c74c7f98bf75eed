//! Shared types for the dealer management client
//!
//! Backend record models, lifecycle status enums and transition tables,
//! response normalization, error codes, and the display and totals helpers
//! used by every surface.

pub mod error;
pub mod filter;
pub mod format;
pub mod lifecycle;
pub mod models;
pub mod money;
pub mod response;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, DispatchFailure, ErrorCategory, ErrorCode};
pub use filter::{Searchable, filter_by_search};
pub use lifecycle::{DealerOrderStatus, LifecycleAction, OrderStatus, Role};
pub use response::{ApiEnvelope, ParseError, normalize_item, normalize_list};
