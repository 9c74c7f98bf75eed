//! DMS Client - admin client for the dealer management backend
//!
//! Typed access to the REST API plus the order lifecycle orchestrator that
//! sequences approval, contract, payment, dealer order, dispatch, delivery
//! and refund calls.

pub mod board;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod orchestrator;
pub mod services;
pub mod session;

pub use board::DealerOrderBoard;
pub use client::DmsClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{FilePart, HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http::OneshotHttpClient;
pub use logger::init_logger;
pub use orchestrator::{
    DispatchOutcome, LifecycleOrchestrator, RefundOutcome, WorkflowError, WorkflowResult,
};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};

// Re-export shared types for convenience
pub use shared::lifecycle::{
    DealerOrderStatus, DealerPaymentStatus, DeliveryStatus, LifecycleAction, OrderStatus,
    PaymentMethod, PaymentStatus, Role,
};
pub use shared::models;
