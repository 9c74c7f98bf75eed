//! Endpoint wrappers
//!
//! One-to-one with the backend endpoints: no retry, no caching. Every list
//! response goes through [`shared::response::normalize_list`].

mod contract;
mod identity;
mod inventory;
mod report;
mod resource;

pub use contract::SaleContractService;
pub use identity::IdentityService;
pub use inventory::InventoryService;
pub use report::ReportService;
pub use resource::{
    DealerOrderService, DeliveryService, OrderService, PaymentService, ResourceService,
};
