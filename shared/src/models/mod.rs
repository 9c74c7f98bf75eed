//! Data models
//!
//! Mirrors of the dealership backend's records. Wire names are camelCase.
//! Missing fields fall back to defaults and numeric fields accept numbers,
//! numeric strings or null, because the backend schema is not under our
//! control. Mutable records keep unknown fields in `extra` so a full-record
//! PUT writes them back untouched.
//!
//! All IDs are `i64`; `0` is the placeholder id sent on create.

pub mod contract;
pub mod dealer_order;
pub mod delivery;
pub mod identity;
pub mod inventory;
pub mod order;
pub mod payment;
pub mod report;

// Re-exports
pub use contract::*;
pub use dealer_order::*;
pub use delivery::*;
pub use identity::*;
pub use inventory::*;
pub use order::*;
pub use payment::*;
pub use report::*;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record exposed through the standard CRUD endpoints
/// (`GET/POST {PATH}`, `GET/PUT/DELETE {PATH}/{id}`)
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection path, e.g. `/api/Order`
    const PATH: &'static str;
    /// Human-readable name used in logs and errors
    const NAME: &'static str;

    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);

    /// Path of this record
    fn item_path(id: i64) -> String {
        format!("{}/{}", Self::PATH, id)
    }
}
