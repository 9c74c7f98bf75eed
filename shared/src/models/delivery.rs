//! Delivery Model

use super::Resource;
use crate::lifecycle::DeliveryStatus;
use crate::util::lenient_i64;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Handover of a vehicle to the customer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Delivery {
    #[serde(deserialize_with = "lenient_i64")]
    pub delivery_id: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub user_id: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub order_id: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub vehicle_id: i64,
    pub color: Option<String>,
    pub delivery_date: Option<String>,
    pub delivery_status: DeliveryStatus,
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Delivery {
    const PATH: &'static str = "/api/Delivery";
    const NAME: &'static str = "delivery";

    fn id(&self) -> i64 {
        self.delivery_id
    }

    fn set_id(&mut self, id: i64) {
        self.delivery_id = id;
    }
}
