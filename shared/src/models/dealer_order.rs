//! Dealer Order Model

use super::Resource;
use crate::lifecycle::{DealerOrderStatus, DealerPaymentStatus};
use crate::util::{lenient_f64, lenient_i64};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stock requisition from a dealership to the manufacturer
///
/// `status` and `payment_status` move independently and may disagree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DealerOrder {
    #[serde(deserialize_with = "lenient_i64")]
    pub dealer_order_id: i64,
    /// Dealer
    #[serde(deserialize_with = "lenient_i64")]
    pub user_id: i64,
    /// Source customer order
    #[serde(deserialize_with = "lenient_i64")]
    pub order_id: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub vehicle_id: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub quantity: i64,
    pub color: Option<String>,
    pub order_date: Option<String>,
    pub status: DealerOrderStatus,
    pub payment_status: DealerPaymentStatus,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_amount: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for DealerOrder {
    const PATH: &'static str = "/api/DealerOrder";
    const NAME: &'static str = "dealer order";

    fn id(&self) -> i64 {
        self.dealer_order_id
    }

    fn set_id(&mut self, id: i64) {
        self.dealer_order_id = id;
    }
}
