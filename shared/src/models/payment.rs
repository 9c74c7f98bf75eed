//! Payment Model

use super::Resource;
use crate::lifecycle::{PaymentMethod, PaymentStatus};
use crate::util::{lenient_f64, lenient_i64};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payment against a customer order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    #[serde(deserialize_with = "lenient_i64")]
    pub payment_id: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub order_id: i64,
    pub payment_date: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: f64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Payment {
    pub fn is_refunded(&self) -> bool {
        self.status == PaymentStatus::Refunded
    }
}

impl Resource for Payment {
    const PATH: &'static str = "/api/Payment";
    const NAME: &'static str = "payment";

    fn id(&self) -> i64 {
        self.payment_id
    }

    fn set_id(&mut self, id: i64) {
        self.payment_id = id;
    }
}

/// Order ids that have at least one REFUNDED payment
pub fn refunded_order_ids<'a>(
    payments: impl IntoIterator<Item = &'a Payment>,
) -> std::collections::HashSet<i64> {
    payments
        .into_iter()
        .filter(|p| p.is_refunded())
        .map(|p| p.order_id)
        .collect()
}
