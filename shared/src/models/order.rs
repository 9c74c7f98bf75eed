//! Customer Order Model

use super::Resource;
use crate::lifecycle::OrderStatus;
use crate::util::{lenient_i64, lenient_opt_f64, lenient_opt_i64};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Customer order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    #[serde(deserialize_with = "lenient_i64")]
    pub order_id: i64,
    #[serde(deserialize_with = "lenient_opt_i64")]
    pub quotation_id: Option<i64>,
    /// Customer
    #[serde(deserialize_with = "lenient_i64")]
    pub user_id: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub vehicle_id: i64,
    pub color: Option<String>,
    pub order_date: Option<String>,
    pub delivery_address: Option<String>,
    pub attachment_image: Option<String>,
    pub attachment_file: Option<String>,
    pub status: OrderStatus,
    pub promotion_code: Option<String>,
    pub promotion_option_name: Option<String>,
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub quotation_price: Option<f64>,
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub final_price: Option<f64>,
    /// Legacy amount field, only read as a fallback
    #[serde(
        deserialize_with = "lenient_opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_amount: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Order {
    /// Amount owed: `finalPrice`, else `totalAmount`, else zero.
    /// Zero counts as absent for both fields.
    pub fn effective_amount(&self) -> f64 {
        [self.final_price, self.total_amount]
            .into_iter()
            .flatten()
            .find(|v| *v != 0.0 && !v.is_nan())
            .unwrap_or(0.0)
    }

    pub fn is_approved(&self) -> bool {
        self.status == OrderStatus::Approved
    }
}

impl Resource for Order {
    const PATH: &'static str = "/api/Order";
    const NAME: &'static str = "order";

    fn id(&self) -> i64 {
        self.order_id
    }

    fn set_id(&mut self, id: i64) {
        self.order_id = id;
    }
}

/// Multipart attachment for `POST /api/Order/{id}/attachments`
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }
}

/// Files attached to an order; either may be omitted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderAttachments {
    /// Sent as the `attachmentImage` part
    pub image: Option<Attachment>,
    /// Sent as the `attachmentFile` part
    pub file: Option<Attachment>,
}

impl OrderAttachments {
    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.file.is_none()
    }
}
