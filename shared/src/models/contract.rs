//! Sale Contract Model

use super::Resource;
use crate::lifecycle::PaymentMethod;
use crate::util::{lenient_i64, lenient_opt_string};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sales contract generated from an approved order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaleContract {
    #[serde(deserialize_with = "lenient_i64")]
    pub sale_contract_id: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub order_id: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub user_id: i64,
    pub contract_date: Option<String>,
    pub terms: Option<String>,
    pub signed_by_dealer: Option<String>,
    pub customer_name: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub payment_method: PaymentMethod,
    /// National ID number
    #[serde(deserialize_with = "lenient_opt_string")]
    pub cccd: Option<String>,
    pub contract_image: Option<String>,
    pub contract_file: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for SaleContract {
    const PATH: &'static str = "/api/SaleContract";
    const NAME: &'static str = "sale contract";

    fn id(&self) -> i64 {
        self.sale_contract_id
    }

    fn set_id(&mut self, id: i64) {
        self.sale_contract_id = id;
    }
}

/// Contract form pre-filled from an approved order and the customer's identity
///
/// Customer name, phone, email and address are display-only; they are not
/// part of [`SaleContractCreate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleContractDraft {
    pub order_id: i64,
    pub user_id: i64,
    pub contract_date: String,
    pub terms: String,
    pub signed_by_dealer: String,
    pub customer_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub payment_method: PaymentMethod,
    pub cccd: String,
    pub contract_image: Option<String>,
    pub contract_file: Option<String>,
}

/// Body of `POST /api/SaleContract`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleContractCreate {
    pub order_id: i64,
    pub user_id: i64,
    pub contract_date: String,
    pub terms: String,
    pub signed_by_dealer: String,
    pub payment_method: PaymentMethod,
    pub cccd: String,
    pub contract_image: Option<String>,
    pub contract_file: Option<String>,
}

impl From<&SaleContractDraft> for SaleContractCreate {
    fn from(draft: &SaleContractDraft) -> Self {
        Self {
            order_id: draft.order_id,
            user_id: draft.user_id,
            contract_date: draft.contract_date.clone(),
            terms: draft.terms.clone(),
            signed_by_dealer: draft.signed_by_dealer.clone(),
            payment_method: draft.payment_method.clone(),
            cccd: draft.cccd.clone(),
            contract_image: draft.contract_image.clone(),
            contract_file: draft.contract_file.clone(),
        }
    }
}
