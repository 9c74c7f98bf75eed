//! Read-only aggregate reports

use crate::util::{lenient_f64, lenient_i64};
use serde::{Deserialize, Serialize};

/// Outstanding debt of a dealer or a customer
///
/// Both report endpoints share this shape; the dealer variant names its
/// fields `dealer*`, the customer variant `customer*`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "DebtReportWire")]
pub struct DebtReport {
    pub id: i64,
    pub name: Option<String>,
    pub total_debt: f64,
    pub paid_amount: f64,
    pub remaining_debt: f64,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
}

/// A row may carry several spellings of the same field at once.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct DebtReportWire {
    #[serde(deserialize_with = "lenient_i64")]
    id: i64,
    #[serde(deserialize_with = "lenient_i64")]
    dealer_id: i64,
    #[serde(deserialize_with = "lenient_i64")]
    customer_id: i64,
    dealer_name: Option<String>,
    customer_name: Option<String>,
    full_name: Option<String>,
    name: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    total_debt: f64,
    #[serde(deserialize_with = "lenient_f64")]
    paid_amount: f64,
    #[serde(deserialize_with = "lenient_f64")]
    paid: f64,
    #[serde(deserialize_with = "lenient_f64")]
    remaining_debt: f64,
    #[serde(deserialize_with = "lenient_f64")]
    remaining: f64,
    period_start: Option<String>,
    period_end: Option<String>,
}

fn first_nonzero(values: [f64; 2]) -> f64 {
    values.into_iter().find(|v| *v != 0.0).unwrap_or_default()
}

impl From<DebtReportWire> for DebtReport {
    fn from(w: DebtReportWire) -> Self {
        let id = [w.dealer_id, w.customer_id, w.id]
            .into_iter()
            .find(|id| *id != 0)
            .unwrap_or_default();
        let name = [w.dealer_name, w.customer_name, w.full_name, w.name]
            .into_iter()
            .flatten()
            .find(|n| !n.trim().is_empty());
        Self {
            id,
            name,
            total_debt: w.total_debt,
            paid_amount: first_nonzero([w.paid_amount, w.paid]),
            remaining_debt: first_nonzero([w.remaining_debt, w.remaining]),
            period_start: w.period_start,
            period_end: w.period_end,
        }
    }
}

/// Revenue booked by a dealer over a period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DealerRevenue {
    #[serde(deserialize_with = "lenient_i64")]
    pub dealer_id: i64,
    pub dealer_name: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_revenue: f64,
    #[serde(deserialize_with = "lenient_i64")]
    pub order_count: i64,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
}
