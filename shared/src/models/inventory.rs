//! Inventory dispatch request

use super::DealerOrder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DISPATCH_PATH: &str = "/api/Inventory/dispatch";

/// Body of `POST /api/Inventory/dispatch`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchRequest {
    pub vehicle_id: i64,
    pub dealer_id: i64,
    pub quantity: i64,
    pub color: String,
}

/// Rejected before any request is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchInvalid {
    #[error("Mã xe không hợp lệ")]
    Vehicle,
    #[error("Số lượng xe không hợp lệ")]
    Quantity,
    #[error("Mã đại lý không hợp lệ")]
    Dealer,
    #[error("Màu xe không được để trống")]
    Color,
}

impl DispatchRequest {
    /// Checked in field order: vehicle, quantity, dealer, color
    pub fn validate(&self) -> Result<(), DispatchInvalid> {
        if self.vehicle_id <= 0 {
            return Err(DispatchInvalid::Vehicle);
        }
        if self.quantity <= 0 {
            return Err(DispatchInvalid::Quantity);
        }
        if self.dealer_id <= 0 {
            return Err(DispatchInvalid::Dealer);
        }
        if self.color.trim().is_empty() {
            return Err(DispatchInvalid::Color);
        }
        Ok(())
    }
}

impl From<&DealerOrder> for DispatchRequest {
    fn from(order: &DealerOrder) -> Self {
        Self {
            vehicle_id: order.vehicle_id,
            dealer_id: order.user_id,
            quantity: order.quantity,
            color: order.color.as_deref().unwrap_or_default().trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> DispatchRequest {
        DispatchRequest {
            vehicle_id: 1,
            dealer_id: 2,
            quantity: 1,
            color: "Trắng".into(),
        }
    }

    #[test]
    fn test_validate() {
        assert!(valid().validate().is_ok());

        let req = DispatchRequest { quantity: 0, ..valid() };
        assert_eq!(req.validate(), Err(DispatchInvalid::Quantity));
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "Số lượng xe không hợp lệ"
        );

        let req = DispatchRequest { color: "  ".into(), ..valid() };
        assert_eq!(
            req.validate().unwrap_err().to_string(),
            "Màu xe không được để trống"
        );

        let req = DispatchRequest { vehicle_id: 0, ..valid() };
        assert_eq!(req.validate(), Err(DispatchInvalid::Vehicle));

        let req = DispatchRequest { dealer_id: -1, ..valid() };
        assert_eq!(req.validate(), Err(DispatchInvalid::Dealer));
    }

    #[test]
    fn test_from_dealer_order() {
        let order = DealerOrder {
            vehicle_id: 9,
            user_id: 4,
            quantity: 2,
            color: Some(" Đen ".into()),
            ..Default::default()
        };
        let req = DispatchRequest::from(&order);
        assert_eq!(req.dealer_id, 4);
        assert_eq!(req.color, "Đen");
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["dealerId"], 4);
        assert_eq!(body["vehicleId"], 9);
    }
}
