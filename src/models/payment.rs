//! Payment order model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::errors::{AbhivyaktiError, Result};

/// What a payment order is being created for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderItem {
    Pass(i64),
    Accommodation(i64),
}

impl OrderItem {
    /// Convert to the create-order wire payload
    pub fn to_request(self) -> CreateOrderRequest {
        match self {
            OrderItem::Pass(id) => CreateOrderRequest {
                pass_type_id: Some(id),
                accommodation_type_id: None,
            },
            OrderItem::Accommodation(id) => CreateOrderRequest {
                pass_type_id: None,
                accommodation_type_id: Some(id),
            },
        }
    }
}

/// Payload for `/api/payment/create-order`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_type_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accommodation_type_id: Option<i64>,
}

impl CreateOrderRequest {
    /// At least one of the two item ids must be present
    pub fn validate(&self) -> Result<()> {
        if self.pass_type_id.is_none() && self.accommodation_type_id.is_none() {
            return Err(AbhivyaktiError::InvalidInput(
                "At least one of passTypeId or accommodationTypeId must be provided".to_string(),
            ));
        }
        Ok(())
    }
}

/// A created payment order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub pass_type_id: Option<i64>,
    #[serde(default)]
    pub accommodation_type_id: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Envelope returned by the create-order endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderResponse {
    #[serde(default)]
    pub success: bool,
    pub order: PaymentOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_item_serializes_one_id() {
        let body = serde_json::to_value(OrderItem::Pass(2).to_request()).unwrap();
        assert_eq!(body, serde_json::json!({ "passTypeId": 2 }));

        let body = serde_json::to_value(OrderItem::Accommodation(3).to_request()).unwrap();
        assert_eq!(body, serde_json::json!({ "accommodationTypeId": 3 }));
    }

    #[test]
    fn test_empty_request_rejected() {
        let request = CreateOrderRequest {
            pass_type_id: None,
            accommodation_type_id: None,
        };
        assert!(request.validate().is_err());
    }
}
