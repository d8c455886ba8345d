//! Request and response payloads for `POST /orders/{order_id}/refunds`.

use serde::{Deserialize, Serialize};

use crate::{
    status::OrderStatus,
    types::{MinorUnit, OrderId},
};

/// Refund creation request. Amounts are in minor units of `currency`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundRequest {
    pub currency: String,
    pub amount: MinorUnit,
}

/// `data` field of [`RefundResponse`].
///
/// The refund endpoint reports identifiers inconsistently (string or
/// number, sometimes absent), and its status values are a subset of the
/// order vocabulary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RefundResponseData {
    #[serde(default)]
    pub transaction_id: Option<OrderId>,
    #[serde(default)]
    pub refund_id: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

/// Response to `POST /orders/{order_id}/refunds`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RefundResponse {
    pub success: bool,
    pub data: RefundResponseData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refund_request_serializes_minor_units() {
        let request = RefundRequest {
            currency: "EUR".to_string(),
            amount: MinorUnit::new(250),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "currency": "EUR", "amount": 250 })
        );
    }

    #[test]
    fn refund_response_accepts_numeric_identifiers() {
        let body = r#"{"success":true,"data":{"transaction_id":4051825,"refund_id":"4051825","status":"completed"}}"#;
        let response: RefundResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.transaction_id, Some(OrderId::new("4051825")));
        assert_eq!(response.data.refund_id, Some(OrderId::new("4051825")));
        assert_eq!(response.data.status, Some(OrderStatus::Completed));
    }

    #[test]
    fn refund_response_tolerates_missing_identifiers() {
        let response: RefundResponse =
            serde_json::from_str(r#"{"success":true,"data":{}}"#).unwrap();
        assert_eq!(response.data.transaction_id, None);
        assert_eq!(response.data.status, None);
    }
}
