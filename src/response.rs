//! Response envelopes for the order endpoints.

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    errors::{CustomResult, ParsingError},
    ext_traits::ByteSliceExt,
    order::Customer,
    status::OrderStatus,
    types::{FloatMajorUnit, MinorUnit, OrderId, Timestamp},
};

/// Base envelope shared by every API response.
///
/// A payload without the `success` flag is a protocol violation and fails to
/// parse; it is never coerced into a defaulted envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
}

/// In-band failure reported by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    pub error_code: i32,
    pub error_info: String,
}

/// `data` field of [`PostOrderResponse`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostOrderResponseData {
    pub order_id: OrderId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
}

/// Response to `POST /orders`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostOrderResponse {
    pub success: bool,
    pub data: PostOrderResponseData,
}

/// Fee or charge attached to a transaction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    #[serde(default)]
    pub transaction_id: OrderId,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub cost_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created: Option<Timestamp>,
    #[serde(default)]
    pub amount: FloatMajorUnit,
}

/// Transaction linked to an order, such as a refund.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedTransaction {
    #[serde(default)]
    pub amount: MinorUnit,
    #[serde(default)]
    pub costs: Vec<Cost>,
    #[serde(default)]
    pub created: Option<Timestamp>,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub modified: Option<Timestamp>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub transaction_id: OrderId,
}

/// `data` field of [`GetOrderResponse`].
///
/// Only the identifiers are required; the API omits most of the remaining
/// fields depending on gateway and order state, so they default. The
/// `payment_details` and `payment_methods` shapes vary per payment method
/// and stay untyped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetOrderResponseData {
    pub transaction_id: OrderId,
    pub order_id: OrderId,
    #[serde(default)]
    pub created: Option<Timestamp>,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub amount: MinorUnit,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount_refunded: MinorUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub financial_status: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub reason_code: String,
    #[serde(default)]
    pub fastcheckout: String,
    #[serde(default)]
    pub modified: Option<Timestamp>,
    #[serde(default)]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub payment_details: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub costs: Vec<Cost>,
    #[serde(default)]
    pub related_transactions: Vec<RelatedTransaction>,
    #[serde(default)]
    pub payment_methods: Vec<HashMap<String, serde_json::Value>>,
}

/// Response to `GET /orders/{order_id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetOrderResponse {
    pub success: bool,
    pub data: GetOrderResponseData,
}

/// Outcome of an API call once the envelope `success` flag has been checked.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse<T> {
    Success(T),
    Failure(ErrorResponse),
}

impl<T> ApiResponse<T> {
    /// Converts into a `Result`, surfacing the API-domain error branch.
    pub fn into_result(self) -> Result<T, ErrorResponse> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(error) => Err(error),
        }
    }
}

/// Splits a raw response body into a typed payload or an [`ErrorResponse`],
/// discriminated by the envelope `success` flag.
///
/// Transport-level problems (malformed JSON, missing envelope fields) come
/// back as [`ParsingError`]; API-domain failures come back in-band as
/// [`ApiResponse::Failure`].
pub fn parse_api_response<T>(body: &[u8]) -> CustomResult<ApiResponse<T>, ParsingError>
where
    T: DeserializeOwned,
{
    let envelope: Response = body.parse_struct("Response")?;
    if envelope.success {
        let data = body.parse_struct("ApiResponse")?;
        Ok(ApiResponse::Success(data))
    } else {
        let error: ErrorResponse = body.parse_struct("ErrorResponse")?;
        tracing::debug!(
            error_code = error.error_code,
            error_info = %error.error_info,
            "api call failed"
        );
        Ok(ApiResponse::Failure(error))
    }
}
