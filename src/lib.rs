//! Data model for the MultiSafepay payments REST API.
//!
//! This crate defines the JSON objects exchanged with `POST /orders`,
//! `GET /orders/{order_id}` and `POST /orders/{order_id}/refunds`, together
//! with the small wire value types they embed. It carries no transport:
//! an HTTP client collaborator serializes [`Order`] for order creation and
//! feeds response bodies through [`parse_api_response`] to split typed
//! payloads from in-band API errors.

pub mod custom_serde;
pub mod errors;
pub mod ext_traits;
pub mod order;
pub mod pii;
pub mod refund;
pub mod response;
pub mod status;
pub mod types;

// Re-export commonly used items
pub use errors::{CustomResult, ParsingError, ValidationError};
pub use order::{Customer, Order, PaymentOptions, SecondChance};
pub use refund::{RefundRequest, RefundResponse, RefundResponseData};
pub use response::{
    parse_api_response, ApiResponse, Cost, ErrorResponse, GetOrderResponse, GetOrderResponseData,
    PostOrderResponse, PostOrderResponseData, RelatedTransaction, Response,
};
pub use status::OrderStatus;
pub use types::{FloatMajorUnit, MinorUnit, OrderId, Timestamp};
