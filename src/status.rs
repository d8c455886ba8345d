//! Order status vocabulary.

use serde::{Deserialize, Serialize};

/// Status of an order as reported by `GET /orders/{order_id}`.
///
/// The documented API emits exactly the ten lowercase values below. Anything
/// else maps to [`OrderStatus::Unknown`] so that an undocumented status is
/// carried explicitly instead of failing the whole order parse or leaking
/// through as a bare string.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderStatus {
    Cancelled,
    Completed,
    Declined,
    Expired,
    #[default]
    Initialized,
    Refunded,
    Reserved,
    Shipped,
    Uncleared,
    Void,
    /// Catch-all for values outside the documented vocabulary
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Whether the gateway may still move the order to another status.
    pub fn is_final(self) -> bool {
        matches!(
            self,
            Self::Cancelled | Self::Completed | Self::Declined | Self::Expired | Self::Void
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_lowercase_wire_values() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Completed).unwrap(),
            r#""completed""#
        );
        let parsed: OrderStatus = serde_json::from_str(r#""uncleared""#).unwrap();
        assert_eq!(parsed, OrderStatus::Uncleared);
    }

    #[test]
    fn full_vocabulary_round_trips() {
        let statuses = [
            OrderStatus::Cancelled,
            OrderStatus::Completed,
            OrderStatus::Declined,
            OrderStatus::Expired,
            OrderStatus::Initialized,
            OrderStatus::Refunded,
            OrderStatus::Reserved,
            OrderStatus::Shipped,
            OrderStatus::Uncleared,
            OrderStatus::Void,
        ];
        for status in statuses {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(wire, format!("\"{status}\""));
            let parsed: OrderStatus = serde_json::from_str(&wire).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn undocumented_value_maps_to_unknown() {
        let parsed: OrderStatus = serde_json::from_str(r#""chargeback""#).unwrap();
        assert_eq!(parsed, OrderStatus::Unknown);
    }

    #[test]
    fn default_is_initialized() {
        assert_eq!(OrderStatus::default(), OrderStatus::Initialized);
        assert!(!OrderStatus::Initialized.is_final());
        assert!(OrderStatus::Declined.is_final());
    }
}
