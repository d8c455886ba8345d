//! Request payloads for `POST /orders`.

use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};

use crate::{
    pii::{self, Email},
    types::{MinorUnit, OrderId},
};

/// Gateway identifiers accepted in [`Order::gateway`].
pub mod gateway {
    pub const AMEX: &str = "AMEX";
    pub const CREDITCARD: &str = "CREDITCARD";
    pub const DINER: &str = "DINER";
    pub const DISCOVER: &str = "DISCOVER";
    pub const IDEAL: &str = "IDEAL";
    pub const MAESTRO: &str = "MAESTRO";
    pub const MASTERCARD: &str = "MASTERCARD";
    pub const PAYPAL: &str = "PAYPAL";
    pub const VISA: &str = "VISA";
}

/// Webhook and redirect behaviour for an order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_window: Option<String>,
}

/// Billing and shopper identity attached to an order.
///
/// Identity fields are wrapped in masking types so they render redacted in
/// logs; on the wire they are plain strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<Secret<String, pii::IpAddress>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Controls the recovery email sent for abandoned orders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondChance {
    pub send_email: bool,
}

/// Order creation request.
///
/// Every field is sparse-encoded except `second_chance`, which the wire
/// contract keeps on every payload regardless of value. Omitting it has not
/// been verified against the live API, so the asymmetry is preserved.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<MinorUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_options: Option<PaymentOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub second_chance: SecondChance,
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn minimal_order_is_sparse_except_second_chance() {
        let order = Order {
            order_type: Some("redirect".to_string()),
            currency: Some("EUR".to_string()),
            amount: Some(MinorUnit::new(1000)),
            gateway: Some(gateway::IDEAL.to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&order).unwrap();
        let object = value.as_object().unwrap();
        let keys: BTreeSet<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            BTreeSet::from(["type", "currency", "amount", "gateway", "second_chance"])
        );
        assert_eq!(
            object["second_chance"],
            serde_json::json!({ "send_email": false })
        );
        assert_eq!(object["type"], "redirect");
        assert_eq!(object["amount"], 1000);
    }

    #[test]
    fn populated_order_round_trips() {
        let order = Order {
            order_type: Some("redirect".to_string()),
            order_id: Some(OrderId::new("my-order-1")),
            gateway: Some(gateway::VISA.to_string()),
            currency: Some("EUR".to_string()),
            amount: Some(MinorUnit::new(2500)),
            description: Some("Test order".to_string()),
            payment_options: Some(PaymentOptions {
                notification_url: Some("https://shop.example/webhook".to_string()),
                redirect_url: Some("https://shop.example/done".to_string()),
                ..Default::default()
            }),
            customer: Some(Customer {
                locale: Some("nl_NL".to_string()),
                ip_address: Some(Secret::new("10.0.0.1".to_string())),
                first_name: Some(Secret::new("Jan".to_string())),
                last_name: Some(Secret::new("Jansen".to_string())),
                email: Some("jan@example.com".parse().unwrap()),
                country: Some("NL".to_string()),
                ..Default::default()
            }),
            second_chance: SecondChance { send_email: true },
        };

        let wire = serde_json::to_string(&order).unwrap();
        let parsed: Order = serde_json::from_str(&wire).unwrap();
        assert_eq!(parsed, order);
    }

    #[test]
    fn empty_customer_serializes_to_empty_object() {
        let value = serde_json::to_value(Customer::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn customer_wire_fields_are_plain_strings() {
        let customer = Customer {
            first_name: Some(Secret::new("Jan".to_string())),
            zip_code: Some(Secret::new("1012 AB".to_string())),
            ..Default::default()
        };
        let value = serde_json::to_value(&customer).unwrap();
        assert_eq!(value["first_name"], "Jan");
        assert_eq!(value["zip_code"], "1012 AB");
    }

    #[test]
    fn order_without_second_chance_key_still_parses() {
        let parsed: Order = serde_json::from_str(r#"{"currency":"EUR"}"#).unwrap();
        assert!(!parsed.second_chance.send_email);
    }
}
