//! Wire value types embedded by the order and transaction records.

use std::{
    fmt::{self, Display},
    iter::Sum,
    ops::Add,
};

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, PrimitiveDateTime};

/// Identifier assigned by the merchant or the gateway.
///
/// The API emits identifiers as JSON strings in some responses and as bare
/// numbers in others; both deserialize into the same value. Serialization
/// always produces a string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct OrderId(String);

impl OrderId {
    /// Creates an identifier from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrows the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::String(s) => Ok(Self(s)),
            serde_json::Value::Number(n) => Ok(Self(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "expected a string or number identifier, got {other}"
            ))),
        }
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Timestamp in the `YYYY-MM-DDTHH:MM:SS` layout used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(#[serde(with = "crate::custom_serde::date_time_no_tz")] PrimitiveDateTime);

impl Timestamp {
    /// The current date and time in UTC.
    pub fn now() -> Self {
        let utc_date_time = OffsetDateTime::now_utc();
        Self(PrimitiveDateTime::new(
            utc_date_time.date(),
            utc_date_time.time(),
        ))
    }

    /// Returns the wrapped date and time.
    pub fn into_inner(self) -> PrimitiveDateTime {
        self.0
    }
}

impl From<PrimitiveDateTime> for Timestamp {
    fn from(date_time: PrimitiveDateTime) -> Self {
        Self(date_time)
    }
}

/// Amount in the minor denomination of its currency
#[derive(
    Default, Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct MinorUnit(i64);

impl MinorUnit {
    /// forms a new minor unit from amount
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// forms a new minor default unit i.e zero
    pub fn zero() -> Self {
        Self(0)
    }

    /// gets amount as i64 value
    pub fn get_amount_as_i64(self) -> i64 {
        self.0
    }
}

impl Display for MinorUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for MinorUnit {
    type Output = Self;
    fn add(self, a2: Self) -> Self {
        Self(self.0 + a2.0)
    }
}

impl Sum for MinorUnit {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self(0), |a, b| a + b)
    }
}

/// Amount in the major denomination of its currency, as the API reports
/// transaction costs
#[derive(Default, Debug, Deserialize, Serialize, Clone, Copy, PartialEq, PartialOrd)]
pub struct FloatMajorUnit(f64);

impl FloatMajorUnit {
    /// forms a new major unit from amount
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// gets amount as f64 value
    pub fn get_amount_as_f64(self) -> f64 {
        self.0
    }
}
