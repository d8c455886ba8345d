//! Custom serde helpers for the API's wire formats.

/// (De)serialize a [`PrimitiveDateTime`][PrimitiveDateTime] in the
/// `YYYY-MM-DDTHH:MM:SS` layout used by the MultiSafepay API. The API sends
/// timestamps without a timezone suffix; they are treated as UTC.
///
/// [PrimitiveDateTime]: ::time::PrimitiveDateTime
pub mod date_time_no_tz {
    use serde::{de, ser::Error as _, Deserialize, Deserializer, Serialize, Serializer};
    use time::{macros::format_description, PrimitiveDateTime};

    /// Serialize a [`PrimitiveDateTime`] without a timezone suffix.
    pub fn serialize<S>(date_time: &PrimitiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
        date_time
            .format(format)
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }

    /// Deserialize a [`PrimitiveDateTime`] from its timezone-less representation.
    pub fn deserialize<'a, D>(deserializer: D) -> Result<PrimitiveDateTime, D::Error>
    where
        D: Deserializer<'a>,
    {
        let time_string = String::deserialize(deserializer)?;
        let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
        PrimitiveDateTime::parse(&time_string, format).map_err(|_| {
            de::Error::custom(format!(
                "Failed to parse PrimitiveDateTime from {time_string}"
            ))
        })
    }
}
