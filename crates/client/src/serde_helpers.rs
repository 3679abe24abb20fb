//! Serde helpers for actinia's loosely typed JSON fields.
//!
//! Responsibilities:
//! - Parse the server's `YYYY-MM-DD HH:MM:SS.ffffff` timestamps.
//! - Accept numbers-or-strings where the server is inconsistent.
//! - Keep parsing behavior centralized so model definitions stay readable.
//!
//! Invariants:
//! - Helpers never log values; errors are generic parse errors.

use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::de::Error as _;

/// Wire format of the process-response timestamp fields.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

pub fn naive_datetime_from_str<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT).map_err(D::Error::custom)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
    Bool(bool),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            Self::String(s) => s,
            Self::U64(v) => v.to_string(),
            Self::I64(v) => v.to_string(),
            Self::F64(v) => v.to_string(),
            Self::Bool(v) => v.to_string(),
        }
    }
}

/// Accept a string, number or bool and normalize it to a string.
pub fn opt_string_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(value.map(StringOrNumber::into_string))
}

/// Default for `optional` flags the server omits.
pub fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_naive_datetime_from_str_parses_microseconds() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "naive_datetime_from_str")]
            value: NaiveDateTime,
        }

        let parsed: Wrapper =
            serde_json::from_str(r#"{ "value": "2022-09-07 17:01:08.384401" }"#).unwrap();
        assert_eq!(
            parsed.value.date(),
            NaiveDate::from_ymd_opt(2022, 9, 7).unwrap()
        );
        assert_eq!(parsed.value.time().nanosecond(), 384_401_000);
    }

    #[test]
    fn test_naive_datetime_from_str_rejects_garbage() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "naive_datetime_from_str")]
            #[allow(dead_code)]
            value: NaiveDateTime,
        }

        assert!(serde_json::from_str::<Wrapper>(r#"{ "value": "yesterday" }"#).is_err());
    }

    #[test]
    fn test_opt_string_from_any_accepts_number_and_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default, deserialize_with = "opt_string_from_any")]
            value: Option<String>,
        }

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": 29535 }"#).unwrap();
        assert_eq!(parsed.value.as_deref(), Some("29535"));

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": "DCELL" }"#).unwrap();
        assert_eq!(parsed.value.as_deref(), Some("DCELL"));

        let parsed: Wrapper = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(parsed.value, None);
    }
}
