//! Lenient decoding of record attributes.
//!
//! Space-Track serializes almost every attribute as a JSON string, numbers
//! included (`"NORAD_CAT_ID":"25544"`), and leaves unpopulated attributes as
//! `null`, `""` or out of the object entirely. Record fields are therefore all
//! `Option<T>` and decode through [`optional`], which accepts both the string
//! and the native JSON form of each value.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value as Json;

/// Timestamp layouts seen in responses, tried in order.
const DATETIME_LAYOUTS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

const DATE_LAYOUT: &str = "%Y-%m-%d";

/// A type a record attribute can decode into.
pub trait WireValue: Sized {
    /// Decode a non-null JSON value. `Ok(None)` means the attribute is absent.
    fn from_wire(value: &Json) -> Result<Option<Self>, String>;
}

/// Serde adapter: `#[serde(default, deserialize_with = "crate::wire::optional")]`.
pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: WireValue,
{
    match Option::<Json>::deserialize(deserializer)? {
        None | Some(Json::Null) => Ok(None),
        Some(value) => T::from_wire(&value).map_err(serde::de::Error::custom),
    }
}

/// Trimmed string content, or `None` for blank strings.
fn text(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

fn mismatch(value: &Json, expected: &str) -> String {
    format!("expected {expected}, found {value}")
}

impl WireValue for String {
    fn from_wire(value: &Json) -> Result<Option<Self>, String> {
        match value {
            Json::String(s) if s.is_empty() => Ok(None),
            Json::String(s) => Ok(Some(s.clone())),
            Json::Number(n) => Ok(Some(n.to_string())),
            Json::Bool(b) => Ok(Some(b.to_string())),
            other => Err(mismatch(other, "string")),
        }
    }
}

impl WireValue for i64 {
    fn from_wire(value: &Json) -> Result<Option<Self>, String> {
        match value {
            Json::Number(n) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| mismatch(value, "integer")),
            Json::String(s) => match text(s) {
                None => Ok(None),
                Some(s) => s.parse().map(Some).map_err(|_| mismatch(value, "integer")),
            },
            other => Err(mismatch(other, "integer")),
        }
    }
}

impl WireValue for f64 {
    fn from_wire(value: &Json) -> Result<Option<Self>, String> {
        match value {
            Json::Number(n) => n.as_f64().map(Some).ok_or_else(|| mismatch(value, "number")),
            Json::String(s) => match text(s) {
                None => Ok(None),
                Some(s) => s.parse().map(Some).map_err(|_| mismatch(value, "number")),
            },
            other => Err(mismatch(other, "number")),
        }
    }
}

// Narrower integers decode through i64 with a range check.
macro_rules! impl_wire_int {
    ($($ty:ty),+) => {
        $(
            impl WireValue for $ty {
                fn from_wire(value: &Json) -> Result<Option<Self>, String> {
                    match i64::from_wire(value)? {
                        None => Ok(None),
                        Some(i) => <$ty>::try_from(i)
                            .map(Some)
                            .map_err(|_| mismatch(value, stringify!($ty))),
                    }
                }
            }
        )+
    };
}

impl_wire_int!(i32, u32);

impl WireValue for NaiveDate {
    fn from_wire(value: &Json) -> Result<Option<Self>, String> {
        let Json::String(s) = value else {
            return Err(mismatch(value, "date"));
        };
        let Some(s) = text(s) else {
            return Ok(None);
        };
        if let Ok(date) = NaiveDate::parse_from_str(s, DATE_LAYOUT) {
            return Ok(Some(date));
        }
        // Some date columns are served with a midnight time part.
        parse_datetime(s)
            .map(|dt| Some(dt.date_naive()))
            .ok_or_else(|| mismatch(value, "date"))
    }
}

impl WireValue for DateTime<Utc> {
    fn from_wire(value: &Json) -> Result<Option<Self>, String> {
        let Json::String(s) = value else {
            return Err(mismatch(value, "timestamp"));
        };
        match text(s) {
            None => Ok(None),
            Some(s) => parse_datetime(s)
                .map(Some)
                .ok_or_else(|| mismatch(value, "timestamp")),
        }
    }
}

/// Parse a response timestamp as UTC.
///
/// Accepts `yyyy-MM-dd HH:mm:ss[.f]`, the `T`-separated form, RFC 3339 with
/// an explicit offset, and a bare date (midnight).
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    for layout in DATETIME_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, layout) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, DATE_LAYOUT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
