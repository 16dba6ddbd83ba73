//! Predicate operand values.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Utc};
use regex::Regex;

use super::token::{Token, DATETIME_FORMAT};
use crate::error::{ClientError, ClientResult};

static INT_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?\d+$").unwrap());
static FLOAT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+\.\d+([eE]-?\d+)?$|^-?\d+[eE]-?\d+$").unwrap());
static NOW_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^now([+-]\d+(\.\d+)?([eE]-?\d+)?)$").unwrap());
static DATETIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3}$").unwrap());

/// A signed number of days relative to the moment the server evaluates the request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NowOffset(f64);

impl NowOffset {
    pub fn days(days: f64) -> Self {
        Self(days)
    }

    pub fn as_days(&self) -> f64 {
        self.0
    }
}

/// A single operand of a predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    DateTime(DateTime<Utc>),
    NowOffset(NowOffset),
}

impl Value {
    /// Check that this value can be expressed in the predicate language.
    ///
    /// Strings may not be empty and may not contain the grammar's delimiters
    /// (`/`, `,`, `--`), start with a comparison operator, or spell `null-val`.
    /// Floats and offsets must be finite. Timestamps must fall in the years
    /// 0000-9999, the range `yyyy-MM-dd` can express.
    pub fn validate(&self) -> ClientResult<()> {
        match self {
            Value::Str(s) => validate_text(s),
            Value::Float(f) if !f.is_finite() => Err(ClientError::invalid(format!(
                "float value must be finite, got {f}"
            ))),
            Value::NowOffset(offset) if !offset.0.is_finite() => Err(ClientError::invalid(
                format!("now offset must be finite, got {}", offset.0),
            )),
            Value::DateTime(dt) if !(0..=9999).contains(&dt.year()) => Err(ClientError::invalid(
                format!("timestamp {dt} is outside the years 0000-9999"),
            )),
            _ => Ok(()),
        }
    }

    pub fn to_token(&self) -> Token {
        match self {
            Value::Str(s) => Token::LitString(s.clone()),
            Value::Int(n) => Token::LitInt(*n),
            Value::Float(f) => Token::LitFloat(*f),
            Value::DateTime(dt) => Token::LitDateTime(*dt),
            Value::NowOffset(offset) => Token::NowOffset(offset.0),
        }
    }

    /// Render this value as request text.
    pub fn render(&self) -> String {
        self.to_token().serialize()
    }

    /// Recover a value from its rendered text.
    ///
    /// The most specific reading wins: offset, timestamp, integer, float, string.
    pub fn parse(text: &str) -> Value {
        if let Some(caps) = NOW_PATTERN.captures(text) {
            if let Ok(days) = caps[1].parse::<f64>() {
                return Value::NowOffset(NowOffset(days));
            }
        }
        if DATETIME_PATTERN.is_match(text) {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, DATETIME_FORMAT) {
                return Value::DateTime(Utc.from_utc_datetime(&naive));
            }
        }
        if INT_PATTERN.is_match(text) {
            if let Ok(n) = text.parse::<i64>() {
                return Value::Int(n);
            }
        }
        if FLOAT_PATTERN.is_match(text) {
            if let Ok(f) = text.parse::<f64>() {
                return Value::Float(f);
            }
        }
        Value::Str(text.to_string())
    }
}

fn validate_text(s: &str) -> ClientResult<()> {
    if s.is_empty() {
        return Err(ClientError::invalid("string value must not be empty"));
    }
    if s.contains('/') || s.contains(',') || s.contains("--") {
        return Err(ClientError::invalid(format!(
            "string value {s:?} contains a reserved delimiter ('/', ',' or '--')"
        )));
    }
    if s.starts_with('<') || s.starts_with('>') {
        return Err(ClientError::invalid(format!(
            "string value {s:?} starts with a comparison operator"
        )));
    }
    if s == "null-val" {
        return Err(ClientError::invalid(
            "use is_null/is_not_null instead of the literal null-val",
        ));
    }
    Ok(())
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt)
    }
}

impl From<NowOffset> for Value {
    fn from(offset: NowOffset) -> Self {
        Value::NowOffset(offset)
    }
}
