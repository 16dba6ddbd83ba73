//! Predicates - single filter conditions on one field of one class.
//!
//! A predicate renders as `<WIRE_NAME>/<operator><value>`:
//!
//! ```text
//! NORAD_CAT_ID/25544                     equal
//! NORAD_CAT_ID/<>25544                   not equal
//! EPOCH/<2018-12-14 06:26:28.123         less than
//! EPOCH/>now-1.0                         greater than
//! DECAY/null-val                         is null
//! DECAY/<>null-val                       is not null
//! COUNTRY/US,PRC,CIS                     one of
//! NORAD_CAT_ID/25544--25600              inclusive range
//! ```
//!
//! Every constructor validates its operands and fails with
//! [`ClientError::InvalidArgument`] instead of producing an unrenderable
//! predicate.

use super::field::QueryField;
use super::token::{Token, TokenStream};
use super::value::Value;
use crate::error::{ClientError, ClientResult};

/// Comparison operator of a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    IsNull,
    IsNotNull,
    /// Matches any of the listed values.
    ListEqual,
    /// Inclusive `lo--hi` range.
    Range,
}

impl Operator {
    /// Check whether `count` operands are acceptable for this operator.
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Operator::IsNull | Operator::IsNotNull => count == 0,
            Operator::Equal | Operator::NotEqual | Operator::LessThan | Operator::GreaterThan => {
                count == 1
            }
            Operator::ListEqual => count >= 1,
            Operator::Range => count == 2,
        }
    }

    fn arity_description(&self) -> &'static str {
        match self {
            Operator::IsNull | Operator::IsNotNull => "no values",
            Operator::ListEqual => "at least one value",
            Operator::Range => "exactly two values",
            _ => "exactly one value",
        }
    }
}

/// A validated filter condition on a field of one class.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "predicates have no effect until added to a query"]
pub struct Predicate<F: QueryField> {
    field: F,
    operator: Operator,
    values: Vec<Value>,
}

impl<F: QueryField> Predicate<F> {
    /// Build a predicate from its parts, checking arity and operand validity.
    pub fn new(field: F, operator: Operator, values: Vec<Value>) -> ClientResult<Self> {
        validate(field.wire_name(), operator, &values)?;
        Ok(Self {
            field,
            operator,
            values,
        })
    }

    pub fn equal(field: F, value: impl Into<Value>) -> ClientResult<Self> {
        Self::new(field, Operator::Equal, vec![value.into()])
    }

    pub fn not_equal(field: F, value: impl Into<Value>) -> ClientResult<Self> {
        Self::new(field, Operator::NotEqual, vec![value.into()])
    }

    pub fn less_than(field: F, value: impl Into<Value>) -> ClientResult<Self> {
        Self::new(field, Operator::LessThan, vec![value.into()])
    }

    pub fn greater_than(field: F, value: impl Into<Value>) -> ClientResult<Self> {
        Self::new(field, Operator::GreaterThan, vec![value.into()])
    }

    pub fn is_null(field: F) -> Self {
        Self {
            field,
            operator: Operator::IsNull,
            values: vec![],
        }
    }

    pub fn is_not_null(field: F) -> Self {
        Self {
            field,
            operator: Operator::IsNotNull,
            values: vec![],
        }
    }

    /// Match any of `values`. An empty collection is rejected.
    pub fn one_of<V: Into<Value>>(
        field: F,
        values: impl IntoIterator<Item = V>,
    ) -> ClientResult<Self> {
        let values = values.into_iter().map(Into::into).collect();
        Self::new(field, Operator::ListEqual, values)
    }

    /// Match values between `lo` and `hi`, both inclusive.
    pub fn between(field: F, lo: impl Into<Value>, hi: impl Into<Value>) -> ClientResult<Self> {
        Self::new(field, Operator::Range, vec![lo.into(), hi.into()])
    }

    /// Resolve a parsed predicate against this class's field enum.
    pub fn from_raw(raw: RawPredicate) -> ClientResult<Self> {
        let field = F::from_wire_name(&raw.field).ok_or_else(|| {
            ClientError::invalid(format!("unknown field for this class: {}", raw.field))
        })?;
        Self::new(field, raw.operator, raw.values)
    }

    pub fn field(&self) -> F {
        self.field
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Re-run the construction checks.
    pub fn validate(&self) -> ClientResult<()> {
        validate(self.field.wire_name(), self.operator, &self.values)
    }

    pub fn to_tokens(&self) -> TokenStream {
        render(self.field.wire_name(), self.operator, &self.values)
    }

    /// Render as `<WIRE_NAME>/<operator><value>`.
    pub fn to_query_parameter(&self) -> String {
        self.to_tokens().serialize()
    }
}

/// A predicate whose field is still a bare wire name.
///
/// Produced by [`RawPredicate::parse`]; values are typed by inference, so a
/// string operand that looks like a number comes back as an integer (or a
/// float, timestamp or offset). Only the rendered text is guaranteed to
/// survive the round trip; value equality with the original predicate is not.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPredicate {
    pub field: String,
    pub operator: Operator,
    pub values: Vec<Value>,
}

impl RawPredicate {
    /// Parse `<WIRE_NAME>/<operator><value>` back into its parts.
    ///
    /// A single-element list is indistinguishable from an equality test and
    /// parses as [`Operator::Equal`].
    pub fn parse(text: &str) -> ClientResult<Self> {
        let (field, token) = text.split_once('/').ok_or_else(|| {
            ClientError::invalid(format!("predicate must look like FIELD/VALUE: {text:?}"))
        })?;
        if field.is_empty() || token.is_empty() {
            return Err(ClientError::invalid(format!(
                "predicate must look like FIELD/VALUE: {text:?}"
            )));
        }

        let (operator, values) = if token == "null-val" {
            (Operator::IsNull, vec![])
        } else if token == "<>null-val" {
            (Operator::IsNotNull, vec![])
        } else if let Some(rest) = token.strip_prefix("<>") {
            (Operator::NotEqual, vec![Value::parse(rest)])
        } else if let Some(rest) = token.strip_prefix('<') {
            (Operator::LessThan, vec![Value::parse(rest)])
        } else if let Some(rest) = token.strip_prefix('>') {
            (Operator::GreaterThan, vec![Value::parse(rest)])
        } else if let Some((lo, hi)) = token.split_once("--") {
            (Operator::Range, vec![Value::parse(lo), Value::parse(hi)])
        } else if token.contains(',') {
            let values = token.split(',').map(Value::parse).collect();
            (Operator::ListEqual, values)
        } else {
            (Operator::Equal, vec![Value::parse(token)])
        };

        validate(field, operator, &values)?;
        Ok(Self {
            field: field.to_string(),
            operator,
            values,
        })
    }

    pub fn to_query_parameter(&self) -> String {
        render(&self.field, self.operator, &self.values).serialize()
    }
}

fn validate(wire_name: &str, operator: Operator, values: &[Value]) -> ClientResult<()> {
    if !operator.accepts(values.len()) {
        return Err(ClientError::invalid(format!(
            "{operator:?} on {wire_name} takes {}, got {}",
            operator.arity_description(),
            values.len()
        )));
    }
    for value in values {
        value.validate()?;
    }
    if operator == Operator::Range {
        check_range_bounds(wire_name, values)?;
    }
    Ok(())
}

/// A range renders as `<lo>--<hi>`, so a string bound may not put a `-`
/// against the separator.
fn check_range_bounds(wire_name: &str, values: &[Value]) -> ClientResult<()> {
    if let Some(Value::Str(lo)) = values.first() {
        if lo.ends_with('-') {
            return Err(ClientError::invalid(format!(
                "range on {wire_name}: lower bound {lo:?} may not end with '-'"
            )));
        }
    }
    if let Some(Value::Str(hi)) = values.get(1) {
        if hi.starts_with('-') {
            return Err(ClientError::invalid(format!(
                "range on {wire_name}: upper bound {hi:?} may not start with '-'"
            )));
        }
    }
    Ok(())
}

fn render(wire_name: &str, operator: Operator, values: &[Value]) -> TokenStream {
    let mut ts = TokenStream::new();
    ts.push(Token::Ident(wire_name.to_string())).slash();

    match operator {
        Operator::Equal => {
            ts.push(values[0].to_token());
        }
        Operator::NotEqual => {
            ts.push(Token::Ne).push(values[0].to_token());
        }
        Operator::LessThan => {
            ts.push(Token::Lt).push(values[0].to_token());
        }
        Operator::GreaterThan => {
            ts.push(Token::Gt).push(values[0].to_token());
        }
        Operator::IsNull => {
            ts.push(Token::NullVal);
        }
        Operator::IsNotNull => {
            ts.push(Token::Ne).push(Token::NullVal);
        }
        Operator::ListEqual => {
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    ts.comma();
                }
                ts.push(value.to_token());
            }
        }
        Operator::Range => {
            ts.push(values[0].to_token())
                .push(Token::Range)
                .push(values[1].to_token());
        }
    }

    ts
}
