//! Schema conformance for the class tables.
//!
//! Space-Track describes each class through its "modeldef" endpoint. The
//! checks here hold a class's generated tables against that description:
//!
//! - [`check_record_fields`]: every record attribute is a column the server
//!   reports for the class
//! - [`check_query_fields`]: every query field maps to exactly one record
//!   attribute, and wire names are unique
//!
//! The query engine never runs these; they guard the tables at test time and
//! back the CLI's `check` command.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::auth::Session;
use crate::engine::build_url;
use crate::error::{ClientError, ClientResult};
use crate::query::{QueryField, SpaceTrackClass, Token, TokenStream};

/// Column description returned by the modeldef endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDefField {
    #[serde(rename = "Field")]
    pub name: String,
    /// SQL column type, e.g. `int(10) unsigned`.
    #[serde(rename = "Type", default)]
    pub data_type: String,
    /// `YES` or `NO`.
    #[serde(rename = "Null", default)]
    pub nullable: String,
    #[serde(rename = "Key", default)]
    pub key: String,
    #[serde(rename = "Default", default)]
    pub default: Option<String>,
    #[serde(rename = "Extra", default)]
    pub extra: String,
}

impl ModelDefField {
    pub fn is_nullable(&self) -> bool {
        self.nullable.eq_ignore_ascii_case("yes")
    }
}

/// A class description as served by `basicspacedata/modeldef/class/<class>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDef {
    #[serde(default)]
    pub controller: Option<String>,
    pub data: Vec<ModelDefField>,
}

impl ModelDef {
    /// Parse a modeldef response body.
    pub fn from_json(body: &str) -> ClientResult<Self> {
        serde_json::from_str(body).map_err(ClientError::Parse)
    }

    pub fn field(&self, name: &str) -> Option<&ModelDefField> {
        self.data.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.data.iter().map(|f| f.name.as_str())
    }
}

/// A class table that disagrees with the server or with itself.
#[derive(Error, Debug)]
pub enum ConformanceError {
    #[error("{class}: record attributes not reported by the server: {}", .fields.join(", "))]
    UnknownRecordFields {
        class: &'static str,
        fields: Vec<&'static str>,
    },

    #[error("{class}: wire name {wire} is declared more than once")]
    DuplicateWireName {
        class: &'static str,
        wire: &'static str,
    },

    #[error("{class}: query field {wire} matches {matches} record attributes, expected exactly one")]
    UnmappedQueryField {
        class: &'static str,
        wire: &'static str,
        matches: usize,
    },

    #[error("failed to fetch modeldef: {0}")]
    Fetch(#[from] ClientError),
}

/// Check that every attribute of `C` is a column of `model`.
pub fn check_record_fields<C: SpaceTrackClass>(model: &ModelDef) -> Result<(), ConformanceError> {
    let unknown: Vec<&'static str> = C::RECORD_FIELDS
        .iter()
        .copied()
        .filter(|name| !model.contains(name))
        .collect();

    if unknown.is_empty() {
        debug!(class = C::CLASS, fields = C::RECORD_FIELDS.len(), "record fields conform");
        return Ok(());
    }

    warn!(class = C::CLASS, unknown = ?unknown, "record fields missing from modeldef");
    Err(ConformanceError::UnknownRecordFields {
        class: C::CLASS,
        fields: unknown,
    })
}

/// Check that the field enum of `C` maps one-to-one onto record attributes.
pub fn check_query_fields<C: SpaceTrackClass>() -> Result<(), ConformanceError> {
    for (i, wire) in C::RECORD_FIELDS.iter().copied().enumerate() {
        if C::RECORD_FIELDS[..i].contains(&wire) {
            return Err(ConformanceError::DuplicateWireName {
                class: C::CLASS,
                wire,
            });
        }
    }

    let fields = <C::Field as QueryField>::ALL;
    for (i, field) in fields.iter().enumerate() {
        let wire = field.wire_name();
        if fields[..i].iter().any(|f| f.wire_name() == wire) {
            return Err(ConformanceError::DuplicateWireName {
                class: C::CLASS,
                wire,
            });
        }

        let matches = C::RECORD_FIELDS.iter().filter(|r| **r == wire).count();
        if matches != 1 {
            warn!(class = C::CLASS, wire, matches, "query field not mapped");
            return Err(ConformanceError::UnmappedQueryField {
                class: C::CLASS,
                wire,
                matches,
            });
        }
    }
    Ok(())
}

/// Path of the modeldef request for `class`.
pub fn modeldef_tokens(class: &str) -> TokenStream {
    let mut ts = TokenStream::new();
    ts.push(Token::BasicSpaceData)
        .slash()
        .push(Token::ModelDef)
        .slash()
        .push(Token::Class)
        .slash()
        .push(Token::Ident(class.to_string()))
        .slash()
        .push(Token::Format)
        .slash()
        .push(Token::Json);
    ts
}

/// Fetch the live description of `class`.
pub async fn fetch_modeldef(session: &dyn Session, class: &str) -> ClientResult<ModelDef> {
    if class.is_empty() || class.contains('/') {
        return Err(ClientError::invalid(format!("invalid class name {class:?}")));
    }
    let url = build_url(session.base_url(), &modeldef_tokens(class))?;
    debug!(class, "fetching modeldef");

    let response = session.get(url).await?;
    if !response.is_success() {
        return Err(ClientError::Http {
            status: response.status,
            body: response.body,
        });
    }
    ModelDef::from_json(&response.body)
}

/// Run both checks for `C` against the live server.
pub async fn check_class<C: SpaceTrackClass>(session: &dyn Session) -> Result<(), ConformanceError> {
    check_query_fields::<C>()?;
    let model = fetch_modeldef(session, C::CLASS).await?;
    check_record_fields::<C>(&model)
}
