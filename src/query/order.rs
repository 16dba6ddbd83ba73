//! ORDER BY and LIMIT encoding.

use super::field::QueryField;
use super::token::{Token, TokenStream};
use crate::error::{ClientError, ClientResult};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

/// One sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "sorts have no effect until added to a query"]
pub struct Sort<F: QueryField> {
    pub field: F,
    pub dir: SortDir,
}

impl<F: QueryField> Sort<F> {
    pub fn new(field: F, dir: SortDir) -> Self {
        Self { field, dir }
    }

    pub fn asc(field: F) -> Self {
        Self::new(field, SortDir::Asc)
    }

    pub fn desc(field: F) -> Self {
        Self::new(field, SortDir::Desc)
    }

    /// Ascending keys render as the bare wire name, descending ones get ` desc`.
    pub fn to_tokens(&self) -> TokenStream {
        let mut ts = TokenStream::new();
        ts.push(Token::Ident(self.field.wire_name().to_string()));
        if self.dir == SortDir::Desc {
            ts.push(Token::Desc);
        }
        ts
    }
}

/// Render `orderby/<key>,<key>...`, or nothing for an empty list.
///
/// The first key is the primary sort; later keys break ties.
pub fn order_by_tokens<F: QueryField>(sorts: &[Sort<F>]) -> TokenStream {
    let mut ts = TokenStream::new();
    if sorts.is_empty() {
        return ts;
    }

    ts.push(Token::OrderBy).slash();
    for (i, sort) in sorts.iter().enumerate() {
        if i > 0 {
            ts.comma();
        }
        ts.append(&sort.to_tokens());
    }
    ts
}

/// Row window: at most `max_rows` rows, optionally skipping `offset` rows first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Limit {
    max_rows: u64,
    offset: Option<u64>,
}

impl Limit {
    /// Limit to `max_rows` rows. Zero is rejected.
    pub fn rows(max_rows: u64) -> ClientResult<Self> {
        if max_rows == 0 {
            return Err(ClientError::invalid("limit must allow at least one row"));
        }
        Ok(Self {
            max_rows,
            offset: None,
        })
    }

    /// Limit to `max_rows` rows starting after `offset` rows.
    pub fn with_offset(max_rows: u64, offset: u64) -> ClientResult<Self> {
        let limit = Self::rows(max_rows)?;
        Ok(Self {
            offset: Some(offset),
            ..limit
        })
    }

    pub fn max_rows(&self) -> u64 {
        self.max_rows
    }

    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    /// The window immediately following this one, for manual paging.
    pub fn next_page(&self) -> Self {
        Self {
            max_rows: self.max_rows,
            offset: Some(self.offset.unwrap_or(0).saturating_add(self.max_rows)),
        }
    }

    /// Render `limit/<max_rows>` or `limit/<max_rows>,<offset>`.
    pub fn to_tokens(&self) -> TokenStream {
        let mut ts = TokenStream::new();
        ts.push(Token::Limit)
            .slash()
            .push(Token::LitUInt(self.max_rows));
        if let Some(offset) = self.offset {
            ts.comma().push(Token::LitUInt(offset));
        }
        ts
    }
}
