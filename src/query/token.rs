//! Request tokens - the atomic units of a Space-Track request path.
//!
//! Tokens serialize either to the human-readable request text
//! (`class/tle/NORAD_CAT_ID/<25544`) or to individual URL path segments,
//! which are percent-encoded one at a time when the URL is assembled.

use chrono::{DateTime, Utc};

/// Timestamp layout used by the predicate language (UTC, millisecond precision).
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Request token - every element that can appear in a request path.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // === Path keywords ===
    BasicSpaceData,
    Query,
    ModelDef,
    Class,
    OrderBy,
    Limit,
    Favorites,
    Format,
    Json,

    // === Operators ===
    /// `<>`
    Ne,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `--` between the bounds of a range
    Range,
    /// `null-val`
    NullVal,
    /// ` desc` suffix on a sort key
    Desc,

    // === Punctuation ===
    /// Path delimiter; splits segments.
    Slash,
    Comma,

    // === Dynamic content ===
    /// Wire field name or class name.
    Ident(String),
    LitInt(i64),
    /// Row counts and offsets.
    LitUInt(u64),
    LitFloat(f64),
    LitString(String),
    LitDateTime(DateTime<Utc>),
    /// Relative-to-now offset in days.
    NowOffset(f64),
}

impl Token {
    /// Serialize this token to request text.
    pub fn serialize(&self) -> String {
        match self {
            Token::BasicSpaceData => "basicspacedata".into(),
            Token::Query => "query".into(),
            Token::ModelDef => "modeldef".into(),
            Token::Class => "class".into(),
            Token::OrderBy => "orderby".into(),
            Token::Limit => "limit".into(),
            Token::Favorites => "favorites".into(),
            Token::Format => "format".into(),
            Token::Json => "json".into(),

            Token::Ne => "<>".into(),
            Token::Lt => "<".into(),
            Token::Gt => ">".into(),
            Token::Range => "--".into(),
            Token::NullVal => "null-val".into(),
            Token::Desc => " desc".into(),

            Token::Slash => "/".into(),
            Token::Comma => ",".into(),

            Token::Ident(name) => name.clone(),
            Token::LitInt(n) => n.to_string(),
            Token::LitUInt(n) => n.to_string(),
            Token::LitFloat(f) => format_float(*f),
            Token::LitString(s) => s.clone(),
            Token::LitDateTime(dt) => dt.format(DATETIME_FORMAT).to_string(),
            // The sign comes from the number itself; only non-negative offsets need a '+'.
            Token::NowOffset(days) => {
                // -0.0 renders as zero
                let days = if *days == 0.0 { 0.0 } else { *days };
                if days < 0.0 {
                    format!("now{}", format_float(days))
                } else {
                    format!("now+{}", format_float(days))
                }
            }
        }
    }
}

/// Format a finite float the way the API expects (`1.0`, `-0.5`).
///
/// Callers guarantee finiteness; values are validated when a predicate is built.
pub(crate) fn format_float(f: f64) -> String {
    let mut buffer = ryu::Buffer::new();
    buffer.format_finite(f).to_string()
}

/// A stream of tokens that can be serialized to a request path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Create an empty token stream.
    pub fn new() -> Self {
        Self { tokens: vec![] }
    }

    /// Push a single token.
    pub fn push(&mut self, token: Token) -> &mut Self {
        self.tokens.push(token);
        self
    }

    /// Extend with multiple tokens.
    pub fn extend(&mut self, tokens: impl IntoIterator<Item = Token>) -> &mut Self {
        self.tokens.extend(tokens);
        self
    }

    /// Append another token stream.
    pub fn append(&mut self, other: &TokenStream) -> &mut Self {
        self.tokens.extend(other.tokens.iter().cloned());
        self
    }

    /// Append another stream as a new path component, inserting a slash if needed.
    pub fn append_segment(&mut self, other: &TokenStream) -> &mut Self {
        if other.is_empty() {
            return self;
        }
        if !self.is_empty() {
            self.slash();
        }
        self.append(other)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Serialize all tokens to request text.
    pub fn serialize(&self) -> String {
        self.tokens.iter().map(Token::serialize).collect()
    }

    /// Serialize to unencoded path segments, splitting on [`Token::Slash`].
    pub fn segments(&self) -> Vec<String> {
        let mut segments = Vec::new();
        let mut current = String::new();
        for token in &self.tokens {
            if *token == Token::Slash {
                segments.push(std::mem::take(&mut current));
            } else {
                current.push_str(&token.serialize());
            }
        }
        if !self.tokens.is_empty() {
            segments.push(current);
        }
        segments
    }

    pub fn slash(&mut self) -> &mut Self {
        self.push(Token::Slash)
    }
    pub fn comma(&mut self) -> &mut Self {
        self.push(Token::Comma)
    }
}
