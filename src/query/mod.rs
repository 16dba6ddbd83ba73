//! Query construction.
//!
//! This module provides the typed request builder for Space-Track classes:
//!
//! - [`field`] - field and class capabilities
//! - [`value`] - predicate operands
//! - [`predicate`] - filter conditions and their textual grammar
//! - [`order`] - sort keys and row windows
//! - [`builder`] - the immutable [`Query`] and its builder
//! - [`token`] - tokens the request path is assembled from

pub mod builder;
pub mod field;
pub mod order;
pub mod predicate;
pub mod token;
pub mod value;

pub use builder::{Query, QueryBuilder};
pub use field::{QueryField, SpaceTrackClass};
pub use order::{Limit, Sort, SortDir};
pub use predicate::{Operator, Predicate, RawPredicate};
pub use token::{Token, TokenStream};
pub use value::{NowOffset, Value};
