//! # spacetrack
//!
//! A typed query client for the Space-Track.org catalog API.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │          Class tables (tle, omm, satcat, ...)           │
//! │        field enum + record shape per API class          │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [query builder]
//! ┌─────────────────────────────────────────────────────────┐
//! │   Query<C>: predicates, sorts, limit, favorites         │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [token stream]
//! ┌─────────────────────────────────────────────────────────┐
//! │  basicspacedata/query/class/tle/NORAD_CAT_ID/25544/...  │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [engine: login, one GET, decode]
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Vec<C> records                       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use spacetrack::prelude::*;
//! use spacetrack::classes::{Tle, TleField};
//!
//! # async fn run() -> spacetrack::ClientResult<()> {
//! let credentials = Arc::new(PasswordCredentials::new("me@example.com", "secret"));
//! let query = Query::<Tle>::builder()
//!     .credentials(credentials)
//!     .predicate(Predicate::equal(TleField::CatalogNumber, 25544)?)
//!     .sort(Sort::desc(TleField::EpochSeconds))
//!     .limit(Limit::rows(1)?)
//!     .build()?;
//!
//! for tle in query.execute().await? {
//!     println!("{:?} {:?}", tle.tle_line1, tle.tle_line2);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod classes;
pub mod config;
pub mod engine;
pub mod error;
pub mod query;
pub mod schema;
pub mod wire;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::auth::{CredentialProvider, PasswordCredentials, Session};
    pub use crate::error::{ClientError, ClientResult, ErrorKind};
    pub use crate::query::{
        Limit, NowOffset, Operator, Predicate, Query, QueryBuilder, QueryField, Sort, SortDir,
        SpaceTrackClass, Value,
    };
}

pub use error::{ClientError, ClientResult, ErrorKind};
pub use query::{Query, QueryBuilder};
