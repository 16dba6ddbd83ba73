//! Field and class capabilities.
//!
//! Every queryable class is described by two types: a closed enum of its
//! fields ([`QueryField`]) and the record shape the API returns for it
//! ([`SpaceTrackClass`]). Both are static tables; nothing is registered at
//! runtime.

use std::fmt::Debug;
use std::hash::Hash;

use serde::de::DeserializeOwned;

/// A field of one Space-Track class that can be filtered or sorted on.
///
/// Implementors are closed enums; each variant maps to exactly one wire name.
pub trait QueryField: Copy + Debug + Eq + Hash + Send + Sync + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// The field name the API uses in requests and JSON responses.
    fn wire_name(&self) -> &'static str;

    /// Look up a variant by its wire name.
    fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.wire_name() == name)
    }
}

/// A record type returned by one Space-Track class.
pub trait SpaceTrackClass: DeserializeOwned + Debug + Send + Sync + 'static {
    /// The field enum used to filter and sort this class.
    type Field: QueryField;

    /// Class name as it appears in the request path (`class/<CLASS>`).
    const CLASS: &'static str;

    /// Wire names of every attribute the record declares, in declaration order.
    const RECORD_FIELDS: &'static [&'static str];
}
