//! Query builder - compose predicates, sorts, limit and favorites for one class.

use std::collections::BTreeSet;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::field::SpaceTrackClass;
use super::order::{order_by_tokens, Limit, Sort};
use super::predicate::Predicate;
use super::token::{Token, TokenStream};
use crate::auth::CredentialProvider;
use crate::error::{ClientError, ClientResult};

/// An immutable, executable query against class `C`.
///
/// Predicates are ANDed. Sorts apply in order, the first being the primary
/// key. A query may be executed any number of times; nothing is cached
/// between executions.
pub struct Query<C: SpaceTrackClass> {
    credentials: Arc<dyn CredentialProvider>,
    predicates: Vec<Predicate<C::Field>>,
    sorts: Vec<Sort<C::Field>>,
    limit: Option<Limit>,
    favorites: BTreeSet<String>,
    _class: PhantomData<fn() -> C>,
}

impl<C: SpaceTrackClass> Query<C> {
    pub fn builder() -> QueryBuilder<C> {
        QueryBuilder::new()
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialProvider> {
        &self.credentials
    }

    pub fn predicates(&self) -> &[Predicate<C::Field>] {
        &self.predicates
    }

    pub fn sorts(&self) -> &[Sort<C::Field>] {
        &self.sorts
    }

    pub fn limit(&self) -> Option<Limit> {
        self.limit
    }

    pub fn favorites(&self) -> &BTreeSet<String> {
        &self.favorites
    }

    /// Copy of this query with a different row window.
    pub fn with_limit(&self, limit: Option<Limit>) -> Self {
        Self {
            limit,
            ..self.clone()
        }
    }

    /// Re-check the invariants the builder enforced.
    pub fn validate(&self) -> ClientResult<()> {
        for predicate in &self.predicates {
            predicate.validate()?;
        }
        for name in &self.favorites {
            validate_favorite(name)?;
        }
        Ok(())
    }

    /// Tokens for the request path below the API root.
    ///
    /// ```text
    /// basicspacedata/query/class/<class>[/<predicate>...][/orderby/..][/limit/..][/favorites/..]/format/json
    /// ```
    pub fn to_tokens(&self) -> TokenStream {
        let mut ts = TokenStream::new();
        ts.push(Token::BasicSpaceData)
            .slash()
            .push(Token::Query)
            .slash()
            .push(Token::Class)
            .slash()
            .push(Token::Ident(C::CLASS.to_string()));

        for predicate in &self.predicates {
            ts.append_segment(&predicate.to_tokens());
        }

        ts.append_segment(&order_by_tokens(&self.sorts));

        if let Some(limit) = &self.limit {
            ts.append_segment(&limit.to_tokens());
        }

        if !self.favorites.is_empty() {
            let mut favorites = TokenStream::new();
            favorites.push(Token::Favorites).slash();
            for (i, name) in self.favorites.iter().enumerate() {
                if i > 0 {
                    favorites.comma();
                }
                favorites.push(Token::LitString(name.clone()));
            }
            ts.append_segment(&favorites);
        }

        ts.slash().push(Token::Format).slash().push(Token::Json);
        ts
    }

    /// The unencoded request path, e.g. `basicspacedata/query/class/tle/NORAD_CAT_ID/25544/format/json`.
    pub fn to_path(&self) -> String {
        self.to_tokens().serialize()
    }
}

impl<C: SpaceTrackClass> Clone for Query<C> {
    fn clone(&self) -> Self {
        Self {
            credentials: Arc::clone(&self.credentials),
            predicates: self.predicates.clone(),
            sorts: self.sorts.clone(),
            limit: self.limit,
            favorites: self.favorites.clone(),
            _class: PhantomData,
        }
    }
}

impl<C: SpaceTrackClass> fmt::Debug for Query<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("class", &C::CLASS)
            .field("predicates", &self.predicates)
            .field("sorts", &self.sorts)
            .field("limit", &self.limit)
            .field("favorites", &self.favorites)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Query`]. Only the credentials are required.
#[must_use = "builders have no effect until built"]
pub struct QueryBuilder<C: SpaceTrackClass> {
    credentials: Option<Arc<dyn CredentialProvider>>,
    predicates: Vec<Predicate<C::Field>>,
    sorts: Vec<Sort<C::Field>>,
    limit: Option<Limit>,
    favorites: Vec<String>,
}

impl<C: SpaceTrackClass> QueryBuilder<C> {
    pub fn new() -> Self {
        Self {
            credentials: None,
            predicates: Vec::new(),
            sorts: Vec::new(),
            limit: None,
            favorites: Vec::new(),
        }
    }

    pub fn credentials(mut self, credentials: Arc<dyn CredentialProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn predicate(mut self, predicate: Predicate<C::Field>) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn predicates(mut self, predicates: impl IntoIterator<Item = Predicate<C::Field>>) -> Self {
        self.predicates.extend(predicates);
        self
    }

    pub fn sort(mut self, sort: Sort<C::Field>) -> Self {
        self.sorts.push(sort);
        self
    }

    pub fn sorts(mut self, sorts: impl IntoIterator<Item = Sort<C::Field>>) -> Self {
        self.sorts.extend(sorts);
        self
    }

    /// Set or clear the row window.
    pub fn limit(mut self, limit: impl Into<Option<Limit>>) -> Self {
        self.limit = limit.into();
        self
    }

    /// Restrict results to a server-side favorites list.
    pub fn favorite(mut self, name: impl Into<String>) -> Self {
        self.favorites.push(name.into());
        self
    }

    pub fn favorites<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.favorites.extend(names.into_iter().map(Into::into));
        self
    }

    /// Validate and freeze the query.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] when no credentials were set
    /// or a favorites name is empty or contains `/` or `,`.
    pub fn build(self) -> ClientResult<Query<C>> {
        let credentials = self.credentials.ok_or_else(|| {
            ClientError::invalid(format!("credentials are required for a {} query", C::CLASS))
        })?;

        for name in &self.favorites {
            validate_favorite(name)?;
        }

        Ok(Query {
            credentials,
            predicates: self.predicates,
            sorts: self.sorts,
            limit: self.limit,
            favorites: self.favorites.into_iter().collect(),
            _class: PhantomData,
        })
    }
}

impl<C: SpaceTrackClass> Default for QueryBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_favorite(name: &str) -> ClientResult<()> {
    if name.trim().is_empty() {
        return Err(ClientError::invalid("favorite name must not be empty"));
    }
    if name.contains('/') || name.contains(',') {
        return Err(ClientError::invalid(format!(
            "favorite name {name:?} must not contain '/' or ','"
        )));
    }
    Ok(())
}

