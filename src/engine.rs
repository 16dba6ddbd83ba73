//! Query execution.
//!
//! One call to [`Query::execute`] performs, in order:
//!
//! 1. re-validation of the built query,
//! 2. authentication through the query's credential provider,
//! 3. assembly of the request URL below the session's base URL,
//! 4. exactly one GET,
//! 5. a status check (non-2xx fails with the status and body),
//! 6. decoding of the JSON array into records, in server order.
//!
//! There is no retry and no automatic paging.

use reqwest::Url;
use tracing::{debug, warn};

use crate::auth::Session;
use crate::error::{ClientError, ClientResult};
use crate::query::{Query, SpaceTrackClass, TokenStream};

impl<C: SpaceTrackClass> Query<C> {
    /// Authenticate and run the query, returning every matching record.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidArgument`] if the query fails re-validation
    /// - [`ClientError::Authentication`] if the provider cannot log in
    /// - [`ClientError::Http`] / [`ClientError::Transport`] for non-success
    ///   statuses and I/O failures
    /// - [`ClientError::Parse`] if the body is not a JSON array of records
    pub async fn execute(&self) -> ClientResult<Vec<C>> {
        self.validate()?;
        let session = self.credentials().authenticate().await?;
        self.execute_in(session.as_ref()).await
    }

    /// Run the query on an already authenticated session.
    pub async fn execute_in(&self, session: &dyn Session) -> ClientResult<Vec<C>> {
        self.validate()?;
        let url = self.url(session.base_url())?;
        debug!(class = C::CLASS, path = %self.to_path(), "executing query");

        let response = session.get(url).await?;
        if !response.is_success() {
            warn!(class = C::CLASS, status = response.status, "query failed");
            return Err(ClientError::Http {
                status: response.status,
                body: response.body,
            });
        }

        let records = decode_records::<C>(&response.body)?;
        debug!(class = C::CLASS, rows = records.len(), "query complete");
        Ok(records)
    }

    /// The full request URL below `base`.
    pub fn url(&self, base: &Url) -> ClientResult<Url> {
        build_url(base, &self.to_tokens())
    }
}

/// Append the stream's segments to `base`, percent-encoding each one.
pub fn build_url(base: &Url, path: &TokenStream) -> ClientResult<Url> {
    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| ClientError::invalid(format!("base URL cannot carry a path: {base}")))?;
        segments.pop_if_empty();
        segments.extend(path.segments());
    }
    Ok(url)
}

/// Decode a response body into records.
///
/// Unknown attributes are ignored and missing ones become `None`.
pub fn decode_records<C: SpaceTrackClass>(body: &str) -> ClientResult<Vec<C>> {
    serde_json::from_str(body).map_err(ClientError::Parse)
}
