//! Client construction for the search backend.

use opensearch::{
    auth::Credentials,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    OpenSearch,
};
use url::Url;

use crate::config::ConnectionConfig;
use crate::errors::EventIndexError;

/// Build a client for a single backend node using basic authentication.
///
/// No request is sent; an unreachable backend surfaces on first use.
///
/// # Returns
///
/// * `Ok(OpenSearch)` - A client bound to `config.url`
/// * `Err(EventIndexError::ConnectionError)` - If the URL is invalid or the transport cannot be built
pub fn connect(config: &ConnectionConfig) -> Result<OpenSearch, EventIndexError> {
    let parsed_url =
        Url::parse(&config.url).map_err(|e| EventIndexError::connection(e.to_string()))?;

    let conn_pool = SingleNodeConnectionPool::new(parsed_url);
    let transport = TransportBuilder::new(conn_pool)
        .auth(Credentials::Basic(
            config.username.clone(),
            config.password.clone(),
        ))
        .disable_proxy()
        .build()
        .map_err(|e| EventIndexError::connection(e.to_string()))?;

    Ok(OpenSearch::new(transport))
}
