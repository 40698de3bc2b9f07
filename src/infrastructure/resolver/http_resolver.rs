//! `reqwest`-backed map URL resolver.

use async_trait::async_trait;
use reqwest::{Client, redirect::Policy};
use std::time::Duration;
use tracing::debug;

use crate::domain::entities::Coordinates;
use crate::domain::resolver::{MapUrlResolver, ResolveError};
use crate::utils::coordinate_pattern::extract_coordinates;

/// Settings for outbound resolution requests.
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    /// Upper bound for the whole request, redirects included.
    pub timeout: Duration,
    /// Maximum number of redirects followed before giving up.
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_redirects: 5,
            user_agent: format!("map-coordinates/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Resolves map URLs by issuing a GET and reading the final URL reported by
/// the transport after redirects.
///
/// Non-2xx responses are not treated as failures: only the final location
/// matters. The response body is never read.
pub struct HttpResolver {
    client: Client,
}

impl HttpResolver {
    /// Builds the underlying HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(settings: &ResolverSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .redirect(Policy::limited(settings.max_redirects))
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// Follows redirects from `map_url` and returns the final URL.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Network`] if the request cannot complete.
    pub async fn resolve_final_url(&self, map_url: &str) -> Result<String, ResolveError> {
        let response = self
            .client
            .get(map_url)
            .send()
            .await
            .map_err(|e| ResolveError::Network(describe(&e)))?;

        debug!(
            status = response.status().as_u16(),
            "Resolved {} -> {}",
            map_url,
            response.url()
        );

        Ok(response.url().to_string())
    }
}

#[async_trait]
impl MapUrlResolver for HttpResolver {
    async fn resolve(&self, map_url: &str) -> Result<Coordinates, ResolveError> {
        let resolved_url = self.resolve_final_url(map_url).await?;

        extract_coordinates(&resolved_url).ok_or(ResolveError::Extraction { resolved_url })
    }
}

/// Human-readable transport failure, including the innermost cause.
fn describe(e: &reqwest::Error) -> String {
    let kind = if e.is_timeout() {
        "request timed out"
    } else if e.is_redirect() {
        "too many redirects"
    } else if e.is_builder() {
        "invalid URL"
    } else if e.is_connect() {
        "connection failed"
    } else {
        "request failed"
    };

    let mut source = std::error::Error::source(e);
    let mut root = None;
    while let Some(s) = source {
        root = Some(s.to_string());
        source = s.source();
    }

    match root {
        Some(cause) => format!("{kind}: {cause}"),
        None => format!("{kind}: {e}"),
    }
}
