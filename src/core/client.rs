//! Public client surface + builder.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::AvError;
use crate::dates::TzCache;

/// The query endpoint every time-series function is served from.
const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Environment variable consulted when no API key is given to the builder.
const API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";

const USER_AGENT: &str = concat!("alphavantage-rs/", env!("CARGO_PKG_VERSION"));

/// Cheaply clonable handle shared by every request this crate makes.
///
/// Owns the HTTP connection pool, the endpoint URL, the API key, and the
/// timezone-conversion cache. Clones share all of these, so one client can
/// back many concurrent fetches.
#[derive(Debug, Clone)]
pub struct AvClient {
    http: Client,
    base_url: Url,
    api_key: String,
    tz_cache: Arc<TzCache>,
}

impl Default for AvClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl AvClient {
    /// Create a new builder.
    pub fn builder() -> AvClientBuilder {
        AvClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn tz_cache(&self) -> &TzCache {
        &self.tz_cache
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct AvClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl AvClientBuilder {
    /// Set the API key. When unset, the `ALPHA_VANTAGE_API_KEY` environment
    /// variable is consulted; an empty key is permitted (the API rejects it
    /// server-side).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the query endpoint (used by tests to point at a mock server).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default endpoint URL fails to parse or the
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<AvClient, AvError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let api_key = self
            .api_key
            .or_else(|| env::var(API_KEY_ENV).ok())
            .unwrap_or_default();

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .gzip(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(AvClient {
            http,
            base_url,
            api_key,
            tz_cache: Arc::new(TzCache::default()),
        })
    }
}
