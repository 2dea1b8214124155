//! The authenticated HTTP client shared by every resource client.
//!
//! This module provides [`ApiClient`], which owns the transport handle and
//! API key, builds request URLs from a validated base URL, and maps non-2xx
//! responses into [`Error::Api`]. Resource clients compose its verb helpers,
//! the paginated-request helper and the envelope decoders; they add no
//! transport logic of their own.

use crate::alias;
use crate::config::SdkConfig;
use crate::error::{Error, Result};
use crate::page::{ItemEnvelope, ListEnvelope, Page, SelfResponse};
use crate::query::QueryParams;
use crate::FieldAliasMap;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Method, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

// Service-specific timeout configurations (in seconds)

/// Default timeout for DDoSX requests
pub const DDOSX_DEFAULT_TIMEOUT: u64 = 20;

/// Default timeout for DRaaS requests
pub const DRAAS_DEFAULT_TIMEOUT: u64 = 30;

/// Default timeout for PSS requests
pub const PSS_DEFAULT_TIMEOUT: u64 = 20;

// Connection pool settings

/// Default idle timeout for connection pools
pub const DEFAULT_POOL_IDLE_TIMEOUT: u64 = 90;

/// Default maximum idle connections per host
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// HTTP client configuration.
///
/// Controls transport behaviour shared by all resource clients. There is no
/// retry policy: a failed request surfaces immediately as an error.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,

    /// Connection pool idle timeout
    pub pool_idle_timeout: Duration,

    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,

    /// Enable request/response logging
    pub enable_logging: bool,

    /// Enable response compression
    pub enable_compression: bool,
}

impl ClientConfig {
    /// Create a new client configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            pool_idle_timeout: Duration::from_secs(DEFAULT_POOL_IDLE_TIMEOUT),
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
            enable_logging: true,
            enable_compression: true,
        }
    }

    /// Set request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set connection pool idle timeout.
    #[must_use]
    pub const fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    #[must_use]
    pub const fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    /// Enable or disable logging.
    #[must_use]
    pub const fn with_logging(mut self, enabled: bool) -> Self {
        self.enable_logging = enabled;
        self
    }

    /// Enable or disable compression.
    #[must_use]
    pub const fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiClientBuilder {
    base_url: String,
    api_key: Option<SecretString>,
    user_agent: String,
    config: ClientConfig,
}

impl ApiClientBuilder {
    /// Create a builder for the specified base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        // Validate the URL up front so build() can't fail on it later.
        url::Url::parse(base_url.as_ref())?;

        Ok(Self {
            base_url: base_url.as_ref().to_string(),
            api_key: None,
            user_agent: concat!("ukfast-rust/", env!("CARGO_PKG_VERSION")).to_string(),
            config: ClientConfig::new(),
        })
    }

    /// Create a builder from a validated [`SdkConfig`].
    pub fn from_config(config: &SdkConfig) -> Result<Self> {
        use validator::Validate;
        config.validate()?;

        let mut builder = Self::new(&config.api_url)?.with_timeout(config.timeout());
        if let Some(api_key) = &config.api_key {
            builder = builder.with_api_key(api_key.clone());
        }
        Ok(builder)
    }

    /// Configure the API key sent in the `Authorization` header.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Override the User-Agent header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ApiClient> {
        let mut base_url = url::Url::parse(&self.base_url)?;
        // A trailing slash makes Url::join treat the last segment as a
        // directory rather than replacing it.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let http = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .pool_idle_timeout(self.config.pool_idle_timeout)
            .pool_max_idle_per_host(self.config.pool_max_idle_per_host)
            .gzip(self.config.enable_compression)
            .user_agent(self.user_agent)
            .build()
            .map_err(|err| Error::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(ApiClient {
            http,
            base_url,
            api_key: self.api_key,
            enable_logging: self.config.enable_logging,
        })
    }
}

/// Authenticated HTTP client for the UKFast API.
///
/// Holds the transport handle and API key, both read-only after
/// construction. Cloning is cheap and shares the underlying connection pool,
/// which is how aggregate clients hand the same transport to their
/// sub-clients.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: url::Url,
    api_key: Option<SecretString>,
    enable_logging: bool,
}

impl ApiClient {
    /// Construct a client directly from the base URL, without an API key.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        ApiClientBuilder::new(base_url)?.build()
    }

    /// Return the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &url::Url {
        &self.base_url
    }

    /// Issue a request and surface any non-2xx status as [`Error::Api`].
    ///
    /// `path` is resolved against the base URL; `query` pairs and the JSON
    /// `body` are attached when present. There are no retries.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let mut request = self
            .http
            .request(method.clone(), url)
            .header(ACCEPT, "application/json");

        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(api_key) = &self.api_key {
            request = request.header(AUTHORIZATION, api_key.expose_secret());
        }

        if let Some(payload) = body {
            request = request.json(payload);
        }

        if self.enable_logging {
            debug!(method = %method, path, "dispatching API request");
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            if self.enable_logging {
                warn!(method = %method, path, status = status.as_u16(), "API request failed");
            }
            Err(Error::from_response(status.as_u16(), &body))
        }
    }

    /// Issue a GET request.
    pub async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Response> {
        self.request(Method::GET, path, query, None).await
    }

    /// Issue a POST request with a JSON body.
    pub async fn post(&self, path: &str, body: &Value) -> Result<Response> {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    /// Issue a PATCH request with a JSON body.
    pub async fn patch(&self, path: &str, body: &Value) -> Result<Response> {
        self.request(Method::PATCH, path, &[], Some(body)).await
    }

    /// Issue a DELETE request.
    pub async fn delete(&self, path: &str) -> Result<Response> {
        self.request(Method::DELETE, path, &[], None).await
    }

    /// Decode a successful response body into `T`.
    pub async fn decode_json<T>(response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        response
            .json::<T>()
            .await
            .map_err(|err| Error::Parse(format!("Failed to decode response body: {err}")))
    }

    /// Issue one page of a list request.
    ///
    /// Sends `page` and `per_page` alongside the already-wire-named `filters`
    /// and hydrates each raw item with `mapper`.
    pub async fn paginated_request<T, F>(
        &self,
        path: &str,
        page: u32,
        per_page: u32,
        filters: &[(String, String)],
        mapper: F,
    ) -> Result<Page<T>>
    where
        F: FnMut(&Value) -> Result<T>,
    {
        let mut query = QueryParams::new();
        query.push("page", page);
        query.push("per_page", per_page);
        for (key, value) in filters {
            query.push(key.clone(), value);
        }

        let response = self.get(path, query.as_pairs()).await?;
        let envelope: ListEnvelope = Self::decode_json(response).await?;
        Page::from_envelope(envelope, mapper)
    }

    /// Fetch a single entity and hydrate it with the resource's alias map.
    pub async fn get_entity<T>(&self, path: &str, aliases: &FieldAliasMap) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.get(path, &[]).await?;
        let envelope: ItemEnvelope = Self::decode_json(response).await?;
        alias::hydrate(&envelope.data, aliases)
    }

    /// Send a write request and wrap the returned entity in a
    /// [`SelfResponse`], hydrated with the resource's alias map.
    pub async fn send_entity<T>(
        &self,
        method: Method,
        path: &str,
        body: &Value,
        aliases: &FieldAliasMap,
    ) -> Result<SelfResponse<T>>
    where
        T: DeserializeOwned,
    {
        let response = self.request(method, path, &[], Some(body)).await?;
        let envelope: ItemEnvelope = Self::decode_json(response).await?;
        let aliases = *aliases;
        SelfResponse::from_envelope(envelope, move |raw| alias::hydrate(raw, &aliases))
    }

    /// Issue a DELETE and report whether the API confirmed the deletion.
    ///
    /// Returns `Ok(true)` only for HTTP 204; any other 2xx status yields
    /// `Ok(false)`. Non-2xx statuses surface as [`Error::Api`].
    pub async fn destroy(&self, path: &str) -> Result<bool> {
        let response = self.delete(path).await?;
        Ok(response.status() == StatusCode::NO_CONTENT)
    }
}
