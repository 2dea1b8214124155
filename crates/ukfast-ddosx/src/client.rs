//! Asynchronous DDoSX record client implementation.

use crate::models::{Record, RECORD_ALIASES};
use crate::Result;
use reqwest::Method;
use std::time::Duration;
use ukfast_core::alias;
use ukfast_core::client::{ApiClient, ApiClientBuilder, ClientConfig, DDOSX_DEFAULT_TIMEOUT};
use ukfast_core::config::SdkConfig;
use ukfast_core::page::{Page, SelfResponse};
use ukfast_core::uuid::RecordUuid;
use ukfast_core::Error;
use url::Url;

const USER_AGENT: &str = concat!("ukfast-ddosx/", env!("CARGO_PKG_VERSION"));

/// Path prefix for the DDoSX product family.
pub const BASE_PATH: &str = "ddosx/";

/// Builder for [`RecordClient`].
#[derive(Debug, Clone)]
pub struct RecordClientBuilder {
    inner: ApiClientBuilder,
}

impl RecordClientBuilder {
    /// Create a builder for the specified base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let builder = ApiClientBuilder::new(base_url)?
            .with_timeout(Duration::from_secs(DDOSX_DEFAULT_TIMEOUT))
            .with_user_agent(USER_AGENT);

        Ok(Self { inner: builder })
    }

    /// Create a builder from a validated [`SdkConfig`].
    pub fn from_config(config: &SdkConfig) -> Result<Self> {
        let builder = ApiClientBuilder::from_config(config)?.with_user_agent(USER_AGENT);
        Ok(Self { inner: builder })
    }

    /// Configure the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.inner = self.inner.with_api_key(api_key);
        self
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.inner = self.inner.with_http_config(config);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<RecordClient> {
        let inner = self.inner.build()?;
        Ok(RecordClient { inner })
    }
}

/// Asynchronous client for DDoSX DNS records.
#[derive(Debug, Clone)]
pub struct RecordClient {
    inner: ApiClient,
}

impl RecordClient {
    /// Construct a client directly from the base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        RecordClientBuilder::new(base_url)?.build()
    }

    /// Construct a client sharing an existing transport and API key.
    #[must_use]
    pub const fn from_api(api: ApiClient) -> Self {
        Self { inner: api }
    }

    /// Return the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        self.inner.base_url()
    }

    /// Fetch one page of records across all domains.
    ///
    /// Filter keys may use either convention; friendly keys are translated
    /// to wire form before dispatch.
    pub async fn get_page(
        &self,
        page: u32,
        per_page: u32,
        filters: &[(String, String)],
    ) -> Result<Page<Record>> {
        let filters = alias::friendly_to_api_filters(filters, &RECORD_ALIASES);
        let path = format!("{BASE_PATH}v1/records");
        self.inner
            .paginated_request(&path, page, per_page, &filters, |item| {
                alias::hydrate(item, &RECORD_ALIASES)
            })
            .await
    }

    /// Fetch one page of records for a single domain.
    pub async fn get_page_by_domain_name(
        &self,
        domain_name: &str,
        page: u32,
        per_page: u32,
        filters: &[(String, String)],
    ) -> Result<Page<Record>> {
        let filters = alias::friendly_to_api_filters(filters, &RECORD_ALIASES);
        let path = format!("{BASE_PATH}v1/domains/{domain_name}/records");
        self.inner
            .paginated_request(&path, page, per_page, &filters, |item| {
                alias::hydrate(item, &RECORD_ALIASES)
            })
            .await
    }

    /// Fetch a single record.
    pub async fn get_by_id(&self, domain_name: &str, record_id: RecordUuid) -> Result<Record> {
        let path = format!("{BASE_PATH}v1/domains/{domain_name}/records/{record_id}");
        self.inner.get_entity(&path, &RECORD_ALIASES).await
    }

    /// Create a new record under its domain.
    ///
    /// The record must carry a domain name; the created entity comes back
    /// hydrated inside the response wrapper.
    pub async fn create(&self, record: &Record) -> Result<SelfResponse<Record>> {
        let domain_name = require_domain(record)?;
        let path = format!("{BASE_PATH}v1/domains/{domain_name}/records");
        let payload = alias::dehydrate(record, &RECORD_ALIASES)?;
        self.inner
            .send_entity(Method::POST, &path, &payload, &RECORD_ALIASES)
            .await
    }

    /// Update an existing record.
    pub async fn update(&self, record: &Record) -> Result<SelfResponse<Record>> {
        let path = record_path(record)?;
        let payload = alias::dehydrate(record, &RECORD_ALIASES)?;
        self.inner
            .send_entity(Method::PATCH, &path, &payload, &RECORD_ALIASES)
            .await
    }

    /// Delete an existing record.
    ///
    /// Returns `Ok(true)` only when the API confirms with HTTP 204.
    pub async fn destroy(&self, record: &Record) -> Result<bool> {
        let path = record_path(record)?;
        self.inner.destroy(&path).await
    }
}

fn require_domain(record: &Record) -> Result<&str> {
    record
        .domain_name
        .as_deref()
        .ok_or_else(|| Error::Validation("record has no domain name".to_string()))
}

fn record_path(record: &Record) -> Result<String> {
    let domain_name = require_domain(record)?;
    let id = record
        .id
        .ok_or_else(|| Error::Validation("record has no id".to_string()))?;
    Ok(format!("{BASE_PATH}v1/domains/{domain_name}/records/{id}"))
}
