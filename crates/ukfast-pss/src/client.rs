//! Asynchronous PSS request client implementation.

use crate::models::{Feedback, Request};
use crate::Result;
use reqwest::Method;
use serde_json::json;
use std::time::Duration;
use ukfast_core::client::{ApiClient, ApiClientBuilder, ClientConfig, PSS_DEFAULT_TIMEOUT};
use ukfast_core::config::SdkConfig;
use ukfast_core::page::{ItemEnvelope, Page, SelfResponse};
use url::Url;

const USER_AGENT: &str = concat!("ukfast-pss/", env!("CARGO_PKG_VERSION"));

/// Path prefix for the PSS product family.
pub const BASE_PATH: &str = "pss/";

/// Builder for [`RequestClient`].
#[derive(Debug, Clone)]
pub struct RequestClientBuilder {
    inner: ApiClientBuilder,
}

impl RequestClientBuilder {
    /// Create a builder for the specified base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let builder = ApiClientBuilder::new(base_url)?
            .with_timeout(Duration::from_secs(PSS_DEFAULT_TIMEOUT))
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
    pub fn build(self) -> Result<RequestClient> {
        let inner = self.inner.build()?;
        Ok(RequestClient { inner })
    }
}

/// Asynchronous client for PSS support requests.
#[derive(Debug, Clone)]
pub struct RequestClient {
    inner: ApiClient,
}

impl RequestClient {
    /// Construct a client directly from the base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        RequestClientBuilder::new(base_url)?.build()
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

    /// Fetch one page of support requests.
    ///
    /// PSS has no filter alias map; filter keys go to the query string
    /// exactly as supplied.
    pub async fn get_page(
        &self,
        page: u32,
        per_page: u32,
        filters: &[(String, String)],
    ) -> Result<Page<Request>> {
        let path = format!("{BASE_PATH}v1/requests");
        self.inner
            .paginated_request(&path, page, per_page, filters, |item| {
                Request::from_wire(item)
            })
            .await
    }

    /// Fetch a single support request.
    pub async fn get_by_id(&self, id: i64) -> Result<Request> {
        let path = format!("{BASE_PATH}v1/requests/{id}");
        let response = self.inner.get(&path, &[]).await?;
        let envelope: ItemEnvelope = ApiClient::decode_json(response).await?;
        Request::from_wire(&envelope.data)
    }

    /// Raise a new support request.
    pub async fn create(&self, request: &Request) -> Result<SelfResponse<Request>> {
        let path = format!("{BASE_PATH}v1/requests");
        let payload = request.to_payload()?;
        let response = self.inner.post(&path, &payload).await?;
        let envelope: ItemEnvelope = ApiClient::decode_json(response).await?;
        SelfResponse::from_envelope(envelope, |raw| Request::from_wire(raw))
    }

    /// Update an existing support request.
    pub async fn update(&self, id: i64, request: &Request) -> Result<SelfResponse<Request>> {
        let path = format!("{BASE_PATH}v1/requests/{id}");
        let payload = request.to_payload()?;
        let response = self.inner.patch(&path, &payload).await?;
        let envelope: ItemEnvelope = ApiClient::decode_json(response).await?;
        SelfResponse::from_envelope(envelope, |raw| Request::from_wire(raw))
    }

    /// Mark a support request as read.
    pub async fn mark_as_read(&self, id: i64) -> Result<SelfResponse<Request>> {
        let path = format!("{BASE_PATH}v1/requests/{id}");
        let response = self.inner.patch(&path, &json!({"read": true})).await?;
        let envelope: ItemEnvelope = ApiClient::decode_json(response).await?;
        SelfResponse::from_envelope(envelope, |raw| Request::from_wire(raw))
    }

    /// Leave feedback against a resolved support request.
    pub async fn leave_feedback(
        &self,
        ticket_id: i64,
        feedback: &Feedback,
    ) -> Result<SelfResponse<Feedback>> {
        let path = format!("{BASE_PATH}v1/requests/{ticket_id}/feedback");
        let response = self.inner.post(&path, &feedback.to_payload()).await?;
        let envelope: ItemEnvelope = ApiClient::decode_json(response).await?;
        SelfResponse::from_envelope(envelope, |raw| Feedback::from_wire(raw))
    }

    /// Fetch the feedback left against a support request.
    pub async fn get_feedback(&self, id: i64) -> Result<Feedback> {
        let path = format!("{BASE_PATH}v1/requests/{id}/feedback");
        let response = self.inner.get(&path, &[]).await?;
        let envelope: ItemEnvelope = ApiClient::decode_json(response).await?;
        Feedback::from_wire(&envelope.data)
    }

    /// Dispatch an arbitrary request under the PSS base path.
    ///
    /// Escape hatch for endpoints without a dedicated method.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<reqwest::Response> {
        let path = format!("{BASE_PATH}{path}");
        self.inner.request(method, &path, &[], body).await
    }
}
