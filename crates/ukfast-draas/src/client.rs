//! Asynchronous DRaaS clients.
//!
//! The aggregate [`DraasClient`] exposes no HTTP methods of its own; it only
//! constructs authenticated sub-clients that share its transport and API key.

use crate::models::{
    BackupResource, ComputeResources, FailoverPlan, IopsTier, Solution, BACKUP_RESOURCE_ALIASES,
    COMPUTE_RESOURCES_ALIASES, FAILOVER_PLAN_ALIASES, IOPS_TIER_ALIASES, SOLUTION_ALIASES,
};
use crate::Result;
use reqwest::Method;
use serde_json::json;
use std::time::Duration;
use ukfast_core::alias;
use ukfast_core::client::{ApiClient, ApiClientBuilder, ClientConfig, DRAAS_DEFAULT_TIMEOUT};
use ukfast_core::config::SdkConfig;
use ukfast_core::page::{Page, SelfResponse};
use ukfast_core::uuid::{FailoverPlanUuid, IopsTierUuid, SolutionUuid};
use ukfast_core::Error;
use url::Url;

const USER_AGENT: &str = concat!("ukfast-draas/", env!("CARGO_PKG_VERSION"));

/// Path prefix for the DRaaS product family.
pub const BASE_PATH: &str = "draas/";

/// Builder for [`DraasClient`].
#[derive(Debug, Clone)]
pub struct DraasClientBuilder {
    inner: ApiClientBuilder,
}

impl DraasClientBuilder {
    /// Create a builder for the specified base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let builder = ApiClientBuilder::new(base_url)?
            .with_timeout(Duration::from_secs(DRAAS_DEFAULT_TIMEOUT))
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
    pub fn build(self) -> Result<DraasClient> {
        let inner = self.inner.build()?;
        Ok(DraasClient { inner })
    }
}

/// Aggregate client for the DRaaS product family.
///
/// A pure factory: each method returns a sub-client sharing this client's
/// transport handle and API key.
#[derive(Debug, Clone)]
pub struct DraasClient {
    inner: ApiClient,
}

impl DraasClient {
    /// Construct a client directly from the base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        DraasClientBuilder::new(base_url)?.build()
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

    /// Client for DRaaS solutions.
    #[must_use]
    pub fn solutions(&self) -> SolutionClient {
        SolutionClient {
            inner: self.inner.clone(),
        }
    }

    /// Client for a solution's compute resources.
    #[must_use]
    pub fn compute_resources(&self) -> ComputeResourcesClient {
        ComputeResourcesClient {
            inner: self.inner.clone(),
        }
    }

    /// Client for a solution's backup resources.
    #[must_use]
    pub fn backup_resources(&self) -> BackupResourcesClient {
        BackupResourcesClient {
            inner: self.inner.clone(),
        }
    }

    /// Client for storage IOPS tiers.
    #[must_use]
    pub fn iops_tiers(&self) -> IopsTiersClient {
        IopsTiersClient {
            inner: self.inner.clone(),
        }
    }

    /// Client for failover plans.
    #[must_use]
    pub fn failover_plans(&self) -> FailoverPlanClient {
        FailoverPlanClient {
            inner: self.inner.clone(),
        }
    }
}

/// Client for DRaaS solutions.
#[derive(Debug, Clone)]
pub struct SolutionClient {
    inner: ApiClient,
}

impl SolutionClient {
    /// Fetch one page of solutions.
    pub async fn get_page(
        &self,
        page: u32,
        per_page: u32,
        filters: &[(String, String)],
    ) -> Result<Page<Solution>> {
        let filters = alias::friendly_to_api_filters(filters, &SOLUTION_ALIASES);
        let path = format!("{BASE_PATH}v1/solutions");
        self.inner
            .paginated_request(&path, page, per_page, &filters, |item| {
                alias::hydrate(item, &SOLUTION_ALIASES)
            })
            .await
    }

    /// Fetch a single solution.
    pub async fn get_by_id(&self, solution_id: SolutionUuid) -> Result<Solution> {
        let path = format!("{BASE_PATH}v1/solutions/{solution_id}");
        self.inner.get_entity(&path, &SOLUTION_ALIASES).await
    }

    /// Update an existing solution.
    pub async fn update(&self, solution: &Solution) -> Result<SelfResponse<Solution>> {
        let id = solution
            .id
            .ok_or_else(|| Error::Validation("solution has no id".to_string()))?;
        let path = format!("{BASE_PATH}v1/solutions/{id}");
        let payload = alias::dehydrate(solution, &SOLUTION_ALIASES)?;
        self.inner
            .send_entity(Method::PATCH, &path, &payload, &SOLUTION_ALIASES)
            .await
    }
}

/// Client for a solution's compute resources.
#[derive(Debug, Clone)]
pub struct ComputeResourcesClient {
    inner: ApiClient,
}

impl ComputeResourcesClient {
    /// Fetch one page of compute resources for a solution.
    pub async fn get_page(
        &self,
        solution_id: SolutionUuid,
        page: u32,
        per_page: u32,
    ) -> Result<Page<ComputeResources>> {
        let path = format!("{BASE_PATH}v1/solutions/{solution_id}/compute-resources");
        self.inner
            .paginated_request(&path, page, per_page, &[], |item| {
                alias::hydrate(item, &COMPUTE_RESOURCES_ALIASES)
            })
            .await
    }
}

/// Client for a solution's backup resources.
#[derive(Debug, Clone)]
pub struct BackupResourcesClient {
    inner: ApiClient,
}

impl BackupResourcesClient {
    /// Fetch one page of backup resources for a solution.
    pub async fn get_page(
        &self,
        solution_id: SolutionUuid,
        page: u32,
        per_page: u32,
    ) -> Result<Page<BackupResource>> {
        let path = format!("{BASE_PATH}v1/solutions/{solution_id}/backup-resources");
        self.inner
            .paginated_request(&path, page, per_page, &[], |item| {
                alias::hydrate(item, &BACKUP_RESOURCE_ALIASES)
            })
            .await
    }
}

/// Client for storage IOPS tiers.
#[derive(Debug, Clone)]
pub struct IopsTiersClient {
    inner: ApiClient,
}

impl IopsTiersClient {
    /// Fetch one page of IOPS tiers.
    pub async fn get_page(&self, page: u32, per_page: u32) -> Result<Page<IopsTier>> {
        let path = format!("{BASE_PATH}v1/iops-tiers");
        self.inner
            .paginated_request(&path, page, per_page, &[], |item| {
                alias::hydrate(item, &IOPS_TIER_ALIASES)
            })
            .await
    }

    /// Fetch a single IOPS tier.
    pub async fn get_by_id(&self, tier_id: IopsTierUuid) -> Result<IopsTier> {
        let path = format!("{BASE_PATH}v1/iops-tiers/{tier_id}");
        self.inner.get_entity(&path, &IOPS_TIER_ALIASES).await
    }
}

/// Client for failover plans.
#[derive(Debug, Clone)]
pub struct FailoverPlanClient {
    inner: ApiClient,
}

impl FailoverPlanClient {
    /// Fetch one page of failover plans for a solution.
    pub async fn get_page(
        &self,
        solution_id: SolutionUuid,
        page: u32,
        per_page: u32,
    ) -> Result<Page<FailoverPlan>> {
        let path = format!("{BASE_PATH}v1/solutions/{solution_id}/failover-plans");
        self.inner
            .paginated_request(&path, page, per_page, &[], |item| {
                alias::hydrate(item, &FAILOVER_PLAN_ALIASES)
            })
            .await
    }

    /// Fetch a single failover plan.
    pub async fn get_by_id(
        &self,
        solution_id: SolutionUuid,
        plan_id: FailoverPlanUuid,
    ) -> Result<FailoverPlan> {
        let path = format!("{BASE_PATH}v1/solutions/{solution_id}/failover-plans/{plan_id}");
        self.inner.get_entity(&path, &FAILOVER_PLAN_ALIASES).await
    }

    /// Start a failover plan, optionally scheduled for a later date.
    pub async fn start(
        &self,
        solution_id: SolutionUuid,
        plan_id: FailoverPlanUuid,
        start_date: Option<&str>,
    ) -> Result<()> {
        let path =
            format!("{BASE_PATH}v1/solutions/{solution_id}/failover-plans/{plan_id}/start");
        let payload = match start_date {
            Some(date) => json!({"start_date": date}),
            None => json!({}),
        };
        self.inner.post(&path, &payload).await.map(|_| ())
    }

    /// Stop a running failover plan.
    pub async fn stop(
        &self,
        solution_id: SolutionUuid,
        plan_id: FailoverPlanUuid,
    ) -> Result<()> {
        let path = format!("{BASE_PATH}v1/solutions/{solution_id}/failover-plans/{plan_id}/stop");
        self.inner.post(&path, &json!({})).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> DraasClient {
        DraasClientBuilder::new(server.uri())
            .unwrap()
            .with_api_key("test-key")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn factories_share_the_parent_transport() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        // Every sub-client resolves paths against the same base URL.
        assert_eq!(
            client.solutions().inner.base_url(),
            client.failover_plans().inner.base_url()
        );
    }

    #[tokio::test]
    async fn solutions_get_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/draas/v1/solutions"))
            .and(query_param("page", "1"))
            .and(query_param("per_page", "15"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "id": SolutionUuid::new_v4(),
                    "name": "dr-production",
                    "billing_type": "PAYG"
                }],
                "meta": {"pagination": {"page": 1, "per_page": 15, "total": 1, "total_pages": 1}}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let page = client.solutions().get_page(1, 15, &[]).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page.items()[0].name.as_deref(), Some("dr-production"));
        assert_eq!(page.items()[0].billing_type.as_deref(), Some("PAYG"));
    }

    #[tokio::test]
    async fn solutions_get_by_id_hydrates_friendly_fields() {
        let server = MockServer::start().await;
        let id = SolutionUuid::new_v4();
        let tier_id = IopsTierUuid::new_v4();

        Mock::given(method("GET"))
            .and(path(format!("/draas/v1/solutions/{id}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "id": id,
                    "name": "dr-production",
                    "iops_tier_id": tier_id,
                    "billing_type": "PAYG"
                }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let solution = client.solutions().get_by_id(id).await.unwrap();

        assert_eq!(solution.id, Some(id));
        assert_eq!(solution.iops_tier_id, Some(tier_id));
        assert_eq!(solution.billing_type.as_deref(), Some("PAYG"));
    }

    #[tokio::test]
    async fn solutions_update_requires_an_id() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        let err = client
            .solutions()
            .update(&Solution::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn solutions_update_patches_wire_payload() {
        let server = MockServer::start().await;
        let id = SolutionUuid::new_v4();

        Mock::given(method("PATCH"))
            .and(path(format!("/draas/v1/solutions/{id}").as_str()))
            .and(body_json(json!({"id": id, "name": "renamed"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"id": id, "name": "renamed"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let solution = Solution {
            id: Some(id),
            name: Some("renamed".to_string()),
            ..Solution::default()
        };

        let response = client.solutions().update(&solution).await.unwrap();
        assert_eq!(response.data().name.as_deref(), Some("renamed"));
    }

    #[tokio::test]
    async fn compute_resources_page_by_solution() {
        let server = MockServer::start().await;
        let solution_id = SolutionUuid::new_v4();

        Mock::given(method("GET"))
            .and(path(
                format!("/draas/v1/solutions/{solution_id}/compute-resources").as_str(),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": "cr-1", "ram": 64, "cpu": 16}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let page = client
            .compute_resources()
            .get_page(solution_id, 1, 15)
            .await
            .unwrap();
        assert_eq!(page.items()[0].ram, Some(64));
        assert_eq!(page.items()[0].cpu, Some(16));
    }

    #[tokio::test]
    async fn backup_resources_hydrate_used_quota() {
        let server = MockServer::start().await;
        let solution_id = SolutionUuid::new_v4();

        Mock::given(method("GET"))
            .and(path(
                format!("/draas/v1/solutions/{solution_id}/backup-resources").as_str(),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": "br-1", "name": "backup", "quota": 1000, "used_quota": 250.0}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let page = client
            .backup_resources()
            .get_page(solution_id, 1, 15)
            .await
            .unwrap();
        assert_eq!(page.items()[0].used_quota, Some(250.0));
    }

    #[tokio::test]
    async fn iops_tiers_get_page() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/draas/v1/iops-tiers"))
            .and(query_param("page", "1"))
            .and(query_param("per_page", "15"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"id": IopsTierUuid::new_v4(), "name": "silver", "iops_limit": 1200},
                    {"id": IopsTierUuid::new_v4(), "name": "gold", "iops_limit": 2500}
                ],
                "meta": {"pagination": {"page": 1, "per_page": 15, "total": 2, "total_pages": 1}}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let page = client.iops_tiers().get_page(1, 15).await.unwrap();

        assert_eq!(page.len(), 2);
        assert_eq!(page.items()[0].name.as_deref(), Some("silver"));
        assert_eq!(page.items()[1].iops_limit, Some(2500));
    }

    #[tokio::test]
    async fn iops_tiers_get_by_id() {
        let server = MockServer::start().await;
        let tier_id = IopsTierUuid::new_v4();

        Mock::given(method("GET"))
            .and(path(format!("/draas/v1/iops-tiers/{tier_id}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"id": tier_id, "name": "gold", "iops_limit": 2500}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let tier = client.iops_tiers().get_by_id(tier_id).await.unwrap();
        assert_eq!(tier.iops_limit, Some(2500));
    }

    #[tokio::test]
    async fn failover_plan_start_posts_start_date() {
        let server = MockServer::start().await;
        let solution_id = SolutionUuid::new_v4();
        let plan_id = FailoverPlanUuid::new_v4();

        Mock::given(method("POST"))
            .and(path(
                format!("/draas/v1/solutions/{solution_id}/failover-plans/{plan_id}/start")
                    .as_str(),
            ))
            .and(body_json(json!({"start_date": "2025-01-01T00:00:00Z"})))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = test_client(&server);
        client
            .failover_plans()
            .start(solution_id, plan_id, Some("2025-01-01T00:00:00Z"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn failover_plan_stop() {
        let server = MockServer::start().await;
        let solution_id = SolutionUuid::new_v4();
        let plan_id = FailoverPlanUuid::new_v4();

        Mock::given(method("POST"))
            .and(path(
                format!("/draas/v1/solutions/{solution_id}/failover-plans/{plan_id}/stop")
                    .as_str(),
            ))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = test_client(&server);
        client
            .failover_plans()
            .stop(solution_id, plan_id)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn failover_plan_get_by_id_hydrates_vms() {
        let server = MockServer::start().await;
        let solution_id = SolutionUuid::new_v4();
        let plan_id = FailoverPlanUuid::new_v4();

        Mock::given(method("GET"))
            .and(path(
                format!("/draas/v1/solutions/{solution_id}/failover-plans/{plan_id}").as_str(),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "id": plan_id,
                    "name": "plan-a",
                    "vms": [{"name": "web-01"}]
                }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let plan = client
            .failover_plans()
            .get_by_id(solution_id, plan_id)
            .await
            .unwrap();
        assert_eq!(plan.vms.len(), 1);
        assert_eq!(plan.vms[0].name.as_deref(), Some("web-01"));
    }
}
