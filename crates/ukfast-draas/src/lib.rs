//! DRaaS client and data models for the UKFast API.
//!
//! Provides typed entities and asynchronous clients for the UKFast
//! disaster-recovery-as-a-service (DRaaS) product: solutions and their
//! compute resources, backup resources, IOPS tiers and failover plans.
//!
//! [`DraasClient`] is a pure factory: it holds the shared transport and API
//! key and hands out an authenticated sub-client per resource family.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{
    BackupResourcesClient, ComputeResourcesClient, DraasClient, DraasClientBuilder,
    FailoverPlanClient, IopsTiersClient, SolutionClient,
};
pub use models::{
    BackupResource, ComputeResources, FailoverPlan, FailoverPlanVm, IopsTier, Solution,
    BACKUP_RESOURCE_ALIASES, COMPUTE_RESOURCES_ALIASES, FAILOVER_PLAN_ALIASES, IOPS_TIER_ALIASES,
    SOLUTION_ALIASES,
};

/// Convenient result alias that reuses the shared UKFast error type.
pub type Result<T> = ukfast_core::Result<T>;
