//! DRaaS entities shared by the resource clients.

use serde::{Deserialize, Serialize};
use ukfast_core::uuid::{FailoverPlanUuid, IopsTierUuid, SolutionUuid};
use ukfast_core::FieldAliasMap;

/// Wire/friendly aliases for [`Solution`] fields.
pub const SOLUTION_ALIASES: FieldAliasMap = FieldAliasMap::new(&[
    ("iops_tier_id", "iopsTierId"),
    ("billing_type", "billingType"),
]);

/// Wire/friendly aliases for [`ComputeResources`] fields; all spellings match.
pub const COMPUTE_RESOURCES_ALIASES: FieldAliasMap = FieldAliasMap::new(&[]);

/// Wire/friendly aliases for [`BackupResource`] fields.
pub const BACKUP_RESOURCE_ALIASES: FieldAliasMap =
    FieldAliasMap::new(&[("used_quota", "usedQuota")]);

/// Wire/friendly aliases for [`IopsTier`] fields.
pub const IOPS_TIER_ALIASES: FieldAliasMap = FieldAliasMap::new(&[("iops_limit", "iopsLimit")]);

/// Wire/friendly aliases for [`FailoverPlan`] fields.
pub const FAILOVER_PLAN_ALIASES: FieldAliasMap = FieldAliasMap::new(&[]);

/// A DRaaS solution.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Solution {
    /// Solution identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<SolutionUuid>,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// IOPS tier applied to the solution's storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops_tier_id: Option<IopsTierUuid>,

    /// Billing model (e.g. PAYG)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_type: Option<String>,
}

/// Compute resources allocated to a solution.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ComputeResources {
    /// Resource identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Allocated RAM in GB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram: Option<u64>,

    /// Allocated vCPU count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<u32>,
}

/// Backup resources allocated to a solution.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BackupResource {
    /// Resource identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Allocated quota in GB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota: Option<u64>,

    /// Quota currently in use, in GB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_quota: Option<f64>,
}

/// A storage IOPS tier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct IopsTier {
    /// Tier identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<IopsTierUuid>,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// IOPS ceiling for the tier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops_limit: Option<u64>,
}

/// A failover plan belonging to a solution.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FailoverPlan {
    /// Plan identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<FailoverPlanUuid>,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// VMs covered by the plan
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vms: Vec<FailoverPlanVm>,
}

/// A VM entry inside a failover plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FailoverPlanVm {
    /// VM name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
