use serde::{Deserialize, Serialize};

/// Per-environment governance rule parameters.
///
/// Every parameter is optional: an absent parameter means the rule is not
/// enforced. `shared_infra_except_core` and `retrospective_signoff` are
/// prohibitions gated on an *explicit* `false`, so they must stay three-state
/// (unset / true / false) and never collapse to a defaulted boolean.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests_passed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_signed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_controlled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_reviewers: Option<bool>,

    /// Minimum approver count; only consulted when `require_reviewers` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_reviewers: Option<u32>,

    /// Explicit `false` forbids deploying onto shared infrastructure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_infra_except_core: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_recorded: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_ticket: Option<bool>,

    /// Regex the ticket id must match from position 0 (prefix-anchored).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_date_agreed: Option<bool>,

    /// 0 means no wait is required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_timer_seconds: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_off: Option<bool>,

    /// Explicit `false` closes the emergency path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrospective_signoff: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components_unchanged: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollback_instructions_present: Option<bool>,

    /// 0 means unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_deployments_per_day: Option<u32>,
}

/// CI check status attached to a deployment event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksState {
    pub tests: bool,
}

/// One proposed deployment, as supplied by the requesting pipeline.
///
/// All fields default: absent booleans read as `false`, absent integers as
/// `0`, absent sequences as empty. Governance parameters decide which fields
/// actually matter; an unrecognized shape (wrong types) is rejected at the
/// deserialization boundary, never defaulted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentEvent {
    /// Target environment name, resolved against the policy document.
    pub env: String,

    pub checks: ChecksState,
    pub artifact_signed: bool,
    pub release_controlled: bool,
    pub approvers: Vec<String>,
    pub shared_infra: bool,
    pub change_recorded: bool,
    pub ticket_id: String,
    pub deployment_date_agreed: bool,
    pub wait_elapsed_seconds: u64,
    pub is_emergency: bool,
    pub signed_off: bool,
    pub components_changed_after_signoff: bool,
    pub rollback_instructions_present: bool,
    pub deployments_today: u32,
}
