use crate::model::{ChecksState, DeploymentEvent, EnvironmentRules};
use crate::store::PolicyDocument;
use std::collections::BTreeMap;

/// A rule set with every governance parameter enforced at realistic
/// thresholds: two reviewers, JIRA tickets, a five minute wait timer and a
/// three-per-day deployment cap.
pub fn all_rules_enforced() -> EnvironmentRules {
    EnvironmentRules {
        tests_passed: Some(true),
        artifact_signed: Some(true),
        release_controlled: Some(true),
        require_reviewers: Some(true),
        min_reviewers: Some(2),
        shared_infra_except_core: Some(false),
        change_recorded: Some(true),
        require_ticket: Some(true),
        ticket_pattern: Some("^JIRA-\\d+$".to_string()),
        deployment_date_agreed: Some(true),
        wait_timer_seconds: Some(300),
        signed_off: Some(true),
        retrospective_signoff: Some(true),
        components_unchanged: Some(true),
        rollback_instructions_present: Some(true),
        max_deployments_per_day: Some(3),
    }
}

/// An event that satisfies [`all_rules_enforced`] exactly at each threshold:
/// two approvers, the wait timer exactly elapsed, deployments exactly at the
/// daily cap.
pub fn compliant_event(env: &str) -> DeploymentEvent {
    DeploymentEvent {
        env: env.to_string(),
        checks: ChecksState { tests: true },
        artifact_signed: true,
        release_controlled: true,
        approvers: names(2),
        shared_infra: false,
        change_recorded: true,
        ticket_id: "JIRA-123".to_string(),
        deployment_date_agreed: true,
        wait_elapsed_seconds: 300,
        is_emergency: false,
        signed_off: true,
        components_changed_after_signoff: false,
        rollback_instructions_present: true,
        deployments_today: 3,
    }
}

pub fn policy_with(env: &str, rules: EnvironmentRules) -> PolicyDocument {
    let mut environments = BTreeMap::new();
    environments.insert(env.to_string(), rules);
    PolicyDocument::new(environments)
}

pub fn names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("reviewer-{i}")).collect()
}
