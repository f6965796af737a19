use crate::model::{DeploymentEvent, EnvironmentRules};

mod change_control;
mod deployment_window;
mod documented_changes;
mod guardrails;
mod infra_separation;
mod release_integrity;
mod rollback;
mod signoff;


/// Run every check in its fixed rule order, appending violations to `out`.
///
/// The order is load-bearing: downstream consumers display violations in
/// this order and CI assertions depend on it. No check short-circuits; all
/// applicable violations are collected, not just the first.
pub fn run_all(rules: &EnvironmentRules, event: &DeploymentEvent, out: &mut Vec<String>) {
    release_integrity::run(rules, event, out);
    infra_separation::run(rules, event, out);
    documented_changes::run(rules, event, out);
    deployment_window::run(rules, event, out);
    signoff::run(rules, event, out);
    change_control::run(rules, event, out);
    rollback::run(rules, event, out);
    guardrails::run(rules, event, out);
}
