use crate::checks;
use crate::model::{DeploymentEvent, EnvironmentRules};
use crate::store::PolicyDocument;
use relguard_types::ValidationResult;

/// Evaluate one deployment event against a resolved rule-parameter set.
///
/// Pure function: no I/O, no shared state, no error path. Every applicable
/// check runs; the returned violations are in fixed rule order.
pub fn evaluate(rules: &EnvironmentRules, event: &DeploymentEvent) -> Vec<String> {
    let mut violations = Vec::new();
    checks::run_all(rules, event, &mut violations);
    violations
}

/// Validate one deployment event against a whole policy document.
///
/// Resolves the event's declared environment first; an unknown environment
/// denies the request with a single violation and rule evaluation is never
/// reached.
pub fn validate(policy: &PolicyDocument, event: &DeploymentEvent) -> ValidationResult {
    match policy.resolve_environment(&event.env) {
        Some(rules) => ValidationResult::from_violations(evaluate(rules, event)),
        None => ValidationResult::denied(format!("Unknown environment: {}", event.env)),
    }
}
