//! Rate guardrails, distinct from the numbered process-control rules.

use crate::model::{DeploymentEvent, EnvironmentRules};

pub fn run(rules: &EnvironmentRules, event: &DeploymentEvent, out: &mut Vec<String>) {
    // 0 (or unset) means unlimited. The boundary is strictly greater-than:
    // deploying exactly at the limit is still allowed.
    let max_deployments = rules.max_deployments_per_day.unwrap_or(0);
    if max_deployments > 0 && event.deployments_today > max_deployments {
        out.push(format!(
            "Max deployments per day exceeded ({} > {})",
            event.deployments_today, max_deployments
        ));
    }
}
