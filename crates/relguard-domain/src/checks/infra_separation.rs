//! Rule#2: production separation from shared infrastructure.

use crate::model::{DeploymentEvent, EnvironmentRules};

pub fn run(rules: &EnvironmentRules, event: &DeploymentEvent, out: &mut Vec<String>) {
    // Prohibition gated on an explicit `false`; an absent parameter enforces
    // nothing. Not a truthy check.
    if rules.shared_infra_except_core == Some(false) && event.shared_infra {
        out.push("Rule#2: production cannot run on shared infra (except core)".to_string());
    }
}
