//! Rule#7: rollback readiness.

use crate::model::{DeploymentEvent, EnvironmentRules};

pub fn run(rules: &EnvironmentRules, event: &DeploymentEvent, out: &mut Vec<String>) {
    if rules.rollback_instructions_present == Some(true) && !event.rollback_instructions_present {
        out.push("Rule#7: rollback instructions must be present".to_string());
    }
}
