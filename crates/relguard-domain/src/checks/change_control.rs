//! Rule#6: change control after sign-off.

use crate::model::{DeploymentEvent, EnvironmentRules};

pub fn run(rules: &EnvironmentRules, event: &DeploymentEvent, out: &mut Vec<String>) {
    if rules.components_unchanged == Some(true) && event.components_changed_after_signoff {
        out.push("Rule#6: components changed after signoff; require new signoff".to_string());
    }
}
