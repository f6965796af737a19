//! Rule#5: sign-off and the emergency path.

use crate::model::{DeploymentEvent, EnvironmentRules};

pub fn run(rules: &EnvironmentRules, event: &DeploymentEvent, out: &mut Vec<String>) {
    // Emergency requests bypass the sign-off requirement entirely.
    if rules.signed_off == Some(true) && !event.is_emergency && !event.signed_off {
        out.push("Rule#5: missing required sign-off".to_string());
    }

    // Explicit `false` closes the emergency path; unset leaves it open.
    if event.is_emergency && rules.retrospective_signoff == Some(false) {
        out.push("Rule#5: emergency path requires retrospective_signoff enabled".to_string());
    }
}
