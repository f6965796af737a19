//! Rule#4: deployment windows and wait timers.

use crate::model::{DeploymentEvent, EnvironmentRules};

pub fn run(rules: &EnvironmentRules, event: &DeploymentEvent, out: &mut Vec<String>) {
    if rules.deployment_date_agreed == Some(true) && !event.deployment_date_agreed {
        out.push("Rule#4: deployment date not agreed".to_string());
    }

    // 0 (or unset) means no wait is required.
    let wait_timer = rules.wait_timer_seconds.unwrap_or(0);
    if wait_timer > 0 && event.wait_elapsed_seconds < wait_timer {
        out.push(format!(
            "Rule#4: wait timer not elapsed ({} < {})",
            event.wait_elapsed_seconds, wait_timer
        ));
    }
}
