//! Rule#1: controlled, tested, reviewed releases.

use crate::model::{DeploymentEvent, EnvironmentRules};

pub fn run(rules: &EnvironmentRules, event: &DeploymentEvent, out: &mut Vec<String>) {
    if rules.tests_passed == Some(true) && !event.checks.tests {
        out.push("Rule#1: tests required but not passed".to_string());
    }

    if rules.artifact_signed == Some(true) && !event.artifact_signed {
        out.push("Rule#1: artifact must be signed".to_string());
    }

    if rules.release_controlled == Some(true) && !event.release_controlled {
        out.push("Rule#1: release must be controlled".to_string());
    }

    if rules.require_reviewers == Some(true) {
        let min_reviewers = rules.min_reviewers.unwrap_or(0);
        let approvers = event.approvers.len() as u32;
        if approvers < min_reviewers {
            out.push(format!(
                "Rule#1: at least {min_reviewers} approvers required (got {approvers})"
            ));
        }
    }
}
