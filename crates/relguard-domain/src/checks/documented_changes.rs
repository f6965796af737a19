//! Rule#3: documented changes and ticket hygiene.

use crate::model::{DeploymentEvent, EnvironmentRules};
use regex::Regex;

pub fn run(rules: &EnvironmentRules, event: &DeploymentEvent, out: &mut Vec<String>) {
    if rules.change_recorded == Some(true) && !event.change_recorded {
        out.push("Rule#3: change must be recorded".to_string());
    }

    if rules.require_ticket == Some(true) {
        let ticket_pattern = rules.ticket_pattern.as_deref().unwrap_or("");
        if !valid_ticket(&event.ticket_id, ticket_pattern) {
            out.push(format!(
                "Rule#3: ticket id invalid/missing (pattern {ticket_pattern})"
            ));
        }
    }
}

/// Ticket validity:
/// - empty id is invalid regardless of pattern
/// - empty pattern accepts any non-empty id
/// - otherwise the pattern must match starting at position 0 of the id
///   (prefix-anchored, not full-string, not unanchored search)
/// - a pattern that fails to compile means invalid (fail closed)
pub(crate) fn valid_ticket(ticket_id: &str, pattern: &str) -> bool {
    if ticket_id.is_empty() {
        return false;
    }
    if pattern.is_empty() {
        return true;
    }
    match Regex::new(pattern) {
        // Leftmost-first search: if any match starts at 0, `find` returns it.
        Ok(re) => re.find(ticket_id).is_some_and(|m| m.start() == 0),
        Err(_) => false,
    }
}
