//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - purity and idempotence of `evaluate`
//! - stable violation ordering for arbitrary rule/event combinations
//! - the allowed flag tracking the violation list through `validate`

use crate::engine::{evaluate, validate};
use crate::model::{ChecksState, DeploymentEvent, EnvironmentRules};
use crate::test_support::policy_with;
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Ticket patterns covering the interesting cases: unset, empty, anchored,
/// unanchored, and one that does not compile.
fn arb_ticket_pattern() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("^JIRA-\\d+$".to_string())),
        Just(Some("JIRA".to_string())),
        Just(Some("([".to_string())),
    ]
}

fn arb_ticket_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("JIRA-123".to_string()),
        Just("TICKET-1".to_string()),
        Just("reopened-JIRA-7".to_string()),
    ]
}

fn arb_rules() -> impl Strategy<Value = EnvironmentRules> {
    let toggles = (
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(0u32..5),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
    );
    let thresholds = (
        arb_ticket_pattern(),
        proptest::option::of(any::<bool>()),
        proptest::option::of(0u64..600),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(0u32..5),
    );

    (toggles, thresholds).prop_map(|(t, h)| EnvironmentRules {
        tests_passed: t.0,
        artifact_signed: t.1,
        release_controlled: t.2,
        require_reviewers: t.3,
        min_reviewers: t.4,
        shared_infra_except_core: t.5,
        change_recorded: t.6,
        require_ticket: t.7,
        ticket_pattern: h.0,
        deployment_date_agreed: h.1,
        wait_timer_seconds: h.2,
        signed_off: h.3,
        retrospective_signoff: h.4,
        components_unchanged: h.5,
        rollback_instructions_present: h.6,
        max_deployments_per_day: h.7,
    })
}

fn arb_event() -> impl Strategy<Value = DeploymentEvent> {
    let flags = (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    );
    let rest = (
        0usize..4,
        arb_ticket_id(),
        0u64..600,
        any::<bool>(),
        0u32..6,
    );

    (flags, rest).prop_map(|(f, r)| DeploymentEvent {
        env: "prod".to_string(),
        checks: ChecksState { tests: f.0 },
        artifact_signed: f.1,
        release_controlled: f.2,
        approvers: (0..r.0).map(|i| format!("r{i}")).collect(),
        shared_infra: f.3,
        change_recorded: f.4,
        ticket_id: r.1,
        deployment_date_agreed: f.5,
        wait_elapsed_seconds: r.2,
        is_emergency: r.3,
        signed_off: f.6,
        components_changed_after_signoff: f.7,
        rollback_instructions_present: false,
        deployments_today: r.4,
    })
}

/// Canonical check order, by message prefix. Every violation the engine can
/// emit must map to exactly one slot.
fn rule_index(violation: &str) -> usize {
    const ORDER: [&str; 14] = [
        "Rule#1: tests required but not passed",
        "Rule#1: artifact must be signed",
        "Rule#1: release must be controlled",
        "Rule#1: at least ",
        "Rule#2: production cannot run on shared infra",
        "Rule#3: change must be recorded",
        "Rule#3: ticket id invalid/missing",
        "Rule#4: deployment date not agreed",
        "Rule#4: wait timer not elapsed",
        "Rule#5: missing required sign-off",
        "Rule#5: emergency path requires retrospective_signoff",
        "Rule#6: components changed after signoff",
        "Rule#7: rollback instructions must be present",
        "Max deployments per day exceeded",
    ];
    ORDER
        .iter()
        .position(|prefix| violation.starts_with(prefix))
        .unwrap_or_else(|| panic!("unrecognized violation message: {violation}"))
}

proptest! {
    #[test]
    fn empty_rule_set_never_violates(event in arb_event()) {
        let rules = EnvironmentRules::default();
        prop_assert!(evaluate(&rules, &event).is_empty());
    }

    #[test]
    fn evaluate_is_pure_and_idempotent(rules in arb_rules(), event in arb_event()) {
        let first = evaluate(&rules, &event);
        let second = evaluate(&rules, &event);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn violations_appear_in_canonical_order_without_duplicates(
        rules in arb_rules(),
        event in arb_event(),
    ) {
        let violations = evaluate(&rules, &event);
        let indexes: Vec<usize> = violations.iter().map(|v| rule_index(v)).collect();
        for pair in indexes.windows(2) {
            prop_assert!(pair[0] < pair[1], "out of order: {:?}", violations);
        }
    }

    #[test]
    fn allowed_iff_no_violations(rules in arb_rules(), event in arb_event()) {
        let policy = policy_with("prod", rules);
        let result = validate(&policy, &event);
        prop_assert_eq!(result.allowed, result.violations.is_empty());
        prop_assert!(result.error.is_none());
    }

    #[test]
    fn unresolved_environment_is_a_single_violation(
        rules in arb_rules(),
        event in arb_event(),
    ) {
        let policy = policy_with("prod", rules);
        let mut event = event;
        event.env = "staging".to_string();

        let result = validate(&policy, &event);
        prop_assert!(!result.allowed);
        prop_assert_eq!(result.violations, vec!["Unknown environment: staging".to_string()]);
    }
}
