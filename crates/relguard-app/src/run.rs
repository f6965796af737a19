//! The batch validation use case: one policy, many named scenarios.

use anyhow::Context;
use relguard_types::{
    ReportEnvelope, RunSummary, ScenarioOutcome, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

/// One scenario document with its identifying name (typically the file stem).
#[derive(Clone, Debug)]
pub struct NamedScenario {
    pub name: String,
    pub text: String,
}

/// Input for the batch validation use case.
#[derive(Clone, Debug)]
pub struct BatchInput<'a> {
    /// Policy file contents.
    pub policy_text: &'a str,
    /// Scenarios to validate, in run order.
    pub scenarios: Vec<NamedScenario>,
}

/// Output from the batch validation use case.
#[derive(Clone, Debug)]
pub struct BatchOutput {
    pub report: ReportEnvelope,
}

/// Run the batch: parse the policy, parse and validate every scenario,
/// assemble the report envelope.
///
/// A document that fails to parse aborts the whole run with a descriptive
/// error naming the offending scenario; no partial results are produced.
/// An empty scenario set is a usage error.
pub fn run_batch(input: BatchInput<'_>) -> anyhow::Result<BatchOutput> {
    let started_at = OffsetDateTime::now_utc();

    let policy = relguard_policy::parse_policy_json(input.policy_text).context("parse policy")?;

    if input.scenarios.is_empty() {
        anyhow::bail!("no scenarios to validate");
    }

    let mut scenarios = Vec::with_capacity(input.scenarios.len());
    let mut summary = RunSummary::default();

    for scenario in &input.scenarios {
        let event = relguard_policy::parse_event_json(&scenario.text)
            .with_context(|| format!("parse scenario '{}'", scenario.name))?;

        let result = relguard_domain::validate(&policy, &event);
        summary.total += 1;
        if result.allowed {
            summary.passed += 1;
        } else {
            summary.failed += 1;
        }
        scenarios.push(ScenarioOutcome {
            scenario: scenario.name.clone(),
            result,
        });
    }

    let verdict = if summary.failed == 0 {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "relguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        scenarios,
        summary,
    };

    Ok(BatchOutput { report })
}

/// Exit code contract: 0 when every scenario was allowed, 2 otherwise.
/// Runtime errors (missing or malformed documents) exit 1 at the CLI edge.
pub fn batch_exit_code(report: &ReportEnvelope) -> i32 {
    match report.verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}

pub fn serialize_report(report: &ReportEnvelope) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(report).context("serialize report")?;
    json.push('\n');
    Ok(json)
}
