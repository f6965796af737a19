use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for relguard batch reports.
pub const SCHEMA_REPORT_V1: &str = "relguard.report.v1";

/// The outcome of validating one deployment request against the policy.
///
/// `allowed` is always exactly `violations.is_empty()`; the field is carried
/// explicitly so consumers never have to re-derive it from the list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationResult {
    pub allowed: bool,

    /// Human-readable violation messages, in fixed rule order.
    pub violations: Vec<String>,

    /// Set when the result reflects a runtime fault rather than a policy
    /// decision (the harness marks such scenarios failed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,
}

impl ValidationResult {
    /// Build a result from a violation list, deriving the `allowed` flag.
    pub fn from_violations(violations: Vec<String>) -> Self {
        Self {
            allowed: violations.is_empty(),
            violations,
            error: None,
        }
    }

    /// A single-violation denial (used for unknown environments).
    pub fn denied(violation: String) -> Self {
        Self {
            allowed: false,
            violations: vec![violation],
            error: None,
        }
    }
}

/// One named scenario and its validation outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScenarioOutcome {
    /// Scenario name (file stem), kept separate from the evaluated fields.
    pub scenario: String,

    #[serde(flatten)]
    pub result: ValidationResult,
}

/// Verdict for a whole batch run: pass iff every scenario was allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RunSummary {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Envelope written to disk after a batch run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope {
    /// Always [`SCHEMA_REPORT_V1`].
    pub schema: String,
    pub tool: ToolMeta,

    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,

    pub verdict: Verdict,
    pub scenarios: Vec<ScenarioOutcome>,
    pub summary: RunSummary,
}
