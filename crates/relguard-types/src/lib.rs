//! Stable DTOs for relguard run reports.
//!
//! This crate is intentionally boring:
//! - the per-scenario validation result (allowed flag + ordered violations)
//! - the batch report envelope written for CI consumption
//! - the run summary counts

#![forbid(unsafe_code)]

pub mod report;

pub use report::{
    ReportEnvelope, RunSummary, ScenarioOutcome, ToolMeta, ValidationResult, Verdict,
    SCHEMA_REPORT_V1,
};
