//! Policy and scenario document parsing.
//!
//! This crate is intentionally IO-free: it parses documents provided as
//! strings. A document that fails to deserialize into the expected shape is a
//! boundary error that fails the whole run before evaluation begins; the
//! evaluator never sees a partially-typed document. Defaulting happens only
//! for genuinely optional governance parameters and event fields, never for
//! structural shape.

#![forbid(unsafe_code)]

mod model;

use anyhow::Context;
use relguard_domain::model::DeploymentEvent;
use relguard_domain::store::PolicyDocument;

/// Parse a policy file (`policy.environments.<name>.rules`) into the domain
/// policy document.
pub fn parse_policy_json(input: &str) -> anyhow::Result<PolicyDocument> {
    let file: model::PolicyFileV1 =
        serde_json::from_str(input).context("malformed policy document")?;
    Ok(file.into_document())
}

/// Parse one deployment scenario into a typed event. The scenario's name
/// lives outside the document (file stem), so the whole object is the event.
pub fn parse_event_json(input: &str) -> anyhow::Result<DeploymentEvent> {
    let event: DeploymentEvent =
        serde_json::from_str(input).context("malformed input document")?;
    Ok(event)
}
