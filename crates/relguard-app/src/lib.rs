//! Use case orchestration for relguard.
//!
//! This crate provides the application layer: the batch validation use case
//! that coordinates the policy, domain, and report layers. It is
//! intentionally thin and IO-free; the CLI crate handles argument parsing
//! and the filesystem.

#![forbid(unsafe_code)]

mod render;
mod run;

pub use render::render_summary;
pub use run::{batch_exit_code, run_batch, serialize_report, BatchInput, BatchOutput, NamedScenario};
