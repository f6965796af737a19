//! Pure governance rule evaluation (no IO).
//!
//! Input: a resolved policy document and a deployment event, both constructed
//! elsewhere. Output: an ordered violation list folded into a validation
//! result. Evaluation never errors and never mutates the policy.

#![forbid(unsafe_code)]

pub mod model;
pub mod store;

mod engine;
pub mod checks;

#[cfg(test)]
mod proptest;
#[cfg(test)]
pub(crate) mod test_support;

pub use engine::{evaluate, validate};
