//! Pure flag-lifecycle policy evaluation (no IO).
//!
//! Input: flag annotation records constructed elsewhere, plus an evaluation
//! context (current date, time zone, warning window).
//! Output: diagnostics + verdict + summary data.

#![forbid(unsafe_code)]

pub mod context;
pub mod model;
pub mod policy;
pub mod report;

pub mod checks;
mod engine;
mod fingerprint;

#[cfg(test)]
mod proptests;
#[cfg(test)]
pub(crate) mod test_support;

pub use context::{EvaluationContext, WARNING_WINDOW_DAYS};
pub use engine::{evaluate, evaluate_run, evaluate_with};
