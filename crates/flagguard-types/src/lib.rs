//! Stable DTOs and IDs used across the flagguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for emitted diagnostics and run reports
//! - stable string IDs and codes for the three flag-lifecycle rules
//! - static descriptors a host tool can register with its reporting sink
//! - explain registry for remediation guidance
//! - canonical repo-relative source path handling

#![forbid(unsafe_code)]

pub mod descriptors;
pub mod diagnostic;
pub mod explain;
pub mod ids;
pub mod path;

pub use descriptors::{all_descriptors, descriptor, Descriptor};
pub use diagnostic::{
    Diagnostic, DiagnosticKind, FlagguardData, FlagguardReport, Location, ReportEnvelope,
    Severity, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use path::SourcePath;
