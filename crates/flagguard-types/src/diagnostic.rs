use crate::ids;
use crate::SourcePath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for flagguard run reports.
pub const SCHEMA_REPORT_V1: &str = "flagguard.report.v1";

/// Severity is intentionally small: it maps cleanly to CI signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Source location of the annotation usage a diagnostic refers to.
///
/// Opaque to the engine: constructed by the host, passed through unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub path: SourcePath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<u32>,
}

/// The three flag-lifecycle findings flagguard can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    IllegalInfiniteExpiry,
    Expired,
    ExpiringSoon,
}

impl DiagnosticKind {
    /// Stable dotted check identifier, usable as a registry/config key.
    pub fn check_id(self) -> &'static str {
        match self {
            DiagnosticKind::IllegalInfiniteExpiry => ids::CHECK_FLAG_ILLEGAL_INFINITE_EXPIRY,
            DiagnosticKind::Expired => ids::CHECK_FLAG_DEADLINE_EXPIRED,
            DiagnosticKind::ExpiringSoon => ids::CHECK_FLAG_DEADLINE_SOON,
        }
    }

    /// Short snake_case discriminator for the finding.
    pub fn code(self) -> &'static str {
        match self {
            DiagnosticKind::IllegalInfiniteExpiry => ids::CODE_INFINITE_EXPIRY_FORBIDDEN,
            DiagnosticKind::Expired => ids::CODE_EXPIRY_DATE_PASSED,
            DiagnosticKind::ExpiringSoon => ids::CODE_EXPIRY_WITHIN_WINDOW,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Stable identifier intended for dedup and trending. Typically a hash of:
    /// `check_id + code + source path + (line?) + salient fields`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Check-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Flagguard-specific summary payload for the run report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct FlagguardData {
    pub profile: String,

    pub records_scanned: u32,

    pub diagnostics_total: u32,
    pub diagnostics_emitted: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated_reason: Option<String>,
}

/// A generic report envelope.
///
/// Keeping this generic allows flagguard to embed tool-specific data while
/// still enforcing a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = FlagguardData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub diagnostics: Vec<Diagnostic>,
    pub data: TData,
}

pub type FlagguardReport = ReportEnvelope<FlagguardData>;
