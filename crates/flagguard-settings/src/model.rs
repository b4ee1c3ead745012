use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `flagguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FlagguardConfigV1 {
    /// Optional schema string for tooling (`flagguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// When to fail the check: `error` (default) or `warn`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// How many diagnostics to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_diagnostics: Option<u32>,

    /// Fixed UTC offset used to resolve "today", e.g. `"+09:00"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    /// Simulated current date (`yyyy-mm-dd`). Testing only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_date: Option<String>,

    /// Days before expiry during which flags are reported as expiring soon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_window_days: Option<u32>,

    /// Map of check_id -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Override preset severity: `info`, `warning`, `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    /// Flag keys (glob patterns) exempted from this check.
    #[serde(default)]
    pub allow: Vec<String>,
}
