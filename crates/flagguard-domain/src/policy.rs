use crate::checks::utils;
use flagguard_types::{descriptors, Severity};
use globset::GlobSet;
use std::collections::BTreeMap;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

#[derive(Clone, Debug)]
pub struct CheckPolicy {
    pub enabled: bool,
    pub severity: Severity,
    /// Glob patterns over flag keys exempted from this check.
    pub allow: Vec<String>,
    // Compiled form of `allow`, built on first use. `allow` must not be
    // mutated after evaluation starts.
    allow_set: OnceLock<Option<GlobSet>>,
}

impl CheckPolicy {
    pub fn enabled(severity: Severity) -> Self {
        Self {
            enabled: true,
            severity,
            allow: Vec::new(),
            allow_set: OnceLock::new(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            severity: Severity::Info,
            allow: Vec::new(),
            allow_set: OnceLock::new(),
        }
    }

    /// The compiled allowlist, or `None` when `allow` is empty.
    ///
    /// Compiled once per policy, not per diagnostic.
    pub fn allowlist(&self) -> Option<&GlobSet> {
        self.allow_set
            .get_or_init(|| utils::build_allowlist(&self.allow))
            .as_ref()
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub max_diagnostics: usize,
    pub checks: BTreeMap<String, CheckPolicy>,
}

impl EffectiveConfig {
    /// Every check enabled at its descriptor's default severity.
    ///
    /// This is what the single-record `evaluate` entry point runs with when
    /// the host has no config of its own.
    pub fn builtin() -> Self {
        let mut checks = BTreeMap::new();
        for d in descriptors::all_descriptors() {
            checks.insert(
                d.check_id.to_string(),
                CheckPolicy::enabled(d.default_severity),
            );
        }
        Self {
            profile: "builtin".to_string(),
            fail_on: FailOn::Error,
            max_diagnostics: 200,
            checks,
        }
    }

    pub fn check_policy(&self, check_id: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_id).filter(|p| p.enabled)
    }
}
