use flagguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn};
use flagguard_types::{descriptors, Severity};
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "strict" => strict_profile(),
        "warn" => warn_profile(),
        // default
        _ => standard_profile(),
    }
}

/// Every check at its descriptor's default severity: the infinite-marker
/// rule is an error, deadline rules warn.
fn standard_profile() -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    for d in descriptors::all_descriptors() {
        checks.insert(
            d.check_id.to_string(),
            CheckPolicy::enabled(d.default_severity),
        );
    }
    EffectiveConfig {
        profile: "standard".to_string(),
        fail_on: FailOn::Error,
        max_diagnostics: 200,
        checks,
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_diagnostics: 200,
        checks: uniform_checks(Severity::Error),
    }
}

fn warn_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "warn".to_string(),
        fail_on: FailOn::Warning,
        max_diagnostics: 200,
        checks: uniform_checks(Severity::Warning),
    }
}

fn uniform_checks(severity: Severity) -> BTreeMap<String, CheckPolicy> {
    let mut m = BTreeMap::new();
    for d in descriptors::all_descriptors() {
        m.insert(d.check_id.to_string(), CheckPolicy::enabled(severity));
    }
    m
}
