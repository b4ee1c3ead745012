use crate::model::{ExpiryMarker, FlagAnnotationRecord, FlagCategory};
use crate::policy::{CheckPolicy, EffectiveConfig, FailOn};
use flagguard_types::{Location, Severity, SourcePath};
use std::collections::BTreeMap;

pub fn record(category: FlagCategory, owner: &str, expiry: ExpiryMarker) -> FlagAnnotationRecord {
    FlagAnnotationRecord {
        category,
        owner: owner.to_string(),
        expiry,
        method_name: "useFlag".to_string(),
        flag_key: Some("awesome_feature".to_string()),
        location: Some(Location {
            path: SourcePath::new("src/Flags.kt"),
            line: Some(1),
            col: None,
        }),
    }
}

pub fn record_at(
    category: FlagCategory,
    owner: &str,
    expiry: ExpiryMarker,
    path: &str,
    line: u32,
) -> FlagAnnotationRecord {
    FlagAnnotationRecord {
        location: Some(Location {
            path: SourcePath::new(path),
            line: Some(line),
            col: None,
        }),
        ..record(category, owner, expiry)
    }
}

pub fn record_with_key(
    category: FlagCategory,
    owner: &str,
    expiry: ExpiryMarker,
    flag_key: Option<&str>,
) -> FlagAnnotationRecord {
    FlagAnnotationRecord {
        flag_key: flag_key.map(|k| k.to_string()),
        ..record(category, owner, expiry)
    }
}

pub fn config_with_check(check_id: &str, severity: Severity) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(check_id.to_string(), CheckPolicy::enabled(severity));
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_diagnostics: 200,
        checks,
    }
}

pub fn config_with_check_allow(
    check_id: &str,
    severity: Severity,
    allow: Vec<&str>,
) -> EffectiveConfig {
    let mut policy = CheckPolicy::enabled(severity);
    policy.allow = allow.into_iter().map(|s| s.to_string()).collect();

    let mut checks = BTreeMap::new();
    checks.insert(check_id.to_string(), policy);

    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_diagnostics: 200,
        checks,
    }
}
