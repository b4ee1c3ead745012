use crate::{model::FlagguardConfigV1, presets};
use anyhow::Context;
use flagguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn};
use flagguard_domain::EvaluationContext;
use flagguard_types::Severity;
use globset::Glob;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, UtcOffset};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const OFFSET_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[offset_hour sign:mandatory]:[offset_minute]");

/// Host-tool overrides. These win over `flagguard.toml` values.
///
/// `time_zone` and `current_date` are the two knobs the host surfaces to end
/// users; `current_date` exists for deterministic testing.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub time_zone: Option<String>,
    pub current_date: Option<String>,
    pub warning_window_days: Option<u32>,
    pub max_diagnostics: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub context: EvaluationContext,
}

pub fn resolve_config(
    cfg: FlagguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "standard".to_string());

    let mut effective = presets::preset(&profile);

    // max diagnostics
    if let Some(md) = overrides.max_diagnostics.or(cfg.max_diagnostics) {
        effective.max_diagnostics = md as usize;
    }

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = cc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {check_id}"))?;
        }
        if !cc.allow.is_empty() {
            validate_allowlist(check_id, &cc.allow)?;
            entry.allow = cc.allow.clone();
        }
    }

    // fail_on override from config
    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    let mut context = EvaluationContext::default();
    if let Some(tz) = overrides.time_zone.as_deref().or(cfg.time_zone.as_deref()) {
        context.time_zone = Some(parse_time_zone(tz)?);
    }
    if let Some(date_s) = overrides
        .current_date
        .as_deref()
        .or(cfg.current_date.as_deref())
    {
        context.current_date = Some(parse_current_date(date_s)?);
    }
    if let Some(window) = overrides.warning_window_days.or(cfg.warning_window_days) {
        context.warning_window_days = window;
    }

    Ok(ResolvedConfig { effective, context })
}

fn validate_allowlist(check_id: &str, patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern)
            .with_context(|| format!("invalid allow glob for {check_id}: {pattern}"))?;
    }
    Ok(())
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}

fn parse_time_zone(v: &str) -> anyhow::Result<UtcOffset> {
    UtcOffset::parse(v, OFFSET_FORMAT)
        .with_context(|| format!("invalid time_zone: {v} (expected a UTC offset like +09:00)"))
}

fn parse_current_date(v: &str) -> anyhow::Result<Date> {
    Date::parse(v, DATE_FORMAT)
        .with_context(|| format!("invalid current_date: {v} (expected yyyy-mm-dd)"))
}
