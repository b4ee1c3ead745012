use crate::checks::utils;
use crate::context::EvaluationContext;
use crate::fingerprint::fingerprint_for_flag;
use crate::model::{ExpiryMarker, FlagAnnotationRecord};
use crate::policy::EffectiveConfig;
use flagguard_types::{ids, Diagnostic, DiagnosticKind};
use serde_json::json;
use time::{Date, Duration};

/// Deadline checks: expired and expiring-soon.
///
/// Only records with a concrete expiry date and a defined owner are judged;
/// anything else is incremental annotation authoring, not an error.
///
/// Boundary policy (behaviorally significant): both comparisons are strict.
/// A current date exactly at `expiry - window` does not warn yet, and the
/// expiry day itself is still "soon". A flag counts as expired starting the
/// day after its stated date.
pub fn run(
    record: &FlagAnnotationRecord,
    ctx: &EvaluationContext,
    cfg: &EffectiveConfig,
    out: &mut Vec<Diagnostic>,
) {
    let ExpiryMarker::Date(expiry) = record.expiry else {
        return;
    };
    if !record.owner_defined() {
        return;
    }

    let current = ctx.resolved_current_date();
    let window = Duration::days(i64::from(ctx.warning_window_days));
    let Some(soon_threshold) = expiry.checked_sub(window) else {
        return;
    };

    if current <= soon_threshold {
        return;
    }

    if current > expiry {
        emit(record, expiry, ctx, DiagnosticKind::Expired, cfg, out);
    } else {
        emit(record, expiry, ctx, DiagnosticKind::ExpiringSoon, cfg, out);
    }
}

fn emit(
    record: &FlagAnnotationRecord,
    expiry: Date,
    ctx: &EvaluationContext,
    kind: DiagnosticKind,
    cfg: &EffectiveConfig,
    out: &mut Vec<Diagnostic>,
) {
    let check_id = match kind {
        DiagnosticKind::Expired => ids::CHECK_FLAG_DEADLINE_EXPIRED,
        _ => ids::CHECK_FLAG_DEADLINE_SOON,
    };
    let Some(policy) = cfg.check_policy(check_id) else {
        return;
    };
    if utils::is_allowed(policy.allowlist(), record.flag_key.as_deref()) {
        return;
    }

    let category = record.category.name();
    let date = utils::iso_date(expiry);
    let key = utils::key_segment(record.flag_key.as_deref());

    let (message, help) = match kind {
        DiagnosticKind::Expired => (
            format!(
                "The `{category}` flag created by owner `{owner}` has expired!\n\
                 Consider deleting it: the expiry date {date} has passed.\n\
                 The flag `key: {key}` is used in the `{method}` function.",
                owner = record.owner,
                method = record.method_name,
            ),
            "Delete the flag and its dead branch, or renew the expiry date after \
             an explicit owner decision.",
        ),
        _ => (
            format!(
                "The `{category}` flag owned by `{owner}` will expire soon!\n\
                 Consider deleting it: the expiry date {date} passes within {window} days.\n\
                 The flag `key: {key}` is used in the `{method}` function.",
                owner = record.owner,
                window = ctx.warning_window_days,
                method = record.method_name,
            ),
            "Schedule the flag's removal before the expiry date passes.",
        ),
    };

    out.push(Diagnostic {
        kind,
        severity: policy.severity,
        message,
        location: record.location.clone(),
        help: Some(help.to_string()),
        fingerprint: Some(fingerprint_for_flag(
            kind.check_id(),
            kind.code(),
            record.location.as_ref().map(|l| l.path.as_str()),
            record.flag_key.as_deref(),
            &record.method_name,
        )),
        data: json!({
            "category": category,
            "owner": record.owner,
            "expiry_date": date,
            "flag_key": record.flag_key,
            "method": record.method_name,
            "warning_window_days": ctx.warning_window_days,
        }),
    });
}
