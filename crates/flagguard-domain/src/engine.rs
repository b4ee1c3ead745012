use crate::checks;
use crate::context::EvaluationContext;
use crate::model::FlagAnnotationRecord;
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, SeverityCounts};
use flagguard_types::{Diagnostic, FlagguardData, Severity, Verdict};

/// Evaluate one record with the built-in policy.
///
/// The sole required entry point: a pure function of the record and the
/// context. At most one diagnostic fires per record today, but callers must
/// not assume exclusivity.
pub fn evaluate(record: &FlagAnnotationRecord, ctx: &EvaluationContext) -> Vec<Diagnostic> {
    evaluate_with(record, ctx, &EffectiveConfig::builtin())
}

/// Evaluate one record under an explicit check policy.
pub fn evaluate_with(
    record: &FlagAnnotationRecord,
    ctx: &EvaluationContext,
    cfg: &EffectiveConfig,
) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    checks::run_all(record, ctx, cfg, &mut out);
    out
}

/// Evaluate a whole run of records and fold the results into a report.
///
/// Records are independent; a diagnostic-free record contributes nothing but
/// its scan count.
pub fn evaluate_run(
    records: &[FlagAnnotationRecord],
    ctx: &EvaluationContext,
    cfg: &EffectiveConfig,
) -> DomainReport {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    for record in records {
        checks::run_all(record, ctx, cfg, &mut diagnostics);
    }

    // Deterministic ordering before truncation.
    diagnostics.sort_by(compare_diagnostics);

    let total = diagnostics.len() as u32;

    let mut emitted = diagnostics;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_diagnostics {
        emitted.truncate(cfg.max_diagnostics);
        truncated_reason = Some(format!(
            "diagnostics truncated to max_diagnostics={}",
            cfg.max_diagnostics
        ));
    }

    let verdict = compute_verdict(&emitted, cfg.fail_on);
    let counts = SeverityCounts::from_diagnostics(&emitted);

    let data = FlagguardData {
        profile: cfg.profile.clone(),
        records_scanned: records.len() as u32,
        diagnostics_total: total,
        diagnostics_emitted: emitted.len() as u32,
        truncated_reason,
    };

    DomainReport {
        verdict,
        diagnostics: emitted,
        data,
        counts,
    }
}

fn compute_verdict(diagnostics: &[Diagnostic], fail_on: FailOn) -> Verdict {
    let has_error = diagnostics.iter().any(|d| d.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = diagnostics.iter().any(|d| d.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

fn compare_diagnostics(a: &Diagnostic, b: &Diagnostic) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) location.path (missing last)
    // 3) location.line (missing last)
    // 4) check_id
    // 5) message
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let (ap, al) = match &a.location {
        Some(l) => (l.path.as_str(), l.line.unwrap_or(u32::MAX)),
        None => ("~", u32::MAX),
    };
    let (bp, bl) = match &b.location {
        Some(l) => (l.path.as_str(), l.line.unwrap_or(u32::MAX)),
        None => ("~", u32::MAX),
    };

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then(ap.cmp(bp))
        .then(al.cmp(&bl))
        .then(a.kind.check_id().cmp(b.kind.check_id()))
        .then(a.message.cmp(&b.message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExpiryMarker, FlagCategory};
    use crate::policy::CheckPolicy;
    use crate::test_support::{config_with_check, record, record_at};
    use flagguard_types::{ids, DiagnosticKind};
    use time::macros::date;

    #[test]
    fn evaluate_is_idempotent() {
        let rec = record(
            FlagCategory::Experiment,
            "bob",
            ExpiryMarker::Date(date!(2023 - 01 - 10)),
        );
        let ctx = EvaluationContext::at(date!(2023 - 01 - 20));
        let first = evaluate(&rec, &ctx);
        let second = evaluate(&rec, &ctx);
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].kind, DiagnosticKind::Expired);
    }

    #[test]
    fn run_verdict_fails_on_error_severity() {
        let rec = record(FlagCategory::WorkInProgress, "alice", ExpiryMarker::Infinite);
        let ctx = EvaluationContext::default();
        let report = evaluate_run(&[rec], &ctx, &EffectiveConfig::builtin());
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.counts.error, 1);
        assert_eq!(report.data.records_scanned, 1);
        assert_eq!(report.data.diagnostics_emitted, 1);
    }

    #[test]
    fn run_verdict_warn_becomes_fail_when_fail_on_warning() {
        let rec = record(
            FlagCategory::Experiment,
            "bob",
            ExpiryMarker::Date(date!(2023 - 01 - 10)),
        );
        let ctx = EvaluationContext::at(date!(2023 - 01 - 20));

        let mut cfg = config_with_check(ids::CHECK_FLAG_DEADLINE_EXPIRED, Severity::Warning);
        cfg.fail_on = FailOn::Warning;
        let report = evaluate_run(std::slice::from_ref(&rec), &ctx, &cfg);
        assert_eq!(report.verdict, Verdict::Fail);

        cfg.fail_on = FailOn::Error;
        let report = evaluate_run(&[rec], &ctx, &cfg);
        assert_eq!(report.verdict, Verdict::Warn);
    }

    #[test]
    fn run_passes_when_nothing_fires() {
        let rec = record(FlagCategory::Ops, "carol", ExpiryMarker::Infinite);
        let report = evaluate_run(
            &[rec],
            &EvaluationContext::default(),
            &EffectiveConfig::builtin(),
        );
        assert_eq!(report.verdict, Verdict::Pass);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn run_orders_by_severity_then_location() {
        let ctx = EvaluationContext::at(date!(2023 - 01 - 20));
        let records = vec![
            record_at(
                FlagCategory::Experiment,
                "bob",
                ExpiryMarker::Date(date!(2023 - 01 - 10)),
                "src/b.kt",
                20,
            ),
            record_at(
                FlagCategory::WorkInProgress,
                "alice",
                ExpiryMarker::Infinite,
                "src/z.kt",
                5,
            ),
            record_at(
                FlagCategory::Experiment,
                "bob",
                ExpiryMarker::Date(date!(2023 - 01 - 10)),
                "src/a.kt",
                3,
            ),
        ];

        let report = evaluate_run(&records, &ctx, &EffectiveConfig::builtin());
        let kinds: Vec<_> = report.diagnostics.iter().map(|d| d.kind).collect();
        // Error first despite being declared later; then warnings by path.
        assert_eq!(
            kinds,
            vec![
                DiagnosticKind::IllegalInfiniteExpiry,
                DiagnosticKind::Expired,
                DiagnosticKind::Expired,
            ]
        );
        let paths: Vec<_> = report
            .diagnostics
            .iter()
            .map(|d| d.location.as_ref().map(|l| l.path.as_str().to_string()))
            .collect();
        assert_eq!(
            paths,
            vec![
                Some("src/z.kt".to_string()),
                Some("src/a.kt".to_string()),
                Some("src/b.kt".to_string()),
            ]
        );
    }

    #[test]
    fn run_truncates_at_max_diagnostics() {
        let ctx = EvaluationContext::at(date!(2023 - 01 - 20));
        let records: Vec<_> = (0..5)
            .map(|i| {
                record_at(
                    FlagCategory::Experiment,
                    "bob",
                    ExpiryMarker::Date(date!(2023 - 01 - 10)),
                    &format!("src/{i}.kt"),
                    1,
                )
            })
            .collect();

        let mut cfg = EffectiveConfig::builtin();
        cfg.max_diagnostics = 2;
        let report = evaluate_run(&records, &ctx, &cfg);
        assert_eq!(report.data.diagnostics_total, 5);
        assert_eq!(report.data.diagnostics_emitted, 2);
        assert_eq!(report.diagnostics.len(), 2);
        assert!(report.data.truncated_reason.is_some());
    }

    #[test]
    fn disabled_check_emits_nothing() {
        let rec = record(
            FlagCategory::Experiment,
            "bob",
            ExpiryMarker::Date(date!(2023 - 01 - 10)),
        );
        let ctx = EvaluationContext::at(date!(2023 - 01 - 20));
        let mut cfg = EffectiveConfig::builtin();
        cfg.checks.insert(
            ids::CHECK_FLAG_DEADLINE_EXPIRED.to_string(),
            CheckPolicy::disabled(),
        );
        assert!(evaluate_with(&rec, &ctx, &cfg).is_empty());
    }
}
