//! Property-based tests for the domain crate.
//!
//! These tests pin down:
//! - the healthy / expiring-soon / expired partition of the date line
//! - idempotence of evaluation
//! - infinite-marker exclusivity per category

use crate::context::EvaluationContext;
use crate::engine::{evaluate, evaluate_run};
use crate::model::{ExpiryMarker, FlagAnnotationRecord, FlagCategory};
use crate::policy::EffectiveConfig;
use flagguard_types::DiagnosticKind;
use proptest::prelude::*;
use time::{Date, Duration, Month};

fn arb_date() -> impl Strategy<Value = Date> {
    (2000i32..2100, 1u8..=12, 1u8..=28).prop_map(|(y, m, d)| {
        Date::from_calendar_date(y, Month::try_from(m).unwrap(), d).unwrap()
    })
}

fn arb_category() -> impl Strategy<Value = FlagCategory> {
    prop_oneof![
        Just(FlagCategory::WorkInProgress),
        Just(FlagCategory::Experiment),
        Just(FlagCategory::Ops),
        Just(FlagCategory::Permission),
    ]
}

fn arb_owner() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::string::string_regex("[a-z]{1,12}").unwrap(),
    ]
}

fn dated_record(category: FlagCategory, owner: String, expiry: Date) -> FlagAnnotationRecord {
    FlagAnnotationRecord {
        category,
        owner,
        expiry: ExpiryMarker::Date(expiry),
        method_name: "useFlag".to_string(),
        flag_key: Some("some_flag".to_string()),
        location: None,
    }
}

proptest! {
    #[test]
    fn dated_records_partition_the_date_line(
        category in arb_category(),
        expiry in arb_date(),
        offset in -400i64..400,
        window in 0u32..60,
    ) {
        let current = expiry.checked_add(Duration::days(offset)).unwrap();
        let rec = dated_record(category, "owner".to_string(), expiry);
        let mut ctx = EvaluationContext::at(current);
        ctx.warning_window_days = window;

        let out = evaluate(&rec, &ctx);
        let soon_threshold = expiry.checked_sub(Duration::days(i64::from(window))).unwrap();

        if current <= soon_threshold {
            prop_assert!(out.is_empty());
        } else if current > expiry {
            prop_assert_eq!(out.len(), 1);
            prop_assert_eq!(out[0].kind, DiagnosticKind::Expired);
        } else {
            prop_assert_eq!(out.len(), 1);
            prop_assert_eq!(out[0].kind, DiagnosticKind::ExpiringSoon);
        }
    }

    #[test]
    fn evaluation_is_idempotent(
        category in arb_category(),
        owner in arb_owner(),
        expiry in arb_date(),
        offset in -30i64..30,
    ) {
        let current = expiry.checked_add(Duration::days(offset)).unwrap();
        let rec = dated_record(category, owner, expiry);
        let ctx = EvaluationContext::at(current);

        prop_assert_eq!(evaluate(&rec, &ctx), evaluate(&rec, &ctx));
    }

    #[test]
    fn infinite_marker_is_exclusive_per_category(
        category in arb_category(),
        owner in arb_owner(),
        current in arb_date(),
    ) {
        let rec = FlagAnnotationRecord {
            category,
            owner,
            expiry: ExpiryMarker::Infinite,
            method_name: "useFlag".to_string(),
            flag_key: None,
            location: None,
        };
        let out = evaluate(&rec, &EvaluationContext::at(current));

        if category.forbids_infinite_expiry() {
            prop_assert_eq!(out.len(), 1);
            prop_assert_eq!(out[0].kind, DiagnosticKind::IllegalInfiniteExpiry);
        } else {
            prop_assert!(out.is_empty());
        }
    }

    #[test]
    fn undefined_metadata_is_silent(
        category in arb_category(),
        expiry in arb_date(),
        current in arb_date(),
    ) {
        // Undefined expiry.
        let rec = FlagAnnotationRecord {
            category,
            owner: "owner".to_string(),
            expiry: ExpiryMarker::Undefined,
            method_name: "useFlag".to_string(),
            flag_key: None,
            location: None,
        };
        prop_assert!(evaluate(&rec, &EvaluationContext::at(current)).is_empty());

        // Undefined owner with a long-past date.
        let rec = dated_record(category, String::new(), expiry);
        prop_assert!(evaluate(&rec, &EvaluationContext::at(current)).is_empty());
    }

    #[test]
    fn run_reports_are_deterministic(
        expiries in prop::collection::vec(arb_date(), 0..8),
        current in arb_date(),
    ) {
        let records: Vec<_> = expiries
            .into_iter()
            .map(|e| dated_record(FlagCategory::Experiment, "owner".to_string(), e))
            .collect();
        let ctx = EvaluationContext::at(current);
        let cfg = EffectiveConfig::builtin();

        let a = evaluate_run(&records, &ctx, &cfg);
        let b = evaluate_run(&records, &ctx, &cfg);
        prop_assert_eq!(a.diagnostics, b.diagnostics);
        prop_assert_eq!(a.verdict, b.verdict);
    }
}
