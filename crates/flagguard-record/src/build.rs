use crate::raw::{
    RawAnnotationUsage, EXPIRY_DATE_INFINITE, EXPIRY_DATE_NOT_DEFINED,
};
use flagguard_domain::model::{ExpiryMarker, FlagAnnotationRecord, FlagCategory};
use thiserror::Error;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Error)]
pub enum RecordError {
    /// The qualified name does not belong to any known flag category.
    #[error("unknown flag annotation: {qualified_name}")]
    UnknownAnnotation { qualified_name: String },

    /// The expiry attribute was neither a sentinel nor a valid `yyyy-mm-dd`
    /// date. Fails this one usage; siblings are unaffected.
    #[error("malformed expiry date {raw:?} (expected yyyy-mm-dd)")]
    MalformedDate {
        raw: String,
        #[source]
        source: time::error::Parse,
    },
}

/// Map an annotation's qualified name onto the closed category enumeration.
///
/// Matched on the trailing segment, so any package prefix the host uses works.
pub fn category_for_annotation(qualified_name: &str) -> Option<FlagCategory> {
    let simple_name = qualified_name.rsplit('.').next().unwrap_or(qualified_name);
    match simple_name {
        "WorkInProgress" => Some(FlagCategory::WorkInProgress),
        "Experiment" => Some(FlagCategory::Experiment),
        "Ops" => Some(FlagCategory::Ops),
        "Permission" => Some(FlagCategory::Permission),
        _ => None,
    }
}

/// Validate one raw usage into an immutable record.
pub fn build_record(raw: &RawAnnotationUsage) -> Result<FlagAnnotationRecord, RecordError> {
    let Some(category) = category_for_annotation(&raw.qualified_name) else {
        return Err(RecordError::UnknownAnnotation {
            qualified_name: raw.qualified_name.clone(),
        });
    };

    Ok(FlagAnnotationRecord {
        category,
        owner: raw.owner.clone(),
        expiry: parse_expiry(&raw.expiry_date)?,
        method_name: raw.method_name.clone(),
        flag_key: raw.flag_key.clone(),
        location: raw.location.clone(),
    })
}

fn parse_expiry(raw: &str) -> Result<ExpiryMarker, RecordError> {
    match raw {
        EXPIRY_DATE_NOT_DEFINED => Ok(ExpiryMarker::Undefined),
        EXPIRY_DATE_INFINITE => Ok(ExpiryMarker::Infinite),
        other => Date::parse(other, DATE_FORMAT)
            .map(ExpiryMarker::Date)
            .map_err(|source| RecordError::MalformedDate {
                raw: other.to_string(),
                source,
            }),
    }
}

/// Records that validated, plus the per-usage failures, indexed into the
/// input slice.
#[derive(Debug, Default)]
pub struct BuildOutcome {
    pub records: Vec<FlagAnnotationRecord>,
    pub errors: Vec<(usize, RecordError)>,
}

/// Validate a batch of usages. One malformed usage never aborts the rest.
pub fn build_records(usages: &[RawAnnotationUsage]) -> BuildOutcome {
    let mut outcome = BuildOutcome::default();
    for (index, raw) in usages.iter().enumerate() {
        match build_record(raw) {
            Ok(record) => outcome.records.push(record),
            Err(err) => outcome.errors.push((index, err)),
        }
    }
    outcome
}
