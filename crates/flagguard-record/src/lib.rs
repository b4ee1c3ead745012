//! Record construction: raw annotation facts in, validated records out.
//!
//! The host's tree walker extracts attribute strings; this crate decides the
//! flag category once (never re-derived downstream), maps the sentinel
//! values, and validates date strings. A usage that fails here never reaches
//! the engine, and never aborts its siblings.

#![forbid(unsafe_code)]

mod build;
mod raw;

pub use build::{build_record, build_records, category_for_annotation, BuildOutcome, RecordError};
pub use raw::{
    RawAnnotationUsage, EXPIRY_DATE_INFINITE, EXPIRY_DATE_NOT_DEFINED, OWNER_NOT_DEFINED,
};
