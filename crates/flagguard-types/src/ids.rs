//! Stable identifiers for checks and diagnostic codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_FLAG_ILLEGAL_INFINITE_EXPIRY: &str = "flag.illegal_infinite_expiry";
pub const CHECK_FLAG_DEADLINE_EXPIRED: &str = "flag.deadline_expired";
pub const CHECK_FLAG_DEADLINE_SOON: &str = "flag.deadline_soon";

// Codes: flag.illegal_infinite_expiry
pub const CODE_INFINITE_EXPIRY_FORBIDDEN: &str = "infinite_expiry_forbidden";

// Codes: flag.deadline_expired
pub const CODE_EXPIRY_DATE_PASSED: &str = "expiry_date_passed";

// Codes: flag.deadline_soon
pub const CODE_EXPIRY_WITHIN_WINDOW: &str = "expiry_within_window";
