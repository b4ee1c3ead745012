use time::{Date, OffsetDateTime, UtcOffset};

/// Days before expiry during which a flag is reported as expiring soon.
pub const WARNING_WINDOW_DAYS: u32 = 7;

/// Per-run evaluation context.
///
/// Read-only during analysis and cheap to copy, so one value can be shared
/// across any number of concurrent record evaluations.
#[derive(Clone, Copy, Debug)]
pub struct EvaluationContext {
    /// Simulated current date. `None` means the real current date; tests
    /// inject a fixed date here for determinism.
    pub current_date: Option<Date>,

    /// Zone used to resolve the real current date. `None` means the system
    /// zone. The same zone is used for both sides of every comparison.
    pub time_zone: Option<UtcOffset>,

    pub warning_window_days: u32,
}

impl Default for EvaluationContext {
    fn default() -> Self {
        Self {
            current_date: None,
            time_zone: None,
            warning_window_days: WARNING_WINDOW_DAYS,
        }
    }
}

impl EvaluationContext {
    /// Fixed current date, default zone and window. The usual test setup.
    pub fn at(current_date: Date) -> Self {
        Self {
            current_date: Some(current_date),
            ..Self::default()
        }
    }

    /// The date all expiry comparisons run against.
    ///
    /// An explicit `current_date` wins. Otherwise: today in `time_zone`,
    /// falling back to the system offset, then UTC when the system offset
    /// cannot be determined (sound either way, since both comparison sides
    /// resolve through this one method).
    pub fn resolved_current_date(&self) -> Date {
        if let Some(date) = self.current_date {
            return date;
        }
        let now = OffsetDateTime::now_utc();
        let offset = self
            .time_zone
            .or_else(|| UtcOffset::current_local_offset().ok());
        match offset {
            Some(offset) => now.to_offset(offset).date(),
            None => now.date(),
        }
    }
}
