use globset::{Glob, GlobSet, GlobSetBuilder};
use time::Date;

pub fn build_allowlist(allow: &[String]) -> Option<GlobSet> {
    if allow.is_empty() {
        return None;
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in allow {
        // Treat allowlist entries as glob patterns (case-sensitive).
        let glob =
            Glob::new(pattern).expect("allowlist patterns must be validated in flagguard-settings");
        builder.add(glob);
    }
    Some(
        builder
            .build()
            .expect("allowlist patterns must be validated in flagguard-settings"),
    )
}

pub fn is_allowed(allow: Option<&GlobSet>, flag_key: Option<&str>) -> bool {
    match (allow, flag_key) {
        (Some(set), Some(key)) => set.is_match(key),
        _ => false,
    }
}

/// `yyyy-mm-dd`, the format expiry dates are declared in.
pub fn iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Flag key as it appears in message text: blank segment when absent.
pub fn key_segment(flag_key: Option<&str>) -> &str {
    flag_key.unwrap_or("")
}
