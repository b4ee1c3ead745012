//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation
//! guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after annotation examples.
    pub examples: ExamplePair,
}

/// Before and after annotation examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Annotation that would trigger a finding.
    pub before: &'static str,
    /// Annotation that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    // Try check_id first, then code
    match identifier {
        // Check IDs
        ids::CHECK_FLAG_ILLEGAL_INFINITE_EXPIRY => Some(explain_illegal_infinite_expiry()),
        ids::CHECK_FLAG_DEADLINE_EXPIRED => Some(explain_deadline_expired()),
        ids::CHECK_FLAG_DEADLINE_SOON => Some(explain_deadline_soon()),

        // Codes
        ids::CODE_INFINITE_EXPIRY_FORBIDDEN => Some(explain_infinite_expiry_forbidden()),
        ids::CODE_EXPIRY_DATE_PASSED => Some(explain_expiry_date_passed()),
        ids::CODE_EXPIRY_WITHIN_WINDOW => Some(explain_expiry_within_window()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_FLAG_ILLEGAL_INFINITE_EXPIRY,
        ids::CHECK_FLAG_DEADLINE_EXPIRED,
        ids::CHECK_FLAG_DEADLINE_SOON,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_INFINITE_EXPIRY_FORBIDDEN,
        ids::CODE_EXPIRY_DATE_PASSED,
        ids::CODE_EXPIRY_WITHIN_WINDOW,
    ]
}

// --- Check-level explanations ---

fn explain_illegal_infinite_expiry() -> Explanation {
    Explanation {
        title: "Illegal Infinite Expiry",
        description: "\
Detects flag annotations that set the `NO_EXPIRE_DATE` marker in a category
that forbids it.

`WorkInProgress` and `Experiment` flags are transient by definition:
- A work-in-progress flag guards unfinished code and must go away with it
- An experiment flag exists to be measured and then decided
- Without a deadline, both silently become permanent configuration

`Ops` and `Permission` flags are long-lived controls and may legitimately
never expire.",
        remediation: "\
Set a concrete expiry date in `yyyy-mm-dd` form on the annotation:

    expiryDate = \"2026-10-01\"

If the flag genuinely needs to live forever, reclassify it as `Ops` or
`Permission` instead of keeping the infinite marker on a transient category.",
        examples: ExamplePair {
            before: r#"@FlagType.Experiment(
  owner = "alice",
  expiryDate = NO_EXPIRE_DATE,
)"#,
            after: r#"@FlagType.Experiment(
  owner = "alice",
  expiryDate = "2026-10-01",
)"#,
        },
    }
}

fn explain_deadline_expired() -> Explanation {
    Explanation {
        title: "Deadline Expired",
        description: "\
Detects flag annotations whose declared expiry date is already in the past.

An expired flag is usually dead weight:
- The guarded rollout or experiment has concluded
- The flag's branches bloat the code and confuse readers
- Flipping a forgotten flag years later is a production hazard

A flag counts as expired starting the day after its stated date; the stated
date itself is still within the warning band.",
        remediation: "\
Delete the flag and its annotation, removing the dead branch.

If the flag is still needed, renew the expiry date deliberately:

    expiryDate = \"2026-12-01\"

Records with an undefined owner or undefined expiry date are skipped; fill
both in to opt the flag into deadline checking.",
        examples: ExamplePair {
            before: r#"@FlagType.Experiment(
  owner = "bob",
  expiryDate = "2023-01-10",  // long past
)"#,
            after: r#"// Experiment concluded: flag and annotation deleted,
// winning branch inlined."#,
        },
    }
}

fn explain_deadline_soon() -> Explanation {
    Explanation {
        title: "Deadline Soon",
        description: "\
Detects flag annotations whose expiry date falls within the warning window
(7 days by default).

The warning exists so flag removal is planned work, not an emergency:
- The owner gets a heads-up while the context is still fresh
- Cleanup can ride a normal release instead of a hotfix

A current date exactly at `expiry - window` does not warn yet; the warning
band starts the day after the threshold and includes the expiry day itself.",
        remediation: "\
Schedule the flag's removal before the date passes, or renew the expiry date
after an explicit owner decision. Tune the window length via the
`warning_window_days` setting if a week is too short for your release cadence.",
        examples: ExamplePair {
            before: r#"@FlagType.Experiment(
  owner = "dave",
  expiryDate = "2023-02-01",  // a few days out
)"#,
            after: r#"@FlagType.Experiment(
  owner = "dave",
  expiryDate = "2023-05-01",  // renewed after review
)"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_infinite_expiry_forbidden() -> Explanation {
    // Same as the check, but framed as the specific code
    let mut exp = explain_illegal_infinite_expiry();
    exp.title = "Infinite Expiry Forbidden";
    exp
}

fn explain_expiry_date_passed() -> Explanation {
    let mut exp = explain_deadline_expired();
    exp.title = "Expiry Date Passed";
    exp
}

fn explain_expiry_within_window() -> Explanation {
    let mut exp = explain_deadline_soon();
    exp.title = "Expiry Within Warning Window";
    exp
}
