//! Static descriptors for the three flag-lifecycle rules.
//!
//! Hosts register these with their reporting sink once at startup. Nothing
//! here changes at runtime: a descriptor is configuration data, not logic.

use crate::diagnostic::{DiagnosticKind, Severity};

/// Registration metadata for one diagnostic kind.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    pub kind: DiagnosticKind,
    /// Stable dotted identifier, also the config key for per-check policy.
    pub check_id: &'static str,
    pub code: &'static str,
    /// Short human-readable title.
    pub title: &'static str,
    /// Severity applied when no per-check policy overrides it.
    pub default_severity: Severity,
    /// Relative ordering hint for hosts that rank findings (higher = louder).
    pub priority: u8,
    /// What the finding means and why it is reported.
    pub explanation: &'static str,
}

static DESCRIPTORS: [Descriptor; 3] = [
    Descriptor {
        kind: DiagnosticKind::IllegalInfiniteExpiry,
        check_id: crate::ids::CHECK_FLAG_ILLEGAL_INFINITE_EXPIRY,
        code: crate::ids::CODE_INFINITE_EXPIRY_FORBIDDEN,
        title: "Illegal infinite expiry on a flag annotation",
        default_severity: Severity::Error,
        priority: 4,
        explanation: "\
The `NO_EXPIRE_DATE` marker is only allowed on long-lived flag categories \
(`Ops`, `Permission`). Short-lived categories (`WorkInProgress`, `Experiment`) \
must carry a concrete expiry date so stale flags get cleaned up.",
    },
    Descriptor {
        kind: DiagnosticKind::Expired,
        check_id: crate::ids::CHECK_FLAG_DEADLINE_EXPIRED,
        code: crate::ids::CODE_EXPIRY_DATE_PASSED,
        title: "Flag annotation's expiry date is in the past",
        default_severity: Severity::Warning,
        priority: 6,
        explanation: "\
The expiry date declared on the flag annotation has already passed. The flag \
and its annotation should be removed, or the expiry date renewed after an \
explicit owner decision.",
    },
    Descriptor {
        kind: DiagnosticKind::ExpiringSoon,
        check_id: crate::ids::CHECK_FLAG_DEADLINE_SOON,
        code: crate::ids::CODE_EXPIRY_WITHIN_WINDOW,
        title: "Flag annotation will expire soon",
        default_severity: Severity::Warning,
        priority: 2,
        explanation: "\
The expiry date declared on the flag annotation falls within the warning \
window. Plan the flag's removal now instead of letting it expire silently.",
    },
];

/// Look up the descriptor for a diagnostic kind.
pub fn descriptor(kind: DiagnosticKind) -> &'static Descriptor {
    match kind {
        DiagnosticKind::IllegalInfiniteExpiry => &DESCRIPTORS[0],
        DiagnosticKind::Expired => &DESCRIPTORS[1],
        DiagnosticKind::ExpiringSoon => &DESCRIPTORS[2],
    }
}

/// All registered descriptors, in priority-agnostic declaration order.
pub fn all_descriptors() -> &'static [Descriptor] {
    &DESCRIPTORS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_lookup_matches_kind() {
        for d in all_descriptors() {
            let found = descriptor(d.kind);
            assert_eq!(found.check_id, d.check_id);
            assert_eq!(found.kind.check_id(), d.check_id);
            assert_eq!(found.kind.code(), d.code);
        }
    }

    #[test]
    fn infinite_expiry_is_an_error_by_default() {
        let d = descriptor(DiagnosticKind::IllegalInfiniteExpiry);
        assert_eq!(d.default_severity, Severity::Error);
    }

    #[test]
    fn deadline_rules_warn_by_default() {
        assert_eq!(
            descriptor(DiagnosticKind::Expired).default_severity,
            Severity::Warning
        );
        assert_eq!(
            descriptor(DiagnosticKind::ExpiringSoon).default_severity,
            Severity::Warning
        );
    }
}
