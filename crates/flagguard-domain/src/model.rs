use flagguard_types::Location;
use time::Date;

/// Lifecycle category of the annotation under inspection.
///
/// Decided once at record-construction time by the host adapter; the engine
/// never re-derives it from qualified-name strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagCategory {
    WorkInProgress,
    Experiment,
    Ops,
    Permission,
}

impl FlagCategory {
    /// Display name used in diagnostic messages.
    pub fn name(self) -> &'static str {
        match self {
            FlagCategory::WorkInProgress => "WorkInProgress",
            FlagCategory::Experiment => "Experiment",
            FlagCategory::Ops => "Ops",
            FlagCategory::Permission => "Permission",
        }
    }

    /// Transient categories must carry a concrete expiry date.
    /// `Ops` and `Permission` are long-lived controls and may never expire.
    pub fn forbids_infinite_expiry(self) -> bool {
        matches!(self, FlagCategory::WorkInProgress | FlagCategory::Experiment)
    }
}

/// The raw expiry value on an annotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpiryMarker {
    /// Expiry never filled in. Skips all deadline checks.
    Undefined,
    /// Explicit "no expiration" sentinel.
    Infinite,
    /// A validated calendar date. Unparsable raw strings never get here;
    /// they fail in the record-construction layer.
    Date(Date),
}

/// Immutable fact supplied per annotation usage.
///
/// Constructed by the host (or `flagguard-record`); consumed one at a time
/// by the engine. Nothing here persists across evaluations.
#[derive(Clone, Debug)]
pub struct FlagAnnotationRecord {
    pub category: FlagCategory,

    /// Flag owner. Empty string means "not filled in yet".
    pub owner: String,

    pub expiry: ExpiryMarker,

    /// Name of the function the flag annotation decorates. Message text only.
    pub method_name: String,

    /// The declared flag's lookup key, from a sibling flag-declaration
    /// annotation. `None` when no sibling annotation was found.
    pub flag_key: Option<String>,

    /// Opaque source handle, passed through to diagnostics unchanged.
    pub location: Option<Location>,
}

impl FlagAnnotationRecord {
    pub fn owner_defined(&self) -> bool {
        !self.owner.is_empty()
    }
}
