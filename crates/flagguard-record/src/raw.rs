use flagguard_types::Location;

/// Sentinel for an owner attribute that was never filled in.
pub const OWNER_NOT_DEFINED: &str = "";

/// Sentinel for an expiry attribute that was never filled in.
pub const EXPIRY_DATE_NOT_DEFINED: &str = "";

/// Explicit "no expiration" sentinel authors write on long-lived flags.
pub const EXPIRY_DATE_INFINITE: &str = "NO_EXPIRE_DATE";

/// Raw facts the host extracted from one annotation usage.
///
/// Attribute values arrive exactly as written in source; nothing here has
/// been validated yet.
#[derive(Clone, Debug)]
pub struct RawAnnotationUsage {
    /// Fully qualified name of the flag annotation, e.g.
    /// `com.example.flags.FlagType.Experiment`.
    pub qualified_name: String,

    pub owner: String,
    pub expiry_date: String,

    /// Name of the function the annotation decorates.
    pub method_name: String,

    /// Key from the sibling flag-declaration annotation, when one exists.
    pub flag_key: Option<String>,

    pub location: Option<Location>,
}
