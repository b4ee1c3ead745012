use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a flag diagnostic.
///
/// Identity fields:
/// - check_id
/// - code
/// - source path (if present)
/// - flag key (if present)
/// - enclosing method name
pub fn fingerprint_for_flag(
    check_id: &str,
    code: &str,
    source_path: Option<&str>,
    flag_key: Option<&str>,
    method_name: &str,
) -> String {
    let mut parts = vec![check_id, code];
    if let Some(p) = source_path {
        parts.push(p);
    }
    if let Some(k) = flag_key {
        parts.push(k);
    }
    parts.push(method_name);
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
