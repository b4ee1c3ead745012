use crate::checks::utils;
use crate::fingerprint::fingerprint_for_flag;
use crate::model::{ExpiryMarker, FlagAnnotationRecord};
use crate::policy::EffectiveConfig;
use flagguard_types::{ids, Diagnostic, DiagnosticKind};
use serde_json::json;

/// Returns `true` when the record carried the infinite marker and is settled:
/// either a diagnostic fired or the category permits the marker. Settled
/// records must not reach the deadline checks.
pub fn run(
    record: &FlagAnnotationRecord,
    cfg: &EffectiveConfig,
    out: &mut Vec<Diagnostic>,
) -> bool {
    if record.expiry != ExpiryMarker::Infinite {
        return false;
    }

    if record.category.forbids_infinite_expiry() {
        if let Some(policy) = cfg.check_policy(ids::CHECK_FLAG_ILLEGAL_INFINITE_EXPIRY) {
            if !utils::is_allowed(policy.allowlist(), record.flag_key.as_deref()) {
                let kind = DiagnosticKind::IllegalInfiniteExpiry;
                out.push(Diagnostic {
                    kind,
                    severity: policy.severity,
                    message: format!(
                        "The infinite expiry marker `NO_EXPIRE_DATE` cannot be set on a `{}` flag.\n\
                         Set an expiration date in the format \"yyyy-mm-dd\".",
                        record.category.name()
                    ),
                    location: record.location.clone(),
                    help: Some(
                        "Give the flag a concrete expiry date, or reclassify it as `Ops` or \
                         `Permission` if it must live forever."
                            .to_string(),
                    ),
                    fingerprint: Some(fingerprint_for_flag(
                        kind.check_id(),
                        kind.code(),
                        record.location.as_ref().map(|l| l.path.as_str()),
                        record.flag_key.as_deref(),
                        &record.method_name,
                    )),
                    data: json!({
                        "category": record.category.name(),
                        "owner": record.owner,
                        "flag_key": record.flag_key,
                        "method": record.method_name,
                    }),
                });
            }
        }
    }

    true
}
