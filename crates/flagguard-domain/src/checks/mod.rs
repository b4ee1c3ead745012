use crate::context::EvaluationContext;
use crate::model::FlagAnnotationRecord;
use crate::policy::EffectiveConfig;
use flagguard_types::Diagnostic;

mod deadline;
mod infinite_expiry;
pub(crate) mod utils;


/// Run every check against one record, in rule order.
///
/// The infinite-marker rule settles the record either way: it fires for
/// forbidden categories and exempts permitted ones, so deadline checks only
/// ever see concrete or undefined expiry values.
pub fn run_all(
    record: &FlagAnnotationRecord,
    ctx: &EvaluationContext,
    cfg: &EffectiveConfig,
    out: &mut Vec<Diagnostic>,
) {
    if infinite_expiry::run(record, cfg, out) {
        return;
    }
    deadline::run(record, ctx, cfg, out);
}
