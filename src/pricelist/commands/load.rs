use crate::codec::{self, Decoded};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PriceList;
use crate::store::Backend;
use tracing::debug;

/// Replaces the list with the contents of `backend`.
///
/// Only an unreadable source is an error, and in that case the list is left
/// untouched. Bad lines are skipped and reported as warnings.
pub fn run<B: Backend>(list: &mut PriceList, backend: &B) -> Result<CmdResult> {
    let text = backend.read()?;
    let Decoded {
        products,
        rejections,
    } = codec::decode(&text);

    let count = products.len();
    list.replace_all(products);
    debug!(count, rejected = rejections.len(), "Loaded price list");

    let mut result = report(&rejections);
    result.add_message(CmdMessage::success(format!(
        "Loaded {} records from {}",
        count,
        backend.location()
    )));
    Ok(result.with_rejections(rejections))
}

/// Decodes `backend` without touching any list, reporting what a load would do.
pub fn check<B: Backend>(backend: &B) -> Result<CmdResult> {
    let text = backend.read()?;
    let decoded = codec::decode(&text);

    let mut result = report(&decoded.rejections);
    let summary = format!(
        "{}: {} valid, {} rejected",
        backend.location(),
        decoded.products.len(),
        decoded.rejections.len()
    );
    if decoded.rejections.is_empty() {
        result.add_message(CmdMessage::success(summary));
    } else {
        result.add_message(CmdMessage::warning(summary));
    }
    Ok(result.with_rejections(decoded.rejections))
}

fn report(rejections: &[codec::Rejection]) -> CmdResult {
    let mut result = CmdResult::default();
    for rejection in rejections {
        debug!(line = rejection.line, cause = %rejection.cause, "Skipping line");
        result.add_message(CmdMessage::warning(format!(
            "Skipped line {}: {}",
            rejection.line, rejection.cause
        )));
    }
    result
}
