use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PriceList;
use crate::store::Backend;
use tracing::debug;

/// Writes the list to `backend` in its current order.
pub fn run<B: Backend>(list: &PriceList, backend: &mut B) -> Result<CmdResult> {
    backend.write(&codec::encode(list.products()))?;
    debug!(count = list.len(), location = %backend.location(), "Saved price list");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved {} records to {}",
        list.len(),
        backend.location()
    )));
    Ok(result)
}
