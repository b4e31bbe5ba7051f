use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PriceList;
use crate::validation::validate_threshold;
use tracing::debug;

/// Deletes every product selling for less than `threshold`.
pub fn run(list: &mut PriceList, threshold: f64) -> Result<CmdResult> {
    validate_threshold(threshold)?;
    let removed = list.remove_where(|p| p.sale_price() < threshold);
    debug!(threshold, removed = removed.len(), "Pruned products");

    let mut result = CmdResult::default();
    if removed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No products priced below {:.2}",
            threshold
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Removed {} product(s) priced below {:.2}",
            removed.len(),
            threshold
        )));
    }
    Ok(result.with_affected_products(removed))
}
