use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PriceList;
use tracing::debug;

/// Removes every product with `code`. Finding none is reported, not an error.
pub fn run(list: &mut PriceList, code: u32) -> Result<CmdResult> {
    let removed = list.remove_where(|p| p.code() == code);
    let mut result = CmdResult::default();

    if removed.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No product with code {}",
            code
        )));
        return Ok(result);
    }

    debug!(code, removed = removed.len(), "Deleted product");
    for product in &removed {
        result.add_message(CmdMessage::success(format!(
            "Product deleted ({}): {}",
            product.code(),
            product.name
        )));
    }
    Ok(result.with_affected_products(removed))
}
