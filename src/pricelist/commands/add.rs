use crate::commands::{CmdMessage, CmdResult, NewProduct};
use crate::error::{ConstraintViolation, Result};
use crate::model::{PriceList, Product};
use tracing::debug;

/// Validates and appends a product.
///
/// The code is checked first, so a duplicate is reported even when the
/// prices are also invalid. On any error the list is unchanged.
pub fn run(list: &mut PriceList, candidate: NewProduct) -> Result<CmdResult> {
    if list.contains_code(candidate.code) {
        return Err(ConstraintViolation::DuplicateCode(candidate.code).into());
    }

    let product = Product::new(
        candidate.code,
        candidate.name,
        candidate.kind,
        candidate.base_price,
        candidate.discount,
    )?;
    list.insert(product.clone())?;
    debug!(code = product.code(), "Added product");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product added ({}): {}",
        product.code(),
        product.name
    )));
    Ok(result.with_affected_products(vec![product]))
}
