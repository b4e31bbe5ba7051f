use crate::commands::{CmdMessage, CmdResult, Listing};
use crate::error::Result;
use crate::model::PriceList;

/// Exact lookup by code.
pub fn run(list: &PriceList, code: u32) -> Result<CmdResult> {
    match list.get(code) {
        Some(product) => {
            Ok(CmdResult::default().with_listing(Listing::Table(vec![product.clone()])))
        }
        None => {
            let mut result = CmdResult::default().with_listing(Listing::NothingFound);
            result.add_message(CmdMessage::info(format!("No product with code {}", code)));
            Ok(result)
        }
    }
}
