use crate::commands::{CmdResult, Listing};
use crate::error::Result;
use crate::model::PriceList;

/// The whole list, in its current order. An empty list is still a table.
pub fn run(list: &PriceList) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listing(Listing::Table(list.products().to_vec())))
}
