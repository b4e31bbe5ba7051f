use crate::commands::{CmdMessage, CmdResult, SortKey};
use crate::error::Result;
use crate::model::PriceList;

pub fn run(list: &mut PriceList, key: SortKey) -> Result<CmdResult> {
    let label = match key {
        SortKey::Code => {
            list.sort_by_code();
            "code"
        }
        SortKey::SalePrice => {
            list.sort_by_sale_price();
            "sale price"
        }
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Sorted by {}", label)));
    Ok(result)
}
