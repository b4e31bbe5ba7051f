use crate::commands::{CmdMessage, CmdResult, Listing};
use crate::error::Result;
use crate::model::PriceList;

/// Literal, case-sensitive substring match against name or type.
/// An empty needle matches everything.
pub fn run(list: &PriceList, needle: &str) -> Result<CmdResult> {
    let matches: Vec<_> = list
        .products()
        .iter()
        .filter(|p| p.name.contains(needle) || p.kind.contains(needle))
        .cloned()
        .collect();

    let listing = Listing::from_matches(matches);
    let mut result = CmdResult::default();
    if listing == Listing::NothingFound {
        result.add_message(CmdMessage::info(format!("Nothing found for {:?}", needle)));
    }
    Ok(result.with_listing(listing))
}
