//! # Rendering
//!
//! Turns `CmdResult` pieces into terminal text. Layout comes from
//! [`pricelist::table`]; this module only adds colors and the wording for
//! empty results.
//!
//! Colors go through `colored`, which turns itself off when stdout is not a
//! terminal or `NO_COLOR` is set.

use colored::Colorize;
use pricelist::api::{CmdMessage, Listing, MessageLevel};
use pricelist::config::{PriceListConfig, KEYS};
use pricelist::table::render_table;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let styled = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

/// A table for `Table` (header-only when empty). `NothingFound` renders as
/// nothing; the command's own message reports it.
pub fn render_listing(listing: &Listing) -> String {
    match listing {
        Listing::Table(products) => render_table(products),
        Listing::NothingFound => String::new(),
    }
}

pub fn render_config(config: &PriceListConfig) -> String {
    KEYS.iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

pub fn print_listing(listing: &Listing) {
    print!("{}", render_listing(listing));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricelist::model::Product;

    #[test]
    fn messages_one_per_line() {
        colored::control::set_override(false);
        let out = render_messages(&[
            CmdMessage::success("Saved 2 records to price.csv"),
            CmdMessage::warning("Skipped line 3: expected 5 fields, found 4"),
        ]);
        assert_eq!(
            out,
            "Saved 2 records to price.csv\nSkipped line 3: expected 5 fields, found 4\n"
        );
    }

    #[test]
    fn empty_table_still_has_a_header() {
        let out = render_listing(&Listing::Table(vec![]));
        assert!(out.starts_with("Code"));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn nothing_found_draws_no_table() {
        assert_eq!(render_listing(&Listing::NothingFound), "");
    }

    #[test]
    fn table_rows_follow_the_header() {
        let p = Product::new(1, "Hammer", "Tools", 12.5, 10.0).unwrap();
        let out = render_listing(&Listing::Table(vec![p]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("11.25"));
    }

    #[test]
    fn config_lists_every_key() {
        let out = render_config(&PriceListConfig::default());
        assert_eq!(out, "data-file = price.csv\n");
    }
}
