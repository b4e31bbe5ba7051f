//! The interactive numbered menu.
//!
//! Reads one answer per line. Bad input is reported and the menu is shown
//! again; only end of input (or a failing terminal) ends the loop early.
//! Operation errors never leave the loop.

use super::render::{render_listing, render_messages};
use pricelist::api::{CmdMessage, CmdResult, NewProduct, PriceListApi, SortKey};
use pricelist::error::Result;
use pricelist::store::Backend;
use pricelist::validation::validate_percent;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const MENU: &str = "
--- Price list ---
1. Load from file
2. Show all
3. Add a product
4. Delete a product
5. Save to file
6. Sort by code
7. Sort by price
8. Find by code
9. Search name/type
10. Apply promotional discount
11. Remove products below a price
0. Exit
";

const INVALID_INPUT: &str = "Invalid input.";

/// One answer to a prompt.
enum Answer<T> {
    Value(T),
    Invalid,
    Eof,
}

/// What an action produced: a command outcome, or nothing because input ended.
type Outcome = Option<Result<CmdResult>>;

impl<T> Answer<T> {
    /// The value, or the outcome the action should end with.
    fn value(self) -> std::result::Result<T, Outcome> {
        match self {
            Answer::Value(v) => Ok(v),
            Answer::Invalid => Err(Some(Ok(rejected(INVALID_INPUT)))),
            Answer::Eof => Err(None),
        }
    }
}

fn rejected(text: impl Into<String>) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::error(text));
    result
}

/// Pulls the answer out of an [`Answer`], or returns early from the action.
macro_rules! answer {
    ($e:expr) => {
        match $e.value() {
            Ok(v) => v,
            Err(outcome) => return Ok(outcome),
        }
    };
}

pub struct Menu<'a, B: Backend, R, W> {
    api: &'a mut PriceListApi<B>,
    input: R,
    out: W,
}

impl<'a, B: Backend, R: BufRead, W: Write> Menu<'a, B, R, W> {
    pub fn new(api: &'a mut PriceListApi<B>, input: R, out: W) -> Self {
        Self { api, input, out }
    }

    pub fn run(mut self) -> Result<()> {
        loop {
            self.out.write_all(MENU.as_bytes())?;
            let choice = match self.ask_number::<u32>("Choose an action: ")? {
                Answer::Value(choice) => choice,
                Answer::Invalid => {
                    self.show(&rejected(INVALID_INPUT))?;
                    continue;
                }
                Answer::Eof => {
                    writeln!(self.out)?;
                    break;
                }
            };

            let outcome = match choice {
                0 => {
                    self.say(CmdMessage::info("Bye."))?;
                    break;
                }
                1 => Some(self.api.load()),
                2 => Some(self.api.list()),
                3 => self.add()?,
                4 => self.delete()?,
                5 => Some(self.api.save()),
                6 => Some(self.api.sort(SortKey::Code)),
                7 => Some(self.api.sort(SortKey::SalePrice)),
                8 => self.find()?,
                9 => self.search()?,
                10 => self.discount()?,
                11 => self.prune()?,
                _ => Some(Ok(rejected("Unknown command."))),
            };

            match outcome {
                Some(Ok(result)) => self.show(&result)?,
                Some(Err(e)) => self.say(CmdMessage::error(e.to_string()))?,
                None => {
                    writeln!(self.out)?;
                    break;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn add(&mut self) -> io::Result<Outcome> {
        let code = answer!(self.ask_number::<u32>("Product code: ")?);
        if self.api.has_code(code) {
            return Ok(Some(Ok(rejected(format!(
                "Product with code {} already exists.",
                code
            )))));
        }
        let name = answer!(self.ask_line("Name: ")?);
        let kind = answer!(self.ask_line("Type: ")?);
        let base_price = answer!(self.ask_number::<f64>("Base price: ")?);
        let discount = answer!(self.ask_number::<f64>("Discount (%): ")?);

        let product = NewProduct::new(code, name, kind, base_price, discount);
        Ok(Some(self.api.add(product)))
    }

    fn delete(&mut self) -> io::Result<Outcome> {
        let code = answer!(self.ask_number::<u32>("Code to delete: ")?);
        Ok(Some(self.api.delete(code)))
    }

    fn find(&mut self) -> io::Result<Outcome> {
        let code = answer!(self.ask_number::<u32>("Code to find: ")?);
        Ok(Some(self.api.find(code)))
    }

    fn search(&mut self) -> io::Result<Outcome> {
        let needle = answer!(self.ask_line("Text to search for in name and type: ")?);
        Ok(Some(self.api.search(&needle)))
    }

    fn discount(&mut self) -> io::Result<Outcome> {
        let percent = answer!(self.ask_number::<f64>("Promotional discount (%): ")?);
        if let Err(e) = validate_percent(percent) {
            return Ok(Some(Err(e.into())));
        }

        let count = match self.ask_number::<usize>("How many product types? ")? {
            Answer::Value(n) if n >= 1 => n,
            Answer::Eof => return Ok(None),
            _ => return Ok(Some(Ok(rejected("Invalid count.")))),
        };
        let mut types = Vec::with_capacity(count);
        for i in 1..=count {
            types.push(answer!(self.ask_line(&format!("Type {}: ", i))?));
        }
        Ok(Some(self.api.apply_discount(percent, &types)))
    }

    fn prune(&mut self) -> io::Result<Outcome> {
        let threshold = answer!(self.ask_number::<f64>("Price threshold: ")?);
        Ok(Some(self.api.prune(threshold)))
    }

    /// One line without its line ending, or `Eof`.
    fn ask_line(&mut self, prompt: &str) -> io::Result<Answer<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Answer::Eof);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Answer::Value(trimmed.to_string()))
    }

    fn ask_number<T: FromStr>(&mut self, prompt: &str) -> io::Result<Answer<T>> {
        Ok(match self.ask_line(prompt)? {
            Answer::Value(line) => match line.trim().parse() {
                Ok(v) => Answer::Value(v),
                Err(_) => Answer::Invalid,
            },
            Answer::Invalid => Answer::Invalid,
            Answer::Eof => Answer::Eof,
        })
    }

    fn show(&mut self, result: &CmdResult) -> io::Result<()> {
        if let Some(listing) = &result.listing {
            self.out.write_all(render_listing(listing).as_bytes())?;
        }
        self.out.write_all(render_messages(&result.messages).as_bytes())
    }

    fn say(&mut self, message: CmdMessage) -> io::Result<()> {
        self.out
            .write_all(render_messages(std::slice::from_ref(&message)).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricelist::store::memory::MemoryBackend;
    use std::io::Cursor;

    fn run_with(api: &mut PriceListApi<MemoryBackend>, input: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        Menu::new(api, Cursor::new(input.as_bytes()), &mut out)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn loaded(content: &str) -> PriceListApi<MemoryBackend> {
        let mut api = PriceListApi::new(MemoryBackend::with_content(content));
        api.load().unwrap();
        api
    }

    #[test]
    fn exit_and_eof_both_end_the_loop() {
        let mut api = PriceListApi::new(MemoryBackend::new());
        assert!(run_with(&mut api, "0\n").contains("Bye."));
        let out = run_with(&mut api, "");
        assert_eq!(out.matches("Choose an action").count(), 1);
    }

    #[test]
    fn invalid_and_unknown_choices_keep_the_loop_going() {
        let mut api = PriceListApi::new(MemoryBackend::new());
        let out = run_with(&mut api, "abc\n42\n0\n");
        assert!(out.contains(INVALID_INPUT));
        assert!(out.contains("Unknown command."));
        assert_eq!(out.matches("Choose an action").count(), 3);
    }

    #[test]
    fn load_then_show() {
        let mut api = PriceListApi::new(MemoryBackend::with_content("1;Hammer;Tools;12.5;10\n"));
        let out = run_with(&mut api, "1\n2\n0\n");
        assert!(out.contains("Loaded 1 records"));
        assert!(out.contains("Hammer"));
        assert!(out.contains("11.25"));
    }

    #[test]
    fn add_prompts_for_every_field_and_saves() {
        let mut api = PriceListApi::new(MemoryBackend::new());
        let out = run_with(&mut api, "3\n7\nBig drill\nPower tools\n80\n25\n5\n0\n");
        assert!(out.contains("Product added (7): Big drill"));
        assert_eq!(
            api.backend().content(),
            Some("7;Big drill;Power tools;80;25\n")
        );
    }

    #[test]
    fn add_rejects_a_duplicate_code_before_asking_more() {
        let mut api = loaded("1;A;T;1;0\n");
        let out = run_with(&mut api, "3\n1\n0\n");
        assert!(out.contains("Product with code 1 already exists."));
        assert!(!out.contains("Name: "));
        assert_eq!(api.products().len(), 1);
    }

    #[test]
    fn add_reports_out_of_range_values() {
        let mut api = PriceListApi::new(MemoryBackend::new());
        let out = run_with(&mut api, "3\n1\nA\nT\n-3\n0\n0\n");
        assert!(out.contains("base price must not be negative"));
        assert!(api.products().is_empty());
    }

    #[test]
    fn delete_and_find() {
        let mut api = loaded("1;A;T;1;0\n2;B;T;2;0\n");
        let out = run_with(&mut api, "4\n1\n8\n1\n8\n2\n0\n");
        assert!(out.contains("Product deleted (1): A"));
        assert!(out.contains("No product with code 1"));
        assert_eq!(api.products().len(), 1);
    }

    #[test]
    fn search_with_no_match_draws_no_table() {
        let mut api = loaded("1;Hammer;Tools;10;0\n");
        let out = run_with(&mut api, "9\nzzz\n0\n");
        assert!(out.contains("Nothing found"));
        assert!(!out.contains("Base price"));
    }

    #[test]
    fn discount_asks_for_types() {
        let mut api = loaded("1;A;Tools;100;0\n2;B;Food;100;0\n3;C;Toys;100;0\n");
        let out = run_with(&mut api, "10\n20\n2\nTools\nToys\n0\n");
        assert!(out.contains("Type 2: "));
        assert!(out.contains("applied to 2 product(s)"));
        let discounts: Vec<f64> = api.products().iter().map(|p| p.discount()).collect();
        assert_eq!(discounts, vec![20.0, 0.0, 20.0]);
    }

    #[test]
    fn discount_out_of_range_stops_before_asking_for_types() {
        let mut api = loaded("1;A;Tools;100;0\n");
        let out = run_with(&mut api, "10\n120\n0\n");
        assert!(out.contains("discount must be between 0 and 100"));
        assert!(!out.contains("How many product types?"));
    }

    #[test]
    fn discount_needs_a_positive_count() {
        let mut api = loaded("1;A;Tools;100;0\n");
        let out = run_with(&mut api, "10\n20\n0\n0\n");
        assert!(out.contains("Invalid count."));
        assert_eq!(api.products()[0].discount(), 0.0);
    }

    #[test]
    fn sort_and_prune() {
        let mut api = loaded("3;C;T;30;0\n1;A;T;10;0\n2;B;T;2;0\n");
        let out = run_with(&mut api, "6\n11\n5\n0\n");
        assert!(out.contains("Sorted by code"));
        assert!(out.contains("Removed 1 product(s)"));
        let codes: Vec<u32> = api.products().iter().map(|p| p.code()).collect();
        assert_eq!(codes, vec![1, 3]);
    }

    #[test]
    fn eof_inside_an_action_ends_the_loop() {
        let mut api = PriceListApi::new(MemoryBackend::new());
        let out = run_with(&mut api, "3\n5\nName");
        assert!(out.contains("Type: "));
        assert!(api.products().is_empty());
    }

    #[test]
    fn load_failure_is_reported_and_the_menu_continues() {
        let mut api = PriceListApi::new(MemoryBackend::new());
        let out = run_with(&mut api, "1\n0\n");
        assert!(out.contains("Cannot access <memory>"));
        assert!(out.contains("Bye."));
    }
}
