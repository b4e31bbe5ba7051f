//! # CLI Behavior
//!
//! One possible client of the library. This is the only place that knows about
//! terminal I/O, exit codes and colors.
//!
//! ## Naked Execution
//!
//! `pricelist` with no subcommand lists the data file, same as `pricelist list`.
//!
//! ## One-shot Subcommands
//!
//! Every subcommand loads the data file, runs one operation and, if the
//! operation changed anything, saves the file back. A data file that cannot be
//! read is an error, except for `add`, which treats a file that does not exist
//! yet as an empty list and creates it.
//! Lines skipped while loading are printed as warnings.
//!
//! ## Interactive Menu
//!
//! `pricelist menu` runs the numbered menu. It starts with an empty list;
//! loading and saving are explicit menu actions on the same data file.
//!
//! ## Data File
//!
//! `--file` wins, then `data-file` from the config, then `price.csv`.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch and per-subcommand handlers
//! - `menu`: the interactive loop
//! - `render`: messages, tables and config as text
//! - `setup`: argument parsing via clap

mod commands;
mod menu;
mod render;
pub mod setup;

pub use commands::run;
