//! # Pricelist CLI
//!
//! The binary is thin: the terminal client lives in `cli/`, and this file only
//! calls `cli::run()` and turns an error into exit code 1.
//!
//! ```text
//! cli/setup.rs     clap arguments
//! cli/commands.rs  one-shot subcommands: load, run one operation, save
//! cli/menu.rs      the interactive numbered menu
//! cli/render.rs    messages and tables as terminal text
//! ```
//!
//! Everything the client does goes through [`pricelist::api::PriceListApi`];
//! see the library docs for the layers below it.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
