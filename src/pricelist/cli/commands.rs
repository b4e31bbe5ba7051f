//! # CLI Layer
//!
//! Parses arguments, wires up a [`PriceListContext`], dispatches to the API and
//! prints what comes back.
//!
//! - `run()`: entry point called by `main.rs`
//! - `handle_*()`: one handler per subcommand
//! - `load()` / `load_or_empty()` / `save()`: the load-operate-save frame
//!   shared by the one-shot subcommands
//!
//! Business rules live below the API; handlers only decide what to print and
//! whether to save.

use super::menu::Menu;
use super::render::{print_listing, print_messages, render_config};
use super::setup::{Cli, Commands};
use clap::Parser;
use pricelist::api::{self, CmdMessage, CmdResult, ConfigAction, MessageLevel, NewProduct};
use pricelist::error::Result;
use pricelist::init::{config_dir, initialize, PriceListContext};
use pricelist::store::Backend;
use std::io;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        // Runs without a price list.
        Some(Commands::Config { key, value }) => handle_config(key, value),
        command => dispatch(command, initialize(cli.file)?),
    }
}

fn dispatch(command: Option<Commands>, mut ctx: PriceListContext) -> Result<()> {
    match command {
        Some(Commands::Menu) => handle_menu(&mut ctx),
        Some(Commands::List) | None => handle_list(&mut ctx),
        Some(Commands::Add {
            code,
            name,
            kind,
            base_price,
            discount,
        }) => handle_add(&mut ctx, NewProduct::new(code, name, kind, base_price, discount)),
        Some(Commands::Delete { code }) => handle_delete(&mut ctx, code),
        Some(Commands::Sort { by }) => handle_sort(&mut ctx, by.into()),
        Some(Commands::Find { code }) => handle_find(&mut ctx, code),
        Some(Commands::Search { term }) => handle_search(&mut ctx, &term),
        Some(Commands::Discount { percent, types }) => handle_discount(&mut ctx, percent, &types),
        Some(Commands::Prune { threshold }) => handle_prune(&mut ctx, threshold),
        Some(Commands::Check) => handle_check(&ctx),
        Some(Commands::Config { key, value }) => handle_config(key, value),
    }
}

/// Logs go to stderr. `RUST_LOG` wins; otherwise `warn`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Loads the data file. A missing or unreadable file is `SourceUnavailable`.
/// Only the per-line warnings are printed.
fn load(ctx: &mut PriceListContext) -> Result<()> {
    let result = ctx.api.load()?;
    let warnings: Vec<CmdMessage> = result
        .messages
        .into_iter()
        .filter(|m| m.level == MessageLevel::Warning)
        .collect();
    print_messages(&warnings);
    Ok(())
}

/// Like [`load`], but a file that does not exist yet is an empty list.
/// Only `add` uses this, since it is the command that creates the file.
fn load_or_empty(ctx: &mut PriceListContext) -> Result<()> {
    if !ctx.api.backend().exists() {
        tracing::debug!(path = %ctx.api.backend().location(), "No data file yet");
        return Ok(());
    }
    load(ctx)
}

fn save(ctx: &mut PriceListContext) -> Result<()> {
    ctx.api.save().map(|_| ())
}

fn print_result(result: &CmdResult) {
    if let Some(listing) = &result.listing {
        print_listing(listing);
    }
    print_messages(&result.messages);
}

fn handle_menu(ctx: &mut PriceListContext) -> Result<()> {
    let stdin = io::stdin();
    Menu::new(&mut ctx.api, stdin.lock(), io::stdout()).run()
}

fn handle_list(ctx: &mut PriceListContext) -> Result<()> {
    load(ctx)?;
    let result = ctx.api.list()?;
    print_result(&result);
    Ok(())
}

fn handle_add(ctx: &mut PriceListContext, product: NewProduct) -> Result<()> {
    load_or_empty(ctx)?;
    let result = ctx.api.add(product)?;
    save(ctx)?;
    print_result(&result);
    Ok(())
}

fn handle_delete(ctx: &mut PriceListContext, code: u32) -> Result<()> {
    load(ctx)?;
    let result = ctx.api.delete(code)?;
    if !result.affected_products.is_empty() {
        save(ctx)?;
    }
    print_result(&result);
    Ok(())
}

fn handle_sort(ctx: &mut PriceListContext, key: api::SortKey) -> Result<()> {
    load(ctx)?;
    let result = ctx.api.sort(key)?;
    save(ctx)?;
    print_result(&result);
    Ok(())
}

fn handle_find(ctx: &mut PriceListContext, code: u32) -> Result<()> {
    load(ctx)?;
    let result = ctx.api.find(code)?;
    print_result(&result);
    Ok(())
}

fn handle_search(ctx: &mut PriceListContext, term: &str) -> Result<()> {
    load(ctx)?;
    let result = ctx.api.search(term)?;
    print_result(&result);
    Ok(())
}

fn handle_discount(ctx: &mut PriceListContext, percent: f64, types: &[String]) -> Result<()> {
    load(ctx)?;
    let result = ctx.api.apply_discount(percent, types)?;
    if !result.affected_products.is_empty() {
        save(ctx)?;
    }
    print_result(&result);
    Ok(())
}

fn handle_prune(ctx: &mut PriceListContext, threshold: f64) -> Result<()> {
    load(ctx)?;
    let result = ctx.api.prune(threshold)?;
    if !result.affected_products.is_empty() {
        save(ctx)?;
    }
    print_result(&result);
    Ok(())
}

fn handle_check(ctx: &PriceListContext) -> Result<()> {
    let result = ctx.api.check()?;
    print_result(&result);
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let dir = config_dir()?;
    let result = api::config(&dir, action)?;
    if let Some(config) = &result.config {
        print!("{}", render_config(config));
    }
    print_messages(&result.messages);
    Ok(())
}
