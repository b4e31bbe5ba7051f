//! # Pricelist Architecture
//!
//! Pricelist is a **UI-agnostic record store** for priced products. The terminal
//! client in `cli/` is one consumer of the library; nothing below the API layer
//! knows that a terminal exists.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands, the interactive menu, colored output        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the in-memory PriceList and its Backend             │
//! │  - Dispatches to commands, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Load/save, add, delete, sort, search, bulk updates       │
//! │  - Operates on PriceList, no I/O assumptions                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model, codec, table                                        │
//! │  - Product / PriceList invariants (model.rs)                │
//! │  - `code;name;type;basePrice;discount` lines (codec.rs)     │
//! │  - Column-aligned rendering (table.rs)                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Backend trait: FileBackend, MemoryBackend                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! - Product codes are unique within a [`model::PriceList`].
//! - Every stored product has `base_price >= 0` and `0 <= discount <= 100`.
//! - `sale_price` is derived and is recomputed by every setter that touches
//!   its inputs. It is never persisted.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never calls
//! `std::process::exit`. Problems with individual records are returned as data
//! (warnings, [`codec::Rejection`]s, [`commands::Listing::NothingFound`]),
//! never as panics.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage backends
//! - [`model`]: `Product` and `PriceList`
//! - [`codec`]: Delimited text encoding
//! - [`table`]: Column-aligned table rendering
//! - [`validation`]: Range checks shared by the model and commands
//! - [`config`]: Configuration file
//! - [`init`]: Context wiring for clients
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
pub mod table;
pub mod validation;
