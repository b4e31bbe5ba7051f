//! # Storage Layer
//!
//! A price list lives in memory; a [`Backend`] is where it is loaded from and
//! saved to. Keeping that behind a trait lets the command and API layers be
//! tested against [`memory::MemoryBackend`] without touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: a single delimited text file on disk
//!   - Reads the whole file at once (invalid UTF-8 is replaced, not fatal)
//!   - Writes to a temporary sibling and renames it into place
//!
//! - [`memory::MemoryBackend`]: an in-memory string for tests
//!   - Can simulate a missing source or a failing write
//!
//! Backends deal in raw text only. Parsing and encoding live in
//! [`crate::codec`], so both backends see exactly the same format.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Raw text I/O for a price list source.
///
/// Any handle a backend opens must be closed before the call returns, on
/// success and on failure.
pub trait Backend {
    /// Read the whole source. Fails with `SourceUnavailable` if it cannot be opened.
    fn read(&self) -> Result<String>;

    /// Replace the whole source with `text`.
    fn write(&mut self, text: &str) -> Result<()>;

    /// Human-readable location, used in messages.
    fn location(&self) -> String;

    /// Whether there is anything to read. A missing source is not an error for
    /// clients that are about to create it.
    fn exists(&self) -> bool;
}
