// crates/cli/src/lib.rs
pub mod args;
pub mod commands;
pub mod config;
pub mod error;
pub mod options;
pub mod presentation;

use std::io::Write;

use crate::args::Command;
use crate::config::Config;
use crate::error::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Execute a parsed command and write the rendered outcome to `out`.
///
/// # Errors
///
/// Propagates range parsing, command, rendering and write failures.
pub fn run(command: &Command, config: &Config, out: &mut impl Write) -> Result<()> {
    log::debug!("resolved {config:?}");
    let outcome = commands::execute(command)?;
    writeln!(out, "{}", presentation::render(&outcome, config.format)?)?;
    Ok(())
}
