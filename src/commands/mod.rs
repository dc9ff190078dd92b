//! Subcommand handlers for the vtube binary.

pub mod browse;
pub mod completions;
pub mod config;
pub mod library;
pub mod watch;

use anyhow::{bail, Result};

/// Interactive screens need a real terminal.
pub(crate) fn ensure_tty() -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        bail!("vtube needs an interactive terminal (stdout is not a TTY)");
    }
    Ok(())
}
