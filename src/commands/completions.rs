//! Shell completion generation.

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};

use vtube::cli::Cli;

/// `vtube completions <shell>`
pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "vtube", &mut io::stdout());
    Ok(())
}
