//! vtube binary entry point.

use anyhow::Result;
use clap::Parser;

use vtube::cli::{Cli, Command, ConfigAction};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Command::Home) => commands::browse::handle_home(),
        Some(Command::Search { query }) => commands::browse::handle_search(&query.join(" ")),
        Some(Command::Channel { id }) => commands::browse::handle_channel(id),
        Some(Command::Watch { id }) => commands::watch::handle_watch(id),
        Some(Command::Library) => commands::library::handle_library(),
        Some(Command::Config { action }) => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Edit => commands::config::handle_edit(),
            ConfigAction::Path => commands::config::handle_path(),
            ConfigAction::Migrate => commands::config::handle_migrate(),
        },
        Some(Command::Completions { shell }) => commands::completions::handle_completions(shell),
    }
}
