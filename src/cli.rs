//! Command-line interface definitions.
//!
//! Kept in the library so `xtask` can generate man pages from the same
//! definitions the binary parses.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Terminal video library browser and player
#[derive(Debug, Parser)]
#[command(name = "vtube", version = Box::leak(crate::long_version().into_boxed_str()) as &'static str, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the home feed (the default when no command is given)
    Home,
    /// Search the catalog and browse the results
    Search {
        /// Search terms, matched against titles, descriptions, and
        /// channel names
        query: Vec<String>,
    },
    /// Watch a video by id
    Watch {
        /// Video id
        id: u32,
    },
    /// Browse a channel's uploads
    Channel {
        /// Channel id
        id: u32,
    },
    /// Open the library: playlists, history, liked, watch later
    Library,
    /// Show or edit the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Open the configuration file in $EDITOR
    Edit,
    /// Print the configuration file path
    Path,
    /// Add missing fields to the configuration file
    Migrate,
}
