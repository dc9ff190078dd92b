//! vtube — terminal video library browser and player
//!
//! A video catalog you can browse, search, and "watch" from the terminal:
//!
//! - `catalog`: canonical data model, boundary adapter, and in-memory
//!   CRUD stores (videos, channels, playlists, per-user library)
//! - `player`: the playback controller — media abstraction, mirrored
//!   state, transport controls with the auto-hiding overlay, input,
//!   rendering
//! - `tui`: the interactive screens (browse, watch, library) and their
//!   shared terminal plumbing
//! - `format`: display formatting for durations, counts, and timestamps
//! - `config`: TOML configuration with additive migration
//! - `cli`: clap command definitions (also consumed by xtask for man
//!   pages)

pub mod catalog;
pub mod cli;
pub mod config;
pub mod format;
pub mod player;
pub mod tui;

pub use catalog::Catalog;
pub use config::Config;

/// Version string shown by `--version`.
///
/// Dev builds carry the git hash and build date; builds with the
/// `release` feature get the clean crate version plus date.
pub fn long_version() -> String {
    let base = env!("CARGO_PKG_VERSION");
    let date = option_env!("VTUBE_BUILD_DATE").unwrap_or("unknown");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{} ({} {})", base, sha, date),
        None => format!("{} ({})", base, date),
    }
}
