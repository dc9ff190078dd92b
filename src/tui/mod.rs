//! TUI (Text User Interface) module for vtube
//!
//! Terminal screens built on ratatui/crossterm: the browse feed, the watch
//! screen hosting the player, and the library. [`app::App`] owns the
//! terminal lifecycle shared by all of them.

pub mod app;
pub mod browse_app;
pub mod library_app;
pub mod theme;
pub mod ui;
pub mod watch_app;
pub mod widgets;

// Re-export screens and shared types for commands and external use
pub use app::App;
pub use browse_app::{BrowseApp, BrowseOutcome};
pub use library_app::{LibraryApp, LibraryOutcome};
pub use theme::{current_theme, Theme};
pub use watch_app::{WatchApp, WatchOutcome};
