//! Library command handler.

use std::time::Duration;

use anyhow::Result;

use vtube::catalog::Catalog;
use vtube::tui::{App, LibraryApp, LibraryOutcome};
use vtube::Config;

use super::browse::run_watch_loop;
use super::ensure_tty;

const LIBRARY_TICK: Duration = Duration::from_millis(250);

/// `vtube library`
pub fn handle_library() -> Result<()> {
    ensure_tty()?;
    let config = Config::load()?;
    let theme = config.theme();
    let mut catalog = Catalog::builtin()?;
    let mut library = LibraryApp::new();

    loop {
        let outcome = {
            let mut app = App::new(LIBRARY_TICK)?;
            library.run(&mut app, &mut catalog, &theme)?
        };

        match outcome {
            LibraryOutcome::Quit => return Ok(()),
            LibraryOutcome::Watch(id) => run_watch_loop(&mut catalog, id, &config, &theme)?,
        }
    }
}
