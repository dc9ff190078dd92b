//! Browse command handlers: home feed, search results, and channel pages.
//!
//! All three run the same browse screen, seeded differently, and hand off
//! to the watch screen when the user picks a video. Picking an up-next
//! entry on the watch screen loops back into another watch.

use std::time::Duration;

use anyhow::Result;

use vtube::catalog::Catalog;
use vtube::tui::{App, BrowseApp, BrowseOutcome, Theme, WatchApp, WatchOutcome};
use vtube::Config;

use super::ensure_tty;

/// Browse polls slowly; the watch screen ticks fast enough for smooth
/// progress updates.
const BROWSE_TICK: Duration = Duration::from_millis(250);
const WATCH_TICK: Duration = Duration::from_millis(100);

/// `vtube` / `vtube home`
pub fn handle_home() -> Result<()> {
    run_browser(BrowseApp::new())
}

/// `vtube search <query>`
pub fn handle_search(query: &str) -> Result<()> {
    run_browser(BrowseApp::with_query(query))
}

/// `vtube channel <id>`
pub fn handle_channel(id: u32) -> Result<()> {
    // Fail with a useful message before taking over the terminal
    let catalog = Catalog::builtin()?;
    catalog.channels.get(id)?;
    run_browser(BrowseApp::with_channel(id))
}

fn run_browser(mut browser: BrowseApp) -> Result<()> {
    ensure_tty()?;
    let config = Config::load()?;
    let theme = config.theme();
    let mut catalog = Catalog::builtin()?;

    loop {
        let outcome = {
            let mut app = App::new(BROWSE_TICK)?;
            browser.run(&mut app, &mut catalog, &theme)?
        };

        match outcome {
            BrowseOutcome::Quit => return Ok(()),
            BrowseOutcome::Watch(id) => run_watch_loop(&mut catalog, id, &config, &theme)?,
        }
    }
}

/// Run the watch screen, following up-next switches until the user backs
/// out.
pub(crate) fn run_watch_loop(
    catalog: &mut Catalog,
    start_id: u32,
    config: &Config,
    theme: &Theme,
) -> Result<()> {
    let mut id = start_id;
    loop {
        let mut watch = WatchApp::new(catalog, id, config)?;
        let mut app = App::new(WATCH_TICK)?;
        match watch.run(&mut app, catalog, theme)? {
            WatchOutcome::Back => return Ok(()),
            WatchOutcome::Watch(next) => id = next,
        }
    }
}
