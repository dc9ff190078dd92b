//! Watch command handler.

use anyhow::Result;

use vtube::catalog::Catalog;
use vtube::Config;

use super::browse::run_watch_loop;
use super::ensure_tty;

/// `vtube watch <id>`
pub fn handle_watch(id: u32) -> Result<()> {
    // Fail with a useful message before taking over the terminal
    let mut catalog = Catalog::builtin()?;
    catalog.videos.get(id)?;

    ensure_tty()?;
    let config = Config::load()?;
    let theme = config.theme();
    run_watch_loop(&mut catalog, id, &config, &theme)
}
