//! Shared terminal lifecycle for interactive screens.
//!
//! [`App`] owns the terminal: raw mode, alternate screen, and mouse capture
//! are enabled on construction and restored on drop, so a panicking screen
//! still leaves the user's shell usable.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

/// Terminal guard plus the event-poll cadence for one screen.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick: Duration,
}

impl App {
    /// Take over the terminal. `tick` is the poll timeout: how long
    /// [`App::next_event`] waits before returning `None` so the screen can
    /// advance its clocks and redraw.
    pub fn new(tick: Duration) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal, tick })
    }

    /// Draw one frame.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Wait up to one tick for an input event.
    pub fn next_event(&mut self) -> Result<Option<Event>> {
        if event::poll(self.tick)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Current terminal size as (columns, rows).
    pub fn size(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Best effort: nothing useful to do if restore fails
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
