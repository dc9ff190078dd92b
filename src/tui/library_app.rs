//! Library screen
//!
//! Tabs for playlists, watch history, liked videos, and watch later.
//! Playlists can be created, opened, and deleted; opening one shows its
//! videos, which can be removed or played.

use anyhow::Result;
use chrono::Utc;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

use crate::catalog::{Catalog, NewPlaylist};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::tui::ui::{render_confirm_modal, render_help_modal};
use crate::tui::widgets::{render_footer_text, render_status_line, render_video_list, VideoRow};

/// Library tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Playlists,
    History,
    Liked,
    WatchLater,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Playlists, Tab::History, Tab::Liked, Tab::WatchLater];

    fn title(&self) -> &'static str {
        match self {
            Tab::Playlists => "Playlists",
            Tab::History => "History",
            Tab::Liked => "Liked Videos",
            Tab::WatchLater => "Watch Later",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// UI mode for the library screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mode {
    #[default]
    Normal,
    Help,
    ConfirmDeletePlaylist,
}

/// Why the screen exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryOutcome {
    Quit,
    Watch(u32),
}

/// Library screen state
pub struct LibraryApp {
    tab: Tab,
    mode: Mode,
    selected: usize,
    /// Playlist currently opened from the playlists tab
    open_playlist: Option<u32>,
    status: Option<String>,
}

impl LibraryApp {
    pub fn new() -> Self {
        Self {
            tab: Tab::Playlists,
            mode: Mode::Normal,
            selected: 0,
            open_playlist: None,
            status: None,
        }
    }

    /// Run until the user quits or picks a video.
    pub fn run(
        &mut self,
        app: &mut App,
        catalog: &mut Catalog,
        theme: &Theme,
    ) -> Result<LibraryOutcome> {
        loop {
            self.clamp_selection(catalog);
            app.draw(|frame| self.render(frame, catalog, theme))?;

            if let Some(event) = app.next_event()? {
                match event {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if let Some(outcome) = self.handle_key(key, catalog) {
                            return Ok(outcome);
                        }
                    }
                    Event::Mouse(mouse) => match mouse.kind {
                        MouseEventKind::ScrollDown => self.move_selection(1, catalog),
                        MouseEventKind::ScrollUp => self.move_selection(-1, catalog),
                        _ => {}
                    },
                    _ => {}
                }
            }
        }
    }

    /// Video ids of the current view (empty on the playlists tab itself).
    fn video_ids(&self, catalog: &Catalog) -> Vec<u32> {
        if let Some(playlist_id) = self.open_playlist {
            return catalog
                .playlists
                .get(playlist_id)
                .map(|p| p.video_ids.clone())
                .unwrap_or_default();
        }
        match self.tab {
            Tab::Playlists => Vec::new(),
            Tab::History => catalog.library.history().to_vec(),
            Tab::Liked => catalog.library.liked().to_vec(),
            Tab::WatchLater => catalog.library.watch_later().to_vec(),
        }
    }

    fn list_len(&self, catalog: &Catalog) -> usize {
        if self.tab == Tab::Playlists && self.open_playlist.is_none() {
            catalog.playlists.len()
        } else {
            self.video_ids(catalog).len()
        }
    }

    fn clamp_selection(&mut self, catalog: &Catalog) {
        let len = self.list_len(catalog);
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn move_selection(&mut self, delta: isize, catalog: &Catalog) {
        let len = self.list_len(catalog);
        if len == 0 {
            return;
        }
        let current = self.selected as isize;
        self.selected = (current + delta).clamp(0, len as isize - 1) as usize;
    }

    /// Handle one key press; `Some` ends the screen.
    fn handle_key(&mut self, key: KeyEvent, catalog: &mut Catalog) -> Option<LibraryOutcome> {
        self.status = None;

        match self.mode {
            Mode::Help => {
                self.mode = Mode::Normal;
                return None;
            }
            Mode::ConfirmDeletePlaylist => {
                self.handle_confirm_delete_key(key, catalog);
                return None;
            }
            Mode::Normal => {}
        }

        match key.code {
            KeyCode::Char('q') => return Some(LibraryOutcome::Quit),
            KeyCode::Esc => {
                if self.open_playlist.is_some() {
                    self.open_playlist = None;
                    self.selected = 0;
                } else {
                    return Some(LibraryOutcome::Quit);
                }
            }
            KeyCode::Char('?') => self.mode = Mode::Help,
            KeyCode::Tab => {
                self.tab = self.tab.next();
                self.open_playlist = None;
                self.selected = 0;
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = (c as usize) - ('1' as usize);
                self.tab = Tab::ALL[index];
                self.open_playlist = None;
                self.selected = 0;
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1, catalog),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1, catalog),
            KeyCode::Enter => return self.handle_enter(catalog),
            KeyCode::Char('n') if self.tab == Tab::Playlists && self.open_playlist.is_none() => {
                // Numbered default name, same scheme as the web client
                let name = format!("My Playlist {}", catalog.playlists.len() + 1);
                catalog.playlists.create(NewPlaylist {
                    name,
                    thumbnail: String::new(),
                    video_ids: Vec::new(),
                });
                self.status = Some("Playlist created successfully!".to_string());
            }
            KeyCode::Char('d') => {
                if self.open_playlist.is_some() {
                    self.remove_selected_from_playlist(catalog);
                } else if self.tab == Tab::Playlists && self.list_len(catalog) > 0 {
                    self.mode = Mode::ConfirmDeletePlaylist;
                }
            }
            _ => {}
        }
        None
    }

    fn handle_enter(&mut self, catalog: &Catalog) -> Option<LibraryOutcome> {
        if self.tab == Tab::Playlists && self.open_playlist.is_none() {
            if let Some(playlist) = catalog.playlists.all().get(self.selected) {
                self.open_playlist = Some(playlist.id);
                self.selected = 0;
            }
            return None;
        }
        self.video_ids(catalog)
            .get(self.selected)
            .copied()
            .map(LibraryOutcome::Watch)
    }

    fn handle_confirm_delete_key(&mut self, key: KeyEvent, catalog: &mut Catalog) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if let Some(playlist) = catalog.playlists.all().get(self.selected) {
                    let id = playlist.id;
                    self.status = match catalog.playlists.delete(id) {
                        Ok(()) => Some("Playlist deleted successfully!".to_string()),
                        Err(e) => Some(e.to_string()),
                    };
                }
                self.mode = Mode::Normal;
            }
            KeyCode::Char('n') | KeyCode::Esc => self.mode = Mode::Normal,
            _ => {}
        }
    }

    fn remove_selected_from_playlist(&mut self, catalog: &mut Catalog) {
        if let Some(playlist_id) = self.open_playlist {
            let ids = self.video_ids(catalog);
            if let Some(video_id) = ids.get(self.selected) {
                if catalog.playlists.remove_video(playlist_id, *video_id).is_ok() {
                    self.status = Some("Removed from playlist".to_string());
                }
            }
        }
    }

    fn render(&self, frame: &mut Frame, catalog: &Catalog, theme: &Theme) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.title())).collect();
        let tabs = Tabs::new(titles)
            .select(self.tab.index())
            .style(theme.text_secondary_style())
            .highlight_style(theme.accent_bold_style());
        frame.render_widget(tabs, chunks[0]);

        self.render_body(frame, chunks[1], catalog, theme);

        render_status_line(frame, chunks[2], self.status.as_deref().unwrap_or(""), theme);
        render_footer_text(frame, chunks[3], self.footer_text(), theme);

        match self.mode {
            Mode::Help => render_help_modal(frame, area, HELP_ENTRIES, theme),
            Mode::ConfirmDeletePlaylist => {
                render_confirm_modal(frame, area, "Delete this playlist?", theme)
            }
            Mode::Normal => {}
        }
    }

    fn render_body(&self, frame: &mut Frame, area: Rect, catalog: &Catalog, theme: &Theme) {
        if self.tab == Tab::Playlists && self.open_playlist.is_none() {
            self.render_playlists(frame, area, catalog, theme);
            return;
        }

        let now = Utc::now();
        let rows: Vec<VideoRow> = self
            .video_ids(catalog)
            .iter()
            .filter_map(|id| catalog.videos.get(*id).ok())
            .map(|v| VideoRow::from_video(v, now))
            .collect();

        if rows.is_empty() {
            let message = match self.tab {
                Tab::WatchLater => "  Nothing saved for later yet.",
                Tab::Liked => "  No liked videos yet.",
                Tab::History => "  No watch history yet.",
                Tab::Playlists => "  This playlist is empty.",
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    message,
                    theme.text_secondary_style(),
                ))),
                area,
            );
            return;
        }

        render_video_list(frame, area, &rows, Some(self.selected), theme);
    }

    fn render_playlists(&self, frame: &mut Frame, area: Rect, catalog: &Catalog, theme: &Theme) {
        let playlists = catalog.playlists.all();
        if playlists.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "  No playlists yet. Press n to create one.",
                    theme.text_secondary_style(),
                ))),
                area,
            );
            return;
        }

        let lines: Vec<Line> = playlists
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let active = i == self.selected;
                let marker = if active { "▍" } else { " " };
                Line::from(vec![
                    Span::styled(marker.to_string(), theme.accent_style()),
                    Span::styled(
                        p.name.clone(),
                        if active {
                            theme.selection_style()
                        } else {
                            theme.text_style()
                        },
                    ),
                    Span::styled(
                        format!("  {} video(s)", p.video_count),
                        theme.text_secondary_style(),
                    ),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn footer_text(&self) -> &'static str {
        if self.open_playlist.is_some() {
            "Enter: watch | d: remove from playlist | Esc: back | q: quit"
        } else if self.tab == Tab::Playlists {
            "Enter: open | n: new playlist | d: delete | Tab: next tab | ?: help | q: quit"
        } else {
            "Enter: watch | Tab: next tab | 1-4: jump to tab | ?: help | q: quit"
        }
    }
}

impl Default for LibraryApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyboard shortcuts shown in the help modal.
const HELP_ENTRIES: &[(&str, &str)] = &[
    ("Tab / 1-4", "Switch tab"),
    ("j / k", "Move selection"),
    ("Enter", "Open playlist / watch video"),
    ("n", "New playlist"),
    ("d", "Delete playlist / remove video"),
    ("Esc", "Back / quit"),
    ("q", "Quit"),
];
