//! Browse screen
//!
//! The home feed: catalog videos as a navigable list with incremental
//! search and channel filtering. The search and channel pages are this
//! same screen seeded with a query or a channel filter; with a filter
//! active a channel header is shown above the list.

use anyhow::Result;
use chrono::Utc;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::catalog::Catalog;
use crate::format::format_count;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::tui::ui::{render_confirm_modal, render_help_modal};
use crate::tui::widgets::{render_footer_text, render_status_line, render_video_list, VideoRow};

/// UI mode for the browse screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Search mode - typing filters the feed
    Search,
    /// Channel filter mode - selecting a channel to filter by
    ChannelFilter,
    /// Help mode - showing keyboard shortcuts
    Help,
    /// Confirm delete mode
    ConfirmDelete,
}

/// Why the screen exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseOutcome {
    Quit,
    /// Open the watch screen for this video
    Watch(u32),
}

/// Browse screen state
pub struct BrowseApp {
    mode: Mode,
    /// Search input buffer (also the committed query in normal mode)
    search_input: String,
    /// Active channel filter
    channel_filter: Option<u32>,
    /// Cursor inside the channel filter menu (0 = all channels)
    channel_menu_idx: usize,
    /// Selected row in the visible list
    selected: usize,
    /// Transient action message shown in the status line
    status: Option<String>,
}

impl BrowseApp {
    pub fn new() -> Self {
        Self {
            mode: Mode::Normal,
            search_input: String::new(),
            channel_filter: None,
            channel_menu_idx: 0,
            selected: 0,
            status: None,
        }
    }

    /// Browse seeded with a search query (the search page).
    pub fn with_query(query: &str) -> Self {
        let mut app = Self::new();
        app.search_input = query.to_string();
        app
    }

    /// Browse seeded with a channel filter (the channel page).
    pub fn with_channel(channel_id: u32) -> Self {
        let mut app = Self::new();
        app.channel_filter = Some(channel_id);
        app
    }

    /// Run until the user quits or picks a video.
    pub fn run(
        &mut self,
        app: &mut App,
        catalog: &mut Catalog,
        theme: &Theme,
    ) -> Result<BrowseOutcome> {
        loop {
            self.clamp_selection(catalog);
            let snapshot = self.snapshot(catalog);
            app.draw(|frame| self.render(frame, catalog, &snapshot, theme))?;

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

    /// Ids of the videos the active query and filter leave visible.
    fn visible_ids(&self, catalog: &Catalog) -> Vec<u32> {
        catalog
            .videos
            .search(&self.search_input)
            .into_iter()
            .filter(|v| self.channel_filter.map_or(true, |id| v.channel_id == id))
            .map(|v| v.id)
            .collect()
    }

    /// Preformatted rows for the visible videos.
    fn snapshot(&self, catalog: &Catalog) -> Vec<VideoRow> {
        let now = Utc::now();
        let ids = self.visible_ids(catalog);
        catalog
            .videos
            .all()
            .iter()
            .filter(|v| ids.contains(&v.id))
            .map(|v| VideoRow::from_video(v, now))
            .collect()
    }

    fn selected_id(&self, catalog: &Catalog) -> Option<u32> {
        self.visible_ids(catalog).get(self.selected).copied()
    }

    fn clamp_selection(&mut self, catalog: &Catalog) {
        let len = self.visible_ids(catalog).len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn move_selection(&mut self, delta: isize, catalog: &Catalog) {
        let len = self.visible_ids(catalog).len();
        if len == 0 {
            return;
        }
        let current = self.selected as isize;
        self.selected = (current + delta).clamp(0, len as isize - 1) as usize;
    }

    /// Handle one key press; `Some` ends the screen.
    fn handle_key(&mut self, key: KeyEvent, catalog: &mut Catalog) -> Option<BrowseOutcome> {
        self.status = None;

        match self.mode {
            Mode::Help => {
                // Any key closes help
                self.mode = Mode::Normal;
                None
            }
            Mode::Search => {
                self.handle_search_key(key);
                None
            }
            Mode::ChannelFilter => {
                self.handle_channel_filter_key(key, catalog);
                None
            }
            Mode::ConfirmDelete => {
                self.handle_confirm_delete_key(key, catalog);
                None
            }
            Mode::Normal => self.handle_normal_key(key, catalog),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent, catalog: &mut Catalog) -> Option<BrowseOutcome> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(BrowseOutcome::Quit),
            KeyCode::Char('?') => self.mode = Mode::Help,
            KeyCode::Char('/') => {
                self.search_input.clear();
                self.mode = Mode::Search;
            }
            KeyCode::Char('c') => {
                self.channel_menu_idx = 0;
                self.mode = Mode::ChannelFilter;
            }
            KeyCode::Char('r') => {
                self.search_input.clear();
                self.channel_filter = None;
                self.status = Some("Filters cleared".to_string());
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1, catalog),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1, catalog),
            KeyCode::Char('g') | KeyCode::Home => self.selected = 0,
            KeyCode::Char('G') | KeyCode::End => {
                let len = self.visible_ids(catalog).len();
                self.selected = len.saturating_sub(1);
            }
            KeyCode::Enter => {
                if let Some(id) = self.selected_id(catalog) {
                    return Some(BrowseOutcome::Watch(id));
                }
            }
            KeyCode::Char('w') => {
                if let Some(id) = self.selected_id(catalog) {
                    self.status = Some(if catalog.library.save_watch_later(id) {
                        "Video saved to Watch Later".to_string()
                    } else {
                        "Already in Watch Later".to_string()
                    });
                }
            }
            KeyCode::Char('d') => {
                if self.selected_id(catalog).is_some() {
                    self.mode = Mode::ConfirmDelete;
                }
            }
            _ => {}
        }
        None
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.search_input.clear();
                self.mode = Mode::Normal;
            }
            KeyCode::Enter => self.mode = Mode::Normal,
            KeyCode::Backspace => {
                self.search_input.pop();
            }
            KeyCode::Char(c) => self.search_input.push(c),
            _ => {}
        }
    }

    fn handle_channel_filter_key(&mut self, key: KeyEvent, catalog: &Catalog) {
        let count = catalog.channels.all().len();
        match key.code {
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Down | KeyCode::Char('j') => {
                self.channel_menu_idx = (self.channel_menu_idx + 1).min(count);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.channel_menu_idx = self.channel_menu_idx.saturating_sub(1);
            }
            KeyCode::Enter => {
                // Index 0 is "all channels"
                self.channel_filter = if self.channel_menu_idx == 0 {
                    None
                } else {
                    catalog
                        .channels
                        .all()
                        .get(self.channel_menu_idx - 1)
                        .map(|c| c.id)
                };
                self.mode = Mode::Normal;
            }
            _ => {}
        }
    }

    fn handle_confirm_delete_key(&mut self, key: KeyEvent, catalog: &mut Catalog) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if let Some(id) = self.selected_id(catalog) {
                    self.status = match catalog.videos.delete(id) {
                        Ok(()) => Some("Video deleted".to_string()),
                        Err(e) => Some(e.to_string()),
                    };
                }
                self.mode = Mode::Normal;
            }
            KeyCode::Char('n') | KeyCode::Esc => self.mode = Mode::Normal,
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, catalog: &Catalog, rows: &[VideoRow], theme: &Theme) {
        let area = frame.area();
        let header_height = if self.channel_filter.is_some() { 3 } else { 1 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_header(frame, chunks[0], catalog, theme);

        if rows.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "  No videos match. Try adjusting your search.",
                theme.text_secondary_style(),
            )));
            frame.render_widget(empty, chunks[1]);
        } else {
            render_video_list(frame, chunks[1], rows, Some(self.selected), theme);
        }

        render_status_line(frame, chunks[2], &self.status_text(rows.len()), theme);
        render_footer_text(frame, chunks[3], self.footer_text(), theme);

        match self.mode {
            Mode::Help => render_help_modal(frame, area, HELP_ENTRIES, theme),
            Mode::ConfirmDelete => {
                render_confirm_modal(frame, area, "Delete this video from the catalog?", theme)
            }
            Mode::ChannelFilter => self.render_channel_menu(frame, area, catalog, theme),
            _ => {}
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, catalog: &Catalog, theme: &Theme) {
        match self.channel_filter.and_then(|id| catalog.channels.get(id).ok()) {
            Some(channel) => {
                let lines = vec![
                    Line::from(vec![
                        Span::styled(format!(" {} ", channel.name), theme.accent_bold_style()),
                        Span::styled(
                            format!("{} subscribers", format_count(channel.subscribers)),
                            theme.text_secondary_style(),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!(" {}", channel.description),
                        theme.text_secondary_style(),
                    )),
                    Line::from(""),
                ];
                frame.render_widget(Paragraph::new(lines), area);
            }
            None => {
                let title = Line::from(vec![
                    Span::styled(" vtube ", theme.accent_bold_style()),
                    Span::styled("— home", theme.text_secondary_style()),
                ]);
                frame.render_widget(Paragraph::new(title), area);
            }
        }
    }

    fn render_channel_menu(&self, frame: &mut Frame, area: Rect, catalog: &Catalog, theme: &Theme) {
        let channels = catalog.channels.all();
        let modal_width = 40.min(area.width.saturating_sub(4));
        let modal_height = (channels.len() as u16 + 3).min(area.height.saturating_sub(2));
        let x = area.x + (area.width.saturating_sub(modal_width)) / 2;
        let y = area.y + (area.height.saturating_sub(modal_height)) / 2;
        let modal_area = Rect::new(x, y, modal_width, modal_height);

        frame.render_widget(ratatui::widgets::Clear, modal_area);

        let mut lines = Vec::with_capacity(channels.len() + 1);
        let mark = |active: bool| if active { "▶ " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{}All channels", mark(self.channel_menu_idx == 0)),
            if self.channel_menu_idx == 0 {
                theme.accent_style()
            } else {
                theme.text_style()
            },
        )));
        for (i, channel) in channels.iter().enumerate() {
            let active = self.channel_menu_idx == i + 1;
            lines.push(Line::from(Span::styled(
                format!("{}{}", mark(active), channel.name),
                if active {
                    theme.accent_style()
                } else {
                    theme.text_style()
                },
            )));
        }

        let menu = Paragraph::new(lines).block(
            ratatui::widgets::Block::default()
                .borders(ratatui::widgets::Borders::ALL)
                .border_style(theme.accent_style())
                .title(" Channel "),
        );
        frame.render_widget(menu, modal_area);
    }

    fn status_text(&self, visible: usize) -> String {
        if let Some(status) = &self.status {
            return status.clone();
        }
        match self.mode {
            Mode::Search => format!(" /{}▏", self.search_input),
            _ if !self.search_input.is_empty() => {
                format!(" {} result(s) for \"{}\"", visible, self.search_input)
            }
            _ => format!(" {} video(s)", visible),
        }
    }

    fn footer_text(&self) -> &'static str {
        match self.mode {
            Mode::Search => "type to search | Enter: apply | Esc: cancel",
            Mode::ChannelFilter => "j/k: move | Enter: select | Esc: cancel",
            Mode::ConfirmDelete => "y: delete | n: cancel",
            _ => "Enter: watch | /: search | c: channel | w: watch later | d: delete | ?: help | q: quit",
        }
    }
}

impl Default for BrowseApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyboard shortcuts shown in the help modal.
const HELP_ENTRIES: &[(&str, &str)] = &[
    ("j / Down", "Move down"),
    ("k / Up", "Move up"),
    ("g / G", "Jump to top / bottom"),
    ("Enter", "Watch selected video"),
    ("/", "Search the feed"),
    ("c", "Filter by channel"),
    ("r", "Clear search and filter"),
    ("w", "Save to Watch Later"),
    ("d", "Delete video"),
    ("q / Esc", "Quit"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn visible_ids_unfiltered_is_whole_catalog() {
        let catalog = catalog();
        let app = BrowseApp::new();
        assert_eq!(app.visible_ids(&catalog).len(), catalog.videos.len());
    }

    #[test]
    fn query_filters_feed() {
        let catalog = catalog();
        let app = BrowseApp::with_query("rust");
        let ids = app.visible_ids(&catalog);
        assert!(!ids.is_empty());
        assert!(ids.len() < catalog.videos.len());
    }

    #[test]
    fn channel_seed_filters_feed() {
        let catalog = catalog();
        let app = BrowseApp::with_channel(3);
        let ids = app.visible_ids(&catalog);
        assert!(!ids.is_empty());
        for id in ids {
            assert_eq!(catalog.videos.get(id).unwrap().channel_id, 3);
        }
    }

    #[test]
    fn enter_returns_watch_outcome() {
        let mut catalog = catalog();
        let mut app = BrowseApp::new();
        let outcome = app.handle_key(press(KeyCode::Enter), &mut catalog);
        assert!(matches!(outcome, Some(BrowseOutcome::Watch(_))));
    }

    #[test]
    fn q_quits() {
        let mut catalog = catalog();
        let mut app = BrowseApp::new();
        assert_eq!(
            app.handle_key(press(KeyCode::Char('q')), &mut catalog),
            Some(BrowseOutcome::Quit)
        );
    }

    #[test]
    fn search_mode_collects_input_incrementally() {
        let mut catalog = catalog();
        let mut app = BrowseApp::new();
        app.handle_key(press(KeyCode::Char('/')), &mut catalog);
        assert_eq!(app.mode, Mode::Search);

        for c in "rust".chars() {
            app.handle_key(press(KeyCode::Char(c)), &mut catalog);
        }
        assert_eq!(app.search_input, "rust");
        // The filter applies while still typing
        assert!(app.visible_ids(&catalog).len() < catalog.videos.len());

        app.handle_key(press(KeyCode::Enter), &mut catalog);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.search_input, "rust");
    }

    #[test]
    fn search_escape_clears_query() {
        let mut catalog = catalog();
        let mut app = BrowseApp::with_query("rust");
        app.mode = Mode::Search;
        app.handle_key(press(KeyCode::Esc), &mut catalog);
        assert!(app.search_input.is_empty());
        assert_eq!(app.visible_ids(&catalog).len(), catalog.videos.len());
    }

    #[test]
    fn delete_flow_requires_confirmation() {
        let mut catalog = catalog();
        let before = catalog.videos.len();
        let mut app = BrowseApp::new();

        app.handle_key(press(KeyCode::Char('d')), &mut catalog);
        assert_eq!(app.mode, Mode::ConfirmDelete);
        app.handle_key(press(KeyCode::Char('n')), &mut catalog);
        assert_eq!(catalog.videos.len(), before);

        app.handle_key(press(KeyCode::Char('d')), &mut catalog);
        app.handle_key(press(KeyCode::Char('y')), &mut catalog);
        assert_eq!(catalog.videos.len(), before - 1);
    }

    #[test]
    fn watch_later_saves_and_reports_duplicates() {
        let mut catalog = catalog();
        let mut app = BrowseApp::new();
        app.handle_key(press(KeyCode::Char('w')), &mut catalog);
        assert_eq!(catalog.library.watch_later().len(), 1);
        assert_eq!(app.status.as_deref(), Some("Video saved to Watch Later"));

        app.handle_key(press(KeyCode::Char('w')), &mut catalog);
        assert_eq!(catalog.library.watch_later().len(), 1);
        assert_eq!(app.status.as_deref(), Some("Already in Watch Later"));
    }

    #[test]
    fn channel_menu_applies_filter() {
        let mut catalog = catalog();
        let mut app = BrowseApp::new();
        app.handle_key(press(KeyCode::Char('c')), &mut catalog);
        assert_eq!(app.mode, Mode::ChannelFilter);

        app.handle_key(press(KeyCode::Down), &mut catalog);
        app.handle_key(press(KeyCode::Enter), &mut catalog);
        assert_eq!(app.mode, Mode::Normal);
        let first_channel = catalog.channels.all()[0].id;
        assert_eq!(app.channel_filter, Some(first_channel));
    }

    #[test]
    fn selection_clamps_after_filtering() {
        let mut catalog = catalog();
        let mut app = BrowseApp::new();
        app.selected = catalog.videos.len() - 1;
        app.search_input = "rust".to_string();
        app.clamp_selection(&catalog);
        assert!(app.selected < app.visible_ids(&catalog).len());
    }

    #[test]
    fn help_closes_on_any_key() {
        let mut catalog = catalog();
        let mut app = BrowseApp::new();
        app.handle_key(press(KeyCode::Char('?')), &mut catalog);
        assert_eq!(app.mode, Mode::Help);
        app.handle_key(press(KeyCode::Char('x')), &mut catalog);
        assert_eq!(app.mode, Mode::Normal);
    }
}
