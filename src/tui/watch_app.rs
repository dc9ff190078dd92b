//! Watch screen
//!
//! Hosts the playback controller over a simulated stream, plus the video
//! metadata block (title, counts, channel, description) and the up-next
//! rail. Player input is delegated to the `player::input` handlers; this
//! screen owns only page-level keys (help, rail navigation, like/save).

use std::time::Instant;

use anyhow::Result;
use chrono::Utc;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::catalog::{Catalog, CatalogError, Channel, Video};
use crate::config::Config;
use crate::format::{format_count, format_time_ago, format_views, truncate_text};
use crate::player::input::{handle_key_event, handle_mouse_event};
use crate::player::render::overlay::render_overlay;
use crate::player::render::surface::render_surface;
use crate::player::render::PlayerLayout;
use crate::player::{InputResult, PlayerController, SimClock};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::tui::ui::render_help_modal;
use crate::tui::widgets::{render_footer_text, render_status_line};

/// Up-next rail length.
const RELATED_LIMIT: usize = 10;

/// Collapsed description budget, in characters.
const DESCRIPTION_PREVIEW: usize = 200;

/// Why the watch screen exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchOutcome {
    /// Return to the previous screen
    Back,
    /// Switch to another video
    Watch(u32),
}

/// Watch screen state
pub struct WatchApp {
    video: Video,
    channel: Option<Channel>,
    related: Vec<Video>,
    controller: PlayerController<SimClock>,
    /// Last frame's player layout, shared with mouse hit-testing
    layout: PlayerLayout,
    seek_step: f64,
    show_help: bool,
    expanded_description: bool,
    liked: bool,
    disliked: bool,
    /// Whether the up-next rail has keyboard focus
    rail_focus: bool,
    rail_idx: usize,
    status: Option<String>,
}

impl WatchApp {
    /// Load a video and bind the player. Records the watch in the library
    /// and starts playback when the config says to autoplay.
    pub fn new(catalog: &mut Catalog, video_id: u32, config: &Config) -> Result<Self, CatalogError> {
        let video = catalog.videos.get(video_id)?.clone();
        let channel = catalog.channels.get(video.channel_id).ok().cloned();
        let related: Vec<Video> = catalog
            .videos
            .related(video_id, RELATED_LIMIT)
            .into_iter()
            .cloned()
            .collect();

        catalog.library.record_watch(video_id);

        let mut controller = PlayerController::new(SimClock::new(video.duration), config.volume);
        if config.autoplay {
            controller.play_pause();
        }

        Ok(Self {
            liked: catalog.library.is_liked(video_id),
            video,
            channel,
            related,
            controller,
            layout: PlayerLayout::compute(Rect::new(0, 0, 0, 0)),
            seek_step: config.seek_step,
            show_help: false,
            expanded_description: false,
            disliked: false,
            rail_focus: false,
            rail_idx: 0,
            status: None,
        })
    }

    /// Run until the user backs out or picks another video.
    pub fn run(
        &mut self,
        app: &mut App,
        catalog: &mut Catalog,
        theme: &Theme,
    ) -> Result<WatchOutcome> {
        loop {
            self.controller.tick(Instant::now());
            app.draw(|frame| self.render(frame, theme))?;

            if let Some(event) = app.next_event()? {
                let now = Instant::now();
                match event {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if let Some(outcome) = self.handle_key(key, catalog, now) {
                            return Ok(outcome);
                        }
                    }
                    Event::Mouse(mouse) => {
                        let layout = self.layout;
                        handle_mouse_event(mouse, &mut self.controller, &layout, now);
                    }
                    _ => {}
                }
            }
        }
    }

    /// Handle one key press; `Some` ends the screen.
    fn handle_key(
        &mut self,
        key: KeyEvent,
        catalog: &mut Catalog,
        now: Instant,
    ) -> Option<WatchOutcome> {
        self.status = None;

        // Help swallows the next key
        if self.show_help {
            self.show_help = false;
            return None;
        }

        match key.code {
            KeyCode::Char('?') => {
                self.show_help = true;
                return None;
            }
            KeyCode::Tab => {
                self.rail_focus = !self.rail_focus && !self.related.is_empty();
                return None;
            }
            KeyCode::Char('l') => {
                self.toggle_like(catalog);
                return None;
            }
            KeyCode::Char('x') => {
                self.disliked = !self.disliked;
                if self.disliked && self.liked {
                    self.liked = false;
                    catalog.library.toggle_liked(self.video.id);
                }
                return None;
            }
            KeyCode::Char('w') => {
                self.status = Some(if catalog.library.save_watch_later(self.video.id) {
                    "Video saved to Watch Later".to_string()
                } else {
                    "Already in Watch Later".to_string()
                });
                return None;
            }
            KeyCode::Char('o') => {
                self.expanded_description = !self.expanded_description;
                return None;
            }
            _ => {}
        }

        if self.rail_focus {
            match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    self.rail_idx = (self.rail_idx + 1).min(self.related.len().saturating_sub(1));
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.rail_idx = self.rail_idx.saturating_sub(1);
                }
                KeyCode::Enter => {
                    if let Some(next) = self.related.get(self.rail_idx) {
                        return Some(WatchOutcome::Watch(next.id));
                    }
                }
                KeyCode::Esc => self.rail_focus = false,
                KeyCode::Char('q') => return Some(WatchOutcome::Back),
                _ => {}
            }
            return None;
        }

        match handle_key_event(key, &mut self.controller, now, self.seek_step) {
            InputResult::Quit => Some(WatchOutcome::Back),
            InputResult::Continue => None,
        }
    }

    fn toggle_like(&mut self, catalog: &mut Catalog) {
        self.liked = catalog.library.toggle_liked(self.video.id);
        if self.liked && self.disliked {
            self.disliked = false;
        }
        self.status = Some(if self.liked {
            "Added to liked videos".to_string()
        } else {
            "Removed from liked videos".to_string()
        });
    }

    fn render(&mut self, frame: &mut Frame, theme: &Theme) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(55),
                Constraint::Min(6),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        // Player: surface, then overlay per the visibility machine
        self.layout = PlayerLayout::compute(chunks[0]);
        render_surface(frame, self.layout.video, &self.video, theme);
        render_overlay(frame, &self.layout, &self.controller, theme);

        // Metadata on the left, up-next on the right
        let lower = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(chunks[1]);
        self.render_metadata(frame, lower[0], theme);
        self.render_rail(frame, lower[1], theme);

        render_status_line(frame, chunks[2], self.status.as_deref().unwrap_or(""), theme);
        render_footer_text(frame, chunks[3], self.footer_text(), theme);

        if self.show_help {
            render_help_modal(frame, area, HELP_ENTRIES, theme);
        }
    }

    fn render_metadata(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let shown_likes = self.video.likes + u64::from(self.liked);
        let shown_dislikes = self.video.dislikes + u64::from(self.disliked);

        let mut lines = vec![
            Line::from(Span::styled(
                format!(" {}", self.video.title),
                theme.accent_bold_style(),
            )),
            Line::from(Span::styled(
                format!(
                    " {} • {}",
                    format_views(self.video.views),
                    format_time_ago(self.video.upload_date, Utc::now())
                ),
                theme.text_secondary_style(),
            )),
            Line::from(vec![
                Span::styled(
                    format!(" ▲ {}", format_count(shown_likes)),
                    if self.liked {
                        theme.accent_style()
                    } else {
                        theme.text_style()
                    },
                ),
                Span::styled(
                    format!("   ▼ {}", format_count(shown_dislikes)),
                    if self.disliked {
                        theme.accent_style()
                    } else {
                        theme.text_style()
                    },
                ),
            ]),
        ];

        if let Some(channel) = &self.channel {
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", channel.name), theme.text_style()),
                Span::styled(
                    format!("— {} subscribers", format_count(channel.subscribers)),
                    theme.text_secondary_style(),
                ),
            ]));
        }

        lines.push(Line::from(""));
        let description = if self.expanded_description {
            self.video.description.clone()
        } else {
            truncate_text(&self.video.description, DESCRIPTION_PREVIEW)
        };
        lines.push(Line::from(Span::styled(
            format!(" {}", description),
            theme.text_secondary_style(),
        )));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }

    fn render_rail(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines = vec![Line::from(Span::styled(
            " Up next",
            if self.rail_focus {
                theme.accent_bold_style()
            } else {
                theme.text_secondary_style()
            },
        ))];

        for (i, video) in self.related.iter().enumerate() {
            let active = self.rail_focus && i == self.rail_idx;
            let marker = if active { "▍" } else { " " };
            lines.push(Line::from(vec![
                Span::styled(marker.to_string(), theme.accent_style()),
                Span::styled(
                    video.title.clone(),
                    if active {
                        theme.selection_style()
                    } else {
                        theme.text_style()
                    },
                ),
                Span::styled(
                    format!("  {}", format_views(video.views)),
                    theme.text_secondary_style(),
                ),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn footer_text(&self) -> &'static str {
        if self.rail_focus {
            "j/k: move | Enter: watch | Tab/Esc: back to player"
        } else {
            "Space: play/pause | ←/→: seek | ↑/↓: volume | f: fullscreen | Tab: up next | ?: help | q: back"
        }
    }
}

/// Keyboard shortcuts shown in the help modal.
const HELP_ENTRIES: &[(&str, &str)] = &[
    ("Space", "Pause / resume"),
    ("← / →", "Seek back / forward"),
    ("Shift+←/→", "Seek by 5% of the video"),
    ("Home / End", "Jump to start / end"),
    ("↑ / ↓", "Volume up / down"),
    ("m", "Mute toggle"),
    ("f", "Fullscreen toggle"),
    ("l / x", "Like / dislike"),
    ("w", "Save to Watch Later"),
    ("o", "Expand description"),
    ("Tab", "Focus the up-next rail"),
    ("q / Esc", "Back"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Catalog, Config) {
        (Catalog::builtin().unwrap(), Config::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn new_loads_video_channel_and_related() {
        let (mut catalog, config) = setup();
        let app = WatchApp::new(&mut catalog, 1, &config).unwrap();
        assert_eq!(app.video.id, 1);
        assert!(app.channel.is_some());
        assert!(!app.related.is_empty());
        assert!(app.related.iter().all(|v| v.id != 1));
    }

    #[test]
    fn unknown_video_is_an_error() {
        let (mut catalog, config) = setup();
        let err = match WatchApp::new(&mut catalog, 999, &config) {
            Err(e) => e,
            Ok(_) => panic!("expected a lookup error"),
        };
        assert_eq!(err, CatalogError::VideoNotFound(999));
    }

    #[test]
    fn watching_records_history() {
        let (mut catalog, config) = setup();
        WatchApp::new(&mut catalog, 7, &config).unwrap();
        assert_eq!(catalog.library.history().first(), Some(&7));
    }

    #[test]
    fn autoplay_starts_playback() {
        let (mut catalog, config) = setup();
        let mut app = WatchApp::new(&mut catalog, 1, &config).unwrap();
        app.controller.tick(Instant::now());
        assert!(app.controller.state().playing);
    }

    #[test]
    fn no_autoplay_stays_paused() {
        let (mut catalog, mut config) = setup();
        config.autoplay = false;
        let mut app = WatchApp::new(&mut catalog, 1, &config).unwrap();
        app.controller.tick(Instant::now());
        assert!(!app.controller.state().playing);
    }

    #[test]
    fn like_toggles_and_clears_dislike() {
        let (mut catalog, config) = setup();
        // Video 1 is not in the seeded liked list
        let mut app = WatchApp::new(&mut catalog, 1, &config).unwrap();
        assert!(!app.liked);

        app.disliked = true;
        app.handle_key(press(KeyCode::Char('l')), &mut catalog, Instant::now());
        assert!(app.liked);
        assert!(!app.disliked);
        assert!(catalog.library.is_liked(1));
        assert_eq!(app.status.as_deref(), Some("Added to liked videos"));

        app.handle_key(press(KeyCode::Char('l')), &mut catalog, Instant::now());
        assert!(!app.liked);
        assert_eq!(app.status.as_deref(), Some("Removed from liked videos"));
    }

    #[test]
    fn rail_navigation_switches_video() {
        let (mut catalog, config) = setup();
        let mut app = WatchApp::new(&mut catalog, 1, &config).unwrap();

        app.handle_key(press(KeyCode::Tab), &mut catalog, Instant::now());
        assert!(app.rail_focus);
        app.handle_key(press(KeyCode::Down), &mut catalog, Instant::now());
        let outcome = app.handle_key(press(KeyCode::Enter), &mut catalog, Instant::now());

        let expected = app.related[1].id;
        assert_eq!(outcome, Some(WatchOutcome::Watch(expected)));
    }

    #[test]
    fn q_backs_out() {
        let (mut catalog, config) = setup();
        let mut app = WatchApp::new(&mut catalog, 1, &config).unwrap();
        assert_eq!(
            app.handle_key(press(KeyCode::Char('q')), &mut catalog, Instant::now()),
            Some(WatchOutcome::Back)
        );
    }

    #[test]
    fn help_swallows_next_key() {
        let (mut catalog, config) = setup();
        let mut app = WatchApp::new(&mut catalog, 1, &config).unwrap();
        app.handle_key(press(KeyCode::Char('?')), &mut catalog, Instant::now());
        assert!(app.show_help);

        // The next key only closes help; it must not quit
        let outcome = app.handle_key(press(KeyCode::Char('q')), &mut catalog, Instant::now());
        assert_eq!(outcome, None);
        assert!(!app.show_help);
    }

    #[test]
    fn watch_later_from_watch_screen() {
        let (mut catalog, config) = setup();
        let mut app = WatchApp::new(&mut catalog, 2, &config).unwrap();
        app.handle_key(press(KeyCode::Char('w')), &mut catalog, Instant::now());
        assert_eq!(catalog.library.watch_later(), &[2]);
    }

    #[test]
    fn description_expands_and_collapses() {
        let (mut catalog, config) = setup();
        let mut app = WatchApp::new(&mut catalog, 1, &config).unwrap();
        assert!(!app.expanded_description);
        app.handle_key(press(KeyCode::Char('o')), &mut catalog, Instant::now());
        assert!(app.expanded_description);
    }
}
