//! Video list widget.
//!
//! Renders a feed of videos as aligned columns: title, channel, views,
//! age, and duration. Used by the browse screen, the library tabs, and
//! the up-next rail.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::catalog::Video;
use crate::format::{format_duration, format_time_ago, format_views};
use crate::tui::theme::Theme;

const CHANNEL_WIDTH: usize = 18;
const VIEWS_WIDTH: usize = 12;
const AGE_WIDTH: usize = 15;
const DURATION_WIDTH: usize = 8;

/// One displayable row, preformatted from a [`Video`].
#[derive(Debug, Clone)]
pub struct VideoRow {
    pub id: u32,
    pub title: String,
    pub channel: String,
    pub views: String,
    pub age: String,
    pub duration: String,
}

impl VideoRow {
    pub fn from_video(video: &Video, now: DateTime<Utc>) -> Self {
        Self {
            id: video.id,
            title: video.title.clone(),
            channel: video.channel_name.clone(),
            views: format_views(video.views),
            age: format_time_ago(video.upload_date, now),
            duration: format_duration(video.duration),
        }
    }
}

/// Truncate a string to a display-column budget, appending `…` when cut.
///
/// Width-aware, unlike the char-budget truncation in [`crate::format`]:
/// double-width characters count as two columns.
pub fn fit_width(text: &str, max_cols: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_cols {
        return text.to_string();
    }

    // Reserve one column for the ellipsis
    let budget = max_cols.saturating_sub(1);
    let mut cols = 0usize;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if cols + w > budget {
            break;
        }
        cols += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Pad or truncate to an exact column width.
fn cell(text: &str, width: usize) -> String {
    let fitted = fit_width(text, width);
    let used: usize = fitted.chars().map(|c| c.width().unwrap_or(0)).sum();
    format!("{}{}", fitted, " ".repeat(width.saturating_sub(used)))
}

/// Render the list with the given selection highlighted.
pub fn render_video_list(
    frame: &mut Frame,
    area: Rect,
    rows: &[VideoRow],
    selected: Option<usize>,
    theme: &Theme,
) {
    let fixed = CHANNEL_WIDTH + VIEWS_WIDTH + AGE_WIDTH + DURATION_WIDTH + 8;
    let title_width = (area.width as usize).saturating_sub(fixed).max(10);

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let line = Line::from(vec![
                Span::styled(
                    cell(&row.title, title_width),
                    Style::default().fg(theme.text_primary),
                ),
                Span::raw("  "),
                Span::styled(
                    cell(&row.channel, CHANNEL_WIDTH),
                    Style::default().fg(theme.text_secondary),
                ),
                Span::raw("  "),
                Span::styled(
                    cell(&row.views, VIEWS_WIDTH),
                    Style::default().fg(theme.text_secondary),
                ),
                Span::raw("  "),
                Span::styled(
                    cell(&row.age, AGE_WIDTH),
                    Style::default().fg(theme.text_secondary),
                ),
                Span::styled(
                    format!("{:>width$}", row.duration, width = DURATION_WIDTH),
                    Style::default().fg(theme.text_primary),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .highlight_style(theme.selection_style())
        .highlight_symbol("▍");

    let mut state = ListState::default();
    state.select(selected);
    frame.render_stateful_widget(list, area, &mut state);
}
