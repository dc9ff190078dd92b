//! Video surface rendering.
//!
//! There is no decoder behind the player, so the surface is a title card:
//! black background, centered title, channel and source line. The overlay
//! draws on top of it.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::catalog::Video;
use crate::tui::theme::Theme;

/// Render the title card into the picture area.
pub fn render_surface(frame: &mut Frame, area: Rect, video: &Video, theme: &Theme) {
    if area.height == 0 {
        return;
    }

    let background = Paragraph::new("").style(Style::default().bg(Color::Black));
    frame.render_widget(background, area);

    // Center the card vertically
    let mid = area.y + area.height / 2;
    let title_row = Rect::new(area.x, mid.saturating_sub(1), area.width, 1);
    let channel_row = Rect::new(area.x, mid, area.width, 1);
    let source_row = Rect::new(area.x, mid + 1, area.width, 1);

    let title = Paragraph::new(Line::from(Span::styled(
        video.title.clone(),
        Style::default()
            .fg(theme.text_primary)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, title_row);

    let channel = Paragraph::new(Line::from(Span::styled(
        video.channel_name.clone(),
        Style::default().fg(theme.text_secondary).bg(Color::Black),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(channel, channel_row);

    if source_row.y < area.bottom() {
        let source = Paragraph::new(Line::from(Span::styled(
            video.thumbnail.clone(),
            Style::default().fg(theme.text_secondary).bg(Color::Black),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(source, source_row);
    }
}

/// Render the centered play badge shown while paused.
pub fn render_paused_badge(frame: &mut Frame, area: Rect, theme: &Theme) {
    if area.height < 3 {
        return;
    }
    let row = Rect::new(area.x, area.y + area.height / 2 + 2, area.width, 1);
    let badge = Paragraph::new(Line::from(Span::styled(
        "▶ ▶ ▶",
        Style::default().fg(theme.accent).bg(Color::Black),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(badge, row);
}
