//! UI rendering helpers for TUI
//!
//! Common layout helpers and modal overlays shared by the screens.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme::Theme;

/// Create a centered layout with the given constraints.
///
/// Returns the center area that can be used for content.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}

/// Render a centered help modal from (key, description) pairs.
pub fn render_help_modal(frame: &mut Frame, area: Rect, entries: &[(&str, &str)], theme: &Theme) {
    let modal_width = 56.min(area.width.saturating_sub(4));
    let modal_height = (entries.len() as u16 + 4).min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(modal_width)) / 2;
    let y = area.y + (area.height.saturating_sub(modal_height)) / 2;
    let modal_area = Rect::new(x, y, modal_width, modal_height);

    frame.render_widget(Clear, modal_area);

    let mut lines: Vec<Line> = Vec::with_capacity(entries.len() + 2);
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", key), theme.accent_style()),
            Span::styled((*desc).to_string(), theme.text_style()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        theme.text_secondary_style(),
    )));

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, modal_area);
}

/// Render a centered yes/no confirmation modal.
pub fn render_confirm_modal(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let modal_width = 50.min(area.width.saturating_sub(4));
    let modal_height = 7.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(modal_width)) / 2;
    let y = area.y + (area.height.saturating_sub(modal_height)) / 2;
    let modal_area = Rect::new(x, y, modal_width, modal_height);

    frame.render_widget(Clear, modal_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), theme.text_style())),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", theme.accent_style()),
            Span::styled(": confirm   ", theme.text_secondary_style()),
            Span::styled("n", theme.accent_style()),
            Span::styled("/", theme.text_secondary_style()),
            Span::styled("Esc", theme.accent_style()),
            Span::styled(": cancel", theme.text_secondary_style()),
        ]),
    ];

    let confirm = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error))
                .title(" Confirm "),
        );

    frame.render_widget(confirm, modal_area);
}
