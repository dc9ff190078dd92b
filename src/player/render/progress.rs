//! Progress bar rendering for the watch screen.
//!
//! While a seek drag is active the bar reflects the pending gesture target,
//! not the committed playback position.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::format::format_duration;
use crate::tui::theme::Theme;

use super::PlayerLayout;

/// Build the progress bar character array.
///
/// Returns `(bar_chars, filled_count)`: filled positions, the playhead
/// cell, and the empty remainder.
pub fn build_progress_chars(bar_width: usize, shown_time: f64, duration: f64) -> (Vec<char>, usize) {
    let progress = if duration > 0.0 {
        (shown_time / duration).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];
    for cell in bar.iter_mut().take(filled) {
        *cell = '━';
    }
    if filled < bar_width {
        bar[filled] = '⏺';
    }

    (bar, filled)
}

/// Render the progress row: bar plus `shown/total` time display.
pub fn render_progress(
    frame: &mut Frame,
    layout: &PlayerLayout,
    shown_time: f64,
    duration: f64,
    dragging: bool,
    theme: &Theme,
) {
    let (_, bar_width) = layout.bar_span();
    if bar_width == 0 {
        return;
    }

    let (bar, filled) = build_progress_chars(bar_width as usize, shown_time, duration);

    let filled_style = if dragging {
        Style::default().fg(theme.text_primary)
    } else {
        Style::default().fg(theme.accent)
    };

    let filled_str: String = bar[..filled].iter().collect();
    let playhead_str: String = bar.get(filled).map(|c| c.to_string()).unwrap_or_default();
    let rest_str: String = bar[(filled + 1).min(bar.len())..].iter().collect();

    let time_display = format!(
        " {}/{}",
        format_duration(shown_time),
        format_duration(duration)
    );

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(filled_str, filled_style),
        Span::styled(playhead_str, Style::default().fg(theme.text_primary)),
        Span::styled(rest_str, Style::default().fg(theme.text_secondary)),
        Span::styled(time_display, Style::default().fg(theme.text_secondary)),
    ]);

    frame.render_widget(Paragraph::new(line), layout.progress);
}

/// Render the separator line above the progress bar.
pub fn render_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
    let line: String = "─".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(theme.text_secondary)),
        area,
    );
}
