//! Control overlay rendering.
//!
//! Drawn over the surface only while the overlay state machine says the
//! controls are visible. The volume flyout is rendered independently so it
//! can outlive (or be hidden before) the main overlay.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::format::format_duration;
use crate::player::controls::PlayerController;
use crate::player::media::MediaSource;
use crate::tui::theme::Theme;

use super::progress::{render_progress, render_separator};
use super::surface::render_paused_badge;
use super::PlayerLayout;

/// Render the whole overlay: separator, progress, controls row, paused
/// badge, and (independently) the volume flyout.
pub fn render_overlay<M: MediaSource>(
    frame: &mut Frame,
    layout: &PlayerLayout,
    controller: &PlayerController<M>,
    theme: &Theme,
) {
    if controller.overlay_visible() {
        render_separator(frame, layout.separator, theme);
        render_progress(
            frame,
            layout,
            controller.display_time(),
            controller.state().duration,
            controller.drag().dragging,
            theme,
        );
        render_controls_row(frame, layout, controller, theme);

        if !controller.state().playing {
            render_paused_badge(frame, layout.video, theme);
        }
    }

    // The flyout hangs on its own linger timer, not the overlay's
    if controller.flyout_visible() {
        render_volume_flyout(frame, layout, controller.state().volume, theme);
    }
}

fn render_controls_row<M: MediaSource>(
    frame: &mut Frame,
    layout: &PlayerLayout,
    controller: &PlayerController<M>,
    theme: &Theme,
) {
    let state = controller.state();

    // Left segment: state icon + committed time (the progress row shows
    // the gesture target; this one shows where playback actually is)
    let icon = if state.playing { "⏸" } else { "▶" };
    let left = Line::from(vec![
        Span::raw(" "),
        Span::styled(icon.to_string(), Style::default().fg(theme.text_primary)),
        Span::styled(
            format!(
                "  {} / {}",
                format_duration(state.current_time),
                format_duration(state.duration)
            ),
            Style::default().fg(theme.text_secondary),
        ),
        if state.fullscreen {
            Span::styled(" [fullscreen]", Style::default().fg(theme.accent))
        } else {
            Span::raw("")
        },
    ]);
    let left_area = Rect::new(
        layout.controls.x,
        layout.controls.y,
        layout.volume.x.saturating_sub(layout.controls.x),
        1,
    );
    frame.render_widget(Paragraph::new(left), left_area);

    // Volume cluster at its fixed layout position
    let pct = (state.volume * 100.0).round() as u32;
    let volume_label = if state.volume == 0.0 {
        "vol  --".to_string()
    } else {
        format!("vol {:3}%", pct)
    };
    let volume = Paragraph::new(Line::from(Span::styled(
        volume_label,
        Style::default().fg(theme.text_primary),
    )));
    frame.render_widget(volume, layout.volume);

    // Key hints, right-aligned
    let hints_x = layout.volume.right();
    let hints_area = Rect::new(
        hints_x,
        layout.controls.y,
        layout.controls.right().saturating_sub(hints_x),
        1,
    );
    let hints = Line::from(vec![
        Span::styled("f", Style::default().fg(theme.accent)),
        Span::styled(":full ", Style::default().fg(theme.text_secondary)),
        Span::styled("?", Style::default().fg(theme.accent)),
        Span::styled(":help ", Style::default().fg(theme.text_secondary)),
        Span::styled("q", Style::default().fg(theme.accent)),
        Span::styled(":back ", Style::default().fg(theme.text_secondary)),
    ]);
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Right), hints_area);
}

/// Render the vertical-slider stand-in: a small gauge popup above the
/// volume cluster.
fn render_volume_flyout(frame: &mut Frame, layout: &PlayerLayout, volume: f64, theme: &Theme) {
    let area = layout.flyout;
    if area.width < 4 || area.height < 3 {
        return;
    }

    frame.render_widget(Clear, area);

    let inner_width = (area.width - 2) as usize;
    let filled = ((volume.clamp(0.0, 1.0)) * inner_width as f64).round() as usize;
    let gauge: String = "█".repeat(filled) + &"░".repeat(inner_width.saturating_sub(filled));

    let popup = Paragraph::new(Line::from(Span::styled(
        gauge,
        Style::default().fg(theme.accent),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.text_secondary)),
    );
    frame.render_widget(popup, area);
}
