//! Rendering for the watch screen player.
//!
//! The layout is computed once per frame and shared with the mouse handler
//! so hit-testing and drawing can never disagree about where the progress
//! bar or the volume control sit.

pub mod overlay;
pub mod progress;
pub mod surface;

use ratatui::layout::Rect;

/// Chrome rows at the bottom of the player area (separator + progress +
/// controls).
pub const CHROME_LINES: u16 = 3;

/// Width reserved at the right of the progress row for the time display.
const TIME_DISPLAY_WIDTH: u16 = 19;

/// Width of the volume cluster on the controls row.
const VOLUME_CLUSTER_WIDTH: u16 = 9;

/// Width of the key hints at the right of the controls row.
const HINTS_WIDTH: u16 = 24;

/// Screen regions of the player, shared between renderer and mouse input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLayout {
    /// The whole player region
    pub area: Rect,
    /// The picture area above the chrome rows
    pub video: Rect,
    pub separator: Rect,
    /// The progress-bar row
    pub progress: Rect,
    /// The controls row
    pub controls: Rect,
    /// The volume cluster cells within the controls row
    pub volume: Rect,
    /// The volume flyout popup (only drawn while the flyout is visible,
    /// but hover over it always counts as volume hover)
    pub flyout: Rect,
}

impl PlayerLayout {
    /// Carve the player region into picture and chrome rows.
    pub fn compute(area: Rect) -> Self {
        let chrome_top = area.bottom().saturating_sub(CHROME_LINES);
        let video = Rect::new(
            area.x,
            area.y,
            area.width,
            area.height.saturating_sub(CHROME_LINES),
        );
        let separator = Rect::new(area.x, chrome_top, area.width, 1);
        let progress = Rect::new(area.x, chrome_top + 1, area.width, 1);
        let controls = Rect::new(area.x, chrome_top + 2, area.width, 1);

        let volume_x = area
            .right()
            .saturating_sub(HINTS_WIDTH + VOLUME_CLUSTER_WIDTH)
            .max(area.x);
        let volume = Rect::new(volume_x, controls.y, VOLUME_CLUSTER_WIDTH, 1);

        let flyout_w = 14u16.min(area.width);
        let flyout_x = volume_x.min(area.right().saturating_sub(flyout_w)).max(area.x);
        let flyout = Rect::new(flyout_x, chrome_top.saturating_sub(3), flyout_w, 3);

        Self {
            area,
            video,
            separator,
            progress,
            controls,
            volume,
            flyout,
        }
    }

    /// The progress bar's horizontal span: (first column, width).
    ///
    /// One column of padding on the left, the time display on the right.
    pub fn bar_span(&self) -> (u16, u16) {
        let x = self.progress.x + 1;
        let width = self.progress.width.saturating_sub(1 + TIME_DISPLAY_WIDTH);
        (x, width)
    }

    /// Map a column on the progress row to a playback time.
    pub fn time_at_column(&self, column: u16, duration: f64) -> f64 {
        let (bar_x, bar_width) = self.bar_span();
        if bar_width == 0 || duration <= 0.0 {
            return 0.0;
        }
        let offset = column.saturating_sub(bar_x).min(bar_width - 1);
        let ratio = offset as f64 / bar_width as f64;
        (ratio * duration).clamp(0.0, duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PlayerLayout {
        PlayerLayout::compute(Rect::new(0, 0, 100, 30))
    }

    #[test]
    fn chrome_rows_at_bottom() {
        let l = layout();
        assert_eq!(l.video.height, 27);
        assert_eq!(l.separator.y, 27);
        assert_eq!(l.progress.y, 28);
        assert_eq!(l.controls.y, 29);
    }

    #[test]
    fn volume_cluster_inside_controls_row() {
        let l = layout();
        assert_eq!(l.volume.y, l.controls.y);
        assert!(l.volume.right() <= l.controls.right());
    }

    #[test]
    fn time_at_column_start_is_zero() {
        let l = layout();
        let (bar_x, _) = l.bar_span();
        assert_eq!(l.time_at_column(bar_x, 100.0), 0.0);
    }

    #[test]
    fn time_at_column_scales_with_position() {
        let l = layout();
        let (bar_x, bar_w) = l.bar_span();
        let mid = l.time_at_column(bar_x + bar_w / 2, 100.0);
        assert!((mid - 50.0).abs() < 2.0);
    }

    #[test]
    fn time_at_column_clamps_past_end() {
        let l = layout();
        let (bar_x, bar_w) = l.bar_span();
        let t = l.time_at_column(bar_x + bar_w + 40, 100.0);
        assert!(t <= 100.0);
    }

    #[test]
    fn time_at_column_zero_duration() {
        let l = layout();
        assert_eq!(l.time_at_column(10, 0.0), 0.0);
    }

    #[test]
    fn tiny_area_does_not_underflow() {
        let l = PlayerLayout::compute(Rect::new(0, 0, 4, 2));
        assert_eq!(l.bar_span().1, 0);
        assert_eq!(l.time_at_column(3, 100.0), 0.0);
    }
}
