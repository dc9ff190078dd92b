//! Mouse input handling for the player.
//!
//! Drives the seek-drag protocol on the progress bar, click-to-toggle on
//! the surface, and volume-flyout hover. Any event inside the player area
//! is pointer activity; motion onto the rows outside it counts as the
//! pointer leaving the surface.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::player::controls::PlayerController;
use crate::player::media::MediaSource;
use crate::player::render::PlayerLayout;
use crate::player::state::InputResult;

/// Handle a mouse event against the current frame layout.
pub fn handle_mouse_event<M: MediaSource>(
    mouse: MouseEvent,
    controller: &mut PlayerController<M>,
    layout: &PlayerLayout,
    now: Instant,
) -> InputResult {
    let position = Position::new(mouse.column, mouse.row);
    let inside = layout.area.contains(position);

    if inside {
        controller.pointer_activity(now);
    } else if matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
        controller.pointer_left();
    }

    // Volume hover: the cluster cell and the flyout popup both count
    let over_volume = layout.volume.contains(position) || layout.flyout.contains(position);
    if matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Down(_)) {
        if over_volume {
            controller.volume_hover_enter();
        } else if controller.flyout_visible() {
            controller.volume_hover_leave(now);
        }
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if layout.progress.contains(position) {
                // Grab the seek handle: the bar now follows the gesture
                let duration = controller.state().duration;
                controller.drag_start();
                controller.drag_update(layout.time_at_column(mouse.column, duration));
            } else if layout.volume.contains(position) {
                // Click the volume icon: mute toggle
                let target = if controller.state().volume == 0.0 { 0.5 } else { 0.0 };
                controller.set_volume(target);
            } else if layout.video.contains(position) {
                controller.play_pause();
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if controller.drag().dragging {
                let duration = controller.state().duration;
                controller.drag_update(layout.time_at_column(mouse.column, duration));
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            // Release commits wherever the pointer ended up, on or off
            // the bar
            controller.drag_end();
        }
        _ => {}
    }

    InputResult::Continue
}
