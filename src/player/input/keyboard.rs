//! Keyboard input handling for the player.
//!
//! Transport keys only; screen-level keys (help, up-next navigation,
//! library actions) are handled by the watch screen before delegating
//! here. Every keypress counts as pointer activity for the overlay.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::player::controls::PlayerController;
use crate::player::media::MediaSource;
use crate::player::state::InputResult;

/// Volume change per arrow press; the handler clamps the result to [0, 1],
/// mirroring the bounds the volume slider would enforce.
const VOLUME_STEP: f64 = 0.1;

/// Handle a transport key.
pub fn handle_key_event<M: MediaSource>(
    key: KeyEvent,
    controller: &mut PlayerController<M>,
    now: Instant,
    seek_step: f64,
) -> InputResult {
    controller.pointer_activity(now);

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return InputResult::Quit
        }

        // === Playback ===
        KeyCode::Char(' ') => controller.play_pause(),

        // === Seeking ===
        KeyCode::Left => {
            let delta = step(key.modifiers, controller, seek_step);
            seek_by(controller, -delta);
        }
        KeyCode::Right => {
            let delta = step(key.modifiers, controller, seek_step);
            seek_by(controller, delta);
        }
        KeyCode::Home => controller.seek(0.0),
        KeyCode::End => {
            let end = controller.state().duration;
            controller.seek(end);
        }

        // === Volume ===
        KeyCode::Up => adjust_volume(controller, VOLUME_STEP, now),
        KeyCode::Down => adjust_volume(controller, -VOLUME_STEP, now),
        KeyCode::Char('m') => {
            // Mute toggles between silent and half volume
            let target = if controller.state().volume == 0.0 { 0.5 } else { 0.0 };
            controller.set_volume(target);
            flash_flyout(controller, now);
        }

        // === Fullscreen ===
        KeyCode::Char('f') => controller.toggle_fullscreen(),

        _ => {}
    }

    InputResult::Continue
}

/// Seek step: five percent of the duration with Shift held, the configured
/// step otherwise.
fn step<M: MediaSource>(
    modifiers: KeyModifiers,
    controller: &PlayerController<M>,
    seek_step: f64,
) -> f64 {
    if modifiers.contains(KeyModifiers::SHIFT) {
        controller.state().duration * 0.05
    } else {
        seek_step
    }
}

fn seek_by<M: MediaSource>(controller: &mut PlayerController<M>, delta: f64) {
    let duration = controller.state().duration;
    let target = (controller.state().current_time + delta).clamp(0.0, duration.max(0.0));
    controller.seek(target);
}

fn adjust_volume<M: MediaSource>(controller: &mut PlayerController<M>, delta: f64, now: Instant) {
    let target = (controller.state().volume + delta).clamp(0.0, 1.0);
    controller.set_volume(target);
    flash_flyout(controller, now);
}

/// Show the flyout briefly: enter then schedule the linger hide, the same
/// path a hover-and-leave would take.
fn flash_flyout<M: MediaSource>(controller: &mut PlayerController<M>, now: Instant) {
    controller.volume_hover_enter();
    controller.volume_hover_leave(now);
}
