//! Transport controls for the watch screen.
//!
//! [`PlayerController`] wraps a [`MediaSource`] and owns everything the
//! control overlay needs: the mirrored [`PlayerState`], the seek-drag
//! gesture, the overlay visibility state machine, and the volume flyout.
//!
//! All timing is deadline-based. Each concern holds at most one deadline at
//! a time; entering a state with a deadline replaces whatever was pending,
//! so no stale timer can fire.

use std::time::{Duration, Instant};

use super::media::{MediaEvent, MediaSource};
use super::state::{DragState, PlayerState};

/// Inactivity window before the overlay hides during playback.
pub const OVERLAY_HIDE_DELAY: Duration = Duration::from_millis(3000);

/// Linger before the volume flyout hides after the pointer leaves it.
pub const VOLUME_FLYOUT_LINGER: Duration = Duration::from_millis(300);

/// Visibility state of the control overlay.
///
/// The hide deadline exists only inside `PlayingVisible`; scheduling it is
/// a side effect of entering that state and it dies with the transition
/// out, which is what guarantees a paused player never auto-hides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    /// Playing, controls shown, hide pending at the deadline
    PlayingVisible { hide_at: Instant },
    /// Playing, controls hidden
    PlayingHidden,
    /// Paused, controls shown indefinitely
    PausedVisible,
}

impl OverlayState {
    pub fn visible(&self) -> bool {
        !matches!(self, OverlayState::PlayingHidden)
    }
}

/// The volume flyout, with its own linger deadline independent of the
/// overlay timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeFlyout {
    visible: bool,
    hide_at: Option<Instant>,
}

impl VolumeFlyout {
    fn new() -> Self {
        Self {
            visible: false,
            hide_at: None,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Pointer entered the volume control: show and cancel any pending hide.
    fn hover_enter(&mut self) {
        self.visible = true;
        self.hide_at = None;
    }

    /// Pointer left the volume control: hide after the linger.
    fn hover_leave(&mut self, now: Instant) {
        if self.visible {
            self.hide_at = Some(now + VOLUME_FLYOUT_LINGER);
        }
    }

    fn tick(&mut self, now: Instant) {
        if let Some(hide_at) = self.hide_at {
            if now >= hide_at {
                self.visible = false;
                self.hide_at = None;
            }
        }
    }
}

/// Transport controls bound to a media resource.
pub struct PlayerController<M: MediaSource> {
    media: M,
    state: PlayerState,
    overlay: OverlayState,
    drag: DragState,
    flyout: VolumeFlyout,
}

impl<M: MediaSource> PlayerController<M> {
    /// Bind a resource. The initial volume is pushed to the resource
    /// immediately; the overlay starts visible (the player starts paused
    /// until the resource reports otherwise).
    pub fn new(mut media: M, initial_volume: f64) -> Self {
        media.set_volume(initial_volume);
        Self {
            media,
            state: PlayerState::new(initial_volume),
            overlay: OverlayState::PausedVisible,
            drag: DragState::new(),
            flyout: VolumeFlyout::new(),
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay.visible()
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn flyout_visible(&self) -> bool {
        self.flyout.visible()
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    /// The position the seek bar should show: the pending gesture target
    /// while dragging, the committed position otherwise.
    pub fn display_time(&self) -> f64 {
        if self.drag.dragging {
            self.drag.pending_time
        } else {
            self.state.current_time
        }
    }

    // === Transport operations ===

    /// Toggle playback. The state change lands later through play/pause
    /// events, never synchronously from this call.
    pub fn play_pause(&mut self) {
        if self.state.playing {
            self.media.pause();
        } else {
            self.media.play();
        }
    }

    /// Seek to a position. The position is mirrored into `current_time`
    /// immediately rather than waiting for the resource's next time
    /// update; the resource clamps to its own valid range.
    pub fn seek(&mut self, seconds: f64) {
        self.media.seek_to(seconds);
        self.state.current_time = seconds;
        self.drag.pending_time = seconds;
    }

    /// Push a volume to the resource. No clamping happens here; callers
    /// supply range-bounded values.
    pub fn set_volume(&mut self, volume: f64) {
        self.media.set_volume(volume);
        self.state.volume = volume;
    }

    /// Ask the resource to enter or leave fullscreen. The mirrored flag
    /// changes only when the resource reports the switch, so a denied
    /// request leaves state untouched.
    pub fn toggle_fullscreen(&mut self) {
        if self.state.fullscreen {
            self.media.exit_fullscreen();
        } else {
            self.media.request_fullscreen();
        }
    }

    // === Seek-drag gesture ===

    pub fn drag_start(&mut self) {
        self.drag.dragging = true;
    }

    /// Move the gesture target. While dragging only `pending_time`
    /// changes; no seek is issued until release.
    pub fn drag_update(&mut self, seconds: f64) {
        if self.drag.dragging {
            self.drag.pending_time = seconds;
        }
    }

    /// Release the gesture: commit the pending position as the seek
    /// target.
    pub fn drag_end(&mut self) {
        if self.drag.dragging {
            self.drag.dragging = false;
            self.seek(self.drag.pending_time);
        }
    }

    // === Overlay visibility ===

    /// Pointer moved over the surface: show the controls and restart the
    /// inactivity countdown (only playing players count down).
    pub fn pointer_activity(&mut self, now: Instant) {
        self.overlay = if self.state.playing {
            OverlayState::PlayingVisible {
                hide_at: now + OVERLAY_HIDE_DELAY,
            }
        } else {
            OverlayState::PausedVisible
        };
    }

    /// Pointer left the surface: hide immediately while playing, stay
    /// visible while paused.
    pub fn pointer_left(&mut self) {
        if self.state.playing {
            self.overlay = OverlayState::PlayingHidden;
        }
    }

    // === Volume flyout ===

    pub fn volume_hover_enter(&mut self) {
        self.flyout.hover_enter();
    }

    pub fn volume_hover_leave(&mut self, now: Instant) {
        self.flyout.hover_leave(now);
    }

    // === Clock ===

    /// Advance everything: the resource's clock, the mirrored state, the
    /// overlay machine, and the flyout linger.
    pub fn tick(&mut self, now: Instant) {
        self.media.tick(now);

        for event in self.media.poll_events() {
            let was_playing = self.state.playing;
            self.state.apply(event);

            // Entering/leaving playback moves the overlay machine;
            // entering PlayingVisible schedules the hide deadline.
            if self.state.playing && !was_playing {
                self.overlay = OverlayState::PlayingVisible {
                    hide_at: now + OVERLAY_HIDE_DELAY,
                };
            } else if !self.state.playing && was_playing {
                self.overlay = OverlayState::PausedVisible;
            }

            // pending_time tracks current_time whenever no drag is active
            if let MediaEvent::TimeUpdate(t) = event {
                if !self.drag.dragging {
                    self.drag.pending_time = t;
                }
            }
        }

        if let OverlayState::PlayingVisible { hide_at } = self.overlay {
            if now >= hide_at {
                self.overlay = OverlayState::PlayingHidden;
            }
        }

        self.flyout.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::media::SimClock;
    use std::time::Duration;

    /// A controller over a 100s simulated stream, ticked once so the
    /// duration is known.
    fn controller() -> (PlayerController<SimClock>, Instant) {
        let t0 = Instant::now();
        let mut c = PlayerController::new(SimClock::new(100.0), 0.7);
        c.tick(t0);
        (c, t0)
    }

    fn playing_controller() -> (PlayerController<SimClock>, Instant) {
        let (mut c, t0) = controller();
        c.play_pause();
        c.tick(t0);
        assert!(c.state().playing);
        (c, t0)
    }

    #[test]
    fn initial_volume_is_pushed_to_resource() {
        let c = PlayerController::new(SimClock::new(100.0), 0.7);
        assert_eq!(c.media().volume(), 0.7);
        assert_eq!(c.state().volume, 0.7);
    }

    #[test]
    fn play_pause_lands_via_events_not_synchronously() {
        let (mut c, t0) = controller();
        c.play_pause();
        // Not yet mirrored: the event has not been drained
        assert!(!c.state().playing);
        c.tick(t0);
        assert!(c.state().playing);
    }

    #[test]
    fn seek_updates_current_time_optimistically() {
        let (mut c, _) = controller();
        c.seek(42.0);
        assert_eq!(c.state().current_time, 42.0);
    }

    #[test]
    fn seek_then_time_update_agrees() {
        let (mut c, t0) = controller();
        c.seek(42.0);
        c.tick(t0); // drains the TimeUpdate the resource emitted for the seek
        assert_eq!(c.state().current_time, 42.0);
    }

    #[test]
    fn drag_moves_only_pending_time() {
        let (mut c, t0) = controller();
        c.seek(10.0);
        c.tick(t0);

        c.drag_start();
        c.drag_update(30.0);
        c.drag_update(55.0);
        assert_eq!(c.state().current_time, 10.0);
        assert_eq!(c.drag().pending_time, 55.0);
        assert_eq!(c.display_time(), 55.0);
    }

    #[test]
    fn drag_end_commits_pending_seek() {
        let (mut c, _) = controller();
        c.drag_start();
        c.drag_update(63.0);
        c.drag_end();
        assert!(!c.drag().dragging);
        assert_eq!(c.state().current_time, 63.0);
        assert_eq!(c.media().position(), 63.0);
    }

    #[test]
    fn pending_tracks_current_when_not_dragging() {
        let (mut c, t0) = playing_controller();
        c.tick(t0 + Duration::from_secs(4));
        assert_eq!(c.drag().pending_time, c.state().current_time);
    }

    #[test]
    fn time_updates_do_not_disturb_active_drag() {
        let (mut c, t0) = playing_controller();
        c.drag_start();
        c.drag_update(80.0);
        c.tick(t0 + Duration::from_secs(4));
        assert_eq!(c.drag().pending_time, 80.0);
    }

    #[test]
    fn overlay_hides_after_inactivity_while_playing() {
        let (mut c, t0) = playing_controller();
        c.pointer_activity(t0);
        assert!(c.overlay_visible());

        c.tick(t0 + Duration::from_millis(2999));
        assert!(c.overlay_visible());

        c.tick(t0 + Duration::from_millis(3000));
        assert!(!c.overlay_visible());
        assert_eq!(c.overlay(), OverlayState::PlayingHidden);
    }

    #[test]
    fn pointer_activity_restarts_countdown() {
        let (mut c, t0) = playing_controller();
        c.pointer_activity(t0);

        // Activity at 2.5s pushes the deadline to 5.5s
        c.tick(t0 + Duration::from_millis(2500));
        c.pointer_activity(t0 + Duration::from_millis(2500));

        c.tick(t0 + Duration::from_millis(4000));
        assert!(c.overlay_visible());

        c.tick(t0 + Duration::from_millis(5500));
        assert!(!c.overlay_visible());
    }

    #[test]
    fn pausing_prevents_auto_hide() {
        let (mut c, t0) = playing_controller();
        c.pointer_activity(t0);

        c.play_pause(); // pause
        c.tick(t0 + Duration::from_millis(100));
        assert_eq!(c.overlay(), OverlayState::PausedVisible);

        // Long after the old deadline would have fired
        c.tick(t0 + Duration::from_secs(60));
        assert!(c.overlay_visible());
    }

    #[test]
    fn pointer_activity_while_paused_stays_visible() {
        let (mut c, t0) = controller();
        c.pointer_activity(t0);
        assert_eq!(c.overlay(), OverlayState::PausedVisible);
        c.tick(t0 + Duration::from_secs(10));
        assert!(c.overlay_visible());
    }

    #[test]
    fn pointer_leave_hides_immediately_while_playing() {
        let (mut c, t0) = playing_controller();
        c.pointer_activity(t0);
        c.pointer_left();
        assert!(!c.overlay_visible());
    }

    #[test]
    fn pointer_leave_while_paused_keeps_controls() {
        let (mut c, _) = controller();
        c.pointer_left();
        assert!(c.overlay_visible());
    }

    #[test]
    fn resuming_playback_schedules_fresh_hide() {
        let (mut c, t0) = playing_controller();
        c.play_pause(); // pause
        c.tick(t0);
        c.play_pause(); // resume
        let t1 = t0 + Duration::from_secs(1);
        c.tick(t1);
        assert!(matches!(c.overlay(), OverlayState::PlayingVisible { .. }));

        c.tick(t1 + OVERLAY_HIDE_DELAY);
        assert!(!c.overlay_visible());
    }

    #[test]
    fn flyout_lingers_before_hiding() {
        let (mut c, t0) = controller();
        c.volume_hover_enter();
        assert!(c.flyout_visible());

        c.volume_hover_leave(t0);
        c.tick(t0 + Duration::from_millis(299));
        assert!(c.flyout_visible());

        c.tick(t0 + Duration::from_millis(300));
        assert!(!c.flyout_visible());
    }

    #[test]
    fn flyout_reenter_cancels_pending_hide() {
        let (mut c, t0) = controller();
        c.volume_hover_enter();
        c.volume_hover_leave(t0);
        c.volume_hover_enter();

        c.tick(t0 + Duration::from_secs(5));
        assert!(c.flyout_visible());
    }

    #[test]
    fn flyout_is_independent_of_overlay_timer() {
        let (mut c, t0) = playing_controller();
        c.pointer_activity(t0);
        c.volume_hover_enter();

        // Overlay hides at 3s; flyout was never told to leave
        c.tick(t0 + Duration::from_millis(3500));
        assert!(!c.overlay_visible());
        assert!(c.flyout_visible());
    }

    #[test]
    fn set_volume_passes_through_unclamped_by_controller() {
        let (mut c, _) = controller();
        c.set_volume(0.4);
        assert_eq!(c.state().volume, 0.4);
        assert_eq!(c.media().volume(), 0.4);
    }

    #[test]
    fn fullscreen_flag_follows_event() {
        let (mut c, t0) = controller();
        c.toggle_fullscreen();
        assert!(!c.state().fullscreen); // not yet: event pending
        c.tick(t0);
        assert!(c.state().fullscreen);

        c.toggle_fullscreen();
        c.tick(t0);
        assert!(!c.state().fullscreen);
    }

    #[test]
    fn denied_fullscreen_leaves_flag_untouched() {
        let t0 = Instant::now();
        let mut c = PlayerController::new(SimClock::new(100.0).deny_fullscreen(), 0.7);
        c.tick(t0);

        c.toggle_fullscreen();
        c.tick(t0 + Duration::from_millis(100));
        assert!(!c.state().fullscreen);

        // A second toggle still issues a request, not an exit
        c.toggle_fullscreen();
        c.tick(t0 + Duration::from_millis(200));
        assert!(!c.state().fullscreen);
    }

    #[test]
    fn ended_pauses_and_shows_controls() {
        let (mut c, t0) = playing_controller();
        c.pointer_left();
        assert!(!c.overlay_visible());

        c.tick(t0 + Duration::from_secs(200)); // past the 100s duration
        assert!(!c.state().playing);
        assert_eq!(c.overlay(), OverlayState::PausedVisible);
    }
}
