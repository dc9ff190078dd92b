//! End-to-end tests for the playback controller.
//!
//! Everything is driven through synthetic instants, so no test sleeps.

use std::time::{Duration, Instant};

use vtube::player::{
    MediaSource, PlayerController, SimClock, OVERLAY_HIDE_DELAY, VOLUME_FLYOUT_LINGER,
};

const DURATION: f64 = 300.0;

fn controller() -> (PlayerController<SimClock>, Instant) {
    let t0 = Instant::now();
    let mut c = PlayerController::new(SimClock::new(DURATION), 0.7);
    c.tick(t0);
    (c, t0)
}

fn playing(mut c: PlayerController<SimClock>, t0: Instant) -> PlayerController<SimClock> {
    c.play_pause();
    c.tick(t0);
    assert!(c.state().playing);
    c
}

// ============================================================================
// Seek and drag protocol
// ============================================================================

#[test]
fn seek_then_time_update_lands_on_target() {
    let (mut c, t0) = controller();
    for t in [0.0, 1.5, 120.0, DURATION] {
        c.seek(t);
        c.tick(t0); // delivers the resource's TimeUpdate for the seek
        assert_eq!(c.state().current_time, t);
    }
}

#[test]
fn dragging_never_moves_committed_time() {
    let (mut c, t0) = controller();
    c.seek(10.0);
    c.tick(t0);

    c.drag_start();
    for t in [20.0, 90.0, 45.0, 250.0] {
        c.drag_update(t);
        assert_eq!(c.state().current_time, 10.0);
        assert_eq!(c.drag().pending_time, t);
    }

    c.drag_end();
    assert_eq!(c.state().current_time, 250.0);
    assert_eq!(c.media().position(), 250.0);
}

#[test]
fn display_time_follows_the_gesture() {
    let (mut c, _) = controller();
    c.seek(30.0);
    assert_eq!(c.display_time(), 30.0);

    c.drag_start();
    c.drag_update(200.0);
    assert_eq!(c.display_time(), 200.0);

    c.drag_end();
    assert_eq!(c.display_time(), 200.0);
}

// ============================================================================
// Overlay auto-hide
// ============================================================================

#[test]
fn overlay_hides_after_three_seconds_of_playback() {
    let (c, t0) = controller();
    let mut c = playing(c, t0);
    c.pointer_activity(t0);

    c.tick(t0 + OVERLAY_HIDE_DELAY - Duration::from_millis(1));
    assert!(c.overlay_visible());

    c.tick(t0 + OVERLAY_HIDE_DELAY);
    assert!(!c.overlay_visible());
}

#[test]
fn activity_before_expiry_resets_the_countdown() {
    let (c, t0) = controller();
    let mut c = playing(c, t0);
    c.pointer_activity(t0);

    // Poke the pointer every two seconds for ten seconds
    for i in 1..=5 {
        let t = t0 + Duration::from_secs(2 * i);
        c.tick(t);
        assert!(c.overlay_visible());
        c.pointer_activity(t);
    }

    // Then go idle past the window
    c.tick(t0 + Duration::from_secs(10) + OVERLAY_HIDE_DELAY);
    assert!(!c.overlay_visible());
}

#[test]
fn paused_player_never_hides_controls() {
    let (mut c, t0) = controller();
    c.pointer_activity(t0);

    c.tick(t0 + Duration::from_secs(3600));
    assert!(c.overlay_visible());
}

#[test]
fn pausing_mid_countdown_cancels_the_hide() {
    let (c, t0) = controller();
    let mut c = playing(c, t0);
    c.pointer_activity(t0);

    c.play_pause();
    c.tick(t0 + Duration::from_secs(1));

    c.tick(t0 + Duration::from_secs(100));
    assert!(c.overlay_visible());
}

// ============================================================================
// Volume flyout
// ============================================================================

#[test]
fn flyout_linger_is_300ms() {
    let (mut c, t0) = controller();
    c.volume_hover_enter();
    c.volume_hover_leave(t0);

    c.tick(t0 + VOLUME_FLYOUT_LINGER - Duration::from_millis(1));
    assert!(c.flyout_visible());
    c.tick(t0 + VOLUME_FLYOUT_LINGER);
    assert!(!c.flyout_visible());
}

// ============================================================================
// Fullscreen (event-derived flag)
// ============================================================================

#[test]
fn fullscreen_round_trip_via_events() {
    let (mut c, t0) = controller();
    c.toggle_fullscreen();
    c.tick(t0);
    assert!(c.state().fullscreen);
    c.toggle_fullscreen();
    c.tick(t0);
    assert!(!c.state().fullscreen);
}

#[test]
fn failed_fullscreen_request_does_not_flip_the_flag() {
    let t0 = Instant::now();
    let mut c = PlayerController::new(SimClock::new(DURATION).deny_fullscreen(), 0.7);
    c.tick(t0);

    for _ in 0..3 {
        c.toggle_fullscreen();
        c.tick(t0);
        assert!(!c.state().fullscreen);
    }
}

// ============================================================================
// Playback lifecycle
// ============================================================================

#[test]
fn playback_position_tracks_wall_clock() {
    let (c, t0) = controller();
    let mut c = playing(c, t0);

    c.tick(t0 + Duration::from_secs(42));
    assert!((c.state().current_time - 42.0).abs() < 1e-6);
}

#[test]
fn stream_end_stops_playback() {
    let (c, t0) = controller();
    let mut c = playing(c, t0);

    c.tick(t0 + Duration::from_secs(1000));
    assert!(!c.state().playing);
    assert_eq!(c.state().current_time, DURATION);
}

#[test]
fn duration_arrives_asynchronously() {
    let mut c = PlayerController::new(SimClock::new(DURATION), 0.7);
    assert_eq!(c.state().duration, 0.0);
    c.tick(Instant::now());
    assert_eq!(c.state().duration, DURATION);
}
