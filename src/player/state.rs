//! Playback state mirrored from media events.
//!
//! [`PlayerState`] is the widget's view of the resource: derived, owned by
//! the watch screen, never persisted. Events are applied in delivery order;
//! nothing here talks back to the resource.

use super::media::MediaEvent;

/// Result of processing an input event on the watch screen.
///
/// Returned by input handlers to signal control flow to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player normally
    Quit,
}

/// Mirrored playback state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Whether the resource is currently playing
    pub playing: bool,
    /// Last reported playback position in seconds
    pub current_time: f64,
    /// Total duration in seconds; 0 until the resource reports it
    pub duration: f64,
    /// Last volume pushed to the resource, in [0, 1]
    pub volume: f64,
    /// Whether the resource is in fullscreen.
    ///
    /// Changes only when [`MediaEvent::FullscreenChanged`] arrives; a
    /// fullscreen request that the platform denies leaves it untouched.
    pub fullscreen: bool,
}

impl PlayerState {
    pub fn new(volume: f64) -> Self {
        Self {
            playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume,
            fullscreen: false,
        }
    }

    /// Mirror one media event into state.
    ///
    /// Volume is absent here on purpose: the resource emits no volume
    /// events, so [`PlayerState::volume`] is written directly by the
    /// controller when it pushes a new value.
    pub fn apply(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate(t) => self.current_time = t,
            MediaEvent::DurationChanged(d) => self.duration = d,
            MediaEvent::Play => self.playing = true,
            MediaEvent::Pause => self.playing = false,
            MediaEvent::Ended => self.playing = false,
            MediaEvent::FullscreenChanged(on) => self.fullscreen = on,
        }
    }
}

/// Transient seek-gesture state.
///
/// `pending_time` tracks `current_time` whenever no drag is active and
/// diverges only while the user holds the seek handle; on release it is
/// committed as the authoritative seek target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub dragging: bool,
    pub pending_time: f64,
}

impl DragState {
    pub fn new() -> Self {
        Self {
            dragging: false,
            pending_time: 0.0,
        }
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self::new()
    }
}
