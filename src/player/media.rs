//! Playable media resource abstraction.
//!
//! [`MediaSource`] is the contract of the underlying stream handle: direct
//! commands (play, pause, seek, volume, fullscreen) plus an event queue that
//! reports what actually happened. Commands never mutate observer state
//! directly; observers learn about changes by draining [`MediaSource::poll_events`]
//! in delivery order.
//!
//! [`SimClock`] is the built-in implementation: a wall-clock driven playback
//! simulation standing in for a real decoder.

use std::time::Instant;

/// Lifecycle events emitted by a media resource.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// The playback position advanced (or was moved by a seek).
    TimeUpdate(f64),
    /// The total duration became known or changed.
    DurationChanged(f64),
    /// Playback started.
    Play,
    /// Playback paused.
    Pause,
    /// Playback reached the end of the stream.
    Ended,
    /// The resource entered or left fullscreen. Only emitted when the
    /// request actually took effect; a denied request emits nothing.
    FullscreenChanged(bool),
}

/// A playable media resource.
///
/// Implementations own the authoritative position, duration, and volume;
/// callers issue commands and read the results back through events.
pub trait MediaSource {
    /// Start or resume playback.
    fn play(&mut self);

    /// Pause playback.
    fn pause(&mut self);

    /// Current playback position in seconds.
    fn position(&self) -> f64;

    /// Move the playback position. The resource clamps to its own valid
    /// range.
    fn seek_to(&mut self, seconds: f64);

    /// Total duration in seconds; `None` until the resource has loaded
    /// enough to know it.
    fn duration(&self) -> Option<f64>;

    fn volume(&self) -> f64;

    fn set_volume(&mut self, volume: f64);

    /// Ask the resource to enter fullscreen. May be denied; success is
    /// reported via [`MediaEvent::FullscreenChanged`].
    fn request_fullscreen(&mut self);

    fn exit_fullscreen(&mut self);

    /// Drive the resource's internal clock. Implementations backed by real
    /// decoders ignore this; simulations advance their position here.
    fn tick(&mut self, _now: Instant) {}

    /// Drain pending events in delivery order.
    fn poll_events(&mut self) -> Vec<MediaEvent>;
}

/// Wall-clock playback simulation.
///
/// Position advances in real time while playing: the committed offset plus
/// the time elapsed since the last play/seek anchor. Duration is announced
/// asynchronously on the first tick, the way a real stream reports metadata
/// after loading.
#[derive(Debug)]
pub struct SimClock {
    duration: f64,
    metadata_loaded: bool,
    playing: bool,
    ended: bool,
    /// Committed position at the last anchor point.
    base: f64,
    /// Wall-clock anchor set on the first tick after play/seek.
    anchor: Option<Instant>,
    position: f64,
    volume: f64,
    fullscreen: bool,
    fullscreen_allowed: bool,
    events: Vec<MediaEvent>,
}

impl SimClock {
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            metadata_loaded: false,
            playing: false,
            ended: false,
            base: 0.0,
            anchor: None,
            position: 0.0,
            volume: 1.0,
            fullscreen: false,
            fullscreen_allowed: true,
            events: Vec::new(),
        }
    }

    /// Simulate a platform that refuses fullscreen requests.
    pub fn deny_fullscreen(mut self) -> Self {
        self.fullscreen_allowed = false;
        self
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}

impl MediaSource for SimClock {
    fn play(&mut self) {
        if self.playing {
            return;
        }
        if self.ended {
            // Replaying a finished stream restarts from the top
            self.base = 0.0;
            self.position = 0.0;
            self.ended = false;
        }
        self.playing = true;
        self.anchor = None;
        self.events.push(MediaEvent::Play);
    }

    fn pause(&mut self) {
        if !self.playing {
            return;
        }
        self.base = self.position;
        self.anchor = None;
        self.playing = false;
        self.events.push(MediaEvent::Pause);
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn seek_to(&mut self, seconds: f64) {
        let target = if self.metadata_loaded {
            seconds.clamp(0.0, self.duration)
        } else {
            seconds.max(0.0)
        };
        self.base = target;
        self.position = target;
        self.anchor = None;
        if self.ended && target < self.duration {
            self.ended = false;
        }
        self.events.push(MediaEvent::TimeUpdate(target));
    }

    fn duration(&self) -> Option<f64> {
        if self.metadata_loaded {
            Some(self.duration)
        } else {
            None
        }
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn request_fullscreen(&mut self) {
        if self.fullscreen_allowed && !self.fullscreen {
            self.fullscreen = true;
            self.events.push(MediaEvent::FullscreenChanged(true));
        }
        // Denied requests emit nothing
    }

    fn exit_fullscreen(&mut self) {
        if self.fullscreen {
            self.fullscreen = false;
            self.events.push(MediaEvent::FullscreenChanged(false));
        }
    }

    fn tick(&mut self, now: Instant) {
        if !self.metadata_loaded {
            self.metadata_loaded = true;
            self.events.push(MediaEvent::DurationChanged(self.duration));
        }

        if !self.playing {
            return;
        }

        let anchor = match self.anchor {
            Some(anchor) => anchor,
            None => {
                self.anchor = Some(now);
                now
            }
        };

        let elapsed = now.duration_since(anchor).as_secs_f64();
        let position = self.base + elapsed;

        if position >= self.duration {
            self.position = self.duration;
            self.base = self.duration;
            self.anchor = None;
            self.playing = false;
            self.ended = true;
            self.events.push(MediaEvent::TimeUpdate(self.duration));
            self.events.push(MediaEvent::Ended);
        } else {
            self.position = position;
            self.events.push(MediaEvent::TimeUpdate(position));
        }
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.events)
    }
}
