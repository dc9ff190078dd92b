//! Playback controller for the watch screen.
//!
//! The player is organized into submodules:
//! - `media`: the playable-resource abstraction and the simulated stream
//! - `state`: mirrored playback state and the seek-drag gesture state
//! - `controls`: the controller (transport ops, overlay machine, flyout)
//! - `input/`: keyboard and mouse handling
//! - `render/`: surface, progress bar, and overlay rendering
//!
//! The controller never blocks: all timing is deadline-based and advanced
//! from the watch screen's tick.

pub mod controls;
pub(crate) mod input;
pub mod media;
pub mod render;
pub mod state;

pub use controls::{PlayerController, OVERLAY_HIDE_DELAY, VOLUME_FLYOUT_LINGER};
pub use media::{MediaEvent, MediaSource, SimClock};
pub use state::{DragState, InputResult, PlayerState};
