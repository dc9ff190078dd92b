//! Keyboard and mouse input handling for the watch screen player.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;
