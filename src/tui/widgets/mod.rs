//! TUI widgets for vtube
//!
//! Reusable UI components for the terminal interface.

pub mod status_footer;
pub mod video_list;

pub use status_footer::{render_footer, render_footer_text, render_status_line};
pub use video_list::{fit_width, render_video_list, VideoRow};
