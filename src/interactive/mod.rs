//! Interactive terminal UI
//!
//! The on-screen board and keyboard, driven by crossterm key events.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
pub use rendering::ui;
