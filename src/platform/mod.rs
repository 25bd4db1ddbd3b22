//! Platform abstraction layer
//!
//! Handles the outside world for the loop:
//! - Frame timing and rate limiting
//! - Terminal input events
//! - Terminal setup and restore

pub mod terminal;
pub mod time;

pub use terminal::{TerminalInput, TerminalSession};
pub use time::FrameClock;
