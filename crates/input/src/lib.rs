//! Input mapping for the terminal frontend.
//!
//! Translates crossterm key events into game actions. Swipe semantics are
//! already resolved here: a key press maps to one of the four symbolic
//! directions before the engine is ever invoked.

pub mod map;

pub use map::{handle_key_event, should_quit};

pub use tui_2048_types as types;
