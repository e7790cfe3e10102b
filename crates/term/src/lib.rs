//! Terminal frontend: pure view plus a crossterm renderer.
//!
//! [`GameView`] maps a [`GameSnapshot`](tui_2048_core::GameSnapshot) into a
//! [`Screen`] (a char+style grid) with no I/O, so it can be unit-tested.
//! [`TerminalRenderer`] owns raw mode / alternate screen lifecycle and
//! flushes a `Screen` to the real terminal.

pub mod game_view;
pub mod renderer;
pub mod screen;

pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
pub use screen::{Cell, CellStyle, Rgb, Screen};

pub use tui_2048_core as core;
