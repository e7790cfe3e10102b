//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the 2048 rules and state management. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all merge and terminal rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for the slide/spawn turn
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid with lane access, random tile insertion, and
//!   terminal-state detection
//! - [`moves`]: the single compress-and-merge lane primitive and the
//!   four-direction slide built on top of it
//! - [`game_state`]: session state tying board, RNG, score, and status
//!   together
//! - [`rng`]: seedable LCG for reproducible tile spawns
//! - [`snapshot`]: plain-old-data view of a session for observers/renderers
//!
//! # Game Rules
//!
//! - Tiles slide as far as possible in the chosen direction; gaps close up.
//! - Two adjacent equal tiles merge into one of double value, scanning from
//!   the near edge. A tile merges at most once per move.
//! - Each merge credits the doubled value to the score.
//! - A move that changes nothing spawns nothing and scores nothing.
//! - After a changing move, one new tile (2 at 90%, 4 at 10%) appears in a
//!   uniformly random empty cell.
//! - The first 2048 tile flips the status to `Won` exactly once; play
//!   continues. The game is `Over` when the board is full and no equal
//!   orthogonal neighbors remain.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::Direction;
//!
//! let mut game = GameState::new(12345);
//! let outcome = game.apply_move(Direction::Left);
//! if outcome.changed {
//!     println!("scored {} points", outcome.points);
//! }
//! ```

pub mod board;
pub mod game_state;
pub mod moves;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError};
pub use game_state::{GameState, MoveOutcome};
pub use moves::{compress_merge_lane, SlideResult};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
