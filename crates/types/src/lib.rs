//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board side length (the classic game is 4x4)
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Tile value that triggers the win notification
pub const WIN_TILE: u32 = 2048;

/// Spawn distribution: a new tile is 4 in `SPAWN_FOUR_IN` out of
/// `SPAWN_FOUR_OUT_OF` draws, otherwise 2 (i.e. 10% fours, 90% twos).
pub const SPAWN_FOUR_IN: u32 = 1;
pub const SPAWN_FOUR_OUT_OF: u32 = 10;

/// The four slide directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Get all four directions
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}

/// Session status. `Won` is sticky but non-terminal; `Over` accepts no
/// further moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Over,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::InProgress => "in-progress",
            GameStatus::Won => "won",
            GameStatus::Over => "over",
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Over)
    }
}

/// Game actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move(Direction),
    Restart,
}
