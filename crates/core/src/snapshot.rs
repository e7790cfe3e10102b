//! Plain-old-data view of a session, for observers and renderers.

use tui_2048_types::{GameStatus, BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u32; BOARD_SIZE]; BOARD_SIZE],
    pub score: u32,
    pub status: GameStatus,
    pub moves: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.status.is_over()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; BOARD_SIZE]; BOARD_SIZE],
            score: 0,
            status: GameStatus::InProgress,
            moves: 0,
            seed: 0,
        }
    }
}
