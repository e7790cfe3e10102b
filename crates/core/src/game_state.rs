//! Game state module - manages a complete 2048 session
//!
//! Ties together board, RNG, score, and status. One mutation entry point,
//! [`GameState::apply_move`], runs the whole turn: slide, then (only when the
//! board changed) credit score, spawn one tile, run win detection, and check
//! for the terminal state.

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use tui_2048_types::{Direction, GameStatus, WIN_TILE};

/// What a single turn reported back to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the slide changed the board (a tile was spawned iff true)
    pub changed: bool,
    /// Points earned from merges in this move
    pub points: u32,
    /// One-shot win signal: true only on the turn the first 2048 appears
    pub reached_2048: bool,
    /// Status after the turn
    pub status: GameStatus,
}

impl MoveOutcome {
    fn unchanged(status: GameStatus) -> Self {
        Self {
            changed: false,
            points: 0,
            reached_2048: false,
            status,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: SimpleRng,
    score: u32,
    status: GameStatus,
    /// Latched once the first 2048 tile has been announced
    won_announced: bool,
    moves: u32,
    seed: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed.
    ///
    /// The board starts with exactly two random tiles.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let mut board = Board::new();
        board.spawn_random_tile(&mut rng);
        board.spawn_random_tile(&mut rng);

        Self {
            board,
            rng,
            score: 0,
            status: GameStatus::InProgress,
            won_announced: false,
            moves: 0,
            seed,
        }
    }

    /// Build a session around a prepared board (testing, restored positions).
    ///
    /// The won latch starts clear: a preloaded 2048 does not announce. Status
    /// reflects whether the position is already terminal.
    pub fn with_board(board: Board, seed: u32) -> Self {
        let status = if board.is_game_over() {
            GameStatus::Over
        } else {
            GameStatus::InProgress
        };
        Self {
            board,
            rng: SimpleRng::new(seed),
            score: 0,
            status,
            won_announced: false,
            moves: 0,
            seed,
        }
    }

    /// Restart the session in place with a new seed
    pub fn reset(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Execute one turn in the given direction.
    ///
    /// Moves submitted after the game is over are accepted and ignored
    /// (`changed = false`). A slide that changes nothing spawns nothing and
    /// scores nothing.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.status.is_over() {
            return MoveOutcome::unchanged(self.status);
        }

        let slide = self.board.slide(direction);
        let mut reached_2048 = false;

        if slide.changed {
            self.moves += 1;
            self.score += slide.points;
            self.board.spawn_random_tile(&mut self.rng);

            if !self.won_announced && self.board.max_tile() >= WIN_TILE {
                self.won_announced = true;
                self.status = GameStatus::Won;
                reached_2048 = true;
            }
        }

        if self.board.is_game_over() {
            self.status = GameStatus::Over;
        }

        MoveOutcome {
            changed: slide.changed,
            points: slide.points,
            reached_2048,
            status: self.status,
        }
    }

    /// Fill an existing snapshot (allocation-free path for render loops)
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board.to_rows();
        out.score = self.score;
        out.status = self.status;
        out.moves = self.moves;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
