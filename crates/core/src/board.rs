//! Board module - manages the game grid
//!
//! The board is a 4x4 grid where each cell holds 0 (empty) or a power of two.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..3 (left to right), y ranges 0..3
//! (top to bottom).

use std::fmt;

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use tui_2048_types::{BOARD_SIZE, CELL_COUNT};

/// A single row or column of cells, read in slide order.
pub type Lane = [u32; BOARD_SIZE];

/// The game board - 4x4 grid using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * BOARD_SIZE + x)
    cells: [u32; CELL_COUNT],
}

/// Validation failure when building a board from externally supplied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Cell holds a value that is neither 0 nor a power of two >= 2.
    InvalidTile { x: usize, y: usize, value: u32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidTile { x, y, value } => write!(
                f,
                "invalid tile value {value} at ({x}, {y}): expected 0 or a power of two >= 2"
            ),
        }
    }
}

impl std::error::Error for BoardError {}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a board from a 2D cell grid, validating every value.
    ///
    /// This is the trust boundary for externally supplied boards: each cell
    /// must be 0 or a power of two >= 2.
    pub fn from_cells(cells: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, BoardError> {
        let mut board = Self::new();
        for (y, row) in cells.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value != 0 && (value < 2 || !value.is_power_of_two()) {
                    return Err(BoardError::InvalidTile { x, y, value });
                }
                board.cells[Self::index(x, y)] = value;
            }
        }
        Ok(board)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: usize, y: usize) -> usize {
        debug_assert!(x < BOARD_SIZE && y < BOARD_SIZE);
        y * BOARD_SIZE + x
    }

    /// Get cell value at position (x, y)
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.cells[Self::index(x, y)]
    }

    /// Set cell value at position (x, y)
    pub fn set(&mut self, x: usize, y: usize, value: u32) {
        self.cells[Self::index(x, y)] = value;
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u32; CELL_COUNT] {
        &self.cells
    }

    /// Convert to a 2D grid for snapshots/display
    pub fn to_rows(&self) -> [[u32; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (y, row) in rows.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = self.get(x, y);
            }
        }
        rows
    }

    /// Indices of all empty cells, in row-major order (no allocation)
    pub fn empty_cells(&self) -> ArrayVec<usize, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of empty cells on the board
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Whether every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// The largest tile value on the board (0 when empty)
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Insert one random tile into a uniformly chosen empty cell.
    ///
    /// The value is 2 with probability 0.9, else 4. Returns false (a defined
    /// no-op, not an error) when the board is full.
    pub fn spawn_random_tile(&mut self, rng: &mut SimpleRng) -> bool {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return false;
        }
        let idx = empty[rng.next_range(empty.len() as u32) as usize];
        self.cells[idx] = rng.spawn_value();
        true
    }

    /// Read lane `i` for the given direction, ordered from the edge tiles
    /// slide toward.
    ///
    /// Left reads rows left-to-right, Right reads them right-to-left, Up
    /// reads columns top-to-bottom, Down bottom-to-top. Together with
    /// [`set_lane`](Self::set_lane) this reduces all four directions to one
    /// compress-left primitive.
    pub(crate) fn lane(&self, direction: tui_2048_types::Direction, i: usize) -> Lane {
        use tui_2048_types::Direction::*;
        let mut lane = [0; BOARD_SIZE];
        for (k, slot) in lane.iter_mut().enumerate() {
            *slot = match direction {
                Left => self.get(k, i),
                Right => self.get(BOARD_SIZE - 1 - k, i),
                Up => self.get(i, k),
                Down => self.get(i, BOARD_SIZE - 1 - k),
            };
        }
        lane
    }

    /// Write lane `i` back in the same order [`lane`](Self::lane) reads it.
    pub(crate) fn set_lane(&mut self, direction: tui_2048_types::Direction, i: usize, lane: Lane) {
        use tui_2048_types::Direction::*;
        for (k, &value) in lane.iter().enumerate() {
            match direction {
                Left => self.set(k, i, value),
                Right => self.set(BOARD_SIZE - 1 - k, i, value),
                Up => self.set(i, k, value),
                Down => self.set(i, BOARD_SIZE - 1 - k, value),
            }
        }
    }

    /// Terminal-state check: true iff the board is full and no orthogonally
    /// adjacent pair holds equal values.
    ///
    /// Equivalent to "no direction's slide would change the board"; only the
    /// right and below neighbors need checking since adjacency is symmetric.
    pub fn is_game_over(&self) -> bool {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let v = self.get(x, y);
                if v == 0 {
                    return false;
                }
                if x + 1 < BOARD_SIZE && self.get(x + 1, y) == v {
                    return false;
                }
                if y + 1 < BOARD_SIZE && self.get(x, y + 1) == v {
                    return false;
                }
            }
        }
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let v = self.get(x, y);
                if v == 0 {
                    write!(f, "     .")?;
                } else {
                    write!(f, "{v:6}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
