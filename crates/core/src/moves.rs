//! Move transform - the compress-and-merge primitive and the directional slide
//!
//! Exactly one oriented primitive exists: compress-and-merge a lane toward
//! index 0. The four directions come from reading board lanes in slide order
//! (see [`Board::lane`](crate::board::Board)), never from four bespoke merge
//! implementations. This keeps tie-break behavior identical across
//! directions.

use crate::board::{Board, Lane};
use tui_2048_types::{Direction, BOARD_SIZE};

/// Result of sliding the whole board in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideResult {
    /// Whether any cell changed position or value
    pub changed: bool,
    /// Points credited for merges (the sum of all doubled values)
    pub points: u32,
}

/// Compress-and-merge a lane toward index 0, returning the points earned.
///
/// Steps:
/// 1. Compress: close gaps, preserving order.
/// 2. Merge: scan from index 0; two adjacent equal tiles become one doubled
///    tile. Scanning resumes past the consumed pair, so a merged tile never
///    merges again in the same pass (`[2,2,2,2]` becomes `[4,4]`, not `[8]`).
/// 3. Compress again to close the slots the merges consumed.
pub fn compress_merge_lane(lane: &mut Lane) -> u32 {
    compress(lane);

    let mut points = 0;
    let mut i = 0;
    while i + 1 < BOARD_SIZE {
        if lane[i] != 0 && lane[i] == lane[i + 1] {
            lane[i] *= 2;
            points += lane[i];
            lane[i + 1] = 0;
            i += 2;
        } else {
            i += 1;
        }
    }

    compress(lane);
    points
}

/// Close gaps by moving all non-zero values toward index 0, preserving order.
fn compress(lane: &mut Lane) {
    let mut write = 0;
    for read in 0..BOARD_SIZE {
        if lane[read] != 0 {
            if write != read {
                lane[write] = lane[read];
                lane[read] = 0;
            }
            write += 1;
        }
    }
}

impl Board {
    /// Slide all tiles in the given direction, merging per the 2048 rules.
    ///
    /// `changed` is the OR of the per-lane changed flags; `points` sums the
    /// per-lane merge credits. An unchanged slide leaves the board
    /// cell-for-cell identical and scores zero.
    pub fn slide(&mut self, direction: Direction) -> SlideResult {
        let mut result = SlideResult::default();
        for i in 0..BOARD_SIZE {
            let before = self.lane(direction, i);
            let mut lane = before;
            result.points += compress_merge_lane(&mut lane);
            if lane != before {
                result.changed = true;
                self.set_lane(direction, i, lane);
            }
        }
        result
    }

    /// Whether a slide in the given direction would change the board.
    pub fn can_slide(&self, direction: Direction) -> bool {
        let mut copy = *self;
        copy.slide(direction).changed
    }
}
