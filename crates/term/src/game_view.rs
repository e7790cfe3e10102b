//! GameView: maps a `GameSnapshot` into a terminal screen.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::screen::{CellStyle, Rgb, Screen};
use tui_2048_types::{GameStatus, BOARD_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 8x3 tiles fit a centered number up to six digits (65536+).
        Self {
            tile_w: 8,
            tile_h: 3,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self { tile_w, tile_h }
    }

    /// Render the snapshot into an existing screen.
    ///
    /// Callers can reuse a screen across frames; it is resized and cleared
    /// here. `best` is the host-tracked best score.
    pub fn render_into(&self, snap: &GameSnapshot, best: u32, viewport: Viewport, screen: &mut Screen) {
        screen.resize(viewport.width, viewport.height);

        let board_px_w = BOARD_SIZE as u16 * self.tile_w;
        let board_px_h = BOARD_SIZE as u16 * self.tile_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        // Leave a line above the frame for the header and one below for status.
        let start_y = (viewport.height.saturating_sub(frame_h + 2) / 2).saturating_add(1);

        let header = format!(
            "2048   Score: {}   Best: {}   Moves: {}",
            snap.score, best, snap.moves
        );
        let header_x = viewport.width.saturating_sub(header.len() as u16) / 2;
        screen.put_str(
            header_x,
            start_y.saturating_sub(1),
            &header,
            CellStyle {
                bold: true,
                ..CellStyle::default()
            },
        );

        self.draw_border(screen, start_x, start_y, frame_w, frame_h);

        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                self.draw_tile(
                    screen,
                    start_x + 1 + x as u16 * self.tile_w,
                    start_y + 1 + y as u16 * self.tile_h,
                    snap.board[y][x],
                );
            }
        }

        let status = status_line(snap.status);
        let status_x = viewport.width.saturating_sub(status.len() as u16) / 2;
        screen.put_str(status_x, start_y + frame_h, status, CellStyle::default());
    }

    fn draw_tile(&self, screen: &mut Screen, x: u16, y: u16, value: u32) {
        let style = tile_style(value);
        screen.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);

        if value != 0 {
            let text = value.to_string();
            let pad = self.tile_w.saturating_sub(text.len() as u16) / 2;
            screen.put_str(x + pad, y + self.tile_h / 2, &text, style);
        }
    }

    fn draw_border(&self, screen: &mut Screen, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::default();
        for dx in 1..w.saturating_sub(1) {
            screen.put_str(x + dx, y, "─", style);
            screen.put_str(x + dx, y + h - 1, "─", style);
        }
        for dy in 1..h.saturating_sub(1) {
            screen.put_str(x, y + dy, "│", style);
            screen.put_str(x + w - 1, y + dy, "│", style);
        }
        screen.put_str(x, y, "┌", style);
        screen.put_str(x + w - 1, y, "┐", style);
        screen.put_str(x, y + h - 1, "└", style);
        screen.put_str(x + w - 1, y + h - 1, "┘", style);
    }
}

fn status_line(status: GameStatus) -> &'static str {
    match status {
        GameStatus::InProgress => "arrows/hjkl/wasd slide   r restart   q quit",
        GameStatus::Won => "You made 2048! Keep going, or press r to restart",
        GameStatus::Over => "Game over. Press r to restart or q to quit",
    }
}

/// Per-value tile palette, following the classic 2048 colors.
fn tile_style(value: u32) -> CellStyle {
    let dark_text = Rgb::new(119, 110, 101);
    let light_text = Rgb::new(249, 246, 242);

    let (bg, fg) = match value {
        0 => (Rgb::new(58, 54, 48), dark_text),
        2 => (Rgb::new(238, 228, 218), dark_text),
        4 => (Rgb::new(237, 224, 200), dark_text),
        8 => (Rgb::new(242, 177, 121), light_text),
        16 => (Rgb::new(245, 149, 99), light_text),
        32 => (Rgb::new(246, 124, 95), light_text),
        64 => (Rgb::new(246, 94, 59), light_text),
        128 => (Rgb::new(237, 207, 114), light_text),
        256 => (Rgb::new(237, 204, 97), light_text),
        512 => (Rgb::new(237, 200, 80), light_text),
        1024 => (Rgb::new(237, 197, 63), light_text),
        2048 => (Rgb::new(237, 194, 46), light_text),
        _ => (Rgb::new(60, 58, 50), light_text),
    };

    CellStyle {
        fg,
        bg,
        bold: value >= 8,
    }
}
