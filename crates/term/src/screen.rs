//! Screen: a small char+style grid the view draws into.
//!
//! Callers keep one `Screen` across frames and resize it when the terminal
//! size changes. The renderer flushes it with a full redraw; the board only
//! changes on key presses, so there is nothing to diff.

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

pub struct Screen {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Screen {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize and clear. A no-op resize still clears the contents.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width as usize + x as usize])
    }

    /// Set a cell. Out-of-bounds writes are clipped (returns false).
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[y as usize * self.width as usize + x as usize] = cell;
        true
    }

    /// Write a string starting at (x, y), clipping at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle) {
        for (i, ch) in text.chars().enumerate() {
            let cx = x.saturating_add(i as u16);
            if !self.set(cx, y, Cell { ch, style }) {
                break;
            }
        }
    }

    /// Fill a rectangle with one styled character.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, Cell { ch, style });
            }
        }
    }

    /// Row contents as plain text (test scraping helper).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .map(|x| self.get(x, y).map(|c| c.ch).unwrap_or(' '))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_str_and_row_text() {
        let mut screen = Screen::new(10, 2);
        screen.put_str(2, 1, "2048", CellStyle::default());
        assert_eq!(screen.row_text(1), "  2048    ");
        assert_eq!(screen.row_text(0), "          ");
    }

    #[test]
    fn test_put_str_clips_at_edge() {
        let mut screen = Screen::new(4, 1);
        screen.put_str(2, 0, "abcdef", CellStyle::default());
        assert_eq!(screen.row_text(0), "  ab");
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut screen = Screen::new(2, 2);
        assert!(!screen.set(2, 0, Cell::default()));
        assert!(!screen.set(0, 2, Cell::default()));
        assert!(screen.set(1, 1, Cell::default()));
    }

    #[test]
    fn test_resize_clears() {
        let mut screen = Screen::new(3, 1);
        screen.put_str(0, 0, "xyz", CellStyle::default());
        screen.resize(3, 1);
        assert_eq!(screen.row_text(0), "   ");
    }
}
