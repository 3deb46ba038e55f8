//! Character grid the screen is rendered into before it reaches the terminal
//!
//! Rendering into a grid keeps drawing pure, so layout can be asserted as
//! plain string lines in tests.

use crate::keypad::Area;

/// Fixed-size character grid, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGrid {
    cells: Vec<char>,
    width: u16,
    height: u16,
}

impl TextGrid {
    /// Create a grid filled with spaces
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![' '; size],
            width,
            height,
        }
    }

    /// Grid width
    #[inline]
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Grid height
    #[inline]
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Character at (x, y)
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set the character at (x, y); out-of-range writes are dropped
    pub fn set(&mut self, x: u16, y: u16, ch: char) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = ch;
        }
    }

    /// Write a string starting at (x, y), truncated at the right edge
    pub fn write_str(&mut self, x: u16, y: u16, s: &str) {
        for (offset, ch) in s.chars().enumerate() {
            let pos_x = x as usize + offset;
            if pos_x >= self.width as usize {
                break;
            }
            self.set(pos_x as u16, y, ch);
        }
    }

    /// Write `s` right-aligned inside `area` on row `y`
    ///
    /// Text wider than the area keeps its rightmost characters.
    pub fn write_right(&mut self, area: Area, y: u16, s: &str) {
        let width = area.width as usize;
        let chars: Vec<char> = s.chars().collect();
        let visible = &chars[chars.len().saturating_sub(width)..];
        let start = area.x as usize + width - visible.len();
        for (offset, ch) in visible.iter().enumerate() {
            self.set((start + offset) as u16, y, *ch);
        }
    }

    /// Write `s` centered inside `area` on row `y`
    pub fn write_centered(&mut self, area: Area, y: u16, s: &str) {
        let len = s.chars().count() as u16;
        let x = area.x + area.width.saturating_sub(len) / 2;
        self.write_str(x, y, s);
    }

    /// Draw a single-line box around the whole grid
    pub fn draw_border(&mut self) {
        if self.width < 2 || self.height < 2 {
            return;
        }
        let right = self.width - 1;
        let bottom = self.height - 1;
        for x in 1..right {
            self.set(x, 0, '─');
            self.set(x, bottom, '─');
        }
        for y in 1..bottom {
            self.set(0, y, '│');
            self.set(right, y, '│');
        }
        self.set(0, 0, '┌');
        self.set(right, 0, '┐');
        self.set(0, bottom, '└');
        self.set(right, bottom, '┘');
    }

    /// Draw a horizontal divider joining the border on row `y`
    pub fn draw_divider(&mut self, y: u16) {
        if self.width < 2 {
            return;
        }
        let right = self.width - 1;
        for x in 1..right {
            self.set(x, y, '─');
        }
        self.set(0, y, '├');
        self.set(right, y, '┤');
    }

    /// Convert the grid to string lines, trailing spaces trimmed
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1) as usize)
            .take(self.height as usize)
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }
}
