//! Character-grid surface for terminals and tests

use std::fmt;

use super::Surface;
use crate::sim::Color;

const BALL: char = 'O';
const SOLID: char = '#';
const LINE: char = '|';

/// Rasterises a field onto a fixed grid of characters
#[derive(Debug, Clone)]
pub struct TextGrid {
    cols: usize,
    rows: usize,
    sx: f32,
    sy: f32,
    cells: Vec<char>,
    fill: Color,
}

impl TextGrid {
    pub fn new(cols: usize, rows: usize, field_width: f32, field_height: f32) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            sx: cols as f32 / field_width,
            sy: rows as f32 / field_height,
            cells: vec![' '; cols * rows],
            fill: Color::White,
        }
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> String {
        self.cells[row * self.cols..(row + 1) * self.cols]
            .iter()
            .collect()
    }

    fn index(&self, col: i64, row: i64) -> Option<usize> {
        if col >= 0 && row >= 0 && (col as usize) < self.cols && (row as usize) < self.rows {
            Some(row as usize * self.cols + col as usize)
        } else {
            None
        }
    }

    fn put(&mut self, col: i64, row: i64, ch: char) {
        if let Some(i) = self.index(col, row) {
            self.cells[i] = ch;
        }
    }

    fn col_of(&self, x: f32) -> i64 {
        (x * self.sx).floor() as i64
    }

    fn row_of(&self, y: f32) -> i64 {
        (y * self.sy).floor() as i64
    }

    /// Fill every cell whose top-left corner lies in the rect
    fn fill_cells(&mut self, x: f32, y: f32, w: f32, h: f32, ch: char) {
        let (c0, c1) = (self.col_of(x), self.col_of(x + w).max(self.col_of(x) + 1));
        let (r0, r1) = (self.row_of(y), self.row_of(y + h).max(self.row_of(y) + 1));
        for row in r0..r1 {
            for col in c0..c1 {
                self.put(col, row, ch);
            }
        }
    }

    fn write_centered(&mut self, text: &str, x: f32, y: f32) {
        let text = text.replace('\t', "   ");
        let len = text.chars().count() as i64;
        let start = self.col_of(x) - len / 2;
        let row = self.row_of(y);
        for (i, ch) in text.chars().enumerate() {
            self.put(start + i as i64, row, ch);
        }
    }
}

impl Surface for TextGrid {
    fn set_fill(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke(&mut self, _color: Color) {}

    fn set_font_size(&mut self, _size: f32) {}

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let ch = match self.fill {
            Color::Black => ' ',
            Color::White => SOLID,
        };
        self.fill_cells(x, y, w, h, ch);
    }

    fn fill_oval(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.fill_cells(x, y, w, h, BALL);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.write_centered(text, x, y);
    }

    fn stroke_text(&mut self, text: &str, x: f32, y: f32) {
        self.write_centered(text, x, y);
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let (c1, r1) = (self.col_of(x1), self.row_of(y1));
        let (c2, r2) = (self.col_of(x2), self.row_of(y2));
        let steps = (c2 - c1).abs().max((r2 - r1).abs()).max(1);
        for i in 0..=steps {
            let col = c1 + (c2 - c1) * i / steps;
            let row = r1 + (r2 - r1) * i / steps;
            // Don't paint over text or shapes
            if let Some(idx) = self.index(col, row) {
                if self.cells[idx] == ' ' {
                    self.cells[idx] = LINE;
                }
            }
        }
    }
}

impl fmt::Display for TextGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            writeln!(f, "{}", self.row(row).trim_end())?;
        }
        Ok(())
    }
}
