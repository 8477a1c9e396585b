//! Grid traversal orders and the character grid itself.
//!
//! A transposition writes its padded input into a `rows × cols` grid along a
//! *fill order* and reads the output back along a *read order*. Both orders
//! are permutations of the same cell set, which is what makes the transform
//! invertible: decryption simply swaps the two.

use std::fmt;

use super::key_order::column_order;
use super::types::models::{Cell, FillMode, ReadMode};

/// Builds the sequence of cells used to write text into the grid.
///
/// Always returns exactly `rows * cols` cells, each cell once.
pub fn build_fill_order(rows: usize, cols: usize, mode: FillMode) -> Vec<Cell> {
    let mut out = Vec::with_capacity(rows * cols);
    match mode {
        FillMode::RowLr => {
            for r in 0..rows {
                out.extend((0..cols).map(|c| Cell::new(r, c)));
            }
        }
        FillMode::RowRl => {
            for r in 0..rows {
                out.extend((0..cols).rev().map(|c| Cell::new(r, c)));
            }
        }
        FillMode::ColTb => {
            for c in 0..cols {
                out.extend((0..rows).map(|r| Cell::new(r, c)));
            }
        }
        FillMode::ColBt => {
            for c in 0..cols {
                out.extend((0..rows).rev().map(|r| Cell::new(r, c)));
            }
        }
    }
    out
}

/// Builds the sequence of cells used to read text out of the grid.
///
/// Wherever columns are iterated they follow [`column_order`] of `key`
/// instead of raw index order. Always returns exactly `rows * cols` cells.
pub fn build_read_order(rows: usize, cols: usize, key: &str, mode: ReadMode) -> Vec<Cell> {
    let col_order = column_order(key, cols);
    let mut out = Vec::with_capacity(rows * cols);
    match mode {
        ReadMode::ColTb => {
            for &c in &col_order {
                out.extend((0..rows).map(|r| Cell::new(r, c)));
            }
        }
        ReadMode::ColBt => {
            for &c in &col_order {
                out.extend((0..rows).rev().map(|r| Cell::new(r, c)));
            }
        }
        ReadMode::RowRl => {
            for r in 0..rows {
                out.extend(col_order.iter().rev().map(|&c| Cell::new(r, c)));
            }
        }
        ReadMode::RowLr => {
            for r in 0..rows {
                out.extend(col_order.iter().map(|&c| Cell::new(r, c)));
            }
        }
    }
    out
}

/// A fully populated `rows × cols` character grid, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Creates a grid with every cell set to `pad`.
    pub fn new(rows: usize, cols: usize, pad: char) -> Self {
        Self {
            rows,
            cols,
            cells: vec![pad; rows * cols],
        }
    }

    /// Pads `text` and writes it into a grid shaped by `key` along `fill_mode`.
    ///
    /// This is the intermediate table of the first encryption step, useful for
    /// showing how a key lays the text out.
    pub fn filled(text: &str, key: &str, fill_mode: FillMode, pad: char) -> Self {
        let cols = key.chars().count().max(1);
        let rows = text.chars().count().div_ceil(cols);
        let mut grid = Self::new(rows, cols, pad);
        grid.write(&build_fill_order(rows, cols, fill_mode), text.chars());
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the character at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// Writes `chars` along `order`; stops at whichever runs out first.
    pub fn write(&mut self, order: &[Cell], chars: impl IntoIterator<Item = char>) {
        for (cell, ch) in order.iter().zip(chars) {
            if let Some(slot) = self.cells.get_mut(cell.row * self.cols + cell.col) {
                *slot = ch;
            }
        }
    }

    /// Concatenates the characters visited along `order`.
    pub fn read(&self, order: &[Cell]) -> String {
        order.iter().filter_map(|cell| self.get(cell.row, cell.col)).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, ch) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}
