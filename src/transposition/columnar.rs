//! Single-stage transposition primitives.
//!
//! Process for encryption:
//! 1. Derive the grid shape from the key length and the text length
//! 2. Right-pad the text to fill every cell
//! 3. Write it into the grid along the fill order
//! 4. Read the grid along the read order
//!
//! Decryption runs the same steps with the two orders swapped.
//!
//! The `_irregular` variants skip the cells the text does not reach instead
//! of padding them, so the output is a pure permutation of the input.

use log::debug;

use super::grid::{build_fill_order, build_read_order, Grid};
use super::types::models::{Cell, CoreOptions};

/// Grid shape and traversal orders for one stage.
struct Layout {
    grid: Grid,
    fill_order: Vec<Cell>,
    read_order: Vec<Cell>,
}

impl Layout {
    fn for_input(input: &str, opts: &CoreOptions<'_>) -> Self {
        let cols = opts.cols();
        let rows = input.chars().count().div_ceil(cols);
        debug!(
            "Transposition grid {}x{} (fill={}, read={})",
            rows, cols, opts.fill_mode, opts.read_mode
        );
        Self {
            grid: Grid::new(rows, cols, opts.pad_char),
            fill_order: build_fill_order(rows, cols, opts.fill_mode),
            read_order: build_read_order(rows, cols, opts.key, opts.read_mode),
        }
    }

    /// Read order restricted to the first `len` cells of the fill order.
    fn occupied_read_order(&self, len: usize) -> Vec<Cell> {
        let cols = self.grid.cols();
        let mut occupied = vec![false; self.fill_order.len()];
        for cell in self.fill_order.iter().take(len) {
            occupied[cell.row * cols + cell.col] = true;
        }
        self.read_order
            .iter()
            .copied()
            .filter(|cell| occupied[cell.row * cols + cell.col])
            .collect()
    }
}

/// Encrypts `text` with a single transposition.
///
/// The output has length `rows * cols`: the input is padded with
/// `opts.pad_char` until the grid is full. Empty input gives an empty output.
pub fn core_encrypt(text: &str, opts: &CoreOptions<'_>) -> String {
    let Layout {
        mut grid,
        fill_order,
        read_order,
    } = Layout::for_input(text, opts);
    // Cells not reached by the text keep the pad character.
    grid.write(&fill_order, text.chars());
    grid.read(&read_order)
}

/// Inverts [`core_encrypt`] for the same options.
///
/// The result is the padded plaintext; trailing pad characters are not
/// removed since the original length is not recoverable from the ciphertext.
pub fn core_decrypt(cipher: &str, opts: &CoreOptions<'_>) -> String {
    let Layout {
        mut grid,
        fill_order,
        read_order,
    } = Layout::for_input(cipher, opts);
    grid.write(&read_order, cipher.chars());
    grid.read(&fill_order)
}

/// Encrypts `text` over an irregular grid: no padding is added and the
/// output has exactly as many characters as the input.
///
/// When the text fills the grid completely this matches [`core_encrypt`].
pub fn core_encrypt_irregular(text: &str, opts: &CoreOptions<'_>) -> String {
    let len = text.chars().count();
    let mut layout = Layout::for_input(text, opts);
    let read_order = layout.occupied_read_order(len);
    layout.grid.write(&layout.fill_order, text.chars());
    layout.grid.read(&read_order)
}

/// Inverts [`core_encrypt_irregular`] for the same options.
pub fn core_decrypt_irregular(cipher: &str, opts: &CoreOptions<'_>) -> String {
    let len = cipher.chars().count();
    let mut layout = Layout::for_input(cipher, opts);
    let read_order = layout.occupied_read_order(len);
    layout.grid.write(&read_order, cipher.chars());
    layout.grid.read(&layout.fill_order[..len])
}
