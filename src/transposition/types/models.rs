//! Core data structures for the transposition engine.
//!
//! This module defines the configuration types used throughout the library:
//! - Grid traversal modes for writing (fill) and reading
//! - Grid coordinates
//! - Per-stage core options and the public option set

use std::fmt;
use std::str::FromStr;

use log::debug;

use super::error::{Result, TranspositionError};

/// Default character used to fill incomplete grid cells.
pub const DEFAULT_PAD_CHAR: char = 'X';

/// A single `(row, col)` position in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Order in which the padded input is written into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillMode {
    /// Row by row, left to right.
    #[default]
    RowLr,
    /// Row by row, right to left.
    RowRl,
    /// Column by column, top to bottom.
    ColTb,
    /// Column by column, bottom to top.
    ColBt,
}

/// Order in which the transformed string is read out of the grid.
///
/// Every variant visits columns in key order rather than raw index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReadMode {
    /// Columns in key order, each top to bottom.
    #[default]
    ColTb,
    /// Columns in key order, each bottom to top.
    ColBt,
    /// Row by row, columns in key order.
    RowLr,
    /// Row by row, columns in reversed key order.
    RowRl,
}

/// Maps a mode token to its position in `[row-lr, row-rl, col-tb, col-bt]`.
fn mode_index(s: &str) -> Option<usize> {
    match s.trim().to_ascii_lowercase().as_str() {
        "row-lr" => Some(0),
        "row-rl" => Some(1),
        "col-tb" => Some(2),
        "col-bt" => Some(3),
        _ => None,
    }
}

impl FillMode {
    pub const ALL: [FillMode; 4] = [FillMode::RowLr, FillMode::RowRl, FillMode::ColTb, FillMode::ColBt];

    pub fn as_str(self) -> &'static str {
        match self {
            FillMode::RowLr => "row-lr",
            FillMode::RowRl => "row-rl",
            FillMode::ColTb => "col-tb",
            FillMode::ColBt => "col-bt",
        }
    }

    /// Parses a mode string, falling back to [`FillMode::RowLr`] for anything unknown.
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            debug!("Unknown fill mode {:?}, using {}", s, FillMode::default());
            FillMode::default()
        })
    }
}

impl ReadMode {
    pub const ALL: [ReadMode; 4] = [ReadMode::RowLr, ReadMode::RowRl, ReadMode::ColTb, ReadMode::ColBt];

    pub fn as_str(self) -> &'static str {
        match self {
            ReadMode::RowLr => "row-lr",
            ReadMode::RowRl => "row-rl",
            ReadMode::ColTb => "col-tb",
            ReadMode::ColBt => "col-bt",
        }
    }

    /// Parses a mode string, falling back to [`ReadMode::ColTb`] for anything unknown.
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            debug!("Unknown read mode {:?}, using {}", s, ReadMode::default());
            ReadMode::default()
        })
    }
}

impl FromStr for FillMode {
    type Err = TranspositionError;

    fn from_str(s: &str) -> Result<Self> {
        mode_index(s)
            .map(|i| FillMode::ALL[i])
            .ok_or_else(|| TranspositionError::UnknownMode(s.to_string()))
    }
}

impl FromStr for ReadMode {
    type Err = TranspositionError;

    fn from_str(s: &str) -> Result<Self> {
        mode_index(s)
            .map(|i| ReadMode::ALL[i])
            .ok_or_else(|| TranspositionError::UnknownMode(s.to_string()))
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ReadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for a single core transposition stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreOptions<'a> {
    /// Defines both the column count and the column order.
    pub key: &'a str,
    pub fill_mode: FillMode,
    pub read_mode: ReadMode,
    pub pad_char: char,
}

impl Default for CoreOptions<'_> {
    fn default() -> Self {
        Self {
            key: "",
            fill_mode: FillMode::default(),
            read_mode: ReadMode::default(),
            pad_char: DEFAULT_PAD_CHAR,
        }
    }
}

impl<'a> CoreOptions<'a> {
    pub fn new(key: &'a str) -> Self {
        Self { key, ..Self::default() }
    }

    /// Number of grid columns: the key length in characters, at least 1.
    pub fn cols(&self) -> usize {
        self.key.chars().count().max(1)
    }
}

/// Complete option set for [`transpose_encrypt`](crate::transpose_encrypt)
/// and [`transpose_decrypt`](crate::transpose_decrypt).
///
/// Built with [`Default`] plus the chaining setters:
///
/// ```
/// use transposition_cipher::{ReadMode, TranspositionOptions};
///
/// let opts = TranspositionOptions::default()
///     .with_key1("ZEBRA")
///     .with_key2("KEY")
///     .double(true)
///     .read_mode(ReadMode::ColBt)
///     .letters_only(true);
/// assert_eq!(opts.secondary_key(), "KEY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspositionOptions {
    pub key1: String,
    /// Only consulted when `double` is set. `None` or empty means `key1`.
    pub key2: Option<String>,
    pub double: bool,
    pub fill_mode: FillMode,
    pub read_mode: ReadMode,
    pub pad_char: char,
    /// Uppercase, strip diacritics and drop everything outside `A`-`Z` before encrypting.
    pub normalize: bool,
    /// Permute letters only and keep every other character in place.
    /// Ignored when `normalize` is set.
    pub letters_only: bool,
}

impl Default for TranspositionOptions {
    fn default() -> Self {
        Self {
            key1: String::new(),
            key2: None,
            double: false,
            fill_mode: FillMode::default(),
            read_mode: ReadMode::default(),
            pad_char: DEFAULT_PAD_CHAR,
            normalize: false,
            letters_only: false,
        }
    }
}

impl TranspositionOptions {
    /// Shortcut for a single transposition with `key1` and all defaults.
    pub fn new(key1: impl Into<String>) -> Self {
        Self::default().with_key1(key1)
    }

    pub fn with_key1(mut self, key: impl Into<String>) -> Self {
        self.key1 = key.into();
        self
    }

    pub fn with_key2(mut self, key: impl Into<String>) -> Self {
        self.key2 = Some(key.into());
        self
    }

    pub fn double(mut self, double: bool) -> Self {
        self.double = double;
        self
    }

    pub fn fill_mode(mut self, mode: FillMode) -> Self {
        self.fill_mode = mode;
        self
    }

    pub fn read_mode(mut self, mode: ReadMode) -> Self {
        self.read_mode = mode;
        self
    }

    pub fn pad_char(mut self, pad: char) -> Self {
        self.pad_char = pad;
        self
    }

    /// Uses the first character of `pad`; an empty string selects the default `'X'`.
    pub fn pad_str(mut self, pad: &str) -> Self {
        self.pad_char = pad.chars().next().unwrap_or(DEFAULT_PAD_CHAR);
        self
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn letters_only(mut self, letters_only: bool) -> Self {
        self.letters_only = letters_only;
        self
    }

    /// Key for the second stage of a double transposition.
    pub fn secondary_key(&self) -> &str {
        match self.key2.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => &self.key1,
        }
    }

    /// True when the letters-only path applies (it is skipped under `normalize`).
    pub fn uses_letters_only(&self) -> bool {
        self.letters_only && !self.normalize
    }

    /// Core options for a stage keyed with `key`, sharing modes and padding.
    pub fn core_options<'a>(&self, key: &'a str) -> CoreOptions<'a> {
        CoreOptions {
            key,
            fill_mode: self.fill_mode,
            read_mode: self.read_mode,
            pad_char: self.pad_char,
        }
    }
}
