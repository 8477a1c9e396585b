//! # transposition-cipher
//!
//! A keyed columnar transposition cipher.
//! Supports four fill and four read traversals, double transposition with a
//! second key, a letters-only mode that keeps punctuation and spacing in
//! place, and `A`-`Z` normalization.
//!
//! **Note:** Padding added to complete the grid is part of the ciphertext and
//! is not stripped on decryption; track the original length if you need it.
pub mod transposition;

// Re-export the main types for convenience
pub use transposition::{
    cipher::{transpose_decrypt, transpose_encrypt, Transposition},
    columnar::{core_decrypt, core_decrypt_irregular, core_encrypt, core_encrypt_irregular},
    grid::{build_fill_order, build_read_order, Grid},
    key_order::column_order,
    letters::{is_letter, transform_letters_only},
    normalize::normalize_az,
    types::{
        cipher::Cipher,
        error::{Result, TranspositionError},
        models::{Cell, CoreOptions, FillMode, ReadMode, TranspositionOptions, DEFAULT_PAD_CHAR},
    },
};
