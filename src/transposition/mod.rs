//! Columnar transposition cipher engine.
//!
//! # Module Organization
//!
//! - [`types`]: Options, traversal modes, errors and the [`Cipher`] trait
//! - [`key_order`]: Column permutation derived from a key
//! - [`grid`]: Fill/read traversal orders and the character grid
//! - [`columnar`]: Single-stage encrypt/decrypt primitives
//! - [`letters`]: Letters-only adapter preserving the non-letter skeleton
//! - [`normalize`]: Reduction to the bare `A`-`Z` alphabet
//! - [`cipher`]: Public API composing the above, including double transposition
//! - [`cli`]: Argument parsing for the `transpose` binary
//!
//! # Architecture
//!
//! ```text
//!  plaintext
//!     │
//!     ├─ normalize ─────────────────┐           (optional)
//!     ├─ letters-only extract ──────┤           (optional)
//!     ▼                             ▼
//!  columnar(key1) ─► columnar(key2) ─► ciphertext   (key2 stage only when double)
//!     │
//!     └─ fill order ─► Grid ─► read order
//! ```

pub mod cipher;
pub mod cli;
pub mod columnar;
pub mod grid;
pub mod key_order;
pub mod letters;
pub mod normalize;
pub mod types;

pub use cipher::{transpose_decrypt, transpose_encrypt, Transposition};
pub use types::cipher::Cipher;
pub use types::error::{Result, TranspositionError};
