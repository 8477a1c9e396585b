//! Foundational data structures, error types, and the cipher trait.

pub mod cipher;
pub mod error;
pub mod models;
