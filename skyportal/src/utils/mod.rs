//! Small, reusable helpers used across the crate.

/// Hex formatting
pub mod hex;

pub use hex::*;
