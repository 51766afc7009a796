// skyportal/src/lib.rs

//! skyportal
//!
//! Protocol engine and figure-image codec for an emulated toy NFC portal:
//! command decoding and dispatch, sixteen figure slots, the per-block image
//! cipher and the image checksum trailer.
#![warn(missing_docs)]

/// Runtime configuration
pub mod config;
/// Wire and image constants
pub mod constants;
/// Error type
pub mod error;
/// Figure images: checksum, cipher and stored form
pub mod image;
/// Protocol engine
pub mod portal;
/// Common imports
pub mod prelude;
/// Command and response codec
pub mod protocol;
/// Figure slots
pub mod slot;
/// Image persistence
pub mod storage;
/// Helpers shared by tests
pub mod test_support;
/// Frame transport boundary
pub mod transport;
/// Value types
pub mod types;
/// Small helpers
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
