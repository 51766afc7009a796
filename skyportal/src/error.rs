// skyportal/src/error.rs

use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    /// Slot number outside `0..16`.
    #[error("invalid slot {slot}")]
    InvalidSlot { slot: usize },

    /// Operation needs a loaded image but the slot is empty.
    #[error("slot {slot} is empty")]
    SlotEmpty { slot: usize },

    /// Block number outside `0..64`.
    #[error("invalid block {block}")]
    InvalidBlock { block: usize },

    /// Source name does not end in an allowed image extension.
    #[error("invalid image extension: {0}")]
    InvalidExtension(String),

    /// Image data shorter than a full image.
    #[error("image too small: expected at least {expected} bytes, got {actual}")]
    TooSmall { expected: usize, actual: usize },

    /// Undersized or otherwise malformed command frame.
    #[error("invalid frame length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Zero-length command frame.
    #[error("empty frame")]
    EmptyFrame,

    /// Response tag does not match the command it answers.
    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    /// Image trailer disagrees with the payload checksum.
    #[error("checksum mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch { expected: u16, actual: u16 },

    /// Storage refused an image name.
    #[error("invalid image name: {0}")]
    InvalidName(String),

    /// Storage I/O failure.
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport delivered no frame in time.
    #[error("operation timed out")]
    Timeout,

    /// Transport has no more frames to deliver.
    #[error("transport closed")]
    TransportClosed,
}

impl Error {
    /// True for failures caused by the shape of a frame rather than by the
    /// state of a slot.
    pub fn is_protocol_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidLength { .. } | Error::EmptyFrame | Error::UnexpectedResponse { .. }
        )
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
