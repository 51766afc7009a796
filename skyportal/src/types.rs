// skyportal/src/types.rs

use crate::constants::{BLOCK_SIZE, BLOCKS_PER_IMAGE, MAX_SLOTS};
use crate::{Error, Result};
use derive_more::Display;
use std::convert::TryFrom;

/// Slot index - Newtype Pattern, always in `0..16`
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{}", _0)]
pub struct SlotIndex(u8);

impl SlotIndex {
    /// Validate a raw slot number.
    pub fn new(slot: usize) -> Result<Self> {
        if slot >= MAX_SLOTS {
            return Err(Error::InvalidSlot { slot });
        }
        Ok(Self(slot as u8))
    }

    /// Raw index as a byte.
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Raw index for array access.
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    /// Bit for this slot in the status mask
    pub fn mask(&self) -> u16 {
        1 << self.0
    }

    /// Iterate over every slot index in ascending order.
    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..MAX_SLOTS as u8).map(SlotIndex)
    }
}

impl TryFrom<u8> for SlotIndex {
    type Error = Error;

    fn try_from(slot: u8) -> Result<Self> {
        Self::new(slot as usize)
    }
}

/// Block index within an image - Newtype Pattern, always in `0..64`
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{}", _0)]
pub struct BlockIndex(u8);

impl BlockIndex {
    /// Validate a raw block number.
    pub fn new(block: usize) -> Result<Self> {
        if block >= BLOCKS_PER_IMAGE {
            return Err(Error::InvalidBlock { block });
        }
        Ok(Self(block as u8))
    }

    /// Raw index as a byte.
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Raw index for array access.
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    /// Byte offset of this block inside an image
    pub fn offset(&self) -> usize {
        self.as_usize() * BLOCK_SIZE
    }
}

impl TryFrom<u8> for BlockIndex {
    type Error = Error;

    fn try_from(block: u8) -> Result<Self> {
        Self::new(block as usize)
    }
}

/// BlockData (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockData([u8; BLOCK_SIZE]);

impl BlockData {
    /// Wrap raw block bytes.
    pub fn from_bytes(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    /// A block with every byte set to `byte`.
    pub fn filled(byte: u8) -> Self {
        Self([byte; BLOCK_SIZE])
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }

    /// Unwrap into the raw bytes.
    pub fn into_bytes(self) -> [u8; BLOCK_SIZE] {
        self.0
    }

    /// Space separated hex, for logs.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    /// Printable ASCII with `.` for everything else.
    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != BLOCK_SIZE {
            return Err(Error::InvalidLength {
                expected: BLOCK_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; BLOCK_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Portal state
///
/// `Ready` is never entered by any command; it is kept distinct from
/// `Activated` and both answer a ready-query.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PortalState {
    /// No session; ready-queries go unanswered.
    #[default]
    #[display(fmt = "idle")]
    Idle,
    /// Host sent activate.
    #[display(fmt = "activated")]
    Activated,
    /// Ready without an explicit activate.
    #[display(fmt = "ready")]
    Ready,
}

impl PortalState {
    /// Whether a ready-query gets an affirmative answer in this state.
    pub fn answers_ready(&self) -> bool {
        matches!(self, PortalState::Activated | PortalState::Ready)
    }
}

/// LED color. Stored for status reporting only.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[display(fmt = "#{:02x}{:02x}{:02x}", r, g, b)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LedColor {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl LedColor {
    /// Color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `[r, g, b]` as sent on the wire.
    pub fn to_bytes(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}
