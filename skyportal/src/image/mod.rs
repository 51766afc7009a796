// skyportal/src/image/mod.rs

//! Figure images: the 1024-byte working copy, its checksum trailer and the
//! block cipher used when an image crosses into or out of storage.

/// Trailer checksum
pub mod checksum;
/// Block cipher
pub mod cipher;
/// Stored form
pub mod persist;

pub use checksum::{checksum, verify};
pub use cipher::{decrypt_block, decrypt_image, encrypt_block, encrypt_image};
pub use persist::{ChecksumPolicy, StorageFormat};

use std::fmt;

use zeroize::Zeroize;

use crate::constants::{BLOCK_SIZE, CHECKSUM_LEN, IMAGE_SIZE};
use crate::types::{BlockData, BlockIndex};
use crate::{Error, Result};

/// One figure image: 64 blocks of 16 bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Image([u8; IMAGE_SIZE]);

impl Image {
    /// All-zero image.
    pub fn zeroed() -> Self {
        Self([0u8; IMAGE_SIZE])
    }

    /// Build an image from the first 1024 bytes of `bytes`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < IMAGE_SIZE {
            return Err(Error::TooSmall {
                expected: IMAGE_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; IMAGE_SIZE];
        arr.copy_from_slice(&bytes[..IMAGE_SIZE]);
        Ok(Self(arr))
    }

    /// Borrow the whole image.
    pub fn as_bytes(&self) -> &[u8; IMAGE_SIZE] {
        &self.0
    }

    /// Copy of one block.
    pub fn block(&self, index: BlockIndex) -> BlockData {
        let off = index.offset();
        let mut arr = [0u8; BLOCK_SIZE];
        arr.copy_from_slice(&self.0[off..off + BLOCK_SIZE]);
        BlockData::from_bytes(arr)
    }

    /// Overwrite one block.
    pub fn set_block(&mut self, index: BlockIndex, data: &BlockData) {
        let off = index.offset();
        self.0[off..off + BLOCK_SIZE].copy_from_slice(data.as_bytes());
    }

    /// Bytes covered by the checksum trailer (`[0, 1022)`).
    pub fn payload(&self) -> &[u8] {
        &self.0[..IMAGE_SIZE - CHECKSUM_LEN]
    }

    /// Trailer value as stored.
    pub fn stored_checksum(&self) -> u16 {
        u16::from_be_bytes([self.0[IMAGE_SIZE - 2], self.0[IMAGE_SIZE - 1]])
    }

    /// Checksum of the payload.
    pub fn computed_checksum(&self) -> u16 {
        checksum(self.payload())
    }

    /// Whether the trailer matches the payload.
    pub fn verify_checksum(&self) -> bool {
        verify(&self.0)
    }

    /// Overwrite the trailer with the checksum of the current payload.
    pub fn stamp_checksum(&mut self) {
        let sum = self.computed_checksum();
        self.0[IMAGE_SIZE - CHECKSUM_LEN..].copy_from_slice(&sum.to_be_bytes());
    }
}

impl Default for Image {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl Zeroize for Image {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("len", &IMAGE_SIZE)
            .field("checksum", &format_args!("{:#06x}", self.stored_checksum()))
            .finish()
    }
}
