// skyportal/src/image/persist.rs

//! Conversion between the live image and its persisted byte form.

use derive_more::Display;

use super::{Image, cipher};
use crate::constants::IMAGE_SIZE;
use crate::{Error, Result};

/// How images are laid out in storage.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StorageFormat {
    /// Raw plaintext dump
    #[default]
    #[display(fmt = "plain")]
    Plain,
    /// Every block run through the image cipher
    #[display(fmt = "encrypted")]
    Encrypted,
}

/// What to do when an imported image's trailer does not match its payload.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChecksumPolicy {
    /// Accept any trailer
    #[display(fmt = "ignore")]
    Ignore,
    /// Accept, logging a warning
    #[default]
    #[display(fmt = "warn")]
    Warn,
    /// Reject with `ChecksumMismatch`
    #[display(fmt = "enforce")]
    Enforce,
}

/// Turn stored bytes into a plaintext image.
///
/// Only the first 1024 bytes are used; anything shorter is `TooSmall`.
pub fn decode_stored(bytes: &[u8], format: StorageFormat, policy: ChecksumPolicy) -> Result<Image> {
    if bytes.len() < IMAGE_SIZE {
        return Err(Error::TooSmall {
            expected: IMAGE_SIZE,
            actual: bytes.len(),
        });
    }
    let image = match format {
        StorageFormat::Plain => Image::from_slice(bytes)?,
        StorageFormat::Encrypted => Image::from_slice(&cipher::decrypt_image(&bytes[..IMAGE_SIZE]))?,
    };
    check_trailer(&image, policy)?;
    Ok(image)
}

/// Produce the bytes to hand to storage for `image`.
///
/// With `stamp` set, the trailer of the persisted copy is rewritten; the
/// caller's image is left as is.
pub fn encode_for_storage(image: &Image, format: StorageFormat, stamp: bool) -> Vec<u8> {
    let mut copy = image.clone();
    if stamp {
        copy.stamp_checksum();
    }
    match format {
        StorageFormat::Plain => copy.as_bytes().to_vec(),
        StorageFormat::Encrypted => cipher::encrypt_image(copy.as_bytes()),
    }
}

fn check_trailer(image: &Image, policy: ChecksumPolicy) -> Result<()> {
    if policy == ChecksumPolicy::Ignore || image.verify_checksum() {
        return Ok(());
    }
    let expected = image.computed_checksum();
    let actual = image.stored_checksum();
    match policy {
        ChecksumPolicy::Enforce => Err(Error::ChecksumMismatch { expected, actual }),
        _ => {
            log::warn!(
                "image checksum mismatch: expected {:#06x}, stored {:#06x}",
                expected,
                actual
            );
            Ok(())
        }
    }
}
