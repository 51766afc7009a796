// skyportal/src/image/cipher.rs

//! Per-block image cipher.
//!
//! Each 16-byte block is XORed with an IV derived from its block index
//! (index big-endian in bytes 0..4, zeros after) and then run through
//! AES-128 under [`IMAGE_KEY`]. Decryption runs the inverse cipher first and
//! XORs the IV afterwards.

use std::sync::LazyLock;

use aes::Aes128;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};

use crate::constants::BLOCK_SIZE;

/// Fixed 128-bit image key.
///
/// Interoperability constant, not a secret. Existing encrypted dumps only
/// decode under this key and IV derivation.
pub const IMAGE_KEY: [u8; 16] = [
    0x20, 0x43, 0x6F, 0x70, 0x79, 0x72, 0x69, 0x67, 0x68, 0x74, 0x20, 0x28, 0x43, 0x29, 0x20, 0x32,
];

// Expanded once on first use; the schedule depends only on IMAGE_KEY.
static CIPHER: LazyLock<Aes128> =
    LazyLock::new(|| Aes128::new(GenericArray::from_slice(&IMAGE_KEY)));

/// IV for a block: index big-endian in the first four bytes.
pub fn block_iv(block_index: u32) -> [u8; BLOCK_SIZE] {
    let mut iv = [0u8; BLOCK_SIZE];
    iv[..4].copy_from_slice(&block_index.to_be_bytes());
    iv
}

fn xor_iv(buf: &mut [u8; BLOCK_SIZE], block_index: u32) {
    let iv = block_iv(block_index);
    for (b, k) in buf.iter_mut().zip(iv.iter()) {
        *b ^= k;
    }
}

/// Encrypt one block, returning the ciphertext.
pub fn encrypt_block(plain: &[u8; BLOCK_SIZE], block_index: u32) -> [u8; BLOCK_SIZE] {
    let mut out = *plain;
    xor_iv(&mut out, block_index);
    CIPHER.encrypt_block(GenericArray::from_mut_slice(&mut out));
    out
}

/// Decrypt one block, returning the plaintext.
pub fn decrypt_block(cipher: &[u8; BLOCK_SIZE], block_index: u32) -> [u8; BLOCK_SIZE] {
    let mut out = *cipher;
    CIPHER.decrypt_block(GenericArray::from_mut_slice(&mut out));
    xor_iv(&mut out, block_index);
    out
}

/// Encrypt every whole block of `data`, numbering blocks from zero.
///
/// A trailing partial block is copied through unprocessed.
pub fn encrypt_image(data: &[u8]) -> Vec<u8> {
    transform_image(data, encrypt_block)
}

/// Decrypt every whole block of `data`, numbering blocks from zero.
///
/// A trailing partial block is copied through unprocessed.
pub fn decrypt_image(data: &[u8]) -> Vec<u8> {
    transform_image(data, decrypt_block)
}

fn transform_image(
    data: &[u8],
    f: fn(&[u8; BLOCK_SIZE], u32) -> [u8; BLOCK_SIZE],
) -> Vec<u8> {
    let mut out = data.to_vec();
    let mut chunks = out.chunks_exact_mut(BLOCK_SIZE);
    for (i, chunk) in (&mut chunks).enumerate() {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        chunk.copy_from_slice(&f(&block, i as u32));
    }
    let rest = chunks.into_remainder().len();
    if rest != 0 {
        log::warn!(
            "image length {} is not a multiple of {}; last {} bytes left untouched",
            data.len(),
            BLOCK_SIZE,
            rest
        );
    }
    out
}
