// fixtures.rs: commonly used images and frames

use skyportal::constants::IMAGE_SIZE;
use skyportal::image::checksum;
use skyportal::types::BlockData;

/// An image whose bytes count up, with a valid checksum trailer.
pub fn counting_image() -> Vec<u8> {
    let mut img: Vec<u8> = (0..IMAGE_SIZE).map(|i| (i % 251) as u8).collect();
    let sum = checksum(&img[..IMAGE_SIZE - 2]);
    img[IMAGE_SIZE - 2..].copy_from_slice(&sum.to_be_bytes());
    img
}

pub fn zero_image() -> Vec<u8> {
    vec![0u8; IMAGE_SIZE]
}

pub fn read_frame(slot: u8, block: u8) -> Vec<u8> {
    vec![b'Q', slot, block]
}

pub fn sample_blockdata(fill: u8) -> BlockData {
    BlockData::filled(fill)
}

/// A HID-style 32-byte report carrying `payload`.
pub fn padded(payload: &[u8]) -> Vec<u8> {
    let mut frame = payload.to_vec();
    frame.resize(32, 0);
    frame
}
