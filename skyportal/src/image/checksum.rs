// skyportal/src/image/checksum.rs

/// Compute the 16-bit image checksum.
///
/// All bytes are summed into a 32-bit accumulator, the carries above bit 15
/// are folded back into the low half until none remain, and the complement
/// of the low 16 bits is returned. This must stay byte-for-byte compatible
/// with externally produced dumps.
pub fn checksum(bytes: &[u8]) -> u16 {
    let mut acc = bytes.iter().fold(0u32, |acc, &b| acc.wrapping_add(b as u32));
    while acc >> 16 != 0 {
        acc = (acc & 0xffff) + (acc >> 16);
    }
    !(acc as u16)
}

/// Read the big-endian checksum trailer stored in the last two bytes.
pub fn stored_checksum(bytes: &[u8]) -> Option<u16> {
    let n = bytes.len();
    if n < 2 {
        return None;
    }
    Some(u16::from_be_bytes([bytes[n - 2], bytes[n - 1]]))
}

/// Verify a buffer whose final two bytes are a big-endian checksum over
/// everything before them. Buffers shorter than two bytes never verify.
pub fn verify(bytes: &[u8]) -> bool {
    match stored_checksum(bytes) {
        Some(stored) => stored == checksum(&bytes[..bytes.len() - 2]),
        None => false,
    }
}
