// skyportal/src/protocol/responses/block.rs

use crate::Result;
use crate::constants::{READ_RESPONSE_LEN, RESP_READ, RESP_WRITE, WRITE_RESPONSE_LEN};
use crate::protocol::parser::{block_at, ensure_len};
use crate::types::BlockData;

/// `Q slot block data[16]`
pub fn encode_read(slot: u8, block: u8, data: &BlockData) -> Vec<u8> {
    let mut out = Vec::with_capacity(READ_RESPONSE_LEN);
    out.push(RESP_READ);
    out.push(slot);
    out.push(block);
    out.extend_from_slice(data.as_bytes());
    out
}

/// Parse a read reply into (slot, block, data).
pub fn decode_read(data: &[u8]) -> Result<(u8, u8, BlockData)> {
    ensure_len(data, READ_RESPONSE_LEN)?;
    Ok((data[1], data[2], block_at(data, 3)?))
}

/// `W slot block`
pub fn encode_write(slot: u8, block: u8) -> Vec<u8> {
    vec![RESP_WRITE, slot, block]
}

/// Parse a write acknowledgement into (slot, block).
pub fn decode_write(data: &[u8]) -> Result<(u8, u8)> {
    ensure_len(data, WRITE_RESPONSE_LEN)?;
    Ok((data[1], data[2]))
}
