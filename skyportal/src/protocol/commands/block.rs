// skyportal/src/protocol/commands/block.rs

use crate::Result;
use crate::constants::{CMD_READ, CMD_WRITE, READ_FRAME_LEN, WRITE_FRAME_LEN};
use crate::protocol::parser::{block_at, ensure_len};
use crate::types::BlockData;

/// Decode `Q slot block`. Returns (slot, block).
pub fn decode_read(frame: &[u8]) -> Result<(u8, u8)> {
    ensure_len(frame, READ_FRAME_LEN)?;
    Ok((frame[1], frame[2]))
}

/// Decode `W slot block data[16]`. Returns (slot, block, data).
pub fn decode_write(frame: &[u8]) -> Result<(u8, u8, BlockData)> {
    ensure_len(frame, WRITE_FRAME_LEN)?;
    let data = block_at(frame, 3)?;
    Ok((frame[1], frame[2], data))
}

/// Build a `Q` frame.
pub fn encode_read(slot: u8, block: u8) -> Vec<u8> {
    vec![CMD_READ, slot, block]
}

/// Build a `W` frame.
pub fn encode_write(slot: u8, block: u8, data: &BlockData) -> Vec<u8> {
    let mut out = Vec::with_capacity(WRITE_FRAME_LEN);
    out.push(CMD_WRITE);
    out.push(slot);
    out.push(block);
    out.extend_from_slice(data.as_bytes());
    out
}
