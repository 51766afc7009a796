// skyportal/src/protocol/responses/status.rs

use crate::Result;
use crate::constants::{RESP_STATUS, STATUS_RESPONSE_LEN};
use crate::protocol::parser::be_u16_at;

/// `S hi lo`: slot occupancy mask, big-endian.
pub fn encode_status(mask: u16) -> Vec<u8> {
    let [hi, lo] = mask.to_be_bytes();
    vec![RESP_STATUS, hi, lo]
}

/// Parse a status reply into its slot mask.
pub fn decode_status(data: &[u8]) -> Result<u16> {
    crate::protocol::parser::ensure_len(data, STATUS_RESPONSE_LEN)?;
    be_u16_at(data, 1)
}
