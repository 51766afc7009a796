// skyportal/src/protocol/responses/mod.rs

/// Block read and write replies
pub mod block;
/// Status reply
pub mod status;

pub use status::{decode_status, encode_status};

use crate::constants::*;
use crate::protocol::parser;
use crate::types::BlockData;

/// Portal response. Per-response codecs live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Ready acknowledgement
    Ready,
    /// Slot occupancy mask
    Status { mask: u16 },
    /// Block contents
    ReadBlock { slot: u8, block: u8, data: BlockData },
    /// Write acknowledgement
    WriteBlock { slot: u8, block: u8 },
}

impl Response {
    /// Encode into the exact bytes sent back to the host.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Ready => vec![RESP_READY],
            Self::Status { mask } => encode_status(*mask),
            Self::ReadBlock { slot, block, data } => block::encode_read(*slot, *block, data),
            Self::WriteBlock { slot, block } => block::encode_write(*slot, *block),
        }
    }

    /// Return the response tag byte.
    pub fn response_code(&self) -> u8 {
        match self {
            Self::Ready => RESP_READY,
            Self::Status { .. } => RESP_STATUS,
            Self::ReadBlock { .. } => RESP_READ,
            Self::WriteBlock { .. } => RESP_WRITE,
        }
    }

    /// The tag a host should expect in reply to `cmd_opcode`, or `None`
    /// for commands the portal never answers.
    pub fn expected_code(cmd_opcode: u8) -> Option<u8> {
        match cmd_opcode {
            CMD_ACTIVATE | CMD_READY => Some(RESP_READY),
            CMD_STATUS => Some(RESP_STATUS),
            CMD_READ => Some(RESP_READ),
            CMD_WRITE => Some(RESP_WRITE),
            _ => None,
        }
    }

    /// Decode a response frame (host side) for the given command opcode.
    pub fn decode(expected_cmd: u8, data: &[u8]) -> crate::Result<Self> {
        let actual = parser::byte_at(data, 0)?;
        let expected = Self::expected_code(expected_cmd).ok_or(crate::Error::UnexpectedResponse {
            expected: expected_cmd,
            actual,
        })?;
        parser::expect_response_code(data, expected)?;

        match expected {
            RESP_READY => Ok(Self::Ready),
            RESP_STATUS => Ok(Self::Status {
                mask: decode_status(data)?,
            }),
            RESP_READ => {
                let (slot, block, data) = block::decode_read(data)?;
                Ok(Self::ReadBlock { slot, block, data })
            }
            _ => {
                let (slot, block) = block::decode_write(data)?;
                Ok(Self::WriteBlock { slot, block })
            }
        }
    }
}
