// skyportal/src/protocol/commands/mod.rs

/// Block read and write frames
pub mod block;
/// Color frame
pub mod control;

pub use block::{decode_read, decode_write, encode_read, encode_write};
pub use control::{decode_color, encode_color};

use crate::constants::*;
use crate::protocol::parser;
use crate::types::{BlockData, LedColor};

/// Host command. New commands should be added here and their per-command
/// codec placed in `protocol::commands::<group>.rs`.
///
/// Slot and block numbers are carried raw; range checks belong to the slot
/// store so that a bad index is reported as such rather than as a framing
/// problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `A`: start a session
    Activate,
    /// `D`: end the session
    Deactivate,
    /// `C`: set the LED color
    SetColor { color: LedColor, target: u8 },
    /// `S`: ask for the slot mask
    Status,
    /// `Q`: read one block
    ReadBlock { slot: u8, block: u8 },
    /// `W`: write one block
    WriteBlock { slot: u8, block: u8, data: BlockData },
    /// `R`: ask whether the portal is ready
    ReadyQuery,
    /// Any other opcode
    Unknown { opcode: u8 },
}

impl Command {
    /// Decode a raw frame. Bytes past the command's fixed length are
    /// ignored (transports pad to their report size).
    pub fn decode(frame: &[u8]) -> crate::Result<Self> {
        let opcode = parser::opcode(frame)?;
        let cmd = match opcode {
            CMD_ACTIVATE => Self::Activate,
            CMD_DEACTIVATE => Self::Deactivate,
            CMD_COLOR => {
                let (color, target) = decode_color(frame)?;
                Self::SetColor { color, target }
            }
            CMD_STATUS => Self::Status,
            CMD_READ => {
                let (slot, block) = decode_read(frame)?;
                Self::ReadBlock { slot, block }
            }
            CMD_WRITE => {
                let (slot, block, data) = decode_write(frame)?;
                Self::WriteBlock { slot, block, data }
            }
            CMD_READY => Self::ReadyQuery,
            other => Self::Unknown { opcode: other },
        };
        Ok(cmd)
    }

    /// Return the opcode byte.
    pub fn opcode(&self) -> u8 {
        match self {
            Self::Activate => CMD_ACTIVATE,
            Self::Deactivate => CMD_DEACTIVATE,
            Self::SetColor { .. } => CMD_COLOR,
            Self::Status => CMD_STATUS,
            Self::ReadBlock { .. } => CMD_READ,
            Self::WriteBlock { .. } => CMD_WRITE,
            Self::ReadyQuery => CMD_READY,
            Self::Unknown { opcode } => *opcode,
        }
    }

    /// Encode the command into an unpadded frame.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::SetColor { color, target } => encode_color(*color, *target),
            Self::ReadBlock { slot, block } => encode_read(*slot, *block),
            Self::WriteBlock { slot, block, data } => encode_write(*slot, *block, data),
            other => vec![other.opcode()],
        }
    }
}
