// skyportal/src/protocol/codec.rs

use crate::{Error, Result};

use super::commands::Command;
use super::responses::Response;

/// Encode a Command into a report of `report_len` bytes, zero padded the
/// way a HID host pads its output reports.
pub fn encode_command_frame(cmd: &Command, report_len: usize) -> Result<Vec<u8>> {
    let mut frame = cmd.encode();
    if frame.len() > report_len {
        return Err(Error::InvalidLength {
            expected: report_len,
            actual: frame.len(),
        });
    }
    frame.resize(report_len, 0);
    Ok(frame)
}

/// Decode a response frame for the command that triggered it. Trailing
/// padding is ignored.
pub fn decode_response_frame(cmd: &Command, frame: &[u8]) -> Result<Response> {
    Response::decode(cmd.opcode(), frame)
}
