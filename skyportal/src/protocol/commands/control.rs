// skyportal/src/protocol/commands/control.rs

use crate::Result;
use crate::constants::{CMD_COLOR, COLOR_FRAME_LEN};
use crate::protocol::parser::ensure_len;
use crate::types::LedColor;

/// Decode `C r g b target`. The trailing target byte is carried along but
/// does not affect the color.
pub fn decode_color(frame: &[u8]) -> Result<(LedColor, u8)> {
    ensure_len(frame, COLOR_FRAME_LEN)?;
    Ok((LedColor::new(frame[1], frame[2], frame[3]), frame[4]))
}

/// Build a `C` frame.
pub fn encode_color(color: LedColor, target: u8) -> Vec<u8> {
    vec![CMD_COLOR, color.r, color.g, color.b, target]
}
