// skyportal/src/constants.rs
//! Common protocol and image constants used across the crate

// Command opcodes sent by the host (ASCII)

/// Activate
pub const CMD_ACTIVATE: u8 = b'A';
/// Deactivate
pub const CMD_DEACTIVATE: u8 = b'D';
/// Set LED color
pub const CMD_COLOR: u8 = b'C';
/// Slot status
pub const CMD_STATUS: u8 = b'S';
/// Read block
pub const CMD_READ: u8 = b'Q';
/// Write block
pub const CMD_WRITE: u8 = b'W';
/// Ready query
pub const CMD_READY: u8 = b'R';

// Response tags sent back to the host

/// Ready acknowledgement
pub const RESP_READY: u8 = b'R';
/// Status reply
pub const RESP_STATUS: u8 = b'S';
/// Read reply
pub const RESP_READ: u8 = b'Q';
/// Write acknowledgement
pub const RESP_WRITE: u8 = b'W';

// Minimum frame lengths per command (opcode included)

/// `C r g b target`
pub const COLOR_FRAME_LEN: usize = 5;
/// `Q slot block`
pub const READ_FRAME_LEN: usize = 3;
/// `W slot block data[16]`
pub const WRITE_FRAME_LEN: usize = 3 + BLOCK_SIZE;

// Response lengths

/// `S mask_hi mask_lo`
pub const STATUS_RESPONSE_LEN: usize = 3;
/// `Q slot block data[16]`
pub const READ_RESPONSE_LEN: usize = 3 + BLOCK_SIZE;
/// `W slot block`
pub const WRITE_RESPONSE_LEN: usize = 3;

/// Number of figure slots held by the portal
pub const MAX_SLOTS: usize = 16;

/// Bytes per addressable block
pub const BLOCK_SIZE: usize = 16;

/// Blocks per image
pub const BLOCKS_PER_IMAGE: usize = 64;

/// Full image size in bytes (64 blocks of 16 bytes)
pub const IMAGE_SIZE: usize = BLOCK_SIZE * BLOCKS_PER_IMAGE;

/// Length of the big-endian checksum trailer in the persisted form
pub const CHECKSUM_LEN: usize = 2;

/// Maximum stored length of a slot's source name
pub const MAX_SOURCE_NAME_LEN: usize = 255;

/// Frame size of the reference HID transport
pub const DEFAULT_FRAME_SIZE: usize = 64;

/// Suffixes accepted for image names (compared ASCII case-insensitively)
pub const IMAGE_EXTENSIONS: [&str; 4] = [".bin", ".dmp", ".sky", ".dump"];

/// Default serve loop receive timeout in milliseconds
pub const DEFAULT_RECEIVE_TIMEOUT_MS: u64 = 1000;
