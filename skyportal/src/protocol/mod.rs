// skyportal/src/protocol/mod.rs

/// Padded report framing
pub mod codec;
/// Host commands
pub mod commands;
/// Bounds-checked field readers
pub mod parser;
/// Portal responses
pub mod responses;

pub use codec::{decode_response_frame, encode_command_frame};
pub use commands::Command;
pub use responses::Response;
