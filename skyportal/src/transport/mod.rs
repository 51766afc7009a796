// skyportal/src/transport/mod.rs

/// Scripted transport for tests
pub mod mock;
/// Transport trait
pub mod traits;

pub use mock::MockTransport;
pub use traits::Transport;
