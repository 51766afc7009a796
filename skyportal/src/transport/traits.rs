// skyportal/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the frame channel away from the protocol
/// engine. Implementations own the byte channel (a HID gadget endpoint in
/// the reference deployment); the engine only sees whole frames.
pub trait Transport {
    /// Send one response frame to the host
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive one command frame, waiting at most `timeout_ms`.
    ///
    /// Returns `Error::Timeout` when nothing arrived and
    /// `Error::TransportClosed` once the channel is gone for good.
    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>>;

    /// Perform a transport-level reset. Default is a no-op.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}
