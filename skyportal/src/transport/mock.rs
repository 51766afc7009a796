// skyportal/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for tests. It hands out queued host frames and records
/// every frame the portal sends back.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Frames sent by the portal, oldest first
    pub sent: Vec<Vec<u8>>,
    /// Host frames still to deliver
    pub frames: VecDeque<Vec<u8>>,
    /// Report `TransportClosed` instead of `Timeout` once `frames` is empty
    pub close_when_drained: bool,
    /// Testing hook: number of receive calls that should fail with Timeout
    pub receive_failures: usize,
}

impl MockTransport {
    /// Empty transport that times out when drained.
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport that closes after delivering `frames`.
    pub fn with_frames<I>(frames: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        Self {
            frames: frames.into_iter().collect(),
            close_when_drained: true,
            ..Self::default()
        }
    }

    /// Set how many subsequent receive calls should time out (for tests).
    pub fn set_receive_failures(&mut self, n: usize) {
        self.receive_failures = n;
    }

    /// Queue a host frame.
    pub fn push_frame(&mut self, frame: Vec<u8>) {
        self.frames.push_back(frame);
    }

    /// Take the most recent sent frame.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, _timeout_ms: u64) -> Result<Vec<u8>> {
        if self.receive_failures > 0 {
            self.receive_failures -= 1;
            return Err(Error::Timeout);
        }
        match self.frames.pop_front() {
            Some(frame) => Ok(frame),
            None if self.close_when_drained => Err(Error::TransportClosed),
            None => Err(Error::Timeout),
        }
    }

    fn reset(&mut self) -> Result<()> {
        // Queued host frames survive a reset so tests can pre-seed them.
        self.sent.clear();
        Ok(())
    }
}
