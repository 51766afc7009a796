// skyportal/src/config.rs
//! Runtime configuration for the portal and its image library

use crate::constants::{DEFAULT_FRAME_SIZE, DEFAULT_RECEIVE_TIMEOUT_MS};
use crate::image::{ChecksumPolicy, StorageFormat};

/// Portal configuration. Every field has a default matching the reference
/// deployment, so `PortalConfig::default()` is a working setup.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PortalConfig {
    /// Layout of images in storage
    pub storage_format: StorageFormat,
    /// Handling of a bad checksum trailer on import
    pub checksum_policy: ChecksumPolicy,
    /// Rewrite the trailer of persisted copies on save
    pub stamp_checksum: bool,
    /// Serve loop receive timeout
    pub receive_timeout_ms: u64,
    /// Largest frame the transport delivers; longer frames are cut
    pub frame_size: usize,
    /// Save every loaded image back to storage on shutdown
    pub save_on_shutdown: bool,
    /// Initial value of the auto-sense flag
    pub auto_sense: bool,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            storage_format: StorageFormat::Plain,
            checksum_policy: ChecksumPolicy::Warn,
            stamp_checksum: false,
            receive_timeout_ms: DEFAULT_RECEIVE_TIMEOUT_MS,
            frame_size: DEFAULT_FRAME_SIZE,
            save_on_shutdown: true,
            auto_sense: true,
        }
    }
}

impl PortalConfig {
    /// Set the storage layout.
    pub fn with_storage_format(mut self, format: StorageFormat) -> Self {
        self.storage_format = format;
        self
    }

    /// Set the import checksum policy.
    pub fn with_checksum_policy(mut self, policy: ChecksumPolicy) -> Self {
        self.checksum_policy = policy;
        self
    }

    /// Rewrite trailers of saved copies.
    pub fn with_stamp_checksum(mut self, stamp: bool) -> Self {
        self.stamp_checksum = stamp;
        self
    }

    /// Set the serve loop receive timeout.
    pub fn with_receive_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.receive_timeout_ms = timeout_ms;
        self
    }

    /// Set the largest accepted frame.
    pub fn with_frame_size(mut self, frame_size: usize) -> Self {
        self.frame_size = frame_size;
        self
    }

    /// Save loaded images on shutdown.
    pub fn with_save_on_shutdown(mut self, save: bool) -> Self {
        self.save_on_shutdown = save;
        self
    }
}
