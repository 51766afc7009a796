// skyportal/src/prelude.rs

pub use crate::config::PortalConfig;
pub use crate::image::{ChecksumPolicy, Image, StorageFormat};
pub use crate::portal::{Outcome, Portal, PortalBuilder};
pub use crate::protocol::{Command, Response};
pub use crate::slot::{SlotInfo, SlotStore};
pub use crate::storage::{DirectoryStore, ImageStore, Library, MemoryStore};
pub use crate::transport::Transport;
pub use crate::{BlockData, BlockIndex, Error, LedColor, PortalState, Result, SlotIndex};

pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
