// skyportal/src/slot/mod.rs

use zeroize::Zeroize;

use crate::constants::{IMAGE_EXTENSIONS, MAX_SOURCE_NAME_LEN};
use crate::image::Image;
use crate::types::SlotIndex;
use crate::{Error, Result};

/// Thread-safe store of all slots.
pub mod store;
pub use store::SlotStore;

/// One figure container. All sixteen exist for the lifetime of the store;
/// only their `active` flag changes.
#[derive(Debug, Default)]
pub struct Slot {
    active: bool,
    image: Image,
    source_name: String,
    last_read_block: u8,
    last_write_block: u8,
}

impl Slot {
    /// Whether an image is loaded.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Name the image was loaded under, if any.
    pub fn source_name(&self) -> Option<&str> {
        self.active.then_some(self.source_name.as_str())
    }

    /// Block index of the most recent read.
    pub fn last_read_block(&self) -> u8 {
        self.last_read_block
    }

    /// Block index of the most recent write.
    pub fn last_write_block(&self) -> u8 {
        self.last_write_block
    }

    pub(crate) fn image(&self) -> Option<&Image> {
        self.active.then_some(&self.image)
    }

    pub(crate) fn image_mut(&mut self) -> Option<&mut Image> {
        if self.active { Some(&mut self.image) } else { None }
    }

    pub(crate) fn fill(&mut self, name: &str, image: Image) {
        self.image = image;
        self.source_name.clear();
        self.source_name.push_str(name);
        self.active = true;
        self.last_read_block = 0;
        self.last_write_block = 0;
    }

    /// Zero the image and mark the slot free. Returns false if it was
    /// already free.
    pub(crate) fn clear(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.image.zeroize();
        self.source_name.zeroize();
        self.active = false;
        self.last_read_block = 0;
        self.last_write_block = 0;
        true
    }

    pub(crate) fn touch_read(&mut self, block: u8) {
        self.last_read_block = block;
    }

    pub(crate) fn touch_write(&mut self, block: u8) {
        self.last_write_block = block;
    }
}

/// Point-in-time description of an occupied slot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotInfo {
    /// Slot number
    pub slot: u8,
    /// Name the image was loaded under
    pub source_name: String,
    /// Most recently read block
    pub last_read_block: u8,
    /// Most recently written block
    pub last_write_block: u8,
}

impl SlotInfo {
    pub(crate) fn from_slot(index: SlotIndex, slot: &Slot) -> Option<Self> {
        let name = slot.source_name()?;
        Some(Self {
            slot: index.as_u8(),
            source_name: name.to_string(),
            last_read_block: slot.last_read_block,
            last_write_block: slot.last_write_block,
        })
    }
}

/// Whether `name` ends in one of the accepted image suffixes
/// (`.bin`, `.dmp`, `.sky`, `.dump`), ignoring ASCII case.
pub fn is_valid_extension(name: &str) -> bool {
    let bytes = name.as_bytes();
    IMAGE_EXTENSIONS.iter().any(|ext| {
        bytes.len() >= ext.len() && bytes[bytes.len() - ext.len()..].eq_ignore_ascii_case(ext.as_bytes())
    })
}

/// Check a source name before it is attached to a slot.
pub fn validate_source_name(name: &str) -> Result<()> {
    if !is_valid_extension(name) {
        return Err(Error::InvalidExtension(name.to_string()));
    }
    if name.len() > MAX_SOURCE_NAME_LEN {
        return Err(Error::InvalidName(format!(
            "name is {} bytes, limit is {}",
            name.len(),
            MAX_SOURCE_NAME_LEN
        )));
    }
    Ok(())
}
