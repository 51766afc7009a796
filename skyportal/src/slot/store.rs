// skyportal/src/slot/store.rs

use parking_lot::Mutex;

use super::{Slot, SlotInfo, validate_source_name};
use crate::constants::MAX_SLOTS;
use crate::image::Image;
use crate::types::{BlockData, BlockIndex, SlotIndex};
use crate::{Error, Result};

/// The sixteen figure slots behind a single lock.
///
/// The protocol engine and the persistence path may share one store (wrap
/// it in an `Arc`); every operation takes the lock for its whole duration
/// so readers never see a partially written image.
pub struct SlotStore {
    slots: Mutex<[Slot; MAX_SLOTS]>,
}

impl SlotStore {
    /// Sixteen empty slots.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(std::array::from_fn(|_| Slot::default())),
        }
    }

    /// Load raw image bytes into a slot. Only the first 1024 bytes are kept.
    pub fn load_image(&self, slot: usize, source_name: &str, bytes: &[u8]) -> Result<()> {
        let index = SlotIndex::new(slot)?;
        validate_source_name(source_name)?;
        let image = Image::from_slice(bytes)?;
        self.insert(index, source_name, image);
        Ok(())
    }

    /// Load an already decoded image into a slot.
    pub fn load(&self, slot: usize, source_name: &str, image: Image) -> Result<()> {
        let index = SlotIndex::new(slot)?;
        validate_source_name(source_name)?;
        self.insert(index, source_name, image);
        Ok(())
    }

    fn insert(&self, index: SlotIndex, source_name: &str, image: Image) {
        let mut slots = self.slots.lock();
        let target = &mut slots[index.as_usize()];
        if target.is_active() {
            log::debug!("slot {} replaced", index);
            target.clear();
        }
        target.fill(source_name, image);
        log::info!("loaded '{}' into slot {}", source_name, index);
    }

    /// Free a slot, zeroing its image. Returns whether anything was loaded.
    pub fn unload_image(&self, slot: usize) -> Result<bool> {
        let index = SlotIndex::new(slot)?;
        let cleared = self.slots.lock()[index.as_usize()].clear();
        if cleared {
            log::info!("unloaded slot {}", index);
        }
        Ok(cleared)
    }

    /// Copy one block out of a loaded slot.
    pub fn read_block(&self, slot: usize, block: usize) -> Result<BlockData> {
        let index = SlotIndex::new(slot)?;
        let mut slots = self.slots.lock();
        let target = &mut slots[index.as_usize()];
        let image = target.image().ok_or(Error::SlotEmpty { slot })?;
        let block = BlockIndex::new(block)?;
        let data = image.block(block);
        target.touch_read(block.as_u8());
        Ok(data)
    }

    /// Overwrite one block in place. Nothing is persisted.
    pub fn write_block(&self, slot: usize, block: usize, data: &BlockData) -> Result<()> {
        let index = SlotIndex::new(slot)?;
        let mut slots = self.slots.lock();
        let target = &mut slots[index.as_usize()];
        let image = target.image_mut().ok_or(Error::SlotEmpty { slot })?;
        let block = BlockIndex::new(block)?;
        image.set_block(block, data);
        target.touch_write(block.as_u8());
        log::debug!("wrote block {} to slot {}", block, index);
        Ok(())
    }

    /// Bit `i` is set iff slot `i` is active.
    pub fn status(&self) -> u16 {
        let slots = self.slots.lock();
        SlotIndex::all()
            .filter(|i| slots[i.as_usize()].is_active())
            .fold(0u16, |mask, i| mask | i.mask())
    }

    /// Whether `slot` holds an image. Out-of-range slots are inactive.
    pub fn is_active(&self, slot: usize) -> bool {
        slot < MAX_SLOTS && self.slots.lock()[slot].is_active()
    }

    /// Inspection record for a loaded slot.
    pub fn slot_info(&self, slot: usize) -> Option<SlotInfo> {
        let index = SlotIndex::new(slot).ok()?;
        SlotInfo::from_slot(index, &self.slots.lock()[slot])
    }

    /// Info for every occupied slot, in slot order.
    pub fn active_slots(&self) -> Vec<SlotInfo> {
        let slots = self.slots.lock();
        SlotIndex::all()
            .filter_map(|i| SlotInfo::from_slot(i, &slots[i.as_usize()]))
            .collect()
    }

    /// Consistent copy of a slot's name and full image, taken under the lock.
    pub fn snapshot(&self, slot: usize) -> Result<(String, Image)> {
        let index = SlotIndex::new(slot)?;
        let slots = self.slots.lock();
        let target = &slots[index.as_usize()];
        match (target.source_name(), target.image()) {
            (Some(name), Some(image)) => Ok((name.to_string(), image.clone())),
            _ => Err(Error::SlotEmpty { slot }),
        }
    }
}

impl Default for SlotStore {
    fn default() -> Self {
        Self::new()
    }
}
