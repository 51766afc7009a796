// skyportal/src/storage/library.rs

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::PortalConfig;
use crate::image::persist::{decode_stored, encode_for_storage};
use crate::image::{ChecksumPolicy, StorageFormat};
use crate::slot::{SlotInfo, SlotStore, validate_source_name};
use crate::storage::traits::ImageStore;
use crate::types::SlotIndex;
use crate::{Error, Result};

/// Management handle: moves images between an [`ImageStore`] and the
/// shared [`SlotStore`]. It can live on a different thread than the
/// protocol engine.
///
/// Saves are serialized: the snapshot and the storage write happen under
/// one lock, so a newer snapshot never lands on disk before an older one.
pub struct Library {
    store: Box<dyn ImageStore>,
    save_lock: Mutex<()>,
    slots: Arc<SlotStore>,
    format: StorageFormat,
    policy: ChecksumPolicy,
    stamp: bool,
}

impl Library {
    /// Library over `store`, filling `slots`, with format and policy from `config`.
    pub fn new(store: Box<dyn ImageStore>, slots: Arc<SlotStore>, config: &PortalConfig) -> Self {
        Self {
            store,
            save_lock: Mutex::new(()),
            slots,
            format: config.storage_format,
            policy: config.checksum_policy,
            stamp: config.stamp_checksum,
        }
    }

    /// Shared slot store.
    pub fn slots(&self) -> &Arc<SlotStore> {
        &self.slots
    }

    /// Names available in storage.
    pub fn list(&self) -> Result<Vec<String>> {
        self.store.list()
    }

    /// Load `name` from storage into `slot`.
    ///
    /// Slot and name are checked before storage is touched.
    pub fn load(&self, slot: usize, name: &str) -> Result<()> {
        SlotIndex::new(slot)?;
        validate_source_name(name)?;
        let bytes = self.store.load(name)?;
        let image = decode_stored(&bytes, self.format, self.policy)?;
        self.slots.load(slot, name, image)
    }

    /// Write the image in `slot` back under its source name.
    pub fn save(&self, slot: usize) -> Result<()> {
        let _guard = self.save_lock.lock();
        let (name, image) = self.slots.snapshot(slot)?;
        let bytes = encode_for_storage(&image, self.format, self.stamp);
        self.store.save(&name, &bytes)?;
        log::info!("saved slot {} as '{}'", slot, name);
        Ok(())
    }

    /// Unload without saving.
    pub fn unload(&self, slot: usize) -> Result<bool> {
        self.slots.unload_image(slot)
    }

    /// Save every occupied slot. All slots are attempted; the first
    /// failure is returned.
    pub fn save_all(&self) -> Result<usize> {
        let mut saved = 0;
        let mut first_err: Option<Error> = None;
        for info in self.slots.active_slots() {
            match self.save(info.slot as usize) {
                Ok(()) => saved += 1,
                Err(e) => {
                    log::warn!("failed to save slot {}: {}", info.slot, e);
                    first_err.get_or_insert(e);
                }
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(saved),
        }
    }

    /// Unload every occupied slot.
    pub fn unload_all(&self) -> Result<()> {
        for info in self.slots.active_slots() {
            self.slots.unload_image(info.slot as usize)?;
        }
        Ok(())
    }

    /// Empty every slot, saving first when `save` is set.
    ///
    /// A slot whose save fails stays loaded so its contents are not lost;
    /// the first save error is returned once every slot has been tried.
    /// Returns the number of slots released.
    pub fn release_all(&self, save: bool) -> Result<usize> {
        let mut released = 0;
        let mut first_err: Option<Error> = None;
        for info in self.slots.active_slots() {
            let slot = info.slot as usize;
            if save {
                if let Err(e) = self.save(slot) {
                    log::warn!("keeping slot {} loaded, save failed: {}", slot, e);
                    first_err.get_or_insert(e);
                    continue;
                }
            }
            self.slots.unload_image(slot)?;
            released += 1;
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(released),
        }
    }

    /// Inspection record for a loaded slot.
    pub fn slot_info(&self, slot: usize) -> Option<SlotInfo> {
        self.slots.slot_info(slot)
    }
}
