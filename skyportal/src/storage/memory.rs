// skyportal/src/storage/memory.rs

use std::collections::BTreeMap;

use parking_lot::Mutex;

use crate::storage::traits::ImageStore;
use crate::{Error, Result};

/// In-process image store, mainly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    images: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry.
    pub fn insert(&self, name: &str, bytes: Vec<u8>) {
        self.images.lock().insert(name.to_string(), bytes);
    }

    /// Copy of an entry.
    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.images.lock().get(name).cloned()
    }

    /// Take an entry out.
    pub fn remove(&self, name: &str) -> Option<Vec<u8>> {
        self.images.lock().remove(name)
    }
}

impl ImageStore for MemoryStore {
    fn load(&self, name: &str) -> Result<Vec<u8>> {
        self.get(name).ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no image named '{}'", name),
            ))
        })
    }

    fn save(&self, name: &str, bytes: &[u8]) -> Result<()> {
        self.insert(name, bytes.to_vec());
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self
            .images
            .lock()
            .keys()
            .filter(|n| crate::slot::is_valid_extension(n))
            .cloned()
            .collect())
    }
}
