// skyportal/src/portal/builder.rs

use std::sync::Arc;

use crate::config::PortalConfig;
use crate::portal::handle::Portal;
use crate::slot::SlotStore;
use crate::storage::{ImageStore, Library};

/// Helper to construct a Portal (and optionally its Library) sharing one
/// slot store.
#[derive(Default)]
pub struct PortalBuilder {
    config: PortalConfig,
    slots: Option<Arc<SlotStore>>,
}

impl PortalBuilder {
    /// Builder with default config and a fresh slot store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config`.
    pub fn with_config(mut self, config: PortalConfig) -> Self {
        self.config = config;
        self
    }

    /// Share an existing slot store instead of creating a fresh one.
    pub fn with_slots(mut self, slots: Arc<SlotStore>) -> Self {
        self.slots = Some(slots);
        self
    }

    /// Build the portal alone.
    pub fn build(self) -> Portal {
        let slots = self.slots.unwrap_or_default();
        Portal::new(slots, self.config)
    }

    /// Build the engine together with a management library over `store`.
    pub fn build_with_library(self, store: Box<dyn ImageStore>) -> (Portal, Library) {
        let portal = self.build();
        let library = Library::new(store, Arc::clone(portal.slots()), portal.config());
        (portal, library)
    }
}
