//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common portal and MockTransport setup so tests
//! across the crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::sync::Arc;

use crate::config::PortalConfig;
use crate::constants::IMAGE_SIZE;
use crate::portal::Portal;
use crate::protocol::Command;
use crate::slot::SlotStore;
use crate::types::BlockData;
use crate::{Result, transport};

/// A full-size image with every byte set to `fill`.
#[doc(hidden)]
pub fn image_bytes(fill: u8) -> Vec<u8> {
    vec![fill; IMAGE_SIZE]
}

/// Build a Portal with default config whose slots are pre-loaded with
/// `(slot, name, bytes)` entries.
#[doc(hidden)]
pub fn portal_with_images(images: &[(usize, &str, Vec<u8>)]) -> Result<Portal> {
    let slots = Arc::new(SlotStore::new());
    for (slot, name, bytes) in images {
        slots.load_image(*slot, name, bytes)?;
    }
    Ok(Portal::new(slots, PortalConfig::default()))
}

/// Build a MockTransport that delivers `frames` and then closes, boxed as
/// a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_frames(frames: Vec<Vec<u8>>) -> Box<dyn transport::traits::Transport> {
    Box::new(transport::mock::MockTransport::with_frames(frames))
}

/// Raw `W` frame writing `fill` to every byte of a block.
#[doc(hidden)]
pub fn write_frame(slot: u8, block: u8, fill: u8) -> Vec<u8> {
    Command::WriteBlock {
        slot,
        block,
        data: BlockData::filled(fill),
    }
    .encode()
}
