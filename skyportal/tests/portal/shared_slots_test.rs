#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;
use std::thread;

use skyportal::prelude::*;

#[test]
fn management_thread_loads_while_engine_serves() {
    let store = MemoryStore::new();
    for i in 0..8 {
        store.insert(&format!("fig{}.bin", i), common::image_bytes(i as u8));
    }
    let (mut portal, library) = PortalBuilder::new().build_with_library(Box::new(store));
    let library = Arc::new(library);

    let loader = {
        let library = Arc::clone(&library);
        thread::spawn(move || {
            for i in 0..8usize {
                library.load(i, &format!("fig{}.bin", i)).unwrap();
            }
        })
    };

    // Hammer reads while slots fill up; every successful read must see
    // a whole block of the image that was loaded.
    for _ in 0..500 {
        for slot in 0..8u8 {
            if let Ok(Some(Response::ReadBlock { data, .. })) = portal.process(&[b'Q', slot, 0]) {
                assert_eq!(data, BlockData::filled(slot));
            }
        }
    }
    loader.join().unwrap();
    assert_eq!(portal.status(), 0x00ff);
}
