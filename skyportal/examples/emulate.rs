//! Drive the portal engine through a scripted host session.
//!
//! Usage:
//!   cargo run -p skyportal --example emulate [image-dir]
//!
//! With a directory argument, images are loaded from (and saved back to)
//! that directory. Without one, a zeroed in-memory image is used.

use std::sync::atomic::AtomicBool;

use skyportal::prelude::*;
use skyportal::transport::MockTransport;
use skyportal::utils::block_dump;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let store: Box<dyn ImageStore> = match std::env::args().nth(1) {
        Some(dir) => Box::new(DirectoryStore::open(dir)?),
        None => {
            let mem = MemoryStore::new();
            mem.insert("demo.bin", vec![0u8; 1024]);
            Box::new(mem)
        }
    };

    let (mut portal, library) = PortalBuilder::new()
        .with_config(PortalConfig::default().with_save_on_shutdown(false))
        .build_with_library(store);

    let names = library.list()?;
    println!("available images: {:?}", names);
    for (slot, name) in names.iter().take(16).enumerate() {
        if let Err(e) = library.load(slot, name) {
            println!("skipping '{}': {}", name, e);
        }
    }

    let mut write = vec![b'W', 0, 3];
    write.extend_from_slice(b"hello, portal!!!");
    let mut transport = MockTransport::with_frames(vec![
        b"A".to_vec(),
        b"S".to_vec(),
        vec![b'C', 0xff, 0x00, 0x80, 0x00],
        write,
        vec![b'Q', 0, 3],
        b"R".to_vec(),
    ]);

    let running = AtomicBool::new(true);
    portal.serve(&mut transport, &running)?;

    for reply in &transport.sent {
        println!("<- {}", bytes_to_hex_spaced(reply));
    }
    println!("portal state: {}, led: {}", portal.state(), portal.led_color());

    if let Some(info) = library.slot_info(0) {
        println!("slot 0 holds '{}'", info.source_name);
        let (_, image) = library.slots().snapshot(0)?;
        print!("{}", block_dump(&image.as_bytes()[..64]));
    }

    portal.shutdown(&library)?;
    Ok(())
}
