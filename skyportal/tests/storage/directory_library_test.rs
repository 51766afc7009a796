#[path = "../common/mod.rs"]
mod common;

use skyportal::prelude::*;

#[test]
fn encrypted_directory_roundtrip_through_the_wire() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = PortalConfig::default()
        .with_storage_format(StorageFormat::Encrypted)
        .with_checksum_policy(ChecksumPolicy::Enforce)
        .with_stamp_checksum(true);

    // Seed an encrypted image on disk.
    let seed = Image::from_slice(&common::fixtures::counting_image())?;
    std::fs::write(
        dir.path().join("spyro.sky"),
        skyportal::image::persist::encode_for_storage(&seed, StorageFormat::Encrypted, false),
    )?;

    let store = DirectoryStore::open(dir.path())?;
    let (mut portal, library) = PortalBuilder::new()
        .with_config(config)
        .build_with_library(Box::new(store));

    assert_eq!(library.list()?, vec!["spyro.sky".to_string()]);
    library.load(0, "spyro.sky")?;

    // The wire sees plaintext.
    let resp = portal.process(&[b'Q', 0, 0])?.expect("read response");
    assert_eq!(&resp.encode()[3..], &seed.as_bytes()[..16]);

    portal.process(&common::write_frame(0, 1, 0xEE))?;
    portal.shutdown(&library)?;
    assert_eq!(portal.status(), 0);

    // On disk the image is encrypted; decrypted it holds the write.
    let raw = std::fs::read(dir.path().join("spyro.sky"))?;
    let plain = skyportal::image::decrypt_image(&raw);
    assert_eq!(&plain[16..32], &[0xEE; 16]);
    assert!(skyportal::image::verify(&plain));
    Ok(())
}

#[test]
fn enforce_policy_rejects_corrupt_dump() {
    let dir = tempfile::tempdir().unwrap();
    let mut bytes = common::fixtures::counting_image();
    bytes[10] ^= 0xFF;
    std::fs::write(dir.path().join("bad.bin"), &bytes).unwrap();

    let config = PortalConfig::default().with_checksum_policy(ChecksumPolicy::Enforce);
    let slots = std::sync::Arc::new(SlotStore::new());
    let library = Library::new(
        Box::new(DirectoryStore::open(dir.path()).unwrap()),
        slots.clone(),
        &config,
    );
    assert!(matches!(
        library.load(0, "bad.bin"),
        Err(Error::ChecksumMismatch { .. })
    ));
    assert_eq!(slots.status(), 0);
}

#[test]
fn too_small_file_and_bad_names() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("short.bin"), [0u8; 1023]).unwrap();
    let (_, library) = PortalBuilder::new()
        .build_with_library(Box::new(DirectoryStore::open(dir.path()).unwrap()));

    assert!(matches!(
        library.load(0, "short.bin"),
        Err(Error::TooSmall {
            expected: 1024,
            actual: 1023
        })
    ));
    assert!(matches!(
        library.load(0, "short.txt"),
        Err(Error::InvalidExtension(_))
    ));
    assert!(matches!(
        library.load(0, "../escape.bin"),
        Err(Error::InvalidName(_))
    ));
}

#[test]
fn longest_name_survives_write_and_shutdown() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let name = format!("{}.bin", "a".repeat(251));
    std::fs::write(dir.path().join(&name), common::fixtures::zero_image())?;

    let (mut portal, library) = PortalBuilder::new()
        .build_with_library(Box::new(DirectoryStore::open(dir.path())?));
    library.load(0, &name)?;
    portal.process(&common::write_frame(0, 1, 0xEE))?;

    library.save(0)?;
    portal.shutdown(&library)?;
    assert_eq!(portal.status(), 0);

    let disk = std::fs::read(dir.path().join(&name))?;
    assert_eq!(&disk[16..32], &[0xEE; 16]);
    assert_eq!(library.list()?, vec![name]);
    Ok(())
}

#[test]
fn failed_shutdown_save_keeps_the_image_loaded() -> anyhow::Result<()> {
    let parent = tempfile::tempdir()?;
    let root = parent.path().join("figures");
    let store = DirectoryStore::open(&root)?;
    std::fs::write(root.join("a.bin"), common::fixtures::zero_image())?;

    let (mut portal, library) = PortalBuilder::new().build_with_library(Box::new(store));
    library.load(4, "a.bin")?;
    portal.process(&common::write_frame(4, 7, 0x5A))?;

    // Storage disappears underneath the session.
    std::fs::remove_dir_all(&root)?;
    assert!(matches!(portal.shutdown(&library), Err(Error::Io(_))));
    assert_eq!(portal.status(), 0x0010);
    assert_eq!(
        portal.slots().read_block(4, 7)?,
        common::fixtures::sample_blockdata(0x5A)
    );

    // Once storage is back, a second shutdown persists and releases.
    std::fs::create_dir_all(&root)?;
    portal.shutdown(&library)?;
    assert_eq!(portal.status(), 0);
    let disk = std::fs::read(root.join("a.bin"))?;
    assert_eq!(&disk[7 * 16..8 * 16], &[0x5A; 16]);
    Ok(())
}

#[test]
fn concurrent_saves_of_one_slot_all_succeed() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.bin"), common::fixtures::zero_image()).unwrap();
    let (_, library) = PortalBuilder::new()
        .build_with_library(Box::new(DirectoryStore::open(dir.path()).unwrap()));
    library.load(0, "a.bin").unwrap();
    let library = std::sync::Arc::new(library);

    let workers: Vec<_> = (0..4u8)
        .map(|t| {
            let library = std::sync::Arc::clone(&library);
            std::thread::spawn(move || {
                for i in 0..100u8 {
                    library
                        .slots()
                        .write_block(0, 1, &BlockData::filled(t.wrapping_mul(100).wrapping_add(i)))
                        .unwrap();
                    library.save(0).unwrap();
                }
            })
        })
        .collect();
    for w in workers {
        w.join().unwrap();
    }

    // The last save wins: disk matches the live image, and no temp files
    // are left behind.
    library.save(0).unwrap();
    let (_, live) = library.slots().snapshot(0).unwrap();
    let disk = std::fs::read(dir.path().join("a.bin")).unwrap();
    assert_eq!(&disk[..], &live.as_bytes()[..]);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}
