#[path = "../common/mod.rs"]
mod common;

use proptest::prelude::*;
use skyportal::prelude::*;

#[test]
fn activate_ready_deactivate_ready() {
    let mut portal = PortalBuilder::new().build();

    let resp = portal.process(b"A").unwrap().unwrap();
    assert_eq!(resp.encode(), vec![b'R']);
    assert_eq!(portal.state(), PortalState::Activated);

    let resp = portal.process(b"R").unwrap().unwrap();
    assert_eq!(resp.encode(), vec![b'R']);

    assert!(portal.process(b"D").unwrap().is_none());
    assert_eq!(portal.state(), PortalState::Idle);

    assert!(portal.process(b"R").unwrap().is_none());
}

#[test]
fn read_from_empty_slot_is_silent_error() {
    let mut portal = PortalBuilder::new().build();
    match portal.dispatch(&common::fixtures::read_frame(0, 5)) {
        Outcome::ProtocolError(Error::SlotEmpty { slot: 0 }) => {}
        other => panic!("expected slot empty, got {:?}", other),
    }
    assert_eq!(portal.status(), 0);
}

#[test]
fn write_then_read_blocks_over_the_wire() {
    let mut portal =
        common::portal_with_images(&[(0, "a.bin", common::fixtures::zero_image())]).unwrap();

    let resp = portal.process(&common::write_frame(0, 3, 0xFF)).unwrap().unwrap();
    assert_eq!(resp.encode(), vec![b'W', 0, 3]);

    let resp = portal.process(&common::fixtures::read_frame(0, 3)).unwrap().unwrap();
    let bytes = resp.encode();
    assert_eq!(bytes.len(), 19);
    assert_eq!(&bytes[..3], &[b'Q', 0, 3]);
    assert_eq!(&bytes[3..], &[0xFF; 16]);

    let resp = portal.process(&common::fixtures::read_frame(0, 4)).unwrap().unwrap();
    assert_eq!(&resp.encode()[3..], &[0x00; 16]);
}

#[test]
fn block_63_ok_block_64_rejected() {
    let mut portal =
        common::portal_with_images(&[(2, "b.sky", common::fixtures::counting_image())]).unwrap();
    assert!(portal.process(&common::fixtures::read_frame(2, 63)).is_ok());
    assert!(matches!(
        portal.process(&common::fixtures::read_frame(2, 64)),
        Err(Error::InvalidBlock { block: 64 })
    ));
    assert!(matches!(
        portal.process(&common::write_frame(2, 64, 1)),
        Err(Error::InvalidBlock { block: 64 })
    ));
    assert!(matches!(
        portal.process(&common::write_frame(16, 0, 1)),
        Err(Error::InvalidSlot { slot: 16 })
    ));
}

#[test]
fn status_reflects_loaded_slots() {
    let mut portal = common::portal_with_images(&[
        (0, "a.bin", common::image_bytes(1)),
        (3, "b.dmp", common::image_bytes(2)),
    ])
    .unwrap();
    let resp = portal.process(b"S").unwrap().unwrap();
    assert_eq!(resp.encode(), vec![b'S', 0x00, 0x09]);

    portal.slots().unload_image(3).unwrap();
    let resp = portal.process(b"S").unwrap().unwrap();
    assert_eq!(resp.encode(), vec![b'S', 0x00, 0x01]);
}

#[test]
fn failed_commands_leave_state_alone() {
    let mut portal = PortalBuilder::new().build();
    portal.process(b"A").unwrap();
    portal.process(&[b'C', 1, 2, 3, 0]).unwrap();
    let _ = portal.process(&[b'W', 0, 0]);
    let _ = portal.process(&[b'Q', 9, 9]);
    let _ = portal.process(&[]);
    assert_eq!(portal.state(), PortalState::Activated);
    assert_eq!(portal.led_color(), LedColor::new(1, 2, 3));
    assert!(portal.auto_sense());
}

proptest! {
    #[test]
    fn rejected_frames_change_nothing(frame in proptest::collection::vec(any::<u8>(), 0..40)) {
        let mut portal =
            common::portal_with_images(&[(1, "a.bin", common::fixtures::counting_image())]).unwrap();
        portal.process(b"A").unwrap();
        let before = portal.slots().snapshot(1).unwrap().1;
        let color = portal.led_color();

        if portal.process(&frame).is_err() {
            prop_assert_eq!(portal.state(), PortalState::Activated);
            prop_assert_eq!(portal.led_color(), color);
            prop_assert_eq!(portal.slots().snapshot(1).unwrap().1, before);
            prop_assert_eq!(portal.status(), 0x0002);
        }
    }
}
