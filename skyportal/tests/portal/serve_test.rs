#[path = "../common/mod.rs"]
mod common;

use std::sync::atomic::AtomicBool;

use skyportal::prelude::*;

#[test]
fn serve_loop_answers_a_host_session() {
    common::init_logger();
    let mut portal =
        common::portal_with_images(&[(0, "a.bin", common::fixtures::counting_image())]).unwrap();

    let frames = vec![
        common::fixtures::padded(b"A"),
        common::fixtures::padded(b"S"),
        common::fixtures::padded(&[b'Q', 0, 1]),
        common::fixtures::padded(&[b'Q', 5, 1]),
        common::fixtures::padded(b"D"),
        common::fixtures::padded(b"R"),
    ];
    let mut transport = skyportal::transport::MockTransport::with_frames(frames);
    let running = AtomicBool::new(true);
    portal.serve(&mut transport, &running).unwrap();

    let mut read_reply = vec![b'Q', 0, 1];
    read_reply.extend(16u8..32);
    // Q on an empty slot, D and the R after D are all silent.
    assert_eq!(
        transport.sent,
        vec![vec![b'R'], vec![b'S', 0x00, 0x01], read_reply]
    );
    assert!(transport.frames.is_empty());
    assert_eq!(portal.state(), PortalState::Idle);
}

#[test]
fn serve_once_reports_each_outcome() {
    common::init_logger();
    let mut portal =
        common::portal_with_images(&[(0, "a.bin", common::fixtures::zero_image())]).unwrap();
    let mut t = skyportal::transport::MockTransport::new();
    t.push_frame(vec![b'S']);
    t.push_frame(vec![b'Q', 1, 0]);
    t.push_frame(vec![0x99]);

    assert!(matches!(portal.serve_once(&mut t).unwrap(), Outcome::Respond(_)));
    assert!(matches!(
        portal.serve_once(&mut t).unwrap(),
        Outcome::ProtocolError(Error::SlotEmpty { slot: 1 })
    ));
    assert!(matches!(portal.serve_once(&mut t).unwrap(), Outcome::NoResponse));
    assert_eq!(t.sent, vec![vec![b'S', 0x00, 0x01]]);
}

#[test]
fn timeouts_do_not_stop_the_loop() {
    common::init_logger();
    let mut portal = PortalBuilder::new().build();
    let mut t = skyportal::transport::MockTransport::with_frames(vec![b"A".to_vec()]);
    t.set_receive_failures(3);
    let running = AtomicBool::new(true);
    portal.serve(&mut t, &running).unwrap();
    assert_eq!(t.sent, vec![vec![b'R']]);
    assert_eq!(portal.state(), PortalState::Activated);
}

#[test]
fn cleared_flag_stops_before_reading() {
    let mut portal = PortalBuilder::new().build();
    let mut t = skyportal::transport::MockTransport::with_frames(vec![b"A".to_vec()]);
    let running = AtomicBool::new(false);
    portal.serve(&mut t, &running).unwrap();
    assert_eq!(t.frames.len(), 1);
    assert_eq!(portal.state(), PortalState::Idle);
}

#[test]
fn oversized_frames_are_cut_to_frame_size() {
    let config = PortalConfig::default().with_frame_size(3);
    let mut portal = PortalBuilder::new().with_config(config).build();
    portal
        .slots()
        .load_image(0, "a.bin", &common::fixtures::counting_image())
        .unwrap();
    let mut t = skyportal::transport::MockTransport::new();
    // a write frame cut to three bytes is too short to be a write
    t.push_frame(common::write_frame(0, 1, 0xAB));
    assert!(matches!(
        portal.serve_once(&mut t).unwrap(),
        Outcome::ProtocolError(Error::InvalidLength { .. })
    ));
    assert!(t.sent.is_empty());
}
