#[path = "../common/mod.rs"]
mod common;

use skyportal::Error;
use skyportal::transport::Transport;
use skyportal::transport::mock::MockTransport;

#[test]
fn mock_transport_send_and_receive() {
    let mut m = MockTransport::new();
    m.push_frame(vec![b'A']);
    m.send(&[b'R']).unwrap();
    assert_eq!(m.sent.len(), 1);
    assert_eq!(m.receive(1000).unwrap(), vec![b'A']);
    assert!(matches!(m.receive(1000), Err(Error::Timeout)));
}

#[test]
fn boxed_mock_closes_after_frames() {
    let mut t = common::boxed_mock_with_frames(vec![vec![b'S']]);
    assert_eq!(t.receive(10).unwrap(), vec![b'S']);
    assert!(matches!(t.receive(10), Err(Error::TransportClosed)));
}
