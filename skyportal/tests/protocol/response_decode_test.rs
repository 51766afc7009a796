#[path = "../common/mod.rs"]
mod common;

use skyportal::protocol::{Command, Response, decode_response_frame};

#[test]
fn status_response_decodes_padded() {
    let frame = common::fixtures::padded(&[b'S', 0x80, 0x01]);
    let resp = decode_response_frame(&Command::Status, &frame).unwrap();
    assert_eq!(resp, Response::Status { mask: 0x8001 });
}

#[test]
fn read_response_decodes_block() {
    let block = common::fixtures::sample_blockdata(0xAA);
    let frame = Response::ReadBlock {
        slot: 3,
        block: 7,
        data: block,
    }
    .encode();
    let cmd = Command::ReadBlock { slot: 3, block: 7 };
    match decode_response_frame(&cmd, &frame).unwrap() {
        Response::ReadBlock { slot, block: b, data } => {
            assert_eq!((slot, b), (3, 7));
            assert_eq!(data, block);
        }
        other => panic!("expected read response, got {:?}", other),
    }
}

#[test]
fn short_read_response_is_rejected() {
    let cmd = Command::ReadBlock { slot: 0, block: 0 };
    assert!(decode_response_frame(&cmd, &[b'Q', 0, 0, 1, 2]).is_err());
}
