//! Scene extraction from subscribe-by-scan event keys.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use wxenvelope_core::protocol::event::{SubscribeByScan, QR_SCENE_PREFIX};
use wxenvelope_core::EnvelopeError;

fn scan(key: &str) -> SubscribeByScan {
    SubscribeByScan {
        event: "subscribe".into(),
        event_key: key.into(),
        ticket: "t".into(),
    }
}

#[test]
fn scene_after_prefix() {
    assert_eq!(scan("qrscene_abc123").scene().unwrap(), "abc123");
}

#[test]
fn scene_may_be_empty() {
    assert_eq!(scan(QR_SCENE_PREFIX).scene().unwrap(), "");
}

#[test]
fn missing_prefix_is_format_error() {
    let ev = scan("abc123");
    match ev.scene() {
        Err(EnvelopeError::Format { expected, actual }) => {
            assert_eq!(expected, "qrscene_");
            assert_eq!(actual, "abc123");
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert_eq!(ev.scene().unwrap_err().code().as_str(), "FORMAT");
}

#[test]
fn prefix_is_case_sensitive() {
    assert!(scan("QRSCENE_1").scene().is_err());
}
