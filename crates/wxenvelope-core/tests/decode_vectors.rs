//! Decode vector tests: malformed buffers, partial results, wrong variants.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use wxenvelope_core::error::EnvelopeError;
use wxenvelope_core::protocol::mp;
use wxenvelope_core::Parsed;

mod vector_loader;
use vector_loader::load;

fn run<T: serde::Serialize>(parsed: Parsed<T>) -> (serde_json::Value, Option<EnvelopeError>) {
    let (value, error) = parsed.into_parts();
    (serde_json::to_value(&value).unwrap(), error)
}

#[test]
fn decode_vectors() {
    let files = [
        "decode_text_ok.json",
        "decode_bad_msg_id.json",
        "decode_bad_field_midway.json",
        "decode_padded_content.json",
        "decode_bad_create_time.json",
        "decode_truncated.json",
        "decode_mismatched_tags.json",
        "decode_invalid_utf8.json",
        "decode_wrong_variant.json",
    ];

    for f in files {
        let v = load(f);
        let raw = v.frame.decode();

        let (value, error) = match v.target.as_str() {
            "mp.text" => run(mp::parse_text(&raw)),
            "mp.image" => run(mp::parse_image(&raw)),
            other => panic!("unknown target {other}"),
        };

        match (&v.expect_error, &error) {
            (Some(ex), Some(e)) => {
                assert_eq!(e.code().as_str(), ex.code, "vector={}", v.description)
            }
            (None, None) => {}
            (ex, e) => panic!("vector={}: expected {ex:?}, got {e:?}", v.description),
        }

        // The value is returned even on error.
        let ex = v.expect.expect("missing expect block");
        for (key, want) in ex.as_object().unwrap() {
            assert_eq!(&value[key], want, "vector={} field={key}", v.description);
        }
    }
}

#[test]
fn partial_record_survives_body_failure() {
    let v = load("decode_bad_msg_id.json");
    let parsed = mp::parse_text(&v.frame.decode());
    assert!(!parsed.is_ok());
    assert_eq!(parsed.value.header.to_user_name, "gh_9a1b2c3d4e5f");
    assert_eq!(parsed.value.header.create_time, 1348831860);
    assert_eq!(parsed.value.content, "hi");
    assert_eq!(parsed.value.msg_id, 0);
    let err = parsed.into_result().unwrap_err();
    assert!(matches!(err, EnvelopeError::Decode(_)));
    assert!(err.to_string().contains("not-a-number"), "{err}");
}

#[test]
fn nested_failure_zeroes_only_that_element() {
    let xml = "<xml><MsgType>event</MsgType><Event>pic_sysphoto</Event>\
        <EventKey>6</EventKey><SendPicsInfo><Count>many</Count></SendPicsInfo></xml>";
    let parsed = mp::parse_pic_sys_photo_event(xml.as_bytes());
    assert!(!parsed.is_ok());
    assert_eq!(parsed.value.header.msg_type, "event");
    assert_eq!(parsed.value.event, "pic_sysphoto");
    assert_eq!(parsed.value.event_key, "6");
    assert_eq!(parsed.value.send_pics_info.count, 0);
}

#[test]
fn empty_buffer_is_an_error_with_zero_record() {
    let parsed = mp::parse_location(b"");
    let (value, error) = parsed.into_parts();
    assert!(matches!(error, Some(EnvelopeError::Decode(_))));
    assert_eq!(value, mp::Location::default());
}

#[test]
fn flat_record_keeps_fields_before_failure() {
    let parsed = mp::parse_pay_notify(
        b"<xml><appid>wx1</appid><total_fee>ten</total_fee><mch_id>m1</mch_id></xml>",
    );
    assert_eq!(parsed.error.as_ref().unwrap().code().as_str(), "DECODE");
    assert_eq!(parsed.value.appid, "wx1");
    assert_eq!(parsed.value.total_fee, 0);
    assert_eq!(parsed.value.mch_id, "");
}

#[test]
fn flat_record_failure_at_first_field_is_zero() {
    let parsed = mp::parse_pay_notify(b"<xml><total_fee>ten</total_fee></xml>");
    assert!(parsed.error.is_some());
    assert_eq!(parsed.value, mp::PayNotify::default());
}
