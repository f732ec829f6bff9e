#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use wxenvelope_router::config;
use wxenvelope_router::push::{Kind, Platform};

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\nplatform: mp\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.platform, Platform::Mp);
    assert_eq!(cfg.limits.max_payload_bytes, 64 * 1024);
    assert!(cfg.auto_replies.is_empty());
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
platform: corp
limits:
  max_payload_bytes: 4096
auto_replies:
  - kind: enter_agent
    text: "Welcome back"
  - kind: text
    text: "Got it"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.platform, Platform::Corp);
    assert_eq!(cfg.limits.max_payload_bytes, 4096);
    assert_eq!(cfg.auto_replies[0].kind().unwrap(), Kind::EnterAgent);
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
platform: mp
limits:
  max_payload_byte: 4096 # typo should fail
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn unknown_platform_rejected() {
    let err = config::load_from_str("version: 1\nplatform: miniapp\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn unsupported_version_rejected() {
    let err = config::load_from_str("version: 2\nplatform: mp\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
    assert!(err.to_string().contains("unsupported version"), "{err}");
}

#[test]
fn payload_limit_out_of_range() {
    let bad = "version: 1\nplatform: mp\nlimits:\n  max_payload_bytes: 10\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("max_payload_bytes"), "{err}");
}

#[test]
fn auto_reply_rules_checked() {
    let unknown = r#"
version: 1
platform: mp
auto_replies:
  - kind: shake
    text: "hi"
"#;
    let err = config::load_from_str(unknown).expect_err("unknown kind");
    assert!(err.to_string().contains("unknown kind"), "{err}");

    let wrong_platform = r#"
version: 1
platform: corp
auto_replies:
  - kind: user_get_card
    text: "hi"
"#;
    let err = config::load_from_str(wrong_platform).expect_err("card on corp");
    assert!(err.to_string().contains("never pushed on corp"), "{err}");

    let dup = r#"
version: 1
platform: mp
auto_replies:
  - kind: subscribe
    text: "a"
  - kind: subscribe
    text: "b"
"#;
    let err = config::load_from_str(dup).expect_err("duplicate");
    assert!(err.to_string().contains("duplicate"), "{err}");

    let blank = r#"
version: 1
platform: mp
auto_replies:
  - kind: click
    text: "  "
"#;
    let err = config::load_from_str(blank).expect_err("blank");
    assert!(err.to_string().contains("empty text"), "{err}");
}

#[test]
fn explicit_path_wins() {
    assert_eq!(config::resolve_path(Some("conf/router.yaml".into())), "conf/router.yaml");
    assert_eq!(config::DEFAULT_PATH, "wxenvelope.yaml");
}

#[test]
fn missing_file_names_the_path() {
    let err = config::load_from_file("no/such/router.yaml").expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
    assert!(err.to_string().contains("no/such/router.yaml"), "{err}");
}

#[test]
fn shipped_config_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../wxenvelope.yaml");
    let cfg = config::load_from_file(path).expect("sample config must load");
    assert_eq!(cfg.version, 1);
}
