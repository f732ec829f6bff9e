//! Passive reply builders, encoding, and news validation.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;

use wxenvelope_core::error::ValidationError;
use wxenvelope_core::protocol::header::msg_type;
use wxenvelope_core::protocol::mp::{
    Article, ResImage, ResMusic, ResNews, ResText, ResVideo, ResVoice, TransferToCustomerService,
};
use wxenvelope_core::{encode_json, encode_xml};

fn articles(n: usize) -> Vec<Article> {
    (0..n)
        .map(|i| {
            Article::new(
                format!("title {i}"),
                "",
                "https://img.example.com/a.png",
                "https://example.com",
            )
        })
        .collect()
}

#[test]
fn text_builder_stamps_header() {
    let res = ResText::new("U1", "F1", 1620000000, "hello");
    assert_eq!(res.header.to_user_name, "U1");
    assert_eq!(res.header.from_user_name, "F1");
    assert_eq!(res.header.create_time, 1620000000);
    assert_eq!(res.header.msg_type, msg_type::TEXT);
    assert_eq!(res.content, "hello");
}

#[test]
fn builders_fix_discriminators() {
    assert_eq!(ResImage::new("U", "F", 1, "m").header.msg_type, "image");
    assert_eq!(ResVoice::new("U", "F", 1, "m").header.msg_type, "voice");
    assert_eq!(ResVideo::new("U", "F", 1, "m", "", "").header.msg_type, "video");
    assert_eq!(
        ResMusic::new("U", "F", 1, "thumb", "u", "hq", "", "").header.msg_type,
        "music"
    );
    assert_eq!(ResNews::new("U", "F", 1, articles(1)).header.msg_type, "news");
    assert_eq!(
        TransferToCustomerService::new("U", "F", 1, "").header.msg_type,
        "transfer_customer_service"
    );
}

#[test]
fn builders_accept_empty_media() {
    let res = ResImage::new("U", "F", 1, "");
    assert_eq!(res.image.media_id, "");
}

#[test]
fn text_reply_json_projection() {
    let res = ResText::new("U1", "F1", 1620000000, "hello");
    let v: serde_json::Value = serde_json::from_str(&encode_json(&res).unwrap()).unwrap();
    assert_eq!(
        v,
        json!({
            "ToUserName": "U1",
            "FromUserName": "F1",
            "CreateTime": 1620000000,
            "MsgType": "text",
            "Content": "hello"
        })
    );
}

#[test]
fn text_reply_xml() {
    let res = ResText::new("U1", "F1", 1620000000, "a < b");
    let xml = encode_xml(&res).unwrap();
    assert!(xml.starts_with("<xml>"), "{xml}");
    assert!(xml.ends_with("</xml>"), "{xml}");
    assert!(xml.contains("<ToUserName>U1</ToUserName>"), "{xml}");
    assert!(xml.contains("<CreateTime>1620000000</CreateTime>"), "{xml}");
    assert!(xml.contains("<MsgType>text</MsgType>"), "{xml}");
    assert!(xml.contains("<Content>a &lt; b</Content>"), "{xml}");
    assert!(!xml.contains("AgentID"), "{xml}");
}

#[test]
fn video_reply_omits_empty_optionals() {
    let bare = encode_json(&ResVideo::new("U", "F", 1, "m1", "", "")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&bare).unwrap();
    assert_eq!(v["Video"], json!({ "MediaId": "m1" }));

    let full = encode_xml(&ResVideo::new("U", "F", 1, "m1", "clip", "desc")).unwrap();
    assert!(
        full.contains("<Video><MediaId>m1</MediaId><Title>clip</Title><Description>desc</Description></Video>"),
        "{full}"
    );
}

#[test]
fn music_reply_fields() {
    let res = ResMusic::new("U", "F", 1, "thumb", "http://m", "http://hq", "song", "");
    let v: serde_json::Value = serde_json::from_str(&encode_json(&res).unwrap()).unwrap();
    assert_eq!(
        v["Music"],
        json!({
            "Title": "song",
            "MusicUrl": "http://m",
            "HQMusicUrl": "http://hq",
            "ThumbMediaId": "thumb"
        })
    );
}

#[test]
fn news_reply_xml_wraps_items() {
    let res = ResNews::new("U", "F", 1, articles(2));
    assert_eq!(res.article_count, 2);
    let xml = encode_xml(&res).unwrap();
    assert!(xml.contains("<ArticleCount>2</ArticleCount>"), "{xml}");
    assert!(xml.contains("<Articles><item><Title>title 0</Title>"), "{xml}");
    assert_eq!(xml.matches("<item>").count(), 2, "{xml}");
    // empty description is omitted
    assert!(!xml.contains("<Description>"), "{xml}");
}

#[test]
fn transfer_includes_trans_info_only_with_account() {
    let any = encode_json(&TransferToCustomerService::new("U", "F", 1, "")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&any).unwrap();
    assert!(v.get("TransInfo").is_none());

    let named = TransferToCustomerService::new("U", "F", 1, "kf2001@account");
    let xml = encode_xml(&named).unwrap();
    assert!(
        xml.contains("<TransInfo><KfAccount>kf2001@account</KfAccount></TransInfo>"),
        "{xml}"
    );
}

#[test]
fn check_valid_count_mismatch() {
    let mut res = ResNews::new("U", "F", 1, articles(2));
    res.article_count = 3;
    assert_eq!(
        res.check_valid(),
        Err(ValidationError::CountMismatch {
            declared: 3,
            actual: 2
        })
    );
}

#[test]
fn check_valid_empty_before_mismatch() {
    let res = ResNews::new("U", "F", 1, Vec::new());
    assert_eq!(res.article_count, 0);
    assert_eq!(res.check_valid(), Err(ValidationError::Empty));
}

#[test]
fn check_valid_mismatch_wins_over_empty() {
    // Fails two rules at once; the count check comes first.
    let mut res = ResNews::new("U", "F", 1, Vec::new());
    res.article_count = 1;
    assert_eq!(
        res.check_valid(),
        Err(ValidationError::CountMismatch {
            declared: 1,
            actual: 0
        })
    );
}

#[test]
fn check_valid_too_many() {
    let res = ResNews::new("U", "F", 1, articles(11));
    assert_eq!(
        res.check_valid(),
        Err(ValidationError::TooMany {
            limit: 10,
            actual: 11
        })
    );
}

#[test]
fn check_valid_boundaries() {
    assert_eq!(ResNews::new("U", "F", 1, articles(1)).check_valid(), Ok(()));
    assert_eq!(ResNews::new("U", "F", 1, articles(10)).check_valid(), Ok(()));
}

#[test]
fn list_mutation_is_not_auto_corrected() {
    let mut res = ResNews::new("U", "F", 1, articles(2));
    res.articles.push(Article::default());
    assert!(matches!(
        res.check_valid(),
        Err(ValidationError::CountMismatch {
            declared: 2,
            actual: 3
        })
    ));
    res.sync_article_count();
    assert_eq!(res.check_valid(), Ok(()));
}

#[test]
fn validation_error_codes() {
    use wxenvelope_core::EnvelopeError;

    let e: EnvelopeError = ValidationError::Empty.into();
    assert_eq!(e.code().as_str(), "EMPTY_ARTICLES");
    let e: EnvelopeError = ValidationError::TooMany {
        limit: 10,
        actual: 12,
    }
    .into();
    assert_eq!(e.code().as_str(), "TOO_MANY_ARTICLES");
    assert_eq!(e.to_string(), "news may hold at most 10 articles, got 12");
}

fn require_eq<T: Eq>(_: &T) {}

#[test]
fn news_body_has_total_equality() {
    let news = ResNews::new("U", "F", 1, articles(1));
    require_eq(&news.body);
    require_eq(&news.body.articles);
    assert_eq!(news.body, news.body.clone());
}

#[test]
fn every_message_type_has_a_record() {
    use wxenvelope_core::protocol::{event, inbound, reply};
    use wxenvelope_core::Body;

    let covered = [
        inbound::Text::MSG_TYPE,
        inbound::Image::MSG_TYPE,
        inbound::Voice::MSG_TYPE,
        inbound::Video::MSG_TYPE,
        inbound::Location::MSG_TYPE,
        inbound::Link::MSG_TYPE,
        event::Click::MSG_TYPE,
        reply::Music::MSG_TYPE,
        reply::News::MSG_TYPE,
        reply::TransferCustomerService::MSG_TYPE,
    ];
    for t in [
        msg_type::TEXT,
        msg_type::IMAGE,
        msg_type::VOICE,
        msg_type::VIDEO,
        msg_type::LOCATION,
        msg_type::LINK,
        msg_type::EVENT,
        msg_type::MUSIC,
        msg_type::NEWS,
        msg_type::TRANSFER_CUSTOMER_SERVICE,
    ] {
        assert!(covered.contains(&t), "{t} has no record");
    }
}
