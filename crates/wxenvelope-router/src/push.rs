//! Discriminator peek and typed decode of pushed documents.
//!
//! The core decoders are variant-specific. This module adds the missing
//! outer step: read `MsgType` / `Event` with a lightweight pre-parse, map
//! them to a `Kind`, then run the matching typed decoder.

use std::fmt;

use bytes::Bytes;
use serde::Deserialize;

use wxenvelope_core::error::{EnvelopeError, Result};
use wxenvelope_core::protocol::event::QR_SCENE_PREFIX;
use wxenvelope_core::protocol::header::{event_type, msg_type, Header};
use wxenvelope_core::protocol::{card, codec, event, inbound};
use wxenvelope_core::{encode_json, Message};

/// Account flavour the pushes come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Personal (official) account.
    Mp,
    /// Enterprise account.
    Corp,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Mp => "mp",
            Platform::Corp => "corp",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields needed to pick a variant. Everything else is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Discriminator {
    pub msg_type: String,
    pub event: String,
    pub event_key: String,
}

/// Pre-parse `MsgType`, `Event` and `EventKey`.
pub fn peek(buf: &[u8]) -> Result<Discriminator> {
    codec::decode::<Discriminator>(buf).into_result()
}

macro_rules! push_kinds {
    ($($variant:ident($name:literal) => $body:ty),* $(,)?) => {
        /// Concrete push variant.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Kind {
            $($variant),*
        }

        impl Kind {
            pub const ALL: &'static [Kind] = &[$(Kind::$variant),*];

            /// Name used in configuration and cloud responses.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Kind::$variant => $name),*
                }
            }
        }

        /// A decoded push, one arm per `Kind`.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Push {
            $($variant(Message<$body>)),*
        }

        impl Push {
            pub fn kind(&self) -> Kind {
                match self {
                    $(Push::$variant(_) => Kind::$variant),*
                }
            }

            pub fn header(&self) -> &Header {
                match self {
                    $(Push::$variant(m) => &m.header),*
                }
            }

            /// Decode `buf` as `kind`. Partial results are rejected.
            pub fn decode_as(kind: Kind, buf: &[u8]) -> Result<Self> {
                match kind {
                    $(Kind::$variant => Message::<$body>::parse(buf).into_result().map(Push::$variant)),*
                }
            }

            /// JSON projection of the decoded record.
            pub fn to_json(&self) -> Result<String> {
                match self {
                    $(Push::$variant(m) => encode_json(m)),*
                }
            }
        }
    };
}

push_kinds! {
    Text("text") => inbound::Text,
    Image("image") => inbound::Image,
    Voice("voice") => inbound::Voice,
    Video("video") => inbound::Video,
    Location("location") => inbound::Location,
    Link("link") => inbound::Link,
    Subscribe("subscribe") => event::Subscribe,
    SubscribeByScan("subscribe_by_scan") => event::SubscribeByScan,
    Unsubscribe("unsubscribe") => event::Unsubscribe,
    Scan("scan") => event::Scan,
    LocationEvent("location_event") => event::LocationEvent,
    Click("click") => event::Click,
    View("view") => event::View,
    ScanCodePush("scancode_push") => event::ScanCodePush,
    ScanCodeWaitMsg("scancode_waitmsg") => event::ScanCodeWaitMsg,
    PicSysPhoto("pic_sysphoto") => event::PicSysPhoto,
    PicPhotoOrAlbum("pic_photo_or_album") => event::PicPhotoOrAlbum,
    PicWeixin("pic_weixin") => event::PicWeixin,
    LocationSelect("location_select") => event::LocationSelect,
    EnterAgent("enter_agent") => event::EnterAgent,
    CardPassCheck("card_pass_check") => card::CardPassCheck,
    CardNotPassCheck("card_not_pass_check") => card::CardNotPassCheck,
    UserGetCard("user_get_card") => card::UserGetCard,
    UserDelCard("user_del_card") => card::UserDelCard,
    UserViewCard("user_view_card") => card::UserViewCard,
    UserConsumeCard("user_consume_card") => card::UserConsumeCard,
}

impl Kind {
    pub fn parse(name: &str) -> Option<Kind> {
        Kind::ALL.iter().copied().find(|k| k.as_str() == name)
    }

    /// Whether `platform` ever pushes this variant.
    pub fn supported_on(self, platform: Platform) -> bool {
        match platform {
            Platform::Mp => self != Kind::EnterAgent,
            Platform::Corp => !matches!(
                self,
                Kind::Link
                    | Kind::SubscribeByScan
                    | Kind::Scan
                    | Kind::CardPassCheck
                    | Kind::CardNotPassCheck
                    | Kind::UserGetCard
                    | Kind::UserDelCard
                    | Kind::UserViewCard
                    | Kind::UserConsumeCard
            ),
        }
    }

    /// Map a peeked discriminator to a variant.
    ///
    /// On personal accounts a `subscribe` whose key carries the QR scene
    /// prefix is a scan subscription.
    pub fn classify(platform: Platform, d: &Discriminator) -> Result<Kind> {
        let kind = match d.msg_type.as_str() {
            msg_type::TEXT => Some(Kind::Text),
            msg_type::IMAGE => Some(Kind::Image),
            msg_type::VOICE => Some(Kind::Voice),
            msg_type::VIDEO => Some(Kind::Video),
            msg_type::LOCATION => Some(Kind::Location),
            msg_type::LINK => Some(Kind::Link),
            msg_type::EVENT => Self::classify_event(platform, d),
            _ => None,
        };

        kind.filter(|k| k.supported_on(platform)).ok_or_else(|| {
            EnvelopeError::UnknownKind(format!("{platform}/{}/{}", d.msg_type, d.event))
        })
    }

    fn classify_event(platform: Platform, d: &Discriminator) -> Option<Kind> {
        let kind = match d.event.as_str() {
            event_type::SUBSCRIBE => {
                if platform == Platform::Mp && d.event_key.starts_with(QR_SCENE_PREFIX) {
                    Kind::SubscribeByScan
                } else {
                    Kind::Subscribe
                }
            }
            event_type::UNSUBSCRIBE => Kind::Unsubscribe,
            event_type::SCAN => Kind::Scan,
            event_type::LOCATION => Kind::LocationEvent,
            event_type::CLICK => Kind::Click,
            event_type::VIEW => Kind::View,
            event_type::SCAN_CODE_PUSH => Kind::ScanCodePush,
            event_type::SCAN_CODE_WAIT_MSG => Kind::ScanCodeWaitMsg,
            event_type::PIC_SYS_PHOTO => Kind::PicSysPhoto,
            event_type::PIC_PHOTO_OR_ALBUM => Kind::PicPhotoOrAlbum,
            event_type::PIC_WEIXIN => Kind::PicWeixin,
            event_type::LOCATION_SELECT => Kind::LocationSelect,
            event_type::ENTER_AGENT => Kind::EnterAgent,
            event_type::CARD_PASS_CHECK => Kind::CardPassCheck,
            event_type::CARD_NOT_PASS_CHECK => Kind::CardNotPassCheck,
            event_type::USER_GET_CARD => Kind::UserGetCard,
            event_type::USER_DEL_CARD => Kind::UserDelCard,
            event_type::USER_VIEW_CARD => Kind::UserViewCard,
            event_type::USER_CONSUME_CARD => Kind::UserConsumeCard,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified and decoded push. The raw buffer is kept so handlers can
/// re-decode it with another typed decoder.
#[derive(Debug, Clone)]
pub struct Inbound {
    pub platform: Platform,
    pub push: Push,
    pub raw: Bytes,
}

impl Inbound {
    pub fn decode(platform: Platform, raw: Bytes) -> Result<Self> {
        let disc = peek(&raw)?;
        let kind = Kind::classify(platform, &disc)?;
        let push = Push::decode_as(kind, &raw)?;
        Ok(Self { platform, push, raw })
    }

    pub fn kind(&self) -> Kind {
        self.push.kind()
    }

    pub fn header(&self) -> &Header {
        self.push.header()
    }
}
