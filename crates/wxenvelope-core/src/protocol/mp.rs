//! Personal (official) account: record aliases and `parse_*` entry points.
//!
//! Each `parse_*` function decodes into exactly one variant. The caller must
//! already know which one the buffer holds; see the router crate for
//! discriminator-based dispatch.

use crate::protocol::codec::Parsed;
use crate::protocol::envelope::Message;
use crate::protocol::{card, event, inbound};

pub use crate::protocol::header::{event_type, msg_type, Header};
pub use crate::protocol::pay::{NativePay, PayNotify};
pub use crate::protocol::reply::{
    Article, ResImage, ResMusic, ResNews, ResText, ResVideo, ResVoice, TransferToCustomerService,
    NEWS_ARTICLE_COUNT_LIMIT,
};

pub type Text = Message<inbound::Text>;
pub type Image = Message<inbound::Image>;
pub type Voice = Message<inbound::Voice>;
pub type Video = Message<inbound::Video>;
pub type Location = Message<inbound::Location>;
pub type Link = Message<inbound::Link>;

pub type SubscribeEvent = Message<event::Subscribe>;
pub type UnsubscribeEvent = Message<event::Unsubscribe>;
pub type SubscribeByScanEvent = Message<event::SubscribeByScan>;
pub type ScanEvent = Message<event::Scan>;
pub type LocationEvent = Message<event::LocationEvent>;
pub type ClickEvent = Message<event::Click>;
pub type ViewEvent = Message<event::View>;
pub type ScanCodePushEvent = Message<event::ScanCodePush>;
pub type ScanCodeWaitMsgEvent = Message<event::ScanCodeWaitMsg>;
pub type PicSysPhotoEvent = Message<event::PicSysPhoto>;
pub type PicPhotoOrAlbumEvent = Message<event::PicPhotoOrAlbum>;
pub type PicWeixinEvent = Message<event::PicWeixin>;
pub type LocationSelectEvent = Message<event::LocationSelect>;

pub type CardPassCheckEvent = Message<card::CardPassCheck>;
pub type CardNotPassCheckEvent = Message<card::CardNotPassCheck>;
pub type UserGetCardEvent = Message<card::UserGetCard>;
pub type UserDelCardEvent = Message<card::UserDelCard>;
pub type UserViewCardEvent = Message<card::UserViewCard>;
pub type UserConsumeCardEvent = Message<card::UserConsumeCard>;

/// Declares `pub fn $name(buf: &[u8]) -> Parsed<$ty>` for each pair.
macro_rules! decoders {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            pub fn $name(buf: &[u8]) -> Parsed<$ty> {
                <$ty>::parse(buf)
            }
        )*
    };
}

pub(crate) use decoders;

decoders! {
    parse_text => Text,
    parse_image => Image,
    parse_voice => Voice,
    parse_video => Video,
    parse_location => Location,
    parse_link => Link,
    parse_subscribe_event => SubscribeEvent,
    parse_unsubscribe_event => UnsubscribeEvent,
    parse_subscribe_by_scan_event => SubscribeByScanEvent,
    parse_scan_event => ScanEvent,
    parse_location_event => LocationEvent,
    parse_click_event => ClickEvent,
    parse_view_event => ViewEvent,
    parse_scan_code_push_event => ScanCodePushEvent,
    parse_scan_code_wait_msg_event => ScanCodeWaitMsgEvent,
    parse_pic_sys_photo_event => PicSysPhotoEvent,
    parse_pic_photo_or_album_event => PicPhotoOrAlbumEvent,
    parse_pic_weixin_event => PicWeixinEvent,
    parse_location_select_event => LocationSelectEvent,
    parse_card_pass_check_event => CardPassCheckEvent,
    parse_card_not_pass_check_event => CardNotPassCheckEvent,
    parse_user_get_card_event => UserGetCardEvent,
    parse_user_del_card_event => UserDelCardEvent,
    parse_user_view_card_event => UserViewCardEvent,
    parse_user_consume_card_event => UserConsumeCardEvent,
    parse_native_pay => NativePay,
    parse_pay_notify => PayNotify,
}
