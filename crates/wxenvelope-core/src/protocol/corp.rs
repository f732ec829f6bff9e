//! Enterprise account: record aliases and `parse_*` entry points.
//!
//! Records share the personal account's shapes; the header additionally
//! carries `AgentID`, subscriptions may carry a menu key and QR ticket, and
//! `enter_agent` exists only here.

use crate::protocol::codec::Parsed;
use crate::protocol::envelope::Message;
use crate::protocol::mp::decoders;
use crate::protocol::{event, inbound};

pub use crate::protocol::header::{event_type, msg_type, Header};
pub use crate::protocol::reply::{
    Article, ResImage, ResNews, ResText, ResVideo, ResVoice, NEWS_ARTICLE_COUNT_LIMIT,
};

pub type Text = Message<inbound::Text>;
pub type Image = Message<inbound::Image>;
pub type Voice = Message<inbound::Voice>;
pub type Video = Message<inbound::Video>;
pub type Location = Message<inbound::Location>;

pub type SubscribeEvent = Message<event::Subscribe>;
pub type UnsubscribeEvent = Message<event::Unsubscribe>;
pub type LocationEvent = Message<event::LocationEvent>;
pub type ClickEvent = Message<event::Click>;
pub type ViewEvent = Message<event::View>;
pub type ScanCodePushEvent = Message<event::ScanCodePush>;
pub type ScanCodeWaitMsgEvent = Message<event::ScanCodeWaitMsg>;
pub type PicSysPhotoEvent = Message<event::PicSysPhoto>;
pub type PicPhotoOrAlbumEvent = Message<event::PicPhotoOrAlbum>;
pub type PicWeixinEvent = Message<event::PicWeixin>;
pub type LocationSelectEvent = Message<event::LocationSelect>;
pub type EnterAgentEvent = Message<event::EnterAgent>;

decoders! {
    parse_text => Text,
    parse_image => Image,
    parse_voice => Voice,
    parse_video => Video,
    parse_location => Location,
    parse_subscribe_event => SubscribeEvent,
    parse_unsubscribe_event => UnsubscribeEvent,
    parse_location_event => LocationEvent,
    parse_click_event => ClickEvent,
    parse_view_event => ViewEvent,
    parse_scan_code_push_event => ScanCodePushEvent,
    parse_scan_code_wait_msg_event => ScanCodeWaitMsgEvent,
    parse_pic_sys_photo_event => PicSysPhotoEvent,
    parse_pic_photo_or_album_event => PicPhotoOrAlbumEvent,
    parse_pic_weixin_event => PicWeixinEvent,
    parse_location_select_event => LocationSelectEvent,
    parse_enter_agent_event => EnterAgentEvent,
}
