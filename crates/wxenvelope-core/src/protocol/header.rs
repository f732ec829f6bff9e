//! Common message header and discriminator constants.

use serde::{Deserialize, Serialize};

/// `MsgType` values.
pub mod msg_type {
    pub const TEXT: &str = "text";
    pub const IMAGE: &str = "image";
    pub const VOICE: &str = "voice";
    pub const VIDEO: &str = "video";
    pub const LOCATION: &str = "location";
    pub const LINK: &str = "link";
    pub const EVENT: &str = "event";
    pub const MUSIC: &str = "music";
    pub const NEWS: &str = "news";
    pub const TRANSFER_CUSTOMER_SERVICE: &str = "transfer_customer_service";
}

/// `Event` values (valid when `MsgType` is `event`).
pub mod event_type {
    pub const SUBSCRIBE: &str = "subscribe";
    pub const UNSUBSCRIBE: &str = "unsubscribe";
    pub const SCAN: &str = "SCAN";
    pub const LOCATION: &str = "LOCATION";
    pub const CLICK: &str = "CLICK";
    pub const VIEW: &str = "VIEW";

    // Menu events below need client 5.4+; older clients never push them.
    pub const SCAN_CODE_PUSH: &str = "scancode_push";
    pub const SCAN_CODE_WAIT_MSG: &str = "scancode_waitmsg";
    pub const PIC_SYS_PHOTO: &str = "pic_sysphoto";
    pub const PIC_PHOTO_OR_ALBUM: &str = "pic_photo_or_album";
    pub const PIC_WEIXIN: &str = "pic_weixin";
    pub const LOCATION_SELECT: &str = "location_select";

    /// Enterprise only, pushed when the agent's report switch is on.
    pub const ENTER_AGENT: &str = "enter_agent";

    pub const CARD_PASS_CHECK: &str = "card_pass_check";
    pub const CARD_NOT_PASS_CHECK: &str = "card_not_pass_check";
    pub const USER_GET_CARD: &str = "user_get_card";
    pub const USER_DEL_CARD: &str = "user_del_card";
    pub const USER_VIEW_CARD: &str = "user_view_card";
    pub const USER_CONSUME_CARD: &str = "user_consume_card";
}

/// Header carried by every pushed message and every passive reply.
///
/// `msg_type` is informational. Decoding fills it from the buffer but never
/// checks it against the target record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Header {
    pub to_user_name: String,
    pub from_user_name: String,
    /// Seconds since the epoch.
    pub create_time: i64,
    pub msg_type: String,
    /// Enterprise agent id; personal accounts never carry it.
    #[serde(rename = "AgentID", skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<i64>,
}

impl Header {
    pub fn new(
        to: impl Into<String>,
        from: impl Into<String>,
        create_time: i64,
        msg_type: &str,
    ) -> Self {
        Self {
            to_user_name: to.into(),
            from_user_name: from.into(),
            create_time,
            msg_type: msg_type.to_string(),
            agent_id: None,
        }
    }
}
