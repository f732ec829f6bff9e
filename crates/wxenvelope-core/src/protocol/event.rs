//! Event payloads (`MsgType` = `event`): subscriptions, QR scans, menu
//! clicks and the menu-driven scan/photo/location pickers.

use serde::{Deserialize, Serialize};

use crate::error::{EnvelopeError, Result};
use crate::protocol::envelope::{event_body, ItemList};
use crate::protocol::header::event_type;

/// Event key prefix of a subscription made by scanning a parametric QR code.
pub const QR_SCENE_PREFIX: &str = "qrscene_";

event_body! {
    Subscribe => event_type::SUBSCRIBE,
    Unsubscribe => event_type::UNSUBSCRIBE,
    SubscribeByScan => event_type::SUBSCRIBE,
    Scan => event_type::SCAN,
    LocationEvent => event_type::LOCATION,
    Click => event_type::CLICK,
    View => event_type::VIEW,
    ScanCodePush => event_type::SCAN_CODE_PUSH,
    ScanCodeWaitMsg => event_type::SCAN_CODE_WAIT_MSG,
    PicSysPhoto => event_type::PIC_SYS_PHOTO,
    PicPhotoOrAlbum => event_type::PIC_PHOTO_OR_ALBUM,
    PicWeixin => event_type::PIC_WEIXIN,
    LocationSelect => event_type::LOCATION_SELECT,
    EnterAgent => event_type::ENTER_AGENT,
}

/// Plain subscription. The enterprise platform may add a menu key and a
/// QR ticket; both are omitted from output when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Subscribe {
    pub event: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub event_key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ticket: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Unsubscribe {
    pub event: String,
}

/// A not-yet-subscribed user scanned a parametric QR code and subscribed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SubscribeByScan {
    pub event: String,
    /// `qrscene_` followed by the code's scene value.
    pub event_key: String,
    /// Exchangeable for the QR code image.
    pub ticket: String,
}

impl SubscribeByScan {
    /// Scene value of the scanned code, i.e. the event key minus its prefix.
    pub fn scene(&self) -> Result<&str> {
        self.event_key
            .strip_prefix(QR_SCENE_PREFIX)
            .ok_or_else(|| EnvelopeError::Format {
                expected: QR_SCENE_PREFIX.to_string(),
                actual: self.event_key.clone(),
            })
    }
}

/// An already-subscribed user scanned a parametric QR code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Scan {
    pub event: String,
    /// The code's scene_id (a 32-bit unsigned integer), without prefix.
    pub event_key: String,
    pub ticket: String,
}

/// Periodic location report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LocationEvent {
    pub event: String,
    pub latitude: f64,
    pub longitude: f64,
    pub precision: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Click {
    pub event: String,
    /// Matches the KEY of the custom menu entry.
    pub event_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct View {
    pub event: String,
    /// Target URL of the menu entry.
    pub event_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ScanCodeInfo {
    /// Usually `qrcode`.
    pub scan_type: String,
    pub scan_result: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ScanCodePush {
    pub event: String,
    pub event_key: String,
    pub scan_code_info: ScanCodeInfo,
}

/// Like `ScanCodePush`, but the client shows a "receiving" prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ScanCodeWaitMsg {
    pub event: String,
    pub event_key: String,
    pub scan_code_info: ScanCodeInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PicItem {
    pub pic_md5_sum: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SendPicsInfo {
    pub count: i32,
    #[serde(skip_serializing_if = "ItemList::is_empty")]
    pub pic_list: ItemList<PicItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PicSysPhoto {
    pub event: String,
    pub event_key: String,
    pub send_pics_info: SendPicsInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PicPhotoOrAlbum {
    pub event: String,
    pub event_key: String,
    pub send_pics_info: SendPicsInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PicWeixin {
    pub event: String,
    pub event_key: String,
    pub send_pics_info: SendPicsInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SendLocationInfo {
    #[serde(rename = "Location_X")]
    pub location_x: f64,
    #[serde(rename = "Location_Y")]
    pub location_y: f64,
    pub scale: i32,
    pub label: String,
    /// POI name from moments; may be empty.
    pub poiname: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LocationSelect {
    pub event: String,
    pub event_key: String,
    pub send_location_info: SendLocationInfo,
}

/// Enterprise only: the user opened the agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EnterAgent {
    pub event: String,
    /// Always empty for this event.
    pub event_key: String,
}
