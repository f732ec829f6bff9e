//! Message payloads pushed when a user sends something.

use serde::{Deserialize, Serialize};

use crate::protocol::envelope::Body;
use crate::protocol::header::msg_type;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Text {
    pub msg_id: i64,
    pub content: String,
}

impl Body for Text {
    const MSG_TYPE: &'static str = msg_type::TEXT;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Image {
    pub msg_id: i64,
    /// Downloadable through the media API.
    pub media_id: String,
    pub pic_url: String,
}

impl Body for Image {
    const MSG_TYPE: &'static str = msg_type::IMAGE;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Voice {
    pub msg_id: i64,
    pub media_id: String,
    /// amr, speex, ...
    pub format: String,
    /// Speech recognition result. Empty unless recognition is enabled for
    /// the account, and even then it may be empty.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub recognition: String,
}

impl Body for Voice {
    const MSG_TYPE: &'static str = msg_type::VOICE;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Video {
    pub msg_id: i64,
    pub media_id: String,
    pub thumb_media_id: String,
}

impl Body for Video {
    const MSG_TYPE: &'static str = msg_type::VIDEO;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Location {
    pub msg_id: i64,
    /// Latitude.
    #[serde(rename = "Location_X")]
    pub location_x: f64,
    /// Longitude.
    #[serde(rename = "Location_Y")]
    pub location_y: f64,
    /// Map zoom level.
    pub scale: i32,
    pub label: String,
}

impl Body for Location {
    const MSG_TYPE: &'static str = msg_type::LOCATION;
}

/// Personal accounts only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Link {
    pub msg_id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
}

impl Body for Link {
    const MSG_TYPE: &'static str = msg_type::LINK;
}
