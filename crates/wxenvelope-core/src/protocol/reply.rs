//! Passive replies returned synchronously in response to a push.
//!
//! Builders stamp the header (recipient, sender, time, fixed `MsgType`) and
//! copy payload fields verbatim. Nothing is validated at build time; call
//! `check_valid` on news replies before sending.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::protocol::envelope::{Body, ItemList, Message};
use crate::protocol::header::msg_type;

/// Max articles per news reply. Larger replies are silently dropped by the
/// platform.
pub const NEWS_ARTICLE_COUNT_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Text {
    /// May contain line breaks.
    pub content: String,
}

impl Body for Text {
    const MSG_TYPE: &'static str = msg_type::TEXT;
}

/// Reference to uploaded media.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Media {
    pub media_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Image {
    pub image: Media,
}

impl Body for Image {
    const MSG_TYPE: &'static str = msg_type::IMAGE;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Voice {
    pub voice: Media,
}

impl Body for Voice {
    const MSG_TYPE: &'static str = msg_type::VOICE;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct VideoInfo {
    pub media_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Video {
    pub video: VideoInfo,
}

impl Body for Video {
    const MSG_TYPE: &'static str = msg_type::VIDEO;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MusicInfo {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "MusicUrl")]
    pub music_url: String,
    /// Preferred on wifi.
    #[serde(rename = "HQMusicUrl")]
    pub hq_music_url: String,
    pub thumb_media_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Music {
    pub music: MusicInfo,
}

impl Body for Music {
    const MSG_TYPE: &'static str = msg_type::MUSIC;
}

/// One entry of a news reply. The first one is rendered large.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Article {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// JPG or PNG; 360*200 large, 200*200 small.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pic_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        pic_url: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            pic_url: pic_url.into(),
            url: url.into(),
        }
    }
}

/// Multi-article reply.
///
/// `article_count` is kept by hand: mutating `articles` does not update it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct News {
    pub article_count: usize,
    #[serde(skip_serializing_if = "ItemList::is_empty")]
    pub articles: ItemList<Article>,
}

impl Body for News {
    const MSG_TYPE: &'static str = msg_type::NEWS;
}

impl News {
    /// Rules are checked in order and the first failure is returned:
    /// count mismatch, then empty list, then over the limit.
    pub fn check_valid(&self) -> Result<(), ValidationError> {
        let n = self.articles.len();
        if n != self.article_count {
            return Err(ValidationError::CountMismatch {
                declared: self.article_count,
                actual: n,
            });
        }
        if n == 0 {
            return Err(ValidationError::Empty);
        }
        if n > NEWS_ARTICLE_COUNT_LIMIT {
            return Err(ValidationError::TooMany {
                limit: NEWS_ARTICLE_COUNT_LIMIT,
                actual: n,
            });
        }
        Ok(())
    }

    /// Set `article_count` from the list length.
    pub fn sync_article_count(&mut self) {
        self.article_count = self.articles.len();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TransInfo {
    pub kf_account: String,
}

/// Hand the conversation over to the customer-service system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TransferCustomerService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trans_info: Option<TransInfo>,
}

impl Body for TransferCustomerService {
    const MSG_TYPE: &'static str = msg_type::TRANSFER_CUSTOMER_SERVICE;
}

pub type ResText = Message<Text>;
pub type ResImage = Message<Image>;
pub type ResVoice = Message<Voice>;
pub type ResVideo = Message<Video>;
pub type ResMusic = Message<Music>;
pub type ResNews = Message<News>;
pub type TransferToCustomerService = Message<TransferCustomerService>;

impl Message<Text> {
    pub fn new(
        to: impl Into<String>,
        from: impl Into<String>,
        timestamp: i64,
        content: impl Into<String>,
    ) -> Self {
        let text = Text {
            content: content.into(),
        };
        Self::stamped(to, from, timestamp, text)
    }
}

impl Message<Image> {
    /// `media_id` comes from a media upload.
    pub fn new(
        to: impl Into<String>,
        from: impl Into<String>,
        timestamp: i64,
        media_id: impl Into<String>,
    ) -> Self {
        let image = Media {
            media_id: media_id.into(),
        };
        Self::stamped(to, from, timestamp, Image { image })
    }
}

impl Message<Voice> {
    pub fn new(
        to: impl Into<String>,
        from: impl Into<String>,
        timestamp: i64,
        media_id: impl Into<String>,
    ) -> Self {
        let voice = Media {
            media_id: media_id.into(),
        };
        Self::stamped(to, from, timestamp, Voice { voice })
    }
}

impl Message<Video> {
    /// `title` and `description` may be empty.
    pub fn new(
        to: impl Into<String>,
        from: impl Into<String>,
        timestamp: i64,
        media_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let video = VideoInfo {
            media_id: media_id.into(),
            title: title.into(),
            description: description.into(),
        };
        Self::stamped(to, from, timestamp, Video { video })
    }
}

impl Message<Music> {
    /// `title` and `description` may be empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        to: impl Into<String>,
        from: impl Into<String>,
        timestamp: i64,
        thumb_media_id: impl Into<String>,
        music_url: impl Into<String>,
        hq_music_url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let music = MusicInfo {
            title: title.into(),
            description: description.into(),
            music_url: music_url.into(),
            hq_music_url: hq_music_url.into(),
            thumb_media_id: thumb_media_id.into(),
        };
        Self::stamped(to, from, timestamp, Music { music })
    }
}

impl Message<News> {
    /// The count is taken from `articles` here; later edits to the list must
    /// update it too. No more than `NEWS_ARTICLE_COUNT_LIMIT` articles.
    pub fn new(
        to: impl Into<String>,
        from: impl Into<String>,
        timestamp: i64,
        articles: Vec<Article>,
    ) -> Self {
        let news = News {
            article_count: articles.len(),
            articles: ItemList::new(articles),
        };
        Self::stamped(to, from, timestamp, news)
    }
}

impl Message<TransferCustomerService> {
    /// Leave `kf_account` empty to let the platform pick an agent.
    pub fn new(
        to: impl Into<String>,
        from: impl Into<String>,
        timestamp: i64,
        kf_account: impl Into<String>,
    ) -> Self {
        let kf_account = kf_account.into();
        let trans_info = if kf_account.is_empty() {
            None
        } else {
            Some(TransInfo { kf_account })
        };
        Self::stamped(to, from, timestamp, TransferCustomerService { trans_info })
    }
}
