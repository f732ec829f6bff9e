//! Generic message envelope: one shared header plus a variant payload.

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::protocol::codec::{self, Parsed};
use crate::protocol::header::Header;

/// Variant payload of a pushed message or a reply.
///
/// `MSG_TYPE` / `EVENT` are the discriminator values the platform uses for
/// this variant. They are stamped by reply builders and available to
/// dispatchers, but decoding never checks them.
pub trait Body: Serialize + DeserializeOwned + Default {
    const MSG_TYPE: &'static str;
    const EVENT: Option<&'static str> = None;

    /// The `Event` field carried by the payload, if the variant has one.
    fn event(&self) -> Option<&str> {
        None
    }
}

/// Implements `Body` for event payloads: `MsgType` is `event`, and the
/// payload's `event` field carries the `Event` discriminator.
macro_rules! event_body {
    ($($ty:ty => $event:path),* $(,)?) => {
        $(
            impl $crate::protocol::envelope::Body for $ty {
                const MSG_TYPE: &'static str = $crate::protocol::header::msg_type::EVENT;
                const EVENT: Option<&'static str> = Some($event);

                fn event(&self) -> Option<&str> {
                    Some(self.event.as_str())
                }
            }
        )*
    };
}

pub(crate) use event_body;

/// Header + payload. Both are flattened into one element on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Message<B> {
    #[serde(flatten)]
    pub header: Header,
    #[serde(flatten)]
    pub body: B,
}

impl<B: Body> Message<B> {
    pub fn from_parts(header: Header, body: B) -> Self {
        Self { header, body }
    }

    /// Build a record whose header discriminator is fixed to `B::MSG_TYPE`.
    pub fn stamped(
        to: impl Into<String>,
        from: impl Into<String>,
        timestamp: i64,
        body: B,
    ) -> Self {
        Self {
            header: Header::new(to, from, timestamp, B::MSG_TYPE),
            body,
        }
    }

    /// Decode the XML push format into this variant.
    ///
    /// The value is returned even when decoding fails: header and payload are
    /// decoded independently, so whichever half succeeded stays populated.
    pub fn parse(buf: &[u8]) -> Parsed<Self> {
        codec::decode_message(buf)
    }

    /// Whether the decoded discriminator matches this variant's constants.
    pub fn matches_discriminator(&self) -> bool {
        if self.header.msg_type != B::MSG_TYPE {
            return false;
        }
        match B::EVENT {
            None => true,
            Some(ev) => self.body.event() == Some(ev),
        }
    }
}

impl<B> Deref for Message<B> {
    type Target = B;

    fn deref(&self) -> &B {
        &self.body
    }
}

impl<B> DerefMut for Message<B> {
    fn deref_mut(&mut self) -> &mut B {
        &mut self.body
    }
}

/// A list wrapped in a parent element with repeated `item` children, e.g.
/// `<Articles><item>..</item><item>..</item></Articles>`.
///
/// The JSON projection keeps the same shape: `{"item": [..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemList<T> {
    #[serde(rename = "item", default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> ItemList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for ItemList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for ItemList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Deref for ItemList<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Vec<T> {
        &self.items
    }
}

impl<T> DerefMut for ItemList<T> {
    fn deref_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }
}
