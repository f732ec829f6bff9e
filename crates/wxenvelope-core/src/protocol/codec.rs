//! XML/JSON codec (panic-free).
//!
//! Decoding rules:
//! - The caller picks the target type; the discriminator is never consulted.
//! - The target starts zero-valued and is always returned, with the first
//!   error (if any) alongside it. Fields read before the failing element
//!   keep their values.
//! - Unknown elements are skipped, missing elements keep their zero value.
//! - String fields keep their text exactly, surrounding whitespace included.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::error::{EnvelopeError, Result};
use crate::protocol::element::{self, Element, ElementDeserializer};
use crate::protocol::envelope::{Body, Message};
use crate::protocol::header::Header;

/// Root element name of every push and reply document.
pub const ROOT: &str = "xml";

/// Outcome of a decode: the (possibly partial) value and the first error.
#[derive(Debug)]
#[must_use]
pub struct Parsed<T> {
    pub value: T,
    pub error: Option<EnvelopeError>,
}

impl<T> Parsed<T> {
    pub fn ok(value: T) -> Self {
        Self { value, error: None }
    }

    pub fn failed(value: T, error: EnvelopeError) -> Self {
        Self {
            value,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Drop the partial value on error.
    pub fn into_result(self) -> Result<T> {
        match self.error {
            None => Ok(self.value),
            Some(e) => Err(e),
        }
    }

    pub fn into_parts(self) -> (T, Option<EnvelopeError>) {
        (self.value, self.error)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        Parsed {
            value: f(self.value),
            error: self.error,
        }
    }

    fn record(&mut self, error: EnvelopeError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

/// Decode a header-carrying record. Header and payload are decoded in two
/// independent passes over the same element tree.
pub fn decode_message<B: Body>(buf: &[u8]) -> Parsed<Message<B>> {
    let mut parsed = Parsed::ok(Message::<B>::default());
    let root = match parse_root(buf) {
        Ok((root, syntax)) => {
            if let Some(e) = syntax {
                parsed.record(e);
            }
            root
        }
        Err(e) => {
            parsed.record(e);
            return parsed;
        }
    };

    let (header, error) = decode_fields::<Header>(&root);
    parsed.value.header = header;
    if let Some(e) = error {
        parsed.record(e);
    }
    let (body, error) = decode_fields::<B>(&root);
    parsed.value.body = body;
    if let Some(e) = error {
        parsed.record(e);
    }
    parsed
}

/// Decode a flat record (no shared header), e.g. payment notifications.
pub fn decode<T: DeserializeOwned + Default>(buf: &[u8]) -> Parsed<T> {
    let (root, syntax) = match parse_root(buf) {
        Ok(parts) => parts,
        Err(e) => return Parsed::failed(T::default(), e),
    };
    let (value, error) = decode_fields::<T>(&root);
    let mut parsed = Parsed::ok(value);
    for e in syntax.into_iter().chain(error) {
        parsed.record(e);
    }
    parsed
}

/// Encode a record as an XML document rooted at `<xml>`.
pub fn encode_xml<T: Serialize>(value: &T) -> Result<String> {
    quick_xml::se::to_string_with_root(ROOT, value)
        .map_err(|e| EnvelopeError::Encode(format!("xml: {e}")))
}

/// JSON projection of a record (same field names as XML).
pub fn encode_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| EnvelopeError::Encode(format!("json: {e}")))
}

fn parse_root(buf: &[u8]) -> Result<(Element, Option<EnvelopeError>)> {
    let text = std::str::from_utf8(buf)
        .map_err(|e| EnvelopeError::Decode(format!("invalid utf-8: {e}")))?;
    let (root, syntax) = element::parse_document(text);
    if let Some(e) = &syntax {
        tracing::debug!(error = %e, "xml syntax error, keeping closed elements");
    }
    Ok((root, syntax))
}

/// Decode `T` from the root's children. On failure, fields that precede the
/// first child failing on its own are kept; later ones stay zero.
fn decode_fields<T: DeserializeOwned + Default>(root: &Element) -> (T, Option<EnvelopeError>) {
    let view = ElementDeserializer::new(root);
    let error = match T::deserialize(view) {
        Ok(value) => return (value, None),
        Err(e) => e,
    };
    tracing::debug!(
        target_type = std::any::type_name::<T>(),
        error = %error,
        "xml decode failed"
    );

    let children = &root.children;
    let failing = (0..children.len())
        .find(|&i| T::deserialize(view.with_children(&children[i..=i])).is_err())
        .unwrap_or(children.len());
    let value = T::deserialize(view.with_children(&children[..failing])).unwrap_or_default();
    (value, Some(error))
}
