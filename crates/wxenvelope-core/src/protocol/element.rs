//! Element tree for pushed documents and a serde deserializer over it.
//!
//! Text is kept verbatim: string fields see leading and trailing whitespace,
//! numbers are parsed from the trimmed text and an empty element reads as
//! zero. Repeated children collapse into one field; read as a scalar the last
//! one wins, read as a sequence all of them are visited in order.

use std::str::FromStr;

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::value::StrDeserializer;
use serde::de::{
    self, DeserializeSeed, Expected, IntoDeserializer, MapAccess, SeqAccess, Unexpected, Visitor,
};

use crate::error::{EnvelopeError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub text: String,
    pub children: Vec<Element>,
}

/// Parse `text` into its root element.
///
/// On a syntax error the root is still returned, holding every child that
/// was closed before the error.
pub fn parse_document(text: &str) -> (Element, Option<EnvelopeError>) {
    let mut reader = Reader::from_str(text);
    let mut open: Vec<Element> = Vec::new();

    let error = loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match element_name(e.name().as_ref()) {
                Ok(name) => open.push(Element {
                    name,
                    ..Element::default()
                }),
                Err(err) => break err,
            },
            Ok(Event::Empty(e)) => match element_name(e.name().as_ref()) {
                Ok(name) => {
                    let el = Element {
                        name,
                        ..Element::default()
                    };
                    match open.last_mut() {
                        Some(parent) => parent.children.push(el),
                        None => return (el, None),
                    }
                }
                Err(err) => break err,
            },
            Ok(Event::End(_)) => {
                let Some(done) = open.pop() else {
                    break EnvelopeError::Decode("unexpected end tag".into());
                };
                match open.last_mut() {
                    Some(parent) => parent.children.push(done),
                    None => return (done, None),
                }
            }
            Ok(Event::Text(t)) => {
                let Some(current) = open.last_mut() else {
                    continue;
                };
                let unescaped = std::str::from_utf8(&t)
                    .map_err(|e| EnvelopeError::Decode(format!("invalid utf-8: {e}")))
                    .and_then(|raw| {
                        quick_xml::escape::unescape(raw)
                            .map_err(|e| EnvelopeError::Decode(e.to_string()))
                    });
                match unescaped {
                    Ok(s) => current.text.push_str(&s),
                    Err(err) => break err,
                }
            }
            Ok(Event::CData(c)) => {
                let Some(current) = open.last_mut() else {
                    continue;
                };
                match std::str::from_utf8(&c) {
                    Ok(s) => current.text.push_str(s),
                    Err(e) => break EnvelopeError::Decode(format!("invalid utf-8: {e}")),
                }
            }
            Ok(Event::Eof) => {
                let msg = if open.is_empty() {
                    "missing root element"
                } else {
                    "unexpected end of document"
                };
                break EnvelopeError::Decode(msg.into());
            }
            Ok(_) => {}
            Err(e) => break EnvelopeError::Decode(e.to_string()),
        }
    };

    // Unfinished descendants are dropped with the rest of the stack.
    let root = open.into_iter().next().unwrap_or_default();
    (root, Some(error))
}

fn element_name(raw: &[u8]) -> Result<String> {
    std::str::from_utf8(raw)
        .map(str::to_string)
        .map_err(|e| EnvelopeError::Decode(format!("invalid element name: {e}")))
}

/// Deserializer view of one element.
#[derive(Debug, Clone, Copy)]
pub struct ElementDeserializer<'a> {
    node: &'a Element,
    children: &'a [Element],
    /// Elements a sequence read walks: same-named siblings, or the node
    /// itself.
    siblings: &'a [Element],
}

impl<'a> ElementDeserializer<'a> {
    pub fn new(node: &'a Element) -> Self {
        Self {
            node,
            children: &node.children,
            siblings: std::slice::from_ref(node),
        }
    }

    /// Same element, seen with only `children`.
    pub fn with_children(self, children: &'a [Element]) -> Self {
        Self { children, ..self }
    }

    fn number<T: FromStr + Default>(&self, exp: &dyn Expected) -> Result<T> {
        let t = self.node.text.trim();
        if t.is_empty() {
            return Ok(T::default());
        }
        t.parse()
            .map_err(|_| de::Error::invalid_type(Unexpected::Str(&self.node.text), exp))
    }
}

macro_rules! parse_number {
    ($($method:ident => $visit:ident),* $(,)?) => {
        $(
            fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
                let n = self.number(&visitor)?;
                visitor.$visit(n)
            }
        )*
    };
}

impl<'de, 'a> de::Deserializer<'de> for ElementDeserializer<'a> {
    type Error = EnvelopeError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        if self.children.is_empty() {
            visitor.visit_str(&self.node.text)
        } else {
            self.deserialize_map(visitor)
        }
    }

    parse_number! {
        deserialize_i8 => visit_i8,
        deserialize_i16 => visit_i16,
        deserialize_i32 => visit_i32,
        deserialize_i64 => visit_i64,
        deserialize_u8 => visit_u8,
        deserialize_u16 => visit_u16,
        deserialize_u32 => visit_u32,
        deserialize_u64 => visit_u64,
        deserialize_f32 => visit_f32,
        deserialize_f64 => visit_f64,
    }

    fn deserialize_bool<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        match self.node.text.trim() {
            "" | "0" | "false" => visitor.visit_bool(false),
            "1" | "true" => visitor.visit_bool(true),
            _ => Err(de::Error::invalid_type(
                Unexpected::Str(&self.node.text),
                &visitor,
            )),
        }
    }

    fn deserialize_char<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_str(&self.node.text)
    }

    fn deserialize_str<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_str(&self.node.text)
    }

    fn deserialize_string<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_string(self.node.text.clone())
    }

    fn deserialize_bytes<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_bytes(self.node.text.as_bytes())
    }

    fn deserialize_byte_buf<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_byte_buf(self.node.text.as_bytes().to_vec())
    }

    // Present element means `Some`, even when empty.
    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_some(self)
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_seq(Items {
            siblings: self.siblings,
            name: &self.node.name,
            pos: 0,
        })
    }

    fn deserialize_tuple<V: Visitor<'de>>(self, _len: usize, visitor: V) -> Result<V::Value> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_map(Fields {
            children: self.children,
            pos: 0,
            seen: Vec::new(),
            pending: None,
        })
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        self.deserialize_map(visitor)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        let variant: StrDeserializer<'_, EnvelopeError> =
            self.node.text.trim().into_deserializer();
        visitor.visit_enum(variant)
    }

    fn deserialize_identifier<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_str(&self.node.text)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_unit()
    }
}

/// Children as struct fields, one key per distinct element name.
struct Fields<'a> {
    children: &'a [Element],
    pos: usize,
    seen: Vec<&'a str>,
    pending: Option<&'a str>,
}

impl<'de, 'a> MapAccess<'de> for Fields<'a> {
    type Error = EnvelopeError;

    fn next_key_seed<K: DeserializeSeed<'de>>(&mut self, seed: K) -> Result<Option<K::Value>> {
        let children = self.children;
        while let Some(child) = children.get(self.pos) {
            self.pos += 1;
            let name = child.name.as_str();
            if self.seen.contains(&name) {
                continue;
            }
            self.seen.push(name);
            self.pending = Some(name);
            let key: StrDeserializer<'_, EnvelopeError> = name.into_deserializer();
            return seed.deserialize(key).map(Some);
        }
        Ok(None)
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value> {
        let name = self
            .pending
            .take()
            .ok_or_else(|| EnvelopeError::Internal("field value read before its key".into()))?;
        let children = self.children;
        let last = children
            .iter()
            .rev()
            .find(|c| c.name == name)
            .ok_or_else(|| EnvelopeError::Internal(format!("field {name} vanished")))?;
        seed.deserialize(ElementDeserializer {
            node: last,
            children: &last.children,
            siblings: children,
        })
    }
}

/// Same-named siblings as a sequence.
struct Items<'a> {
    siblings: &'a [Element],
    name: &'a str,
    pos: usize,
}

impl<'de, 'a> SeqAccess<'de> for Items<'a> {
    type Error = EnvelopeError;

    fn next_element_seed<T: DeserializeSeed<'de>>(&mut self, seed: T) -> Result<Option<T::Value>> {
        let siblings = self.siblings;
        while let Some(el) = siblings.get(self.pos) {
            self.pos += 1;
            if el.name == self.name {
                return seed.deserialize(ElementDeserializer::new(el)).map(Some);
            }
        }
        Ok(None)
    }
}
