//! Protocol modules for the XML push format.
//!
//! - `header` / `envelope`: the shared header and the generic `Message<B>`.
//! - `inbound`, `event`, `card`, `pay`: records pushed by the platform.
//! - `reply`: passive replies and their builders.
//! - `mp` / `corp`: per-platform aliases and `parse_*` entry points.
//! - `element`: the element tree the decoders read from.
//!
//! All decoders are panic-free: a malformed buffer yields a `Parsed` whose
//! `error` is set, never a crash.

pub mod card;
pub mod codec;
pub mod corp;
pub mod element;
pub mod envelope;
pub mod event;
pub mod header;
pub mod inbound;
pub mod mp;
pub mod pay;
pub mod reply;
