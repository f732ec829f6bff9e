//! wxEnvelope core: typed push/reply records for the chat platform's XML
//! webhook protocol, their codec, and the cloud-function envelope.
//!
//! Every record decodes from and encodes to the XML push format, and projects
//! to JSON with the same field names. Decoding is variant-specific and never
//! looks at the discriminator; dispatch belongs to the caller (see the router
//! crate).
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Malformed input is
//! reported as `EnvelopeError` alongside the zero/partial record.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod cloud;
pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{EnvelopeError, ErrorCode, Result, ValidationError};
pub use protocol::codec::{encode_json, encode_xml, Parsed};
pub use protocol::envelope::{Body, ItemList, Message};
pub use protocol::header::Header;
