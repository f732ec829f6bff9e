//! Push router for the wxenvelope protocol layer.
//!
//! Classifies pushed XML documents, decodes them with the typed decoders from
//! `wxenvelope-core`, and dispatches them to registered handlers. Consumed by
//! the cloud-function binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod config;
pub mod dispatch;
pub mod push;
pub mod router;
pub mod services;
