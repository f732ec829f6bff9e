//! Built-in push handlers.

pub mod auto_reply;

pub use auto_reply::AutoReplyService;
