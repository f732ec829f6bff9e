//! Top-level facade crate for wxEnvelope.
//!
//! Re-exports the protocol records and the push router so users can depend on a single crate.

pub mod core {
    pub use wxenvelope_core::*;
}

pub mod router {
    pub use wxenvelope_router::*;
}
