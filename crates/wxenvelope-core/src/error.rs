//! Shared error type across wxEnvelope crates.

use std::fmt;

use thiserror::Error;

/// Stable error codes (used in cloud responses and test vectors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed or structurally incompatible buffer.
    Decode,
    /// Record could not be encoded.
    Encode,
    /// Declared article count differs from the list length.
    CountMismatch,
    /// Article list is empty.
    EmptyArticles,
    /// Article list is over the limit.
    TooManyArticles,
    /// Event key is missing its prefix.
    Format,
    /// Discriminator has no known variant.
    UnknownKind,
    /// Push payload too large.
    PayloadTooLarge,
    /// Invalid configuration.
    BadConfig,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Decode => "DECODE",
            ErrorCode::Encode => "ENCODE",
            ErrorCode::CountMismatch => "COUNT_MISMATCH",
            ErrorCode::EmptyArticles => "EMPTY_ARTICLES",
            ErrorCode::TooManyArticles => "TOO_MANY_ARTICLES",
            ErrorCode::Format => "FORMAT",
            ErrorCode::UnknownKind => "UNKNOWN_KIND",
            ErrorCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::Internal => "INTERNAL",
        }
    }

    /// Numeric form carried by `CloudError::code`.
    pub fn as_i32(self) -> i32 {
        match self {
            ErrorCode::Decode => 4001,
            ErrorCode::Encode => 5002,
            ErrorCode::CountMismatch => 4101,
            ErrorCode::EmptyArticles => 4102,
            ErrorCode::TooManyArticles => 4103,
            ErrorCode::Format => 4002,
            ErrorCode::UnknownKind => 4003,
            ErrorCode::PayloadTooLarge => 4013,
            ErrorCode::BadConfig => 5001,
            ErrorCode::Internal => 5000,
        }
    }
}

/// Article-list rule violations, in the order they are checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("news ArticleCount is {declared}, but the list holds {actual} articles")]
    CountMismatch { declared: usize, actual: usize },
    #[error("news holds no articles")]
    Empty,
    #[error("news may hold at most {limit} articles, got {actual}")]
    TooMany { limit: usize, actual: usize },
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, EnvelopeError>;

/// Unified error type used by core and router.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("event key must start with {expected:?}: {actual:?}")]
    Format { expected: String, actual: String },
    #[error("unknown discriminator: {0}")]
    UnknownKind(String),
    #[error("payload too large")]
    PayloadTooLarge,
    #[error("bad config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl EnvelopeError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            EnvelopeError::Decode(_) => ErrorCode::Decode,
            EnvelopeError::Encode(_) => ErrorCode::Encode,
            EnvelopeError::Validation(ValidationError::CountMismatch { .. }) => {
                ErrorCode::CountMismatch
            }
            EnvelopeError::Validation(ValidationError::Empty) => ErrorCode::EmptyArticles,
            EnvelopeError::Validation(ValidationError::TooMany { .. }) => {
                ErrorCode::TooManyArticles
            }
            EnvelopeError::Format { .. } => ErrorCode::Format,
            EnvelopeError::UnknownKind(_) => ErrorCode::UnknownKind,
            EnvelopeError::PayloadTooLarge => ErrorCode::PayloadTooLarge,
            EnvelopeError::Config(_) => ErrorCode::BadConfig,
            EnvelopeError::Internal(_) => ErrorCode::Internal,
        }
    }
}

impl serde::de::Error for EnvelopeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        EnvelopeError::Decode(msg.to_string())
    }
}
