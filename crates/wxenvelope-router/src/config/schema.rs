use std::collections::HashSet;

use serde::Deserialize;
use wxenvelope_core::error::{EnvelopeError, Result};

use crate::push::{Kind, Platform};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig {
    pub version: u32,

    pub platform: Platform,

    #[serde(default)]
    pub limits: Limits,

    #[serde(default)]
    pub auto_replies: Vec<AutoReply>,
}

impl RouterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(EnvelopeError::Config(format!(
                "unsupported version: {}",
                self.version
            )));
        }

        self.limits.validate()?;

        let mut seen = HashSet::new();
        for rule in &self.auto_replies {
            let kind = rule.kind()?;
            if !kind.supported_on(self.platform) {
                return Err(EnvelopeError::Config(format!(
                    "auto_replies: {kind} is never pushed on {}",
                    self.platform
                )));
            }
            if !seen.insert(kind) {
                return Err(EnvelopeError::Config(format!(
                    "auto_replies: duplicate rule for {kind}"
                )));
            }
            if rule.text.trim().is_empty() {
                return Err(EnvelopeError::Config(format!(
                    "auto_replies: empty text for {kind}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Limits {
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

impl Limits {
    pub fn validate(&self) -> Result<()> {
        if !(256..=1_048_576).contains(&self.max_payload_bytes) {
            return Err(EnvelopeError::Config(
                "limits.max_payload_bytes must be between 256 and 1048576".into(),
            ));
        }
        Ok(())
    }
}

/// Canned text reply for one push kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutoReply {
    pub kind: String,
    pub text: String,
}

impl AutoReply {
    pub fn kind(&self) -> Result<Kind> {
        Kind::parse(&self.kind)
            .ok_or_else(|| EnvelopeError::Config(format!("auto_replies: unknown kind {:?}", self.kind)))
    }
}

fn default_max_payload_bytes() -> usize {
    64 * 1024
}
