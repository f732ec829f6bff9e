use std::collections::HashMap;

use wxenvelope_core::error::Result;
use wxenvelope_core::protocol::reply::ResText;
use wxenvelope_core::encode_xml;

use crate::config::AutoReply;
use crate::dispatch::PushHandler;
use crate::push::{Inbound, Kind};

/// Answers configured kinds with a canned text reply addressed back to the
/// sender.
pub struct AutoReplyService {
    replies: HashMap<Kind, String>,
    clock: fn() -> i64,
}

impl AutoReplyService {
    pub fn from_config(rules: &[AutoReply]) -> Result<Self> {
        let mut replies = HashMap::with_capacity(rules.len());
        for rule in rules {
            replies.insert(rule.kind()?, rule.text.clone());
        }
        Ok(Self {
            replies,
            clock: unix_now,
        })
    }

    /// Replace the reply timestamp source.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }
}

impl PushHandler for AutoReplyService {
    fn kinds(&self) -> Vec<Kind> {
        self.replies.keys().copied().collect()
    }

    fn handle(&self, inbound: &Inbound) -> Result<Option<String>> {
        let Some(text) = self.replies.get(&inbound.kind()) else {
            return Ok(None);
        };
        let h = inbound.header();
        let reply = ResText::new(&h.from_user_name, &h.to_user_name, (self.clock)(), text.as_str());
        encode_xml(&reply).map(Some)
    }
}

fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}
