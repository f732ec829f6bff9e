//! Push routing: size check, classify, decode, dispatch.

use std::sync::Arc;

use bytes::Bytes;
use serde_json::json;

use wxenvelope_core::cloud::{CloudRequest, CloudResponse};
use wxenvelope_core::error::{EnvelopeError, Result};

use crate::config::RouterConfig;
use crate::dispatch::Dispatcher;
use crate::push::{Inbound, Kind, Platform};
use crate::services::AutoReplyService;

/// Outcome of routing one push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routed {
    pub kind: Kind,
    /// Encoded passive reply, if a handler produced one.
    pub reply: Option<String>,
}

pub struct Router {
    platform: Platform,
    max_payload_bytes: usize,
    dispatcher: Dispatcher,
}

impl Router {
    /// Build a router and register the configured auto replies.
    pub fn new(cfg: &RouterConfig) -> Result<Self> {
        let router = Self {
            platform: cfg.platform,
            max_payload_bytes: cfg.limits.max_payload_bytes,
            dispatcher: Dispatcher::new(),
        };

        let auto = AutoReplyService::from_config(&cfg.auto_replies)?;
        if !auto.is_empty() {
            router.dispatcher.register(Arc::new(auto));
        }
        Ok(router)
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn route(&self, raw: Bytes) -> Result<Routed> {
        if raw.len() > self.max_payload_bytes {
            return Err(EnvelopeError::PayloadTooLarge);
        }
        let inbound = Inbound::decode(self.platform, raw)?;
        let kind = inbound.kind();
        tracing::debug!(
            %kind,
            from = %inbound.header().from_user_name,
            agent_id = ?inbound.header().agent_id,
            "push decoded"
        );
        let reply = self.dispatcher.dispatch(&inbound)?;
        Ok(Routed { kind, reply })
    }

    /// Cloud-function entry: the pushed XML arrives in `extraData`, the
    /// passive reply (if any) leaves in `extraData`.
    pub fn handle_cloud(&self, req: &CloudRequest) -> CloudResponse {
        let raw = Bytes::copy_from_slice(req.extra_data.as_bytes());
        match self.route(raw) {
            Ok(Routed { kind, reply }) => {
                let res = CloudResponse::ok(json!({ "kind": kind.as_str() }));
                match reply {
                    Some(xml) => res.with_extra_data(xml),
                    None => res,
                }
            }
            Err(e) => {
                tracing::warn!(code = e.code().as_str(), error = %e, "push rejected");
                let mut res = CloudResponse::from(&e);
                res.log("error", e.code().as_str());
                res
            }
        }
    }
}
