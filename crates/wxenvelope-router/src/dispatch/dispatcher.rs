use std::sync::Arc;

use dashmap::DashMap;

use wxenvelope_core::error::Result;

use crate::push::{Inbound, Kind};

/// Handles one or more push kinds. `Ok(None)` means no passive reply.
pub trait PushHandler: Send + Sync {
    fn kinds(&self) -> Vec<Kind>;
    fn handle(&self, inbound: &Inbound) -> Result<Option<String>>;
}

/// Registry of handlers keyed by push kind. A later registration for the
/// same kind replaces the earlier one.
#[derive(Default)]
pub struct Dispatcher {
    handlers: DashMap<Kind, Arc<dyn PushHandler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            handlers: DashMap::new(),
        }
    }

    pub fn register(&self, handler: Arc<dyn PushHandler>) {
        for kind in handler.kinds() {
            self.handlers.insert(kind, Arc::clone(&handler));
        }
    }

    pub fn registered_kinds(&self) -> Vec<Kind> {
        self.handlers.iter().map(|e| *e.key()).collect()
    }

    pub fn dispatch(&self, inbound: &Inbound) -> Result<Option<String>> {
        let kind = inbound.kind();
        let Some(handler) = self.handlers.get(&kind).map(|e| e.value().clone()) else {
            tracing::debug!(%kind, "no handler registered");
            return Ok(None);
        };
        handler.handle(inbound)
    }
}
