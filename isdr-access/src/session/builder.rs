// isdr-access/src/session/builder.rs

use crate::config::SessionConfig;
use crate::service::StoreService;
use crate::transport::Transport;
use crate::types::{Aid, PhysicalSlot};
use crate::{Error, Result};

/// Helper to construct a [`StoreService`] with optional configuration.
#[derive(Debug)]
pub struct SessionBuilder<T> {
    transport: Option<T>,
    config: SessionConfig,
}

impl<T> Default for SessionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SessionBuilder<T> {
    pub fn new() -> Self {
        Self {
            transport: None,
            config: SessionConfig::default(),
        }
    }

    /// Provide the host transport (e.g. MockTransport)
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn slot(mut self, slot: PhysicalSlot) -> Self {
        self.config.slot = slot;
        self
    }

    pub fn aid(mut self, aid: Aid) -> Self {
        self.config.aid = aid;
        self
    }

    pub fn max_block_bytes(mut self, n: u8) -> Self {
        self.config.max_block_bytes = n;
        self
    }

    pub fn max_continuations(mut self, n: Option<usize>) -> Self {
        self.config.max_continuations = n;
        self
    }
}

impl<T: Transport> SessionBuilder<T> {
    /// Consume the builder. Requires a transport and a valid configuration.
    pub fn build(self) -> Result<StoreService<T>> {
        let transport = self
            .transport
            .ok_or_else(|| Error::InvalidConfig("no transport provided".into()))?;
        StoreService::new(transport, self.config)
    }
}
