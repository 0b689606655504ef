// isdr-access/src/config.rs
//! Per-service session configuration

use crate::constants::{DATA_BLOCK_MAX, DEFAULT_MAX_CONTINUATIONS};
use crate::protocol::{CommandChainer, ResponseReassembler};
use crate::types::{Aid, PhysicalSlot};
use crate::{Error, Result};

/// Where to open the channel and how to size the exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Slot expected to host the secure element
    pub slot: PhysicalSlot,
    /// Application the channel is opened against
    pub aid: Aid,
    /// STORE DATA block cap in bytes (1..=255)
    pub max_block_bytes: u8,
    /// Bound on GET RESPONSE reads per exchange; `None` trusts the card
    pub max_continuations: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            slot: PhysicalSlot::default(),
            aid: Aid::isd_r(),
            max_block_bytes: DATA_BLOCK_MAX,
            max_continuations: Some(DEFAULT_MAX_CONTINUATIONS),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_block_bytes == 0 {
            return Err(Error::InvalidConfig("max_block_bytes must be at least 1".into()));
        }
        if self.max_continuations == Some(0) {
            return Err(Error::InvalidConfig(
                "max_continuations must be at least 1 or unbounded".into(),
            ));
        }
        Ok(())
    }

    pub fn chainer(&self) -> Result<CommandChainer> {
        CommandChainer::new(self.max_block_bytes)
    }

    pub fn reassembler(&self) -> ResponseReassembler {
        ResponseReassembler::new(self.max_continuations)
    }
}
