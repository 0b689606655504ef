// isdr-access/src/protocol/chain.rs

//! STORE DATA command chaining.
//!
//! A payload is cut into blocks of at most `max_block_bytes` bytes. Each
//! block carries its sequence number in P2 and a more/last marker in P1.
//! Planning is pure: transmission and early abort belong to the session.

use crate::constants::{DATA_BLOCK_MAX, MAX_CHAIN_BLOCKS, STORE_DATA_P1_LAST, STORE_DATA_P1_MORE};
use crate::utils::is_hex_string;
use crate::{Error, Result};

/// One block of a chained write plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainBlock {
    /// Position in the chain, starting at 0
    pub sequence: u8,
    pub is_last: bool,
    /// Length of `data` in bytes
    pub len: u8,
    pub data: String,
}

impl ChainBlock {
    pub fn p1(&self) -> u8 {
        if self.is_last {
            STORE_DATA_P1_LAST
        } else {
            STORE_DATA_P1_MORE
        }
    }

    pub fn p2(&self) -> u8 {
        self.sequence
    }
}

/// Splits payloads into STORE DATA blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandChainer {
    max_block_bytes: u8,
}

impl Default for CommandChainer {
    fn default() -> Self {
        Self {
            max_block_bytes: DATA_BLOCK_MAX,
        }
    }
}

impl CommandChainer {
    pub fn new(max_block_bytes: u8) -> Result<Self> {
        if max_block_bytes == 0 {
            return Err(Error::InvalidConfig("block size must be at least 1 byte".into()));
        }
        Ok(Self { max_block_bytes })
    }

    pub fn max_block_bytes(&self) -> u8 {
        self.max_block_bytes
    }

    /// Plan the chained write for `payload_hex`.
    ///
    /// An empty payload still yields one zero-length last block. Payloads
    /// that would need more than 256 blocks are rejected since P2 cannot
    /// address them.
    pub fn plan(&self, payload_hex: &str) -> Result<Vec<ChainBlock>> {
        if payload_hex.len() % 2 != 0 || !(payload_hex.is_empty() || is_hex_string(payload_hex)) {
            return Err(Error::InvalidInput("payload is not a hex byte string".into()));
        }

        let step = self.max_block_bytes as usize * 2;
        let blocks = payload_hex.len().div_ceil(step).max(1);
        if blocks > MAX_CHAIN_BLOCKS {
            return Err(Error::PayloadTooLarge {
                blocks,
                max: MAX_CHAIN_BLOCKS,
            });
        }

        let mut plan = Vec::with_capacity(blocks);
        let mut begin = 0usize;
        loop {
            let end = (begin + step).min(payload_hex.len());
            let is_last = end == payload_hex.len();
            plan.push(ChainBlock {
                sequence: plan.len() as u8,
                is_last,
                len: ((end - begin) / 2) as u8,
                data: payload_hex[begin..end].to_string(),
            });
            if is_last {
                break;
            }
            begin = end;
        }
        Ok(plan)
    }
}

/// Plan with an explicit block cap; see [`CommandChainer::plan`].
pub fn plan(payload_hex: &str, max_block_bytes: u8) -> Result<Vec<ChainBlock>> {
    CommandChainer::new(max_block_bytes)?.plan(payload_hex)
}
