// isdr-access/src/protocol/commands.rs

use crate::constants::*;
use crate::protocol::chain::ChainBlock;

/// Command APDUs issued on the logical channel. The transport receives the
/// header fields separately, as the host's slot-addressed transmit
/// primitive expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// GlobalPlatform STORE DATA, one block of a chained write.
    StoreData {
        p1: u8,
        block_number: u8,
        data: String,
    },
    /// ISO 7816-4 GET RESPONSE for up to `le` bytes (1..=256).
    GetResponse { le: u16 },
}

impl Command {
    /// STORE DATA for one planned block.
    pub fn store_data(block: &ChainBlock) -> Self {
        Self::StoreData {
            p1: block.p1(),
            block_number: block.p2(),
            data: block.data.clone(),
        }
    }

    pub fn get_response(le: u16) -> Self {
        Self::GetResponse { le }
    }

    pub fn cla(&self) -> u8 {
        match self {
            Self::StoreData { .. } => STORE_DATA_CLA,
            Self::GetResponse { .. } => GET_RESPONSE_CLA,
        }
    }

    pub fn ins(&self) -> u8 {
        match self {
            Self::StoreData { .. } => STORE_DATA_INS,
            Self::GetResponse { .. } => GET_RESPONSE_INS,
        }
    }

    pub fn p1(&self) -> u8 {
        match self {
            Self::StoreData { p1, .. } => *p1,
            Self::GetResponse { .. } => GET_RESPONSE_P1,
        }
    }

    pub fn p2(&self) -> u8 {
        match self {
            Self::StoreData { block_number, .. } => *block_number,
            Self::GetResponse { .. } => GET_RESPONSE_P2,
        }
    }

    /// P3: Lc for STORE DATA, Le for GET RESPONSE. 256 is passed as-is and
    /// left to the transport to encode as 00.
    pub fn p3(&self) -> u16 {
        match self {
            Self::StoreData { data, .. } => (data.len() / 2) as u16,
            Self::GetResponse { le } => *le,
        }
    }

    /// Command data in hex; empty for GET RESPONSE.
    pub fn data(&self) -> &str {
        match self {
            Self::StoreData { data, .. } => data,
            Self::GetResponse { .. } => "",
        }
    }
}
