// isdr-access/src/types.rs

use crate::Error;
use crate::constants::{AID_ISD_R, DEFAULT_PHYSICAL_SLOT};
use crate::utils::{is_even_hex, is_hex_string};
use derive_more::{Display, From, Into};
use std::convert::TryFrom;

/// Physical slot index hosting the secure element.
///
/// The slot is a precondition supplied by the caller; the crate never
/// discovers or switches slots itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalSlot(i32);

impl PhysicalSlot {
    pub const fn new(index: i32) -> Self {
        Self(index)
    }

    pub fn index(&self) -> i32 {
        self.0
    }
}

impl Default for PhysicalSlot {
    fn default() -> Self {
        Self(DEFAULT_PHYSICAL_SLOT)
    }
}

/// Opaque logical channel number handed out by the transport on open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelHandle(i32);

impl ChannelHandle {
    /// Value a transport reports when no channel could be opened.
    pub const INVALID: Self = Self(-1);

    pub const fn new(channel: i32) -> Self {
        Self(channel)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

/// Application identifier, 5 to 16 bytes (ISO 7816-5), held as uppercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Aid(String);

impl Aid {
    pub const MIN_LEN: usize = 5;
    pub const MAX_LEN: usize = 16;

    /// The ISD-R of an eUICC.
    pub fn isd_r() -> Self {
        Self(AID_ISD_R.to_string())
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }

    pub fn len_bytes(&self) -> usize {
        self.0.len() / 2
    }
}

impl Default for Aid {
    fn default() -> Self {
        Self::isd_r()
    }
}

impl TryFrom<&str> for Aid {
    type Error = Error;

    fn try_from(hex: &str) -> Result<Self, Self::Error> {
        if !is_even_hex(hex) {
            return Err(Error::InvalidConfig(format!("AID '{}' is not a hex byte string", hex)));
        }
        let len = hex.len() / 2;
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(Error::InvalidConfig(format!(
                "AID must be {}..={} bytes, got {}",
                Self::MIN_LEN,
                Self::MAX_LEN,
                len
            )));
        }
        Ok(Self(hex.to_ascii_uppercase()))
    }
}

impl TryFrom<String> for Aid {
    type Error = Error;

    fn try_from(hex: String) -> Result<Self, Self::Error> {
        Self::try_from(hex.as_str())
    }
}

impl From<Aid> for String {
    fn from(aid: Aid) -> Self {
        aid.0
    }
}

/// Caller payload for one store-and-read-back request.
///
/// Construction enforces the boundary contract: at least one byte, even
/// length, hex digits only. The caller's casing is kept and forwarded to
/// the card as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreRequest(String);

impl StoreRequest {
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    pub fn len_bytes(&self) -> usize {
        self.0.len() / 2
    }
}

impl TryFrom<&str> for StoreRequest {
    type Error = Error;

    fn try_from(hex: &str) -> Result<Self, Self::Error> {
        if hex.len() < 2 {
            return Err(Error::InvalidInput("request data is empty".into()));
        }
        if hex.len() % 2 != 0 {
            return Err(Error::InvalidInput(format!(
                "request data has odd length {}",
                hex.len()
            )));
        }
        if !is_hex_string(hex) {
            return Err(Error::InvalidInput("request data contains non-hex characters".into()));
        }
        Ok(Self(hex.to_string()))
    }
}
