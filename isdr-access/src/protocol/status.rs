// isdr-access/src/protocol/status.rs

//! Status word (SW1 SW2) classification.
//!
//! Classification follows the normal-processing codes of ETSI TS 102 221
//! clause 10.2.1.1 rather than the stricter ISO 7816-4 "90 00 only" rule:
//! a UICC may end a command with 91 XX (proactive command pending) or
//! 92 XX (data transfer session information) and both are successful.

use derive_more::Display;

use crate::constants::{GET_RESPONSE_MAX_LEN, SW_HEX_LEN, SW1_MORE_DATA};
use crate::utils::byte_from_hex;

/// Coarse outcome of a status word, a pure function of SW1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwCategory {
    /// 90 XX, 91 XX, 92 XX
    Success,
    /// 61 XX: SW2 response bytes are still available
    MoreData,
    Failure,
}

/// Status word terminating every card response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:02X}{:02X}", sw1, sw2)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusWord {
    pub sw1: u8,
    pub sw2: u8,
}

impl StatusWord {
    /// 90 00
    pub const SUCCESS: Self = Self::new(0x90, 0x00);
    /// 6F 00, reported when no card status could be obtained
    pub const INTERNAL_EXCEPTION: Self = Self::new(0x6F, 0x00);

    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self { sw1, sw2 }
    }

    pub const fn from_u16(status: u16) -> Self {
        Self {
            sw1: (status >> 8) as u8,
            sw2: status as u8,
        }
    }

    pub const fn to_u16(&self) -> u16 {
        ((self.sw1 as u16) << 8) | (self.sw2 as u16)
    }

    /// Parse the four hex characters of a status word.
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != SW_HEX_LEN || !hex.is_ascii() {
            return None;
        }
        let sw1 = byte_from_hex(&hex[..2])?;
        let sw2 = byte_from_hex(&hex[2..])?;
        Some(Self::new(sw1, sw2))
    }

    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    pub const fn category(&self) -> SwCategory {
        match self.sw1 {
            0x90 | 0x91 | 0x92 => SwCategory::Success,
            SW1_MORE_DATA => SwCategory::MoreData,
            _ => SwCategory::Failure,
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self.category(), SwCategory::Success)
    }

    pub const fn has_more_data(&self) -> bool {
        matches!(self.category(), SwCategory::MoreData)
    }

    /// Number of bytes to request with GET RESPONSE when SW1 = 61.
    /// SW2 = 00 stands for 256.
    pub const fn remaining_bytes(&self) -> Option<u16> {
        if !self.has_more_data() {
            return None;
        }
        if self.sw2 == 0x00 {
            Some(GET_RESPONSE_MAX_LEN)
        } else {
            Some(self.sw2 as u16)
        }
    }

    /// Short description used in log output.
    pub const fn description(&self) -> &'static str {
        match (self.sw1, self.sw2) {
            (0x90, 0x00) => "Normal ending of the command",
            (0x91, _) => "Normal ending, proactive command pending",
            (0x92, _) => "Normal ending, data transfer session information",
            (0x61, _) => "More data available",
            (0x62, 0x00) => "No information given",
            (0x62, 0x82) => "End of file/record reached before reading Le bytes",
            (0x63, n) if (n & 0xF0) == 0xC0 => "Counter value",
            (0x64, 0x00) => "State of non-volatile memory unchanged",
            (0x65, 0x81) => "Memory failure",
            (0x67, 0x00) => "Wrong length",
            (0x68, 0x81) => "Logical channel not supported",
            (0x69, 0x82) => "Security status not satisfied",
            (0x69, 0x85) => "Conditions of use not satisfied",
            (0x69, 0x86) => "Command not allowed",
            (0x6A, 0x80) => "Incorrect parameters in the data field",
            (0x6A, 0x81) => "Function not supported",
            (0x6A, 0x82) => "File or application not found",
            (0x6A, 0x84) => "Not enough memory space",
            (0x6A, 0x86) => "Incorrect parameters P1-P2",
            (0x6A, 0x88) => "Referenced data not found",
            (0x6C, _) => "Wrong Le field",
            (0x6D, 0x00) => "Instruction code not supported or invalid",
            (0x6E, 0x00) => "Class not supported",
            (0x6F, 0x00) => "No precise diagnosis",
            _ => "Unknown status word",
        }
    }
}

impl From<StatusWord> for u16 {
    fn from(sw: StatusWord) -> Self {
        sw.to_u16()
    }
}
