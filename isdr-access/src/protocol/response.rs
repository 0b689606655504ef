// isdr-access/src/protocol/response.rs

use log::debug;

use crate::constants::SW_HEX_LEN;
use crate::protocol::status::StatusWord;
use crate::utils::is_even_hex;
use crate::{Error, Result};

/// One card response: the data bytes and the trailing status word.
///
/// Both parts are held in uppercase hex. The payload never includes the
/// status word and always has even length.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardResponse {
    data: String,
    status: StatusWord,
}

impl CardResponse {
    /// Parse a raw hex response, degrading to [`CardResponse::internal_error`]
    /// when the input is absent or malformed.
    pub fn parse(raw: Option<&str>) -> Self {
        match Self::try_parse(raw) {
            Ok(resp) => resp,
            Err(e) => {
                debug!("{}; reporting internal error", e);
                Self::internal_error()
            }
        }
    }

    /// Strict variant of [`CardResponse::parse`].
    ///
    /// Rejects absent input, odd length, fewer than four hex characters and
    /// anything outside `[0-9a-fA-F]`.
    pub fn try_parse(raw: Option<&str>) -> Result<Self> {
        let raw = raw.ok_or_else(|| Error::MalformedResponse("no response".into()))?;
        if raw.len() < SW_HEX_LEN {
            return Err(Error::MalformedResponse(format!(
                "response too short: {} hex characters",
                raw.len()
            )));
        }
        if !is_even_hex(raw) {
            return Err(Error::MalformedResponse(format!(
                "response is not a hex byte string: {:?}",
                raw
            )));
        }

        let split = raw.len() - SW_HEX_LEN;
        let status = StatusWord::from_hex(&raw[split..])
            .ok_or_else(|| Error::MalformedResponse(format!("bad status word in {:?}", raw)))?;
        Ok(Self {
            data: raw[..split].to_ascii_uppercase(),
            status,
        })
    }

    /// Sentinel response: no data, status 6F00.
    pub fn internal_error() -> Self {
        Self {
            data: String::new(),
            status: StatusWord::INTERNAL_EXCEPTION,
        }
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn status(&self) -> StatusWord {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn has_more_data(&self) -> bool {
        self.status.has_more_data()
    }

    /// Data followed by the status word, as returned to the caller.
    pub fn to_hex(&self) -> String {
        let mut s = String::with_capacity(self.data.len() + SW_HEX_LEN);
        s.push_str(&self.data);
        s.push_str(&self.status.to_hex());
        s
    }
}
