// isdr-access/src/error.rs

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// Caller-supplied data failed validation before any card traffic.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Session configuration rejected by `SessionConfig::validate`.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A card response failed hex/length validation.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The host could not open a logical channel to the ISD-R.
    #[error("logical channel unavailable on slot {slot}")]
    ChannelUnavailable {
        /// Physical slot the open was attempted on.
        slot: i32,
    },

    /// Failure raised by the host transport while opening or transmitting.
    #[error("transport error: {0}")]
    Transport(String),

    /// Reassembly hit the configured GET RESPONSE bound.
    #[error("card kept signalling more data after {limit} GET RESPONSE reads")]
    ContinuationLimit {
        /// Configured maximum number of continuation reads.
        limit: usize,
    },

    /// The payload needs more blocks than an 8-bit sequence number allows.
    #[error("payload needs {blocks} blocks, at most {max} can be chained")]
    PayloadTooLarge {
        /// Blocks the payload would need.
        blocks: usize,
        /// Maximum chainable blocks.
        max: usize,
    },
}

impl Error {
    /// Whether the error was caused by the caller's input rather than the
    /// card or transport.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::PayloadTooLarge { .. })
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
