// isdr-access/src/session/mod.rs

pub mod builder;
pub mod handle;

pub use builder::SessionBuilder;
pub use handle::{ChannelSession, ExchangeOutcome};
