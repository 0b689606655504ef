// isdr-access/src/prelude.rs

pub use crate::config::SessionConfig;
pub use crate::protocol::{
    CardResponse, ChainBlock, Command, CommandChainer, ResponseReassembler, StatusWord, SwCategory,
};
pub use crate::service::{StoreService, run_exchange};
pub use crate::session::{ChannelSession, ExchangeOutcome, SessionBuilder};
pub use crate::transport::Transport;
pub use crate::{Aid, ChannelHandle, Error, PhysicalSlot, Result, StoreRequest};

#[cfg(feature = "async")]
pub use crate::service::{AsyncStore, AsyncStoreService};
