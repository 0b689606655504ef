// isdr-access/src/lib.rs

//! isdr-access
//!
//! Stores a hex data blob on a secure element applet with chained
//! GlobalPlatform STORE DATA commands over a logical channel, then reads
//! the applet's answer back through GET RESPONSE continuations.
//!
//! The host's slot-addressed channel primitives are supplied through the
//! [`transport::Transport`] trait.
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod service;
pub mod session;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
