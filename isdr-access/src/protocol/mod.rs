// isdr-access/src/protocol/mod.rs

pub mod chain;
pub mod commands;
pub mod reassembly;
pub mod response;
pub mod status;

pub use chain::{ChainBlock, CommandChainer, plan};
pub use commands::Command;
pub use reassembly::{ResponseReassembler, reassemble};
pub use response::CardResponse;
pub use status::{StatusWord, SwCategory};
