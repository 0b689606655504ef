// isdr-access/src/protocol/reassembly.rs

//! GET RESPONSE continuation loop.

use log::{trace, warn};

use crate::constants::DEFAULT_MAX_CONTINUATIONS;
use crate::protocol::response::CardResponse;
use crate::{Error, Result};

/// Collects a response spread over `61 XX` continuations.
///
/// The card alone decides when the sequence ends. `max_continuations`
/// bounds the number of GET RESPONSE round trips so a card that never
/// stops answering `61 XX` cannot hold the channel forever; `None`
/// removes the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseReassembler {
    max_continuations: Option<usize>,
}

impl Default for ResponseReassembler {
    fn default() -> Self {
        Self {
            max_continuations: Some(DEFAULT_MAX_CONTINUATIONS),
        }
    }
}

impl ResponseReassembler {
    pub fn new(max_continuations: Option<usize>) -> Self {
        Self { max_continuations }
    }

    pub fn unbounded() -> Self {
        Self::new(None)
    }

    pub fn max_continuations(&self) -> Option<usize> {
        self.max_continuations
    }

    /// Assemble the full response starting from `first`.
    ///
    /// `next` performs one GET RESPONSE for the requested length. Payloads
    /// are concatenated in order and the status word that ends the loop is
    /// appended last, whatever its class; interpreting it is up to the
    /// caller.
    pub fn reassemble<F>(&self, first: CardResponse, mut next: F) -> Result<String>
    where
        F: FnMut(u16) -> Result<CardResponse>,
    {
        let mut assembled = String::from(first.data());
        let mut current = first;
        let mut reads = 0usize;

        while let Some(le) = current.status().remaining_bytes() {
            if let Some(limit) = self.max_continuations {
                if reads >= limit {
                    warn!("card still signals {} after {} GET RESPONSE reads", current.status(), reads);
                    return Err(Error::ContinuationLimit { limit });
                }
            }
            trace!("GET RESPONSE #{} for {} bytes", reads + 1, le);
            current = next(le)?;
            reads += 1;
            assembled.push_str(current.data());
        }

        assembled.push_str(&current.status().to_hex());
        Ok(assembled)
    }
}

/// Reassemble with the default continuation bound.
pub fn reassemble<F>(first: CardResponse, next: F) -> Result<String>
where
    F: FnMut(u16) -> Result<CardResponse>,
{
    ResponseReassembler::default().reassemble(first, next)
}
