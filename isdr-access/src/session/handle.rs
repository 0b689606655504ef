// isdr-access/src/session/handle.rs

use log::{debug, trace, warn};

use crate::protocol::{CardResponse, ChainBlock, Command, ResponseReassembler};
use crate::transport::Transport;
use crate::types::{Aid, ChannelHandle, PhysicalSlot};
use crate::{Error, Result};

/// Result of one chained write followed by response reassembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeOutcome {
    /// Every block was accepted; holds the reassembled data and the final
    /// status word.
    Completed(String),
    /// A block was refused. No further blocks were sent.
    ChainAborted { sequence: u8, response: CardResponse },
}

impl ExchangeOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Hex string reported to the caller.
    pub fn into_hex(self) -> String {
        match self {
            Self::Completed(hex) => hex,
            Self::ChainAborted { response, .. } => response.to_hex(),
        }
    }
}

/// An open logical channel.
///
/// The channel is closed exactly once: by [`ChannelSession::close`] or,
/// failing that, when the session is dropped. That covers early returns,
/// `?` propagation and unwinding alike. Close failures are logged and
/// otherwise ignored.
pub struct ChannelSession<'t, T: Transport + ?Sized> {
    transport: &'t mut T,
    slot: PhysicalSlot,
    channel: ChannelHandle,
    closed: bool,
}

impl<'t, T: Transport + ?Sized> ChannelSession<'t, T> {
    /// Open a channel to `aid` on `slot`.
    ///
    /// Fails with `ChannelUnavailable` when the host reports an invalid
    /// handle; nothing needs closing in that case.
    pub fn open(transport: &'t mut T, slot: PhysicalSlot, aid: &Aid) -> Result<Self> {
        let channel = transport.open_channel(slot, aid)?;
        if !channel.is_valid() {
            debug!("no logical channel to {} on slot {}", aid, slot);
            return Err(Error::ChannelUnavailable { slot: slot.index() });
        }
        debug!("opened channel {} to {} on slot {}", channel, aid, slot);
        Ok(Self {
            transport,
            slot,
            channel,
            closed: false,
        })
    }

    pub fn slot(&self) -> PhysicalSlot {
        self.slot
    }

    pub fn channel(&self) -> ChannelHandle {
        self.channel
    }

    /// Send one command and parse the reply. Malformed or missing replies
    /// come back as the 6F00 sentinel response.
    pub fn transmit(&mut self, command: &Command) -> Result<CardResponse> {
        let raw = self.transport.transmit(self.slot, self.channel, command)?;
        Ok(CardResponse::parse(raw.as_deref()))
    }

    /// Transmit `plan` in sequence order, then reassemble the response to
    /// the last block.
    ///
    /// A block answered with anything but a success status aborts the
    /// chain, 61 XX included; that is an outcome, not an error. Errors are
    /// transport failures and the continuation bound.
    pub fn exchange(
        &mut self,
        plan: &[ChainBlock],
        reassembler: &ResponseReassembler,
    ) -> Result<ExchangeOutcome> {
        let mut last = None;
        for block in plan {
            trace!(
                "STORE DATA block {} ({} bytes, last={})",
                block.sequence, block.len, block.is_last
            );
            let resp = self.transmit(&Command::store_data(block))?;
            if !resp.is_success() {
                debug!(
                    "block {} refused with {} ({})",
                    block.sequence,
                    resp.status(),
                    resp.status().description()
                );
                return Ok(ExchangeOutcome::ChainAborted {
                    sequence: block.sequence,
                    response: resp,
                });
            }
            last = Some(resp);
        }

        let first = last.ok_or_else(|| Error::InvalidInput("empty write plan".into()))?;
        let assembled =
            reassembler.reassemble(first, |le| self.transmit(&Command::get_response(le)))?;
        Ok(ExchangeOutcome::Completed(assembled))
    }

    /// Close the channel now.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        match self.transport.close_channel(self.slot, self.channel) {
            Ok(()) => debug!("closed channel {} on slot {}", self.channel, self.slot),
            Err(e) => warn!("closing channel {} on slot {} failed: {}", self.channel, self.slot, e),
        }
    }
}

impl<T: Transport + ?Sized> Drop for ChannelSession<'_, T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T: Transport + ?Sized> std::fmt::Debug for ChannelSession<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelSession")
            .field("slot", &self.slot)
            .field("channel", &self.channel)
            .field("closed", &self.closed)
            .finish()
    }
}
