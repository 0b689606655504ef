// isdr-access/src/transport/mock.rs

use crate::protocol::Command;
use crate::transport::traits::Transport;
use crate::types::{Aid, ChannelHandle, PhysicalSlot};
use crate::{Error, Result};

/// Mock transport for unit tests. It records every call and returns queued
/// responses in order.
#[derive(Debug)]
pub struct MockTransport {
    /// Channel handed out by `open_channel`
    pub channel: ChannelHandle,
    pub responses: Vec<Option<String>>,
    /// Recorded open calls: (slot, AID hex)
    pub opens: Vec<(PhysicalSlot, String)>,
    /// Recorded transmit calls: (slot, channel, command)
    pub sent: Vec<(PhysicalSlot, ChannelHandle, Command)>,
    /// Recorded close calls
    pub closes: Vec<(PhysicalSlot, ChannelHandle)>,
    /// Testing hook: make `open_channel` fail with a transport error
    pub open_error: Option<String>,
    /// Testing hook: zero-based index of the transmit call that fails
    pub fail_transmit_at: Option<usize>,
    /// Testing hook: make `close_channel` fail after recording the call
    pub close_error: Option<String>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self::with_channel(ChannelHandle::new(1))
    }

    pub fn with_channel(channel: ChannelHandle) -> Self {
        Self {
            channel,
            responses: Vec::new(),
            opens: Vec::new(),
            sent: Vec::new(),
            closes: Vec::new(),
            open_error: None,
            fail_transmit_at: None,
            close_error: None,
        }
    }

    pub fn push_response(&mut self, resp: &str) {
        self.responses.push(Some(resp.to_string()));
    }

    /// Queue a transmit that yields no response string.
    pub fn push_missing_response(&mut self) {
        self.responses.push(None);
    }

    pub fn set_open_error(&mut self, msg: &str) {
        self.open_error = Some(msg.to_string());
    }

    pub fn set_fail_transmit_at(&mut self, index: usize) {
        self.fail_transmit_at = Some(index);
    }

    pub fn set_close_error(&mut self, msg: &str) {
        self.close_error = Some(msg.to_string());
    }

    /// Commands transmitted so far, without slot/channel.
    pub fn commands(&self) -> Vec<&Command> {
        self.sent.iter().map(|(_, _, c)| c).collect()
    }
}

impl Transport for MockTransport {
    fn open_channel(&mut self, slot: PhysicalSlot, aid: &Aid) -> Result<ChannelHandle> {
        self.opens.push((slot, aid.as_hex().to_string()));
        if let Some(msg) = &self.open_error {
            return Err(Error::Transport(msg.clone()));
        }
        Ok(self.channel)
    }

    fn transmit(
        &mut self,
        slot: PhysicalSlot,
        channel: ChannelHandle,
        command: &Command,
    ) -> Result<Option<String>> {
        let index = self.sent.len();
        self.sent.push((slot, channel, command.clone()));
        if self.fail_transmit_at == Some(index) {
            return Err(Error::Transport(format!("transmit #{} failed", index)));
        }
        if self.responses.is_empty() {
            Err(Error::Transport("no queued response".into()))
        } else {
            Ok(self.responses.remove(0))
        }
    }

    fn close_channel(&mut self, slot: PhysicalSlot, channel: ChannelHandle) -> Result<()> {
        self.closes.push((slot, channel));
        match &self.close_error {
            Some(msg) => Err(Error::Transport(msg.clone())),
            None => Ok(()),
        }
    }
}
