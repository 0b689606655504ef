// isdr-access/src/transport/traits.rs

use crate::protocol::Command;
use crate::types::{Aid, ChannelHandle, PhysicalSlot};
use crate::Result;

/// Host capability for slot-addressed logical channels.
///
/// Whatever mechanism the host uses to reach its slot-addressed
/// primitives lives behind this trait. Every call blocks until the host
/// returns; implementations report host failures as `Error::Transport`.
pub trait Transport {
    /// Open a logical channel to `aid` on `slot`. A host that cannot open
    /// one returns [`ChannelHandle::INVALID`].
    fn open_channel(&mut self, slot: PhysicalSlot, aid: &Aid) -> Result<ChannelHandle>;

    /// Send one command APDU on `channel` and return the raw response hex
    /// (data followed by SW1 SW2). `None` means the host produced no
    /// response at all.
    fn transmit(
        &mut self,
        slot: PhysicalSlot,
        channel: ChannelHandle,
        command: &Command,
    ) -> Result<Option<String>>;

    /// Close a channel previously returned by `open_channel`.
    fn close_channel(&mut self, slot: PhysicalSlot, channel: ChannelHandle) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn open_channel(&mut self, slot: PhysicalSlot, aid: &Aid) -> Result<ChannelHandle> {
        (**self).open_channel(slot, aid)
    }

    fn transmit(
        &mut self,
        slot: PhysicalSlot,
        channel: ChannelHandle,
        command: &Command,
    ) -> Result<Option<String>> {
        (**self).transmit(slot, channel, command)
    }

    fn close_channel(&mut self, slot: PhysicalSlot, channel: ChannelHandle) -> Result<()> {
        (**self).close_channel(slot, channel)
    }
}
