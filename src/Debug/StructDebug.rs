use std::fmt;
use crate::Core::message::MessageSet;
use crate::FanIn::Ring::Channel;
use crate::FanIn::Structs::MessageContainer;
use crate::FanIn::{FanInQueue, InputHandle, OutputHandle, Poller};

/// Debug function for FanInQueue
///
/// Shows:
/// - Channel count and per-channel capacity
/// - Pending messages per channel (a snapshot)
pub fn debug_fanin_queue<S: MessageSet>(queue: &FanInQueue<S>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let pending: Vec<usize> = (0..queue.channel_count())
        .filter_map(|index| queue.pending(index))
        .collect();
    f.debug_struct("FanInQueue")
        .field("channels", &queue.channel_count())
        .field("capacity", &queue.capacity())
        .field("pending", &pending)
        .finish()
}

/// Debug function for Channel
///
/// Only the shared counter is read; the cursors belong to the producer and
/// consumer threads and are never dereferenced here.
pub fn debug_channel<S: MessageSet>(channel: &Channel<S>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Channel")
        .field("size", &channel.size())
        .field("capacity", &channel.capacity())
        .field("slots", &format_args!("0x{:x}", channel.slots.as_ptr() as usize))
        .finish_non_exhaustive()
}

pub fn debug_input_handle<S: MessageSet>(handle: &InputHandle<S>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("InputHandle")
        .field("channel", &handle.channel_index())
        .field("capacity", &handle.capacity())
        .field("full", &handle.is_full())
        .finish()
}

pub fn debug_output_handle<S: MessageSet>(handle: &OutputHandle<S>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("OutputHandle")
        .field("channel", &handle.channel_index())
        .field("capacity", &handle.capacity())
        .field("pending", &handle.num_messages())
        .finish()
}

pub fn debug_poller<S: MessageSet>(poller: &Poller<S>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Poller")
        .field("channels", &poller.channel_count())
        .field("pending", &poller.pending())
        .finish()
}

/// Debug function for MessageContainer
///
/// Prints the kind, then the payload through the message set's own Debug.
pub fn debug_message_container<S>(container: &MessageContainer<S>, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    S: MessageSet + fmt::Debug,
{
    f.debug_struct("MessageContainer")
        .field("kind", &container.kind())
        .field("message", container.message())
        .finish()
}
