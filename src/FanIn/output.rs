// src/FanIn/output.rs

use super::input::PhantomUnsync;
use crate::Core::message::MessageSet;
use crate::FanIn::Ring::Channel;
use crate::FanIn::Structs::MessageContainer;
use std::marker::PhantomData;
use std::sync::Arc;

/// Read side of one channel, held by the single consumer thread.
///
/// The consumer gets one output handle per channel. See [`InputHandle`]
/// for the thread safety rules (same semantics apply).
///
/// [`InputHandle`]: super::InputHandle
pub struct OutputHandle<S: MessageSet> {
    channels: Arc<[Channel<S>]>,
    index: usize,
    _unsync: PhantomUnsync,
}

impl<S: MessageSet> OutputHandle<S> {
    pub(crate) fn new(channels: Arc<[Channel<S>]>, index: usize) -> Self {
        debug_assert!(index < channels.len());
        Self {
            channels,
            index,
            _unsync: PhantomData,
        }
    }

    #[inline]
    fn channel(&self) -> &Channel<S> {
        &self.channels[self.index]
    }

    /// Number of pending messages in the channel.
    ///
    /// Read this once, then pop exactly that many messages: the channel is
    /// never popped empty and the receive loop is guaranteed to finish even
    /// while the producer keeps pushing.
    #[inline]
    pub fn num_messages(&self) -> usize {
        self.channel().size()
    }

    /// Pops the oldest message.
    ///
    /// Check the type with [`MessageContainer::is_of_type`] or
    /// [`MessageContainer::kind`], then read it with
    /// [`MessageContainer::get_message`], or `match` on
    /// [`MessageContainer::message`].
    ///
    /// # Panics
    /// Panics if the channel is empty.
    #[inline]
    pub fn pop_message(&self) -> MessageContainer<S> {
        // SAFETY: this handle is the channel's only output capability and is
        // not Sync, so pops come from one thread.
        unsafe { self.channel().pop_front() }
    }

    /// Pops the oldest message, or returns `None` if the channel is empty.
    #[inline]
    pub fn try_pop_message(&self) -> Option<MessageContainer<S>> {
        // SAFETY: see pop_message.
        unsafe { self.channel().try_pop_front() }
    }

    /// Pops exactly the messages pending right now, oldest first, handing each
    /// to `handler`. Returns how many were popped.
    ///
    /// Messages pushed while draining are left for the next call.
    pub fn drain<F>(&self, mut handler: F) -> usize
    where
        F: FnMut(MessageContainer<S>),
    {
        let pending = self.num_messages();
        for _ in 0..pending {
            handler(self.pop_message());
        }
        pending
    }

    /// Index of the channel this handle reads from.
    pub fn channel_index(&self) -> usize {
        self.index
    }

    /// Maximum number of pending messages in the channel.
    pub fn capacity(&self) -> usize {
        self.channel().capacity()
    }
}
