use std::ptr;
use std::sync::atomic::Ordering::{Acquire, Release};

use super::layout::{wrap_index, ChannelCursors};
use super::Ring::{Channel, Slot};
use crate::Core::message::MessageSet;
use crate::FanIn::Structs::MessageContainer;

impl<S: MessageSet> Channel<S> {
    /// Allocates a channel with room for `capacity` messages.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "channel capacity must be at least 1");

        let slots = (0..capacity)
            .map(|_| Slot::empty())
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Self {
            cursors: ChannelCursors::new(),
            slots,
            capacity,
        }
    }

    /// Number of pending messages.
    ///
    /// A snapshot: the producer may push and the consumer may pop right after
    /// the load. Always in `[0, capacity]`.
    #[inline]
    pub fn size(&self) -> usize {
        self.cursors.count.load(Acquire)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.size() == self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Appends `container`, or hands it back if the channel is full.
    ///
    /// # Safety
    /// Caller must ensure only one thread pushes to this channel.
    #[inline]
    pub unsafe fn try_push_back(
        &self,
        container: MessageContainer<S>,
    ) -> Result<(), MessageContainer<S>> {
        // Acquire pairs with the consumer's Release decrement: once a slot is
        // counted as free, the consumer has finished copying it out.
        if self.cursors.count.load(Acquire) >= self.capacity {
            return Err(container);
        }

        // SAFETY: only the producer touches the write cursor; it stays in
        // [0, capacity) because it is only ever advanced by wrap_index.
        let write = unsafe { *self.cursors.write.get() };
        debug_assert!(write < self.capacity);

        // SAFETY: count < capacity, so the slot at `write` is outside the
        // published range and the consumer will not read it until the
        // increment below.
        unsafe {
            ptr::write(
                self.slots[write].value.get(),
                std::mem::MaybeUninit::new(container),
            );
            *self.cursors.write.get() = wrap_index(write, self.capacity);
        }

        // Publish last
        self.cursors.count.fetch_add(1, Release);
        Ok(())
    }

    /// Appends `container`.
    ///
    /// # Safety
    /// Caller must ensure only one thread pushes to this channel.
    ///
    /// # Panics
    /// Panics if the channel is full. Callers size the capacity so that this
    /// never happens.
    #[inline]
    pub unsafe fn push_back(&self, container: MessageContainer<S>) {
        // SAFETY: forwarded caller contract.
        if unsafe { self.try_push_back(container) }.is_err() {
            full_channel(self.capacity);
        }
    }

    /// Removes and returns the oldest message, or `None` if the channel is empty.
    ///
    /// # Safety
    /// Caller must ensure only one thread pops from this channel.
    #[inline]
    pub unsafe fn try_pop_front(&self) -> Option<MessageContainer<S>> {
        // Acquire pairs with the producer's Release increment, making the
        // slot contents visible.
        if self.cursors.count.load(Acquire) == 0 {
            return None;
        }

        // SAFETY: only the consumer touches the read cursor; it stays in
        // [0, capacity) because it is only ever advanced by wrap_index.
        let read = unsafe { *self.cursors.read.get() };
        debug_assert!(read < self.capacity);

        // SAFETY: count > 0, so the slot at `read` was written by the
        // producer and will not be overwritten until the decrement below.
        let container = unsafe {
            let value = ptr::read(self.slots[read].value.get());
            *self.cursors.read.get() = wrap_index(read, self.capacity);
            value.assume_init()
        };

        // Hand the slot back to the producer
        self.cursors.count.fetch_sub(1, Release);
        Some(container)
    }

    /// Removes and returns the oldest message.
    ///
    /// # Safety
    /// Caller must ensure only one thread pops from this channel.
    ///
    /// # Panics
    /// Panics if the channel is empty. Read [`size`](Self::size) first and pop
    /// at most that many messages.
    #[inline]
    pub unsafe fn pop_front(&self) -> MessageContainer<S> {
        // SAFETY: forwarded caller contract.
        match unsafe { self.try_pop_front() } {
            Some(container) => container,
            None => empty_channel(),
        }
    }
}

#[cold]
#[inline(never)]
fn full_channel(capacity: usize) -> ! {
    log::error!("push to a full channel (capacity {capacity})");
    panic!("push_back on a full channel: size == capacity ({capacity})");
}

#[cold]
#[inline(never)]
fn empty_channel() -> ! {
    log::error!("pop from an empty channel");
    panic!("pop_front on an empty channel: size == 0");
}
