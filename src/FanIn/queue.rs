use super::{InputHandle, OutputHandle, Poller, QueueBuilder};
use crate::Core::error::{Error, HandleRole, Result};
use crate::Core::ledger::IssueLedger;
use crate::Core::message::MessageSet;
use crate::FanIn::Ring::Channel;
use std::sync::Arc;

// Handle issuance happens at setup, never on the message path
use parking_lot::Mutex;

/// Many-to-one message queue: one bounded channel per producer thread, all
/// drained by a single consumer thread.
///
/// # Architecture
///
/// ```text
/// Producer 0 ── InputHandle(0) ──► [Channel 0] ──► OutputHandle(0) ──┐
/// Producer 1 ── InputHandle(1) ──► [Channel 1] ──► OutputHandle(1) ──┼──► Consumer
///    ...                              ...               ...          │
/// Producer N ── InputHandle(N) ──► [Channel N] ──► OutputHandle(N) ──┘
/// ```
///
/// Each channel keeps FIFO order for its producer; there is no order across
/// channels. Pushes and pops never block or retry.
///
/// Every input and output capability is issued once for the queue's lifetime.
/// The handles share the channel storage, so the queue itself may be moved or
/// dropped while they are in use.
pub struct FanInQueue<S: MessageSet> {
    channels: Arc<[Channel<S>]>,
    capacity: usize,
    ledger: Mutex<IssueLedger>,
}

impl<S: MessageSet> FanInQueue<S> {
    /// Creates a queue with `channels` channels of `capacity` messages each.
    ///
    /// Shorthand for [`QueueBuilder`].
    pub fn new(capacity: usize, channels: usize) -> Result<Self> {
        QueueBuilder::new()
            .with_capacity(capacity)
            .with_channels(channels)
            .build()
    }

    /// Allocates all channels contiguously. The builder validated the sizes.
    pub(crate) fn allocate(capacity: usize, channels: usize) -> Self {
        let table: Vec<Channel<S>> = (0..channels).map(|_| Channel::new(capacity)).collect();

        log::debug!(
            "fan-in queue allocated: {channels} channels x {capacity} slots ({} bytes per slot)",
            std::mem::size_of::<super::Ring::Slot<S>>()
        );

        Self {
            channels: table.into(),
            capacity,
            ledger: Mutex::new(IssueLedger::new(channels)),
        }
    }

    /// Issues the input handle for channel `index`.
    ///
    /// # Errors
    ///
    /// - [`Error::ChannelOutOfRange`] if `index >= channel_count()`
    /// - [`Error::AlreadyIssued`] if this input handle was issued before
    ///
    /// [`Error::ChannelOutOfRange`]: crate::Error::ChannelOutOfRange
    /// [`Error::AlreadyIssued`]: crate::Error::AlreadyIssued
    pub fn try_input_handle(&self, index: usize) -> Result<InputHandle<S>> {
        self.claim(HandleRole::Input, index)?;
        Ok(InputHandle::new(Arc::clone(&self.channels), index))
    }

    /// Issues the output handle for channel `index`.
    ///
    /// # Errors
    ///
    /// Same as [`try_input_handle`](Self::try_input_handle).
    pub fn try_output_handle(&self, index: usize) -> Result<OutputHandle<S>> {
        self.claim(HandleRole::Output, index)?;
        Ok(OutputHandle::new(Arc::clone(&self.channels), index))
    }

    /// Issues the input handle for channel `index`, to be moved into that
    /// channel's producer thread before it starts.
    ///
    /// # Panics
    /// Panics if `index` is out of range or the handle was issued before.
    #[track_caller]
    pub fn input_handle(&self, index: usize) -> InputHandle<S> {
        match self.try_input_handle(index) {
            Ok(handle) => handle,
            Err(e) => {
                log::error!("input_handle({index}): {e}");
                panic!("input_handle({index}): {e}");
            }
        }
    }

    /// Issues the output handle for channel `index`, for the consumer thread.
    ///
    /// # Panics
    /// Panics if `index` is out of range or the handle was issued before.
    #[track_caller]
    pub fn output_handle(&self, index: usize) -> OutputHandle<S> {
        match self.try_output_handle(index) {
            Ok(handle) => handle,
            Err(e) => {
                log::error!("output_handle({index}): {e}");
                panic!("output_handle({index}): {e}");
            }
        }
    }

    /// Issues every input handle, in channel order, and a [`Poller`] owning
    /// every output handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyIssued`](crate::Error::AlreadyIssued) if any
    /// handle was issued before; nothing is issued in that case.
    pub fn split(&self) -> Result<(Vec<InputHandle<S>>, Poller<S>)> {
        let mut ledger = self.ledger.lock();

        // Check everything first so a failure leaves the ledger untouched
        for role in [HandleRole::Input, HandleRole::Output] {
            if let Some(index) = (0..self.channel_count()).find(|&i| ledger.is_issued(role, i)) {
                let err = Error::AlreadyIssued { role, index };
                log::warn!("split refused: {err}");
                return Err(err);
            }
        }

        let mut inputs = Vec::with_capacity(self.channel_count());
        let mut outputs = Vec::with_capacity(self.channel_count());
        for index in 0..self.channel_count() {
            ledger.claim(HandleRole::Input, index)?;
            ledger.claim(HandleRole::Output, index)?;
            inputs.push(InputHandle::new(Arc::clone(&self.channels), index));
            outputs.push(OutputHandle::new(Arc::clone(&self.channels), index));
        }

        log::debug!("issued all handles for {} channels", self.channel_count());
        Ok((inputs, Poller::new(outputs)))
    }

    fn claim(&self, role: HandleRole, index: usize) -> Result<()> {
        match self.ledger.lock().claim(role, index) {
            Ok(()) => {
                log::debug!("issued {role} handle for channel {index}");
                Ok(())
            }
            Err(e) => {
                log::warn!("refused {role} handle for channel {index}: {e}");
                Err(e)
            }
        }
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Maximum number of pending messages per channel.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pending messages in channel `index`, or `None` if out of range.
    ///
    /// A diagnostic snapshot; pushing and popping go through the handles.
    pub fn pending(&self, index: usize) -> Option<usize> {
        self.channels.get(index).map(Channel::size)
    }

    /// Returns true if the `role` handle of channel `index` has been issued.
    pub fn is_issued(&self, role: HandleRole, index: usize) -> bool {
        self.ledger.lock().is_issued(role, index)
    }
}
