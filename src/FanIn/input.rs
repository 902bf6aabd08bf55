// In src/FanIn/input.rs
use crate::Core::message::{Message, MessageSet};
use crate::FanIn::Ring::Channel;
use crate::FanIn::Structs::MessageContainer;
use std::cell::Cell;
use std::marker::PhantomData;
use std::sync::Arc;

/// Marker type to opt out of `Sync` while remaining `Send`.
pub(crate) type PhantomUnsync = PhantomData<Cell<&'static ()>>;

/// Write side of one channel, held by that channel's producer thread.
///
/// The fan-in queue issues exactly one input handle per channel.
///
/// # Thread Safety
///
/// `InputHandle` is [`Send`] but **not** [`Sync`] and not `Clone`:
/// - Can be moved into the producer thread (e.g. as its start argument)
/// - Cannot be shared, so no two threads ever push to the same channel
pub struct InputHandle<S: MessageSet> {
    channels: Arc<[Channel<S>]>,
    index: usize,
    _unsync: PhantomUnsync,
}

impl<S: MessageSet> InputHandle<S> {
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

    /// Returns true if no more messages fit until the consumer pops.
    ///
    /// Meant as a debugging aid; the capacity should be sized so a producer
    /// never sees a full channel.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.channel().is_full()
    }

    /// Pushes `message`, tagged with the kind registered for `T`.
    ///
    /// # Panics
    /// Panics if the channel is full.
    #[inline]
    pub fn push_message<T: Message<S>>(&self, message: T) {
        // SAFETY: this handle is the channel's only input capability and is
        // not Sync, so pushes come from one thread.
        unsafe { self.channel().push_back(MessageContainer::new(message)) }
    }

    /// Pushes `message` unless the channel is full.
    ///
    /// # Errors
    ///
    /// Returns `Err(message)` if the channel is full, allowing retry.
    #[inline]
    pub fn try_push_message<T: Message<S>>(&self, message: T) -> Result<(), T> {
        // SAFETY: see push_message.
        unsafe { self.channel().try_push_back(MessageContainer::new(message)) }
            .map_err(|_| message)
    }

    /// Index of the channel this handle writes to.
    pub fn channel_index(&self) -> usize {
        self.index
    }

    /// Maximum number of pending messages in the channel.
    pub fn capacity(&self) -> usize {
        self.channel().capacity()
    }
}
