use super::FanInQueue;
use crate::Core::error::{Error, Result};
use crate::Core::message::MessageSet;

/// Construction-time configuration of a [`FanInQueue`].
///
/// ```
/// use lwmq::{message_set, QueueBuilder};
///
/// #[derive(Clone, Copy, Debug)]
/// pub struct Sample(pub f32);
///
/// message_set! {
///     pub enum Telemetry: TelemetryKind {
///         Sample(Sample),
///     }
/// }
///
/// let queue = QueueBuilder::new()
///     .with_capacity(4096)
///     .with_channels(8)
///     .build::<Telemetry>()?;
///
/// assert_eq!(queue.channel_count(), 8);
/// assert_eq!(queue.capacity(), 4096);
/// # Ok::<(), lwmq::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct QueueBuilder {
    capacity: usize,
    channels: usize,
}

impl Default for QueueBuilder {
    fn default() -> Self {
        Self {
            capacity: 1024, // pending messages per channel
            channels: 1,    // one producer
        }
    }
}

impl QueueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of pending messages per channel.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Number of channels, i.e. of producer threads.
    pub fn with_channels(mut self, channels: usize) -> Self {
        self.channels = channels;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Checks the configuration without allocating.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        if self.channels == 0 {
            return Err(Error::NoChannels);
        }
        Ok(())
    }

    /// Allocates the queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroCapacity`] or [`Error::NoChannels`] for an empty
    /// configuration.
    pub fn build<S: MessageSet>(self) -> Result<FanInQueue<S>> {
        self.validate()?;
        Ok(FanInQueue::allocate(self.capacity, self.channels))
    }
}
