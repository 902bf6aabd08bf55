use std::fmt;

use thiserror::Error;

/// Which side of a channel a handle grants access to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HandleRole {
    /// Write side, held by the channel's producer thread.
    Input,
    /// Read side, held by the single consumer thread.
    Output,
}

impl fmt::Display for HandleRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandleRole::Input => f.write_str("input"),
            HandleRole::Output => f.write_str("output"),
        }
    }
}

/// Errors reported by the fan-in queue.
///
/// Overflowing or underflowing a channel is not listed here: the panicking
/// push/pop calls treat it as a broken caller contract, and the `try_*`
/// calls hand the value back instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A channel must hold at least one message.
    #[error("channel capacity must be at least 1")]
    ZeroCapacity,
    /// A fan-in queue must own at least one channel.
    #[error("fan-in queue needs at least one channel")]
    NoChannels,
    /// Requested a handle for a channel the queue does not have.
    #[error("channel index {index} out of range (queue has {channels} channels)")]
    ChannelOutOfRange { index: usize, channels: usize },
    /// The capability for this channel side was handed out before.
    #[error("{role} handle for channel {index} was already issued")]
    AlreadyIssued { role: HandleRole, index: usize },
    /// A container was read as a payload type it does not hold.
    #[error("message kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: String, found: String },
}

pub type Result<T> = std::result::Result<T, Error>;
