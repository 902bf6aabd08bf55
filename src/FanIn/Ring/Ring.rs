// One producer's dedicated ring - the fan-in queue owns one per producer

use super::layout::{ChannelCursors, SlotCell};
use crate::Core::message::MessageSet;
use crate::FanIn::Structs::MessageContainer;

use std::mem::MaybeUninit;

/// A single slot in the ring.
///
/// Holds a container only while the slot is inside the published count;
/// otherwise the content is stale or never written.
#[repr(C)]
pub struct Slot<S: MessageSet> {
    pub(crate) value: SlotCell<MaybeUninit<MessageContainer<S>>>,
}

impl<S: MessageSet> Slot<S> {
    pub(crate) const fn empty() -> Self {
        Self {
            value: SlotCell::new(MaybeUninit::uninit()),
        }
    }
}

/// A bounded, wait-free single-producer/single-consumer ring of message
/// containers.
///
/// ### Concurrency Design:
/// - **Producer (push)**: writes the slot at its write cursor, advances the
///   cursor, then publishes with a `Release` increment of `count`.
/// - **Consumer (pop)**: observes `count` with `Acquire`, copies the slot at
///   its read cursor out, advances the cursor, then releases the slot with a
///   `Release` decrement of `count`.
///
/// Only `count` is shared. Neither side loops or compares-and-swaps, so every
/// operation finishes in a fixed number of steps.
pub struct Channel<S: MessageSet> {
    /// Occupancy counter and the two role-owned cursors.
    pub(crate) cursors: ChannelCursors,

    /// Ring storage, allocated once.
    pub(crate) slots: Box<[Slot<S>]>,

    /// Number of slots; `slots.len()`, kept next to the cursors.
    pub(crate) capacity: usize,
}

// SAFETY: the ring only moves `Copy` message sets between threads; slot and
// cursor access follows the single-producer/single-consumer protocol above,
// which the unsafe push/pop contract requires of callers.
unsafe impl<S: MessageSet> Send for Channel<S> {}
unsafe impl<S: MessageSet> Sync for Channel<S> {}
