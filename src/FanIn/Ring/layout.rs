use crossbeam_utils::CachePadded;
use std::cell::UnsafeCell;
use std::marker::PhantomData;
use std::sync::atomic::AtomicUsize;

/// Role marker: state written only by the channel's producer.
pub struct ProducerRole;

/// Role marker: state written only by the consumer.
pub struct ConsumerRole;

/// Role marker: slot storage whose ownership moves between the two via the
/// occupancy counter.
pub struct SlotRole;

/// Interior-mutable cell tagged with the role that owns it.
///
/// The role has no runtime effect; it keeps producer cursors, consumer cursors
/// and slots apart as distinct types.
#[repr(transparent)]
pub struct RoleCell<T, Role>(UnsafeCell<T>, PhantomData<Role>);

impl<T, Role> RoleCell<T, Role> {
    pub const fn new(value: T) -> Self {
        Self(UnsafeCell::new(value), PhantomData)
    }

    #[inline]
    pub const fn get(&self) -> *mut T {
        self.0.get()
    }
}

// SAFETY: each cell is touched by one side at a time. Cursor cells belong to
// one thread for the channel's lifetime; a slot is written by the producer
// only while it is outside the published count and read by the consumer only
// while inside it, and the count is updated with Release and read with Acquire.
unsafe impl<T: Send, Role> Sync for RoleCell<T, Role> {}
unsafe impl<T: Send, Role> Send for RoleCell<T, Role> {}

/// Next write position, owned by the producer.
pub type WriteCursor = RoleCell<usize, ProducerRole>;

/// Next read position, owned by the consumer.
pub type ReadCursor = RoleCell<usize, ConsumerRole>;

/// Storage cell of one ring slot.
pub type SlotCell<T> = RoleCell<T, SlotRole>;

/// Cursor block of one channel.
///
/// `count` is the only field shared between threads. Each field sits on its
/// own cache line so producer pushes do not invalidate the consumer's cursor
/// and vice versa.
#[repr(C)]
pub struct ChannelCursors {
    /// Number of written, not yet popped slots. In `[0, capacity]`.
    pub(crate) count: CachePadded<AtomicUsize>,

    /// Slot index the next push writes to. In `[0, capacity)`.
    pub(crate) write: CachePadded<WriteCursor>,

    /// Slot index the next pop reads from. In `[0, capacity)`.
    pub(crate) read: CachePadded<ReadCursor>,
}

impl ChannelCursors {
    pub fn new() -> Self {
        Self {
            count: CachePadded::new(AtomicUsize::new(0)),
            write: CachePadded::new(WriteCursor::new(0)),
            read: CachePadded::new(ReadCursor::new(0)),
        }
    }
}

impl Default for ChannelCursors {
    fn default() -> Self {
        Self::new()
    }
}

/// Advances a slot index by one, wrapping to 0 at `capacity`.
///
/// Same result as `(index + 1) % capacity` for any `index < capacity`, and as
/// `(index + 1) & (capacity - 1)` when `capacity` is a power of two, without
/// a division.
#[inline]
pub const fn wrap_index(index: usize, capacity: usize) -> usize {
    let next = index + 1;
    if next == capacity {
        0
    } else {
        next
    }
}
