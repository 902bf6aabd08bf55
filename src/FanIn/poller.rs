//! The consumer's receive loop over all channels.

use super::OutputHandle;
use crate::Core::message::MessageSet;
use crate::FanIn::Structs::MessageContainer;

/// Round-robin reader over a set of output handles.
///
/// Owned by the single consumer thread. Each [`poll`](Self::poll) is one pass
/// over the channels in index order, popping exactly the messages each channel
/// reports at the start of its turn, so a pass always ends even while
/// producers keep pushing.
///
/// ```
/// use lwmq::{message_set, FanInQueue};
///
/// #[derive(Clone, Copy, Debug)]
/// pub struct Fill {
///     pub order_id: u64,
/// }
///
/// message_set! {
///     pub enum Event: EventKind {
///         Fill(Fill),
///     }
/// }
///
/// let queue = FanInQueue::<Event>::new(16, 2)?;
/// let (inputs, mut poller) = queue.split()?;
///
/// inputs[0].push_message(Fill { order_id: 1 });
/// inputs[1].push_message(Fill { order_id: 2 });
///
/// let mut seen = Vec::new();
/// let received = poller.poll(|channel, container| {
///     let fill = container.get_message::<Fill>().unwrap();
///     seen.push((channel, fill.order_id));
/// });
///
/// assert_eq!(received, 2);
/// assert_eq!(seen, vec![(0, 1), (1, 2)]);
/// # Ok::<(), lwmq::Error>(())
/// ```
pub struct Poller<S: MessageSet> {
    outputs: Vec<OutputHandle<S>>,
}

impl<S: MessageSet> Poller<S> {
    pub fn new(outputs: Vec<OutputHandle<S>>) -> Self {
        Self { outputs }
    }

    /// Runs one receive pass over every channel.
    ///
    /// `handler` gets the channel index and each popped container, in FIFO
    /// order per channel. Returns the number of messages received.
    pub fn poll<F>(&mut self, mut handler: F) -> usize
    where
        F: FnMut(usize, MessageContainer<S>),
    {
        let mut total = 0;
        for output in &self.outputs {
            let channel = output.channel_index();
            total += output.drain(|container| handler(channel, container));
        }
        total
    }

    /// Sum of the pending counts of all channels right now.
    pub fn pending(&self) -> usize {
        self.outputs.iter().map(OutputHandle::num_messages).sum()
    }

    pub fn channel_count(&self) -> usize {
        self.outputs.len()
    }

    pub fn outputs(&self) -> &[OutputHandle<S>] {
        &self.outputs
    }

    pub fn into_outputs(self) -> Vec<OutputHandle<S>> {
        self.outputs
    }
}
