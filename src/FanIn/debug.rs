use super::Ring::Channel;
use super::Structs::MessageContainer;
use super::{FanInQueue, InputHandle, OutputHandle, Poller};
use crate::Core::message::MessageSet;
use std::fmt;

// Debug proxy implementations that call the standalone debug functions
impl<S: MessageSet> fmt::Debug for FanInQueue<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_fanin_queue(self, f)
    }
}

impl<S: MessageSet> fmt::Debug for Channel<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_channel(self, f)
    }
}

impl<S: MessageSet> fmt::Debug for InputHandle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_input_handle(self, f)
    }
}

impl<S: MessageSet> fmt::Debug for OutputHandle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_output_handle(self, f)
    }
}

impl<S: MessageSet> fmt::Debug for Poller<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_poller(self, f)
    }
}

impl<S: MessageSet + fmt::Debug> fmt::Debug for MessageContainer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_message_container(self, f)
    }
}
