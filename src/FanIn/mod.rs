mod builder;
mod debug;
mod input;
mod output;
mod poller;
mod queue;

pub use builder::QueueBuilder;
pub use input::InputHandle;
pub use output::OutputHandle;
pub use poller::Poller;
pub use queue::FanInQueue;

pub mod Ring {
    pub mod Ring;
    pub mod Ring_impl;
    pub mod layout;
    pub use Ring::{Channel, Slot}; // re-export for stable path
}

pub mod Structs {
    pub mod Message_Structs;
    pub use Message_Structs::MessageContainer; // re-export for stable path
}
