//! Lightweight wait-free fan-in message queue.
//!
//! Many producer threads each push small `Copy` records into their own
//! bounded channel; a single consumer thread polls all channels. No locks and
//! no retry loops on the message path: each channel is a single-producer /
//! single-consumer ring whose only shared state is an atomic occupancy count.
//!
//! ```
//! use lwmq::{message_set, FanInQueue};
//! use std::thread;
//!
//! #[derive(Clone, Copy, Debug)]
//! pub struct Reading {
//!     pub sensor: u32,
//!     pub value: f32,
//! }
//!
//! #[derive(Clone, Copy, Debug)]
//! pub struct Fault {
//!     pub sensor: u32,
//! }
//!
//! message_set! {
//!     pub enum SensorMessage: SensorKind {
//!         Reading(Reading),
//!         Fault(Fault),
//!     }
//! }
//!
//! let queue = FanInQueue::<SensorMessage>::new(64, 2)?;
//!
//! let producers: Vec<_> = (0..2)
//!     .map(|sensor| {
//!         let input = queue.input_handle(sensor);
//!         thread::spawn(move || {
//!             input.push_message(Reading { sensor: sensor as u32, value: 1.5 });
//!             input.push_message(Fault { sensor: sensor as u32 });
//!         })
//!     })
//!     .collect();
//! for producer in producers {
//!     producer.join().unwrap();
//! }
//!
//! let outputs: Vec<_> = (0..2).map(|i| queue.output_handle(i)).collect();
//! let mut faults = 0;
//! for output in &outputs {
//!     for _ in 0..output.num_messages() {
//!         match output.pop_message().into_message() {
//!             SensorMessage::Reading(reading) => assert_eq!(reading.value, 1.5),
//!             SensorMessage::Fault(_) => faults += 1,
//!         }
//!     }
//! }
//! assert_eq!(faults, 2);
//! # Ok::<(), lwmq::Error>(())
//! ```

// Module naming follows project convention
#[allow(non_snake_case)]
pub mod Core;
#[allow(non_snake_case)]
pub mod FanIn;
#[allow(non_snake_case)]
mod Debug;

pub use Core::error::{Error, HandleRole, Result};
pub use Core::message::{Message, MessageSet};
pub use FanIn::Structs::MessageContainer;
pub use FanIn::{FanInQueue, InputHandle, OutputHandle, Poller, QueueBuilder};
