// In demos/fanin_demo.rs
//
// Two producer threads each push alternating Message1/Message2 records into
// their own channel; one consumer thread polls every channel and checks the
// payloads.
//
//   RUST_LOG=info cargo run --example fanin_demo [messages_per_thread] [channels]
use lwmq::{message_set, FanInQueue, OutputHandle, Poller};
use std::env;
use std::sync::Arc;
use std::thread;

#[derive(Clone, Copy, Debug)]
pub struct Message1 {
    pub value: u32,
    pub another_value: u32,
}

#[derive(Clone, Copy, Debug)]
pub struct Message2 {
    pub value: u32,
    pub another_value: u32,
    pub more_values: [u8; 2],
}

message_set! {
    pub enum DemoMessage: DemoKind {
        Message1(Message1),
        Message2(Message2),
    }
}

fn verify(channel: usize, message: DemoMessage) {
    match message {
        DemoMessage::Message1(m) => {
            assert_eq!(m.value, 17);
            assert_eq!(m.another_value, 4711);
        }
        DemoMessage::Message2(m) => {
            let c = channel as u32;
            assert_eq!(m.value, c);
            assert_eq!(m.another_value, c);
            assert_eq!(m.more_values, [c as u8; 2]);
        }
    }
}

fn main() -> lwmq::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let pairs: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(1000);
    let channels: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(2);

    // Sized so a producer can never overrun its channel, even if the consumer
    // has not started yet
    let queue = Arc::new(FanInQueue::<DemoMessage>::new(pairs * 2, channels)?);
    log::info!("Demo: {channels} producers x {} messages", pairs * 2);

    // The consumer issues its own output handles
    let consumer_queue = Arc::clone(&queue);
    let consumer = thread::spawn(move || {
        let outputs: Vec<OutputHandle<DemoMessage>> = (0..consumer_queue.channel_count())
            .map(|i| consumer_queue.output_handle(i))
            .collect();
        let mut poller = Poller::new(outputs);

        let wanted = pairs * 2 * channels;
        let mut received = 0;
        while received < wanted {
            received += poller.poll(|channel, container| verify(channel, container.into_message()));
        }
        log::info!("Output thread done, received {received} messages");
        received
    });

    let producers: Vec<_> = (0..channels)
        .map(|channel| {
            let input = queue.input_handle(channel);
            thread::spawn(move || {
                let c = channel as u32;
                for _ in 0..pairs {
                    debug_assert!(!input.is_full());
                    input.push_message(Message1 {
                        value: 17,
                        another_value: 4711,
                    });
                    debug_assert!(!input.is_full());
                    input.push_message(Message2 {
                        value: c,
                        another_value: c,
                        more_values: [c as u8; 2],
                    });
                }
                log::info!("Input thread {channel} done, sent {} messages", pairs * 2);
            })
        })
        .collect();

    for producer in producers {
        producer.join().expect("producer thread panicked");
    }
    let received = consumer.join().expect("consumer thread panicked");

    println!("Received {received} messages from {channels} channels");
    println!("{:?}", queue);
    Ok(())
}
