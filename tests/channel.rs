// Single-channel ring tests: FIFO order, occupancy, wraparound and the
// contract violations on full/empty channels.
//
//   cargo test --test channel -- --nocapture

use lwmq::message_set;
use lwmq::FanIn::Ring::Channel;
use lwmq::MessageContainer;
use std::sync::Arc;
use std::thread;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seq {
    pub value: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pair {
    pub left: u32,
    pub right: u8,
}

message_set! {
    pub enum TestMessage: TestKind {
        Seq(Seq),
        Pair(Pair),
    }
}

fn seq(value: u64) -> MessageContainer<TestMessage> {
    MessageContainer::new(Seq { value })
}

fn seq_value(container: MessageContainer<TestMessage>) -> u64 {
    container.get_message::<Seq>().unwrap().value
}

#[test]
fn push_then_pop_single() {
    let channel = Channel::<TestMessage>::new(1);
    assert!(channel.is_empty());

    unsafe { channel.push_back(seq(42)) };
    assert_eq!(channel.size(), 1);
    assert!(channel.is_full());

    let out = unsafe { channel.pop_front() };
    assert_eq!(seq_value(out), 42);
    assert_eq!(channel.size(), 0);
}

#[test]
fn fifo_order_is_kept() {
    let channel = Channel::<TestMessage>::new(8);

    for i in 0..5 {
        unsafe { channel.push_back(seq(i)) };
    }
    assert_eq!(channel.size(), 5);

    for i in 0..5 {
        assert_eq!(seq_value(unsafe { channel.pop_front() }), i);
    }
    assert!(channel.is_empty());
}

#[test]
fn mixed_kinds_keep_their_tags() {
    let channel = Channel::<TestMessage>::new(4);

    unsafe {
        channel.push_back(seq(1));
        channel.push_back(MessageContainer::new(Pair { left: 5, right: 3 }));
    }

    let first = unsafe { channel.pop_front() };
    assert_eq!(first.kind(), TestKind::Seq);

    let second = unsafe { channel.pop_front() };
    assert!(second.is_of_type::<Pair>());
    assert_eq!(second.get_message::<Pair>().unwrap(), &Pair { left: 5, right: 3 });
}

#[test]
fn full_channel_reports_full() {
    let channel = Channel::<TestMessage>::new(2);

    unsafe { channel.push_back(seq(0)) };
    assert!(!channel.is_full());
    unsafe { channel.push_back(seq(1)) };
    assert!(channel.is_full());

    unsafe { channel.pop_front() };
    assert!(!channel.is_full());
}

#[test]
fn try_push_hands_back_on_full() {
    let channel = Channel::<TestMessage>::new(2);

    assert!(unsafe { channel.try_push_back(seq(0)) }.is_ok());
    assert!(unsafe { channel.try_push_back(seq(1)) }.is_ok());

    let rejected = unsafe { channel.try_push_back(seq(2)) }.unwrap_err();
    assert_eq!(seq_value(rejected), 2);
    assert_eq!(channel.size(), 2);

    // Nothing overwritten
    assert_eq!(seq_value(unsafe { channel.pop_front() }), 0);
    assert_eq!(seq_value(unsafe { channel.pop_front() }), 1);
}

#[test]
fn try_pop_on_empty_is_none() {
    let channel = Channel::<TestMessage>::new(3);
    assert!(unsafe { channel.try_pop_front() }.is_none());

    unsafe { channel.push_back(seq(9)) };
    assert_eq!(seq_value(unsafe { channel.try_pop_front() }.unwrap()), 9);
    assert!(unsafe { channel.try_pop_front() }.is_none());
}

#[test]
fn wraparound_with_odd_capacity() {
    let capacity = 3;
    let channel = Channel::<TestMessage>::new(capacity);

    // Cursors wrap many times over
    let mut next_in = 0;
    let mut next_out = 0;
    for round in 0..50 {
        let burst = round % capacity + 1;
        for _ in 0..burst {
            unsafe { channel.push_back(seq(next_in)) };
            next_in += 1;
        }
        assert_eq!(channel.size(), burst);
        for _ in 0..burst {
            assert_eq!(seq_value(unsafe { channel.pop_front() }), next_out);
            next_out += 1;
        }
    }
    assert_eq!(next_in, next_out);
}

#[test]
#[should_panic(expected = "full channel")]
fn push_to_full_panics() {
    let channel = Channel::<TestMessage>::new(1);
    unsafe {
        channel.push_back(seq(0));
        channel.push_back(seq(1));
    }
}

#[test]
#[should_panic(expected = "empty channel")]
fn pop_from_empty_panics() {
    let channel = Channel::<TestMessage>::new(4);
    unsafe { channel.pop_front() };
}

#[test]
#[should_panic(expected = "capacity must be at least 1")]
fn zero_capacity_panics() {
    let _ = Channel::<TestMessage>::new(0);
}

#[test]
fn spsc_across_threads() {
    let capacity = 16;
    let total = 100_000u64;
    let channel = Arc::new(Channel::<TestMessage>::new(capacity));

    let producer = {
        let channel = Arc::clone(&channel);
        thread::spawn(move || {
            for i in 0..total {
                let mut container = seq(i);
                // One producer thread, so the unsafe contract holds
                while let Err(back) = unsafe { channel.try_push_back(container) } {
                    container = back;
                    std::hint::spin_loop();
                }
            }
        })
    };

    let mut expected = 0;
    while expected < total {
        let pending = channel.size();
        assert!(pending <= capacity);
        for _ in 0..pending {
            assert_eq!(seq_value(unsafe { channel.pop_front() }), expected);
            expected += 1;
        }
        if pending == 0 {
            std::hint::spin_loop();
        }
    }

    producer.join().unwrap();
    assert!(channel.is_empty());
}
