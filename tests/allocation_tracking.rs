// Allocation tracking for queue setup and threaded traffic
//
// The zero-allocation check of the push/pop path lives in tests/zero_alloc.rs,
// outside the test harness.
//
// Note: every test here is marked with #[serial_test::serial] because dhat
// only allows one profiler to run at a time, and the global allocator counts
// allocations from all threads while a profiler is live.
//
// # Run all allocation tracking tests
// cargo test --test allocation_tracking -- --nocapture

use lwmq::{message_set, FanInQueue};
use std::thread;

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[derive(Clone, Copy, Debug)]
pub struct Tick {
    pub seq: u64,
}

#[derive(Clone, Copy, Debug)]
pub struct Frame {
    pub bytes: [u8; 48],
}

message_set! {
    pub enum Traffic: TrafficKind {
        Tick(Tick),
        Frame(Frame),
    }
}

#[test]
#[serial_test::serial]
fn setup_allocates_once_per_queue() {
    let _profiler = dhat::Profiler::builder().testing().build();

    let capacity = 256;
    let channels = 4;
    let queue = FanInQueue::<Traffic>::new(capacity, channels).unwrap();

    let stats = dhat::HeapStats::get();
    println!(
        "Queue {channels}x{capacity}: {} blocks, {} bytes",
        stats.total_blocks, stats.total_bytes
    );

    // At least every slot of every channel is backed by the heap
    let slot = std::mem::size_of::<lwmq::FanIn::Ring::Slot<Traffic>>();
    assert!(stats.total_bytes as usize >= capacity * channels * slot);
    drop(queue);
}

#[test]
#[serial_test::serial]
fn threaded_traffic_with_memory_stats() {
    println!("\n--- Running fan-in traffic with memory-stats ---");
    use memory_stats::memory_stats;

    let producers = 4;
    let per_producer = 20_000u64;
    let queue = FanInQueue::<Traffic>::new(4096, producers).unwrap();
    let (inputs, mut poller) = queue.split().unwrap();

    let before = memory_stats();
    println!("Memory before: {:?}", before);

    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| {
            thread::spawn(move || {
                for seq in 0..per_producer {
                    let mut tick = Tick { seq };
                    while let Err(back) = input.try_push_message(tick) {
                        tick = back;
                        std::hint::spin_loop();
                    }
                }
            })
        })
        .collect();

    let mut received = 0;
    while received < producers as u64 * per_producer {
        received += poller.poll(|_, _| {}) as u64;
    }
    for h in handles {
        h.join().unwrap();
    }

    let after = memory_stats();
    println!("Memory after: {:?}", after);

    if let (Some(b), Some(a)) = (before, after) {
        let delta = a.physical_mem as i64 - b.physical_mem as i64;
        println!("Memory delta: {} bytes ({:.2} KB)", delta, delta as f64 / 1024.0);
        println!("  Includes OS-level memory (thread stacks, scheduling)");
    }

    assert_eq!(received, producers as u64 * per_producer);
}
