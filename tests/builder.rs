use lwmq::{message_set, Error, FanInQueue, QueueBuilder};

#[derive(Clone, Copy, Debug)]
pub struct Note(pub u16);

message_set! {
    pub enum Notes: NoteKind {
        Note(Note),
    }
}

#[test]
fn defaults() {
    let builder = QueueBuilder::default();
    assert_eq!(builder.capacity(), 1024);
    assert_eq!(builder.channels(), 1);
    assert!(builder.validate().is_ok());

    let queue = builder.build::<Notes>().unwrap();
    assert_eq!(queue.capacity(), 1024);
    assert_eq!(queue.channel_count(), 1);
}

#[test]
fn custom_sizes() {
    let queue = QueueBuilder::new()
        .with_capacity(3)
        .with_channels(5)
        .build::<Notes>()
        .unwrap();

    assert_eq!(queue.capacity(), 3);
    assert_eq!(queue.channel_count(), 5);
    for i in 0..5 {
        assert_eq!(queue.pending(i), Some(0));
    }
}

#[test]
fn zero_capacity_is_rejected() {
    let builder = QueueBuilder::new().with_capacity(0);
    assert_eq!(builder.validate(), Err(Error::ZeroCapacity));
    assert_eq!(builder.build::<Notes>().err(), Some(Error::ZeroCapacity));
    assert_eq!(
        FanInQueue::<Notes>::new(0, 4).err(),
        Some(Error::ZeroCapacity)
    );
}

#[test]
fn zero_channels_is_rejected() {
    assert_eq!(
        QueueBuilder::new().with_channels(0).build::<Notes>().err(),
        Some(Error::NoChannels)
    );
    assert_eq!(FanInQueue::<Notes>::new(16, 0).err(), Some(Error::NoChannels));
}

#[test]
fn capacity_checked_before_channels() {
    let builder = QueueBuilder::new().with_capacity(0).with_channels(0);
    assert_eq!(builder.validate(), Err(Error::ZeroCapacity));
}

#[test]
fn capacity_need_not_be_power_of_two() {
    let queue = FanInQueue::<Notes>::new(7, 1).unwrap();
    let input = queue.input_handle(0);
    let output = queue.output_handle(0);

    for round in 0..4u16 {
        for i in 0..7 {
            input.push_message(Note(round * 7 + i));
        }
        assert!(input.is_full());
        for i in 0..7 {
            let note = output.pop_message().get_message::<Note>().unwrap().0;
            assert_eq!(note, round * 7 + i);
        }
    }
}

#[test]
fn debug_output_names_the_queue() {
    let queue = FanInQueue::<Notes>::new(2, 2).unwrap();
    let _input = queue.input_handle(1);
    let text = format!("{:?}", queue);
    assert!(text.contains("FanInQueue"), "{text}");
}
