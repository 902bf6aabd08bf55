//! Message sets and per-type discriminants.
//!
//! A producer pushes plain payload records; the consumer needs to know which
//! record type each popped container holds. Payload types are registered in a
//! closed *message set*: an enum with one variant per payload type, plus a
//! companion kind enum with one value per variant. The kind is the
//! discriminant, and each payload type knows its own kind as a constant, so
//! `push_message(value)` derives the tag from the value's type.
//!
//! Use [`message_set!`](crate::message_set) to declare a set:
//!
//! ```
//! use lwmq::message_set;
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! pub struct Ping {
//!     pub seq: u32,
//! }
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! pub struct Quote {
//!     pub price: f64,
//!     pub size: u32,
//! }
//!
//! message_set! {
//!     pub enum Wire: WireKind {
//!         Ping(Ping),
//!         Quote(Quote),
//!     }
//! }
//!
//! use lwmq::Core::message::{Message, MessageSet};
//!
//! assert_eq!(<Ping as Message<Wire>>::KIND, WireKind::Ping);
//! assert_eq!(Ping { seq: 1 }.into_set().kind(), WireKind::Ping);
//! ```
//!
//! Registering the same payload type twice in one set does not compile
//! (conflicting `Message` impls), so distinct types always map to distinct
//! kinds.

use std::fmt;
use std::hash::Hash;

/// A closed set of payload types that can travel through one fan-in queue.
///
/// Implementations are tagged enums whose variants each wrap one payload
/// type. Values are copied byte-for-byte on push and pop, hence `Copy`.
pub trait MessageSet: Copy + Send + 'static {
    /// Discriminant identifying which payload a value of the set holds.
    type Kind: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static;

    /// Returns the discriminant of the payload currently held.
    fn kind(&self) -> Self::Kind;
}

/// A payload type registered in the message set `S`.
pub trait Message<S: MessageSet>: Copy + Send + 'static {
    /// The discriminant every value of this type is tagged with.
    const KIND: S::Kind;

    /// Wraps the payload into its variant of the set.
    fn into_set(self) -> S;

    /// Borrows the payload back out of the set, if the set holds this type.
    fn from_set(set: &S) -> Option<&Self>;
}

/// Returns the discriminant registered for payload type `T` in set `S`.
#[inline]
pub const fn kind_of<S: MessageSet, T: Message<S>>() -> S::Kind {
    T::KIND
}

/// Declares a message set: the tagged enum, its kind enum, and the
/// [`MessageSet`]/[`Message`] impls tying them together.
///
/// ```
/// use lwmq::message_set;
///
/// #[derive(Clone, Copy, Debug)]
/// pub struct Tick(pub u64);
///
/// message_set! {
///     /// Everything the clock thread sends.
///     pub enum ClockMessage: ClockKind {
///         Tick(Tick),
///     }
/// }
/// ```
///
/// Payload types must be `Copy + Debug + Send + 'static` and must appear at
/// most once per set.
#[macro_export]
macro_rules! message_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:ident {
            $( $variant:ident ( $payload:ty ) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        $vis enum $name {
            $( $variant($payload), )+
        }

        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $kind {
            $( $variant, )+
        }

        impl $crate::Core::message::MessageSet for $name {
            type Kind = $kind;

            #[inline]
            fn kind(&self) -> $kind {
                match self {
                    $( $name::$variant(_) => $kind::$variant, )+
                }
            }
        }

        $(
            impl $crate::Core::message::Message<$name> for $payload {
                const KIND: $kind = $kind::$variant;

                #[inline]
                fn into_set(self) -> $name {
                    $name::$variant(self)
                }

                #[inline]
                fn from_set(set: &$name) -> ::core::option::Option<&Self> {
                    match set {
                        $name::$variant(inner) => ::core::option::Option::Some(inner),
                        #[allow(unreachable_patterns)]
                        _ => ::core::option::Option::None,
                    }
                }
            }
        )+
    };
}
