// The storage cell that travels through a channel

use crate::Core::error::{Error, Result};
use crate::Core::message::{Message, MessageSet};

/// One message as stored in a channel slot and returned by a pop.
///
/// Holds a value of the message set `S`, i.e. a payload together with the
/// discriminant naming its type. Copying a container copies both.
///
/// Reading is checked: [`get_message`](Self::get_message) compares the stored
/// kind against the requested type and fails with [`Error::KindMismatch`]
/// instead of reinterpreting the payload.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct MessageContainer<S: MessageSet> {
    message: S,
}

impl<S: MessageSet> MessageContainer<S> {
    /// Stores `value`, tagged with `T::KIND`.
    #[inline]
    pub fn new<T: Message<S>>(value: T) -> Self {
        Self {
            message: value.into_set(),
        }
    }

    /// Replaces the held payload with `value`.
    #[inline]
    pub fn set_message<T: Message<S>>(&mut self, value: T) {
        self.message = value.into_set();
    }

    /// Discriminant of the held payload.
    #[inline]
    pub fn kind(&self) -> S::Kind {
        self.message.kind()
    }

    /// Returns true if the held payload is a `T`.
    #[inline]
    pub fn is_of_type<T: Message<S>>(&self) -> bool {
        self.kind() == T::KIND
    }

    /// Borrows the held payload as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if the container holds another type.
    pub fn get_message<T: Message<S>>(&self) -> Result<&T> {
        T::from_set(&self.message).ok_or_else(|| Error::KindMismatch {
            expected: format!("{:?}", T::KIND),
            found: format!("{:?}", self.kind()),
        })
    }

    /// The held value of the message set, for `match`-based dispatch.
    #[inline]
    pub fn message(&self) -> &S {
        &self.message
    }

    #[inline]
    pub fn into_message(self) -> S {
        self.message
    }
}

impl<S: MessageSet> From<S> for MessageContainer<S> {
    fn from(message: S) -> Self {
        Self { message }
    }
}
