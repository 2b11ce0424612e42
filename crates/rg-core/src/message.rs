//! The message contract every simulation event satisfies.

use std::any::Any;
use std::fmt;

use crate::{AgentId, MessageId};

/// Downcast support for trait objects.
///
/// Blanket-implemented for every `'static` type, so `Message` and agent
/// implementors never write it by hand.  Call it on the trait object
/// (`message.as_any()` where `message: &dyn Message`), not on a `Box`.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An immutable, addressed unit of information.
///
/// Variants (periodic events, wake-ups, social messages) add payload but never
/// change this contract.  Receivers recover the concrete type with
/// [`downcast_ref`][Message::downcast_ref].
///
/// `Debug` and `Display` are required so the scheduler can log what it moves.
pub trait Message: AsAny + fmt::Debug + fmt::Display + 'static {
    fn id(&self) -> MessageId;

    fn sender(&self) -> AgentId;

    fn destination(&self) -> AgentId;
}

impl dyn Message {
    /// `Some(&T)` if this message is a `T`.
    #[inline]
    pub fn downcast_ref<T: Message>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// `true` if this message is a `T`.
    #[inline]
    pub fn is<T: Message>(&self) -> bool {
        self.as_any().is::<T>()
    }
}
