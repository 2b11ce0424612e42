//! Strongly typed identifier wrappers over 128-bit UUIDs.
//!
//! Every agent, message and message specification carries one of these.
//! Fresh ids are random v4 tokens; equality is by value.  `Ord` is derived so
//! ids can key ordered containers (the social graph needs it), but the
//! ordering carries no meaning.

use std::fmt;

use rand::RngCore;
use uuid::Uuid;

/// Generate a typed ID wrapper around a `Uuid`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub Uuid);

        impl $name {
            /// Sentinel meaning "no valid ID" — the nil UUID.
            pub const NIL: $name = $name(Uuid::nil());

            /// A fresh random (v4) identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// A v4-shaped identifier drawn from `rng`.
            ///
            /// Seeded generators give reproducible ids across runs.
            pub fn from_rng<R: RngCore + ?Sized>(rng: &mut R) -> Self {
                let mut bytes = [0u8; 16];
                rng.fill_bytes(&mut bytes);
                Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
            }

            #[inline]
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            #[inline]
            pub fn as_uuid(self) -> Uuid {
                self.0
            }

            #[inline]
            pub fn is_nil(self) -> bool {
                self.0.is_nil()
            }
        }

        impl Default for $name {
            /// Returns the `NIL` sentinel so uninitialized IDs are visibly invalid.
            #[inline]
            fn default() -> Self {
                Self::NIL
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<Uuid> for $name {
            #[inline]
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

typed_id! {
    /// Identity of a registered agent; also the address messages are sent to.
    pub struct AgentId;
}

typed_id! {
    /// Identity of a single concrete message.
    pub struct MessageId;
}

typed_id! {
    /// Identity of an unscheduled message specification.
    pub struct SpecId;
}

/// Anything that can be addressed by an [`AgentId`].
///
/// Agents implement this; message specifications accept any `Addressable`
/// slice so callers can pass agents directly instead of collecting their ids.
pub trait Addressable {
    fn id(&self) -> AgentId;
}

impl Addressable for AgentId {
    #[inline]
    fn id(&self) -> AgentId {
        *self
    }
}

impl<T: Addressable + ?Sized> Addressable for &T {
    #[inline]
    fn id(&self) -> AgentId {
        (**self).id()
    }
}
