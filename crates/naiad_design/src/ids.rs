//! Opaque ID newtypes for design entities.
//!
//! [`ModuleId`], [`ChannelId`], [`PinId`], and [`ExclusionId`] are thin `u32`
//! wrappers used as arena indices into the [`Input`](crate::Input) entity
//! vectors. Ids are assigned from vector position at encode time — there are
//! no global counters and no renumbering — and variable names embed them, so
//! repeated encodes of the same input are reproducible.

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            /// Creates an ID from a raw `u32` index.
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// Returns the raw `u32` index.
            pub fn as_raw(self) -> u32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Opaque, copyable ID for a module.
    ModuleId
);

define_id!(
    /// Opaque, copyable ID for a channel.
    ChannelId
);

define_id!(
    /// Opaque, copyable ID for a pin.
    PinId
);

define_id!(
    /// Opaque, copyable ID for a routing exclusion.
    ExclusionId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn id_roundtrip() {
        let id = ModuleId::from_raw(42);
        assert_eq!(id.as_raw(), 42);
    }

    #[test]
    fn id_equality() {
        assert_eq!(ChannelId::from_raw(3), ChannelId::from_raw(3));
        assert_ne!(ChannelId::from_raw(3), ChannelId::from_raw(4));
    }

    #[test]
    fn id_hash_in_set() {
        let mut set = HashSet::new();
        set.insert(PinId::from_raw(1));
        set.insert(PinId::from_raw(2));
        set.insert(PinId::from_raw(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn id_display() {
        assert_eq!(format!("{}", ExclusionId::from_raw(7)), "7");
    }
}
