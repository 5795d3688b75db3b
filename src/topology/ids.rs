//! `NodeId` and `ElementId`: strong, zero-cost handles for mesh entities
//!
//! Nodes and elements are both addressed by plain integers in mesh input
//! files. Wrapping them in distinct newtypes keeps a node id from being
//! looked up in an element table (and vice versa) at compile time.
//!
//! Both types are `repr(transparent)` over `i64`, serialize as the bare
//! integer, and print as the raw integer via `Display`.

use std::fmt;

macro_rules! mesh_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates a new id from its raw integer value.
            #[inline]
            pub const fn new(raw: i64) -> Self {
                $name(raw)
            }

            /// Returns the raw integer value.
            #[inline]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(raw: i64) -> Self {
                $name(raw)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

mesh_id!(
    /// Identifier of a mesh node (vertex).
    NodeId
);

mesh_id!(
    /// Identifier of a mesh element (cell).
    ElementId
);
