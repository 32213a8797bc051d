//! Typed index wrappers.
//!
//! Node identity in the planner is arena identity: two nodes are the same
//! node only if they share a `NodeId`, even when their coordinates coincide
//! (a survey point placed exactly on a zone corner is still two nodes).

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a routable node (launch point, survey, or zone vertex) in a
    /// `SurveyMap` arena.
    pub struct NodeId(u32);
}

typed_id! {
    /// Index of an exclusion zone.
    pub struct ZoneId(u32);
}

typed_id! {
    /// Index of a survey point in the caller's survey list.
    pub struct SurveyId(u32);
}
