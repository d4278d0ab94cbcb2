//! Kind descriptors for dynamic values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a [`Value`](crate::Value).
///
/// Used to check that dynamically-typed inputs are homogeneous and to report
/// mismatches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    /// Numeric value.
    Number,
    /// Textual value.
    Text,
    /// Boolean value.
    Bool,
}

impl Kind {
    /// Returns true if this kind can take part in deduplication.
    ///
    /// Only numeric and textual values have a canonical key.
    #[must_use]
    pub const fn is_keyable(self) -> bool {
        matches!(self, Self::Number | Self::Text)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Text => write!(f, "text"),
            Self::Bool => write!(f, "bool"),
        }
    }
}
