//! Internal channel identifiers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest internal ID a registry hands out.
///
/// Internal IDs cross-reference channels in serialized output through a
/// 64-bit field. The format caps that field at `2^63`, so the ID space is
/// `1..=2^63` rather than the full unsigned range.
pub const MAX_INTERNAL_ID: u64 = 1 << 63;

/// Identifier assigned to a channel when it is registered.
///
/// IDs are in `1..=MAX_INTERNAL_ID`, assigned in increasing order and never
/// reused within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct InternalId(u64);

impl InternalId {
    /// The first ID a registry assigns.
    pub const FIRST: Self = Self(1);

    /// The last ID a registry can assign.
    pub const MAX: Self = Self(MAX_INTERNAL_ID);

    /// Wrap a raw value, returning `None` outside `1..=MAX_INTERNAL_ID`.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_info::InternalId;
    ///
    /// assert!(InternalId::new(0).is_none());
    /// assert_eq!(InternalId::new(7).map(InternalId::get), Some(7));
    /// ```
    #[must_use]
    pub const fn new(raw: u64) -> Option<Self> {
        if raw == 0 || raw > MAX_INTERNAL_ID {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// The raw value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether this is the last ID of the space.
    #[must_use]
    pub const fn is_max(self) -> bool {
        self.0 == MAX_INTERNAL_ID
    }

    /// The following ID, or `None` once the space is exhausted.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }
}

impl fmt::Display for InternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
