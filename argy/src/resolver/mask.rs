//! Presence masks over slot positions.

use std::fmt;

/// Bitmask over stack positions; bit `i` set means slot `i` is treated as
/// present in a candidate alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PresenceMask(u32);

impl PresenceMask {
    /// No slot present.
    pub const EMPTY: Self = Self(0);

    /// Most slots a stack may declare.
    ///
    /// Resolution enumerates `2^N` candidates, so the usable limit is far
    /// lower in practice; see `ResolverConfig::max_slots`.
    pub const MAX_SLOTS: usize = 31;

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// This mask with `position` marked present.
    pub fn with(self, position: usize) -> Self {
        debug_assert!(position < Self::MAX_SLOTS);
        Self(self.0 | (1 << position))
    }

    pub fn is_present(self, position: usize) -> bool {
        position < Self::MAX_SLOTS && self.0 & (1 << position) != 0
    }

    /// True if every position present in `other` is present here.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Number of present positions.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Every mask over `len` positions, in ascending order.
    pub fn all(len: usize) -> impl Iterator<Item = PresenceMask> {
        debug_assert!(len <= Self::MAX_SLOTS);
        (0..(1u64 << len)).map(|bits| PresenceMask(bits as u32))
    }
}

impl fmt::Display for PresenceMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}
