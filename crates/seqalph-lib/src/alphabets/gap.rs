//! The gap symbol

use crate::alphabet::{Alphabet, Semialphabet};
use std::fmt;

/// Single-value alphabet for alignment gaps (`-`)
///
/// Zero-sized: every write is a no-op and all values compare equal.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gap;

impl Gap {
    /// Character of the gap
    pub const CHAR: u8 = b'-';
}

impl Semialphabet for Gap {
    type Rank = u8;
    const SIZE: usize = 1;

    #[inline]
    fn to_rank(self) -> u8 {
        0
    }

    #[inline]
    fn assign_rank(&mut self, rank: u8) -> &mut Self {
        debug_assert_eq!(rank, 0, "rank {} out of range for gap", rank);
        self
    }

    fn name() -> &'static str {
        "gap"
    }
}

impl Alphabet for Gap {
    #[inline]
    fn to_char(self) -> u8 {
        Self::CHAR
    }

    #[inline]
    fn assign_char(&mut self, _c: u8) -> &mut Self {
        self
    }

    #[inline]
    fn char_is_valid(c: u8) -> bool {
        c == Self::CHAR
    }
}

impl fmt::Debug for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gap(-)")
    }
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_is_degenerate() {
        assert_eq!(std::mem::size_of::<Gap>(), 0);
        assert_eq!(Gap::from_char(b'A').to_char(), b'-');
        assert_eq!(Gap::from_rank(0), Gap);
        assert!(Gap::char_is_valid(b'-'));
        assert!(!Gap::char_is_valid(b'.'));
    }
}
