//! Binary mask annotation

use crate::alphabet::Semialphabet;
use std::fmt;

/// Whether a position is masked (e.g. soft-masked repeats)
///
/// A semialphabet: it has no character form of its own and is meant to be
/// combined with a letter alphabet, see [`crate::composite::Masked`].
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mask {
    rank: u8,
}

impl Mask {
    /// Not masked
    pub const UNMASKED: Self = Self { rank: 0 };
    /// Masked
    pub const MASKED: Self = Self { rank: 1 };

    /// Whether this value is [`Mask::MASKED`]
    #[inline]
    pub fn is_masked(self) -> bool {
        self.rank == 1
    }
}

impl From<bool> for Mask {
    fn from(masked: bool) -> Self {
        Self { rank: masked as u8 }
    }
}

impl Semialphabet for Mask {
    type Rank = u8;
    const SIZE: usize = 2;

    #[inline]
    fn to_rank(self) -> u8 {
        self.rank
    }

    #[inline]
    fn assign_rank(&mut self, rank: u8) -> &mut Self {
        debug_assert!(rank < 2, "rank {} out of range for mask", rank);
        self.rank = rank;
        self
    }

    fn name() -> &'static str {
        "mask"
    }
}

impl fmt::Debug for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_masked() {
            write!(f, "MASKED")
        } else {
            write!(f, "UNMASKED")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert!(!Mask::default().is_masked());
        assert!(Mask::from(true).is_masked());
        assert_eq!(Mask::from_rank(1), Mask::MASKED);
        assert!(Mask::UNMASKED < Mask::MASKED);
    }
}
