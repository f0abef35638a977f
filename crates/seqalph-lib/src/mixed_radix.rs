//! Mixed-radix arithmetic for composite alphabets
//!
//! A composite of N components with sizes `s[0..N]` is a number in a positional
//! system where digit `i` has base `s[i]`. Component 0 is the least significant
//! digit:
//!
//! ```text
//! cum[0] = 1
//! cum[i] = cum[i-1] * s[i-1]
//! rank   = sum(digit[i] * cum[i])
//! digit[i] = (rank / cum[i]) % s[i]
//! ```
//!
//! The `const fn` helpers are used by the statically typed composites, so all
//! cumulative factors and sizes are computed at compile time. [`MixedRadix`] is the
//! runtime counterpart for layouts chosen at runtime.

use crate::error::AlphabetError;
use crate::rank::RankType;

/// Compute the cumulative factor (positional weight) of each component
pub const fn cumulative_factors<const N: usize>(sizes: [usize; N]) -> [usize; N] {
    let mut cumulative = [1usize; N];
    let mut i = 1;
    while i < N {
        cumulative[i] = match cumulative[i - 1].checked_mul(sizes[i - 1]) {
            Some(v) => v,
            None => panic!("composite alphabet size overflows usize"),
        };
        i += 1;
    }
    cumulative
}

/// Compute the combined size (product of all component sizes)
///
/// Panics on overflow or on an empty component; in const context this is a
/// compile error.
pub const fn combined_size<const N: usize>(sizes: [usize; N]) -> usize {
    let mut size = 1usize;
    let mut i = 0;
    while i < N {
        if sizes[i] == 0 {
            panic!("composite component has size 0");
        }
        size = match size.checked_mul(sizes[i]) {
            Some(v) => v,
            None => panic!("composite alphabet size overflows usize"),
        };
        i += 1;
    }
    size
}

/// Pack per-component ranks into a composite rank
#[inline]
pub const fn pack<const N: usize>(ranks: &[usize; N], cumulative: &[usize; N]) -> usize {
    let mut rank = 0;
    let mut i = 0;
    while i < N {
        rank += ranks[i] * cumulative[i];
        i += 1;
    }
    rank
}

/// Extract the rank of one component
#[inline]
pub const fn digit(rank: usize, cumulative: usize, size: usize) -> usize {
    (rank / cumulative) % size
}

/// Replace one component's contribution without touching the others
#[inline]
pub const fn replace_digit(rank: usize, old_digit: usize, new_digit: usize, cumulative: usize) -> usize {
    rank - old_digit * cumulative + new_digit * cumulative
}

/// Decode a composite rank into all component ranks
#[inline]
pub const fn unpack<const N: usize>(rank: usize, sizes: &[usize; N], cumulative: &[usize; N]) -> [usize; N] {
    let mut ranks = [0usize; N];
    let mut i = 0;
    while i < N {
        ranks[i] = digit(rank, cumulative[i], sizes[i]);
        i += 1;
    }
    ranks
}

/// Runtime mixed-radix layout
///
/// Validated at construction: no component may be empty and the combined size
/// must not exceed `max_rank + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedRadix {
    sizes: Vec<usize>,
    cumulative: Vec<u64>,
    size: u64,
    max_rank: u64,
}

impl MixedRadix {
    /// Create a layout whose ranks must not exceed `max_rank`
    ///
    /// # Errors
    /// Returns an error if a component has size 0 or the combined size overflows.
    pub fn new(sizes: &[usize], max_rank: u64) -> Result<Self, AlphabetError> {
        let overflow = || AlphabetError::CompositeOverflow {
            sizes: sizes.to_vec(),
            max_rank,
        };

        let mut cumulative = Vec::with_capacity(sizes.len());
        let mut size: u64 = 1;
        for (index, &s) in sizes.iter().enumerate() {
            if s == 0 {
                return Err(AlphabetError::EmptyComponent { index });
            }
            cumulative.push(size);
            size = size.checked_mul(s as u64).ok_or_else(overflow)?;
        }

        if size - 1 > max_rank {
            return Err(overflow());
        }

        Ok(Self {
            sizes: sizes.to_vec(),
            cumulative,
            size,
            max_rank,
        })
    }

    /// Create a layout whose ranks must fit the storage type `R`
    pub fn for_rank<R: RankType>(sizes: &[usize]) -> Result<Self, AlphabetError> {
        Self::new(sizes, R::MAX_VALUE)
    }

    /// Number of components
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// True if the layout has no components (a single-valued, empty product)
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Combined size (number of composite ranks)
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Largest rank the layout was validated against
    pub fn max_rank(&self) -> u64 {
        self.max_rank
    }

    /// Component sizes
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Cumulative factor of each component
    pub fn cumulative_factors(&self) -> &[u64] {
        &self.cumulative
    }

    /// Pack component ranks into a composite rank
    pub fn pack(&self, ranks: &[usize]) -> u64 {
        debug_assert_eq!(ranks.len(), self.sizes.len(), "wrong number of component ranks");
        ranks
            .iter()
            .zip(&self.sizes)
            .zip(&self.cumulative)
            .map(|((&r, &s), &c)| {
                debug_assert!(r < s, "component rank {} out of range for size {}", r, s);
                r as u64 * c
            })
            .sum()
    }

    /// Decode all component ranks
    pub fn unpack(&self, rank: u64) -> Vec<usize> {
        (0..self.sizes.len()).map(|i| self.component(rank, i)).collect()
    }

    /// Project the rank of component `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn component(&self, rank: u64, index: usize) -> usize {
        assert!(index < self.len(), "component {} out of range for {} components", index, self.len());
        ((rank / self.cumulative[index]) % self.sizes[index] as u64) as usize
    }

    /// Replace component `index` without decoding the others
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. `new_rank` is checked against the
    /// component size in debug builds only.
    #[inline]
    pub fn replace_component(&self, rank: u64, index: usize, new_rank: usize) -> u64 {
        let old = self.component(rank, index) as u64;
        debug_assert!(new_rank < self.sizes[index]);
        rank - old * self.cumulative[index] + new_rank as u64 * self.cumulative[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_factors() {
        assert_eq!(cumulative_factors([4, 2]), [1, 4]);
        assert_eq!(cumulative_factors([4, 42, 2]), [1, 4, 168]);
        assert_eq!(combined_size([4, 42, 2]), 336);
    }

    #[test]
    fn test_pack_and_project() {
        // 4-symbol x 2-symbol composite
        let sizes = [4, 2];
        let cum = cumulative_factors(sizes);
        let rank = pack(&[3, 1], &cum);
        assert_eq!(rank, 7);
        assert_eq!(digit(rank, cum[0], sizes[0]), 3);
        assert_eq!(digit(rank, cum[1], sizes[1]), 1);
        assert_eq!(unpack(rank, &sizes, &cum), [3, 1]);
    }

    #[test]
    fn test_replace_digit_matches_repack() {
        let sizes = [5, 3, 4];
        let cum = cumulative_factors(sizes);
        for rank in 0..combined_size(sizes) {
            for i in 0..3 {
                for new in 0..sizes[i] {
                    let mut ranks = unpack(rank, &sizes, &cum);
                    let old = ranks[i];
                    ranks[i] = new;
                    assert_eq!(replace_digit(rank, old, new, cum[i]), pack(&ranks, &cum));
                }
            }
        }
    }

    #[test]
    fn test_runtime_layout() {
        let layout = MixedRadix::for_rank::<u8>(&[4, 42]).unwrap();
        assert_eq!(layout.size(), 168);
        assert_eq!(layout.cumulative_factors(), &[1, 4]);
        assert_eq!(layout.pack(&[2, 40]), 162);
        assert_eq!(layout.unpack(162), vec![2, 40]);
        assert_eq!(layout.replace_component(162, 1, 0), 2);
    }

    #[test]
    fn test_runtime_layout_overflow() {
        let err = MixedRadix::for_rank::<u8>(&[15, 42]).unwrap_err();
        assert_eq!(
            err,
            AlphabetError::CompositeOverflow {
                sizes: vec![15, 42],
                max_rank: 255
            }
        );
        assert!(MixedRadix::for_rank::<u16>(&[15, 42]).is_ok());
        assert!(MixedRadix::for_rank::<u64>(&[usize::MAX, usize::MAX, 4]).is_err());
    }

    #[test]
    fn test_runtime_layout_empty_component() {
        assert_eq!(
            MixedRadix::for_rank::<u32>(&[4, 0]).unwrap_err(),
            AlphabetError::EmptyComponent { index: 1 }
        );
    }

    #[test]
    fn test_exact_fit() {
        // 16 * 16 == 256 fits a byte exactly
        let layout = MixedRadix::for_rank::<u8>(&[16, 16]).unwrap();
        assert_eq!(layout.size(), 256);
        assert!(MixedRadix::for_rank::<u8>(&[16, 17]).is_err());
    }

    #[test]
    #[should_panic(expected = "component 2 out of range")]
    fn test_component_index_out_of_range() {
        let layout = MixedRadix::for_rank::<u16>(&[4, 2]).unwrap();
        layout.component(5, 2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_replace_component_index_out_of_range() {
        let layout = MixedRadix::for_rank::<u16>(&[4, 2]).unwrap();
        layout.replace_component(5, 3, 0);
    }
}
