//! Rank storage types
//!
//! Every alphabet value is stored as its rank, the smallest unsigned integer
//! that can hold `[0, size)`. Leaf alphabets always fit a `u8`; composites pick
//! their storage through a type parameter so that, for example, a nucleotide
//! paired with a 42-level quality score still packs into a single byte.

use std::fmt;
use std::hash::Hash;

/// Unsigned integer type usable as the stored rank of an alphabet
///
/// This trait is implemented for `u8`, `u16`, `u32` and `u64`.
/// All conversions truncate; callers are responsible for range checks.
pub trait RankType:
    Copy
    + Default
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Number of bits in the storage type
    const BITS: u32;

    /// Largest rank value this type can hold
    const MAX_VALUE: u64;

    /// Convert to usize (truncates on 32-bit targets for u64)
    fn to_usize(self) -> usize;

    /// Convert usize to storage (truncates)
    fn from_usize(val: usize) -> Self;

    /// Convert to u64
    fn to_u64(self) -> u64;

    /// Convert u64 to storage (truncates)
    fn from_u64(val: u64) -> Self;
}

macro_rules! impl_rank_type {
    ($($t:ty),* $(,)?) => {
        $(
            impl RankType for $t {
                const BITS: u32 = <$t>::BITS;
                const MAX_VALUE: u64 = <$t>::MAX as u64;

                #[inline]
                fn to_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as $t
                }

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn from_u64(val: u64) -> Self {
                    val as $t
                }
            }
        )*
    };
}

impl_rank_type!(u8, u16, u32, u64);

/// Check whether an alphabet of `size` values can be stored in `R`
///
/// A size of 0 never fits; alphabets always have at least one value.
#[inline]
pub const fn fits<R: RankType>(size: usize) -> bool {
    size != 0 && (size as u64 - 1) <= R::MAX_VALUE
}

/// Minimum number of bits needed to represent ranks in `[0, size)`
///
/// Returns 0 for sizes 0 and 1: a single-value alphabet carries no state.
#[inline]
pub const fn min_viable_bits(size: u64) -> u32 {
    if size <= 1 {
        0
    } else {
        64 - (size - 1).leading_zeros()
    }
}
