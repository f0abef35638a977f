//! Alphabet capability traits
//!
//! An alphabet value is a plain `Copy` scalar holding its rank. The traits in
//! this module are the contract every consumer relies on:
//!
//! - [`Semialphabet`]: rank-only alphabets (size, `to_rank`, `assign_rank`)
//! - [`Alphabet`]: adds the visual character form and the validity check
//! - [`NucleotideAlphabet`] / [`QualityAlphabet`]: domain refinements
//!
//! Character conversion is total: `assign_char` accepts every byte and
//! canonicalizes unknown characters through tables built at compile time.
//! Only [`Alphabet::assign_char_strictly`] and the helpers in
//! [`crate::validate`] turn non-canonical input into an error.

use crate::error::AlphabetError;
use crate::rank::RankType;
use std::fmt;
use std::hash::Hash;

/// An alphabet whose values are only ranks (no character form)
///
/// Equality and ordering of values are equality and ordering of ranks.
pub trait Semialphabet:
    Copy + Default + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static
{
    /// Storage type of the rank
    type Rank: RankType;

    /// Number of distinct values
    const SIZE: usize;

    /// The rank of this value, in `[0, SIZE)`
    fn to_rank(self) -> Self::Rank;

    /// Overwrite the value with the given rank
    ///
    /// `rank` must be smaller than `SIZE`. This is checked in debug builds
    /// only.
    fn assign_rank(&mut self, rank: Self::Rank) -> &mut Self;

    /// Construct a value from a rank
    #[inline]
    fn from_rank(rank: Self::Rank) -> Self {
        let mut value = Self::default();
        value.assign_rank(rank);
        value
    }

    /// Short name used in diagnostics
    fn name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// The rank as a `usize`
    #[inline]
    fn to_rank_usize(self) -> usize {
        self.to_rank().to_usize()
    }

    /// Assign a rank given as a `usize`
    #[inline]
    fn assign_rank_usize(&mut self, rank: usize) -> &mut Self {
        self.assign_rank(Self::Rank::from_usize(rank))
    }

    /// Construct a value from a rank given as a `usize`
    #[inline]
    fn from_rank_usize(rank: usize) -> Self {
        Self::from_rank(Self::Rank::from_usize(rank))
    }
}

/// An alphabet with a visual character representation
pub trait Alphabet: Semialphabet {
    /// The character of this value
    fn to_char(self) -> u8;

    /// Overwrite the value from a character
    ///
    /// Never fails: characters that are not canonical for this alphabet are
    /// converted according to the alphabet's fallback rules.
    fn assign_char(&mut self, c: u8) -> &mut Self;

    /// Whether `c` is a canonical representation (survives a round trip)
    fn char_is_valid(c: u8) -> bool;

    /// Construct a value from a character
    #[inline]
    fn from_char(c: u8) -> Self {
        let mut value = Self::default();
        value.assign_char(c);
        value
    }

    /// Assign a character, rejecting anything `assign_char` would convert
    ///
    /// The reported position is always 0; stream consumers use
    /// [`crate::validate::validate_chars`] to get offsets.
    fn assign_char_strictly(&mut self, c: u8) -> Result<&mut Self, AlphabetError> {
        if !Self::char_is_valid(c) {
            return Err(AlphabetError::InvalidCharacter {
                character: c,
                position: 0,
                alphabet: Self::name(),
            });
        }
        Ok(self.assign_char(c))
    }
}

/// A nucleotide alphabet
pub trait NucleotideAlphabet: Alphabet {
    /// Watson-Crick complement (ambiguous symbols map to themselves)
    fn complement(self) -> Self;
}

/// A quality score alphabet
pub trait QualityAlphabet: Alphabet {
    /// The phred score of this value
    fn to_phred(self) -> i8;

    /// Overwrite the value from a phred score, clamping into range
    fn assign_phred(&mut self, phred: i8) -> &mut Self;

    /// Construct a value from a phred score
    #[inline]
    fn from_phred(phred: i8) -> Self {
        let mut value = Self::default();
        value.assign_phred(phred);
        value
    }
}

/// Define a byte-sized alphabet backed by static conversion tables
///
/// The tables are evaluated from a [`crate::tables::TableSpec`] at compile
/// time. The generated type stores only its rank.
macro_rules! table_alphabet {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal, $size:literal, $spec:expr
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            rank: u8,
        }

        impl $name {
            /// Conversion tables of this alphabet
            pub fn tables() -> &'static $crate::tables::AlphabetTables<$size> {
                static TABLES: $crate::tables::AlphabetTables<$size> = $spec.build();
                &TABLES
            }

            const fn with_rank(rank: u8) -> Self {
                Self { rank }
            }
        }

        impl $crate::alphabet::Semialphabet for $name {
            type Rank = u8;
            const SIZE: usize = $size;

            #[inline]
            fn to_rank(self) -> u8 {
                self.rank
            }

            #[inline]
            fn assign_rank(&mut self, rank: u8) -> &mut Self {
                debug_assert!(
                    (rank as usize) < $size,
                    "rank {} out of range for {}",
                    rank,
                    $label
                );
                self.rank = rank;
                self
            }

            fn name() -> &'static str {
                $label
            }
        }

        impl $crate::alphabet::Alphabet for $name {
            #[inline]
            fn to_char(self) -> u8 {
                Self::tables().char_of(self.rank)
            }

            #[inline]
            fn assign_char(&mut self, c: u8) -> &mut Self {
                self.rank = Self::tables().rank_of(c);
                self
            }

            #[inline]
            fn char_is_valid(c: u8) -> bool {
                Self::tables().is_valid(c)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                use $crate::alphabet::Alphabet;
                write!(f, "{}({})", $label, char::from(self.to_char()))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                use $crate::alphabet::Alphabet;
                write!(f, "{}", char::from(self.to_char()))
            }
        }
    };
}

pub(crate) use table_alphabet;
