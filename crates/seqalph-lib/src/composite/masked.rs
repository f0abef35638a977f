//! Soft-masked sequence letters

use super::{Component, CompositeAlphabet, Tuple2};
use crate::alphabet::{Alphabet, NucleotideAlphabet, Semialphabet};
use crate::alphabets::Mask;
use crate::rank::RankType;
use std::fmt;

/// A sequence letter paired with a [`Mask`]
///
/// Unlike other composites, the character form carries both components:
/// masked letters are written in lower case, unmasked letters in upper case.
/// `assign_char` therefore replaces the whole value, taking the mask from
/// the case of the input.
///
/// Intended for letter alphabets whose canonical symbols are upper case.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Masked<S: Alphabet, R: RankType = u16>(Tuple2<S, Mask, R>);

impl<S: Alphabet, R: RankType> Masked<S, R> {
    /// Pack a letter and a mask
    #[inline]
    pub fn new(sequence: S, mask: Mask) -> Self {
        Self(Tuple2::new((sequence, mask)))
    }

    /// The sequence letter
    #[inline]
    pub fn sequence(self) -> S {
        self.0.get::<0>()
    }

    /// The mask
    #[inline]
    pub fn mask(self) -> Mask {
        self.0.get::<1>()
    }

    /// Whether the letter is masked
    #[inline]
    pub fn is_masked(self) -> bool {
        self.mask().is_masked()
    }

    /// Replace the sequence letter, keeping the mask
    #[inline]
    pub fn assign_sequence(&mut self, sequence: S) -> &mut Self {
        self.0.set::<0>(sequence);
        self
    }

    /// Replace the mask, keeping the sequence letter
    #[inline]
    pub fn assign_mask(&mut self, mask: Mask) -> &mut Self {
        self.0.set::<1>(mask);
        self
    }
}

impl<S: Alphabet, R: RankType> Semialphabet for Masked<S, R> {
    type Rank = R;
    const SIZE: usize = <Tuple2<S, Mask, R> as Semialphabet>::SIZE;

    #[inline]
    fn to_rank(self) -> R {
        self.0.to_rank()
    }

    #[inline]
    fn assign_rank(&mut self, rank: R) -> &mut Self {
        self.0.assign_rank(rank);
        self
    }

    fn name() -> &'static str {
        "masked"
    }
}

impl<S: Alphabet, R: RankType> CompositeAlphabet<2> for Masked<S, R> {
    const COMPONENT_SIZES: [usize; 2] = [S::SIZE, Mask::SIZE];
}

impl<S: Alphabet, R: RankType> Component<0> for Masked<S, R> {
    type Value = S;

    #[inline]
    fn component(self) -> S {
        self.sequence()
    }

    #[inline]
    fn assign_component(&mut self, value: S) -> &mut Self {
        self.assign_sequence(value)
    }
}

impl<S: Alphabet, R: RankType> Component<1> for Masked<S, R> {
    type Value = Mask;

    #[inline]
    fn component(self) -> Mask {
        self.mask()
    }

    #[inline]
    fn assign_component(&mut self, value: Mask) -> &mut Self {
        self.assign_mask(value)
    }
}

impl<S: Alphabet, R: RankType> Alphabet for Masked<S, R> {
    #[inline]
    fn to_char(self) -> u8 {
        let c = self.sequence().to_char();
        if self.is_masked() {
            c.to_ascii_lowercase()
        } else {
            c
        }
    }

    #[inline]
    fn assign_char(&mut self, c: u8) -> &mut Self {
        *self = Self::new(
            S::from_char(c.to_ascii_uppercase()),
            Mask::from(c.is_ascii_lowercase()),
        );
        self
    }

    #[inline]
    fn char_is_valid(c: u8) -> bool {
        S::char_is_valid(c.to_ascii_uppercase())
    }
}

impl<S: NucleotideAlphabet, R: RankType> NucleotideAlphabet for Masked<S, R> {
    #[inline]
    fn complement(self) -> Self {
        Self::new(self.sequence().complement(), self.mask())
    }
}

impl<S: Alphabet, R: RankType> fmt::Debug for Masked<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Masked")
            .field("sequence", &self.sequence())
            .field("mask", &self.mask())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabets::{Aa20, Dna4, Dna5};

    #[test]
    fn test_case_carries_mask() {
        let lower = Masked::<Dna4>::from_char(b'g');
        assert_eq!(lower.sequence(), Dna4::G);
        assert!(lower.is_masked());
        assert_eq!(lower.to_char(), b'g');

        let upper = Masked::<Dna4>::from_char(b'G');
        assert!(!upper.is_masked());
        assert_eq!(upper.to_char(), b'G');
    }

    #[test]
    fn test_assign_char_replaces_mask() {
        let mut value = Masked::<Dna5>::new(Dna5::A, Mask::MASKED);
        value.assign_char(b'T');
        assert_eq!(value, Masked::new(Dna5::T, Mask::UNMASKED));
        value.assign_char(b'p');
        assert_eq!(value, Masked::new(Dna5::N, Mask::MASKED));
    }

    #[test]
    fn test_validity_ignores_case() {
        assert!(Masked::<Dna5>::char_is_valid(b'n'));
        assert!(Masked::<Aa20>::char_is_valid(b'w'));
        assert!(!Masked::<Dna5>::char_is_valid(b'x'));
    }

    #[test]
    fn test_totality() {
        for c in 0..=u8::MAX {
            let value = Masked::<Dna5, u8>::from_char(c);
            assert!(Masked::<Dna5, u8>::char_is_valid(value.to_char()));
            assert_eq!(Masked::<Dna5, u8>::from_char(value.to_char()), value);
        }
    }

    #[test]
    fn test_complement_keeps_mask() {
        let value = Masked::<Dna4>::from_char(b'a');
        assert_eq!(value.complement().to_char(), b't');
        assert_eq!(Masked::<Dna4>::SIZE, 8);
    }
}
