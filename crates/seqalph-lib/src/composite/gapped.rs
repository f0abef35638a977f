//! Sequence letters extended by the gap symbol
//!
//! Unlike the tuple composites, [`Gapped`] is a union: a value is either a
//! letter of `S` or a gap. Letters keep their ranks `0..S::SIZE` and the gap
//! takes the next rank, so `Gapped<S>` has `S::SIZE + 1` values.

use crate::alphabet::{Alphabet, NucleotideAlphabet, Semialphabet};
use crate::alphabets::Gap;
use crate::rank::{self, RankType};
use std::fmt;
use std::marker::PhantomData;

/// A letter of `S` or an alignment gap (`-`)
///
/// ```
/// use seqalph_lib::alphabets::Dna4;
/// use seqalph_lib::composite::Gapped;
/// use seqalph_lib::{Alphabet, Semialphabet};
///
/// let gapped: Vec<Gapped<Dna4>> = b"AC-T".iter().map(|&c| Gapped::from_char(c)).collect();
/// assert_eq!(gapped[2], Gapped::gap());
/// assert_eq!(gapped[3].letter(), Some(Dna4::T));
/// assert_eq!(Gapped::<Dna4>::SIZE, 5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gapped<S: Alphabet, R: RankType = u16> {
    rank: R,
    _alphabet: PhantomData<fn() -> S>,
}

impl<S: Alphabet, R: RankType> Gapped<S, R> {
    const ASSERT_RANK_FITS: () = assert!(
        rank::fits::<R>(<Self as Semialphabet>::SIZE),
        "Gapped size does not fit its rank type"
    );

    /// Rank of the gap
    pub const GAP_RANK: usize = S::SIZE;

    /// A letter
    #[inline]
    pub fn new(letter: S) -> Self {
        Self::from_rank_usize(letter.to_rank_usize())
    }

    /// The gap
    #[inline]
    pub fn gap() -> Self {
        Self::from_rank_usize(Self::GAP_RANK)
    }

    /// Whether this value is the gap
    #[inline]
    pub fn is_gap(self) -> bool {
        self.rank.to_usize() == Self::GAP_RANK
    }

    /// The letter, or `None` for the gap
    #[inline]
    pub fn letter(self) -> Option<S> {
        if self.is_gap() {
            None
        } else {
            Some(S::from_rank_usize(self.rank.to_usize()))
        }
    }
}

impl<S: Alphabet, R: RankType> Default for Gapped<S, R> {
    fn default() -> Self {
        let () = Self::ASSERT_RANK_FITS;
        Self {
            rank: R::default(),
            _alphabet: PhantomData,
        }
    }
}

impl<S: Alphabet, R: RankType> From<Gap> for Gapped<S, R> {
    fn from(_: Gap) -> Self {
        Self::gap()
    }
}

impl<S: Alphabet, R: RankType> Semialphabet for Gapped<S, R> {
    type Rank = R;
    const SIZE: usize = S::SIZE + Gap::SIZE;

    #[inline]
    fn to_rank(self) -> R {
        self.rank
    }

    #[inline]
    fn assign_rank(&mut self, rank: R) -> &mut Self {
        let () = Self::ASSERT_RANK_FITS;
        debug_assert!(
            rank.to_usize() < Self::SIZE,
            "rank {} out of range for gapped alphabet of size {}",
            rank,
            Self::SIZE
        );
        self.rank = rank;
        self
    }

    fn name() -> &'static str {
        "gapped"
    }
}

impl<S: Alphabet, R: RankType> Alphabet for Gapped<S, R> {
    #[inline]
    fn to_char(self) -> u8 {
        match self.letter() {
            Some(letter) => letter.to_char(),
            None => Gap::CHAR,
        }
    }

    /// `-` is the gap; every other byte is converted by `S`
    #[inline]
    fn assign_char(&mut self, c: u8) -> &mut Self {
        let rank = if c == Gap::CHAR {
            Self::GAP_RANK
        } else {
            S::from_char(c).to_rank_usize()
        };
        self.assign_rank_usize(rank)
    }

    #[inline]
    fn char_is_valid(c: u8) -> bool {
        c == Gap::CHAR || S::char_is_valid(c)
    }
}

impl<S: NucleotideAlphabet, R: RankType> NucleotideAlphabet for Gapped<S, R> {
    /// Complements letters; the gap is its own complement
    #[inline]
    fn complement(self) -> Self {
        match self.letter() {
            Some(letter) => Self::new(letter.complement()),
            None => self,
        }
    }
}

impl<S: Alphabet, R: RankType> fmt::Debug for Gapped<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter() {
            Some(letter) => f.debug_tuple("Gapped").field(&letter).finish(),
            None => f.debug_tuple("Gapped").field(&Gap).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::QualityAlphabet;
    use crate::alphabets::{Aa20, Dna4, Dna5, Phred42};
    use crate::composite::Qualified;

    #[test]
    fn test_gap_takes_last_rank() {
        assert_eq!(Gapped::<Dna4>::SIZE, 5);
        assert_eq!(Gapped::<Dna4>::gap().to_rank(), 4);
        assert_eq!(Gapped::<Dna4>::new(Dna4::G).to_rank(), 2);
        assert_eq!(Gapped::<Dna4>::from(Gap), Gapped::gap());
        assert_eq!(Gapped::<Dna4>::default().letter(), Some(Dna4::A));
    }

    #[test]
    fn test_chars() {
        assert!(Gapped::<Dna4>::from_char(b'-').is_gap());
        assert_eq!(Gapped::<Dna4>::gap().to_char(), b'-');
        assert_eq!(Gapped::<Dna4>::from_char(b'u').letter(), Some(Dna4::T));
        assert_eq!(Gapped::<Aa20>::from_char(b'X').to_char(), b'S');

        assert!(Gapped::<Dna5>::char_is_valid(b'-'));
        assert!(Gapped::<Dna5>::char_is_valid(b'n'));
        assert!(!Gapped::<Dna5>::char_is_valid(b'.'));
    }

    #[test]
    fn test_totality() {
        for c in 0..=u8::MAX {
            let value = Gapped::<Dna5, u8>::from_char(c);
            assert!(Gapped::<Dna5, u8>::char_is_valid(value.to_char()));
            assert_eq!(Gapped::<Dna5, u8>::from_char(value.to_char()), value);
        }
    }

    #[test]
    fn test_complement() {
        assert_eq!(Gapped::<Dna4>::new(Dna4::A).complement().letter(), Some(Dna4::T));
        assert!(Gapped::<Dna4>::gap().complement().is_gap());
    }

    #[test]
    fn test_qualified_gapped() {
        type T = Qualified<Gapped<Dna4, u8>, Phred42>;
        assert_eq!(T::SIZE, 5 * 42);

        let mut value = T::new(Gapped::gap(), Phred42::from_phred(25));
        assert_eq!(value.to_char(), b'-');
        assert_eq!(value.to_rank(), 4 + 25 * 5);

        value.assign_char(b'C');
        assert_eq!(value.sequence().letter(), Some(Dna4::C));
        assert_eq!(value.to_phred(), 25);
        assert_eq!(value.complement().to_char(), b'G');
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Gapped::<Dna4>::gap()), "Gapped(gap(-))");
        assert_eq!(format!("{:?}", Gapped::<Dna4>::new(Dna4::C)), "Gapped(dna4(C))");
    }
}
