//! Sequence letters annotated with a quality score

use super::{Component, CompositeAlphabet, Tuple2};
use crate::alphabet::{Alphabet, NucleotideAlphabet, QualityAlphabet, Semialphabet};
use crate::rank::RankType;
use std::fmt;

/// A sequence letter paired with a quality score
///
/// The character form is the sequence letter. Phred conversions address the
/// quality component, so the composite is itself a quality alphabet.
///
/// ```
/// use seqalph_lib::alphabets::{Dna4, Phred42};
/// use seqalph_lib::{Alphabet, Qualified, QualityAlphabet, Semialphabet};
///
/// let mut value = Qualified::<Dna4, Phred42, u8>::new(Dna4::A, Phred42::from_phred(30));
/// value.assign_char(b'C');
/// assert_eq!(value.to_char(), b'C');
/// assert_eq!(value.to_phred(), 30);
/// assert_eq!(value.to_rank(), 1 + 30 * 4);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Qualified<S: Alphabet, Q: QualityAlphabet, R: RankType = u16>(Tuple2<S, Q, R>);

impl<S: Alphabet, Q: QualityAlphabet, R: RankType> Qualified<S, Q, R> {
    /// Pack a letter and a quality score
    #[inline]
    pub fn new(sequence: S, quality: Q) -> Self {
        Self(Tuple2::new((sequence, quality)))
    }

    /// The sequence letter
    #[inline]
    pub fn sequence(self) -> S {
        self.0.get::<0>()
    }

    /// The quality score
    #[inline]
    pub fn quality(self) -> Q {
        self.0.get::<1>()
    }

    /// Replace the sequence letter, keeping the quality
    #[inline]
    pub fn assign_sequence(&mut self, sequence: S) -> &mut Self {
        self.0.set::<0>(sequence);
        self
    }

    /// Replace the quality, keeping the sequence letter
    #[inline]
    pub fn assign_quality(&mut self, quality: Q) -> &mut Self {
        self.0.set::<1>(quality);
        self
    }

    /// Unpack into letter and quality
    #[inline]
    pub fn into_components(self) -> (S, Q) {
        self.0.into_components()
    }
}

impl<S: Alphabet, Q: QualityAlphabet, R: RankType> Semialphabet for Qualified<S, Q, R> {
    type Rank = R;
    const SIZE: usize = <Tuple2<S, Q, R> as Semialphabet>::SIZE;

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
        "qualified"
    }
}

impl<S: Alphabet, Q: QualityAlphabet, R: RankType> CompositeAlphabet<2> for Qualified<S, Q, R> {
    const COMPONENT_SIZES: [usize; 2] = [S::SIZE, Q::SIZE];
}

impl<S: Alphabet, Q: QualityAlphabet, R: RankType> Component<0> for Qualified<S, Q, R> {
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

impl<S: Alphabet, Q: QualityAlphabet, R: RankType> Component<1> for Qualified<S, Q, R> {
    type Value = Q;

    #[inline]
    fn component(self) -> Q {
        self.quality()
    }

    #[inline]
    fn assign_component(&mut self, value: Q) -> &mut Self {
        self.assign_quality(value)
    }
}

impl<S: Alphabet, Q: QualityAlphabet, R: RankType> Alphabet for Qualified<S, Q, R> {
    #[inline]
    fn to_char(self) -> u8 {
        self.sequence().to_char()
    }

    #[inline]
    fn assign_char(&mut self, c: u8) -> &mut Self {
        self.assign_sequence(S::from_char(c))
    }

    #[inline]
    fn char_is_valid(c: u8) -> bool {
        S::char_is_valid(c)
    }
}

impl<S: Alphabet, Q: QualityAlphabet, R: RankType> QualityAlphabet for Qualified<S, Q, R> {
    #[inline]
    fn to_phred(self) -> i8 {
        self.quality().to_phred()
    }

    #[inline]
    fn assign_phred(&mut self, phred: i8) -> &mut Self {
        self.assign_quality(Q::from_phred(phred))
    }
}

impl<S: NucleotideAlphabet, Q: QualityAlphabet, R: RankType> NucleotideAlphabet for Qualified<S, Q, R> {
    #[inline]
    fn complement(self) -> Self {
        Self::new(self.sequence().complement(), self.quality())
    }
}

impl<S: Alphabet, Q: QualityAlphabet, R: RankType> fmt::Debug for Qualified<S, Q, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Qualified")
            .field("sequence", &self.sequence())
            .field("quality", &self.quality())
            .finish()
    }
}
