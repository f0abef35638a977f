//! Fixed-arity tuple composites
//!
//! `Tuple2`, `Tuple3` and `Tuple4` are generated by one macro. Each takes its
//! component types followed by a rank type (default `u16`).

use super::{Component, CompositeAlphabet};
use crate::alphabet::{Alphabet, NucleotideAlphabet, Semialphabet};
use crate::mixed_radix;
use crate::rank::{self, RankType};
use std::fmt;
use std::marker::PhantomData;

macro_rules! tuple_alphabet {
    (
        $(#[$meta:meta])*
        $name:ident, $n:literal, [$($idx:tt : $T:ident),+]
    ) => {
        tuple_alphabet!(@define $(#[$meta])* $name, $n, [$($T),+], [$($idx : $T),+]);
    };

    (@define $(#[$meta:meta])* $name:ident, $n:literal, $gens:tt, [$($idx:tt : $T:ident),+]) => {
        tuple_alphabet!(@body $(#[$meta])* $name, $n, [$($idx : $T),+]);
        $(
            tuple_alphabet!(@component $name, $n, $gens, $idx, $T);
        )+
    };

    (@body $(#[$meta:meta])* $name:ident, $n:literal, [$($idx:tt : $T:ident),+]) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name<$($T: Semialphabet,)+ R: RankType = u16> {
            rank: R,
            _components: PhantomData<fn() -> ($($T,)+)>,
        }

        impl<$($T: Semialphabet,)+ R: RankType> $name<$($T,)+ R> {
            const ASSERT_RANK_FITS: () = assert!(
                rank::fits::<R>(<Self as Semialphabet>::SIZE),
                concat!(stringify!($name), " size does not fit its rank type")
            );

            /// Pack a tuple of component values
            #[inline]
            pub fn new(components: ($($T,)+)) -> Self {
                let () = Self::ASSERT_RANK_FITS;
                <Self as CompositeAlphabet<$n>>::from_component_ranks([
                    $(Semialphabet::to_rank_usize(components.$idx)),+
                ])
            }

            /// Unpack into a tuple of component values
            #[inline]
            pub fn into_components(self) -> ($($T,)+) {
                ($(self.get::<$idx>(),)+)
            }

            /// Read component `I`
            #[inline]
            pub fn get<const I: usize>(self) -> <Self as Component<I>>::Value
            where
                Self: Component<I>,
            {
                <Self as Component<I>>::component(self)
            }

            /// Replace component `I`
            #[inline]
            pub fn set<const I: usize>(&mut self, value: <Self as Component<I>>::Value) -> &mut Self
            where
                Self: Component<I>,
            {
                <Self as Component<I>>::assign_component(self, value)
            }
        }

        impl<$($T: Semialphabet,)+ R: RankType> Default for $name<$($T,)+ R> {
            fn default() -> Self {
                let () = Self::ASSERT_RANK_FITS;
                Self {
                    rank: R::default(),
                    _components: PhantomData,
                }
            }
        }

        impl<$($T: Semialphabet,)+ R: RankType> Semialphabet for $name<$($T,)+ R> {
            type Rank = R;
            const SIZE: usize = mixed_radix::combined_size([$(<$T as Semialphabet>::SIZE),+]);

            #[inline]
            fn to_rank(self) -> R {
                self.rank
            }

            #[inline]
            fn assign_rank(&mut self, rank: R) -> &mut Self {
                let () = Self::ASSERT_RANK_FITS;
                debug_assert!(
                    rank.to_usize() < Self::SIZE,
                    "rank {} out of range for {} of size {}",
                    rank,
                    stringify!($name),
                    Self::SIZE
                );
                self.rank = rank;
                self
            }

            fn name() -> &'static str {
                stringify!($name)
            }
        }

        impl<$($T: Semialphabet,)+ R: RankType> CompositeAlphabet<$n> for $name<$($T,)+ R> {
            const COMPONENT_SIZES: [usize; $n] = [$(<$T as Semialphabet>::SIZE),+];
        }

        impl<$($T: Semialphabet,)+ R: RankType> Alphabet for $name<$($T,)+ R>
        where
            Self: Component<0>,
            <Self as Component<0>>::Value: Alphabet,
        {
            #[inline]
            fn to_char(self) -> u8 {
                self.get::<0>().to_char()
            }

            /// Assigns the primary component; the others keep their values
            #[inline]
            fn assign_char(&mut self, c: u8) -> &mut Self {
                self.set::<0>(<<Self as Component<0>>::Value as Alphabet>::from_char(c))
            }

            #[inline]
            fn char_is_valid(c: u8) -> bool {
                <<Self as Component<0>>::Value as Alphabet>::char_is_valid(c)
            }
        }

        impl<$($T: Semialphabet,)+ R: RankType> NucleotideAlphabet for $name<$($T,)+ R>
        where
            Self: Component<0>,
            <Self as Component<0>>::Value: NucleotideAlphabet,
        {
            #[inline]
            fn complement(self) -> Self {
                let mut value = self;
                value.set::<0>(self.get::<0>().complement());
                value
            }
        }

        impl<$($T: Semialphabet,)+ R: RankType> fmt::Debug for $name<$($T,)+ R> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut tuple = f.debug_tuple(stringify!($name));
                $(
                    tuple.field(&self.get::<$idx>());
                )+
                tuple.finish()
            }
        }
    };

    (@component $name:ident, $n:literal, [$($G:ident),+], $idx:tt, $T:ident) => {
        impl<$($G: Semialphabet,)+ R: RankType> Component<$idx> for $name<$($G,)+ R> {
            type Value = $T;

            #[inline]
            fn component(self) -> $T {
                let cumulative = <Self as CompositeAlphabet<$n>>::CUMULATIVE_FACTORS[$idx];
                let digit = mixed_radix::digit(
                    self.rank.to_usize(),
                    cumulative,
                    <$T as Semialphabet>::SIZE,
                );
                <$T as Semialphabet>::from_rank_usize(digit)
            }

            #[inline]
            fn assign_component(&mut self, value: $T) -> &mut Self {
                let cumulative = <Self as CompositeAlphabet<$n>>::CUMULATIVE_FACTORS[$idx];
                let rank = self.rank.to_usize();
                let old = mixed_radix::digit(rank, cumulative, <$T as Semialphabet>::SIZE);
                let new = mixed_radix::replace_digit(rank, old, value.to_rank_usize(), cumulative);
                self.rank = R::from_usize(new);
                self
            }
        }
    };
}

tuple_alphabet!(
    /// Composite of two alphabets
    Tuple2, 2, [0: A, 1: B]
);

tuple_alphabet!(
    /// Composite of three alphabets
    Tuple3, 3, [0: A, 1: B, 2: C]
);

tuple_alphabet!(
    /// Composite of four alphabets
    Tuple4, 4, [0: A, 1: B, 2: C, 3: D]
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::QualityAlphabet;
    use crate::alphabets::{Dna4, Dna5, DotBracket3, Gap, Mask, Phred42, Rna4};

    #[test]
    fn test_pack_4_by_2() {
        let value = Tuple2::<Dna4, Mask>::new((Dna4::T, Mask::MASKED));
        assert_eq!(value.to_rank(), 7);
        assert_eq!(value.get::<0>(), Dna4::T);
        assert_eq!(value.get::<1>(), Mask::MASKED);
        assert_eq!(Tuple2::<Dna4, Mask>::from_rank(7).component_ranks(), [3, 1]);
    }

    #[test]
    fn test_sizes_and_factors() {
        type T = Tuple3<Dna5, Phred42, DotBracket3>;
        assert_eq!(T::SIZE, 5 * 42 * 3);
        assert_eq!(<T as CompositeAlphabet<3>>::COMPONENT_SIZES, [5, 42, 3]);
        assert_eq!(<T as CompositeAlphabet<3>>::CUMULATIVE_FACTORS, [1, 5, 210]);
    }

    #[test]
    fn test_decomposability_exhaustive() {
        type T = Tuple3<Dna5, DotBracket3, Mask>;
        for a in 0..5 {
            for b in 0..3 {
                for c in 0..2 {
                    let value = T::new((Dna5::from_rank(a), DotBracket3::from_rank(b), Mask::from_rank(c)));
                    assert_eq!(value.get::<0>().to_rank(), a);
                    assert_eq!(value.get::<1>().to_rank(), b);
                    assert_eq!(value.get::<2>().to_rank(), c);
                    assert_eq!(
                        value.into_components(),
                        (Dna5::from_rank(a), DotBracket3::from_rank(b), Mask::from_rank(c))
                    );
                }
            }
        }
    }

    #[test]
    fn test_partial_update_equivalence() {
        type T = Tuple3<Dna4, DotBracket3, Mask>;
        for rank in 0..T::SIZE {
            let value = T::from_rank_usize(rank);
            for new in 0..3u8 {
                let mut updated = value;
                updated.set::<1>(DotBracket3::from_rank(new));
                let (a, _, c) = value.into_components();
                assert_eq!(updated, T::new((a, DotBracket3::from_rank(new), c)));
            }
        }
    }

    #[test]
    fn test_char_uses_primary_component() {
        let mut value = Tuple2::<Dna4, Phred42>::new((Dna4::A, Phred42::MAX));
        value.assign_char(b'G');
        assert_eq!(value.to_char(), b'G');
        assert_eq!(value.get::<1>(), Phred42::MAX);
        assert!(Tuple2::<Dna4, Phred42>::char_is_valid(b'u'));
        assert!(!Tuple2::<Dna4, Phred42>::char_is_valid(b'N'));
    }

    #[test]
    fn test_complement_preserves_other_components() {
        let value = Tuple2::<Rna4, DotBracket3>::new((Rna4::A, DotBracket3::PAIR_CLOSE));
        let complemented = value.complement();
        assert_eq!(complemented.get::<0>(), Rna4::U);
        assert_eq!(complemented.get::<1>(), DotBracket3::PAIR_CLOSE);
    }

    #[test]
    fn test_nested_composites() {
        type Inner = Tuple2<Dna4, Mask, u8>;
        type Outer = Tuple2<Inner, Phred42>;
        assert_eq!(Outer::SIZE, 8 * 42);

        let inner = Inner::new((Dna4::C, Mask::MASKED));
        let outer = Outer::new((inner, Phred42::from_phred(10)));
        assert_eq!(outer.get::<0>().get::<1>(), Mask::MASKED);
        assert_eq!(outer.get::<1>().to_rank(), 10);
        // Primary component of the primary component
        assert_eq!(outer.to_char(), b'C');
    }

    #[test]
    fn test_single_valued_component_is_free() {
        type T = Tuple2<Dna4, Gap, u8>;
        assert_eq!(T::SIZE, 4);
        let value = T::new((Dna4::T, Gap));
        assert_eq!(value.to_rank(), 3);
        assert_eq!(value.get::<1>(), Gap);
    }

    #[test]
    fn test_ordering_follows_rank() {
        type T = Tuple2<Dna4, Mask, u8>;
        // component 1 is the most significant digit
        assert!(T::new((Dna4::T, Mask::UNMASKED)) < T::new((Dna4::A, Mask::MASKED)));
        assert_eq!(T::default().to_rank(), 0);
    }

    #[test]
    fn test_four_components() {
        type T = Tuple4<Dna4, Mask, DotBracket3, Phred42, u16>;
        let value = T::new((Dna4::G, Mask::MASKED, DotBracket3::PAIR_OPEN, Phred42::MAX));
        assert_eq!(value.component_ranks(), [2, 1, 1, 41]);
        assert_eq!(T::from_component_ranks([2, 1, 1, 41]), value);
        assert_eq!(format!("{:?}", Tuple2::<Dna4, Mask>::new((Dna4::A, Mask::MASKED))), "Tuple2(dna4(A), MASKED)");
    }
}
