//! Composite alphabets
//!
//! A composite packs N component values into one rank using mixed-radix
//! arithmetic (see [`crate::mixed_radix`]). Component 0 is the least
//! significant digit and, for char-bearing composites, the *primary*
//! component: the composite's character is the character of component 0.
//!
//! [`Gapped`] is the one union composite: its values are the letters of an
//! alphabet plus the gap, with no mixed-radix packing.
//!
//! Composites are themselves [`Semialphabet`]s, so they nest. The combined
//! size must fit the rank type parameter; this is checked when the composite
//! type is first used, so an oversized composite fails to compile:
//!
//! ```compile_fail
//! use seqalph_lib::alphabets::{Aa20, Phred94};
//! use seqalph_lib::composite::Tuple2;
//!
//! // 20 * 94 = 1880 values do not fit a byte
//! let _ = Tuple2::<Aa20, Phred94, u8>::new((Aa20::A, Phred94::MIN));
//! ```

mod gapped;
mod masked;
mod qualified;
mod tuple;

pub use gapped::Gapped;
pub use masked::Masked;
pub use qualified::Qualified;
pub use tuple::{Tuple2, Tuple3, Tuple4};

use crate::alphabet::Semialphabet;
use crate::mixed_radix;

/// Projection and partial update of component `I`
pub trait Component<const I: usize>: Semialphabet {
    /// Type of the component
    type Value: Semialphabet;

    /// Read component `I` without decoding the others
    fn component(self) -> Self::Value;

    /// Replace component `I`, leaving the others untouched
    fn assign_component(&mut self, value: Self::Value) -> &mut Self;
}

/// A composite of `N` components
pub trait CompositeAlphabet<const N: usize>: Semialphabet {
    /// Size of each component, least significant first
    const COMPONENT_SIZES: [usize; N];

    /// Positional weight of each component
    const CUMULATIVE_FACTORS: [usize; N] = mixed_radix::cumulative_factors(Self::COMPONENT_SIZES);

    /// Decode all component ranks
    #[inline]
    fn component_ranks(self) -> [usize; N] {
        mixed_radix::unpack(
            self.to_rank_usize(),
            &Self::COMPONENT_SIZES,
            &Self::CUMULATIVE_FACTORS,
        )
    }

    /// Pack component ranks into a composite
    #[inline]
    fn from_component_ranks(ranks: [usize; N]) -> Self {
        debug_assert!(
            ranks.iter().zip(Self::COMPONENT_SIZES).all(|(&r, s)| r < s),
            "component rank out of range: {:?} for sizes {:?}",
            ranks,
            Self::COMPONENT_SIZES
        );
        Self::from_rank_usize(mixed_radix::pack(&ranks, &Self::CUMULATIVE_FACTORS))
    }
}

/// Sequence letter plus secondary structure annotation
pub type StructuredRna<S, St, R = u16> = Tuple2<S, St, R>;

/// Read component `I` of a composite
#[inline]
pub fn get<const I: usize, C: Component<I>>(value: C) -> C::Value {
    value.component()
}

/// Replace component `I` of a composite
#[inline]
pub fn assign<const I: usize, C: Component<I>>(value: &mut C, component: C::Value) -> &mut C {
    value.assign_component(component)
}
