//! Quality score alphabets
//!
//! Each alphabet covers a contiguous range of printable characters. Characters
//! below the range read as the lowest score and characters above it as the
//! highest; phred scores outside the range are clamped the same way.

use crate::alphabet::{table_alphabet, QualityAlphabet};
use crate::constants::{SANGER_PHRED_OFFSET, SOLEXA_PHRED_OFFSET};
use crate::tables::{contiguous_symbols, Rule, TableSpec};

/// Conversion rules of a quality alphabet starting at `first`
const fn quality_spec<const N: usize>(first: u8) -> TableSpec<'static, N> {
    TableSpec {
        symbols: contiguous_symbols::<N>(first),
        default_symbol: first + (N as u8 - 1),
        case_insensitive: false,
        rules: &[],
    }
}

macro_rules! quality_alphabet {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal, $size:literal, first: $first:expr, phred: $phred:expr
    ) => {
        table_alphabet!(
            $(#[$meta])*
            $name, $label, $size, TableSpec {
                rules: &[Rule::FallbackRange { start: 0, end: $first - 1, target: $first }],
                ..quality_spec::<$size>($first)
            }
        );

        impl $name {
            /// Phred score of rank 0
            pub const OFFSET_PHRED: i8 = $phred;
            /// Lowest score
            pub const MIN: Self = Self::with_rank(0);
            /// Highest score
            pub const MAX: Self = Self::with_rank($size - 1);
        }

        impl QualityAlphabet for $name {
            #[inline]
            fn to_phred(self) -> i8 {
                self.rank as i8 + Self::OFFSET_PHRED
            }

            #[inline]
            fn assign_phred(&mut self, phred: i8) -> &mut Self {
                let rank = (phred as i16 - Self::OFFSET_PHRED as i16).clamp(0, $size - 1);
                *self = Self::with_rank(rank as u8);
                self
            }
        }
    };
}

quality_alphabet!(
    /// Sanger scores 0..=41 ('!'..='J'), Illumina 1.8+
    Phred42, "phred42", 42, first: SANGER_PHRED_OFFSET, phred: 0
);

quality_alphabet!(
    /// Sanger scores 0..=62 ('!'..='_')
    Phred63, "phred63", 63, first: SANGER_PHRED_OFFSET, phred: 0
);

quality_alphabet!(
    /// Full printable Sanger range, scores 0..=93 ('!'..='~')
    Phred94, "phred94", 94, first: SANGER_PHRED_OFFSET, phred: 0
);

quality_alphabet!(
    /// Solexa / Illumina 1.0 scores -5..=62 (';'..='~')
    Phred68Legacy, "phred68legacy", 68, first: SOLEXA_PHRED_OFFSET, phred: -5
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{Alphabet, Semialphabet};

    #[test]
    fn test_phred42_range() {
        assert_eq!(Phred42::MIN.to_char(), b'!');
        assert_eq!(Phred42::MAX.to_char(), b'J');
        assert_eq!(Phred42::from_char(b'I').to_phred(), 40);
        assert_eq!(Phred42::from_phred(30).to_char(), b'?');
    }

    #[test]
    fn test_chars_clamp() {
        assert_eq!(Phred42::from_char(b' '), Phred42::MIN);
        assert_eq!(Phred42::from_char(0), Phred42::MIN);
        assert_eq!(Phred42::from_char(b'~'), Phred42::MAX);
        assert_eq!(Phred42::from_char(255), Phred42::MAX);
        assert!(!Phred42::char_is_valid(b'K'));
        assert!(Phred42::char_is_valid(b'J'));
        assert!(!Phred42::char_is_valid(b' '));
    }

    #[test]
    fn test_phred_clamps() {
        assert_eq!(Phred42::from_phred(-3), Phred42::MIN);
        assert_eq!(Phred42::from_phred(60), Phred42::MAX);
        assert_eq!(Phred63::from_phred(62).to_char(), b'_');
        assert_eq!(Phred94::from_phred(i8::MAX).to_char(), b'~');
    }

    #[test]
    fn test_phred94_covers_printable() {
        for c in b'!'..=b'~' {
            assert!(Phred94::char_is_valid(c));
            assert_eq!(Phred94::from_char(c).to_phred(), (c - b'!') as i8);
        }
        assert_eq!(Phred94::SIZE, 94);
    }

    #[test]
    fn test_legacy_offset() {
        assert_eq!(Phred68Legacy::MIN.to_char(), b';');
        assert_eq!(Phred68Legacy::MIN.to_phred(), -5);
        assert_eq!(Phred68Legacy::MAX.to_char(), b'~');
        assert_eq!(Phred68Legacy::MAX.to_phred(), 62);
        assert_eq!(Phred68Legacy::from_phred(0).to_char(), b'@');
        assert_eq!(Phred68Legacy::from_char(b'!'), Phred68Legacy::MIN);
    }
}
