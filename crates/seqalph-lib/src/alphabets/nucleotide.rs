//! Nucleotide alphabets
//!
//! All four alphabets are case-insensitive. The 4-letter alphabets resolve
//! IUPAC ambiguity codes to the first compatible base (A before C before G),
//! everything else becomes A. The 5-letter alphabets carry N, which is also
//! where every unknown character lands.

use crate::alphabet::{table_alphabet, Alphabet, NucleotideAlphabet, Semialphabet};
use crate::tables::{Rule, TableSpec};

/// IUPAC ambiguity codes of the 4-letter alphabets, by target
const IUPAC_RULES: [Rule; 10] = [
    Rule::Fallback { from: b'R', target: b'A' },
    Rule::Fallback { from: b'Y', target: b'C' },
    Rule::Fallback { from: b'S', target: b'C' },
    Rule::Fallback { from: b'W', target: b'A' },
    Rule::Fallback { from: b'K', target: b'G' },
    Rule::Fallback { from: b'M', target: b'A' },
    Rule::Fallback { from: b'B', target: b'C' },
    Rule::Fallback { from: b'D', target: b'A' },
    Rule::Fallback { from: b'H', target: b'A' },
    Rule::Fallback { from: b'V', target: b'A' },
];

const fn with_alias<const N: usize>(alias: Rule, rules: [Rule; N]) -> [Rule; 11] {
    let mut out = [alias; 11];
    let mut i = 0;
    while i < N {
        out[i + 1] = rules[i];
        i += 1;
    }
    out
}

const DNA4_RULES: [Rule; 11] = with_alias(Rule::Alias { alias: b'U', target: b'T' }, IUPAC_RULES);
const RNA4_RULES: [Rule; 11] = with_alias(Rule::Alias { alias: b'T', target: b'U' }, IUPAC_RULES);

const DNA4_SPEC: TableSpec<'static, 4> = TableSpec {
    symbols: *b"ACGT",
    default_symbol: b'A',
    case_insensitive: true,
    rules: &DNA4_RULES,
};

const RNA4_SPEC: TableSpec<'static, 4> = TableSpec {
    symbols: *b"ACGU",
    default_symbol: b'A',
    case_insensitive: true,
    rules: &RNA4_RULES,
};

const DNA5_SPEC: TableSpec<'static, 5> = TableSpec {
    symbols: *b"ACGNT",
    default_symbol: b'N',
    case_insensitive: true,
    rules: &[Rule::Alias { alias: b'U', target: b'T' }],
};

const RNA5_SPEC: TableSpec<'static, 5> = TableSpec {
    symbols: *b"ACGNU",
    default_symbol: b'N',
    case_insensitive: true,
    rules: &[Rule::Alias { alias: b'T', target: b'U' }],
};

/// Complement by rank for ACGNT / ACGNU
const COMPLEMENT5: [u8; 5] = [4, 2, 1, 3, 0];

table_alphabet!(
    /// The four DNA bases; U is accepted as T
    Dna4, "dna4", 4, DNA4_SPEC
);

table_alphabet!(
    /// The four RNA bases; T is accepted as U
    Rna4, "rna4", 4, RNA4_SPEC
);

table_alphabet!(
    /// DNA bases plus N
    Dna5, "dna5", 5, DNA5_SPEC
);

table_alphabet!(
    /// RNA bases plus N
    Rna5, "rna5", 5, RNA5_SPEC
);

#[allow(missing_docs)]
impl Dna4 {
    pub const A: Self = Self::with_rank(0);
    pub const C: Self = Self::with_rank(1);
    pub const G: Self = Self::with_rank(2);
    pub const T: Self = Self::with_rank(3);
}

#[allow(missing_docs)]
impl Rna4 {
    pub const A: Self = Self::with_rank(0);
    pub const C: Self = Self::with_rank(1);
    pub const G: Self = Self::with_rank(2);
    pub const U: Self = Self::with_rank(3);
}

#[allow(missing_docs)]
impl Dna5 {
    pub const A: Self = Self::with_rank(0);
    pub const C: Self = Self::with_rank(1);
    pub const G: Self = Self::with_rank(2);
    pub const N: Self = Self::with_rank(3);
    pub const T: Self = Self::with_rank(4);
}

#[allow(missing_docs)]
impl Rna5 {
    pub const A: Self = Self::with_rank(0);
    pub const C: Self = Self::with_rank(1);
    pub const G: Self = Self::with_rank(2);
    pub const N: Self = Self::with_rank(3);
    pub const U: Self = Self::with_rank(4);
}

macro_rules! impl_complement {
    (xor: $($name:ident),+) => {
        $(
            impl NucleotideAlphabet for $name {
                #[inline]
                fn complement(self) -> Self {
                    // A<->T/U and C<->G are rank pairs 0/3 and 1/2
                    Self::with_rank(self.to_rank() ^ 0b11)
                }
            }
        )+
    };
    (table: $($name:ident),+) => {
        $(
            impl NucleotideAlphabet for $name {
                #[inline]
                fn complement(self) -> Self {
                    Self::with_rank(COMPLEMENT5[self.to_rank() as usize])
                }
            }
        )+
    };
}

impl_complement!(xor: Dna4, Rna4);
impl_complement!(table: Dna5, Rna5);

macro_rules! impl_conversion {
    (same_rank: $($from:ident => $to:ident),+) => {
        $(
            impl From<$from> for $to {
                #[inline]
                fn from(value: $from) -> Self {
                    Self::with_rank(value.to_rank())
                }
            }
        )+
    };
    (via_char: $($from:ident => $to:ident),+) => {
        $(
            impl From<$from> for $to {
                #[inline]
                fn from(value: $from) -> Self {
                    Self::from_char(value.to_char())
                }
            }
        )+
    };
}

// DNA and RNA of the same size share their rank order
impl_conversion!(same_rank: Dna4 => Rna4, Rna4 => Dna4, Dna5 => Rna5, Rna5 => Dna5);

// Across sizes T and U are interchangeable and N falls back to A
impl_conversion!(via_char:
    Dna4 => Dna5, Dna4 => Rna5, Rna4 => Dna5, Rna4 => Rna5,
    Dna5 => Dna4, Dna5 => Rna4, Rna5 => Dna4, Rna5 => Rna4
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dna4_u_is_t() {
        assert_eq!(Dna4::from_char(b'U').to_rank(), 3);
        assert_eq!(Dna4::from_char(b'U').to_char(), b'T');
        assert_eq!(Dna4::from_char(b'u'), Dna4::T);
        assert!(Dna4::char_is_valid(b'U'));
    }

    #[test]
    fn test_dna4_iupac_fallbacks() {
        let converted: Vec<u8> = b"RYSWKMBDHVN"
            .iter()
            .map(|&c| Dna4::from_char(c).to_char())
            .collect();
        assert_eq!(converted, b"ACCAGACAAAA");
        assert!(!Dna4::char_is_valid(b'R'));
        assert_eq!(Dna4::from_char(b'k'), Dna4::G);
    }

    #[test]
    fn test_rna4_mirrors_dna4() {
        assert_eq!(Rna4::from_char(b'T'), Rna4::U);
        assert_eq!(Rna4::from_char(b'U').to_char(), b'U');
        assert_eq!(Rna4::from_char(b'Y'), Rna4::C);
        assert_eq!(Rna4::from(Dna4::T), Rna4::U);
        assert_eq!(Dna4::from(Rna4::G), Dna4::G);
    }

    #[test]
    fn test_dna5_unknown_is_n() {
        assert_eq!(Dna5::from_char(b'P'), Dna5::N);
        assert_eq!(Dna5::from_char(b'R'), Dna5::N);
        assert_eq!(Dna5::from_char(0), Dna5::N);
        assert!(Dna5::char_is_valid(b'n'));
        assert!(!Dna5::char_is_valid(b'P'));
        assert_eq!(Dna5::from(Dna4::T), Dna5::T);
        assert_eq!(Dna5::from(Dna4::G), Dna5::G);
    }

    #[test]
    fn test_rna5_accepts_t() {
        for &c in b"ACGTUNacgtun" {
            assert!(Rna5::char_is_valid(c), "{} should be valid", c as char);
        }
        assert_eq!(Rna5::from_char(b't'), Rna5::U);
    }

    #[test]
    fn test_complement() {
        assert_eq!(Dna4::A.complement(), Dna4::T);
        assert_eq!(Dna4::C.complement(), Dna4::G);
        assert_eq!(Rna4::U.complement(), Rna4::A);
        assert_eq!(Dna5::N.complement(), Dna5::N);
        assert_eq!(Dna5::T.complement(), Dna5::A);
        assert_eq!(Rna5::G.complement(), Rna5::C);
        for rank in 0..5 {
            let value = Dna5::from_rank(rank);
            assert_eq!(value.complement().complement(), value);
        }
    }

    macro_rules! assert_converts {
        ($from:ident => $($to:ident),+) => {
            $(
                for &c in b"ACGTU" {
                    assert_eq!($to::from($from::from_char(c)), $to::from_char(c), "{} -> {}", $from::name(), $to::name());
                }
                assert_eq!($to::from($from::from_char(b'T')), $to::from_char(b'U'));
            )+
        };
    }

    #[test]
    fn test_conversions_between_all_nucleotides() {
        assert_converts!(Dna4 => Rna4, Dna5, Rna5);
        assert_converts!(Rna4 => Dna4, Dna5, Rna5);
        assert_converts!(Dna5 => Dna4, Rna4, Rna5);
        assert_converts!(Rna5 => Dna4, Rna4, Dna5);
    }

    #[test]
    fn test_n_conversions() {
        assert_eq!(Rna5::from(Dna5::N), Rna5::N);
        assert_eq!(Dna5::from(Rna5::N), Dna5::N);
        assert_eq!(Dna4::from(Dna5::N), Dna4::A);
        assert_eq!(Rna4::from(Rna5::N), Rna4::A);
        assert_eq!(Dna5::from(Rna4::U), Dna5::T);
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(Dna4::G.to_string(), "G");
        assert_eq!(format!("{:?}", Dna5::N), "dna5(N)");
    }
}
