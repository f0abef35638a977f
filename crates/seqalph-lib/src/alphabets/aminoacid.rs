//! Amino acid alphabets
//!
//! Ambiguity and non-standard codes are resolved as follows:
//! - B (D or N) becomes D, Z (E or Q) becomes E, J (L or I) becomes L
//! - U (selenocysteine) becomes C, O (pyrrolysine) becomes L
//! - X (unknown) becomes S, the most frequent residue
//! - `*` (terminator) becomes W, the rarest residue
//!
//! Every other character also becomes S.

use crate::alphabet::table_alphabet;
use crate::tables::{Rule, TableSpec};

const AA20_SPEC: TableSpec<'static, 20> = TableSpec {
    symbols: *b"ACDEFGHIKLMNPQRSTVWY",
    default_symbol: b'S',
    case_insensitive: true,
    rules: &[
        Rule::Fallback { from: b'B', target: b'D' },
        Rule::Fallback { from: b'J', target: b'L' },
        Rule::Fallback { from: b'O', target: b'L' },
        Rule::Fallback { from: b'U', target: b'C' },
        Rule::Fallback { from: b'X', target: b'S' },
        Rule::Fallback { from: b'Z', target: b'E' },
        Rule::Fallback { from: b'*', target: b'W' },
    ],
};

/// Murphy et al. (2000) 10-letter reduction: each symbol names its group
///
/// | symbol | group      |
/// |--------|------------|
/// | A      | A          |
/// | B      | D E N Q    |
/// | C      | C U        |
/// | F      | F W Y      |
/// | G      | G          |
/// | H      | H          |
/// | I      | I J L M V  |
/// | K      | K O R      |
/// | P      | P          |
/// | S      | S T X      |
const AA10_MURPHY_SPEC: TableSpec<'static, 10> = TableSpec {
    symbols: *b"ABCFGHIKPS",
    default_symbol: b'S',
    case_insensitive: true,
    rules: &[
        Rule::Fallback { from: b'D', target: b'B' },
        Rule::Fallback { from: b'E', target: b'B' },
        Rule::Fallback { from: b'N', target: b'B' },
        Rule::Fallback { from: b'Q', target: b'B' },
        Rule::Fallback { from: b'Z', target: b'B' },
        Rule::Fallback { from: b'U', target: b'C' },
        Rule::Fallback { from: b'W', target: b'F' },
        Rule::Fallback { from: b'Y', target: b'F' },
        Rule::Fallback { from: b'*', target: b'F' },
        Rule::Fallback { from: b'J', target: b'I' },
        Rule::Fallback { from: b'L', target: b'I' },
        Rule::Fallback { from: b'M', target: b'I' },
        Rule::Fallback { from: b'V', target: b'I' },
        Rule::Fallback { from: b'O', target: b'K' },
        Rule::Fallback { from: b'R', target: b'K' },
        Rule::Fallback { from: b'T', target: b'S' },
        Rule::Fallback { from: b'X', target: b'S' },
    ],
};

table_alphabet!(
    /// The 20 canonical amino acids
    Aa20, "aa20", 20, AA20_SPEC
);

table_alphabet!(
    /// Reduced 10-letter amino acid alphabet after Murphy et al.
    Aa10Murphy, "aa10murphy", 10, AA10_MURPHY_SPEC
);

#[allow(missing_docs)]
impl Aa20 {
    pub const A: Self = Self::with_rank(0);
    pub const C: Self = Self::with_rank(1);
    pub const D: Self = Self::with_rank(2);
    pub const E: Self = Self::with_rank(3);
    pub const F: Self = Self::with_rank(4);
    pub const G: Self = Self::with_rank(5);
    pub const H: Self = Self::with_rank(6);
    pub const I: Self = Self::with_rank(7);
    pub const K: Self = Self::with_rank(8);
    pub const L: Self = Self::with_rank(9);
    pub const M: Self = Self::with_rank(10);
    pub const N: Self = Self::with_rank(11);
    pub const P: Self = Self::with_rank(12);
    pub const Q: Self = Self::with_rank(13);
    pub const R: Self = Self::with_rank(14);
    pub const S: Self = Self::with_rank(15);
    pub const T: Self = Self::with_rank(16);
    pub const V: Self = Self::with_rank(17);
    pub const W: Self = Self::with_rank(18);
    pub const Y: Self = Self::with_rank(19);
}

#[allow(missing_docs)]
impl Aa10Murphy {
    pub const A: Self = Self::with_rank(0);
    pub const B: Self = Self::with_rank(1);
    pub const C: Self = Self::with_rank(2);
    pub const F: Self = Self::with_rank(3);
    pub const G: Self = Self::with_rank(4);
    pub const H: Self = Self::with_rank(5);
    pub const I: Self = Self::with_rank(6);
    pub const K: Self = Self::with_rank(7);
    pub const P: Self = Self::with_rank(8);
    pub const S: Self = Self::with_rank(9);
}

impl From<Aa20> for Aa10Murphy {
    fn from(value: Aa20) -> Self {
        use crate::alphabet::Alphabet;
        Self::from_char(value.to_char())
    }
}
