//! RNA secondary structure in dot-bracket notation

use crate::alphabet::table_alphabet;
use crate::tables::TableSpec;

const DOT_BRACKET3_SPEC: TableSpec<'static, 3> = TableSpec {
    symbols: *b".()",
    default_symbol: b'.',
    case_insensitive: false,
    rules: &[],
};

table_alphabet!(
    /// Unpaired (`.`), paired upstream (`(`) or paired downstream (`)`)
    ///
    /// Pseudoknots are not representable; every other character reads as
    /// unpaired.
    DotBracket3, "dot_bracket3", 3, DOT_BRACKET3_SPEC
);

impl DotBracket3 {
    /// Unpaired position
    pub const UNPAIRED: Self = Self::with_rank(0);
    /// Opening bracket, paired with a downstream position
    pub const PAIR_OPEN: Self = Self::with_rank(1);
    /// Closing bracket, paired with an upstream position
    pub const PAIR_CLOSE: Self = Self::with_rank(2);

    /// Whether the position is part of a base pair
    pub fn is_pair(self) -> bool {
        self.rank != 0
    }

    /// Whether the position pairs with a downstream position
    pub fn is_pair_open(self) -> bool {
        self == Self::PAIR_OPEN
    }

    /// Whether the position pairs with an upstream position
    pub fn is_pair_close(self) -> bool {
        self == Self::PAIR_CLOSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;

    #[test]
    fn test_dot_bracket() {
        let parsed: Vec<DotBracket3> = b"((..))".iter().map(|&c| DotBracket3::from_char(c)).collect();
        assert!(parsed[0].is_pair_open());
        assert!(parsed[5].is_pair_close());
        assert!(!parsed[2].is_pair());
        assert_eq!(DotBracket3::from_char(b'['), DotBracket3::UNPAIRED);
        assert!(!DotBracket3::char_is_valid(b'['));
    }
}
