//! Conversion table construction
//!
//! Every table-backed alphabet is described declaratively by a [`TableSpec`]:
//! its canonical symbols in rank order, the symbol unknown characters fall back
//! to, and an ordered list of [`Rule`]s for extra spellings. [`TableSpec::build`]
//! is a `const fn`, so concrete alphabets evaluate it into `static` tables at
//! compile time and pay nothing at runtime.
//!
//! Construction order:
//! 1. every byte maps to the default symbol's rank
//! 2. canonical symbols map to their rank (both cases if case-insensitive)
//! 3. rules are applied in order; later rules overwrite earlier ones
//!
//! The result is total over all 256 byte values.

use crate::constants::CHAR_DOMAIN_SIZE;

/// An extra character mapping applied after the canonical symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `alias` is an accepted spelling of canonical `target` (e.g. U for T)
    ///
    /// Aliases are valid characters for strict consumers.
    Alias {
        /// The additional character
        alias: u8,
        /// Canonical symbol it resolves to
        target: u8,
    },
    /// `from` is silently converted to canonical `target`
    ///
    /// Fallback characters are not valid for strict consumers.
    Fallback {
        /// The non-canonical character
        from: u8,
        /// Canonical symbol it resolves to
        target: u8,
    },
    /// Every byte in `start..=end` is converted to canonical `target`
    FallbackRange {
        /// First byte of the range
        start: u8,
        /// Last byte of the range (inclusive)
        end: u8,
        /// Canonical symbol the range resolves to
        target: u8,
    },
}

/// Declarative description of an alphabet's conversion tables
#[derive(Debug, Clone, Copy)]
pub struct TableSpec<'a, const N: usize> {
    /// Canonical symbols in rank order
    pub symbols: [u8; N],
    /// Canonical symbol used for every byte not otherwise mapped
    pub default_symbol: u8,
    /// Map upper- and lower-case forms of symbols and rule characters alike
    pub case_insensitive: bool,
    /// Extra mappings, applied in order
    pub rules: &'a [Rule],
}

/// The two conversion tables of an alphabet, plus the validity table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetTables<const N: usize> {
    /// Character of each rank
    pub rank_to_char: [u8; N],
    /// Rank of every byte value
    pub char_to_rank: [u8; CHAR_DOMAIN_SIZE],
    /// Whether a byte is a canonical (round-tripping) representation
    pub valid: [bool; CHAR_DOMAIN_SIZE],
}

/// Build `N` consecutive symbols starting at `first` (quality score ranges)
pub const fn contiguous_symbols<const N: usize>(first: u8) -> [u8; N] {
    let mut symbols = [0u8; N];
    let mut i = 0;
    while i < N {
        symbols[i] = first + i as u8;
        i += 1;
    }
    symbols
}

impl<const N: usize> TableSpec<'_, N> {
    /// Rank of a canonical symbol; panics (compile error in const context) if absent
    pub const fn rank_of(&self, symbol: u8) -> u8 {
        let mut r = 0;
        while r < N {
            if self.symbols[r] == symbol {
                return r as u8;
            }
            r += 1;
        }
        panic!("rule target is not a canonical symbol");
    }

    /// Build the conversion tables
    pub const fn build(&self) -> AlphabetTables<N> {
        if N == 0 || N > CHAR_DOMAIN_SIZE {
            panic!("table-backed alphabets must have between 1 and 256 symbols");
        }

        let default_rank = self.rank_of(self.default_symbol);
        let mut tables = AlphabetTables {
            rank_to_char: self.symbols,
            char_to_rank: [default_rank; CHAR_DOMAIN_SIZE],
            valid: [false; CHAR_DOMAIN_SIZE],
        };

        let mut r = 0;
        while r < N {
            let symbol = self.symbols[r];
            if tables.valid[symbol as usize] {
                panic!("duplicate canonical symbol");
            }
            tables = self.with_mapping(tables, symbol, r as u8, true);
            r += 1;
        }

        let mut i = 0;
        while i < self.rules.len() {
            tables = match self.rules[i] {
                Rule::Alias { alias, target } => {
                    self.with_mapping(tables, alias, self.rank_of(target), true)
                }
                Rule::Fallback { from, target } => {
                    self.with_mapping(tables, from, self.rank_of(target), false)
                }
                Rule::FallbackRange { start, end, target } => {
                    let rank = self.rank_of(target);
                    let mut c = start as usize;
                    while c <= end as usize {
                        tables.char_to_rank[c] = rank;
                        tables.valid[c] = false;
                        c += 1;
                    }
                    tables
                }
            };
            i += 1;
        }

        tables
    }

    const fn with_mapping(&self, mut tables: AlphabetTables<N>, c: u8, rank: u8, is_valid: bool) -> AlphabetTables<N> {
        tables.char_to_rank[c as usize] = rank;
        tables.valid[c as usize] = is_valid;
        if self.case_insensitive {
            let lower = c.to_ascii_lowercase() as usize;
            let upper = c.to_ascii_uppercase() as usize;
            tables.char_to_rank[lower] = rank;
            tables.valid[lower] = is_valid;
            tables.char_to_rank[upper] = rank;
            tables.valid[upper] = is_valid;
        }
        tables
    }
}

impl<const N: usize> AlphabetTables<N> {
    /// Character of a rank
    #[inline]
    pub const fn char_of(&self, rank: u8) -> u8 {
        self.rank_to_char[rank as usize]
    }

    /// Rank of a character (total)
    #[inline]
    pub const fn rank_of(&self, c: u8) -> u8 {
        self.char_to_rank[c as usize]
    }

    /// Whether a character is a canonical representation
    #[inline]
    pub const fn is_valid(&self, c: u8) -> bool {
        self.valid[c as usize]
    }

    /// Bytes that are silently converted (not valid, mapped by fallback)
    pub fn fallback_chars(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..=u8::MAX)
            .filter(|&c| !self.is_valid(c))
            .map(|c| (c, self.rank_of(c)))
    }
}
