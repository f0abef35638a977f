//! Materialized alphabet descriptors
//!
//! Alphabets keep their tables in statics (leaves) or compute them from their
//! components (composites). An [`AlphabetDescriptor`] copies the observable
//! conversion behavior of any [`Alphabet`] into plain vectors, for inspection,
//! invariant checks and fingerprinting.

use crate::alphabet::Alphabet;
use crate::constants::{CHAR_DOMAIN_SIZE, FINGERPRINT_SEED};
use crate::hasher::DeterministicHasher;
use tracing::debug;

/// Conversion tables of one alphabet, by value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetDescriptor {
    /// Alphabet name
    pub name: &'static str,
    /// Number of ranks
    pub size: usize,
    /// Character of each rank
    pub rank_to_char: Vec<u8>,
    /// Rank of every byte value
    pub char_to_rank: Vec<usize>,
    /// Whether each byte value is a canonical character
    pub valid: Vec<bool>,
}

impl AlphabetDescriptor {
    /// Capture the conversion behavior of alphabet `A`
    pub fn of<A: Alphabet>() -> Self {
        let rank_to_char = (0..A::SIZE).map(|rank| A::from_rank_usize(rank).to_char()).collect();
        let (char_to_rank, valid) = (0..CHAR_DOMAIN_SIZE)
            .map(|c| {
                let c = c as u8;
                (A::from_char(c).to_rank_usize(), A::char_is_valid(c))
            })
            .unzip();

        Self {
            name: A::name(),
            size: A::SIZE,
            rank_to_char,
            char_to_rank,
            valid,
        }
    }

    /// Check that conversion is total and that it always lands on a valid character
    ///
    /// Returns the bytes that violate the property (empty when the alphabet is
    /// well formed).
    pub fn verify(&self) -> Vec<u8> {
        let violations: Vec<u8> = self
            .char_to_rank
            .iter()
            .enumerate()
            .filter(|&(_, &rank)| {
                rank >= self.size || !self.valid[self.rank_to_char[rank] as usize]
            })
            .map(|(c, _)| c as u8)
            .collect();

        debug!(
            "Verified {}: {} ranks, {} valid chars, {} violations",
            self.name,
            self.size,
            self.num_valid_chars(),
            violations.len()
        );
        violations
    }

    /// Check that every rank survives a trip through its character
    ///
    /// Holds for every leaf alphabet. Composites whose character form covers
    /// only the primary component do not round-trip the other components.
    pub fn canonical_round_trip(&self) -> bool {
        self.rank_to_char
            .iter()
            .enumerate()
            .all(|(rank, &c)| self.char_to_rank[c as usize] == rank)
    }

    /// Number of canonical characters
    pub fn num_valid_chars(&self) -> usize {
        self.valid.iter().filter(|&&v| v).count()
    }

    /// Bytes converted by fallback, with the character they become
    pub fn fallbacks(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.valid
            .iter()
            .enumerate()
            .filter(|&(_, &valid)| !valid)
            .map(|(c, _)| (c as u8, self.rank_to_char[self.char_to_rank[c]]))
    }

    /// 64-bit fingerprint of the conversion tables
    ///
    /// Identical tables give identical fingerprints within one build.
    pub fn fingerprint(&self) -> u64 {
        let hasher = DeterministicHasher::new(FINGERPRINT_SEED);
        let ranks: Vec<u8> = self
            .char_to_rank
            .iter()
            .flat_map(|&rank| (rank as u64).to_le_bytes())
            .collect();
        let valid: Vec<u8> = self.valid.iter().map(|&v| v as u8).collect();
        hasher.hash_parts([
            self.name.as_bytes(),
            self.rank_to_char.as_slice(),
            ranks.as_slice(),
            valid.as_slice(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabets::{Aa20, Dna4, Dna5, Phred42};
    use crate::composite::{Masked, Qualified};

    #[test]
    fn test_descriptor_tables() {
        let descriptor = AlphabetDescriptor::of::<Dna4>();
        assert_eq!(descriptor.size, 4);
        assert_eq!(descriptor.rank_to_char, b"ACGT");
        assert_eq!(descriptor.char_to_rank[b'U' as usize], 3);
        assert_eq!(descriptor.char_to_rank.len(), 256);
        assert_eq!(descriptor.num_valid_chars(), 10);
    }

    #[test]
    fn test_leaf_invariants() {
        for descriptor in [
            AlphabetDescriptor::of::<Dna5>(),
            AlphabetDescriptor::of::<Aa20>(),
            AlphabetDescriptor::of::<Phred42>(),
        ] {
            assert!(descriptor.verify().is_empty(), "{}", descriptor.name);
            assert!(descriptor.canonical_round_trip(), "{}", descriptor.name);
        }
    }

    #[test]
    fn test_composite_descriptors() {
        let masked = AlphabetDescriptor::of::<Masked<Dna4>>();
        assert!(masked.verify().is_empty());
        assert!(masked.canonical_round_trip());
        assert_eq!(masked.rank_to_char, b"ACGTacgt");

        // Only the primary component is visible: rank 4 (A, q=1) prints as A
        let qualified = AlphabetDescriptor::of::<Qualified<Dna4, Phred42>>();
        assert!(qualified.verify().is_empty());
        assert!(!qualified.canonical_round_trip());
        assert_eq!(qualified.size, 168);
    }

    #[test]
    fn test_fallbacks() {
        let descriptor = AlphabetDescriptor::of::<Aa20>();
        let fallbacks: Vec<_> = descriptor.fallbacks().collect();
        assert!(fallbacks.contains(&(b'X', b'S')));
        assert!(fallbacks.contains(&(b'*', b'W')));
        assert_eq!(fallbacks.len(), 256 - 40);
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let a = AlphabetDescriptor::of::<Dna5>();
        let b = AlphabetDescriptor::of::<Dna5>();
        assert_eq!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), AlphabetDescriptor::of::<Dna4>().fingerprint());
    }
}
