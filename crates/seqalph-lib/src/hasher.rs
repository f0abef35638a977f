//! Deterministic hasher for table fingerprints using ahash.
//!
//! Uses AHasher with explicit seeds, so two tables with identical contents hash
//! to the same value within one build. Fingerprints are not stable across
//! platforms or ahash versions and must not be persisted.

use ahash::RandomState;
use std::hash::{BuildHasher, Hasher};

/// A deterministic hasher with a seeded state
#[derive(Clone)]
pub struct DeterministicHasher {
    seed: u64,
    state: RandomState,
}

impl DeterministicHasher {
    /// Create a new deterministic hasher with the given seed
    pub fn new(seed: u64) -> Self {
        let state = RandomState::with_seeds(seed, !seed, seed, !seed);
        Self { seed, state }
    }

    /// Hash a u64 value
    #[inline]
    pub fn hash_u64(&self, value: u64) -> u64 {
        let mut hasher = self.state.build_hasher();
        hasher.write_u64(value);
        hasher.finish()
    }

    /// Hash a byte slice, length-prefixed so that concatenations differ
    pub fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        let mut hasher = self.state.build_hasher();
        hasher.write_usize(bytes.len());
        hasher.write(bytes);
        hasher.finish()
    }

    /// Hash a sequence of byte slices as one message
    pub fn hash_parts<'a>(&self, parts: impl IntoIterator<Item = &'a [u8]>) -> u64 {
        let mut hasher = self.state.build_hasher();
        for part in parts {
            hasher.write_usize(part.len());
            hasher.write(part);
        }
        hasher.finish()
    }

    /// Get the seed value
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_hashing() {
        let hasher1 = DeterministicHasher::new(42);
        let hasher2 = DeterministicHasher::new(42);
        let hasher3 = DeterministicHasher::new(43);

        assert_eq!(hasher1.hash_bytes(b"ACGT"), hasher2.hash_bytes(b"ACGT"));
        assert_ne!(hasher1.hash_bytes(b"ACGT"), hasher3.hash_bytes(b"ACGT"));
        assert_eq!(hasher1.hash_u64(7), hasher2.hash_u64(7));
    }

    #[test]
    fn test_parts_are_delimited() {
        let hasher = DeterministicHasher::new(1);
        let a = hasher.hash_parts([b"AC".as_slice(), b"GT".as_slice()]);
        let b = hasher.hash_parts([b"ACG".as_slice(), b"T".as_slice()]);
        assert_ne!(a, b);
        assert_eq!(hasher.seed(), 1);
    }
}
