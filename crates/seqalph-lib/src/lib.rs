// seqalph: compact rank encodings for biological sequence alphabets
//
// Alphabet values stored as minimal integer ranks, compile-time conversion
// tables, and mixed-radix composites of several alphabets.

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod rank;
pub mod tables;
pub mod mixed_radix;
pub mod alphabet;
pub mod alphabets;
pub mod composite;
pub mod validate;
pub mod hasher;
pub mod descriptor;
pub mod registry;
pub mod config;
pub mod batch;

// Re-export common types at crate root
pub use alphabet::{Alphabet, NucleotideAlphabet, QualityAlphabet, Semialphabet};
pub use composite::{Component, CompositeAlphabet, Gapped, Masked, Qualified, StructuredRna, Tuple2, Tuple3, Tuple4};
pub use error::AlphabetError;
pub use rank::RankType;
pub use mixed_radix::MixedRadix;
pub use validate::{assign_chars, assign_chars_strictly, validate_chars};
pub use descriptor::AlphabetDescriptor;
pub use registry::AlphabetKind;
pub use config::CodecConfiguration;
pub use batch::{BatchOutcome, BatchValidator};

/// Version information
pub fn version() -> (u8, u8, u8) {
    constants::VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let (major, minor, patch) = version();
        assert_eq!(major, 0);
        assert_eq!(minor, 1);
        assert_eq!(patch, 0);
    }
}
