//! Error types
//!
//! Converting between characters and ranks never fails: unknown characters are
//! canonicalized by the alphabet's tables. Errors only arise at the opt-in strict
//! boundary, when laying out composites at runtime, and in configuration.

use thiserror::Error;

/// Error type for alphabet operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// A character is not a valid representation in the target alphabet
    #[error("Invalid character {:?} at position {position} for alphabet {alphabet}", printable(.character))]
    InvalidCharacter {
        /// The offending byte
        character: u8,
        /// 0-based offset of the byte in the consumed input
        position: usize,
        /// Name of the alphabet that rejected it
        alphabet: &'static str,
    },
    /// The product of component sizes does not fit the rank width
    #[error("Composite size overflow: product of {sizes:?} exceeds maximum rank {max_rank}")]
    CompositeOverflow {
        /// Component sizes of the rejected layout
        sizes: Vec<usize>,
        /// Largest representable rank
        max_rank: u64,
    },
    /// A composite component has size 0
    #[error("Component {index} of a composite has size 0")]
    EmptyComponent {
        /// Index of the empty component
        index: usize,
    },
    /// No alphabet is registered under the given name
    #[error("Unknown alphabet: {0}")]
    UnknownAlphabet(String),
    /// The configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The worker pool for batch conversion could not be created
    #[error("Failed to create thread pool: {0}")]
    ThreadPool(String),
}

fn printable(byte: &u8) -> char {
    char::from(*byte)
}
