//! Codec configuration
//!
//! Selects the alphabets used by the batch validator and the command line
//! tool, and checks that the resulting composite layout is representable.

use crate::constants::{is_valid_num_threads, DEFAULT_NUM_THREADS, MAX_THREADS};
use crate::error::AlphabetError;
use crate::mixed_radix::MixedRadix;
use crate::registry::AlphabetKind;

/// Configuration of a sequence codec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfiguration {
    /// Alphabet of the sequence letters
    pub alphabet: AlphabetKind,

    /// Optional quality alphabet paired with every letter
    pub quality: Option<AlphabetKind>,

    /// Carry a soft mask (lower case) with every letter
    pub masked: bool,

    /// Reject non-canonical characters instead of converting them
    pub strict: bool,

    /// Number of threads for batch validation (0 = all available cores)
    pub num_threads: usize,

    /// Verbose output
    pub verbose: bool,
}

impl Default for CodecConfiguration {
    fn default() -> Self {
        Self {
            alphabet: AlphabetKind::Dna5,
            quality: None,
            masked: false,
            strict: true,
            num_threads: DEFAULT_NUM_THREADS,
            verbose: false,
        }
    }
}

impl CodecConfiguration {
    /// Create a validated configuration for the given sequence alphabet
    pub fn new(alphabet: AlphabetKind) -> Result<Self, AlphabetError> {
        let config = Self {
            alphabet,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), AlphabetError> {
        if let Some(quality) = self.quality {
            if !quality.is_quality() {
                return Err(AlphabetError::InvalidConfiguration(format!(
                    "{} is not a quality alphabet",
                    quality
                )));
            }
        }

        // Masking is expressed through letter case
        if self.masked && !self.alphabet.is_maskable() {
            return Err(AlphabetError::InvalidConfiguration(format!(
                "{} cannot be masked: its symbols are not upper case letters",
                self.alphabet
            )));
        }

        if !is_valid_num_threads(self.num_threads) {
            return Err(AlphabetError::InvalidConfiguration(format!(
                "num_threads must be at most {}, got {}",
                MAX_THREADS, self.num_threads
            )));
        }

        self.layout()?;
        Ok(())
    }

    /// Component sizes of the configured composite, primary component first
    pub fn component_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![self.alphabet.size()];
        if self.masked {
            sizes.push(2);
        }
        if let Some(quality) = self.quality {
            sizes.push(quality.size());
        }
        sizes
    }

    /// Mixed-radix layout of the configured composite, checked against a 32-bit rank
    pub fn layout(&self) -> Result<MixedRadix, AlphabetError> {
        MixedRadix::for_rank::<u32>(&self.component_sizes())
    }

    /// Log configuration parameters via tracing
    pub fn print(&self) {
        tracing::info!("Codec Configuration:");
        tracing::info!("  alphabet = {}", self.alphabet);
        match self.quality {
            Some(quality) => tracing::info!("  quality = {}", quality),
            None => tracing::debug!("  quality = none"),
        }
        tracing::info!("  masked = {}", self.masked);
        tracing::info!("  strict = {}", self.strict);
        if self.num_threads == 0 {
            tracing::debug!("  num_threads = all available cores");
        } else {
            tracing::debug!("  num_threads = {}", self.num_threads);
        }
        tracing::debug!("  verbose = {}", self.verbose);
    }
}
