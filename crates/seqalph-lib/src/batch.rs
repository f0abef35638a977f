//! Parallel conversion of many records
//!
//! Converts a batch of byte strings into alphabet values on a rayon thread
//! pool, either strictly (the first invalid character fails the record) or
//! leniently (invalid characters are converted).

use crate::alphabet::Alphabet;
use crate::config::CodecConfiguration;
use crate::error::AlphabetError;
use crate::validate::{assign_chars, assign_chars_strictly};
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// Result of converting a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome<A> {
    /// One entry per input record, in input order
    pub sequences: Vec<Result<Vec<A>, AlphabetError>>,
    /// Number of records converted successfully
    pub num_valid: usize,
    /// Number of records rejected
    pub num_invalid: usize,
}

impl<A> BatchOutcome<A> {
    /// Whether every record converted
    pub fn all_valid(&self) -> bool {
        self.num_invalid == 0
    }

    /// Index and error of every rejected record
    pub fn errors(&self) -> impl Iterator<Item = (usize, &AlphabetError)> + '_ {
        self.sequences
            .iter()
            .enumerate()
            .filter_map(|(i, result)| result.as_ref().err().map(|e| (i, e)))
    }
}

/// Converts batches of records on a dedicated thread pool
pub struct BatchValidator {
    pool: rayon::ThreadPool,
    strict: bool,
}

impl BatchValidator {
    /// Create a validator from a configuration
    ///
    /// The pool is sized to `config.num_threads`; `0` uses all cores.
    pub fn new(config: &CodecConfiguration) -> Result<Self, AlphabetError> {
        config.validate()?;
        Self::with_threads(config.num_threads, config.strict)
    }

    /// Create a validator with an explicit thread count
    pub fn with_threads(num_threads: usize, strict: bool) -> Result<Self, AlphabetError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| AlphabetError::ThreadPool(e.to_string()))?;
        debug!("Batch validator using {} threads", pool.current_num_threads());
        Ok(Self { pool, strict })
    }

    /// Whether records with non-canonical characters are rejected
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Number of worker threads
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Convert every record to alphabet `A`
    pub fn run<A, T>(&self, records: &[T]) -> BatchOutcome<A>
    where
        A: Alphabet,
        T: AsRef<[u8]> + Sync,
    {
        info!(
            "Converting {} records to {} ({})",
            records.len(),
            A::name(),
            if self.strict { "strict" } else { "lenient" }
        );

        let strict = self.strict;
        let sequences: Vec<Result<Vec<A>, AlphabetError>> = self.pool.install(|| {
            records
                .par_iter()
                .map(|record| {
                    let bytes = record.as_ref();
                    if strict {
                        assign_chars_strictly::<A>(bytes)
                    } else {
                        Ok(assign_chars::<A>(bytes))
                    }
                })
                .collect()
        });

        let num_invalid = sequences.iter().filter(|r| r.is_err()).count();
        let num_valid = sequences.len() - num_invalid;
        if num_invalid > 0 {
            warn!("{} of {} records rejected", num_invalid, sequences.len());
        }
        info!("  Converted {} records", num_valid);

        BatchOutcome {
            sequences,
            num_valid,
            num_invalid,
        }
    }
}
