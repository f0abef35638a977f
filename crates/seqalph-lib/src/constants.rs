//! Constants shared across the library
//!
//! Character domains, limits for batch conversion, and the seed used for
//! alphabet fingerprints.

/// Version number
pub const VERSION: (u8, u8, u8) = (0, 1, 0);

/// Number of distinct input characters (all byte values)
pub const CHAR_DOMAIN_SIZE: usize = 256;

/// Seed for table fingerprints
pub const FINGERPRINT_SEED: u64 = 0x5EA1_A1F4;

/// Upper bound for the number of worker threads in batch validation
pub const MAX_THREADS: usize = 1024;

/// Default number of worker threads (0 = all available cores)
pub const DEFAULT_NUM_THREADS: usize = 0;

/// Largest phred score any quality alphabet can report
pub const MAX_PHRED: i8 = 93;

/// Offset of the Sanger/Illumina 1.8+ quality encoding ('!' is phred 0)
pub const SANGER_PHRED_OFFSET: u8 = b'!';

/// Offset of the Solexa/Illumina 1.0 encoding (';' is phred -5)
pub const SOLEXA_PHRED_OFFSET: u8 = b';';

/// Check if a thread count is usable (0 means "all cores")
#[inline]
pub const fn is_valid_num_threads(num_threads: usize) -> bool {
    num_threads <= MAX_THREADS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_domain_covers_bytes() {
        assert_eq!(CHAR_DOMAIN_SIZE, u8::MAX as usize + 1);
    }

    #[test]
    fn test_thread_limits() {
        assert!(is_valid_num_threads(DEFAULT_NUM_THREADS));
        assert!(is_valid_num_threads(MAX_THREADS));
        assert!(!is_valid_num_threads(MAX_THREADS + 1));
    }

    #[test]
    fn test_phred_offsets() {
        // '~' is the last printable character and the highest Sanger score
        assert_eq!((b'~' - SANGER_PHRED_OFFSET) as i8, MAX_PHRED);
        assert_eq!(SOLEXA_PHRED_OFFSET as i8 - SANGER_PHRED_OFFSET as i8, 26);
    }
}
