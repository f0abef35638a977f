//! Runtime selection of alphabets
//!
//! Alphabets are static types; [`AlphabetKind`] names them at runtime (for
//! configuration files and the command line) and the `dispatch_on_*` macros
//! map a kind back to its type:
//!
//! ```
//! use seqalph_lib::registry::AlphabetKind;
//! use seqalph_lib::Semialphabet;
//!
//! let kind: AlphabetKind = "aa20".parse().unwrap();
//! let size = seqalph_lib::dispatch_on_alphabet!(kind, A => A::SIZE);
//! assert_eq!(size, 20);
//! ```

use crate::descriptor::AlphabetDescriptor;
use crate::error::AlphabetError;
use std::fmt;
use std::str::FromStr;

/// Every concrete alphabet with a character form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlphabetKind {
    /// [`crate::alphabets::Dna4`]
    Dna4,
    /// [`crate::alphabets::Dna5`]
    Dna5,
    /// [`crate::alphabets::Rna4`]
    Rna4,
    /// [`crate::alphabets::Rna5`]
    Rna5,
    /// [`crate::alphabets::Aa20`]
    Aa20,
    /// [`crate::alphabets::Aa10Murphy`]
    Aa10Murphy,
    /// [`crate::alphabets::Phred42`]
    Phred42,
    /// [`crate::alphabets::Phred63`]
    Phred63,
    /// [`crate::alphabets::Phred94`]
    Phred94,
    /// [`crate::alphabets::Phred68Legacy`]
    Phred68Legacy,
    /// [`crate::alphabets::DotBracket3`]
    DotBracket3,
    /// [`crate::alphabets::Gap`]
    Gap,
}

impl AlphabetKind {
    /// All registered alphabets
    pub const ALL: [AlphabetKind; 12] = [
        Self::Dna4,
        Self::Dna5,
        Self::Rna4,
        Self::Rna5,
        Self::Aa20,
        Self::Aa10Murphy,
        Self::Phred42,
        Self::Phred63,
        Self::Phred94,
        Self::Phred68Legacy,
        Self::DotBracket3,
        Self::Gap,
    ];

    /// Name used on the command line and in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dna4 => "dna4",
            Self::Dna5 => "dna5",
            Self::Rna4 => "rna4",
            Self::Rna5 => "rna5",
            Self::Aa20 => "aa20",
            Self::Aa10Murphy => "aa10murphy",
            Self::Phred42 => "phred42",
            Self::Phred63 => "phred63",
            Self::Phred94 => "phred94",
            Self::Phred68Legacy => "phred68legacy",
            Self::DotBracket3 => "dot_bracket3",
            Self::Gap => "gap",
        }
    }

    /// Number of values
    pub fn size(self) -> usize {
        crate::dispatch_on_alphabet!(self, A => <A as crate::alphabet::Semialphabet>::SIZE)
    }

    /// Whether this is a quality score alphabet
    pub const fn is_quality(self) -> bool {
        matches!(
            self,
            Self::Phred42 | Self::Phred63 | Self::Phred94 | Self::Phred68Legacy
        )
    }

    /// Whether this is a nucleotide alphabet
    pub const fn is_nucleotide(self) -> bool {
        matches!(self, Self::Dna4 | Self::Dna5 | Self::Rna4 | Self::Rna5)
    }

    /// Whether values can carry a soft mask, i.e. every canonical symbol is
    /// an upper case letter with a distinct lower case form
    pub fn is_maskable(self) -> bool {
        self.descriptor().rank_to_char.iter().all(u8::is_ascii_uppercase)
    }

    /// Materialize the conversion tables
    pub fn descriptor(self) -> AlphabetDescriptor {
        crate::dispatch_on_alphabet!(self, A => AlphabetDescriptor::of::<A>())
    }
}

impl fmt::Display for AlphabetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlphabetKind {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| AlphabetError::UnknownAlphabet(s.to_string()))
    }
}

/// Run `$body` with `$A` bound to the alphabet type named by an [`AlphabetKind`]
#[macro_export]
macro_rules! dispatch_on_alphabet {
    ($kind:expr, $A:ident => $body:expr) => {
        match $kind {
            $crate::registry::AlphabetKind::Dna4 => { type $A = $crate::alphabets::Dna4; $body }
            $crate::registry::AlphabetKind::Dna5 => { type $A = $crate::alphabets::Dna5; $body }
            $crate::registry::AlphabetKind::Rna4 => { type $A = $crate::alphabets::Rna4; $body }
            $crate::registry::AlphabetKind::Rna5 => { type $A = $crate::alphabets::Rna5; $body }
            $crate::registry::AlphabetKind::Aa20 => { type $A = $crate::alphabets::Aa20; $body }
            $crate::registry::AlphabetKind::Aa10Murphy => { type $A = $crate::alphabets::Aa10Murphy; $body }
            $crate::registry::AlphabetKind::Phred42 => { type $A = $crate::alphabets::Phred42; $body }
            $crate::registry::AlphabetKind::Phred63 => { type $A = $crate::alphabets::Phred63; $body }
            $crate::registry::AlphabetKind::Phred94 => { type $A = $crate::alphabets::Phred94; $body }
            $crate::registry::AlphabetKind::Phred68Legacy => { type $A = $crate::alphabets::Phred68Legacy; $body }
            $crate::registry::AlphabetKind::DotBracket3 => { type $A = $crate::alphabets::DotBracket3; $body }
            $crate::registry::AlphabetKind::Gap => { type $A = $crate::alphabets::Gap; $body }
        }
    };
}

/// Like [`dispatch_on_alphabet!`] for quality alphabets; other kinds run `$otherwise`
#[macro_export]
macro_rules! dispatch_on_quality {
    ($kind:expr, $Q:ident => $body:expr, _ => $otherwise:expr) => {
        match $kind {
            $crate::registry::AlphabetKind::Phred42 => { type $Q = $crate::alphabets::Phred42; $body }
            $crate::registry::AlphabetKind::Phred63 => { type $Q = $crate::alphabets::Phred63; $body }
            $crate::registry::AlphabetKind::Phred94 => { type $Q = $crate::alphabets::Phred94; $body }
            $crate::registry::AlphabetKind::Phred68Legacy => { type $Q = $crate::alphabets::Phred68Legacy; $body }
            _ => $otherwise,
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{QualityAlphabet, Semialphabet};

    #[test]
    fn test_names_round_trip() {
        for kind in AlphabetKind::ALL {
            assert_eq!(kind.name().parse::<AlphabetKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!("DNA5".parse::<AlphabetKind>(), Ok(AlphabetKind::Dna5));
        assert_eq!("dot-bracket3".parse::<AlphabetKind>(), Ok(AlphabetKind::DotBracket3));
        assert_eq!(
            "dna16".parse::<AlphabetKind>(),
            Err(AlphabetError::UnknownAlphabet("dna16".to_string()))
        );
    }

    #[test]
    fn test_sizes() {
        assert_eq!(AlphabetKind::Dna4.size(), 4);
        assert_eq!(AlphabetKind::Aa10Murphy.size(), 10);
        assert_eq!(AlphabetKind::Phred68Legacy.size(), 68);
        assert_eq!(AlphabetKind::Gap.size(), 1);
    }

    #[test]
    fn test_classification() {
        let qualities: Vec<_> = AlphabetKind::ALL.into_iter().filter(|k| k.is_quality()).collect();
        assert_eq!(qualities.len(), 4);
        assert!(AlphabetKind::Rna5.is_nucleotide());
        assert!(!AlphabetKind::Aa20.is_nucleotide());
        assert!(!AlphabetKind::Gap.is_quality());
    }

    #[test]
    fn test_maskable() {
        let maskable: Vec<_> = AlphabetKind::ALL.into_iter().filter(|k| k.is_maskable()).collect();
        assert_eq!(
            maskable,
            vec![
                AlphabetKind::Dna4,
                AlphabetKind::Dna5,
                AlphabetKind::Rna4,
                AlphabetKind::Rna5,
                AlphabetKind::Aa20,
                AlphabetKind::Aa10Murphy,
            ]
        );
    }

    #[test]
    fn test_dispatch_on_quality() {
        let offset = |kind: AlphabetKind| {
            crate::dispatch_on_quality!(kind, Q => Some(Q::from_rank_usize(0).to_phred()), _ => None)
        };
        assert_eq!(offset(AlphabetKind::Phred68Legacy), Some(-5));
        assert_eq!(offset(AlphabetKind::Phred42), Some(0));
        assert_eq!(offset(AlphabetKind::Dna4), None);
    }

    #[test]
    fn test_descriptor_by_kind() {
        let descriptor = AlphabetKind::Dna5.descriptor();
        assert_eq!(descriptor.name, "dna5");
        assert_eq!(descriptor.rank_to_char, b"ACGNT");
    }
}
