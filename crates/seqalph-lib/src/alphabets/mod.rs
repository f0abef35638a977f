//! Concrete alphabets
//!
//! Every table-backed alphabet stores a single `u8` rank and builds its
//! conversion tables at compile time.

mod aminoacid;
mod gap;
mod mask;
mod nucleotide;
mod quality;
mod structure;

pub use aminoacid::{Aa10Murphy, Aa20};
pub use gap::Gap;
pub use mask::Mask;
pub use nucleotide::{Dna4, Dna5, Rna4, Rna5};
pub use quality::{Phred42, Phred63, Phred68Legacy, Phred94};
pub use structure::DotBracket3;
