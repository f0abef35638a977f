//! Strict validation boundary
//!
//! `assign_char` silently converts any byte. Callers that must not accept
//! converted input run it through [`validate_chars`] first: valid characters
//! pass through unchanged, the first invalid one is reported as
//! [`AlphabetError::InvalidCharacter`] and the iterator stops.

use crate::alphabet::Alphabet;
use crate::error::AlphabetError;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Iterator returned by [`validate_chars`]
#[derive(Debug, Clone)]
pub struct ValidateChars<A, I> {
    chars: I,
    position: usize,
    done: bool,
    _alphabet: PhantomData<fn() -> A>,
}

/// Check a character stream against alphabet `A`
///
/// ```
/// use seqalph_lib::alphabets::Dna5;
/// use seqalph_lib::validate::validate_chars;
///
/// let mut iter = validate_chars::<Dna5, _>(b"ACGPTA".iter().copied());
/// assert_eq!(iter.next(), Some(Ok(b'A')));
/// assert_eq!(iter.next(), Some(Ok(b'C')));
/// assert_eq!(iter.next(), Some(Ok(b'G')));
/// assert!(iter.next().unwrap().is_err());
/// assert_eq!(iter.next(), None);
/// ```
pub fn validate_chars<A: Alphabet, I: IntoIterator<Item = u8>>(chars: I) -> ValidateChars<A, I::IntoIter> {
    ValidateChars {
        chars: chars.into_iter(),
        position: 0,
        done: false,
        _alphabet: PhantomData,
    }
}

impl<A: Alphabet, I: Iterator<Item = u8>> Iterator for ValidateChars<A, I> {
    type Item = Result<u8, AlphabetError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(c) = self.chars.next() else {
            self.done = true;
            return None;
        };

        let position = self.position;
        self.position += 1;
        if A::char_is_valid(c) {
            Some(Ok(c))
        } else {
            self.done = true;
            Some(Err(AlphabetError::InvalidCharacter {
                character: c,
                position,
                alphabet: A::name(),
            }))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.chars.size_hint().1)
        }
    }
}

impl<A: Alphabet, I: Iterator<Item = u8>> FusedIterator for ValidateChars<A, I> {}

/// Convert a byte string, failing on the first non-canonical character
pub fn assign_chars_strictly<A: Alphabet>(chars: &[u8]) -> Result<Vec<A>, AlphabetError> {
    validate_chars::<A, _>(chars.iter().copied())
        .map(|c| c.map(A::from_char))
        .collect()
}

/// Convert a byte string, canonicalizing unknown characters
pub fn assign_chars<A: Alphabet>(chars: &[u8]) -> Vec<A> {
    chars.iter().map(|&c| A::from_char(c)).collect()
}

/// Render values as their characters
pub fn to_chars<A: Alphabet>(values: &[A]) -> Vec<u8> {
    values.iter().map(|value| value.to_char()).collect()
}

/// Render values as a `String`
pub fn to_string<A: Alphabet>(values: &[A]) -> String {
    values.iter().map(|value| char::from(value.to_char())).collect()
}
