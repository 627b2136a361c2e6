//! Error types for index construction and lookup.

use thiserror::Error;

/// Errors reported by [`StateSetIndex`](super::StateSetIndex).
///
/// Not finding a match is not an error; lookups report it as `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The prefix length was zero.
    ///
    /// At least one character of every string must be indexed.
    #[error("Prefix length must be at least 1")]
    ZeroPrefixLength,

    /// The alphabet mapping returned `None` for a character.
    ///
    /// Mappings must be total over the characters of the dictionary and of
    /// the queries; an unmapped character is never treated as a wildcard.
    #[error("Alphabet mapping is undefined for {character:?} in {text:?}")]
    UnmappedCharacter {
        /// The character the mapping rejected
        character: char,
        /// The dictionary entry or query containing it
        text: String,
    },
}

/// A specialized `Result` type for index operations.
pub type Result<T> = std::result::Result<T, IndexError>;
