//! Alphabet mappings applied to every indexed and queried character.
//!
//! The index never looks at raw characters: both dictionary prefixes and
//! queries are rewritten character by character through an
//! [`AlphabetMapping`] before touching the trie. A coarse mapping (for example
//! [`PhoneticClasses`]) collapses similar-sounding strings onto shared trie
//! paths, which widens the candidate set the automaton produces. Final ranking
//! always uses the original strings, so mappings affect recall and speed, never
//! the reported distance.
//!
//! ## Contract
//!
//! A mapping must be total over the characters that actually occur in the
//! dictionary and in queries, deterministic, and pure. Returning `None` for a
//! character is a contract violation that the index reports as
//! [`IndexError::UnmappedCharacter`](crate::index::IndexError::UnmappedCharacter);
//! the character is never treated as a wildcard.
//!
//! ## Usage
//!
//! ```rust
//! use state_set_index::mapping::{AlphabetMapping, CaseFold, CharTable, Fallback, Identity};
//!
//! assert_eq!(Identity.map('A'), Some('A'));
//! assert_eq!(CaseFold.map('A'), Some('a'));
//!
//! let table = CharTable::new([('s', 'z')], Fallback::Identity);
//! assert_eq!(table.map('s'), Some('z'));
//! assert_eq!(table.map('q'), Some('q'));
//!
//! // Closures work too.
//! let digits_only = |c: char| c.is_ascii_digit().then_some(c);
//! assert_eq!(digits_only.map('x'), None);
//! ```

mod phonetic;

pub use phonetic::PhoneticClasses;

use rustc_hash::FxHashMap;

/// Character-to-character remapping applied before indexing and querying.
pub trait AlphabetMapping {
    /// Map `character` into the index alphabet, or `None` if the mapping is
    /// undefined for it.
    fn map(&self, character: char) -> Option<char>;
}

impl<F> AlphabetMapping for F
where
    F: Fn(char) -> Option<char>,
{
    #[inline]
    fn map(&self, character: char) -> Option<char> {
        self(character)
    }
}

/// Leaves every character unchanged. Zero-sized, so the default index carries
/// no mapping state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl AlphabetMapping for Identity {
    #[inline(always)]
    fn map(&self, character: char) -> Option<char> {
        Some(character)
    }
}

/// Maps every character to its (first) lowercase form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CaseFold;

impl AlphabetMapping for CaseFold {
    #[inline]
    fn map(&self, character: char) -> Option<char> {
        Some(character.to_lowercase().next().unwrap_or(character))
    }
}

/// What a [`CharTable`] does with characters missing from its table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Fallback {
    /// Missing characters are unmapped (`None`).
    #[default]
    Reject,
    /// Missing characters map to themselves.
    Identity,
}

/// Explicit character table with a configurable fallback.
///
/// With [`Fallback::Reject`] the table behaves as a partial function, which
/// is how hand-written phonetic tables are usually given.
#[derive(Debug, Clone, Default)]
pub struct CharTable {
    table: FxHashMap<char, char>,
    fallback: Fallback,
}

impl CharTable {
    /// Create a table from `(from, to)` pairs. Later pairs override earlier
    /// ones for the same source character.
    pub fn new<I>(pairs: I, fallback: Fallback) -> Self
    where
        I: IntoIterator<Item = (char, char)>,
    {
        Self {
            table: pairs.into_iter().collect(),
            fallback,
        }
    }

    /// Add or replace a single entry.
    pub fn insert(&mut self, from: char, to: char) -> Option<char> {
        self.table.insert(from, to)
    }

    /// Fallback policy for characters outside the table.
    pub fn fallback(&self) -> Fallback {
        self.fallback
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table has no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl FromIterator<(char, char)> for CharTable {
    fn from_iter<I: IntoIterator<Item = (char, char)>>(iter: I) -> Self {
        Self::new(iter, Fallback::Reject)
    }
}

impl AlphabetMapping for CharTable {
    #[inline]
    fn map(&self, character: char) -> Option<char> {
        match self.table.get(&character) {
            Some(&mapped) => Some(mapped),
            None => match self.fallback {
                Fallback::Reject => None,
                Fallback::Identity => Some(character),
            },
        }
    }
}

/// Built-in mappings selectable at runtime (CLI flags, config files).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum MappingKind {
    /// [`Identity`]
    #[default]
    Identity,
    /// [`CaseFold`]
    CaseFold,
    /// [`PhoneticClasses`]
    Phonetic,
}

impl MappingKind {
    /// Get a human-readable name for this mapping
    pub fn name(&self) -> &'static str {
        match self {
            MappingKind::Identity => "identity",
            MappingKind::CaseFold => "case-fold",
            MappingKind::Phonetic => "phonetic",
        }
    }
}

impl AlphabetMapping for MappingKind {
    #[inline]
    fn map(&self, character: char) -> Option<char> {
        match self {
            MappingKind::Identity => Identity.map(character),
            MappingKind::CaseFold => CaseFold.map(character),
            MappingKind::Phonetic => PhoneticClasses.map(character),
        }
    }
}

impl std::fmt::Display for MappingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for MappingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "identity" | "none" => Ok(MappingKind::Identity),
            "case-fold" | "casefold" | "lowercase" => Ok(MappingKind::CaseFold),
            "phonetic" => Ok(MappingKind::Phonetic),
            _ => Err(format!(
                "Unknown mapping: {}. Valid options: identity, case-fold, phonetic",
                s
            )),
        }
    }
}
