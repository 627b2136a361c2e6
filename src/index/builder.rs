//! Builder pattern for creating StateSetIndex instances.
//!
//! The `IndexBuilder` provides a fluent API for choosing the alphabet
//! mapping, ranking metric, prefix length and candidate coverage before the
//! trie is built.

use tracing::debug;

use super::error::{IndexError, Result};
use super::{Coverage, StateSetIndex, DEFAULT_PREFIX_LENGTH};
use crate::distance::{BoundedDistance, Levenshtein};
use crate::mapping::{AlphabetMapping, Identity};

/// Builder for constructing a [`StateSetIndex`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use state_set_index::prelude::*;
///
/// let index = IndexBuilder::new()
///     .mapping(CaseFold)
///     .prefix_length(4)
///     .coverage(Coverage::Complete)
///     .build(["Apple", "Apricot", "Banana"])?;
///
/// assert_eq!(index.prefix_length(), 4);
/// // Ranking compares the original strings, so case still counts there.
/// assert_eq!(index.find("Aple", 1)?.map(|c| c.term), Some("Apple".to_string()));
/// assert_eq!(index.find("aple", 1)?, None);
/// # Ok::<(), IndexError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IndexBuilder<M = Identity, D = Levenshtein> {
    mapping: M,
    metric: D,
    prefix_length: usize,
    coverage: Coverage,
}

impl IndexBuilder {
    /// Create a builder with the identity mapping, standard Levenshtein
    /// ranking, a prefix length of [`DEFAULT_PREFIX_LENGTH`] and complete
    /// coverage.
    pub fn new() -> Self {
        IndexBuilder {
            mapping: Identity,
            metric: Levenshtein,
            prefix_length: DEFAULT_PREFIX_LENGTH,
            coverage: Coverage::default(),
        }
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, D> IndexBuilder<M, D> {
    /// Set the alphabet mapping applied to indexed prefixes and queries.
    pub fn mapping<N: AlphabetMapping>(self, mapping: N) -> IndexBuilder<N, D> {
        IndexBuilder {
            mapping,
            metric: self.metric,
            prefix_length: self.prefix_length,
            coverage: self.coverage,
        }
    }

    /// Set the bounded edit distance used to rank candidates.
    pub fn metric<E: BoundedDistance>(self, metric: E) -> IndexBuilder<M, E> {
        IndexBuilder {
            mapping: self.mapping,
            metric,
            prefix_length: self.prefix_length,
            coverage: self.coverage,
        }
    }

    /// Set the maximum number of characters indexed per string.
    ///
    /// Must be at least 1; checked by [`build`](Self::build).
    pub fn prefix_length(mut self, prefix_length: usize) -> Self {
        self.prefix_length = prefix_length;
        self
    }

    /// Set which automaton frontiers contribute candidates.
    pub fn coverage(mut self, coverage: Coverage) -> Self {
        self.coverage = coverage;
        self
    }
}

impl<M: AlphabetMapping, D: BoundedDistance> IndexBuilder<M, D> {
    /// Build the index over `dictionary`.
    ///
    /// Duplicate entries are ignored and the result does not depend on the
    /// iteration order of `dictionary`.
    ///
    /// # Errors
    ///
    /// - [`IndexError::ZeroPrefixLength`] if the prefix length is 0
    /// - [`IndexError::UnmappedCharacter`] if the mapping rejects a character
    ///   within the indexed prefix of some entry
    pub fn build<I>(self, dictionary: I) -> Result<StateSetIndex<M, D>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if self.prefix_length == 0 {
            return Err(IndexError::ZeroPrefixLength);
        }

        let mut index = StateSetIndex::empty(self.mapping, self.metric, self.prefix_length, self.coverage);
        for term in dictionary {
            index.insert(term.as_ref())?;
        }

        debug!(
            terms = index.len(),
            nodes = index.node_count(),
            prefix_length = index.prefix_length(),
            coverage = %index.coverage(),
            "built state set index"
        );

        Ok(index)
    }
}
