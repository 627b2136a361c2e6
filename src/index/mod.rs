//! State Set Index: nearest-string lookup by simulating a Levenshtein NFA
//! over a prefix trie.
//!
//! # How a lookup works
//!
//! The automaton state is a [`StateSet`]: trie nodes paired with the
//! smallest number of edits that reaches them from the part of the query
//! consumed so far. Starting from the root and everything within `threshold`
//! insertions below it, every query character moves each state by
//!
//! - **deletion**: stay on the node, one edit
//! - **match**: follow the transition labelled with the character, free
//! - **substitution**: follow any other transition, one edit
//!
//! and every landing node then slides further down the trie through
//! insertions while edits remain. States whose cost would exceed `threshold`
//! are dropped. The strings stored on the surviving nodes are candidates;
//! they are ranked with an exact bounded edit distance against the full,
//! unmapped query and the closest one within `threshold` is returned.
//!
//! # Example
//!
//! ```rust
//! use state_set_index::prelude::*;
//!
//! let index = StateSetIndex::build(["Muster", "Mustermann", "Müller"], Identity, 6)?;
//!
//! let found = index.find("Mustre", 2)?.expect("within two edits");
//! assert_eq!(found.term, "Muster");
//! assert_eq!(found.distance, 2);
//!
//! assert_eq!(index.find("Xyz", 1)?, None);
//! # Ok::<(), IndexError>(())
//! ```

mod builder;
mod candidate;
mod coverage;
pub mod error;
mod state_set;

pub use builder::IndexBuilder;
pub use candidate::Candidate;
pub use coverage::Coverage;
pub use error::IndexError;
pub use state_set::StateSet;

use std::collections::BTreeSet;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::dictionary::{NodeId, StateTrie};
use crate::distance::{BoundedDistance, Levenshtein};
use crate::mapping::{AlphabetMapping, Identity};
use candidate::best_candidate;
use error::Result;

/// Prefix length used by [`IndexBuilder::new`].
pub const DEFAULT_PREFIX_LENGTH: usize = 6;

type Labels = SmallVec<[char; 32]>;

/// Immutable fuzzy index over a fixed dictionary.
///
/// # Type Parameters
///
/// - `M`: alphabet mapping applied before touching the trie
///   (defaults to [`Identity`])
/// - `D`: bounded edit distance used for the final ranking
///   (defaults to [`Levenshtein`])
///
/// Both defaults are zero-sized. Lookups take `&self`, so an index can be
/// shared between threads whenever `M` and `D` are `Sync`.
#[derive(Debug, Clone)]
pub struct StateSetIndex<M = Identity, D = Levenshtein> {
    trie: StateTrie,
    mapping: M,
    metric: D,
    prefix_length: usize,
    coverage: Coverage,
}

impl<M: AlphabetMapping> StateSetIndex<M, Levenshtein> {
    /// Build an index over `dictionary`, indexing at most `prefix_length`
    /// remapped characters per entry.
    ///
    /// Uses standard Levenshtein ranking and [`Coverage::Complete`]; see
    /// [`IndexBuilder`] for the other knobs.
    ///
    /// # Errors
    ///
    /// - [`IndexError::ZeroPrefixLength`] if `prefix_length` is 0
    /// - [`IndexError::UnmappedCharacter`] if `mapping` rejects a character
    ///   within the indexed prefix of some entry
    pub fn build<I>(dictionary: I, mapping: M, prefix_length: usize) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        IndexBuilder::new()
            .mapping(mapping)
            .prefix_length(prefix_length)
            .build(dictionary)
    }
}

impl<M, D> StateSetIndex<M, D> {
    fn empty(mapping: M, metric: D, prefix_length: usize, coverage: Coverage) -> Self {
        StateSetIndex {
            trie: StateTrie::new(),
            mapping,
            metric,
            prefix_length,
            coverage,
        }
    }

    /// Number of distinct dictionary entries.
    pub fn len(&self) -> usize {
        self.trie.term_count()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.trie.node_count()
    }

    /// Maximum number of characters indexed per entry.
    pub fn prefix_length(&self) -> usize {
        self.prefix_length
    }

    /// Candidate coverage used by lookups.
    pub fn coverage(&self) -> Coverage {
        self.coverage
    }

    /// The alphabet mapping.
    pub fn mapping(&self) -> &M {
        &self.mapping
    }

    /// The ranking metric.
    pub fn metric(&self) -> &D {
        &self.metric
    }

    /// The underlying trie.
    pub fn trie(&self) -> &StateTrie {
        &self.trie
    }

    /// Dictionary entries in insertion order.
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.trie.terms()
    }
}

impl<M: AlphabetMapping, D: BoundedDistance> StateSetIndex<M, D> {
    /// Index a single entry.
    fn insert(&mut self, term: &str) -> Result<()> {
        let labels = self.remap(term, self.prefix_length)?;
        self.trie.insert(labels, term);
        Ok(())
    }

    /// Map the first `limit` characters of `text`.
    fn remap(&self, text: &str, limit: usize) -> Result<Labels> {
        text.chars()
            .take(limit)
            .map(|character| {
                self.mapping
                    .map(character)
                    .ok_or_else(|| IndexError::UnmappedCharacter {
                        character,
                        text: text.to_owned(),
                    })
            })
            .collect()
    }

    /// Find the dictionary entry closest to `query`, if one is within
    /// `threshold` edits.
    ///
    /// The returned distance is the exact edit distance between the full
    /// query and the full entry. When several entries are equally close, the
    /// lexicographically smallest one is returned.
    ///
    /// # Errors
    ///
    /// [`IndexError::UnmappedCharacter`] if the mapping rejects a query
    /// character that the lookup needs to consume. With
    /// [`Coverage::Complete`] that is the first `prefix_length + threshold`
    /// characters of the query, so a partial mapping can reject a character
    /// past the indexed prefix. [`Coverage::IndexedPrefix`] only maps the
    /// first `prefix_length`.
    pub fn find(&self, query: &str, threshold: usize) -> Result<Option<Candidate>> {
        let candidates = self.candidate_set(query, threshold)?;
        let best = best_candidate(query, candidates.iter().copied(), threshold, &self.metric);

        debug!(
            query,
            threshold,
            candidates = candidates.len(),
            found = ?best,
            "state set lookup"
        );

        Ok(best)
    }

    /// Entries that reach the exact ranking step for `query`, sorted.
    ///
    /// This is a superset of the entries within `threshold`: it may contain
    /// false positives, which [`find`](Self::find) discards.
    pub fn candidates(&self, query: &str, threshold: usize) -> Result<Vec<&str>> {
        Ok(self.candidate_set(query, threshold)?.into_iter().collect())
    }

    /// Whether `term` is one of the dictionary entries.
    pub fn contains(&self, term: &str) -> Result<bool> {
        let labels = self.remap(term, self.prefix_length)?;
        let node = labels
            .iter()
            .try_fold(self.trie.root(), |node, &label| self.trie.child(node, label));

        Ok(node.map_or(false, |node| self.trie.strings(node).any(|s| s == term)))
    }

    fn candidate_set(&self, query: &str, threshold: usize) -> Result<BTreeSet<&str>> {
        let query_len = query.chars().count();
        let steps = self.coverage.steps(query_len, self.prefix_length, threshold);
        let labels = self.remap(query, steps)?;

        let mut frontier = self.trie.reachable_states(self.trie.root(), 0, threshold);
        let mut candidates = BTreeSet::new();

        if self.coverage == Coverage::Complete {
            self.harvest(&frontier, query_len, threshold, &mut candidates);
        }

        for (step, &label) in labels.iter().enumerate() {
            frontier = self.advance(&frontier, label, threshold);
            trace!(step, label = %label, states = frontier.len(), "advanced frontier");

            if frontier.is_empty() {
                break;
            }
            if self.coverage == Coverage::Complete {
                self.harvest(&frontier, query_len - (step + 1), threshold, &mut candidates);
            }
        }

        if self.coverage == Coverage::IndexedPrefix {
            candidates = frontier.candidate_strings(&self.trie);
        }

        Ok(candidates)
    }

    /// Consume one query character.
    fn advance(&self, frontier: &StateSet, label: char, threshold: usize) -> StateSet {
        let mut next = StateSet::new();

        for (state, cost) in frontier.iter() {
            let can_edit = cost < threshold;

            // deletion
            if can_edit {
                self.trie.add_reachable_states(state, cost + 1, threshold, &mut next);
            }

            for (edge, child) in self.trie.edges(state) {
                if edge == label {
                    // match
                    self.trie.add_reachable_states(child, cost, threshold, &mut next);
                } else if can_edit {
                    // substitution
                    self.trie.add_reachable_states(child, cost + 1, threshold, &mut next);
                }
            }
        }

        next
    }

    /// Collect the strings of `frontier` that may still be within
    /// `threshold` of the whole query, given `remaining` unconsumed query
    /// characters.
    fn harvest<'t>(
        &'t self,
        frontier: &StateSet,
        remaining: usize,
        threshold: usize,
        candidates: &mut BTreeSet<&'t str>,
    ) {
        for (node, cost) in frontier.iter() {
            if self.admits(node, cost, remaining, threshold) {
                candidates.extend(self.trie.strings(node));
            }
        }
    }

    /// Entries on nodes at the indexed depth may continue past the trie, so
    /// any reachable cost admits them. Shallower entries end on their node
    /// and need the rest of the query to be deletable.
    #[inline]
    fn admits(&self, node: NodeId, cost: usize, remaining: usize, threshold: usize) -> bool {
        self.trie.depth(node) >= self.prefix_length || cost.saturating_add(remaining) <= threshold
    }
}
