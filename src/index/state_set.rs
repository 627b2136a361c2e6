//! Cost frontier of the trie automaton.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use crate::dictionary::{NodeId, StateTrie};

/// Set of trie nodes with the minimal edit cost at which each is reachable.
///
/// Keys are node identities. Costs only ever go down: [`relax`](Self::relax)
/// ignores any cost that is not strictly lower than the stored one, so among
/// equal costs the first one seen is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateSet {
    costs: FxHashMap<NodeId, usize>,
}

impl StateSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `node` at `cost` unless it is already present at a lower or
    /// equal cost.
    ///
    /// Returns whether the stored cost changed.
    #[inline]
    pub fn relax(&mut self, node: NodeId, cost: usize) -> bool {
        match self.costs.get_mut(&node) {
            Some(existing) if *existing <= cost => false,
            Some(existing) => {
                *existing = cost;
                true
            }
            None => {
                self.costs.insert(node, cost);
                true
            }
        }
    }

    /// Relax every entry of `other` into this set.
    pub fn merge_from(&mut self, other: &StateSet) {
        for (&node, &cost) in &other.costs {
            self.relax(node, cost);
        }
    }

    /// Stored cost of `node`.
    #[inline]
    pub fn cost(&self, node: NodeId) -> Option<usize> {
        self.costs.get(&node).copied()
    }

    /// Whether `node` is in the set.
    pub fn contains(&self, node: NodeId) -> bool {
        self.costs.contains_key(&node)
    }

    /// Number of nodes in the set.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Iterate over `(node, cost)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.costs.iter().map(|(&node, &cost)| (node, cost))
    }

    /// Union of the original strings held by every node in the set.
    ///
    /// This over-approximates the matches: membership only says the trie path
    /// is close to the query, not the full string.
    pub fn candidate_strings<'t>(&self, trie: &'t StateTrie) -> BTreeSet<&'t str> {
        self.costs
            .keys()
            .flat_map(|&node| trie.strings(node))
            .collect()
    }
}

impl FromIterator<(NodeId, usize)> for StateSet {
    fn from_iter<I: IntoIterator<Item = (NodeId, usize)>>(iter: I) -> Self {
        let mut set = StateSet::new();
        for (node, cost) in iter {
            set.relax(node, cost);
        }
        set
    }
}
