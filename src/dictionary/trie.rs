//! Arena-backed prefix trie over remapped dictionary prefixes.
//!
//! Every node lives in a single `Vec<TrieNode>` owned by [`StateTrie`] and is
//! addressed by its [`NodeId`]. Each node except the root is reached by
//! exactly one transition, so the arena always describes a strict tree.
//!
//! Nodes keep the *original* dictionary strings that end on them. After
//! alphabet remapping and prefix truncation several different strings can end
//! on the same node; they are all kept there.

use smallvec::SmallVec;

use crate::index::StateSet;

/// Index of a node inside a [`StateTrie`].
///
/// Node identity is the only notion of equality the automaton uses: two
/// structurally identical nodes are still different states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node of every trie.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of this node in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

type TermId = usize;

/// Container that stays unallocated until its first element arrives.
///
/// Most trie nodes are leaves without strings, or inner nodes without
/// strings, so allocating both vectors eagerly would waste memory.
#[derive(Debug, Clone, Default)]
enum Slots<T> {
    #[default]
    Empty,
    Allocated(Vec<T>),
}

impl<T> Slots<T> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        match self {
            Slots::Empty => &[],
            Slots::Allocated(items) => items,
        }
    }

    #[inline]
    fn allocated(&mut self) -> &mut Vec<T> {
        if let Slots::Empty = self {
            *self = Slots::Allocated(Vec::new());
        }
        match self {
            Slots::Allocated(items) => items,
            Slots::Empty => unreachable!("slots allocated above"),
        }
    }
}

/// A node of the indexing trie.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Outgoing transitions sorted by label, at most one per label
    transitions: Slots<(char, NodeId)>,
    /// Original strings ending here
    strings: Slots<TermId>,
    depth: usize,
}

impl TrieNode {
    fn with_depth(depth: usize) -> Self {
        TrieNode {
            depth,
            ..TrieNode::default()
        }
    }

    /// Child reached through `label`, if any.
    #[inline]
    pub fn child(&self, label: char) -> Option<NodeId> {
        let edges = self.transitions.as_slice();
        edges
            .binary_search_by_key(&label, |&(l, _)| l)
            .ok()
            .map(|pos| edges[pos].1)
    }

    /// Outgoing `(label, child)` pairs in label order.
    #[inline]
    pub fn edges(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.transitions.as_slice().iter().copied()
    }

    /// Number of outgoing transitions.
    pub fn edge_count(&self) -> usize {
        self.transitions.as_slice().len()
    }

    /// Distance from the root in transitions.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether any dictionary string ends on this node.
    pub fn has_strings(&self) -> bool {
        !self.strings.as_slice().is_empty()
    }
}

/// Prefix trie owning its nodes and the original dictionary strings.
#[derive(Debug, Clone)]
pub struct StateTrie {
    nodes: Vec<TrieNode>,
    terms: Vec<Box<str>>,
}

impl StateTrie {
    /// Create a trie holding only an empty root.
    pub fn new() -> Self {
        StateTrie {
            nodes: vec![TrieNode::with_depth(0)],
            terms: Vec::new(),
        }
    }

    /// The root node.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this trie.
    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    /// Child of `node` reached through `label`, if any.
    #[inline]
    pub fn child(&self, node: NodeId, label: char) -> Option<NodeId> {
        self.node(node).child(label)
    }

    /// Child of `node` reached through `label`, allocating an empty one if
    /// the transition does not exist yet.
    pub fn get_or_create_child(&mut self, node: NodeId, label: char) -> NodeId {
        let parent = &self.nodes[node.0];
        let pos = match parent
            .transitions
            .as_slice()
            .binary_search_by_key(&label, |&(l, _)| l)
        {
            Ok(pos) => return parent.transitions.as_slice()[pos].1,
            Err(pos) => pos,
        };

        let child = NodeId(self.nodes.len());
        let depth = parent.depth + 1;
        self.nodes.push(TrieNode::with_depth(depth));
        self.nodes[node.0]
            .transitions
            .allocated()
            .insert(pos, (label, child));
        child
    }

    /// Attach an original string to `node`.
    ///
    /// Returns `false` if the node already holds an equal string, in which
    /// case nothing changes.
    pub fn add_string(&mut self, node: NodeId, original: &str) -> bool {
        let terms = &self.terms;
        let present = self.nodes[node.0]
            .strings
            .as_slice()
            .iter()
            .any(|&id| &*terms[id] == original);
        if present {
            return false;
        }

        let id = self.terms.len();
        self.terms.push(original.into());
        self.nodes[node.0].strings.allocated().push(id);
        true
    }

    /// Walk (and extend) the path spelled by `labels` from the root, then
    /// attach `original` to the node it ends on.
    pub fn insert<I>(&mut self, labels: I, original: &str) -> NodeId
    where
        I: IntoIterator<Item = char>,
    {
        let mut node = self.root();
        for label in labels {
            node = self.get_or_create_child(node, label);
        }
        self.add_string(node, original);
        node
    }

    /// Original strings ending on `node`, in insertion order.
    pub fn strings(&self, node: NodeId) -> impl Iterator<Item = &str> + '_ {
        self.node(node)
            .strings
            .as_slice()
            .iter()
            .map(move |&id| &*self.terms[id])
    }

    /// Outgoing `(label, child)` pairs of `node`.
    #[inline]
    pub fn edges(&self, node: NodeId) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.node(node).edges()
    }

    /// Depth of `node` below the root.
    #[inline]
    pub fn depth(&self, node: NodeId) -> usize {
        self.node(node).depth
    }

    /// Every node reachable from `node` through zero or more child
    /// transitions, each costing one, starting at `current_distance` and
    /// never exceeding `max_distance`.
    ///
    /// The result is empty when `current_distance > max_distance`, and is
    /// exactly `{node: d}` when both distances equal `d`.
    pub fn reachable_states(&self, node: NodeId, current_distance: usize, max_distance: usize) -> StateSet {
        let mut states = StateSet::new();
        self.add_reachable_states(node, current_distance, max_distance, &mut states);
        states
    }

    /// Accumulating form of [`reachable_states`](Self::reachable_states).
    ///
    /// A node whose stored cost does not improve is not expanded again, so
    /// `states` must only contain entries that were themselves added by this
    /// method (their subtrees are then already present at lower or equal
    /// cost).
    pub fn add_reachable_states(
        &self,
        node: NodeId,
        current_distance: usize,
        max_distance: usize,
        states: &mut StateSet,
    ) {
        if current_distance > max_distance {
            return;
        }

        let mut pending: SmallVec<[(NodeId, usize); 16]> = SmallVec::new();
        pending.push((node, current_distance));

        while let Some((id, cost)) = pending.pop() {
            if !states.relax(id, cost) || cost == max_distance {
                continue;
            }
            for (_, child) in self.edges(id) {
                pending.push((child, cost + 1));
            }
        }
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct original strings.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// All original strings in insertion order.
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.iter().map(|t| &**t)
    }
}

impl Default for StateTrie {
    fn default() -> Self {
        Self::new()
    }
}
