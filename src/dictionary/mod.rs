//! Dictionary storage for the index.
//!
//! The dictionary is a prefix trie over *remapped, truncated* strings whose
//! nodes remember the original strings ending on them. See [`trie`].

pub mod trie;

pub use trie::{NodeId, StateTrie, TrieNode};
