//! # state-set-index
//!
//! Fuzzy nearest-string lookup over a fixed dictionary using a State Set
//! Index.
//!
//! A prefix trie is built over alphabet-remapped dictionary prefixes and
//! treated as a deterministic automaton. A Levenshtein NFA is simulated
//! directly on that trie, one query character at a time, as a set of
//! `(node, cost)` states. The dictionary strings collected along the way are
//! ranked with an exact bounded edit distance against the full query.
//!
//! The approach follows:
//!
//! > Fenz, Dandy, et al. "Efficient similarity search in very large string
//! > sets." International Conference on Scientific and Statistical Database
//! > Management (2012).
//!
//! ## Example
//!
//! ```rust
//! use state_set_index::prelude::*;
//!
//! let index = StateSetIndex::build(["Muster", "Mueller", "Müller"], PhoneticClasses, 6)?;
//!
//! let found = index.find("Mustre", 2)?.expect("a close entry");
//! assert_eq!(found.term, "Muster");
//! assert_eq!(found.distance, 2);
//! # Ok::<(), IndexError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dictionary;
pub mod distance;
pub mod index;
pub mod mapping;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::dictionary::{NodeId, StateTrie};
    pub use crate::distance::{bounded_distance, standard_distance, BoundedDistance, Levenshtein};
    pub use crate::index::{
        Candidate, Coverage, IndexBuilder, IndexError, StateSet, StateSetIndex,
        DEFAULT_PREFIX_LENGTH,
    };
    pub use crate::mapping::{
        AlphabetMapping, CaseFold, CharTable, Fallback, Identity, MappingKind, PhoneticClasses,
    };
}
