//! Which automaton frontiers contribute ranking candidates.

/// Candidate coverage of a lookup.
///
/// The trie only encodes the first `prefix_length` characters of every
/// entry, so the frontier reached after the query's own indexed prefix can
/// miss entries whose best alignment crosses that boundary (for example
/// query `"abc"` against entry `"xabc"` with prefix length 3 and threshold
/// 1). The two modes trade that recall for speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Coverage {
    /// Every entry within the threshold is a candidate.
    ///
    /// Up to `prefix_length + threshold` query characters are consumed and
    /// candidates are collected after every step: nodes at the indexed depth
    /// (whose entries may be truncated) always contribute, shallower nodes
    /// contribute when the unconsumed rest of the query can still be deleted
    /// within the threshold.
    #[default]
    Complete,

    /// Only the frontier reached after consuming the query's indexed prefix
    /// contributes.
    ///
    /// Fewer candidates reach the exact ranking, at the price of possibly
    /// missing matches whose alignment straddles the prefix boundary.
    IndexedPrefix,
}

impl Coverage {
    /// Get a human-readable name for this coverage mode
    pub fn name(&self) -> &'static str {
        match self {
            Coverage::Complete => "complete",
            Coverage::IndexedPrefix => "indexed-prefix",
        }
    }

    /// Number of query characters consumed for a query of `query_len`
    /// characters.
    pub(crate) fn steps(&self, query_len: usize, prefix_length: usize, threshold: usize) -> usize {
        match self {
            Coverage::Complete => query_len.min(prefix_length.saturating_add(threshold)),
            Coverage::IndexedPrefix => query_len.min(prefix_length),
        }
    }
}

impl std::fmt::Display for Coverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Coverage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "complete" | "full" => Ok(Coverage::Complete),
            "indexed-prefix" | "prefix" => Ok(Coverage::IndexedPrefix),
            _ => Err(format!(
                "Unknown coverage: {}. Valid options: complete, indexed-prefix",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps() {
        assert_eq!(Coverage::IndexedPrefix.steps(10, 6, 2), 6);
        assert_eq!(Coverage::IndexedPrefix.steps(3, 6, 2), 3);
        assert_eq!(Coverage::Complete.steps(10, 6, 2), 8);
        assert_eq!(Coverage::Complete.steps(7, 6, 2), 7);
        assert_eq!(Coverage::Complete.steps(3, 6, usize::MAX), 3);
    }

    #[test]
    fn test_parse() {
        assert_eq!("complete".parse::<Coverage>(), Ok(Coverage::Complete));
        assert_eq!("Prefix".parse::<Coverage>(), Ok(Coverage::IndexedPrefix));
        assert_eq!(Coverage::IndexedPrefix.to_string(), "indexed-prefix");
        assert!("partial".parse::<Coverage>().is_err());
    }
}
