//! Best-match selection over the automaton's candidate set.

use crate::distance::BoundedDistance;

/// A dictionary entry together with its exact edit distance from the query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Candidate {
    /// The matching dictionary entry, as originally inserted
    pub term: String,
    /// Edit distance between the full query and `term`
    pub distance: usize,
}

/// Pick the candidate closest to `query`, if any is within `threshold`.
///
/// The working cutoff handed to `metric` shrinks to the best distance found
/// so far, so later candidates that cannot win are abandoned early. Only a
/// strictly smaller distance replaces the current best; among equal
/// distances the first candidate in iteration order wins.
pub(crate) fn best_candidate<'a, I, D>(
    query: &str,
    candidates: I,
    threshold: usize,
    metric: &D,
) -> Option<Candidate>
where
    I: IntoIterator<Item = &'a str>,
    D: BoundedDistance + ?Sized,
{
    let mut best: Option<(&str, usize)> = None;
    let mut cutoff = threshold;

    for candidate in candidates {
        let distance = match metric.distance_within(query, candidate, cutoff) {
            Some(distance) if distance <= cutoff => distance,
            _ => continue,
        };

        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((candidate, distance));
            cutoff = distance;
            if distance == 0 {
                break;
            }
        }
    }

    best.map(|(term, distance)| Candidate {
        term: term.to_owned(),
        distance,
    })
}
