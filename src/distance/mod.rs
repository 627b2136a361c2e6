//! Exact edit-distance computation used to rank index candidates.
//!
//! Two implementations are provided:
//! - **Unbounded**: two-row dynamic programming ([`standard_distance`])
//! - **Bounded**: banded dynamic programming that gives up as soon as the
//!   distance is known to exceed a cutoff ([`bounded_distance`])
//!
//! The index only ever needs the bounded form. It reaches it through the
//! [`BoundedDistance`] trait so callers can plug in their own metric.

use smallvec::SmallVec;

/// Edit distance with an early-abort cutoff.
///
/// Implementations must be symmetric and must return `None` exactly when the
/// distance between `source` and `target` exceeds `max_distance`.
pub trait BoundedDistance {
    /// Distance between `source` and `target`, or `None` if it is greater
    /// than `max_distance`.
    fn distance_within(&self, source: &str, target: &str, max_distance: usize) -> Option<usize>;
}

impl<F> BoundedDistance for F
where
    F: Fn(&str, &str, usize) -> Option<usize>,
{
    #[inline]
    fn distance_within(&self, source: &str, target: &str, max_distance: usize) -> Option<usize> {
        self(source, target, max_distance)
    }
}

/// Standard Levenshtein distance (insert, delete, substitute), computed with
/// [`bounded_distance`].
///
/// This is a zero-sized type, so indexes using the default metric carry no
/// extra state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Levenshtein;

impl BoundedDistance for Levenshtein {
    #[inline]
    fn distance_within(&self, source: &str, target: &str, max_distance: usize) -> Option<usize> {
        bounded_distance(source, target, max_distance)
    }
}

type CharBuf = SmallVec<[char; 32]>;

/// Strip common prefix and suffix from two character slices.
///
/// Neither affix changes the edit distance, and removing them shrinks the DP
/// matrix considerably for near-identical strings.
#[inline]
pub(crate) fn strip_common_affixes<'a>(a: &'a [char], b: &'a [char]) -> (&'a [char], &'a [char]) {
    let prefix_len = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let (a, b) = (&a[prefix_len..], &b[prefix_len..]);

    let suffix_len = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();

    (&a[..a.len() - suffix_len], &b[..b.len() - suffix_len])
}

/// Compute standard Levenshtein distance between two strings.
///
/// Distance is measured in Unicode scalar values, not bytes.
///
/// # Example
///
/// ```rust
/// use state_set_index::distance::standard_distance;
///
/// assert_eq!(standard_distance("kitten", "sitting"), 3);
/// assert_eq!(standard_distance("Müller", "Muller"), 1);
/// ```
pub fn standard_distance(source: &str, target: &str) -> usize {
    let source_chars: CharBuf = source.chars().collect();
    let target_chars: CharBuf = target.chars().collect();
    let (a, b) = strip_common_affixes(&source_chars, &target_chars);

    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Compute Levenshtein distance, giving up once it must exceed `max_distance`.
///
/// Only the diagonal band `|i - j| <= max_distance` of the DP matrix is
/// filled, and the computation stops as soon as every cell of a row is above
/// the cutoff. Returns `None` when the distance is greater than
/// `max_distance`.
///
/// # Example
///
/// ```rust
/// use state_set_index::distance::bounded_distance;
///
/// assert_eq!(bounded_distance("Mustre", "Muster", 2), Some(2));
/// assert_eq!(bounded_distance("Mustre", "Muster", 1), None);
/// ```
pub fn bounded_distance(source: &str, target: &str, max_distance: usize) -> Option<usize> {
    let source_chars: CharBuf = source.chars().collect();
    let target_chars: CharBuf = target.chars().collect();
    let (a, b) = strip_common_affixes(&source_chars, &target_chars);

    // Rows run over the longer string, columns over the shorter one.
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let m = short.len();
    let n = long.len();

    if n - m > max_distance {
        return None;
    }
    if m == 0 {
        return Some(n);
    }

    const FAR: usize = usize::MAX;

    let mut prev_row = vec![FAR; m + 1];
    for (i, cell) in prev_row.iter_mut().enumerate().take(m.min(max_distance) + 1) {
        *cell = i;
    }
    let mut curr_row = vec![FAR; m + 1];

    for j in 1..=n {
        let lo = j.saturating_sub(max_distance);
        let hi = j.saturating_add(max_distance).min(m);
        if lo > hi {
            return None;
        }

        if lo == 0 {
            curr_row[0] = j;
        } else {
            curr_row[lo - 1] = FAR;
        }

        let c = long[j - 1];
        for i in lo.max(1)..=hi {
            let cost = usize::from(short[i - 1] != c);

            curr_row[i] = prev_row[i - 1]
                .saturating_add(cost) // substitution
                .min(prev_row[i].saturating_add(1)) // deletion
                .min(curr_row[i - 1].saturating_add(1)); // insertion
        }

        if hi < m {
            curr_row[hi + 1] = FAR;
        }

        let row_min = curr_row[lo..=hi].iter().copied().min().unwrap_or(FAR);
        if row_min > max_distance {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[m];
    (distance <= max_distance).then_some(distance)
}
