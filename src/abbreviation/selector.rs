//! Best abbreviation selection.

use super::generator::Candidate;

/// Every abbreviation that shares the lowest score, in candidate order.
///
/// Ties are all kept. An empty set gives an empty result.
///
/// # Examples
/// ```
/// use name_abbrev::abbreviation::{Candidate, select_best};
///
/// let best = select_best(&[
///     Candidate::new("ABC", 7),
///     Candidate::new("ABD", 3),
///     Candidate::new("ACD", 3),
/// ]);
/// assert_eq!(best, vec!["ABD", "ACD"]);
/// ```
pub fn select_best(candidates: &[Candidate]) -> Vec<String> {
    let Some(lowest) = candidates.iter().map(|c| c.score).min() else {
        return Vec::new();
    };

    candidates
        .iter()
        .filter(|c| c.score == lowest)
        .map(|c| c.text.clone())
        .collect()
}
