//! Two-phase deduplication.
//!
//! - `dedup_within`: one entry per abbreviation text inside a single name, keeping the
//!   lowest score
//! - `dedup_across`: drops every abbreviation that more than one name can produce, so
//!   each survivor identifies exactly one name
//!
//! Both phases keep the first-seen order of texts, which keeps the final output stable.

use super::generator::Candidate;
use std::collections::{HashMap, HashSet};

/// Collapses duplicate texts within one name to their minimum score.
///
/// An equal score never replaces the stored one, and the position of a text is the
/// position of its first occurrence.
///
/// # Examples
/// ```
/// use name_abbrev::abbreviation::{Candidate, dedup_within};
///
/// let deduped = dedup_within(&[
///     Candidate::new("ANN", 11),
///     Candidate::new("ANA", 9),
///     Candidate::new("ANN", 6),
/// ]);
/// assert_eq!(deduped, vec![Candidate::new("ANN", 6), Candidate::new("ANA", 9)]);
/// ```
pub fn dedup_within(candidates: &[Candidate]) -> Vec<Candidate> {
    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(candidates.len());
    let mut deduped: Vec<Candidate> = Vec::new();

    for candidate in candidates {
        match positions.get(candidate.text.as_str()) {
            Some(&position) => {
                if candidate.score < deduped[position].score {
                    deduped[position].score = candidate.score;
                }
            }
            None => {
                positions.insert(&candidate.text, deduped.len());
                deduped.push(candidate.clone());
            }
        }
    }

    deduped
}

/// Texts that appear in the candidate sets of two or more names.
///
/// Each set counts once per text, so repeats inside a single set never make a text
/// ambiguous.
pub fn ambiguous_abbreviations(sets: &[Vec<Candidate>]) -> HashSet<String> {
    let mut owners: HashMap<&str, usize> = HashMap::new();

    for set in sets {
        let texts: HashSet<&str> = set.iter().map(|c| c.text.as_str()).collect();
        for text in texts {
            *owners.entry(text).or_default() += 1;
        }
    }

    owners
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(text, _)| text.to_string())
        .collect()
}

/// Removes every shared abbreviation from every name's set.
///
/// The removal is global: a shared text is purged from all owners, not handed to the
/// first one. Sets keep their order and a set may end up empty.
pub fn dedup_across(sets: &[Vec<Candidate>]) -> Vec<Vec<Candidate>> {
    let ambiguous = ambiguous_abbreviations(sets);

    sets.iter()
        .map(|set| {
            set.iter()
                .filter(|candidate| !ambiguous.contains(&candidate.text))
                .cloned()
                .collect()
        })
        .collect()
}
