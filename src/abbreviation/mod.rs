//! Abbreviation pipeline.
//!
//! Names flow through six stages, each a pure transformation:
//! normalize → score → generate → dedup within a name → dedup across names → select.
//!
//! The submodules are organized by stage:
//! - `normalizer`: splitting raw lines into alphabetic words
//! - `score_table` and `scoring`: base letter scores and positional adjustments
//! - `generator`: all first-letter-headed three-letter candidates
//! - `dedup`: per-name and cross-name deduplication
//! - `selector`: picking the lowest-scoring survivors

mod dedup;
mod generator;
mod normalizer;
mod score_table;
mod scoring;
mod selector;

pub use dedup::{ambiguous_abbreviations, dedup_across, dedup_within};
pub use generator::{Candidate, candidate_count, generate_candidates};
pub use normalizer::Name;
pub use score_table::ScoreTable;
pub use scoring::{ScoredName, ScoredWord, positional_score, score_name, score_word};
pub use selector::select_best;

use crate::error::AppError;
use tracing::{debug, warn};

/// Final result for one roster entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameAbbreviations {
    /// The roster line as read, surrounding whitespace trimmed.
    pub original: String,
    /// Lowest-scoring unique abbreviations; empty when none survived.
    pub best: Vec<String>,
}

/// Runs the full pipeline over a roster.
///
/// Results are in roster order, one per name. Scoring is all-or-nothing: the first
/// letter missing from `table` fails the whole run.
///
/// # Errors
/// * `AppError::MissingScoreEntry` - A name contains a letter the table does not cover
///
/// # Examples
/// ```
/// use name_abbrev::abbreviation::{Name, ScoreTable, abbreviate_roster};
///
/// let table = ScoreTable::from_entries(('A'..='Z').map(|letter| (letter, 1)));
/// let names = vec![Name::parse("Ann"), Name::parse("Bob")];
///
/// let results = abbreviate_roster(&names, &table).unwrap();
/// assert_eq!(results[0].best, vec!["ANN"]);
/// assert_eq!(results[1].best, vec!["BOB"]);
/// ```
pub fn abbreviate_roster(
    names: &[Name],
    table: &ScoreTable,
) -> Result<Vec<NameAbbreviations>, AppError> {
    let mut deduped_sets = Vec::with_capacity(names.len());

    for name in names {
        let scored = score_name(name, table)?;
        let candidates = generate_candidates(&scored);
        let deduped = dedup_within(&candidates);
        debug!(
            name = name.original(),
            candidates = candidates.len(),
            distinct = deduped.len(),
            "Generated candidates"
        );
        deduped_sets.push(deduped);
    }

    let unique_sets = dedup_across(&deduped_sets);

    let results = names
        .iter()
        .zip(&unique_sets)
        .map(|(name, unique)| {
            let best = select_best(unique);
            if best.is_empty() {
                warn!(name = name.original(), "No unique abbreviation survived");
            }
            NameAbbreviations {
                original: name.original().to_string(),
                best,
            }
        })
        .collect();

    Ok(results)
}
