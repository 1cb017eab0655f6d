//! Candidate abbreviation generation.
//!
//! The first letter of a name always heads its abbreviations. The other two letters
//! are every ordered pair `(i, j)` with `1 <= i < j` taken from the flattened letters,
//! and the candidate's score is the sum of the two chosen letters' scores.

use super::scoring::ScoredName;
use crate::constants::ABBREVIATION_LENGTH;

/// One abbreviation and its score.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub text: String,
    pub score: i64,
}

impl Candidate {
    pub fn new(text: impl Into<String>, score: i64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

/// Generates every candidate for a scored name, in pair order.
///
/// Returns `C(L-1, 2)` candidates where `L` is the number of letters. Duplicate texts
/// with different scores are expected here.
///
/// # Examples
/// ```
/// use name_abbrev::abbreviation::{Name, ScoreTable, generate_candidates, score_name};
///
/// let table = ScoreTable::from_entries([('A', 1), ('N', 5)]);
/// let scored = score_name(&Name::parse("Ann"), &table).unwrap();
/// let candidates = generate_candidates(&scored);
///
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].text, "ANN");
/// assert_eq!(candidates[0].score, 11);
/// ```
pub fn generate_candidates(scored: &ScoredName) -> Vec<Candidate> {
    let (letters, scores) = scored.flattened();

    let Some(head) = letters.first().map(char::to_ascii_uppercase) else {
        return Vec::new();
    };

    let mut candidates = Vec::with_capacity(candidate_count(letters.len()));
    for i in 1..letters.len() {
        for j in (i + 1)..letters.len() {
            let mut text = String::with_capacity(ABBREVIATION_LENGTH);
            text.push(head);
            text.push(letters[i].to_ascii_uppercase());
            text.push(letters[j].to_ascii_uppercase());

            candidates.push(Candidate {
                text,
                score: scores[i] + scores[j],
            });
        }
    }

    candidates
}

/// Number of candidates a name with `letter_count` letters produces: `C(L-1, 2)`.
pub fn candidate_count(letter_count: usize) -> usize {
    let rest = letter_count.saturating_sub(1);
    rest * rest.saturating_sub(1) / 2
}
