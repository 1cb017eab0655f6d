//! Positional letter scoring.
//!
//! Every letter starts from its base score in the [`ScoreTable`] and is then adjusted
//! by where it sits inside its own word:
//! - first letter: always 0
//! - last letter: 20 if it is an `E`, otherwise 5
//! - second and third letter: base + 1 and base + 2
//! - any later letter: base + 3
//!
//! The first-letter rule is checked before the last-letter rule, so a one-letter
//! word scores 0.

use super::normalizer::Name;
use super::score_table::ScoreTable;
use crate::constants::scoring::{FIRST_LETTER, LAST_LETTER, LAST_LETTER_E, MAX_POSITION_BONUS};
use crate::error::AppError;

/// A word and its adjusted letter scores, aligned index for index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    letters: String,
    scores: Vec<i64>,
}

impl ScoredWord {
    pub fn letters(&self) -> &str {
        &self.letters
    }

    pub fn scores(&self) -> &[i64] {
        &self.scores
    }
}

/// A normalized name with one adjusted score per letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredName {
    words: Vec<ScoredWord>,
}

impl ScoredName {
    pub fn words(&self) -> &[ScoredWord] {
        &self.words
    }

    /// Letters and scores with word boundaries removed.
    ///
    /// Both vectors have the same length and the same order.
    pub fn flattened(&self) -> (Vec<char>, Vec<i64>) {
        let letters = self
            .words
            .iter()
            .flat_map(|word| word.letters.chars())
            .collect();
        let scores = self
            .words
            .iter()
            .flat_map(|word| word.scores.iter().copied())
            .collect();
        (letters, scores)
    }
}

/// Scores every letter of `name`.
///
/// # Errors
/// * `AppError::MissingScoreEntry` - A letter has no entry in `table`
///
/// # Examples
/// ```
/// use name_abbrev::abbreviation::{Name, ScoreTable, score_name};
///
/// let table = ScoreTable::from_entries([('A', 1), ('N', 5)]);
/// let scored = score_name(&Name::parse("Ann"), &table).unwrap();
/// assert_eq!(scored.words()[0].scores(), [0, 6, 5]);
/// ```
pub fn score_name(name: &Name, table: &ScoreTable) -> Result<ScoredName, AppError> {
    let words = name
        .words()
        .iter()
        .map(|word| {
            Ok(ScoredWord {
                scores: score_word(word, table, name.original())?,
                letters: word.clone(),
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(ScoredName { words })
}

/// Scores the letters of a single word. `context` names the entry for error reports.
pub fn score_word(word: &str, table: &ScoreTable, context: &str) -> Result<Vec<i64>, AppError> {
    let length = word.chars().count();

    word.chars()
        .enumerate()
        .map(|(index, letter)| {
            let base = table.get(letter).ok_or_else(|| {
                AppError::missing_score_entry(letter.to_ascii_uppercase(), context)
            })?;
            Ok(positional_score(base, letter, index, length))
        })
        .collect()
}

/// Applies the position rule to a letter's base score.
///
/// Adjusted scores are `i64` so any `i32` base plus its bonus, and any sum of two
/// adjusted scores, fits without overflow.
pub fn positional_score(base: i32, letter: char, index: usize, word_length: usize) -> i64 {
    if index == 0 {
        FIRST_LETTER
    } else if index + 1 == word_length {
        if letter.eq_ignore_ascii_case(&'e') {
            LAST_LETTER_E
        } else {
            LAST_LETTER
        }
    } else {
        // Interior letter: bonus equals the index, capped
        i64::from(base) + (index as i64).min(MAX_POSITION_BONUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ScoreTable {
        ScoreTable::from_entries(
            ('A'..='Z')
                .enumerate()
                .map(|(i, letter)| (letter, 10 + i as i32)),
        )
    }

    #[test]
    fn test_first_letter_scores_zero() {
        assert_eq!(positional_score(25, 'Q', 0, 6), 0);
    }

    #[test]
    fn test_single_letter_word_scores_zero() {
        // First-letter rule wins over last-letter rule
        assert_eq!(positional_score(25, 'E', 0, 1), 0);
        assert_eq!(positional_score(25, 'x', 0, 1), 0);
    }

    #[test]
    fn test_last_letter_e_scores_twenty() {
        assert_eq!(positional_score(35, 'E', 4, 5), 20);
        assert_eq!(positional_score(35, 'e', 1, 2), 20);
    }

    #[test]
    fn test_last_letter_other_scores_five() {
        assert_eq!(positional_score(1, 'K', 2, 3), 5);
        assert_eq!(positional_score(99, 'n', 7, 8), 5);
    }

    #[test]
    fn test_interior_positions_add_index() {
        assert_eq!(positional_score(10, 'B', 1, 6), 11);
        assert_eq!(positional_score(10, 'B', 2, 6), 12);
    }

    #[test]
    fn test_extreme_base_scores_do_not_overflow() {
        assert_eq!(
            positional_score(i32::MAX, 'N', 5, 8),
            i64::from(i32::MAX) + 3
        );
        assert_eq!(
            positional_score(i32::MIN, 'N', 1, 8),
            i64::from(i32::MIN) + 1
        );
    }

    #[test]
    fn test_later_positions_add_three() {
        assert_eq!(positional_score(10, 'B', 3, 6), 13);
        assert_eq!(positional_score(10, 'B', 4, 6), 13);
    }

    #[test]
    fn test_score_word_ann() {
        let table = ScoreTable::from_entries([('A', 1), ('N', 5)]);
        assert_eq!(score_word("Ann", &table, "Ann").unwrap(), vec![0, 6, 5]);
    }

    #[test]
    fn test_positions_reset_per_word() {
        let name = Name::parse("Box Elder");
        let scored = score_name(&name, &table()).unwrap();

        // B=11 O=24 X=33 / E=14 L=21 D=13 E=14 R=27
        assert_eq!(scored.words()[0].scores(), [0, 25, 5]);
        assert_eq!(scored.words()[1].scores(), [0, 22, 15, 17, 5]);
    }

    #[test]
    fn test_flattened_is_aligned() {
        let name = Name::parse("Box Elder");
        let scored = score_name(&name, &table()).unwrap();
        let (letters, scores) = scored.flattened();

        assert_eq!(letters.iter().collect::<String>(), "BoxElder");
        assert_eq!(scores, vec![0, 25, 5, 0, 22, 15, 17, 5]);
    }

    #[test]
    fn test_missing_letter_fails() {
        let table = ScoreTable::from_entries([('A', 1)]);
        let err = score_name(&Name::parse("Ab"), &table).unwrap_err();
        match err {
            AppError::MissingScoreEntry { letter, name } => {
                assert_eq!(letter, 'B');
                assert_eq!(name, "Ab");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_first_letter_still_fails() {
        // The base lookup happens even when the position rule discards it
        let table = ScoreTable::from_entries([('B', 1)]);
        assert!(score_name(&Name::parse("Ab"), &table).is_err());
    }

    #[test]
    fn test_empty_name_scores_nothing() {
        let scored = score_name(&Name::parse("--"), &table()).unwrap();
        assert!(scored.words().is_empty());
        assert_eq!(scored.flattened(), (vec![], vec![]));
    }
}
