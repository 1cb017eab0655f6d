//! Base letter scores loaded from a plain text table.
//!
//! Each non-blank line holds a letter and its integer score separated by whitespace:
//!
//! ```text
//! A 25
//! B 8
//! ```

use crate::error::AppError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Base score for each letter, keyed by its uppercase form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    scores: HashMap<char, i32>,
}

impl ScoreTable {
    /// Reads and parses a score table file.
    ///
    /// # Errors
    /// * `AppError::Io` - The file cannot be read
    /// * `AppError::MalformedScoreTable` - A line does not hold `<letter> <integer>`
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let table = Self::parse(&content, &path.display().to_string())?;
        debug!(path = %path.display(), letters = table.len(), "Loaded score table");
        Ok(table)
    }

    /// Parses table text. `source` only labels errors.
    ///
    /// Blank lines are skipped. When a letter appears twice the later score wins.
    ///
    /// # Examples
    /// ```
    /// use name_abbrev::abbreviation::ScoreTable;
    ///
    /// let table = ScoreTable::parse("a 1\nB   -2\n", "inline").unwrap();
    /// assert_eq!(table.get('A'), Some(1));
    /// assert_eq!(table.get('b'), Some(-2));
    /// assert_eq!(table.get('C'), None);
    /// ```
    pub fn parse(content: &str, source: &str) -> Result<Self, AppError> {
        let mut scores = HashMap::new();

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;
            let mut fields = line.split_whitespace();

            let Some(key) = fields.next() else {
                continue;
            };
            let letter = parse_letter(key).ok_or_else(|| {
                AppError::malformed_score_table(
                    source,
                    line_number,
                    format!("expected a single letter, found '{key}'"),
                )
            })?;

            let raw_score = fields.next().ok_or_else(|| {
                AppError::malformed_score_table(source, line_number, "missing score")
            })?;
            let score = raw_score.parse::<i32>().map_err(|e| {
                AppError::malformed_score_table(
                    source,
                    line_number,
                    format!("invalid score '{raw_score}': {e}"),
                )
            })?;

            if let Some(extra) = fields.next() {
                return Err(AppError::malformed_score_table(
                    source,
                    line_number,
                    format!("unexpected field '{extra}'"),
                ));
            }

            if let Some(previous) = scores.insert(letter, score) {
                warn!(
                    %letter,
                    previous,
                    score,
                    line = line_number,
                    "Letter listed twice in score table, keeping the later score"
                );
            }
        }

        Ok(Self { scores })
    }

    /// Builds a table directly from `(letter, score)` pairs.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (char, i32)>,
    {
        Self {
            scores: entries
                .into_iter()
                .map(|(letter, score)| (letter.to_ascii_uppercase(), score))
                .collect(),
        }
    }

    /// Base score for a letter, case-insensitive.
    pub fn get(&self, letter: char) -> Option<i32> {
        self.scores.get(&letter.to_ascii_uppercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

fn parse_letter(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}
