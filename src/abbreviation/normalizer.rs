//! Name normalization.
//!
//! Turns one raw roster line into a [`Name`]: the trimmed original text kept for
//! reporting, plus the ordered alphabetic words used for scoring.

/// One roster entry split into its alphabetic words.
///
/// # Examples
/// ```
/// use name_abbrev::abbreviation::Name;
///
/// let name = Name::parse("  Pine-tree, O'Brien \n");
/// assert_eq!(name.original(), "Pine-tree, O'Brien");
/// assert_eq!(name.words(), ["Pine", "tree", "OBrien"]);
/// assert_eq!(name.flattened(), "PinetreeOBrien");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    original: String,
    words: Vec<String>,
}

impl Name {
    /// Normalizes a raw line.
    ///
    /// Surrounding whitespace is trimmed and apostrophes are removed before splitting,
    /// so `O'Brien` stays a single word. Any run of characters outside `A-Z`/`a-z`
    /// separates words. A line with no letters yields a name with no words.
    pub fn parse(line: &str) -> Self {
        let original = line.trim().to_string();
        let without_apostrophes: String = original.chars().filter(|c| *c != '\'').collect();

        Self {
            words: split_words(&without_apostrophes),
            original,
        }
    }

    /// The input line as it appeared, minus surrounding whitespace.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// True when the line contained no letters at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words concatenated in order, case preserved.
    pub fn flattened(&self) -> String {
        self.words.concat()
    }

    /// Number of letters across all words.
    pub fn letter_count(&self) -> usize {
        self.words.iter().map(String::len).sum()
    }
}

fn split_words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
