//! Application-wide constants and configuration values
//!
//! This module centralizes the scoring rules and default locations so the
//! pipeline and the configuration layer agree on them.

/// Application directory name under the platform config directory
pub const APP_DIR_NAME: &str = "name_abbrev";

/// Log file name used when no custom log path is configured
pub const DEFAULT_LOG_FILE_NAME: &str = "name_abbrev.log";

/// Default locations, relative to the working directory
pub mod defaults {
    /// Score table used when neither config nor CLI names one
    pub const SCORES_FILE_PATH: &str = "input/values.txt";

    /// Directory that names-file identifiers resolve against
    pub const INPUT_DIR: &str = "input";

    /// Directory that output files are written to
    pub const OUTPUT_DIR: &str = "output";

    /// Extension appended to a names-file identifier
    pub const NAMES_FILE_EXTENSION: &str = "txt";

    /// Suffix of every output file stem
    pub const OUTPUT_FILE_SUFFIX: &str = "_abbrevs.txt";
}

/// Positional letter scoring rules
pub mod scoring {
    /// Score of the first letter of every word
    pub const FIRST_LETTER: i64 = 0;

    /// Score of a word's last letter when it is an 'E'
    pub const LAST_LETTER_E: i64 = 20;

    /// Score of a word's last letter otherwise
    pub const LAST_LETTER: i64 = 5;

    /// Bonus cap for interior letters; positions 1 and 2 add their own index
    pub const MAX_POSITION_BONUS: i64 = 3;
}

/// Number of letters in every abbreviation
pub const ABBREVIATION_LENGTH: usize = 3;

/// Environment variable names that override config values
pub mod env_vars {
    pub const SCORES_FILE: &str = "NAME_ABBREV_SCORES_FILE";
    pub const INPUT_DIR: &str = "NAME_ABBREV_INPUT_DIR";
    pub const OUTPUT_DIR: &str = "NAME_ABBREV_OUTPUT_DIR";
    pub const LOG_FILE: &str = "NAME_ABBREV_LOG_FILE";
}
