//! Roster Abbreviation Library
//!
//! This library computes a unique three-letter abbreviation for each name in a
//! roster. Every abbreviation is the name's first letter followed by two later
//! letters in order; letters are scored by their position inside their word, shared
//! abbreviations are discarded, and the cheapest survivors are kept.
//!
//! # Examples
//!
//! ```rust,no_run
//! use name_abbrev::abbreviation::{ScoreTable, abbreviate_roster};
//! use name_abbrev::roster::{read_names, write_report};
//! use name_abbrev::error::AppError;
//!
//! fn main() -> Result<(), AppError> {
//!     let names = read_names("input/trees.txt")?;
//!     let table = ScoreTable::from_path("input/values.txt")?;
//!
//!     let results = abbreviate_roster(&names, &table)?;
//!     write_report("output/trees_abbrevs.txt", &results)?;
//!
//!     Ok(())
//! }
//! ```

pub mod abbreviation;
pub mod config;
pub mod constants;
pub mod error;
pub mod roster;

// Re-export commonly used types for convenience
pub use abbreviation::{Name, NameAbbreviations, ScoreTable, abbreviate_roster};
pub use config::Config;
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
