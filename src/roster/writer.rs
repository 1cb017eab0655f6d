//! Output file rendering, atomic writing and re-reading.
//!
//! The output holds two lines per name, in roster order: the original name line,
//! then its best abbreviations joined by single spaces (an empty line when none
//! survived).

use crate::abbreviation::NameAbbreviations;
use crate::constants::defaults::OUTPUT_FILE_SUFFIX;
use crate::error::AppError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Output location for a names-file identifier: `<output_dir>/<prefix><stem>_abbrevs.txt`.
///
/// The stem is the identifier's file stem, so `input/trees.txt` and `trees` both
/// give `trees`.
pub fn output_path_for(
    identifier: &str,
    output_dir: impl AsRef<Path>,
    prefix: Option<&str>,
) -> PathBuf {
    let stem = Path::new(identifier)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| identifier.to_string());

    output_dir.as_ref().join(format!(
        "{}{stem}{OUTPUT_FILE_SUFFIX}",
        prefix.unwrap_or_default()
    ))
}

/// Renders results as output file text.
pub fn render_report(results: &[NameAbbreviations]) -> String {
    let mut content = String::new();
    for entry in results {
        content.push_str(&entry.original);
        content.push('\n');
        content.push_str(&entry.best.join(" "));
        content.push('\n');
    }
    content
}

/// Writes results to `path`.
///
/// The text goes to a temporary file in the destination directory first and is then
/// renamed into place, so a failed write never leaves a partial output file. Missing
/// parent directories are created.
///
/// # Errors
/// * `AppError::Io` - The directory or temporary file cannot be created or written
/// * `AppError::OutputPersist` - The finished file cannot be moved into place
pub fn write_report(path: impl AsRef<Path>, results: &[NameAbbreviations]) -> Result<(), AppError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    let mut file = NamedTempFile::new_in(&dir)?;
    file.write_all(render_report(results).as_bytes())?;
    file.flush()?;
    file.persist(path)
        .map_err(|e| AppError::output_persist_error(format!("{}: {}", path.display(), e.error)))?;

    debug!(path = %path.display(), names = results.len(), "Wrote output file");
    Ok(())
}

/// Reads an output file back into results.
pub fn read_report(path: impl AsRef<Path>) -> Result<Vec<NameAbbreviations>, AppError> {
    let content = fs::read_to_string(path)?;
    parse_report(&content)
}

/// Parses output file text.
///
/// # Errors
/// * `AppError::MalformedInput` - A name line has no abbreviation line after it
pub fn parse_report(content: &str) -> Result<Vec<NameAbbreviations>, AppError> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() % 2 != 0 {
        return Err(AppError::malformed_input(format!(
            "output has {} lines, expected name and abbreviation pairs",
            lines.len()
        )));
    }

    Ok(lines
        .chunks(2)
        .map(|pair| NameAbbreviations {
            original: pair[0].to_string(),
            best: pair[1].split_whitespace().map(str::to_string).collect(),
        })
        .collect())
}
