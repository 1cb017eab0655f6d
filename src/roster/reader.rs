//! Names file reading and path resolution.

use crate::abbreviation::Name;
use crate::constants::defaults::NAMES_FILE_EXTENSION;
use crate::error::AppError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves a names-file identifier.
///
/// An identifier that points at an existing file is used as is. Anything else is
/// treated as a bare name inside `input_dir`, so `trees` becomes `<input_dir>/trees.txt`.
pub fn resolve_names_path(identifier: &str, input_dir: impl AsRef<Path>) -> PathBuf {
    let direct = Path::new(identifier);
    if direct.is_file() {
        return direct.to_path_buf();
    }

    input_dir
        .as_ref()
        .join(format!("{identifier}.{NAMES_FILE_EXTENSION}"))
}

/// Reads one [`Name`] per line.
///
/// Blank lines are kept as empty names so results stay paired with input lines.
///
/// # Errors
/// * `AppError::NamesFileNotFound` - Nothing exists at `path`
/// * `AppError::Io` - The file exists but cannot be read as UTF-8 text
pub fn read_names(path: impl AsRef<Path>) -> Result<Vec<Name>, AppError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::names_file_not_found(path.display().to_string()),
        _ => AppError::Io(e),
    })?;

    let names = parse_names(&content);
    debug!(path = %path.display(), names = names.len(), "Read names file");
    Ok(names)
}

/// Splits file content into names, one per line.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A final line terminator does not
/// add an extra name.
pub fn parse_names(content: &str) -> Vec<Name> {
    content
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(Name::parse)
        .collect()
}
