//! User interaction and prompts
//!
//! This module handles asking for the names file when it was not given on the
//! command line.

use crate::error::AppError;
use std::io::{self, BufRead, Write};

/// Prompts on stdout until the user enters a non-empty names-file identifier.
///
/// # Returns
/// * `Ok(String)` - The trimmed identifier, e.g. `trees` for `input/trees.txt`
/// * `Err(AppError)` - stdin failed or closed before an identifier was entered
pub fn prompt_for_names_identifier() -> Result<String, AppError> {
    let stdin = io::stdin();
    read_names_identifier(&mut stdin.lock(), &mut io::stdout())
}

/// Repeats the prompt on `output` and reads lines from `input` until one is non-empty.
pub fn read_names_identifier<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<String, AppError> {
    loop {
        writeln!(
            output,
            "\nWhat is the input text file name? E.g., for trees.txt, type trees"
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(AppError::malformed_input(
                "no names file given before end of input",
            ));
        }

        let identifier = line.trim();
        if !identifier.is_empty() {
            return Ok(identifier.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_first_non_empty_line() {
        let mut input = Cursor::new("\n   \ntrees\n");
        let mut output = Vec::new();

        let identifier = read_names_identifier(&mut input, &mut output).unwrap();
        assert_eq!(identifier, "trees");

        // Prompted once per line read
        let prompts = String::from_utf8(output).unwrap();
        assert_eq!(prompts.matches("What is the input text file name?").count(), 3);
    }

    #[test]
    fn test_trims_identifier() {
        let mut input = Cursor::new("  birds \n");
        let identifier = read_names_identifier(&mut input, &mut Vec::new()).unwrap();
        assert_eq!(identifier, "birds");
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut input = Cursor::new("\n\n");
        let err = read_names_identifier(&mut input, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, AppError::MalformedInput(_)));
    }
}
