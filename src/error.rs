use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Scoring errors
    #[error("No score entry for letter '{letter}' (in name: {name})")]
    MissingScoreEntry { letter: char, name: String },

    // Input shape errors
    #[error("Malformed score table {path}, line {line}: {message}")]
    MalformedScoreTable {
        path: String,
        line: usize,
        message: String,
    },

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Names file not found: {path}")]
    NamesFileNotFound { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("Failed to write output file: {0}")]
    OutputPersist(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a malformed input error with context
    pub fn malformed_input(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Create a missing score entry error for a letter found in a name
    pub fn missing_score_entry(letter: char, name: impl Into<String>) -> Self {
        Self::MissingScoreEntry {
            letter,
            name: name.into(),
        }
    }

    /// Create a score table parse error pointing at a 1-based line
    pub fn malformed_score_table(
        path: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedScoreTable {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a names file not found error
    pub fn names_file_not_found(path: impl Into<String>) -> Self {
        Self::NamesFileNotFound { path: path.into() }
    }

    /// Create an output persist error with context
    pub fn output_persist_error(msg: impl Into<String>) -> Self {
        Self::OutputPersist(msg.into())
    }

    /// Check if error was caused by the user's input files rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::MissingScoreEntry { .. }
                | AppError::MalformedScoreTable { .. }
                | AppError::MalformedInput(_)
                | AppError::NamesFileNotFound { .. }
        )
    }
}
