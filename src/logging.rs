use crate::cli::Args;
use name_abbrev::config::Config;
use name_abbrev::constants::DEFAULT_LOG_FILE_NAME;
use name_abbrev::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_DIRECTIVE: &str = "name_abbrev=info";

/// Where the daily rolling appender writes its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLocation {
    pub dir: String,
    pub file_prefix: String,
}

impl LogLocation {
    /// Resolves the log location, `--log-file` first, then config, then the default.
    pub fn resolve(args: &Args, config: &Config) -> Self {
        let custom_log_path = args.log_file.as_ref().or(config.log_file_path.as_ref());
        match custom_log_path {
            Some(custom_path) => {
                let path = Path::new(custom_path);
                let parent = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or(Path::new("."));
                let file_name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or(DEFAULT_LOG_FILE_NAME);
                Self {
                    dir: parent.to_string_lossy().to_string(),
                    file_prefix: file_name.to_string(),
                }
            }
            None => Self {
                dir: Config::get_log_dir_path(),
                file_prefix: DEFAULT_LOG_FILE_NAME.to_string(),
            },
        }
    }

    /// Path pattern of the files actually written. Daily rotation appends the UTC
    /// date, so the bare prefix never exists on disk.
    pub fn file_pattern(&self) -> String {
        format!("{}/{}.YYYY-MM-DD", self.dir, self.file_prefix)
    }
}

/// Sets up logging configuration for the application.
///
/// - Normal runs: logs only to file, so stdout holds just the result summary
/// - Debug mode: logs to both stdout and file
/// - Creates log directory if it doesn't exist
/// - Uses daily rolling file appender
///
/// Returns the log location and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub fn setup_logging(args: &Args, config: &Config) -> Result<(LogLocation, WorkerGuard), AppError> {
    let location = LogLocation::resolve(args, config);
    let log_dir = &location.dir;

    // Create log directory if it doesn't exist
    if !Path::new(log_dir).exists() {
        std::fs::create_dir_all(log_dir).map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, &location.file_prefix);

    // The guard must outlive every log call so buffered lines get flushed
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let registry = tracing_subscriber::registry();
    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter()?);

    if args.debug {
        registry
            .with(file_layer)
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(env_filter()?),
            )
            .try_init()
            .map_err(|e| AppError::log_setup_error(e.to_string()))?;
    } else {
        registry
            .with(file_layer)
            .try_init()
            .map_err(|e| AppError::log_setup_error(e.to_string()))?;
    }

    Ok((location, guard))
}

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive = DEFAULT_DIRECTIVE
        .parse::<Directive>()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}
