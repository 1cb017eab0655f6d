use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Score table path, input directory and output directory cannot be empty
/// - Output prefix, if provided, cannot contain path separators
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.scores_file_path.trim().is_empty() {
        return Err(AppError::config_error("Score table path cannot be empty"));
    }

    if config.input_dir.trim().is_empty() {
        return Err(AppError::config_error("Input directory cannot be empty"));
    }

    if config.output_dir.trim().is_empty() {
        return Err(AppError::config_error("Output directory cannot be empty"));
    }

    if let Some(prefix) = &config.output_prefix
        && prefix.contains(['/', '\\'])
    {
        return Err(AppError::config_error(format!(
            "Output prefix '{prefix}' cannot contain path separators"
        )));
    }

    // Validate log file path if provided
    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
