use crate::cli::Args;
use crate::status::RunSummary;
use name_abbrev::abbreviation::{ScoreTable, abbreviate_roster};
use name_abbrev::config::Config;
use name_abbrev::config::user_prompts::prompt_for_names_identifier;
use name_abbrev::error::AppError;
use name_abbrev::roster::{output_path_for, read_names, resolve_names_path, write_report};
use std::path::PathBuf;
use tracing::info;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file simultaneously",
        ));
    }
    if args.names.as_deref().is_some_and(|names| names.trim().is_empty()) {
        return Err(AppError::config_error("Names file identifier cannot be empty"));
    }
    Ok(())
}

/// Handles the --list-config command.
pub fn handle_list_config_command(config: &Config) {
    config.display();
}

/// Handles configuration update commands (--set-scores-file, --set-output-dir,
/// --set-log-file, --clear-log-file).
///
/// Updates the given configuration and saves it to the default location.
pub fn handle_config_update_command(args: &Args, config: &mut Config) -> Result<(), AppError> {
    if let Some(scores_file_path) = &args.new_scores_file_path {
        config.scores_file_path = scores_file_path.clone();
        println!("Score table updated to: {scores_file_path}");
    }

    if let Some(output_dir) = &args.new_output_dir {
        config.output_dir = output_dir.clone();
        println!("Output directory updated to: {output_dir}");
    }

    if let Some(log_file_path) = &args.new_log_file_path {
        config.log_file_path = Some(log_file_path.clone());
        println!("Log file path updated to: {log_file_path}");
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save()?;
    Ok(())
}

/// Input and output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub names_path: PathBuf,
    pub scores_path: PathBuf,
    pub output_path: PathBuf,
}

impl RunPlan {
    /// Resolves every path for `identifier`, CLI overrides first, then config.
    pub fn resolve(identifier: &str, args: &Args, config: &Config) -> Self {
        let scores_path = args
            .scores
            .clone()
            .unwrap_or_else(|| config.scores_file_path.clone());
        let output_path = match &args.output {
            Some(output) => PathBuf::from(output),
            None => output_path_for(
                identifier,
                &config.output_dir,
                config.output_prefix.as_deref(),
            ),
        };

        Self {
            names_path: resolve_names_path(identifier, &config.input_dir),
            scores_path: PathBuf::from(scores_path),
            output_path,
        }
    }
}

/// Runs the whole abbreviation job.
///
/// Everything is computed in memory before the output file is touched, so any
/// failure leaves no output behind.
pub fn run_abbreviate(args: &Args, config: &Config) -> Result<RunSummary, AppError> {
    let identifier = match &args.names {
        Some(names) => names.trim().to_string(),
        None => prompt_for_names_identifier()?,
    };

    let plan = RunPlan::resolve(&identifier, args, config);
    execute_plan(&plan)
}

/// Reads, abbreviates and writes according to `plan`.
pub fn execute_plan(plan: &RunPlan) -> Result<RunSummary, AppError> {
    info!(
        names = %plan.names_path.display(),
        scores = %plan.scores_path.display(),
        output = %plan.output_path.display(),
        "Starting abbreviation run"
    );

    let names = read_names(&plan.names_path)?;
    let table = ScoreTable::from_path(&plan.scores_path)?;
    let results = abbreviate_roster(&names, &table)?;
    write_report(&plan.output_path, &results)?;

    let without_abbreviation = results.iter().filter(|r| r.best.is_empty()).count();
    info!(
        names = results.len(),
        without_abbreviation,
        "Abbreviation run finished"
    );

    Ok(RunSummary {
        output_path: plan.output_path.display().to_string(),
        names: results.len(),
        without_abbreviation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_scores(path: &std::path::Path) {
        let table: String = ('A'..='Z').map(|letter| format!("{letter} 1\n")).collect();
        fs::write(path, table).unwrap();
    }

    #[test]
    fn test_validate_args_rejects_conflicting_log_flags() {
        let args = Args {
            new_log_file_path: Some("x.log".to_string()),
            clear_log_file_path: true,
            ..Args::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_rejects_blank_names() {
        let args = Args {
            names: Some("  ".to_string()),
            ..Args::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_plan_uses_config_defaults() {
        let config = Config::default();
        let plan = RunPlan::resolve("trees", &Args::default(), &config);

        assert_eq!(plan.names_path, PathBuf::from("input").join("trees.txt"));
        assert_eq!(plan.scores_path, PathBuf::from("input/values.txt"));
        assert_eq!(
            plan.output_path,
            PathBuf::from("output").join("trees_abbrevs.txt")
        );
    }

    #[test]
    fn test_plan_prefers_cli_overrides() {
        let args = Args {
            scores: Some("custom/values.txt".to_string()),
            output: Some("custom/out.txt".to_string()),
            ..Args::default()
        };
        let config = Config {
            output_prefix: Some("liu_".to_string()),
            ..Config::default()
        };
        let plan = RunPlan::resolve("trees", &args, &config);

        assert_eq!(plan.scores_path, PathBuf::from("custom/values.txt"));
        assert_eq!(plan.output_path, PathBuf::from("custom/out.txt"));
    }

    #[test]
    fn test_plan_applies_output_prefix() {
        let config = Config {
            output_prefix: Some("liu_".to_string()),
            ..Config::default()
        };
        let plan = RunPlan::resolve("trees", &Args::default(), &config);
        assert_eq!(
            plan.output_path,
            PathBuf::from("output").join("liu_trees_abbrevs.txt")
        );
    }

    #[test]
    fn test_execute_plan_writes_output() {
        let temp_dir = tempdir().unwrap();
        let names_path = temp_dir.path().join("trees.txt");
        let scores_path = temp_dir.path().join("values.txt");
        let output_path = temp_dir.path().join("out").join("trees_abbrevs.txt");
        fs::write(&names_path, "Ann\nBob\nAl\n").unwrap();
        write_scores(&scores_path);

        let summary = execute_plan(&RunPlan {
            names_path,
            scores_path,
            output_path: output_path.clone(),
        })
        .unwrap();

        assert_eq!(summary.names, 3);
        assert_eq!(summary.without_abbreviation, 1);
        assert_eq!(
            fs::read_to_string(&output_path).unwrap(),
            "Ann\nANN\nBob\nBOB\nAl\n\n"
        );
    }

    #[test]
    fn test_execute_plan_failure_writes_nothing() {
        let temp_dir = tempdir().unwrap();
        let names_path = temp_dir.path().join("trees.txt");
        let scores_path = temp_dir.path().join("values.txt");
        let output_path = temp_dir.path().join("trees_abbrevs.txt");
        fs::write(&names_path, "Ann\nZed\n").unwrap();
        fs::write(&scores_path, "A 1\nN 1\n").unwrap();

        let result = execute_plan(&RunPlan {
            names_path,
            scores_path,
            output_path: output_path.clone(),
        });

        assert!(matches!(result, Err(AppError::MissingScoreEntry { .. })));
        assert!(!output_path.exists());
    }

    #[test]
    fn test_execute_plan_missing_names_file() {
        let temp_dir = tempdir().unwrap();
        let scores_path = temp_dir.path().join("values.txt");
        write_scores(&scores_path);

        let result = execute_plan(&RunPlan {
            names_path: temp_dir.path().join("absent.txt"),
            scores_path,
            output_path: temp_dir.path().join("absent_abbrevs.txt"),
        });
        assert!(matches!(result, Err(AppError::NamesFileNotFound { .. })));
    }
}
