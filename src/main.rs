// src/main.rs
mod cli;
mod commands;
mod logging;
mod status;

use clap::Parser;
use cli::{Args, is_config_command};
use commands::{
    handle_config_update_command, handle_list_config_command, run_abbreviate, validate_args,
};
use name_abbrev::config::Config;
use name_abbrev::error::AppError;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = match validate_args(&args).and_then(|()| Config::load()) {
        Ok(config) => config,
        Err(e) => return startup_failure(&e),
    };

    if is_config_command(&args) {
        if args.list_config {
            handle_list_config_command(&config);
        } else if let Err(e) = handle_config_update_command(&args, &mut config) {
            return startup_failure(&e);
        }
        return ExitCode::SUCCESS;
    }

    let (log_location, guard) = match logging::setup_logging(&args, &config) {
        Ok(setup) => setup,
        Err(e) => return startup_failure(&e),
    };
    info!("Logs are written to {}", log_location.file_pattern());

    match run_abbreviate(&args, &config) {
        Ok(summary) => {
            status::print_success(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, input_error = e.is_input_error(), "Abbreviation run failed");
            status::print_failure(&log_location.file_pattern());
            // Flush buffered log lines before exiting
            drop(guard);
            ExitCode::FAILURE
        }
    }
}

/// No log file exists yet, so the error itself is shown.
fn startup_failure(error: &AppError) -> ExitCode {
    status::print_startup_failure(error);
    ExitCode::FAILURE
}
