use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the invocation only manages configuration and runs no abbreviation
pub fn is_config_command(args: &Args) -> bool {
    args.list_config
        || args.new_scores_file_path.is_some()
        || args.new_output_dir.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Roster Abbreviator
///
/// Builds a unique three-letter abbreviation for every name in a roster file.
/// Each abbreviation is the name's first letter plus two later letters, scored by
/// letter position; abbreviations shared between names are discarded and the
/// lowest-scoring survivors are written out, two lines per name.
///
/// The output goes to `<output_dir>/<names>_abbrevs.txt` unless `--output` is given.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Names file to abbreviate. Either a path to an existing file or a bare name
    /// such as `trees`, which is looked up as `<input_dir>/trees.txt`.
    /// Prompted for when omitted.
    #[arg(value_name = "NAMES")]
    pub names: Option<String>,

    /// Score table to use for this run instead of the configured one.
    #[arg(long = "scores", short = 's', help_heading = "Input Options")]
    pub scores: Option<String>,

    /// Write the output to this file instead of the default location.
    #[arg(long = "output", short = 'o', help_heading = "Output Options")]
    pub output: Option<String>,

    /// Update the default score table path in config.
    #[arg(long = "set-scores-file", help_heading = "Configuration")]
    pub new_scores_file_path: Option<String>,

    /// Update the default output directory in config.
    #[arg(long = "set-output-dir", help_heading = "Configuration")]
    pub new_output_dir: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode: logs are echoed to the terminal as well as the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
