use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use name_abbrev::error::AppError;
use std::io::{stderr, stdout};

/// Outcome of a successful run, shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: String,
    pub names: usize,
    pub without_abbreviation: usize,
}

const FRAME: Color = Color::AnsiValue(231);
const HIGHLIGHT: Color = Color::AnsiValue(51);
const WARNING: Color = Color::AnsiValue(226);

/// Lines of the success box; `(text, color)` where a colored line is split at its
/// first ':' and only the value part is colored.
pub fn summary_lines(summary: &RunSummary) -> Vec<(String, Option<Color>)> {
    let mut lines = vec![
        ("Abbreviations created successfully".to_string(), None),
        ("".to_string(), None),
        (
            format!("Output: {}", summary.output_path),
            Some(HIGHLIGHT),
        ),
        (format!("Names: {}", summary.names), Some(FRAME)),
    ];
    if summary.without_abbreviation > 0 {
        lines.push((
            format!("Without abbreviation: {}", summary.without_abbreviation),
            Some(WARNING),
        ));
    }
    lines
}

pub fn print_success(summary: &RunSummary) {
    println!();
    print_status_box(summary_lines(summary));
}

/// The one message shown for any pipeline failure; details go to the log.
/// `log_files` is the dated file pattern written by the rolling appender.
pub fn print_failure(log_files: &str) {
    execute!(
        stderr(),
        SetForegroundColor(Color::AnsiValue(196)),
        Print(
            "\nSomething went wrong; no output file created. Please check that the names file \
             exists and that the score table covers every letter.\n"
        ),
        ResetColor,
        Print(format!("Details were written to the daily log {log_files}\n")),
    )
    .ok();
}

/// Message for failures before logging exists: bad arguments, an unreadable
/// config file or a log setup error.
pub fn startup_failure_message(error: &AppError) -> String {
    format!("Could not start: {error}")
}

pub fn print_startup_failure(error: &AppError) {
    execute!(
        stderr(),
        SetForegroundColor(Color::AnsiValue(196)),
        Print(format!("\n{}\n", startup_failure_message(error))),
        ResetColor,
    )
    .ok();
}

/// Prints a dynamic-width box with optional color highlights
pub fn print_status_box(lines: Vec<(String, Option<Color>)>) {
    let max_content_width = lines
        .iter()
        .map(|(l, _)| l.chars().count())
        .max()
        .unwrap_or(0);
    let box_width = max_content_width + 4; // 2 for borders, 2 for padding
    let border = format!("╔{:═<width$}╗", "", width = box_width - 2);
    let sep = format!("╠{:═<width$}╣", "", width = box_width - 2);
    let bottom = format!("╚{:═<width$}╝", "", width = box_width - 2);

    execute!(stdout(), SetForegroundColor(FRAME), Print(format!("{border}\n"))).ok();

    for (i, (line, color)) in lines.iter().enumerate() {
        let padded = format!("║ {line:<max_content_width$} ║");
        match color {
            Some(c) => {
                if let Some((pre, col)) = line.split_once(':') {
                    let pre = format!("║ {pre}:");
                    let col = col.trim_start();
                    let pad = max_content_width - (pre.chars().count() - 2 + col.chars().count());
                    execute!(
                        stdout(),
                        SetForegroundColor(FRAME),
                        Print(pre),
                        SetForegroundColor(*c),
                        Print(col),
                        SetForegroundColor(FRAME),
                        Print(format!("{:pad$} ║\n", "", pad = pad)),
                    )
                    .ok();
                } else {
                    execute!(
                        stdout(),
                        SetForegroundColor(*c),
                        Print(padded),
                        SetForegroundColor(FRAME),
                        Print("\n")
                    )
                    .ok();
                }
            }
            None => {
                execute!(stdout(), SetForegroundColor(FRAME), Print(padded), Print("\n")).ok();
            }
        }
        if i == 0 && lines.len() > 2 {
            execute!(stdout(), Print(format!("{sep}\n"))).ok();
        }
    }

    execute!(stdout(), Print(format!("{bottom}\n")), ResetColor).ok();
}
