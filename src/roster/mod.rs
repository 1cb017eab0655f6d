//! Roster file I/O.
//!
//! - `reader`: resolving names-file identifiers and reading one name per line
//! - `writer`: rendering results, writing them atomically, and reading them back

mod reader;
mod writer;

pub use reader::{parse_names, read_names, resolve_names_path};
pub use writer::{output_path_for, parse_report, read_report, render_report, write_report};
