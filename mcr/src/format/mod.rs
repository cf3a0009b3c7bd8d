//! Output formatting for list results.

use serde::Serialize;
use std::io::{self, Write};


/// Output format for list commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One entry per line
    #[default]
    Pretty,
    /// A JSON array
    Json,
}

/// Writes `items` to `out` in the chosen format.
pub fn write_list<W, T>(out: &mut W, items: &[T], format: OutputFormat) -> io::Result<()>
where
    W: Write,
    T: Serialize + std::fmt::Display,
{
    match format {
        OutputFormat::Pretty => {
            for item in items {
                writeln!(out, "{}", item)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, items)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
