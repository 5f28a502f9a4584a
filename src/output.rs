//! Output formatting and persistence for poll results.
//!
//! Supports pretty-printing, JSON to stdout, and CSV append.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::history::Sample;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Logs a value using Rust's debug pretty-print format.
pub fn print_pretty<T: std::fmt::Debug>(value: &T) {
    debug!("{:#?}", value);
}

/// Writes `value` as one line of JSON to `out`.
pub fn write_json<W: Write, T: Serialize>(mut out: W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Writes `value` as one line of JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    write_json(std::io::stdout().lock(), value)
}

/// Appends a [`Sample`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, sample: &Sample) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(sample)?;
    writer.flush()?;

    Ok(())
}
