//! Result formatting and destination.
//!
//! Plain output writes one value per line; JSON output serialises the full
//! result record. Either goes to standard output or to the `--output` file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

use crate::Result;

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One value per line
    #[default]
    Plain,
    /// Pretty-printed JSON
    Json,
}

/// Where and how command results are written.
#[derive(Debug, Clone, Default)]
pub struct Output {
    format: OutputFormat,
    path: Option<PathBuf>,
}

impl Output {
    /// Creates an output for `format`, writing to `path` or standard output.
    pub fn new(format: OutputFormat, path: Option<PathBuf>) -> Self {
        Self { format, path }
    }

    /// Writes `record`, using `plain` to render it when the format is plain.
    pub fn emit<T, F>(&self, record: &T, plain: F) -> Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        match &self.path {
            Some(path) => {
                let mut writer = BufWriter::new(File::create(path)?);
                self.emit_to(&mut writer, record, plain)?;
                writer.flush()?;
            }
            None => {
                let stdout = io::stdout();
                let mut writer = BufWriter::new(stdout.lock());
                self.emit_to(&mut writer, record, plain)?;
                writer.flush()?;
            }
        }
        Ok(())
    }

    /// Writes a sequence of variates.
    pub fn emit_values(&self, values: &[f64]) -> Result<()> {
        self.emit(values, |w| write_lines(w, values))
    }

    fn emit_to<W, T, F>(&self, writer: &mut W, record: &T, plain: F) -> Result<()>
    where
        W: Write,
        T: Serialize + ?Sized,
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        match self.format {
            OutputFormat::Plain => plain(writer)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *writer, record)?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }
}

/// Writes each value on its own line.
pub fn write_lines(writer: &mut dyn Write, values: &[f64]) -> io::Result<()> {
    for value in values {
        writeln!(writer, "{}", value)?;
    }
    Ok(())
}
