// src/report/mod.rs

pub mod export;
pub mod text;

use std::{fs::File, io, io::Write, path::Path};

use tracing::info;

use crate::config::OutputFormat;
use crate::error::{Result, ScrapeError};
use crate::scrape::ScrapeResult;

pub use export::{write_csv, write_json};
pub use text::render_text;

/// Write `result` to `w` in `format`.
pub fn write_report<W: Write>(
    mut w: W,
    format: OutputFormat,
    table: &str,
    result: &ScrapeResult,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let out = render_text(table, result).map_err(|e| ScrapeError::Export(e.to_string()))?;
            w.write_all(out.as_bytes())?;
            w.flush()?;
            Ok(())
        }
        OutputFormat::Json => write_json(w, result),
        OutputFormat::Csv => write_csv(w, result),
    }
}

/// Send the report to `output`, or stdout when unset.
pub fn emit(
    format: OutputFormat,
    output: Option<&Path>,
    table: &str,
    result: &ScrapeResult,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)?;
            write_report(io::BufWriter::new(file), format, table, result)?;
            info!(path = %path.display(), ?format, "report written");
            Ok(())
        }
        None => write_report(io::stdout().lock(), format, table, result),
    }
}
