// src/report/text.rs

use std::fmt::Write;

use crate::scrape::ScrapeResult;

const RULE_WIDTH: usize = 80;
const SEPARATOR: &str = " | ";

/// Banner, pipe-joined header and rows, and a record count.
pub fn render_text(table: &str, result: &ScrapeResult) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    if result.rows.is_empty() {
        writeln!(out, "No data found")?;
        return Ok(out);
    }

    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "DATA FROM TABLE {}", table.to_uppercase())?;
    writeln!(out, "{}", rule)?;

    if !result.headers.is_empty() {
        let header_line = result.headers.join(SEPARATOR);
        writeln!(out, "{}", header_line)?;
        writeln!(out, "{}", "-".repeat(header_line.chars().count()))?;
    }

    for row in &result.rows {
        writeln!(out, "{}", row.join(SEPARATOR))?;
    }

    writeln!(out, "\nTotal records: {}", result.rows.len())?;
    writeln!(out, "{}", rule)?;
    Ok(out)
}
