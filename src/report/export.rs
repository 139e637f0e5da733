// src/report/export.rs

use std::io::Write;

use csv::WriterBuilder;

use crate::error::Result;
use crate::scrape::ScrapeResult;

/// `{"headers": [...], "rows": [[...], ...]}`, pretty-printed.
pub fn write_json<W: Write>(mut w: W, result: &ScrapeResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut w, result)?;
    writeln!(w)?;
    w.flush()?;
    Ok(())
}

/// Header record (when present) then one record per row. Ragged rows are
/// written as-is.
pub fn write_csv<W: Write>(w: W, result: &ScrapeResult) -> Result<()> {
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(w);
    if !result.headers.is_empty() {
        wtr.write_record(&result.headers)?;
    }
    for row in &result.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn sample() -> ScrapeResult {
        ScrapeResult {
            headers: vec!["id".into(), "name".into()],
            rows: vec![
                vec!["1".into(), "Alice, Jr.".into()],
                vec!["2".into()],
            ],
        }
    }

    #[test]
    fn json_shape() -> Result<()> {
        let mut buf = Vec::new();
        write_json(&mut buf, &sample())?;
        let v: serde_json::Value = serde_json::from_slice(&buf)?;
        assert_eq!(v["headers"], serde_json::json!(["id", "name"]));
        assert_eq!(v["rows"][0][1], "Alice, Jr.");
        assert_eq!(v["rows"][1].as_array().map(|a| a.len()), Some(1));
        Ok(())
    }

    #[test]
    fn csv_quotes_and_keeps_ragged_rows() -> Result<()> {
        let mut buf = Vec::new();
        write_csv(&mut buf, &sample())?;
        assert_eq!(String::from_utf8(buf)?, "id,name\n1,\"Alice, Jr.\"\n2\n");
        Ok(())
    }

    #[test]
    fn csv_without_headers() -> Result<()> {
        let r = ScrapeResult {
            headers: vec![],
            rows: vec![vec!["x".into()]],
        };
        let mut buf = Vec::new();
        write_csv(&mut buf, &r)?;
        assert_eq!(String::from_utf8(buf)?, "x\n");
        Ok(())
    }
}
