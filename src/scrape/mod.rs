// src/scrape/mod.rs

pub mod cells;
pub mod locate;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::{Result, ScrapeError};
use crate::login::INDEX_PATH;
use crate::session::Transport;

use self::cells::{cell_text, keep_data_cell, keep_header, placeholder_headers};
use self::locate::locate_results_table;

static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("row selector should parse"));
static CELL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th, td").expect("cell selector should parse"));

/// Rows scraped from the results grid.
///
/// Row widths are left as found; a row need not match `headers.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ScrapeResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn header_cells(row: ElementRef<'_>) -> Vec<String> {
    row.select(&CELL)
        .map(cell_text)
        .filter(|t| keep_header(t))
        .collect()
}

fn data_cells(row: ElementRef<'_>) -> Vec<String> {
    row.select(&CELL)
        .map(cell_text)
        .filter(|t| keep_data_cell(t))
        .collect()
}

/// Parse the table-browse page. `None` when no results table is present.
pub fn parse_results_table(html: &str) -> Option<ScrapeResult> {
    let doc = Html::parse_document(html);
    let table = locate_results_table(&doc)?;

    let mut rows_iter = table.select(&ROW);
    let mut headers = rows_iter.next().map(header_cells).unwrap_or_default();

    let rows: Vec<Vec<String>> = rows_iter
        .map(data_cells)
        .filter(|cells| !cells.is_empty())
        .collect();

    if headers.is_empty() {
        if let Some(first) = rows.first() {
            debug!(width = first.len(), "no headers, synthesising");
            headers = placeholder_headers(first.len());
        }
    }

    Some(ScrapeResult { headers, rows })
}

/// GET the browse view for `database.table` and scrape its grid.
#[instrument(level = "info", skip(transport))]
pub fn scrape_table<T: Transport>(
    transport: &T,
    database: &str,
    table: &str,
) -> Result<ScrapeResult> {
    let page = transport.get(INDEX_PATH, &[("db", database), ("table", table)])?;

    match parse_results_table(&page.body) {
        Some(result) => {
            info!(
                headers = result.headers.len(),
                rows = result.rows.len(),
                "table scraped"
            );
            Ok(result)
        }
        None => {
            warn!(url = %page.final_url, "no results table on page");
            Err(ScrapeError::TableNotFound {
                database: database.to_string(),
                table: table.to_string(),
            })
        }
    }
}
