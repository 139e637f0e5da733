// src/scrape/locate.rs

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Class carried by the grid in the table-browse view.
pub const RESULTS_CLASS: &str = "table_results";

static RESULTS_TABLE: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(&format!("table.{}", RESULTS_CLASS)).expect("results selector should parse")
});
static ANY_TABLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table").expect("table selector should parse"));

/// One way of finding the results table in a parsed page.
pub struct LookupStrategy {
    pub name: &'static str,
    pub find: for<'a> fn(&'a Html) -> Option<ElementRef<'a>>,
}

/// Tried in order; first hit wins.
pub const STRATEGIES: &[LookupStrategy] = &[
    LookupStrategy {
        name: "class-selector",
        find: by_class_selector,
    },
    LookupStrategy {
        name: "table-scan",
        find: by_table_scan,
    },
];

fn by_class_selector(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&RESULTS_TABLE).next()
}

fn by_table_scan(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&ANY_TABLE)
        .find(|t| t.value().classes().any(|c| c == RESULTS_CLASS))
}

pub fn locate_results_table(doc: &Html) -> Option<ElementRef<'_>> {
    STRATEGIES.iter().find_map(|s| {
        let hit = (s.find)(doc);
        if hit.is_some() {
            debug!(strategy = s.name, "results table located");
        }
        hit
    })
}
