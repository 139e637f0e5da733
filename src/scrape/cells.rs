// src/scrape/cells.rs

use scraper::ElementRef;
use tracing::trace;

/// Button captions rendered inside the results grid.
pub const ACTION_LABELS: [&str; 3] = ["Edit", "Copy", "Delete"];

/// Start of the confirmation SQL embedded in each row's delete cell.
pub const DELETE_SQL_PREFIX: &str = "DELETE FROM";

/// Delete-button caption glued to its confirmation SQL, as seen in the
/// `users` table view.
pub const DELETE_ARTIFACT: &str = "DeleteDELETE FROM `users` WHERE `users`.`id` = ";

/// Text of a cell with each text node trimmed and the pieces joined
/// without a separator.
pub fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn is_action_label(text: &str) -> bool {
    ACTION_LABELS.contains(&text)
}

pub fn keep_header(text: &str) -> bool {
    !text.is_empty() && !is_action_label(text)
}

pub fn keep_data_cell(text: &str) -> bool {
    if text.is_empty() || is_action_label(text) || text.starts_with(DELETE_SQL_PREFIX) {
        return false;
    }

    // Suspect: a cell carrying the artifact is dropped whole instead of being
    // cleaned down to what follows it. Unclear which was meant; kept literal.
    // A cell that is exactly the artifact cleans to "" and is kept.
    let cleaned = text.replace(DELETE_ARTIFACT, "");
    if !cleaned.is_empty() && cleaned != text {
        trace!(cell = %text, "dropping cell carrying delete artifact");
        return false;
    }
    true
}

/// `Column 1`, `Column 2`, … up to `width`.
pub fn placeholder_headers(width: usize) -> Vec<String> {
    (1..=width).map(|i| format!("Column {}", i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn headers_skip_action_labels_and_blanks() {
        for label in ACTION_LABELS {
            assert!(!keep_header(label));
        }
        assert!(!keep_header(""));
        assert!(keep_header("id"));
        assert!(keep_header("Edited"));
        assert!(keep_header("edit"));
    }

    #[test]
    fn data_cells_skip_labels_blanks_and_sql() {
        assert!(!keep_data_cell(""));
        assert!(!keep_data_cell("Copy"));
        assert!(!keep_data_cell("DELETE FROM `users` WHERE `users`.`id` = 1;"));
        assert!(keep_data_cell("alice@example.com"));
        assert!(keep_data_cell("delete from lowercase is data"));
    }

    // Locks in the suspect drop-on-change rule: the cell is discarded, not cleaned to "1;".
    #[test]
    fn artifact_cell_is_dropped_not_cleaned() {
        let text = "DeleteDELETE FROM `users` WHERE `users`.`id` = 1;";
        assert!(!keep_data_cell(text));
        assert!(!keep_data_cell("xDeleteDELETE FROM `users` WHERE `users`.`id` = "));
    }

    #[test]
    fn bare_artifact_survives_because_cleaning_empties_it() {
        assert!(keep_data_cell(DELETE_ARTIFACT));
    }

    #[test]
    fn placeholder_headers_are_one_indexed() {
        assert_eq!(placeholder_headers(3), vec!["Column 1", "Column 2", "Column 3"]);
        assert!(placeholder_headers(0).is_empty());
    }

    #[test]
    fn cell_text_trims_each_node_and_concatenates() {
        let doc = Html::parse_fragment(
            "<table><tr><td>\n  <a>Delete</a>\n <span> DELETE FROM t </span>\n</td></tr></table>",
        );
        let sel = Selector::parse("td").unwrap();
        let td = doc.select(&sel).next().unwrap();
        assert_eq!(cell_text(td), "DeleteDELETE FROM t");
    }
}
