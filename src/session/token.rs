// src/session/token.rs

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{trace, warn};

static TOKEN_INPUT: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"input[name="token"]"#).expect("token selector should parse"));

/// Value of the first `<input name="token">` in `html`, if any.
///
/// A token input without a `value` attribute counts as absent.
pub fn extract_token(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let input = doc.select(&TOKEN_INPUT).next()?;
    match input.value().attr("value") {
        Some(v) => {
            trace!(len = v.len(), "token input found");
            Some(v.to_string())
        }
        None => {
            warn!("token input has no value attribute");
            None
        }
    }
}

/// First 20 characters of a token, for log lines.
pub fn preview(token: &str) -> String {
    token.chars().take(20).collect()
}
