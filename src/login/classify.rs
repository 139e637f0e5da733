// src/login/classify.rs

use scraper::{Html, Selector};

use crate::session::Page;

/// Decides whether the page returned by the login POST means we are in.
pub trait LoginClassifier {
    fn is_logged_in(&self, page: &Page) -> bool;
}

/// Success is the absence of login markers: the body no longer mentions
/// `pma_username` and the final URL does not contain `login`.
///
/// This leans on incidental page text. A positive signal such as
/// [`SelectorClassifier`] is sturdier when the console layout is known.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerClassifier;

pub const USERNAME_MARKER: &str = "pma_username";
pub const LOGIN_URL_MARKER: &str = "login";

impl LoginClassifier for MarkerClassifier {
    fn is_logged_in(&self, page: &Page) -> bool {
        !(page.body.contains(USERNAME_MARKER)
            || page.final_url.to_lowercase().contains(LOGIN_URL_MARKER))
    }
}

/// Success is the presence of an element only rendered after login,
/// e.g. `#pma_navigation`.
#[derive(Debug, Clone)]
pub struct SelectorClassifier {
    selector: Selector,
}

impl SelectorClassifier {
    pub fn new(css: &str) -> Option<Self> {
        Selector::parse(css).ok().map(|selector| Self { selector })
    }
}

impl LoginClassifier for SelectorClassifier {
    fn is_logged_in(&self, page: &Page) -> bool {
        Html::parse_document(&page.body)
            .select(&self.selector)
            .next()
            .is_some()
    }
}
