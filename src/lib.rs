pub mod config;
pub mod error;
pub mod login;
pub mod navigate;
pub mod report;
pub mod runner;
pub mod scrape;
pub mod session;

pub use config::{OutputFormat, ScraperConfig};
pub use error::ScrapeError;
pub use runner::Scraper;
pub use scrape::ScrapeResult;
