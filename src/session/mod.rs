// src/session/mod.rs

pub mod token;

#[cfg(test)]
pub(crate) mod testing;

use reqwest::blocking::{Client, RequestBuilder};
use tracing::debug;
use url::Url;

use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};

pub use token::extract_token;

/// One completed HTTP exchange, after redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub final_url: String,
    pub body: String,
}

/// The HTTP calls the flow needs. Paths are relative to the console root.
///
/// Implementations follow redirects, keep cookies between calls and fail on
/// any status outside 2xx/3xx.
pub trait Transport {
    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Page>;
    fn post(&self, path: &str, form: &[(&str, &str)]) -> Result<Page>;
}

/// Cookie-bearing blocking client bound to one console root.
pub struct SessionClient {
    client: Client,
    base: Url,
}

impl SessionClient {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|source| ScrapeError::Transport {
                url: config.base_url.to_string(),
                source,
            })?;
        Ok(Self {
            client,
            base: config.base_url.clone(),
        })
    }

    fn url_for(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.base.join(path).map_err(|source| ScrapeError::InvalidUrl {
            url: format!("{}{}", self.base, path),
            source,
        })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    fn execute(&self, method: &str, url: &Url, req: RequestBuilder) -> Result<Page> {
        debug!(%method, %url, "request");
        let transport = |source| ScrapeError::Transport {
            url: url.to_string(),
            source,
        };

        let resp = req.send().map_err(transport)?;
        let status = resp.status();
        let final_url = resp.url().to_string();
        debug!(%method, %url, status = status.as_u16(), %final_url, "response");

        if !(status.is_success() || status.is_redirection()) {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().map_err(transport)?;
        Ok(Page {
            status: status.as_u16(),
            final_url,
            body,
        })
    }
}

impl Transport for SessionClient {
    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Page> {
        let url = self.url_for(path, query)?;
        self.execute("GET", &url, self.client.get(url.clone()))
    }

    fn post(&self, path: &str, form: &[(&str, &str)]) -> Result<Page> {
        let url = self.url_for(path, &[])?;
        self.execute("POST", &url, self.client.post(url.clone()).form(form))
    }
}
