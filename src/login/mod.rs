// src/login/mod.rs

pub mod classify;

use tracing::{info, instrument, warn};

use crate::error::{Result, ScrapeError};
use crate::session::{extract_token, token::preview, Transport};

pub use classify::{LoginClassifier, MarkerClassifier, SelectorClassifier};

pub const INDEX_PATH: &str = "index.php";
pub const SERVER_ID: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    Init,
    TokenFetched,
    LoggedIn,
    Failed,
}

/// Fetch token, then post credentials. Each flow logs in at most once.
pub struct LoginFlow<'a, T: Transport> {
    transport: &'a T,
    classifier: Box<dyn LoginClassifier + 'a>,
    state: LoginState,
    token: Option<String>,
}

impl<'a, T: Transport> LoginFlow<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self {
            transport,
            classifier: Box::new(MarkerClassifier),
            state: LoginState::Init,
            token: None,
        }
    }

    pub fn with_classifier(mut self, classifier: impl LoginClassifier + 'a) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    pub fn state(&self) -> LoginState {
        self.state
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn fail<V>(&mut self, err: ScrapeError) -> Result<V> {
        self.state = LoginState::Failed;
        Err(err)
    }

    /// `Init → TokenFetched`: GET the login page and capture its token.
    #[instrument(level = "info", skip(self))]
    pub fn fetch_token(&mut self) -> Result<()> {
        let page = match self.transport.get(INDEX_PATH, &[]) {
            Ok(p) => p,
            Err(e) => return self.fail(e),
        };

        // An empty value is as useless to the server as a missing one.
        match extract_token(&page.body).filter(|t| !t.is_empty()) {
            Some(token) => {
                info!(token = %preview(&token), "token captured");
                self.token = Some(token);
                self.state = LoginState::TokenFetched;
                Ok(())
            }
            None => {
                warn!(url = %page.final_url, "no token on login page");
                self.fail(ScrapeError::TokenNotFound)
            }
        }
    }

    /// `TokenFetched → LoggedIn | Failed`: post the login form and classify the reply.
    #[instrument(level = "info", skip(self, password))]
    pub fn submit(&mut self, username: &str, password: &str) -> Result<()> {
        let token = match (self.state, self.token.clone()) {
            (LoginState::TokenFetched, Some(t)) => t,
            _ => return self.fail(ScrapeError::TokenNotFound),
        };

        let form = [
            ("pma_username", username),
            ("pma_password", password),
            ("server", SERVER_ID),
            ("token", token.as_str()),
        ];
        let page = match self.transport.post(INDEX_PATH, &form) {
            Ok(p) => p,
            Err(e) => return self.fail(e),
        };

        if self.classifier.is_logged_in(&page) {
            info!(url = %page.final_url, "logged in");
            self.state = LoginState::LoggedIn;
            Ok(())
        } else {
            warn!(url = %page.final_url, "login markers still present");
            self.fail(ScrapeError::LoginRejected {
                final_url: page.final_url,
            })
        }
    }

    /// Both steps back to back.
    pub fn login(&mut self, username: &str, password: &str) -> Result<()> {
        self.fetch_token()?;
        self.submit(username, password)
    }
}
