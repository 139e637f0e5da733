// src/runner.rs

use tracing::{info, instrument};

use crate::config::ScraperConfig;
use crate::error::Result;
use crate::login::{LoginClassifier, LoginFlow, MarkerClassifier};
use crate::navigate::navigate_to_database;
use crate::report::emit;
use crate::scrape::{scrape_table, ScrapeResult};
use crate::session::{Page, SessionClient, Transport};

/// One run against one console: login, navigate, scrape, report.
pub struct Scraper<T: Transport> {
    config: ScraperConfig,
    transport: T,
    classifier: Box<dyn LoginClassifier>,
    token: Option<String>,
}

impl Scraper<SessionClient> {
    pub fn new(config: ScraperConfig) -> Result<Self> {
        let transport = SessionClient::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> Scraper<T> {
    pub fn with_transport(config: ScraperConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            classifier: Box::new(MarkerClassifier),
            token: None,
        }
    }

    pub fn with_classifier(mut self, classifier: impl LoginClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// Token used for the login submission, once captured.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn login(&mut self) -> Result<()> {
        let mut flow =
            LoginFlow::new(&self.transport).with_classifier(ClassifierRef(&*self.classifier));
        let outcome = flow.login(&self.config.username, &self.config.password);
        self.token = flow.token().map(str::to_string);
        outcome
    }

    /// Login, navigation and scrape, without reporting.
    #[instrument(
        level = "info",
        skip(self),
        fields(database = %self.config.database, table = %self.config.table)
    )]
    pub fn collect(&mut self) -> Result<ScrapeResult> {
        info!(
            base_url = %self.config.base_url,
            user = %self.config.username,
            "starting scrape"
        );

        self.login()?;
        navigate_to_database(&self.transport, &self.config.database)?;
        scrape_table(&self.transport, &self.config.database, &self.config.table)
    }

    /// Full run: collect, then write the report in the configured format.
    pub fn run(&mut self) -> Result<ScrapeResult> {
        let result = self.collect()?;
        emit(
            self.config.format,
            self.config.output.as_deref(),
            &self.config.table,
            &result,
        )?;
        Ok(result)
    }
}

/// Lends the runner's boxed classifier to a borrowed `LoginFlow`.
struct ClassifierRef<'a>(&'a dyn LoginClassifier);

impl LoginClassifier for ClassifierRef<'_> {
    fn is_logged_in(&self, page: &Page) -> bool {
        self.0.is_logged_in(page)
    }
}
