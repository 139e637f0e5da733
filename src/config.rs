// src/config.rs

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::{fmt, path::PathBuf, time::Duration};
use url::Url;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_DATABASE: &str = "testDB";
pub const DEFAULT_TABLE: &str = "users";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Banner plus pipe-delimited table
    #[default]
    Text,
    Json,
    Csv,
}

/// Log into a phpMyAdmin console and dump one table.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Console root, e.g. http://host/phpmyadmin
    #[arg(long, env = "PMA_BASE_URL")]
    pub base_url: String,

    #[arg(short, long, env = "PMA_USERNAME")]
    pub username: String,

    #[arg(short, long, env = "PMA_PASSWORD", hide_env_values = true)]
    pub password: String,

    #[arg(short, long, env = "PMA_DATABASE", default_value = DEFAULT_DATABASE)]
    pub database: String,

    #[arg(short, long, env = "PMA_TABLE", default_value = DEFAULT_TABLE)]
    pub table: String,

    /// Per-request timeout
    #[arg(long, env = "PMA_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[arg(long, env = "PMA_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the export here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Raise the default log level to debug
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything one run needs. Built once, never mutated.
#[derive(Clone)]
pub struct ScraperConfig {
    pub base_url: Url,
    pub username: String,
    pub password: String,
    pub database: String,
    pub table: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

// Keeps the password out of logs.
impl fmt::Debug for ScraperConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScraperConfig")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .field("password", &"***")
            .field("database", &self.database)
            .field("table", &self.table)
            .field("timeout", &self.timeout)
            .field("format", &self.format)
            .field("output", &self.output)
            .finish()
    }
}

impl ScraperConfig {
    /// Config with the stock database, table, timeout and user agent.
    pub fn new(base_url: &str, username: &str, password: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            username: username.to_string(),
            password: password.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            table: DEFAULT_TABLE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            format: OutputFormat::Text,
            output: None,
        })
    }
}

/// Normalise the console root so `index.php` joins underneath it.
///
/// The trailing slash is trimmed first, then re-added, so `http://h/pma`
/// and `http://h/pma/` both resolve `index.php` to `http://h/pma/index.php`.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim().trim_end_matches('/');
    Url::parse(&format!("{}/", trimmed)).with_context(|| format!("parsing base URL {}", raw))
}

pub fn resolve_config(cli: Cli) -> Result<ScraperConfig> {
    Ok(ScraperConfig {
        base_url: parse_base_url(&cli.base_url)?,
        username: cli.username,
        password: cli.password,
        database: cli.database,
        table: cli.table,
        timeout: Duration::from_secs(cli.timeout_secs),
        user_agent: cli.user_agent,
        format: cli.format,
        output: cli.output,
    })
}
