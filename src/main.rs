use anyhow::{Context, Result};
use clap::Parser;
use pmascraper::{
    config::{resolve_config, Cli},
    Scraper,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) env + args ───────────────────────────────────────────────
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // ─── 2) init logging (stderr; stdout carries the report) ────────
    let default_level = if cli.verbose { "debug" } else { "info" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    // ─── 3) run ──────────────────────────────────────────────────────
    let config = resolve_config(cli)?;
    let mut scraper = Scraper::new(config).context("building HTTP session")?;

    let result = scraper.run().context("scrape failed")?;
    info!(rows = result.rows.len(), "scrape finished");
    Ok(())
}
