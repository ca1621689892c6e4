//! # Jaundice
//!
//! Scores news articles by their "jaundice rate": the fraction of words in
//! the article body that appear in a dictionary of emotionally charged
//! words — a crude bias-detection heuristic.
//!
//! ## Pipeline
//!
//! 1. **Fetch**: download the article HTML with a bounded timeout
//! 2. **Sanitize**: strip site-specific boilerplate down to the body text
//! 3. **Normalize**: tokenize and reduce words to their dictionary form
//! 4. **Score**: charged words / total words
//!
//! Each URL ends in exactly one status: `OK`, `FETCH_ERROR`,
//! `PARSING_ERROR`, or `TIMEOUT`.
//!
//! ## Usage
//!
//! ```sh
//! # Score everything linked from the configured front page
//! jaundice analyze
//!
//! # Serve the pipeline as a JSON API
//! jaundice serve --port 8080
//! curl 'http://localhost:8080/?urls=https://inosmi.ru/politics/1001.html'
//! ```

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod dictionary;
mod error;
mod frontpage;
mod morph;
mod process;
mod sanitizers;
mod server;
mod settings;
mod text;

use cli::{Cli, Command};
use morph::LightStemmer;
use process::AnalysisContext;
use server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // Shared read-only analysis state, built once and handed to every task.
    let charged_words = dictionary::load_charged_words(&args.dictionaries_dir)?;
    let ctx = AnalysisContext::new(
        reqwest::Client::new(),
        charged_words,
        Arc::new(LightStemmer),
        Duration::from_secs(args.timeout),
    );

    match args.command {
        Command::Analyze { frontpage_url } => {
            let urls = frontpage::discover_articles(
                &ctx.client,
                &frontpage_url,
                settings::FRONTPAGE_SELECTOR,
                ctx.timeout,
            )
            .await?;
            let results = process::process_many(&ctx, urls).await?;
            for result in &results {
                println!("URL: {}", result.url);
                println!("Status: {}", result.status);
                match result.score {
                    Some(score) => println!("Score: {score:.4}"),
                    None => println!("Score: -"),
                }
                println!("Words in article: {}", result.words_count);
                println!();
            }
            info!(count = results.len(), "Analysis complete");
        }
        Command::Serve { port } => {
            let state = AppState {
                ctx,
                url_limit: settings::URL_LIMIT,
            };
            server::run(port, state).await?;
        }
    }

    Ok(())
}
