//! Per-article processing pipeline and its concurrency driver.
//!
//! One article flows through a single pass with no retries:
//!
//! 1. Resolve the URL's host and look up its sanitizer (miss ⇒ `PARSING_ERROR`).
//! 2. Fetch the page with a bounded timeout (`TIMEOUT` / `FETCH_ERROR`).
//! 3. Sanitize to plain text, tokenize, normalize, and score against the
//!    charged-words set (zero words ⇒ `PARSING_ERROR`).
//!
//! Every classified failure becomes an [`ArticleResult`]; nothing from the
//! [`ProcessError`] taxonomy escapes the processor. A failure *outside* the
//! taxonomy (malformed URL, panicked scoring task) is a programming error
//! and aborts the whole batch instead of masquerading as a bad article.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{Context, anyhow};
use serde::Serialize;
use tokio::task::JoinSet;
use tracing::{debug, info, instrument};
use url::Url;

use crate::error::ProcessError;
use crate::morph::Normalizer;
use crate::sanitizers;
use crate::text::{calculate_jaundice_rate, split_by_words};

/// Outcome classification for one processed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingStatus {
    Ok,
    FetchError,
    ParsingError,
    Timeout,
}

impl From<&ProcessError> for ProcessingStatus {
    fn from(error: &ProcessError) -> Self {
        match error {
            ProcessError::Fetch(_) => ProcessingStatus::FetchError,
            ProcessError::Timeout(_) => ProcessingStatus::Timeout,
            ProcessError::UnknownSite(_) | ProcessError::EmptyArticle => {
                ProcessingStatus::ParsingError
            }
        }
    }
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProcessingStatus::Ok => "OK",
            ProcessingStatus::FetchError => "FETCH_ERROR",
            ProcessingStatus::ParsingError => "PARSING_ERROR",
            ProcessingStatus::Timeout => "TIMEOUT",
        };
        f.write_str(name)
    }
}

/// One scored (or failed) article, in the shape the API serves.
///
/// `score` is present exactly when `status` is [`ProcessingStatus::Ok`].
/// `words_count` is the character count of the sanitized text, 0 when
/// sanitization never ran. The name is historical; see DESIGN.md.
#[derive(Debug, Serialize)]
pub struct ArticleResult {
    pub status: ProcessingStatus,
    pub url: String,
    pub score: Option<f64>,
    pub words_count: usize,
}

/// Read-only analysis dependencies shared by every in-flight article.
///
/// Cheap to clone: one `reqwest::Client` handle plus two `Arc`s. Nothing
/// here is mutated after startup.
#[derive(Clone)]
pub struct AnalysisContext {
    pub client: reqwest::Client,
    pub charged_words: Arc<HashSet<String>>,
    pub morph: Arc<dyn Normalizer>,
    pub timeout: Duration,
}

impl AnalysisContext {
    pub fn new(
        client: reqwest::Client,
        charged_words: HashSet<String>,
        morph: Arc<dyn Normalizer>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            charged_words: Arc::new(charged_words),
            morph,
            timeout,
        }
    }
}

/// Fetch `url`, enforcing `timeout` over connection + read combined.
///
/// # Errors
///
/// [`ProcessError::Timeout`] when the deadline elapses,
/// [`ProcessError::Fetch`] for a non-2xx status or any transport failure.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<String, ProcessError> {
    let request = async {
        let response = client.get(url).send().await?.error_for_status()?;
        response.text().await
    };
    match tokio::time::timeout(timeout, request).await {
        Ok(Ok(body)) => Ok(body),
        Ok(Err(error)) => Err(ProcessError::Fetch(error)),
        Err(_) => Err(ProcessError::Timeout(timeout.as_secs())),
    }
}

struct Scored {
    score: f64,
    words_count: usize,
}

struct Classified {
    error: ProcessError,
    words_count: usize,
}

/// Run the fetch → sanitize → normalize → score pipeline for one URL.
///
/// The outer `Result` carries fatal errors only; classified failures come
/// back in the inner `Err` so the caller can pattern-match the taxonomy.
async fn run_pipeline(
    ctx: &AnalysisContext,
    host: &str,
    url: &str,
) -> anyhow::Result<Result<Scored, Classified>> {
    let sanitizer = match sanitizers::lookup(host) {
        Ok(sanitizer) => sanitizer,
        Err(error) => {
            return Ok(Err(Classified {
                error,
                words_count: 0,
            }));
        }
    };

    let html = match fetch(&ctx.client, url, ctx.timeout).await {
        Ok(html) => html,
        Err(error) => {
            return Ok(Err(Classified {
                error,
                words_count: 0,
            }));
        }
    };

    let text = sanitizer(&html, true);
    let words_count = text.chars().count();

    // Tokenization and scoring are CPU-bound; keep them off the async loop
    // so slow articles cannot starve their siblings.
    let morph = Arc::clone(&ctx.morph);
    let charged_words = Arc::clone(&ctx.charged_words);
    let started = Instant::now();
    let scored = tokio::task::spawn_blocking(move || {
        calculate_jaundice_rate(split_by_words(morph.as_ref(), &text), &charged_words)
    })
    .await
    .context("scoring task panicked")?;
    info!(
        %url,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Analysis finished"
    );

    match scored {
        Ok(score) => Ok(Ok(Scored { score, words_count })),
        Err(_) => Ok(Err(Classified {
            error: ProcessError::EmptyArticle,
            words_count,
        })),
    }
}

/// Process one article URL and append its result to the shared collection.
///
/// All four classified failure kinds are converted into an
/// [`ArticleResult`] here; only programming errors propagate.
#[instrument(level = "debug", skip_all, fields(%url))]
pub async fn process_article(
    ctx: AnalysisContext,
    url: String,
    results: Arc<Mutex<Vec<ArticleResult>>>,
) -> anyhow::Result<()> {
    let parsed = Url::parse(&url).with_context(|| format!("malformed article url {url:?}"))?;
    // URLs without a host (mailto:, data:) fall through registry lookup
    // and classify as PARSING_ERROR like any unsupported site.
    let host = parsed.host_str().unwrap_or_default().to_string();

    let (status, score, words_count) = match run_pipeline(&ctx, &host, &url).await? {
        Ok(scored) => (ProcessingStatus::Ok, Some(scored.score), scored.words_count),
        Err(classified) => {
            debug!(%url, error = %classified.error, "Article classified as failed");
            (
                ProcessingStatus::from(&classified.error),
                None,
                classified.words_count,
            )
        }
    };

    let result = ArticleResult {
        status,
        url,
        score,
        words_count,
    };
    results
        .lock()
        .map_err(|_| anyhow!("results lock poisoned"))?
        .push(result);
    Ok(())
}

/// Process a batch of URLs concurrently and join them all.
///
/// One task per URL; a per-URL timeout never cancels siblings, and the
/// driver waits for every task before returning. Result order is
/// completion order, not input order.
///
/// # Errors
///
/// Propagates the first fatal (unclassified) error, aborting any articles
/// still in flight.
#[instrument(level = "info", skip_all, fields(count = urls.len()))]
pub async fn process_many(
    ctx: &AnalysisContext,
    urls: Vec<String>,
) -> anyhow::Result<Vec<ArticleResult>> {
    let results = Arc::new(Mutex::new(Vec::with_capacity(urls.len())));

    let mut tasks = JoinSet::new();
    for url in urls {
        tasks.spawn(process_article(ctx.clone(), url, Arc::clone(&results)));
    }
    while let Some(joined) = tasks.join_next().await {
        joined.context("article task panicked")??;
    }

    let results = Arc::try_unwrap(results)
        .map_err(|_| anyhow!("results collection still shared after join"))?
        .into_inner()
        .map_err(|_| anyhow!("results lock poisoned"))?;
    info!(count = results.len(), "Batch processed");
    Ok(results)
}
