//! Front-page article discovery for the console entry point.

use anyhow::{Context, anyhow};
use itertools::Itertools;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

use crate::process::fetch;

/// Fetch a front page and extract article links matching `selector`.
///
/// Relative hrefs are resolved against `page_url`; duplicates are dropped
/// while preserving first-seen order.
///
/// # Errors
///
/// Fails if the front page cannot be fetched, the page URL is malformed,
/// or the selector does not parse. A front page we cannot read leaves
/// nothing to analyze, so these are fatal rather than classified.
#[instrument(level = "info", skip_all, fields(page_url = %page_url))]
pub async fn discover_articles(
    client: &reqwest::Client,
    page_url: &str,
    selector: &str,
    timeout: Duration,
) -> anyhow::Result<Vec<String>> {
    let base_url = Url::parse(page_url).context("malformed front page url")?;
    let link_selector =
        Selector::parse(selector).map_err(|e| anyhow!("invalid front page selector: {e}"))?;

    let html = fetch(client, page_url, timeout)
        .await
        .with_context(|| format!("fetching front page {page_url}"))?;
    let urls = extract_links(&html, &base_url, &link_selector);

    info!(count = urls.len(), "Indexed front page article URLs");
    debug!(?urls, "Front page URLs");
    Ok(urls)
}

fn extract_links(html: &str, base_url: &Url, link_selector: &Selector) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(link_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| base_url.join(href).ok())
        .map(|url| url.to_string())
        .unique()
        .collect()
}
