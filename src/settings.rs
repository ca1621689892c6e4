//! Process-wide configuration constants.
//!
//! Everything here is fixed at process start. CLI flags default to these
//! values; nothing is reconfigurable at runtime.

/// Per-article fetch timeout in seconds (connection + read).
pub const TIMEOUT_SECS: u64 = 3;

/// Maximum number of URLs accepted in a single API request.
pub const URL_LIMIT: usize = 10;

/// Directory of charged-word dictionary files, one word per line.
pub const DICTIONARIES_DIR: &str = "charged_dict";

/// Front page scanned by the console entry point for article links.
pub const FRONTPAGE_URL: &str = "https://inosmi.ru";

/// CSS selector matching article links on the front page.
pub const FRONTPAGE_SELECTOR: &str = "article.index-main-news__article a[href]";

/// Default listen port for the HTTP API.
pub const DEFAULT_PORT: u16 = 8080;
