//! The classified, per-article failure taxonomy.
//!
//! Every variant here is local to one URL and non-fatal: the article
//! processor converts it into an [`ArticleResult`](crate::process::ArticleResult)
//! with the matching status. Anything *not* representable here (malformed
//! URL, poisoned lock, panicked task) is a programming error and propagates
//! as `anyhow::Error` instead of being mis-filed into one of these kinds.

use thiserror::Error;

/// A classified failure while processing a single article URL.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Non-2xx HTTP status or transport-level failure (DNS, reset, TLS).
    /// The sub-cases are deliberately collapsed into one kind.
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The response was not fully received within the configured deadline.
    #[error("fetch timed out after {0} seconds")]
    Timeout(u64),

    /// No sanitizer is registered for the URL's host.
    #[error("no sanitizer registered for host {0:?}")]
    UnknownSite(String),

    /// Sanitization produced text that normalizes to zero words.
    #[error("article normalized to zero words")]
    EmptyArticle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_failure() {
        let e = ProcessError::UnknownSite("example.com".to_string());
        assert!(e.to_string().contains("example.com"));

        let e = ProcessError::Timeout(3);
        assert!(e.to_string().contains("3 seconds"));
    }
}
