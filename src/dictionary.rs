//! Charged-words dictionary loader.
//!
//! The dictionary is a directory of plain-text files, one word per line
//! (`charged_dict/negative.txt`, `charged_dict/positive.txt`, ...). All
//! files are concatenated into a single lowercase set at startup and the
//! set is never mutated afterwards.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, info, instrument};

/// Load every word list under `dir` into one lowercase set.
///
/// Lines are trimmed; empty lines are skipped. Subdirectories are ignored.
///
/// # Errors
///
/// Fails if the directory or any file in it cannot be read — a missing
/// dictionary is a startup error, not something to score around.
#[instrument(level = "info", skip_all, fields(dir = %dir.as_ref().display()))]
pub fn load_charged_words(dir: impl AsRef<Path>) -> anyhow::Result<HashSet<String>> {
    let dir = dir.as_ref();
    let mut words = HashSet::new();

    let entries = fs::read_dir(dir)
        .with_context(|| format!("reading dictionary directory {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("reading dictionary file {}", path.display()))?;
        let before = words.len();
        words.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_lowercase),
        );
        debug!(path = %path.display(), added = words.len() - before, "Loaded dictionary file");
    }

    info!(count = words.len(), "Charged words dictionary loaded");
    Ok(words)
}
