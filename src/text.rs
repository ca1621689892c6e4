//! Tokenization and jaundice-rate scoring.
//!
//! The pipeline here is pure: for a fixed normalizer and dictionary, the
//! same sanitized text always produces the same score. Tokens are produced
//! lazily and consumed exactly once by the scorer, so a full article never
//! holds its word list in memory.

use std::collections::HashSet;

use thiserror::Error;

use crate::morph::Normalizer;

/// Returned by [`calculate_jaundice_rate`] when the input yields no words.
///
/// Division by a zero word count is not a scoring outcome; callers decide
/// how to classify an article that has no scoreable text.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot score an article with zero words")]
pub struct EmptyArticle;

/// Split text into lowercase normalized words.
///
/// Tokens are cut on whitespace, then stripped of leading and trailing
/// punctuation. A token survives only if what remains is entirely
/// alphabetic — anything containing a digit or embedded symbol
/// (`"covid-19"`, `"$4bn"`, `"@user"`) is discarded whole. Survivors are
/// lowercased and reduced to their normal form by `morph`.
///
/// The returned iterator is lazy and borrows both arguments.
pub fn split_by_words<'a>(
    morph: &'a dyn Normalizer,
    text: &'a str,
) -> impl Iterator<Item = String> + 'a {
    text.split_whitespace().filter_map(move |raw| {
        let token = raw.trim_matches(|c: char| !c.is_alphanumeric());
        if token.is_empty() || !token.chars().all(char::is_alphabetic) {
            return None;
        }
        Some(morph.normal_form(&token.to_lowercase()))
    })
}

/// Compute the fraction of `words` found in `charged_words`.
///
/// Consumes the word sequence in a single pass and returns a value in
/// `[0.0, 1.0]`. An empty sequence is an [`EmptyArticle`] error rather
/// than a division fault.
pub fn calculate_jaundice_rate(
    words: impl IntoIterator<Item = String>,
    charged_words: &HashSet<String>,
) -> Result<f64, EmptyArticle> {
    let mut total = 0usize;
    let mut charged = 0usize;
    for word in words {
        total += 1;
        if charged_words.contains(&word) {
            charged += 1;
        }
    }
    if total == 0 {
        return Err(EmptyArticle);
    }
    Ok(charged as f64 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::{ExactForm, LightStemmer};

    fn charged(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_split_discards_tokens_with_digits() {
        let morph = ExactForm;
        let words: Vec<String> =
            split_by_words(&morph, "covid-19 cases rose 40% in q3").collect();
        assert_eq!(words, vec!["cases", "rose", "in"]);
    }

    #[test]
    fn test_split_strips_edge_punctuation_and_lowercases() {
        let morph = ExactForm;
        let words: Vec<String> =
            split_by_words(&morph, "\"Shock,\" said the (Minister).").collect();
        assert_eq!(words, vec!["shock", "said", "the", "minister"]);
    }

    #[test]
    fn test_split_applies_normal_form() {
        let morph = LightStemmer;
        let words: Vec<String> = split_by_words(&morph, "protests are spreading").collect();
        assert_eq!(words, vec!["protest", "are", "spread"]);
    }

    #[test]
    fn test_rate_counts_charged_fraction() {
        let morph = ExactForm;
        let set = charged(&["shock", "outrage"]);
        let rate = calculate_jaundice_rate(
            split_by_words(&morph, "shock and outrage in parliament today"),
            &set,
        )
        .unwrap();
        assert!((rate - 2.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_rate_is_bounded() {
        let morph = ExactForm;
        let set = charged(&["a", "b"]);
        let all = calculate_jaundice_rate(split_by_words(&morph, "a b a b"), &set).unwrap();
        let none = calculate_jaundice_rate(split_by_words(&morph, "c d e"), &set).unwrap();
        assert_eq!(all, 1.0);
        assert_eq!(none, 0.0);
    }

    #[test]
    fn test_rate_rejects_empty_input() {
        let morph = ExactForm;
        let set = charged(&["shock"]);
        let err = calculate_jaundice_rate(split_by_words(&morph, "42 -- 17%"), &set);
        assert_eq!(err, Err(EmptyArticle));
    }

    #[test]
    fn test_scoring_is_pure() {
        // Same text, same dictionary, same oracle: identical score both times.
        let morph = LightStemmer;
        let set = charged(&["scandal", "fury"]);
        let text = "Fury over the scandal is growing, scandals everywhere.";
        let first =
            calculate_jaundice_rate(split_by_words(&morph, text), &set).unwrap();
        let second =
            calculate_jaundice_rate(split_by_words(&morph, text), &set).unwrap();
        assert_eq!(first, second);
    }
}
