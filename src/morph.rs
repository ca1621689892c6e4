//! Word-normalization oracle.
//!
//! Scoring matches dictionary entries against the *normal form* of each
//! word, so "protests", "protesting", and "protested" all count as
//! "protest". The oracle is constructed once at startup and shared
//! read-only across every in-flight article, so implementations must be
//! `Send + Sync` and pure after construction.

/// Reduces an inflected word to its canonical dictionary form.
///
/// Implementations must be idempotent: `normal_form(normal_form(w)) ==
/// normal_form(w)` for every lowercase `w`.
pub trait Normalizer: Send + Sync {
    /// Map one lowercase word to its normal form.
    fn normal_form(&self, word: &str) -> String;
}

/// Suffix-stripping normalizer for English text.
///
/// Deliberately light: it only peels plural `-s`, progressive `-ing`, and
/// past-tense `-ed` endings off words long enough that the remainder is
/// still a plausible stem. Short words pass through untouched, which keeps
/// function words ("is", "was", "red") intact.
#[derive(Debug, Default)]
pub struct LightStemmer;

impl Normalizer for LightStemmer {
    fn normal_form(&self, word: &str) -> String {
        if word.len() > 4 && word.ends_with('s') && !word.ends_with("ss") {
            return word[..word.len() - 1].to_string();
        }
        if word.len() > 5 && word.ends_with("ing") {
            return word[..word.len() - 3].to_string();
        }
        if word.len() > 4 && word.ends_with("ed") {
            return word[..word.len() - 2].to_string();
        }
        word.to_string()
    }
}

/// Identity normalizer for tests that need exact-form matching.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ExactForm;

#[cfg(test)]
impl Normalizer for ExactForm {
    fn normal_form(&self, word: &str) -> String {
        word.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_stemmer_strips_plural_s() {
        let morph = LightStemmer;
        assert_eq!(morph.normal_form("protests"), "protest");
        assert_eq!(morph.normal_form("scandals"), "scandal");
    }

    #[test]
    fn test_light_stemmer_strips_ing_and_ed() {
        let morph = LightStemmer;
        assert_eq!(morph.normal_form("protesting"), "protest");
        assert_eq!(morph.normal_form("shocked"), "shock");
    }

    #[test]
    fn test_light_stemmer_leaves_short_words_alone() {
        let morph = LightStemmer;
        assert_eq!(morph.normal_form("is"), "is");
        assert_eq!(morph.normal_form("was"), "was");
        assert_eq!(morph.normal_form("red"), "red");
        // double-s words are not plurals
        assert_eq!(morph.normal_form("glass"), "glass");
        assert_eq!(morph.normal_form("crisis"), "crisi"); // known light-stem artifact
    }

    #[test]
    fn test_light_stemmer_is_idempotent() {
        let morph = LightStemmer;
        for w in ["protests", "protesting", "shocked", "is", "outrage"] {
            let once = morph.normal_form(w);
            assert_eq!(morph.normal_form(&once), once);
        }
    }
}
