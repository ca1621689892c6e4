//! Sanitizer for dvmn.org pages.
//!
//! The pages we score there are plain-text documents (book excerpts served
//! as-is), so there is no chrome to strip: plaintext mode collapses the
//! document to its text content and HTML mode passes the input through.

use scraper::Html;

/// Pass a dvmn.org document through, textified when `plaintext` is set.
pub fn sanitize(html: &str, plaintext: bool) -> String {
    if !plaintext {
        return html.to_string();
    }
    let document = Html::parse_document(html);
    document
        .root_element()
        .text()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let text = sanitize("Once upon a time there was a story.", true);
        assert_eq!(text, "Once upon a time there was a story.");
    }

    #[test]
    fn test_markup_is_textified() {
        let text = sanitize("<html><body><p>One</p><p>Two</p></body></html>", true);
        assert_eq!(text, "One Two");
    }

    #[test]
    fn test_html_mode_is_identity() {
        let page = "<p>kept as is</p>";
        assert_eq!(sanitize(page, false), page);
    }
}
