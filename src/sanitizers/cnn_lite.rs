//! Sanitizer for lite.cnn.com articles.
//!
//! CNN Lite is a text-only edition with minimal, consistent markup: the
//! headline sits in `.headline--lite` and the body in `.article--lite`.
//! Everything else on the page is navigation.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static HEADLINE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".headline--lite").expect("valid selector"));
static ARTICLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".article--lite").expect("valid selector"));

/// Strip a CNN Lite page down to its headline and article body.
pub fn sanitize(html: &str, plaintext: bool) -> String {
    let document = Html::parse_document(html);
    let mut parts: Vec<String> = Vec::new();

    for element in document
        .select(&HEADLINE)
        .chain(document.select(&ARTICLE))
    {
        let part = if plaintext {
            element.text().collect::<Vec<_>>().join(" ")
        } else {
            element.html()
        };
        let part = part.trim().to_string();
        if !part.is_empty() {
            parts.push(part);
        }
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <header><a href="/">CNN Lite</a></header>
          <h1 class="headline--lite">Markets tumble</h1>
          <div class="article--lite"><p>Panic selling gripped traders.</p></div>
        </body></html>"#;

    #[test]
    fn test_keeps_headline_and_article() {
        let text = sanitize(PAGE, true);
        assert!(text.contains("Markets tumble"));
        assert!(text.contains("Panic selling gripped traders."));
        assert!(!text.contains("CNN Lite"));
    }

    #[test]
    fn test_html_mode() {
        let html = sanitize(PAGE, false);
        assert!(html.contains("<p>Panic selling gripped traders.</p>"));
        assert!(!html.contains("<header>"));
    }
}
