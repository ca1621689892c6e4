//! Sanitizer for inosmi.ru articles.
//!
//! Articles carry their headline in `h1.article-header__title` and their
//! body in `div.article__body`, where the actual prose lives in
//! `div.article__text` blocks surrounded by share buttons, photo credits,
//! and recirculation widgets. Only the headline and the text blocks
//! survive sanitization.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1.article-header__title").expect("valid selector"));
static TEXT_BLOCKS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.article__body div.article__text").expect("valid selector"));
static BODY_PARAGRAPHS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.article__body p").expect("valid selector"));

/// Strip an inosmi.ru page down to its article.
///
/// Returns plain text when `plaintext` is true, otherwise the kept
/// elements' HTML. Pages without a recognizable article body produce an
/// empty string.
pub fn sanitize(html: &str, plaintext: bool) -> String {
    let document = Html::parse_document(html);
    let mut parts: Vec<String> = Vec::new();

    for element in document.select(&TITLE) {
        parts.push(render(element, plaintext));
    }

    let mut found_text_block = false;
    for element in document.select(&TEXT_BLOCKS) {
        found_text_block = true;
        parts.push(render(element, plaintext));
    }
    // Older article layouts keep prose in bare paragraphs.
    if !found_text_block {
        for element in document.select(&BODY_PARAGRAPHS) {
            parts.push(render(element, plaintext));
        }
    }

    parts.retain(|part| !part.is_empty());
    parts.join("\n")
}

fn render(element: scraper::ElementRef<'_>, plaintext: bool) -> String {
    if plaintext {
        element
            .text()
            .map(str::trim)
            .filter(|chunk| !chunk.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        element.html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <nav class="menu"><a href="/">Home</a></nav>
          <h1 class="article-header__title">Shock in parliament</h1>
          <div class="article__body">
            <div class="article__aside">Subscribe to our channel!</div>
            <div class="article__text">Outrage spread through the chamber.</div>
            <div class="article__text">Observers called it a scandal.</div>
          </div>
          <footer>© inosmi</footer>
        </body></html>"#;

    #[test]
    fn test_plaintext_keeps_title_and_body_only() {
        let text = sanitize(PAGE, true);
        assert!(text.contains("Shock in parliament"));
        assert!(text.contains("Outrage spread through the chamber."));
        assert!(text.contains("Observers called it a scandal."));
        assert!(!text.contains("Home"));
        assert!(!text.contains("Subscribe"));
        assert!(!text.contains("inosmi"));
    }

    #[test]
    fn test_html_mode_keeps_markup() {
        let html = sanitize(PAGE, false);
        assert!(html.contains(r#"<div class="article__text">"#));
        assert!(!html.contains("<nav"));
    }

    #[test]
    fn test_paragraph_fallback() {
        let page = r#"<div class="article__body"><p>Old layout text.</p></div>"#;
        assert_eq!(sanitize(page, true), "Old layout text.");
    }

    #[test]
    fn test_unrecognized_page_is_empty() {
        assert_eq!(sanitize("<html><body><p>hi</p></body></html>", true), "");
    }
}
