use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Selector};

lazy_static! {
    static ref WORD: Regex = Regex::new(r"[\p{L}\p{N}]+").expect("valid regex");
}

/// Parse an HTML body into its text words and outbound link targets.
///
/// Words come from every text node in document order, split on any rune
/// that is not a letter or digit, with the original order, case, and
/// duplicates preserved. Hrefs come from every anchor in document order
/// that carries an `href` attribute; anchors without one contribute
/// nothing.
///
/// The underlying parser recovers from malformed markup instead of
/// failing, so this never aborts on bad input.
pub fn extract(body: &[u8]) -> (Vec<String>, Vec<String>) {
    let html = String::from_utf8_lossy(body);
    let doc = Html::parse_document(&html);

    let mut words = Vec::new();
    for text in doc.root_element().text() {
        for word in WORD.find_iter(text) {
            words.push(word.as_str().to_string());
        }
    }

    let anchor = Selector::parse("a").expect("valid selector");
    let mut hrefs = Vec::new();
    for a in doc.select(&anchor) {
        if let Some(href) = a.value().attr("href") {
            hrefs.push(href.to_string());
        }
    }

    (words, hrefs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_text_nodes_into_words() {
        let body = br#"<html><head><title>CS272 | Welcome</title></head><body>
            <p>Hello World!</p>
            <p>Welcome to <a href="https://cs272-f24.github.io/">CS272</a>!</p>
        </body></html>"#;
        let (words, hrefs) = extract(body);
        assert_eq!(
            words,
            vec!["CS272", "Welcome", "Hello", "World", "Welcome", "to", "CS272"]
        );
        assert_eq!(hrefs, vec!["https://cs272-f24.github.io/"]);
    }

    #[test]
    fn empty_document_yields_nothing() {
        let (words, hrefs) = extract(b"");
        assert!(words.is_empty());
        assert!(hrefs.is_empty());
    }

    #[test]
    fn collects_anchors_in_document_order() {
        let body = br#"<html><body>
            <a href="https://example.com">Example Link</a>
            <a href="https://github.com">GitHub Link</a>
            <a href="https://stackoverflow.com">Stack Overflow Link</a>
        </body></html>"#;
        let (_, hrefs) = extract(body);
        assert_eq!(
            hrefs,
            vec![
                "https://example.com",
                "https://github.com",
                "https://stackoverflow.com"
            ]
        );
    }

    #[test]
    fn anchor_without_href_contributes_nothing() {
        let (_, hrefs) = extract(b"<a name=\"top\">anchor</a><a href=\"/next\">next</a>");
        assert_eq!(hrefs, vec!["/next"]);
    }

    #[test]
    fn preserves_duplicates_and_case() {
        let (words, _) = extract(b"<p>Run run RUN</p><p>Run</p>");
        assert_eq!(words, vec!["Run", "run", "RUN", "Run"]);
    }

    #[test]
    fn splits_on_non_alphanumeric_runes() {
        let (words, _) = extract(b"<p>state-of-the-art v2.0 (draft)</p>");
        assert_eq!(words, vec!["state", "of", "the", "art", "v2", "0", "draft"]);
    }

    #[test]
    fn digits_are_kept_as_words() {
        let (words, _) = extract(b"<p>Test Case 3</p>");
        assert_eq!(words, vec!["Test", "Case", "3"]);
    }
}
