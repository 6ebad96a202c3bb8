//! Plain-text extraction from Markdown/MDX bodies
//!
//! Listings only need searchable text, excerpts and reading time, so the
//! body is reduced to its prose. JSX blocks, `import`/`export` statements
//! and fenced code are dropped.

use lazy_static::lazy_static;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use regex::Regex;

lazy_static! {
    /// Top-level ESM statements in MDX
    static ref MDX_ESM: Regex = Regex::new(r"(?m)^(import|export)\s.*$").unwrap();
    /// Self-closing JSX components such as `<Callout type="info" />`
    static ref JSX_SELF_CLOSING: Regex = Regex::new(r"<[A-Z][A-Za-z0-9.]*(\s[^>]*)?/>").unwrap();
    /// Opening and closing JSX component tags, keeping their children
    static ref JSX_TAG: Regex = Regex::new(r"</?[A-Z][A-Za-z0-9.]*(\s[^>]*)?>").unwrap();
}

/// Words read per minute for reading-time estimates
const WORDS_PER_MINUTE: usize = 200;

/// Prose extracted from a post body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlainText {
    /// Paragraph texts in document order
    pub paragraphs: Vec<String>,
}

impl PlainText {
    /// Extract the prose of a Markdown or MDX document
    pub fn extract(source: &str) -> Self {
        let without_esm = MDX_ESM.replace_all(source, "");
        let without_self_closing = JSX_SELF_CLOSING.replace_all(&without_esm, "");
        let markdown = JSX_TAG.replace_all(&without_self_closing, "");

        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS;

        let mut paragraphs = Vec::new();
        let mut current = String::new();
        let mut in_code_block = false;

        for event in Parser::new_ext(&markdown, options) {
            match event {
                Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
                Event::End(TagEnd::CodeBlock) => in_code_block = false,
                Event::Text(text) | Event::Code(text) if !in_code_block => {
                    current.push_str(&text);
                }
                Event::SoftBreak | Event::HardBreak => current.push(' '),
                Event::End(TagEnd::Paragraph)
                | Event::End(TagEnd::Heading(_))
                | Event::End(TagEnd::Item) => {
                    let text = collapse_whitespace(&current);
                    if !text.is_empty() {
                        paragraphs.push(text);
                    }
                    current.clear();
                }
                _ => {}
            }
        }

        let rest = collapse_whitespace(&current);
        if !rest.is_empty() {
            paragraphs.push(rest);
        }

        Self { paragraphs }
    }

    /// All prose joined by single spaces
    pub fn text(&self) -> String {
        self.paragraphs.join(" ")
    }

    pub fn word_count(&self) -> usize {
        self.paragraphs
            .iter()
            .map(|p| p.split_whitespace().count())
            .sum()
    }

    /// Estimated reading time in minutes, at least one
    pub fn reading_time(&self) -> usize {
        self.word_count().div_ceil(WORDS_PER_MINUTE).max(1)
    }

    /// First paragraph, truncated to `max_chars`
    pub fn excerpt(&self, max_chars: usize) -> Option<String> {
        self.paragraphs
            .first()
            .map(|first| truncate_chars(first, max_chars))
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate on a char boundary, appending an ellipsis when cut
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", s[..idx].trim_end()),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_paragraphs() {
        let text = PlainText::extract("# Title\n\nFirst *para*\ncontinues.\n\nSecond `code`.");
        assert_eq!(
            text.paragraphs,
            vec!["Title", "First para continues.", "Second code."]
        );
    }

    #[test]
    fn test_strips_mdx() {
        let source = r#"import Callout from '../components/Callout'
export const meta = { hidden: true }

<Callout type="warning">
Check the statute first.
</Callout>

<Figure src="/a.png" />

Plain prose.
"#;
        let text = PlainText::extract(source);
        let joined = text.text();
        assert!(joined.contains("Check the statute first."));
        assert!(joined.contains("Plain prose."));
        assert!(!joined.contains("import"));
        assert!(!joined.contains("Callout"));
        assert!(!joined.contains("Figure"));
    }

    #[test]
    fn test_code_blocks_skipped() {
        let text = PlainText::extract("Intro.\n\n```rust\nfn main() {}\n```\n");
        assert_eq!(text.text(), "Intro.");
    }

    #[test]
    fn test_reading_time() {
        let body = "word ".repeat(401);
        let text = PlainText::extract(&body);
        assert_eq!(text.word_count(), 401);
        assert_eq!(text.reading_time(), 3);
        assert_eq!(PlainText::default().reading_time(), 1);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hukum pidana", 5), "hukum…");
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("ééééé", 2), "éé…");
    }
}
