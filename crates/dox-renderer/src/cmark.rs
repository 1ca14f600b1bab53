//! `pulldown-cmark` rendering strategy.
//!
//! Full-featured renderer with tables, strikethrough, and heading anchors.
//! Heading anchors are slugified `id` attributes derived from the heading
//! text, deduplicated with a numeric suffix.

use std::collections::HashMap;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};

use crate::MarkdownRenderer;

/// Full-featured markdown renderer built on `pulldown-cmark`.
pub struct CmarkRenderer;

impl CmarkRenderer {
    /// Create a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for CmarkRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for CmarkRenderer {
    fn convert(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
        let mut events: Vec<Event<'_>> = Parser::new_ext(markdown, options).collect();
        add_heading_anchors(&mut events);

        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, events.into_iter());
        out
    }

    fn name(&self) -> &'static str {
        "pulldown-cmark"
    }
}

/// Assign slugified `id` attributes to headings that have none.
fn add_heading_anchors(events: &mut [Event<'_>]) {
    let mut seen: HashMap<String, usize> = HashMap::new();

    for i in 0..events.len() {
        let needs_id = matches!(&events[i], Event::Start(Tag::Heading { id: None, .. }));
        if !needs_id {
            continue;
        }

        let mut slug = slugify(&heading_text(&events[i + 1..]));
        if slug.is_empty() {
            slug = "section".to_owned();
        }
        let count = seen.entry(slug.clone()).or_insert(0);
        let unique = if *count == 0 {
            slug
        } else {
            format!("{slug}-{count}")
        };
        *count += 1;

        if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
            *id = Some(CowStr::from(unique));
        }
    }
}

/// Collect the plain text of a heading up to its end tag.
fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            _ => {}
        }
    }
    text
}

/// Lowercase alphanumeric slug with `-` separators.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.extend(c.to_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn convert(markdown: &str) -> String {
        CmarkRenderer::new().convert(markdown)
    }

    #[test]
    fn test_basic_paragraph() {
        assert_eq!(convert("Hello **world**"), "<p>Hello <strong>world</strong></p>\n");
    }

    #[test]
    fn test_heading_gets_anchor() {
        assert_eq!(convert("## Getting Started"), "<h2 id=\"getting-started\">Getting Started</h2>\n");
    }

    #[test]
    fn test_duplicate_headings_deduplicated() {
        let html = convert("## Usage\n\n## Usage");
        assert!(html.contains("id=\"usage\""));
        assert!(html.contains("id=\"usage-1\""));
    }

    #[test]
    fn test_heading_with_inline_code_slug() {
        let html = convert("## The `build` command");
        assert!(html.contains("id=\"the-build-command\""));
    }

    #[test]
    fn test_tables_enabled() {
        let html = convert("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_strikethrough_enabled() {
        assert!(convert("~~gone~~").contains("<del>gone</del>"));
    }

    #[test]
    fn test_fenced_code_block_language_class() {
        let html = convert("```rust\nfn main() {}\n```");
        assert!(html.contains("<code class=\"language-rust\">"));
        assert!(html.contains("fn main() {}"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Getting Started"), "getting-started");
        assert_eq!(slugify("  spaced  out  "), "spaced-out");
        assert_eq!(slugify("C++ & Rust!"), "c-rust");
        assert_eq!(slugify(""), "");
    }
}
