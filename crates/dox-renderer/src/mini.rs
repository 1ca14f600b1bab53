//! Built-in fallback rendering strategy.
//!
//! Supports a minimal markdown subset: `#`/`##`/`###` headings, fenced code
//! blocks, paragraphs with inline code, and unordered lists. Fenced code
//! blocks are extracted before the line pass and replaced by placeholders,
//! so fence content is never re-interpreted as markdown.
//!
//! Known limitations (not defects): no ordered or nested lists, emphasis,
//! links, images, or block quotes. Inline code substitution applies to list
//! items and paragraphs only, not headings.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::MarkdownRenderer;
use crate::escape::escape_html;

/// Fenced code block with optional language tag on the opening fence.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```\s*([A-Za-z0-9_+-]*)\n(?s:(.*?))\n```").expect("fence pattern compiles")
});

/// Single-backtick inline code span.
static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("inline code pattern compiles"));

/// Minimal built-in markdown renderer.
///
/// Used when the crate is compiled without the `cmark` feature; small but
/// good enough for plain documentation pages.
pub struct MiniRenderer;

impl MiniRenderer {
    /// Create a new fallback renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for MiniRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for MiniRenderer {
    fn convert(&self, markdown: &str) -> String {
        // Extract fences first; their content must survive the line pass
        // verbatim, so each one becomes a placeholder restored at the end.
        let mut blocks: Vec<String> = Vec::new();
        let protected = FENCE_RE.replace_all(markdown, |caps: &Captures| {
            let rendered = format!(
                r#"<pre class="code"><code class="language-{}">{}</code></pre>"#,
                escape_html(&caps[1]),
                escape_html(&caps[2])
            );
            let token = placeholder(blocks.len());
            blocks.push(rendered);
            token
        });

        let mut out: Vec<String> = Vec::new();
        let mut in_list = false;
        for raw in protected.lines() {
            let line = raw.trim_end();
            if line.trim().is_empty() {
                if in_list {
                    out.push("</ul>".to_owned());
                    in_list = false;
                }
                continue;
            }
            if is_placeholder(line) {
                if in_list {
                    out.push("</ul>".to_owned());
                    in_list = false;
                }
                out.push(line.to_owned());
                continue;
            }
            if let Some(rest) = line.strip_prefix("### ") {
                out.push(format!("<h3>{}</h3>", escape_html(rest)));
                continue;
            }
            if let Some(rest) = line.strip_prefix("## ") {
                out.push(format!("<h2>{}</h2>", escape_html(rest)));
                continue;
            }
            if let Some(rest) = line.strip_prefix("# ") {
                out.push(format!("<h1>{}</h1>", escape_html(rest)));
                continue;
            }
            if let Some(item) = bullet_text(line) {
                if !in_list {
                    out.push("<ul>".to_owned());
                    in_list = true;
                }
                out.push(format!("<li>{}</li>", replace_inline_code(item)));
                continue;
            }
            out.push(format!("<p>{}</p>", replace_inline_code(line)));
        }
        // Unclosed list at end of input is closed implicitly.
        if in_list {
            out.push("</ul>".to_owned());
        }

        let mut html = out.join("\n");
        for (i, block) in blocks.iter().enumerate() {
            html = html.replace(&placeholder(i), block);
        }
        html
    }

    fn name(&self) -> &'static str {
        "builtin"
    }
}

/// Placeholder token for the i-th extracted code block.
fn placeholder(index: usize) -> String {
    format!("{{{{CODE_BLOCK_{index}}}}}")
}

/// Whether a line consists of exactly one code block placeholder.
fn is_placeholder(line: &str) -> bool {
    line.strip_prefix("{{CODE_BLOCK_")
        .and_then(|rest| rest.strip_suffix("}}"))
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Text after a `-` or `*` bullet marker, if the line is a list item.
fn bullet_text(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
}

/// Replace single-backtick spans with escaped `<code>` elements.
fn replace_inline_code(text: &str) -> String {
    INLINE_CODE_RE
        .replace_all(text, |caps: &Captures| {
            format!("<code>{}</code>", escape_html(&caps[1]))
        })
        .into_owned()
}
