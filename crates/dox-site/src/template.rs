//! Full-page HTML assembly.
//!
//! One fixed template with placeholder tokens; placeholder substitution
//! avoids brace escaping issues in the embedded CSS and script.

use dox_renderer::escape_html;

/// Page template with `__CSS__`, `__SIDEBAR__`, `__CONTENT__`, `__TITLE__`,
/// and `__SITE_NAME__` tokens. Asset references default to one level up.
const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");

/// Assemble one complete HTML document.
///
/// `sidebar` and `content` are inserted unescaped (they are already HTML);
/// `page_title` and `site_name` are escaped. When `base_prefix` is not the
/// default `".."`, default-relative asset references are rewritten to the
/// supplied prefix (used for the root-level copy of the docs index).
#[must_use]
pub fn render_page(
    css: &str,
    sidebar: &str,
    content: &str,
    page_title: &str,
    base_prefix: &str,
    site_name: &str,
) -> String {
    let result = PAGE_TEMPLATE
        .replace("__CSS__", css)
        .replace("__SIDEBAR__", sidebar)
        .replace("__CONTENT__", content)
        .replace("__TITLE__", &escape_html(page_title))
        .replace("__SITE_NAME__", &escape_html(site_name));

    if base_prefix == ".." {
        result
    } else {
        result.replace("../", &format!("{base_prefix}/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_substituted() {
        let html = render_page(
            "body { margin: 0 }",
            "<nav>S</nav>",
            "<p>C</p>",
            "Setup",
            "..",
            "Example",
        );
        assert!(html.contains("body { margin: 0 }"));
        assert!(html.contains("<nav>S</nav>"));
        assert!(html.contains("<p>C</p>"));
        assert!(html.contains("<title>Setup — Example Docs</title>"));
        assert!(!html.contains("__CSS__"));
        assert!(!html.contains("__SIDEBAR__"));
        assert!(!html.contains("__CONTENT__"));
        assert!(!html.contains("__TITLE__"));
        assert!(!html.contains("__SITE_NAME__"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = render_page("", "", "", "Tips & <Tricks>", "..", "Example");
        assert!(html.contains("Tips &amp; &lt;Tricks&gt;"));
    }

    #[test]
    fn test_content_not_escaped() {
        let html = render_page("", "", "<h1>Raw</h1>", "T", "..", "Example");
        assert!(html.contains("<h1>Raw</h1>"));
    }

    #[test]
    fn test_default_prefix_keeps_relative_assets() {
        let html = render_page("", "", "", "T", "..", "Example");
        assert!(html.contains("href=\"../index.html\""));
    }

    #[test]
    fn test_root_prefix_rewrites_assets() {
        let html = render_page("", "", "", "T", ".", "Example");
        assert!(html.contains("href=\"./index.html\""));
        assert!(!html.contains("href=\"../index.html\""));
    }
}
