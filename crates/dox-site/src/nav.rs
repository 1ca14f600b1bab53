//! Sidebar navigation tree.
//!
//! [`build_nav_tree`] folds the flat, path-ordered page list into a
//! [`NavNode`] hierarchy mirroring the source directory structure. An
//! `index.md` inside a folder attaches its page to the folder's node
//! instead of becoming a separate leaf.
//!
//! [`render_nav`] walks the tree and produces nested `<ul>` markup relative
//! to the URL of the page being rendered. Rendering is a pure bottom-up
//! composition: same tree plus same current URL yields byte-identical
//! markup.

use std::fmt::Write;

use dox_renderer::escape_html;

use crate::discover::{DocPage, title_case};

/// One entry in the navigation hierarchy.
///
/// Folder nodes (nodes with children) may carry a page if a folder-index
/// page exists. The root node has an empty name and no page.
#[derive(Debug)]
pub struct NavNode {
    /// Path segment naming this node (file name for leaves).
    pub name: String,
    /// Display title, from the attached page or the segment name.
    pub title: String,
    /// Page attached to this node, if any.
    pub page: Option<DocPage>,
    /// Children in insertion order; insertion follows the path-sorted page
    /// list, which is the stable tiebreak under the title sort at render.
    pub children: Vec<NavNode>,
}

impl NavNode {
    fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            page: None,
            children: Vec::new(),
        }
    }

    /// Look up a child by segment name, creating it with the given title if
    /// absent.
    fn child_entry(&mut self, name: &str, title: &str) -> &mut NavNode {
        let index = match self.children.iter().position(|c| c.name == name) {
            Some(i) => i,
            None => {
                self.children.push(NavNode::new(name, title));
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }

    /// Whether any page in this subtree has the given URL.
    fn subtree_contains_url(&self, url: &str) -> bool {
        self.page.as_ref().is_some_and(|p| p.url_path == url)
            || self.children.iter().any(|c| c.subtree_contains_url(url))
    }
}

/// Build the navigation tree from the full, path-ordered page list.
///
/// For each page the source-relative path is split into segments. A final
/// `index.md` segment (case-insensitive) attaches the page to its folder's
/// node and overwrites the folder title; at the source root the node is
/// named `index`. Any other final segment becomes a leaf child carrying the
/// page. Intermediate segments create or reuse folder nodes titled from the
/// segment name. When two pages map to the same node, the later-processed
/// page wins.
#[must_use]
pub fn build_nav_tree(pages: &[DocPage]) -> NavNode {
    let mut root = NavNode::new("", "Docs");
    for page in pages {
        let segments: Vec<String> = page
            .rel_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        let Some((last, dirs)) = segments.split_last() else {
            continue;
        };
        let is_index = last.eq_ignore_ascii_case("index.md");

        let mut cursor = &mut root;
        for dir in dirs {
            cursor = cursor.child_entry(dir, &title_case(dir));
        }

        if is_index {
            let node = if dirs.is_empty() {
                // Root-level index.md has no containing folder segment.
                cursor.child_entry("index", &title_case("index"))
            } else {
                cursor
            };
            node.page = Some(page.clone());
            if !page.title.is_empty() {
                node.title = page.title.clone();
            }
        } else {
            let node = cursor.child_entry(last, &page.title);
            node.title = page.title.clone();
            node.page = Some(page.clone());
        }
    }
    root
}

/// Render the navigation tree to sidebar markup relative to `current_url`.
#[must_use]
pub fn render_nav(root: &NavNode, current_url: &str) -> String {
    format!(
        "<nav class=\"docs-nav\" aria-label=\"Docs\">\n{}\n</nav>",
        render_children(root, current_url, "")
    )
}

/// Render one node's children as a `<ul>`, composed bottom-up.
fn render_children(node: &NavNode, current_url: &str, base_key: &str) -> String {
    let mut sorted: Vec<&NavNode> = node.children.iter().collect();
    sorted.sort_by_key(|c| c.title.to_lowercase());

    let mut out = String::from("<ul>\n");
    for child in sorted {
        let has_children = !child.children.is_empty();
        let is_active = child
            .page
            .as_ref()
            .is_some_and(|p| p.url_path == current_url);
        let is_expanded = has_children && child.subtree_contains_url(current_url);

        let mut classes: Vec<&str> = Vec::new();
        if has_children {
            classes.push("folder");
        }
        if is_active {
            classes.push("active");
        }
        if is_expanded {
            classes.push("expanded");
        }
        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(" class=\"{}\"", classes.join(" "))
        };

        let data_key = if base_key.is_empty() {
            child.name.clone()
        } else {
            format!("{base_key}/{}", child.name)
        };
        let label = match &child.page {
            Some(page) => format!(
                "<a href=\"{}\">{}</a>",
                page.url_path,
                escape_html(&child.title)
            ),
            None => format!("<span>{}</span>", escape_html(&child.title)),
        };

        if has_children {
            writeln!(
                out,
                "  <li data-key=\"{}\"{class_attr}>",
                escape_html(&data_key)
            )
            .unwrap();
            out.push_str("    <div class=\"nav-row\">\n");
            writeln!(
                out,
                "      <button class=\"nav-toggle\" aria-label=\"Toggle section\" aria-expanded=\"{}\">{CHEVRON_SVG}</button>",
                if is_expanded { "true" } else { "false" }
            )
            .unwrap();
            writeln!(out, "      {label}").unwrap();
            out.push_str("    </div>\n");
            out.push_str(&render_children(child, current_url, &data_key));
            out.push('\n');
        } else {
            writeln!(
                out,
                "  <li data-key=\"{}\"{class_attr}>{label}",
                escape_html(&data_key)
            )
            .unwrap();
        }
        out.push_str("  </li>\n");
    }
    out.push_str("</ul>");
    out
}

/// Chevron icon for folder toggle buttons (rotated via CSS when expanded).
const CHEVRON_SVG: &str = r#"<svg class="ico" viewBox="0 0 16 16" width="12" height="12" aria-hidden="true"><path d="M6.22 3.22a.75.75 0 0 1 1.06 0l4.25 4.25a.75.75 0 0 1 0 1.06l-4.25 4.25a.751.751 0 0 1-1.06-1.06L9.94 8 6.22 4.28a.75.75 0 0 1 0-1.06Z"></path></svg>"#;
