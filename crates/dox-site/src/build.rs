//! Site build driver.
//!
//! Orchestrates one full build pass: extract site CSS, discover pages,
//! render each page with a sidebar computed relative to its own URL, then
//! synthesize the index redirect and the root-level copy of the docs index.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dox_renderer::MarkdownRenderer;

use crate::discover::{DocPage, discover_pages};
use crate::nav::{build_nav_tree, render_nav};
use crate::style::extract_site_css;
use crate::template::render_page;

/// Redirect stub written when no page provides the docs index.
const REDIRECT_STUB: &str = "<!DOCTYPE html><meta http-equiv=refresh content=\"0; url=./index.html\">\n<link rel=\"canonical\" href=\"./index.html\">";

/// Output file name of the docs index.
const INDEX_FILENAME: &str = "index.html";

/// Build inputs, constructed once per process invocation.
#[derive(Clone, Debug)]
pub struct BuildConfig {
    /// Root directory of markdown sources.
    pub source_dir: PathBuf,
    /// Site root the output tree is written under.
    pub site_dir: PathBuf,
    /// HTML file the inline site CSS is extracted from.
    pub style_source: PathBuf,
    /// Site name substituted into page chrome.
    pub site_name: String,
}

impl BuildConfig {
    /// Docs output directory (`<site>/docs`).
    #[must_use]
    pub fn docs_out_dir(&self) -> PathBuf {
        self.site_dir.join("docs")
    }
}

/// Error returned when a build pass fails.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Required style source file does not exist.
    #[error("Style source not found: {}", .0.display())]
    StyleSourceMissing(PathBuf),
    /// I/O error reading a source or writing an output file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Run one full build pass and return every path written, in write order.
///
/// For each discovered page the navigation tree is rebuilt fresh and
/// rendered relative to that page's URL. After all pages: a redirect stub
/// is written if no page's output is the index file name, and a root-level
/// `docs.html` copy of the docs index page is always produced with a
/// site-root asset prefix.
///
/// # Errors
///
/// Fails on a missing style source or on any read/write error.
pub fn build_all(
    config: &BuildConfig,
    renderer: &dyn MarkdownRenderer,
) -> Result<Vec<PathBuf>, BuildError> {
    let css = extract_site_css(&config.style_source)?;
    let out_dir = config.docs_out_dir();
    let pages = discover_pages(&config.source_dir, &out_dir)?;
    tracing::info!(
        pages = pages.len(),
        renderer = renderer.name(),
        "Building docs site"
    );

    let mut written = Vec::new();
    for page in &pages {
        let html = render_one(config, renderer, &css, &pages, page, "..")?;
        write_file(&page.output_path, &html)?;
        tracing::debug!(path = %page.output_path.display(), "Wrote page");
        written.push(page.output_path.clone());
    }

    if !pages.iter().any(is_index_page) {
        let stub_path = out_dir.join(INDEX_FILENAME);
        write_file(&stub_path, REDIRECT_STUB)?;
        written.push(stub_path);
    }

    if let Some(index_page) = pages.iter().find(|p| is_index_page(p)).or_else(|| pages.first()) {
        let html = render_one(config, renderer, &css, &pages, index_page, ".")?;
        let root_copy = config.site_dir.join("docs.html");
        write_file(&root_copy, &html)?;
        written.push(root_copy);
    }

    Ok(written)
}

/// Render one page to a full document with a sidebar relative to its URL.
fn render_one(
    config: &BuildConfig,
    renderer: &dyn MarkdownRenderer,
    css: &str,
    pages: &[DocPage],
    page: &DocPage,
    base_prefix: &str,
) -> Result<String, BuildError> {
    let markdown = fs::read_to_string(&page.source_path)?;
    let content = renderer.convert(&markdown);
    let sidebar = render_nav(&build_nav_tree(pages), &page.url_path);
    Ok(render_page(
        css,
        &sidebar,
        &content,
        &page.title,
        base_prefix,
        &config.site_name,
    ))
}

/// Whether a page's output file is the docs index.
fn is_index_page(page: &DocPage) -> bool {
    page.output_path.file_name().is_some_and(|n| n == INDEX_FILENAME)
}

/// Write a file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an I/O error if directory creation or the write fails.
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use dox_renderer::MiniRenderer;

    use super::*;

    fn config(root: &Path) -> BuildConfig {
        BuildConfig {
            source_dir: root.join("docs"),
            site_dir: root.join("site"),
            style_source: root.join("site/index.html"),
            site_name: "Example".to_owned(),
        }
    }

    fn seed(root: &Path) {
        fs::create_dir_all(root.join("docs")).unwrap();
        fs::create_dir_all(root.join("site")).unwrap();
        fs::write(
            root.join("site/index.html"),
            "<style>body { margin: 0 }</style>",
        )
        .unwrap();
    }

    #[test]
    fn test_build_fails_without_style_source() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("docs")).unwrap();

        let result = build_all(&config(tmp.path()), &MiniRenderer::new());
        assert!(matches!(result, Err(BuildError::StyleSourceMissing(_))));
    }

    #[test]
    fn test_build_writes_mirrored_tree() {
        let tmp = tempfile::tempdir().unwrap();
        seed(tmp.path());
        fs::write(tmp.path().join("docs/index.md"), "# Welcome").unwrap();
        fs::create_dir_all(tmp.path().join("docs/guide")).unwrap();
        fs::write(tmp.path().join("docs/guide/setup.md"), "# Setup").unwrap();

        let written = build_all(&config(tmp.path()), &MiniRenderer::new()).unwrap();

        assert!(tmp.path().join("site/docs/index.html").exists());
        assert!(tmp.path().join("site/docs/guide/setup.html").exists());
        assert!(tmp.path().join("site/docs.html").exists());
        assert_eq!(written.len(), 3);
    }

    #[test]
    fn test_redirect_stub_when_no_index() {
        let tmp = tempfile::tempdir().unwrap();
        seed(tmp.path());
        fs::write(tmp.path().join("docs/guide.md"), "# Guide").unwrap();

        let written = build_all(&config(tmp.path()), &MiniRenderer::new()).unwrap();

        let stub = fs::read_to_string(tmp.path().join("site/docs/index.html")).unwrap();
        assert!(stub.contains("http-equiv=refresh"));
        assert!(stub.contains("url=./index.html"));
        // guide.html + stub + root docs.html
        assert_eq!(written.len(), 3);
    }

    #[test]
    fn test_no_stub_when_index_exists() {
        let tmp = tempfile::tempdir().unwrap();
        seed(tmp.path());
        fs::write(tmp.path().join("docs/index.md"), "# Welcome").unwrap();

        build_all(&config(tmp.path()), &MiniRenderer::new()).unwrap();

        let index = fs::read_to_string(tmp.path().join("site/docs/index.html")).unwrap();
        assert!(index.contains("Welcome"));
        assert!(!index.contains("http-equiv=refresh"));
    }

    #[test]
    fn test_root_copy_uses_site_root_prefix() {
        let tmp = tempfile::tempdir().unwrap();
        seed(tmp.path());
        fs::write(tmp.path().join("docs/index.md"), "# Welcome").unwrap();

        build_all(&config(tmp.path()), &MiniRenderer::new()).unwrap();

        let root_copy = fs::read_to_string(tmp.path().join("site/docs.html")).unwrap();
        assert!(root_copy.contains("href=\"./index.html\""));
        assert!(!root_copy.contains("href=\"../index.html\""));
    }

    #[test]
    fn test_root_copy_falls_back_to_first_page() {
        let tmp = tempfile::tempdir().unwrap();
        seed(tmp.path());
        fs::write(tmp.path().join("docs/alpha.md"), "# Alpha").unwrap();
        fs::write(tmp.path().join("docs/beta.md"), "# Beta").unwrap();

        build_all(&config(tmp.path()), &MiniRenderer::new()).unwrap();

        let root_copy = fs::read_to_string(tmp.path().join("site/docs.html")).unwrap();
        assert!(root_copy.contains("<h1>Alpha</h1>"));
    }

    #[test]
    fn test_empty_source_tree_still_writes_stub() {
        let tmp = tempfile::tempdir().unwrap();
        seed(tmp.path());

        let written = build_all(&config(tmp.path()), &MiniRenderer::new()).unwrap();

        assert_eq!(written.len(), 1);
        assert!(tmp.path().join("site/docs/index.html").exists());
    }
}
