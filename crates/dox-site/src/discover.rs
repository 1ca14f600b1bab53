//! Doc page discovery by filesystem walking.
//!
//! Walks the source tree for markdown files and derives one [`DocPage`] per
//! file: output location, public URL, and display title. The only content
//! read at this stage is for title derivation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One discovered markdown source, slated for conversion to one HTML file.
///
/// Immutable once discovered; lifetime is a single build pass.
#[derive(Debug, Clone)]
pub struct DocPage {
    /// Absolute (or caller-relative) path to the markdown source.
    pub source_path: PathBuf,
    /// Path relative to the source root, used for tree segmentation.
    pub rel_path: PathBuf,
    /// Output file path under the docs output directory.
    pub output_path: PathBuf,
    /// Public URL path, e.g. `/docs/guide/setup.html`.
    pub url_path: String,
    /// Display title: first `# ` heading, else title-cased file stem.
    pub title: String,
}

/// Discover all markdown files under `source_dir`, ordered by relative path.
///
/// For each file the output path mirrors the relative path under `out_dir`
/// with the extension replaced by `.html`, and the URL is `/docs/` plus the
/// same relative path with `/` separators.
///
/// # Errors
///
/// Returns an I/O error if a directory cannot be listed or a source file
/// cannot be read for title derivation.
pub fn discover_pages(source_dir: &Path, out_dir: &Path) -> io::Result<Vec<DocPage>> {
    let mut rel_paths = Vec::new();
    if source_dir.exists() {
        collect_markdown(source_dir, Path::new(""), &mut rel_paths)?;
    }
    // Lexicographic on the slash-joined form; later tie-breaks in the nav
    // tree rely on this order being total and stable.
    rel_paths.sort_by_key(|p| join_segments(p));

    let mut pages = Vec::with_capacity(rel_paths.len());
    for rel in rel_paths {
        let source_path = source_dir.join(&rel);
        let out_rel = rel.with_extension("html");
        let markdown = fs::read_to_string(&source_path)?;
        let stem = rel
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        pages.push(DocPage {
            output_path: out_dir.join(&out_rel),
            url_path: format!("/docs/{}", join_segments(&out_rel)),
            title: derive_title(&markdown, &stem),
            source_path,
            rel_path: rel,
        });
    }
    Ok(pages)
}

/// Recursively collect relative paths of `.md` files, skipping hidden entries.
fn collect_markdown(dir: &Path, rel_prefix: &Path, out: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }
        let rel = rel_prefix.join(&name);
        if entry.file_type()?.is_dir() {
            collect_markdown(&entry.path(), &rel, out)?;
        } else if entry.path().extension().is_some_and(|e| e == "md") {
            out.push(rel);
        }
    }
    Ok(())
}

/// Derive a page title from markdown content.
///
/// Uses the first line starting with `# `; falls back to the title-cased
/// file stem.
pub(crate) fn derive_title(markdown: &str, stem: &str) -> String {
    for line in markdown.lines() {
        if let Some(rest) = line.strip_prefix("# ") {
            return rest.trim().to_owned();
        }
    }
    title_case(stem)
}

/// Title-case a path segment: `-` and `_` become spaces, each word starts
/// with an uppercase letter and continues lowercase.
#[must_use]
pub fn title_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut prev_alpha = false;
    for c in segment.chars() {
        if c == '-' || c == '_' {
            out.push(' ');
            prev_alpha = false;
        } else if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Join a relative path's components with `/` regardless of platform.
fn join_segments(path: &Path) -> String {
    let segments: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    segments.join("/")
}
