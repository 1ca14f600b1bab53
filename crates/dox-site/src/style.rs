//! Site CSS extraction.
//!
//! The generated pages reuse the styling of the main site by extracting the
//! first inline `<style>` block from its HTML entry point.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::build::BuildError;

/// First `<style>...</style>` pair, case-insensitive, across lines.
static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style>(.*?)</style>").expect("style pattern compiles"));

/// Extract the first inline style block from the style source file.
///
/// A missing style block yields an empty string; a missing file is fatal.
///
/// # Errors
///
/// Returns [`BuildError::StyleSourceMissing`] if the file does not exist,
/// or an I/O error if it cannot be read.
pub fn extract_site_css(style_source: &Path) -> Result<String, BuildError> {
    if !style_source.exists() {
        return Err(BuildError::StyleSourceMissing(style_source.to_path_buf()));
    }
    let text = fs::read_to_string(style_source)?;
    Ok(STYLE_RE
        .captures(&text)
        .map(|caps| caps[1].trim().to_owned())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write_style_source(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("index.html");
        fs::write(&path, content).unwrap();
        (tmp, path)
    }

    #[test]
    fn test_extracts_first_style_block() {
        let (_tmp, path) =
            write_style_source("<html><style>\nbody { color: red }\n</style><style>b{}</style>");
        assert_eq!(extract_site_css(&path).unwrap(), "body { color: red }");
    }

    #[test]
    fn test_case_insensitive_tags() {
        let (_tmp, path) = write_style_source("<STYLE>a { top: 0 }</STYLE>");
        assert_eq!(extract_site_css(&path).unwrap(), "a { top: 0 }");
    }

    #[test]
    fn test_missing_block_is_empty() {
        let (_tmp, path) = write_style_source("<html><body>no styles</body></html>");
        assert_eq!(extract_site_css(&path).unwrap(), "");
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = extract_site_css(Path::new("/nonexistent/index.html"));
        assert!(matches!(result, Err(BuildError::StyleSourceMissing(_))));
    }
}
