//! Trait-based markdown renderer with pluggable strategies.
//!
//! This crate provides the [`MarkdownRenderer`] trait and two implementations:
//!
//! - [`CmarkRenderer`]: full-featured, built on `pulldown-cmark` with tables,
//!   strikethrough, and heading anchors. Available under the `cmark` feature
//!   (enabled by default).
//! - [`MiniRenderer`]: a minimal built-in fallback supporting headings, fenced
//!   code blocks, paragraphs, inline code, and unordered lists.
//!
//! The strategy is selected once at startup via [`default_renderer`], not per
//! call: when the crate is compiled with the `cmark` feature the full renderer
//! is used, otherwise the fallback.
//!
//! # Example
//!
//! ```
//! use dox_renderer::default_renderer;
//!
//! let renderer = default_renderer();
//! let html = renderer.convert("# Hello\n\nSome text");
//! assert!(html.contains("Hello"));
//! ```

#[cfg(feature = "cmark")]
mod cmark;
mod escape;
mod mini;

#[cfg(feature = "cmark")]
pub use cmark::CmarkRenderer;
pub use escape::escape_html;
pub use mini::MiniRenderer;

/// Converts markdown text to an HTML fragment.
///
/// Implementations must be deterministic: converting the same input twice
/// yields identical output.
pub trait MarkdownRenderer {
    /// Convert markdown text to an HTML fragment.
    fn convert(&self, markdown: &str) -> String;

    /// Strategy name for logs and diagnostics.
    fn name(&self) -> &'static str;
}

/// Select the default renderer strategy.
///
/// Returns the `pulldown-cmark`-based renderer when compiled with the `cmark`
/// feature, otherwise the built-in fallback.
#[must_use]
pub fn default_renderer() -> Box<dyn MarkdownRenderer> {
    #[cfg(feature = "cmark")]
    {
        Box::new(CmarkRenderer::new())
    }
    #[cfg(not(feature = "cmark"))]
    {
        Box::new(MiniRenderer::new())
    }
}
