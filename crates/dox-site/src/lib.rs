//! Site structure, navigation, and page building for dox.
//!
//! This crate turns a tree of markdown sources into a static documentation
//! site:
//!
//! - [`discover_pages`] walks the source tree and derives one [`DocPage`]
//!   per markdown file (output path, public URL, display title).
//! - [`build_nav_tree`] folds the page list into a [`NavNode`] hierarchy
//!   mirroring the directory structure; [`render_nav`] renders it to nested
//!   list markup relative to the page currently being rendered.
//! - [`render_page`] assembles one full HTML document from site CSS, sidebar,
//!   and converted content.
//! - [`build_all`] drives the whole pass and returns every path written.
//!
//! All of it is synchronous and deterministic: building the same tree twice
//! produces byte-identical output.

mod build;
mod discover;
mod nav;
mod style;
mod template;
mod watch;

pub use build::{BuildConfig, BuildError, build_all, write_file};
pub use discover::{DocPage, discover_pages, title_case};
pub use nav::{NavNode, build_nav_tree, render_nav};
pub use style::extract_site_css;
pub use template::render_page;
pub use watch::latest_mtime;
