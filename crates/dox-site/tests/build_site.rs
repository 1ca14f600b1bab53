//! End-to-end build scenarios over a real temp directory tree.

use std::fs;
use std::path::Path;

use dox_renderer::MiniRenderer;
use dox_site::{BuildConfig, build_all};

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
        "<html><style>\nbody { margin: 0 }\n</style></html>",
    )
    .unwrap();
}

fn write_doc(root: &Path, rel: &str, content: &str) {
    let path = root.join("docs").join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn index_and_nested_page_build_with_nav_state() {
    let tmp = tempfile::tempdir().unwrap();
    seed(tmp.path());
    write_doc(tmp.path(), "index.md", "# Welcome\n\nHello there.");
    write_doc(tmp.path(), "guide/setup.md", "# Setup\n\nSteps.");

    build_all(&config(tmp.path()), &MiniRenderer::new()).unwrap();

    let index = fs::read_to_string(tmp.path().join("site/docs/index.html")).unwrap();
    let setup = fs::read_to_string(tmp.path().join("site/docs/guide/setup.html")).unwrap();

    // Index page: its own node is the only active one, guide stays collapsed.
    assert!(index.contains(r#"<li data-key="index" class="active">"#));
    assert!(index.contains(r#"<li data-key="guide" class="folder">"#));
    assert!(!index.contains("folder expanded"));

    // Setup page: guide is an expanded, non-active folder; setup is active.
    assert!(setup.contains(r#"<li data-key="guide" class="folder expanded">"#));
    assert!(setup.contains(r#"<li data-key="guide/setup.md" class="active">"#));

    // Both documents carry the extracted site CSS and the converted content.
    assert!(index.contains("body { margin: 0 }"));
    assert!(index.contains("<h1>Welcome</h1>"));
    assert!(setup.contains("<h1>Setup</h1>"));
}

#[test]
fn heading_less_page_gets_title_cased_name() {
    let tmp = tempfile::tempdir().unwrap();
    seed(tmp.path());
    write_doc(tmp.path(), "getting-started.md", "Just some text.");

    build_all(&config(tmp.path()), &MiniRenderer::new()).unwrap();

    let page = fs::read_to_string(tmp.path().join("site/docs/getting-started.html")).unwrap();
    assert!(page.contains("<title>Getting Started — Example Docs</title>"));
    assert!(page.contains(">Getting Started</a>"));
}

#[test]
fn redirect_stub_written_when_index_missing() {
    let tmp = tempfile::tempdir().unwrap();
    seed(tmp.path());
    write_doc(tmp.path(), "guide.md", "# Guide");

    let written = build_all(&config(tmp.path()), &MiniRenderer::new()).unwrap();

    let stub = fs::read_to_string(tmp.path().join("site/docs/index.html")).unwrap();
    assert!(stub.contains(r#"content="0; url=./index.html""#));
    assert!(written.iter().any(|p| p.ends_with("docs/index.html")));
}

#[test]
fn rebuild_is_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    seed(tmp.path());
    write_doc(tmp.path(), "index.md", "# Welcome");
    write_doc(tmp.path(), "guide/setup.md", "# Setup");
    write_doc(tmp.path(), "guide/index.md", "# Guide");

    let cfg = config(tmp.path());
    build_all(&cfg, &MiniRenderer::new()).unwrap();
    let first = fs::read_to_string(tmp.path().join("site/docs/guide/setup.html")).unwrap();

    build_all(&cfg, &MiniRenderer::new()).unwrap();
    let second = fs::read_to_string(tmp.path().join("site/docs/guide/setup.html")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn folder_index_attaches_to_folder_in_rendered_sidebar() {
    let tmp = tempfile::tempdir().unwrap();
    seed(tmp.path());
    write_doc(tmp.path(), "guide/index.md", "# Guide Overview");
    write_doc(tmp.path(), "guide/setup.md", "# Setup");

    build_all(&config(tmp.path()), &MiniRenderer::new()).unwrap();

    let setup = fs::read_to_string(tmp.path().join("site/docs/guide/setup.html")).unwrap();
    // The folder row links to the index page under the folder's own key;
    // there is no separate leaf for index.md.
    assert!(setup.contains(r#"<a href="/docs/guide/index.html">Guide Overview</a>"#));
    assert!(!setup.contains(r#"data-key="guide/index.md""#));
}
