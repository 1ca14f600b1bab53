//! Change detection for the rebuild-on-change loop.
//!
//! Level-triggered polling: the caller compares the newest modification
//! time across all sources against the last observed maximum and re-runs
//! the build when it advances. No filesystem event subscriptions.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::build::BuildConfig;

/// Newest modification time across all markdown sources and the style
/// source, or `None` when nothing exists yet.
#[must_use]
pub fn latest_mtime(config: &BuildConfig) -> Option<SystemTime> {
    let mut newest = mtime(&config.style_source);
    collect_mtimes(&config.source_dir, &mut newest);
    newest
}

fn collect_mtimes(dir: &Path, newest: &mut Option<SystemTime>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.filter_map(Result::ok) {
        let path = entry.path();
        if path.is_dir() {
            collect_mtimes(&path, newest);
        } else if path.extension().is_some_and(|e| e == "md") {
            if let Some(t) = mtime(&path) {
                if newest.is_none_or(|n| t > n) {
                    *newest = Some(t);
                }
            }
        }
    }
}

fn mtime(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}
