//! `dox build` command implementation.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use dox_config::{CliSettings, Config};
use dox_renderer::{MarkdownRenderer, default_renderer};
use dox_site::{BuildConfig, build_all, latest_mtime, write_file};

use crate::error::CliError;
use crate::output::Output;

/// Starter content written when the source directory does not exist yet.
const STARTER_INDEX: &str = "# Documentation

Welcome! This site is generated from the markdown files in this folder.

## Getting started

- Edit `index.md` or add more `.md` files in subfolders
- Run `dox build` to regenerate the site
- Run `dox serve` to preview it locally

## Example

```sh
dox build --watch
```
";

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover dox.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Site output directory (overrides config).
    #[arg(long)]
    site_dir: Option<PathBuf>,

    /// Style source HTML file (overrides config).
    #[arg(long)]
    style_source: Option<PathBuf>,

    /// Rebuild when sources change (level-triggered polling).
    #[arg(short, long)]
    watch: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or a build pass fails.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            site_dir: self.site_dir,
            style_source: self.style_source,
            host: None,
            port: None,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let build_config = BuildConfig {
            source_dir: config.build_resolved.source_dir.clone(),
            site_dir: config.build_resolved.site_dir.clone(),
            style_source: config.build_resolved.style_source.clone(),
            site_name: config.site.name.clone(),
        };

        ensure_source_dir(&build_config, &output)?;

        // Strategy selected once at startup, not per page.
        let renderer = default_renderer();

        let written = build_all(&build_config, renderer.as_ref())?;
        output.success(&format!(
            "Built {} file(s) into {}",
            written.len(),
            build_config.docs_out_dir().display()
        ));

        if self.watch {
            let interval = Duration::from_secs(config.watch.interval_secs.max(1));
            watch_loop(&build_config, renderer.as_ref(), interval, &output).await?;
        }

        Ok(())
    }
}

/// Poll source mtimes and rebuild whenever the newest one advances.
async fn watch_loop(
    config: &BuildConfig,
    renderer: &dyn MarkdownRenderer,
    interval: Duration,
    output: &Output,
) -> Result<(), CliError> {
    output.info("Watching for changes... Press Ctrl+C to stop");
    let mut last_seen = latest_mtime(config);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                output.info("Stopped watching");
                return Ok(());
            }
            () = tokio::time::sleep(interval) => {}
        }

        let current = latest_mtime(config);
        if current > last_seen {
            let written = build_all(config, renderer)?;
            output.success(&format!("Rebuilt {} file(s)", written.len()));
            last_seen = current;
        }
    }
}

/// Seed the source directory with a starter page when it does not exist.
fn ensure_source_dir(config: &BuildConfig, output: &Output) -> Result<(), CliError> {
    if config.source_dir.exists() {
        return Ok(());
    }
    output.info(&format!(
        "Creating {} with a starter index.md",
        config.source_dir.display()
    ));
    write_file(&config.source_dir.join("index.md"), STARTER_INDEX)?;
    Ok(())
}
