//! `dox serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use dox_config::{CliSettings, Config};
use dox_server::{ServerConfig, run_server};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover dox.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Site directory to serve (overrides config).
    #[arg(long)]
    site_dir: Option<PathBuf>,

    /// Enable verbose output (request tracing).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            site_dir: self.site_dir,
            host: self.host,
            port: self.port,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let site_dir = config.build_resolved.site_dir.clone();
        if !site_dir.exists() {
            output.warning(&format!(
                "Site directory {} does not exist yet; run `dox build` first",
                site_dir.display()
            ));
        }

        output.info(&format!(
            "Serving {} at http://{}:{}/",
            site_dir.display(),
            config.server.host,
            config.server.port
        ));
        output.info("Press Ctrl+C to stop");

        run_server(ServerConfig {
            host: config.server.host.clone(),
            port: config.server.port,
            site_dir,
        })
        .await?;

        Ok(())
    }
}
