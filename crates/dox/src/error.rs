//! CLI error types.

use dox_config::ConfigError;
use dox_server::ServeError;
use dox_site::BuildError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0}")]
    Serve(#[from] ServeError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
