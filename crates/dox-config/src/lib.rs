//! Configuration management for dox.
//!
//! Parses `dox.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! Relative paths in the file are resolved against the config file's
//! directory (or the working directory when no file is found). CLI settings
//! can be applied during load via [`CliSettings`]; CLI paths are used as
//! given.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "dox.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override markdown source directory.
    pub source_dir: Option<PathBuf>,
    /// Override site output directory.
    pub site_dir: Option<PathBuf>,
    /// Override style source file.
    pub style_source: Option<PathBuf>,
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity.
    pub site: SiteConfig,
    /// Build paths (relative strings from TOML).
    build: BuildConfigRaw,
    /// Preview server configuration.
    pub server: ServerConfig,
    /// Watch loop configuration.
    pub watch: WatchConfig,

    /// Resolved build paths (set after loading).
    #[serde(skip)]
    pub build_resolved: BuildPaths,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site identity configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name shown in page chrome.
    pub name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Docs".to_owned(),
        }
    }
}

/// Raw build configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    source_dir: Option<String>,
    site_dir: Option<String>,
    style_source: Option<String>,
}

/// Resolved build paths.
#[derive(Debug, Default)]
pub struct BuildPaths {
    /// Markdown source directory.
    pub source_dir: PathBuf,
    /// Site output directory.
    pub site_dir: PathBuf,
    /// HTML file carrying the inline site CSS.
    pub style_source: PathBuf,
}

/// Preview server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8000,
        }
    }
}

/// Watch loop configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Polling interval in seconds.
    pub interval_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { interval_secs: 1 }
    }
}

/// Configuration loading error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Explicitly named configuration file not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration.
    ///
    /// When `explicit` is given, that file must exist. Otherwise `dox.toml`
    /// is searched for upward from the current directory; if none exists,
    /// defaults rooted at the current directory are used.
    ///
    /// # Errors
    ///
    /// Fails when an explicit path is missing, the file cannot be read, or
    /// the TOML does not parse.
    pub fn load(explicit: Option<&Path>, cli: Option<&CliSettings>) -> Result<Self, ConfigError> {
        let config_path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Some(path.to_path_buf())
            }
            None => discover_config()?,
        };

        let mut config: Config = match &config_path {
            Some(path) => toml::from_str(&std::fs::read_to_string(path)?)?,
            None => Config::default(),
        };

        let base = config_path
            .as_ref()
            .and_then(|p| p.parent())
            .map(Path::to_path_buf)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_default();
        config.config_path = config_path;
        config.resolve(&base, cli);
        Ok(config)
    }

    /// Resolve raw values against `base` and apply CLI overrides.
    fn resolve(&mut self, base: &Path, cli: Option<&CliSettings>) {
        let source_dir = self
            .build
            .source_dir
            .as_deref()
            .map_or_else(|| base.join("docs"), |s| resolve_path(base, s));
        let site_dir = self
            .build
            .site_dir
            .as_deref()
            .map_or_else(|| base.join("site"), |s| resolve_path(base, s));
        let style_source = self
            .build
            .style_source
            .as_deref()
            .map_or_else(|| site_dir.join("index.html"), |s| resolve_path(base, s));

        self.build_resolved = BuildPaths {
            source_dir,
            site_dir,
            style_source,
        };

        if let Some(cli) = cli {
            if let Some(dir) = &cli.source_dir {
                self.build_resolved.source_dir.clone_from(dir);
            }
            if let Some(dir) = &cli.site_dir {
                self.build_resolved.site_dir.clone_from(dir);
            }
            if let Some(path) = &cli.style_source {
                self.build_resolved.style_source.clone_from(path);
            }
            if let Some(host) = &cli.host {
                self.server.host.clone_from(host);
            }
            if let Some(port) = cli.port {
                self.server.port = port;
            }
        }
    }
}

/// Resolve a possibly-relative path string against a base directory.
fn resolve_path(base: &Path, value: &str) -> PathBuf {
    let path = PathBuf::from(value);
    if path.is_absolute() { path } else { base.join(path) }
}

/// Search for `dox.toml` upward from the current directory.
fn discover_config() -> Result<Option<PathBuf>, ConfigError> {
    let mut dir = std::env::current_dir()?;
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Ok(Some(candidate));
        }
        if !dir.pop() {
            return Ok(None);
        }
    }
}
