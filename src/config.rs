//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

use crate::bible::Registry;
use crate::error::{Error, Result};

/// Default number of "did you mean" suggestions.
const DEFAULT_SUGGESTIONS: usize = 3;

/// Default log filter for the command-line tool.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// JSON file of extra book aliases, if any
    pub aliases_path: Option<PathBuf>,
    /// `tracing` filter directive for the binary
    pub log_filter: String,
    /// How many book suggestions to offer on an unknown book
    pub max_suggestions: usize,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            aliases_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            max_suggestions: DEFAULT_SUGGESTIONS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build configuration from a variable lookup (the environment in `load`).
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        // Alias file: env var override, or default ~/.config/lectio/aliases.json
        config.aliases_path = match var("LECTIO_ALIASES") {
            Some(path) => {
                let p = PathBuf::from(shellexpand::tilde(&path).to_string());
                if !p.is_file() {
                    return Err(Error::config(
                        format!("LECTIO_ALIASES points to {}, which is not a file", p.display()),
                        "Point it at a JSON object such as {\"mk\": \"MRK\"} or unset it",
                    ));
                }
                Some(p)
            }
            None => default_aliases_path(),
        };

        if let Some(filter) = var("LECTIO_LOG") {
            config.log_filter = filter;
        }

        if let Some(raw) = var("LECTIO_SUGGESTIONS") {
            match raw.parse::<usize>() {
                Ok(n) => config.max_suggestions = n,
                Err(_) => tracing::warn!("Ignoring LECTIO_SUGGESTIONS={raw:?}: not a number"),
            }
        }

        Ok(config)
    }

    /// Build the registry, including any configured extra aliases.
    pub fn build_registry(&self) -> Result<Registry> {
        self.aliases_path
            .as_deref()
            .map_or_else(|| Ok(Registry::standard()), load_registry_with_aliases)
    }
}

/// Read a JSON object of `alias -> book id` and build a registry from it.
pub fn load_registry_with_aliases(path: &Path) -> Result<Registry> {
    let content = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    let extra: BTreeMap<String, String> =
        serde_json::from_str(&content).map_err(|e| Error::json(e, path.to_path_buf()))?;

    let pairs = extra.iter().map(|(alias, id)| (alias.as_str(), id.as_str()));
    let registry = Registry::with_extra_aliases(pairs)?;
    tracing::info!("Loaded {} extra aliases from {}", extra.len(), path.display());
    Ok(registry)
}

fn default_aliases_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join("lectio").join("aliases.json"))
        .filter(|p| p.is_file())
}
