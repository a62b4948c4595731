//! Configuration loader
//!
//! Builds a [`ClientConfig`] from files and environment variables.
//!
//! ## Loading Strategy
//! 1. Start from the first config file found by [`probe_config_paths`], or
//!    from [`ClientConfig::default`] when there is none
//! 2. Overlay any client variables set in the environment
//!
//! ## Environment Variables
//! - `KORAPAY_BASE_URL`: API origin
//! - `KORAPAY_TIMEOUT_SECS`: per-request timeout in whole seconds
//!
//! Credentials are not configuration; they are resolved by
//! [`CredentialResolver`](korapay_core::CredentialResolver). Use
//! [`load_dotenv`] to make a `.env` file visible to it.
//!
//! ## File Locations
//! The loader probes, in order, `korapay.toml`, `korapay.json`,
//! `config.toml` and `config.json` in the working directory and then next to
//! the executable.

use std::path::{Path, PathBuf};

use korapay_domain::constants::{ENV_BASE_URL, ENV_TIMEOUT_SECS};
use korapay_domain::{ClientConfig, KorapayError, Result};

use crate::errors::InfraError;

const CONFIG_FILE_NAMES: [&str; 4] = ["korapay.toml", "korapay.json", "config.toml", "config.json"];

/// Load configuration: probed file (if any), then environment overrides.
///
/// # Errors
/// Returns `KorapayError::Config` if a probed file cannot be parsed or an
/// environment value is invalid.
pub fn load() -> Result<ClientConfig> {
    let base = match probe_config_paths() {
        Some(path) => load_from_file(&path)?,
        None => {
            tracing::debug!("No config file found, using defaults");
            ClientConfig::default()
        }
    };
    apply_env(base, |key| std::env::var(key).ok())
}

/// Load configuration from environment variables only.
///
/// Unset variables keep their defaults.
///
/// # Errors
/// Returns `KorapayError::Config` if `KORAPAY_TIMEOUT_SECS` is not a
/// non-negative integer.
pub fn load_from_env() -> Result<ClientConfig> {
    load_from_env_with(|key| std::env::var(key).ok())
}

/// [`load_from_env`] with an injectable variable lookup.
pub fn load_from_env_with<F>(lookup: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    apply_env(ClientConfig::default(), lookup)
}

fn apply_env<F>(mut config: ClientConfig, lookup: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(base_url) = read(ENV_BASE_URL) {
        config.base_url = base_url;
    }
    if let Some(timeout) = read(ENV_TIMEOUT_SECS) {
        let secs = timeout.trim().parse::<u64>().map_err(|e| {
            KorapayError::Config(format!("Invalid {ENV_TIMEOUT_SECS} value '{timeout}': {e}"))
        })?;
        config.timeout_secs = Some(secs);
    }

    Ok(config)
}

/// Load configuration from a TOML or JSON file.
///
/// # Errors
/// Returns `KorapayError::Config` if the file is missing, unreadable, has an
/// unsupported extension or fails to parse.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<ClientConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(KorapayError::Config(format!("Config file not found: {}", path.display())));
    }

    tracing::info!(path = %path.display(), "Loading client configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| KorapayError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, path)
}

/// Parse configuration from string content; format follows the extension.
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| KorapayError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| KorapayError::Config(format!("Invalid JSON format: {e}"))),
        other => Err(KorapayError::Config(format!("Unsupported config format: '{other}'"))),
    }
}

/// Load a `.env` file into the process environment.
///
/// With `None`, searches the working directory and its parents for `.env`.
/// Variables already set are not overridden. Returns the loaded file's path.
///
/// # Errors
/// Returns `KorapayError::Config` if the file is missing or malformed.
pub fn load_dotenv(path: Option<&Path>) -> Result<PathBuf> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    }
    .map_err(InfraError::from)?;

    tracing::debug!(path = %loaded.display(), "Loaded environment file");
    Ok(loaded)
}

/// First existing config file among the standard locations.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}
