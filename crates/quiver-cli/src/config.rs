//! Configuration discovery for the `quiver` binary.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use quiver::{QuiverError, config::AppConfig};

/// Errors raised while locating or parsing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),
}

impl From<ConfigError> for QuiverError {
    fn from(err: ConfigError) -> Self {
        QuiverError::Config(err.to_string())
    }
}

/// Local configuration path, relative to the working directory.
const LOCAL_CONFIG: &str = "quiver/config.toml";

/// Resolves the application configuration.
///
/// An explicit path must exist. Without one the first existing file among
/// `quiver/config.toml` and `<platform config dir>/config.toml` is read, and
/// the defaults apply when neither exists.
///
/// # Errors
///
/// Returns [`QuiverError::Config`] when the explicit file is missing or the
/// chosen file is not valid configuration TOML, and [`QuiverError::Io`] when
/// it cannot be read.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, QuiverError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }
        return read_config(path, "explicit");
    }

    match discovered_config() {
        Some((path, origin)) => read_config(&path, origin),
        None => {
            debug!("No configuration file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

/// Returns the first configuration file found on disk with its origin label.
fn discovered_config() -> Option<(PathBuf, &'static str)> {
    let mut candidates = vec![(PathBuf::from(LOCAL_CONFIG), "local")];
    match ProjectDirs::from("com", "quiver", "quiver") {
        Some(dirs) => candidates.push((dirs.config_dir().join("config.toml"), "system")),
        None => debug!("Platform config directory unavailable"),
    }

    candidates.into_iter().find(|(path, origin)| {
        let found = path.is_file();
        if !found {
            debug!(path = path.display().to_string(), origin; "Config candidate absent");
        }
        found
    })
}

fn read_config(path: &Path, origin: &str) -> Result<AppConfig, QuiverError> {
    info!(path = path.display().to_string(), origin; "Loading configuration");
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    Ok(config)
}
