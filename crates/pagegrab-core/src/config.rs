use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::url_model::ExtensionFilter;

/// Suffix used when neither the command line nor the config file names one.
pub const DEFAULT_EXTENSION: &str = ".pdf";

/// Missing or unusable run input, detected before any network activity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing url")]
    MissingUrl,
    #[error("missing folder")]
    MissingFolder,
    #[error("folder {0} does not exist or is not a directory")]
    FolderNotFound(PathBuf),
}

/// Immutable input to one download run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Seed page to fetch and scan for links.
    pub url: String,
    /// Existing directory downloads are written into.
    pub folder: PathBuf,
    /// Ordered suffix filter applied to each href.
    pub extensions: ExtensionFilter,
}

impl RunConfig {
    /// Builds a run configuration. An empty extension list falls back to `.pdf`.
    pub fn new(
        url: impl Into<String>,
        folder: impl Into<PathBuf>,
        extensions: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let url = url.into();
        let folder = folder.into();
        if url.is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        if folder.as_os_str().is_empty() {
            return Err(ConfigError::MissingFolder);
        }
        let extensions = if extensions.is_empty() {
            vec![DEFAULT_EXTENSION.to_string()]
        } else {
            extensions
        };
        Ok(Self {
            url,
            folder,
            extensions: ExtensionFilter::new(extensions),
        })
    }

    /// Checks that the destination folder exists and is a directory.
    pub fn validate_folder(&self) -> Result<(), ConfigError> {
        validate_folder(&self.folder)
    }
}

pub fn validate_folder(folder: &Path) -> Result<(), ConfigError> {
    if folder.as_os_str().is_empty() {
        return Err(ConfigError::MissingFolder);
    }
    if !folder.is_dir() {
        return Err(ConfigError::FolderNotFound(folder.to_path_buf()));
    }
    Ok(())
}

/// Settings loaded from `~/.config/pagegrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagegrabConfig {
    /// Overall deadline for one run, in seconds.
    pub timeout_secs: u64,
    /// TCP/TLS connect timeout per request, in seconds.
    pub connect_timeout_secs: u64,
    /// Suffixes used when `--ext` is not given.
    pub extensions: Vec<String>,
}

impl Default for PagegrabConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            connect_timeout_secs: 10,
            extensions: vec![DEFAULT_EXTENSION.to_string()],
        }
    }
}

impl PagegrabConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagegrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PagegrabConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<PagegrabConfig> {
    if !path.exists() {
        let default_cfg = PagegrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: PagegrabConfig = toml::from_str(&data)?;
    Ok(cfg)
}
