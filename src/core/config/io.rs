use super::data::{path_display, Config};
use super::defaults::{CONFIG_FILE_NAME, CONVERSATIONS_FILE_NAME};
use directories::ProjectDirs;
use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Errors that can occur when loading or saving configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse the configuration file as valid TOML.
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Failed to serialize or persist the configuration.
    Write {
        path: PathBuf,
        source: Box<dyn StdError + Send + Sync>,
    },

    /// No home directory could be determined for the platform config dirs.
    NoProjectDirs,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "Failed to read config at {}: {}", path_display(path), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "Failed to parse config at {}: {}", path_display(path), source)
            }
            ConfigError::Write { path, source } => {
                write!(f, "Failed to write {}: {}", path_display(path), source)
            }
            ConfigError::NoProjectDirs => {
                write!(f, "Could not determine a config directory; pass --data-dir")
            }
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Write { source, .. } => Some(source.as_ref()),
            ConfigError::NoProjectDirs => None,
        }
    }
}

/// Where chatmark keeps its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_file: PathBuf,
    pub conversations_file: PathBuf,
}

impl AppPaths {
    /// Put both files under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            config_file: dir.join(CONFIG_FILE_NAME),
            conversations_file: dir.join(CONVERSATIONS_FILE_NAME),
        }
    }

    /// Use `override_dir` when given, else the platform config and data dirs.
    pub fn resolve(override_dir: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(dir) = override_dir {
            return Ok(Self::in_dir(dir));
        }
        let dirs =
            ProjectDirs::from("org", "chatmark", "chatmark").ok_or(ConfigError::NoProjectDirs)?;
        Ok(Self {
            config_file: dirs.config_dir().join(CONFIG_FILE_NAME),
            conversations_file: dirs.data_dir().join(CONVERSATIONS_FILE_NAME),
        })
    }
}

/// Write `contents` to `path` through a temp file in the same directory so a
/// crash never leaves a half-written file behind.
pub(crate) fn write_atomically(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let parent = path.parent().filter(|dir| !dir.as_os_str().is_empty());

    if let Some(dir) = parent {
        fs::create_dir_all(dir)?;
    }

    let mut temp_file = match parent {
        Some(dir) => NamedTempFile::new_in(dir)?,
        None => NamedTempFile::new()?,
    };

    temp_file.write_all(contents)?;
    temp_file.as_file_mut().sync_all()?;
    temp_file.persist(path).map_err(|err| err.error)?;
    Ok(())
}

impl Config {
    pub fn load_from_path(config_path: &Path) -> Result<Config, ConfigError> {
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            path: config_path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })
    }

    pub fn save_to_path(&self, config_path: &Path) -> Result<(), ConfigError> {
        let write_err = |source: Box<dyn StdError + Send + Sync>| ConfigError::Write {
            path: config_path.to_path_buf(),
            source,
        };
        let contents = toml::to_string_pretty(self).map_err(|err| write_err(Box::new(err)))?;
        write_atomically(config_path, contents.as_bytes()).map_err(|err| write_err(Box::new(err)))?;
        debug!(path = %config_path.display(), "saved config");
        Ok(())
    }
}
