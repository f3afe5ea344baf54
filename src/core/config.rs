//! Configuration resolution.
//!
//! Determines where workspace metadata files live and how expensive new
//! ciphertexts are. Values come from, in increasing precedence: built-in
//! defaults, `<cellar home>/config.toml`, and environment variables.

use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::cipher::Age;
use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Contents of the optional `config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Directory holding workspace metadata files
    #[serde(default)]
    pub store_dir: Option<PathBuf>,
    /// scrypt work factor (log2 N) for new ciphertexts
    #[serde(default)]
    pub work_factor: Option<u8>,
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cellar home directory
    pub home: PathBuf,
    /// Directory holding one metadata file per workspace
    pub store_dir: PathBuf,
    /// Pinned scrypt work factor; `None` lets age calibrate
    pub work_factor: Option<u8>,
}

impl Config {
    /// Resolve configuration from the environment and the config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if no home directory can be found,
    /// or a parse/validation error for a malformed config file or variable.
    pub fn load() -> Result<Self> {
        let home = match std::env::var_os(constants::ENV_HOME) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::home_dir()
                .ok_or(ConfigError::NoHomeDir)?
                .join(constants::HOME_DIR),
        };

        let file = Self::read_file(&home.join(constants::CONFIG_FILE))?;
        let env_store_dir = std::env::var_os(constants::ENV_STORE_DIR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let env_work_factor = std::env::var(constants::ENV_WORK_FACTOR)
            .ok()
            .filter(|v| !v.is_empty());

        Self::resolve(home, file, env_store_dir, env_work_factor.as_deref())
    }

    /// Combine the config file with environment overrides.
    pub fn resolve(
        home: PathBuf,
        file: FileConfig,
        env_store_dir: Option<PathBuf>,
        env_work_factor: Option<&str>,
    ) -> Result<Self> {
        let store_dir = env_store_dir
            .or(file.store_dir)
            .unwrap_or_else(|| home.join(constants::STORE_DIR));

        let work_factor = match env_work_factor {
            Some(raw) => Some(raw.trim().parse::<u8>().map_err(|e| {
                ConfigError::InvalidValue {
                    field: "work_factor",
                    reason: format!("{}: {}", raw, e),
                }
            })?),
            None => file.work_factor,
        };

        if let Some(log_n) = work_factor {
            if !(1..=30).contains(&log_n) {
                return Err(ConfigError::InvalidValue {
                    field: "work_factor",
                    reason: format!("{} is outside 1..=30", log_n),
                }
                .into());
            }
        }

        let config = Self {
            home,
            store_dir,
            work_factor,
        };
        debug!(
            home = %config.home.display(),
            store_dir = %config.store_dir.display(),
            work_factor = ?config.work_factor,
            "config resolved"
        );
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<FileConfig> {
        if !path.exists() {
            return Ok(FileConfig::default());
        }
        debug!(path = %path.display(), "loading config file");
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let file = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        Ok(file)
    }

    /// Metadata file for the workspace rooted at `local_root`.
    ///
    /// Each directory gets its own workspace, named by a hash of its path.
    pub fn store_path(&self, local_root: &Path) -> PathBuf {
        let digest = Sha256::digest(local_root.as_os_str().as_encoded_bytes());
        self.store_dir
            .join(format!("{:x}", digest))
            .with_extension(constants::STORE_EXTENSION)
    }

    /// Cipher configured with the resolved work factor.
    pub fn cipher(&self) -> Age {
        match self.work_factor {
            Some(log_n) => Age::with_work_factor(log_n),
            None => Age::new(),
        }
    }
}
