//! plancal configuration at ~/.config/plancal/config.toml

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{PlanCalError, PlanCalResult};
use crate::identity::{DEFAULT_CLIENT_ADDRESS, DEFAULT_CLIENT_LABEL, SessionAttributes};

static DEFAULT_DB_PATH: &str = "db/calendar_db.json";
const DEFAULT_PORT: u16 = 4096;

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_PATH)
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_client_address() -> String {
    DEFAULT_CLIENT_ADDRESS.to_string()
}

fn default_client_label() -> String {
    DEFAULT_CLIENT_LABEL.to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PlanCalConfig {
    /// Entry store file. Relative paths resolve against the working directory.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Session attributes hashed into the owner identity.
    #[serde(default = "default_client_address")]
    pub client_address: String,

    #[serde(default = "default_client_label")]
    pub client_label: String,
}

impl Default for PlanCalConfig {
    fn default() -> Self {
        PlanCalConfig {
            db_path: default_db_path(),
            port: default_port(),
            client_address: default_client_address(),
            client_label: default_client_label(),
        }
    }
}

impl PlanCalConfig {
    pub fn config_path() -> PlanCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlanCalError::Config("Could not determine config directory".into()))?
            .join("plancal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user config, writing a commented-out default on first run.
    pub fn load() -> PlanCalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> PlanCalResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| PlanCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PlanCalError::Config(e.to_string()))
    }

    /// Store path with `~` expanded.
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.db_path.to_string_lossy()).into_owned())
    }

    pub fn session(&self) -> SessionAttributes {
        SessionAttributes {
            address: self.client_address.clone(),
            label: self.client_label.clone(),
        }
    }

    pub fn save(&self, path: &Path) -> PlanCalResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| PlanCalError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| PlanCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> PlanCalResult<()> {
        let contents = format!(
            "\
# plancal configuration

# Where entries are stored:
# db_path = \"{DEFAULT_DB_PATH}\"

# Port the server listens on (127.0.0.1 only):
# port = {DEFAULT_PORT}

# Session attributes hashed into your owner identity:
# client_address = \"{DEFAULT_CLIENT_ADDRESS}\"
# client_label = \"{DEFAULT_CLIENT_LABEL}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PlanCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PlanCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
