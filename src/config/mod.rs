//! @acp:module "Configuration"
//! @acp:summary "Tool configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default config file name in the working directory
pub const CONFIG_FILE: &str = ".gxmod.config.json";

/// @acp:summary "Main gxmod configuration structure"
/// @acp:lock normal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding all mod project folders
    #[serde(default = "default_projects_dir")]
    pub projects_dir: PathBuf,

    /// Developer name pre-filled into new projects
    #[serde(default = "default_developer")]
    pub developer: String,

    /// Description pre-filled into new projects
    #[serde(default = "default_description")]
    pub description: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            projects_dir: default_projects_dir(),
            developer: default_developer(),
            description: default_description(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| crate::ModError::fs("open", path.as_ref(), e))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content).map_err(|e| crate::ModError::fs("write", path.as_ref(), e))?;
        Ok(())
    }

    /// @acp:summary "Load from the default location or fall back to defaults"
    pub fn load_or_default() -> Self {
        Self::load(CONFIG_FILE).unwrap_or_default()
    }
}

fn default_projects_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".gxmod").join("projects"))
        .unwrap_or_else(|| PathBuf::from("projects"))
}

fn default_developer() -> String {
    "Anonymous".to_string()
}

fn default_description() -> String {
    "A custom Opera GX mod.".to_string()
}
