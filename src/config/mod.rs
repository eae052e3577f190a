use crate::models::ToolConfig;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// File name of the optional settings file in the base directory
pub const SETTINGS_FILE: &str = "mod_order_tool.yaml";

/// Configuration manager for the optional YAML settings file.
///
/// The file is only ever read; operators write it by hand.
///
/// The settings file lives next to the mod folders. It is a regular file, so
/// it never shows up in a scan.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    settings_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager for the specified directory.
    ///
    /// The directory is expected to exist already (it is the directory the
    /// executable lives in). Nothing is created here.
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Self {
        let config_dir = config_dir.as_ref().to_path_buf();
        Self {
            settings_path: config_dir.join(SETTINGS_FILE),
            config_dir,
        }
    }

    /// Load the settings file.
    ///
    /// # Returns
    /// The loaded ToolConfig, or default if file doesn't exist
    pub fn load_config(&self) -> Result<ToolConfig> {
        if !self.settings_path.exists() {
            tracing::warn!(
                "Settings file not found at {}, using defaults",
                self.settings_path
            );
            return Ok(ToolConfig::default());
        }

        let file_contents = fs::read_to_string(&self.settings_path)
            .with_context(|| format!("Failed to read settings: {}", self.settings_path))?;

        // An empty file deserializes to unit, not a mapping
        if file_contents.trim().is_empty() {
            return Ok(ToolConfig::default());
        }

        let config: ToolConfig = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse settings: {}", self.settings_path))?;

        tracing::info!("Loaded settings from {}", self.settings_path);
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    /// Get the settings file path.
    pub fn settings_path(&self) -> &Utf8Path {
        &self.settings_path
    }
}
