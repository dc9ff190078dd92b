//! Configuration loading and persistence.
//!
//! The config lives as TOML under the platform config directory
//! (`~/.config/vtube/config.toml` on Linux). Loading a missing file yields
//! the defaults; `migrate_config` adds missing keys to an existing file
//! while preserving the user's content and comments.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::DocumentMut;
use tracing::warn;

use crate::tui::theme::Theme;

/// User configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme name: "tube", "classic", or "ocean"
    pub theme: String,
    /// Initial player volume in [0, 1]
    pub volume: f64,
    /// Start playback when the watch screen opens
    pub autoplay: bool,
    /// Arrow-key seek step in seconds
    pub seek_step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "tube".to_string(),
            volume: 0.7,
            autoplay: true,
            seek_step: 5.0,
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("could not determine the config directory")?;
        Ok(base.join("vtube").join("config.toml"))
    }

    /// Load from the default location; a missing file yields defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path (used by tests).
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config at {}", path.display()))?;

        if !(0.0..=1.0).contains(&config.volume) {
            warn!(volume = config.volume, "config volume out of range, clamping");
            config.volume = config.volume.clamp(0.0, 1.0);
        }
        Ok(config)
    }

    /// Save to the default location, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("failed to write config at {}", path.display()))?;
        Ok(())
    }

    /// The ratatui theme this config selects.
    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.theme)
    }
}

/// Result of a config migration.
#[derive(Debug, Clone)]
pub struct MigrateResult {
    /// The migrated file content
    pub content: String,
    /// Keys that were added
    pub added_fields: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add missing fields to an existing config file.
///
/// Existing keys, their values, and any comments are left untouched; only
/// keys absent from the file are appended with their default values. An
/// empty string input produces a full default config.
pub fn migrate_config(existing: &str) -> Result<MigrateResult> {
    let mut doc: DocumentMut = existing
        .parse()
        .context("existing config is not valid TOML")?;

    let defaults_text =
        toml::to_string(&Config::default()).context("failed to serialize default config")?;
    let defaults: DocumentMut = defaults_text
        .parse()
        .context("failed to parse default config")?;

    let mut added_fields = Vec::new();
    for (key, item) in defaults.iter() {
        if !doc.contains_key(key) {
            doc.insert(key, item.clone());
            added_fields.push(key.to_string());
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
    })
}
