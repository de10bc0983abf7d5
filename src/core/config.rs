use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::core::catalog::{all_platforms, find_platform_by_id, Platform};
use crate::core::conversion::SourceType;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_format")]
    pub default_format: String,
    #[serde(default = "default_color")]
    pub color: String,
    /// Metric source used for byte conversion when none is given
    #[serde(default = "default_source_type")]
    pub source_type: String,
}

fn default_format() -> String {
    "text".to_string()
}
fn default_color() -> String {
    "auto".to_string()
}
fn default_source_type() -> String {
    "mixed".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            color: default_color(),
            source_type: default_source_type(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    pub id: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

/// User configuration. Platforms not listed are included in comparisons.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub platforms: Vec<PlatformConfig>,
}

impl AppConfig {
    /// Get the config file path, respecting XDG_CONFIG_HOME
    pub fn config_path() -> PathBuf {
        let config_dir = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            });
        config_dir.join("o11ycost").join("config.toml")
    }

    /// Load config from the default path, falling back to defaults if not found
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config: AppConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Serialize and write this config to the config file path.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Build a config listing every catalog platform, enabling only `enabled_ids`.
    pub fn with_enabled(enabled_ids: &[String]) -> Self {
        let platforms = all_platforms()
            .map(|p| PlatformConfig {
                id: p.id.to_string(),
                enabled: enabled_ids.iter().any(|id| id == p.id),
            })
            .collect();
        Self {
            settings: Settings::default(),
            platforms,
        }
    }

    /// Update which platforms are enabled, preserving settings. Catalog
    /// platforms missing from the config are added.
    pub fn update_platforms(&mut self, enabled_ids: &[String]) {
        for platform in &mut self.platforms {
            platform.enabled = enabled_ids
                .iter()
                .any(|id| id.eq_ignore_ascii_case(&platform.id));
        }

        let existing: Vec<String> = self.platforms.iter().map(|p| p.id.clone()).collect();
        for p in all_platforms() {
            if !existing.iter().any(|id| id.eq_ignore_ascii_case(p.id)) {
                self.platforms.push(PlatformConfig {
                    id: p.id.to_string(),
                    enabled: enabled_ids.iter().any(|id| id.eq_ignore_ascii_case(p.id)),
                });
            }
        }
    }

    /// Set the enabled flag of one platform, adding an entry when missing.
    pub fn set_enabled(&mut self, id: &str, enabled: bool) {
        match self
            .platforms
            .iter_mut()
            .find(|p| p.id.eq_ignore_ascii_case(id))
        {
            Some(existing) => existing.enabled = enabled,
            None => self.platforms.push(PlatformConfig {
                id: id.to_string(),
                enabled,
            }),
        }
    }

    /// Ids match case-insensitively, like catalog lookups.
    pub fn is_enabled(&self, platform: &Platform) -> bool {
        self.platforms
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(platform.id))
            .map(|c| c.enabled)
            .unwrap_or(true)
    }

    pub fn source_type(&self) -> SourceType {
        SourceType::from_id(&self.settings.source_type)
    }

    /// Validate the config
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if !["text", "json"].contains(&self.settings.default_format.as_str()) {
            issues.push(format!(
                "Invalid default_format: '{}' (must be 'text' or 'json')",
                self.settings.default_format
            ));
        }
        if !["auto", "always", "never"].contains(&self.settings.color.as_str()) {
            issues.push(format!(
                "Invalid color: '{}' (must be 'auto', 'always', or 'never')",
                self.settings.color
            ));
        }
        if SourceType::parse(&self.settings.source_type).is_none() {
            issues.push(format!(
                "Invalid source_type: '{}' (must be opentelemetry|prometheus|statsd|vendor_agent|mixed)",
                self.settings.source_type
            ));
        }
        for p in &self.platforms {
            if find_platform_by_id(&p.id).is_err() {
                issues.push(format!("Unknown platform ID: '{}'", p.id));
            }
        }
        issues
    }
}
