//! Application configuration.
//!
//! Configuration lives in a TOML file under the platform config directory
//! and covers file system paths and input normalization settings.

use crate::platform::Platform;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Directory for user presets (defaults to `<config_dir>/presets`)
    pub user_presets: Option<PathBuf>,
    /// Directory with extra mouse profile files layered over the bundled ones
    pub profiles: Option<PathBuf>,
}

/// Platform selection for input normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlatformChoice {
    /// Detect the platform at startup
    #[default]
    Auto,
    /// Force Windows button/modifier handling
    Windows,
    /// Force macOS button/modifier handling
    MacOs,
    /// Force Linux button/modifier handling
    Linux,
}

/// Input normalization settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Which platform's raw-code mapping to use
    #[serde(default)]
    pub platform: PlatformChoice,
    /// Swap Ctrl/Meta on macOS so Command behaves like Ctrl elsewhere
    #[serde(default = "default_swap_ctrl_meta")]
    pub swap_ctrl_meta: bool,
}

/// Default value for `swap_ctrl_meta` (true)
const fn default_swap_ctrl_meta() -> bool {
    true
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            platform: PlatformChoice::Auto,
            swap_ctrl_meta: true,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/MouseBind/config.toml`
/// - macOS: `~/Library/Application Support/MouseBind/config.toml`
/// - Windows: `%APPDATA%\MouseBind\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// File system paths
    pub paths: PathConfig,
    /// Input normalization settings
    pub input: InputConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path().map(|path| path.exists()).unwrap_or(false)
    }

    /// Gets path of the platform-specific config directory.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("MouseBind");
        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).with_context(|| {
            format!("Failed to read config file: {}", config_path.display())
        })?;

        toml::from_str(&content).with_context(|| {
            format!("Failed to parse config file: {}", config_path.display())
        })
    }

    /// Saves configuration to the config file using an atomic write.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).with_context(|| {
            format!("Failed to create config directory: {}", config_dir.display())
        })?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;
        fs::rename(&temp_path, &config_path).with_context(|| {
            format!("Failed to rename temp config file to: {}", config_path.display())
        })?;

        Ok(())
    }

    /// Gets the user preset directory, falling back to the default under
    /// the config directory.
    pub fn user_presets_dir(&self) -> Result<PathBuf> {
        match &self.paths.user_presets {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::config_dir()?.join("presets")),
        }
    }

    /// Resolves the platform to use for input normalization.
    #[must_use]
    pub const fn resolved_platform(&self) -> Platform {
        match self.input.platform {
            PlatformChoice::Auto => Platform::current(),
            PlatformChoice::Windows => Platform::Windows,
            PlatformChoice::MacOs => Platform::MacOs,
            PlatformChoice::Linux => Platform::Linux,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::new();
        assert!(config.paths.user_presets.is_none());
        assert_eq!(config.input.platform, PlatformChoice::Auto);
        assert!(config.input.swap_ctrl_meta);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = Config {
            paths: PathConfig {
                user_presets: Some(PathBuf::from("/tmp/presets")),
                profiles: None,
            },
            input: InputConfig {
                platform: PlatformChoice::MacOs,
                swap_ctrl_meta: false,
            },
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [input]
            platform = "windows"
            "#,
        )
        .unwrap();
        assert_eq!(config.input.platform, PlatformChoice::Windows);
        assert!(config.input.swap_ctrl_meta);
        assert!(config.paths.user_presets.is_none());
    }

    #[test]
    fn test_resolved_platform_override() {
        let mut config = Config::new();
        config.input.platform = PlatformChoice::Linux;
        assert_eq!(config.resolved_platform(), Platform::Linux);
        config.input.platform = PlatformChoice::Windows;
        assert_eq!(config.resolved_platform(), Platform::Windows);
    }

    #[test]
    fn test_user_presets_dir_override() {
        let mut config = Config::new();
        config.paths.user_presets = Some(PathBuf::from("/tmp/my-presets"));
        assert_eq!(
            config.user_presets_dir().unwrap(),
            PathBuf::from("/tmp/my-presets")
        );
    }
}
