// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Toast limits and display durations
//! - `[backend]` - Try-on service URL, request timeout, rewards polling
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `TRYON_STUDIO_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use tryon_studio::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning posted when `settings.toml` cannot be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Toast relay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Maximum number of toasts shown at once; the rest wait in a queue.
    #[serde(
        default = "default_max_visible_toasts",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_visible_toasts: Option<usize>,

    #[serde(
        default = "default_success_toast_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub success_toast_secs: Option<u32>,

    #[serde(
        default = "default_info_toast_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub info_toast_secs: Option<u32>,

    #[serde(
        default = "default_warning_toast_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub warning_toast_secs: Option<u32>,

    #[serde(
        default = "default_error_toast_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub error_toast_secs: Option<u32>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            max_visible_toasts: default_max_visible_toasts(),
            success_toast_secs: default_success_toast_secs(),
            info_toast_secs: default_info_toast_secs(),
            warning_toast_secs: default_warning_toast_secs(),
            error_toast_secs: default_error_toast_secs(),
        }
    }
}

impl NotificationsConfig {
    /// Visible toast limit, clamped to the supported range.
    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible_toasts
            .unwrap_or(DEFAULT_MAX_VISIBLE_TOASTS)
            .clamp(MIN_MAX_VISIBLE_TOASTS, MAX_MAX_VISIBLE_TOASTS)
    }

    #[must_use]
    pub fn success_duration(&self) -> Duration {
        toast_duration(self.success_toast_secs, DEFAULT_SUCCESS_TOAST_SECS)
    }

    #[must_use]
    pub fn info_duration(&self) -> Duration {
        toast_duration(self.info_toast_secs, DEFAULT_INFO_TOAST_SECS)
    }

    #[must_use]
    pub fn warning_duration(&self) -> Duration {
        toast_duration(self.warning_toast_secs, DEFAULT_WARNING_TOAST_SECS)
    }

    #[must_use]
    pub fn error_duration(&self) -> Duration {
        toast_duration(self.error_toast_secs, DEFAULT_ERROR_TOAST_SECS)
    }
}

fn toast_duration(value: Option<u32>, default: u32) -> Duration {
    let secs = value.unwrap_or(default).clamp(MIN_TOAST_SECS, MAX_TOAST_SECS);
    Duration::from_secs(u64::from(secs))
}

/// Try-on service connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Base URL the `/api/...` paths are resolved against.
    #[serde(default = "default_base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u32>,

    /// Rewards dashboard refresh interval in seconds.
    #[serde(
        default = "default_rewards_poll_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub rewards_poll_secs: Option<u32>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            rewards_poll_secs: default_rewards_poll_secs(),
        }
    }
}

impl BackendConfig {
    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        let raw = self
            .base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL);
        raw.trim().trim_end_matches('/').to_string()
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(u64::from(secs))
    }

    #[must_use]
    pub fn rewards_poll_interval(&self) -> Duration {
        let secs = self
            .rewards_poll_secs
            .unwrap_or(DEFAULT_REWARDS_POLL_SECS)
            .clamp(MIN_REWARDS_POLL_SECS, MAX_REWARDS_POLL_SECS);
        Duration::from_secs(u64::from(secs))
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Toast relay settings.
    #[serde(default)]
    pub notifications: NotificationsConfig,

    /// Try-on service settings.
    #[serde(default)]
    pub backend: BackendConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_max_visible_toasts() -> Option<usize> {
    Some(DEFAULT_MAX_VISIBLE_TOASTS)
}

fn default_success_toast_secs() -> Option<u32> {
    Some(DEFAULT_SUCCESS_TOAST_SECS)
}

fn default_info_toast_secs() -> Option<u32> {
    Some(DEFAULT_INFO_TOAST_SECS)
}

fn default_warning_toast_secs() -> Option<u32> {
    Some(DEFAULT_WARNING_TOAST_SECS)
}

fn default_error_toast_secs() -> Option<u32> {
    Some(DEFAULT_ERROR_TOAST_SECS)
}

fn default_base_url() -> Option<String> {
    Some(DEFAULT_BACKEND_URL.to_string())
}

fn default_request_timeout_secs() -> Option<u32> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_rewards_poll_secs() -> Option<u32> {
    Some(DEFAULT_REWARDS_POLL_SECS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
