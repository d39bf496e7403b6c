//! Configuration file loading with precedence handling.

use crate::scroll::ScrollConfig;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "ARTV_CONFIG";

/// Environment variable forcing dark mode on or off.
pub const DARK_MODE_ENV_VAR: &str = "ARTV_DARK_MODE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path is empty or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/artv/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Bottom bar height in rows.
    #[serde(default)]
    pub bar_height: Option<f32>,

    /// Top margin of the bottom bar in rows.
    #[serde(default)]
    pub bar_top_margin: Option<f32>,

    /// Submenu height in rows.
    #[serde(default)]
    pub submenu_height: Option<f32>,

    /// Snap the bottom bar to an edge when a gesture ends.
    #[serde(default)]
    pub snap_enabled: Option<bool>,

    /// Snap animation duration.
    #[serde(default)]
    pub snap_duration_ms: Option<u64>,

    /// Rows per wheel notch or scroll key.
    #[serde(default)]
    pub wheel_step: Option<f32>,

    /// Quiet time that ends a gesture.
    #[serde(default)]
    pub gesture_idle_ms: Option<u64>,

    /// How long a notification stays visible.
    #[serde(default)]
    pub toast_duration_ms: Option<u64>,

    /// Start in dark mode.
    #[serde(default)]
    pub dark_mode: Option<bool>,

    /// Start with big text.
    #[serde(default)]
    pub big_text: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Path to the saved UI state file.
    #[serde(default)]
    pub state_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Bottom bar height in rows.
    pub bar_height: f32,
    /// Rows between submenu and bar.
    pub bar_top_margin: f32,
    /// Submenu height in rows.
    pub submenu_height: f32,
    /// Snap the bar shown or hidden when a gesture ends.
    pub snap_enabled: bool,
    /// Snap animation length.
    pub snap_duration_ms: u64,
    /// Rows per wheel notch or scroll key.
    pub wheel_step: f32,
    /// Quiet time that ends a gesture.
    pub gesture_idle_ms: u64,
    /// How long a notification stays up.
    pub toast_duration_ms: u64,
    /// Start with the dark palette.
    pub dark_mode: bool,
    /// Start with big text.
    pub big_text: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Path to the saved UI state file.
    pub state_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            bar_height: 3.0,
            bar_top_margin: 0.0,
            submenu_height: 5.0,
            snap_enabled: true,
            snap_duration_ms: 200,
            wheel_step: 1.0,
            gesture_idle_ms: 120,
            toast_duration_ms: 2750,
            dark_mode: false,
            big_text: false,
            log_file_path: default_log_path(),
            state_file_path: default_state_path(),
        }
    }
}

impl ResolvedConfig {
    /// Geometry and snapping settings for the scroll coordinator.
    pub fn scroll_config(&self) -> ScrollConfig {
        ScrollConfig {
            bar_height: self.bar_height,
            bar_top_margin: self.bar_top_margin,
            submenu_height: self.submenu_height,
            snap_enabled: self.snap_enabled,
            snap_duration: Duration::from_millis(self.snap_duration_ms),
        }
    }

    /// `gesture_idle_ms` as a duration.
    pub fn gesture_idle(&self) -> Duration {
        Duration::from_millis(self.gesture_idle_ms)
    }

    /// `toast_duration_ms` as a duration.
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

fn state_dir_file(name: &str) -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("artv").join(name),
        None => PathBuf::from(name),
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/artv/artv.log` on Unix-like systems, or the
/// current directory if no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    state_dir_file("artv.log")
}

/// Resolve default saved UI state path (`~/.local/state/artv/ui_state.json`).
pub fn default_state_path() -> PathBuf {
    state_dir_file("ui_state.json")
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/artv/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("artv").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `ARTV_CONFIG` environment variable
/// 3. Default path `~/.config/artv/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error if `ARTV_CONFIG` is set but empty, or if a config file
/// exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if env_path.trim().is_empty() {
            return Err(ConfigError::InvalidPath(format!(
                "{CONFIG_ENV_VAR} is set but empty"
            )));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        bar_height: config.bar_height.unwrap_or(defaults.bar_height),
        bar_top_margin: config.bar_top_margin.unwrap_or(defaults.bar_top_margin),
        submenu_height: config.submenu_height.unwrap_or(defaults.submenu_height),
        snap_enabled: config.snap_enabled.unwrap_or(defaults.snap_enabled),
        snap_duration_ms: config.snap_duration_ms.unwrap_or(defaults.snap_duration_ms),
        wheel_step: config.wheel_step.unwrap_or(defaults.wheel_step),
        gesture_idle_ms: config.gesture_idle_ms.unwrap_or(defaults.gesture_idle_ms),
        toast_duration_ms: config
            .toast_duration_ms
            .unwrap_or(defaults.toast_duration_ms),
        dark_mode: config.dark_mode.unwrap_or(defaults.dark_mode),
        big_text: config.big_text.unwrap_or(defaults.big_text),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        state_file_path: config.state_file_path.unwrap_or(defaults.state_file_path),
    }
}

/// Parse a boolean environment value.
///
/// Accepts `1/0`, `true/false`, `yes/no`, `on/off` in any case.
fn parse_env_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `ARTV_DARK_MODE`: force dark mode on or off (unparseable values are ignored)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(value) = std::env::var(DARK_MODE_ENV_VAR) {
        match parse_env_bool(&value) {
            Some(dark) => config.dark_mode = dark,
            None => tracing::warn!(value = %value, "Ignoring unparseable {DARK_MODE_ENV_VAR}"),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Arguments
///
/// * `config` - Base resolved config (already merged with defaults, file, and env vars)
/// * `dark_override` - `Some(true)` from `--dark`
/// * `snap_override` - `Some(false)` from `--no-snap`
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    dark_override: Option<bool>,
    snap_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(dark) = dark_override {
        config.dark_mode = dark;
    }

    if let Some(snap) = snap_override {
        config.snap_enabled = snap;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

#[cfg(test)]
mod path_tests {
    use super::*;

    #[test]
    fn default_log_path_ends_with_artv_log() {
        let path = default_log_path();
        assert!(
            path.to_string_lossy().ends_with("artv.log"),
            "Default log path should end with 'artv.log', got: {:?}",
            path
        );
    }

    #[test]
    fn default_state_path_sits_next_to_log() {
        let state = default_state_path();
        let log = default_log_path();
        assert_eq!(state.parent(), log.parent());
        assert!(state.to_string_lossy().ends_with("ui_state.json"));
    }

    #[test]
    fn config_file_state_path_overrides_default() {
        let custom_path = PathBuf::from("/custom/path/ui.json");
        let config_file = ConfigFile {
            state_file_path: Some(custom_path.clone()),
            ..ConfigFile::default()
        };

        let resolved = merge_config(Some(config_file));
        assert_eq!(resolved.state_file_path, custom_path);
        assert_eq!(resolved.log_file_path, default_log_path());
    }
}
