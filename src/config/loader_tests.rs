//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_artv_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("artv") && path_str.ends_with("config.toml"),
        "Path should contain 'artv' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("artv_test_config.toml");

    let toml_content = r#"
bar_height = 4.0
submenu_height = 6.5
snap_enabled = false
snap_duration_ms = 150
wheel_step = 2.0
toast_duration_ms = 1000
dark_mode = true
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.bar_height, Some(4.0));
    assert_eq!(config.submenu_height, Some(6.5));
    assert_eq!(config.snap_enabled, Some(false));
    assert_eq!(config.snap_duration_ms, Some(150));
    assert_eq!(config.wheel_step, Some(2.0));
    assert_eq!(config.toast_duration_ms, Some(1000));
    assert_eq!(config.dark_mode, Some(true));
    assert_eq!(config.big_text, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("artv_test_invalid.toml");

    fs::write(&config_path, "this is not valid TOML ][}{")
        .expect("Failed to write invalid test config");

    let result = load_config_file(&config_path);

    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"dark\"");
    assert!(result.is_err(), "Unknown keys should be rejected");
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_uses_defaults_for_none_fields() {
    let config_file = ConfigFile {
        wheel_step: Some(3.0),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.wheel_step, 3.0);
    assert_eq!(resolved.bar_height, defaults.bar_height);
    assert_eq!(resolved.gesture_idle_ms, defaults.gesture_idle_ms);
    assert_eq!(resolved.snap_enabled, defaults.snap_enabled);
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();

    assert_eq!(config.bar_height, 3.0);
    assert_eq!(config.bar_top_margin, 0.0);
    assert_eq!(config.submenu_height, 5.0);
    assert!(config.snap_enabled);
    assert_eq!(config.snap_duration_ms, 200);
    assert_eq!(config.gesture_idle_ms, 120);
    assert_eq!(config.toast_duration_ms, 2750);
    assert!(!config.dark_mode);
}

#[test]
fn scroll_config_carries_geometry_and_snap() {
    let config = ResolvedConfig {
        bar_height: 4.0,
        snap_enabled: false,
        snap_duration_ms: 90,
        ..ResolvedConfig::default()
    };

    let scroll = config.scroll_config();

    assert_eq!(scroll.bar_height, 4.0);
    assert!(!scroll.snap_enabled);
    assert_eq!(scroll.snap_duration, Duration::from_millis(90));
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(artv_dark_mode)]
fn apply_env_overrides_respects_artv_dark_mode() {
    let _guard = EnvGuard::new(DARK_MODE_ENV_VAR);
    env::set_var(DARK_MODE_ENV_VAR, "true");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert!(result.dark_mode, "ARTV_DARK_MODE should override dark_mode");
}

#[test]
#[serial(artv_dark_mode)]
fn apply_env_overrides_can_turn_dark_mode_off() {
    let _guard = EnvGuard::new(DARK_MODE_ENV_VAR);
    env::set_var(DARK_MODE_ENV_VAR, "0");
    let base = ResolvedConfig {
        dark_mode: true,
        ..ResolvedConfig::default()
    };

    let result = apply_env_overrides(base);

    assert!(!result.dark_mode);
}

#[test]
#[serial(artv_dark_mode)]
fn apply_env_overrides_ignores_garbage() {
    let _guard = EnvGuard::new(DARK_MODE_ENV_VAR);
    env::set_var(DARK_MODE_ENV_VAR, "sometimes");

    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone());

    assert_eq!(result, base);
}

#[test]
#[serial(artv_dark_mode)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(DARK_MODE_ENV_VAR);

    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone());

    assert_eq!(result, base, "Config should be unchanged when ARTV_DARK_MODE not set");
}

#[test]
#[serial(artv_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let temp_dir = env::temp_dir();
    let explicit = temp_dir.join("artv_test_explicit.toml");
    let from_env = temp_dir.join("artv_test_env.toml");
    fs::write(&explicit, "wheel_step = 5.0").expect("write explicit config");
    fs::write(&from_env, "wheel_step = 9.0").expect("write env config");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .expect("explicit config loads")
        .expect("explicit config exists");

    assert_eq!(config.wheel_step, Some(5.0));

    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(artv_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let from_env = env::temp_dir().join("artv_test_env_only.toml");
    fs::write(&from_env, "gesture_idle_ms = 300").expect("write env config");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let config = load_config_with_precedence(None)
        .expect("env config loads")
        .expect("env config exists");

    assert_eq!(config.gesture_idle_ms, Some(300));

    fs::remove_file(from_env).ok();
}

#[test]
#[serial(artv_config)]
fn load_config_with_precedence_rejects_empty_env_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    env::set_var(CONFIG_ENV_VAR, "  ");

    let result = load_config_with_precedence(None);

    assert!(matches!(result, Err(ConfigError::InvalidPath(_))));
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None, None), base);
}

#[test]
#[serial(artv_dark_mode)]
fn precedence_chain_full_defaults_to_cli() {
    let _guard = EnvGuard::new(DARK_MODE_ENV_VAR);
    let config_file = ConfigFile {
        dark_mode: Some(true),
        snap_enabled: Some(true),
        bar_height: Some(2.0),
        ..ConfigFile::default()
    };

    // File says dark, env says light, CLI says dark again and disables snapping.
    let merged = merge_config(Some(config_file));
    env::set_var(DARK_MODE_ENV_VAR, "false");
    let with_env = apply_env_overrides(merged);
    assert!(!with_env.dark_mode);

    let final_config = apply_cli_overrides(with_env, Some(true), Some(false));

    assert!(final_config.dark_mode);
    assert!(!final_config.snap_enabled);
    assert_eq!(final_config.bar_height, 2.0);
}
