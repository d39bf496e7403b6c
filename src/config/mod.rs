//! Configuration module.
//!
//! Settings resolve through defaults, the TOML file, environment variables
//! and finally CLI flags. Key bindings are fixed defaults.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    ConfigError, ConfigFile, ResolvedConfig,
};
