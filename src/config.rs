//! Configuration module
//!
//! Optional TOML file at `~/.config/lapwatch/config.toml`. Every field has a
//! default, and a broken file never stops the app from starting.

mod loader;
mod types;

pub use loader::{ConfigResult, config_path, load_config, load_config_from_path, parse_config};
pub use types::{BUILTIN_KEYS, Config, DisplayConfig, KeyBindings};
