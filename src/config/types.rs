// Configuration type definitions

use serde::Deserialize;

/// Keys handled by the app itself that a binding may not take over
pub const BUILTIN_KEYS: [char; 3] = ['s', 'q', '?'];

/// Stopwatch key bindings section
///
/// Each value must be a single character. Matching ignores ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct KeyBindings {
    #[serde(default = "default_toggle")]
    pub toggle: char,
    #[serde(default = "default_pause")]
    pub pause: char,
    #[serde(default = "default_reset")]
    pub reset: char,
    #[serde(default = "default_lap")]
    pub lap: char,
}

fn default_toggle() -> char {
    ' '
}

fn default_pause() -> char {
    'p'
}

fn default_reset() -> char {
    'r'
}

fn default_lap() -> char {
    'l'
}

impl KeyBindings {
    fn named(&self) -> [(&'static str, char); 4] {
        [
            ("toggle", self.toggle),
            ("pause", self.pause),
            ("reset", self.reset),
            ("lap", self.lap),
        ]
    }

    /// Reject bindings that share a key or shadow one of `BUILTIN_KEYS`.
    pub fn validate(&self) -> Result<(), String> {
        let named = self.named();

        for (i, (name, key)) in named.iter().enumerate() {
            if let Some(builtin) = BUILTIN_KEYS.iter().find(|b| key.eq_ignore_ascii_case(b)) {
                return Err(format!("key `{name}` conflicts with built-in key '{builtin}'"));
            }
            if let Some((other, _)) = named[i + 1..]
                .iter()
                .find(|(_, other_key)| key.eq_ignore_ascii_case(other_key))
            {
                return Err(format!("keys `{name}` and `{other}` are both bound to '{key}'"));
            }
        }

        Ok(())
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            toggle: default_toggle(),
            pause: default_pause(),
            reset: default_reset(),
            lap: default_lap(),
        }
    }
}

/// Display configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_show_stats")]
    pub show_stats: bool,
}

fn default_show_stats() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            show_stats: default_show_stats(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keys: KeyBindings,
    #[serde(default)]
    pub display: DisplayConfig,
}
