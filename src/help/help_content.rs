use crate::config::KeyBindings;

pub struct HelpSection {
    pub title: &'static str,
    pub entries: Vec<(String, &'static str)>,
}

pub const HELP_FOOTER: &str = "q/Esc/?: close";

/// Display name for a bound key
pub fn key_label(key: char) -> String {
    match key {
        ' ' => "Space".to_string(),
        c => c.to_string(),
    }
}

/// Help content for the active key bindings
pub fn help_sections(keys: &KeyBindings) -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "STOPWATCH",
            entries: vec![
                (key_label(keys.toggle), "Start / stop"),
                (key_label(keys.pause), "Pause"),
                (key_label(keys.reset), "Reset time and laps"),
                (key_label(keys.lap), "Record lap (while running)"),
            ],
        },
        HelpSection {
            title: "VIEW",
            entries: vec![
                ("s".to_string(), "Toggle lap statistics"),
                ("F1 or ?".to_string(), "Toggle this help"),
            ],
        },
        HelpSection {
            title: "GLOBAL",
            entries: vec![
                ("q or Esc".to_string(), "Quit"),
                ("Ctrl+C".to_string(), "Quit"),
            ],
        },
    ]
}

#[cfg(test)]
#[path = "help_content_tests.rs"]
mod help_content_tests;
