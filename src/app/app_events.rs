use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;

impl App {
    /// Wait for input until the next tick is due, then fire the tick if it is
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick_timeout())? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_event(key);
                }
                _ => {}
            }
        }

        self.poll_tick();
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.quit();
            }
            return;
        }

        // Help popup swallows everything except its close keys
        if self.help.visible {
            match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') | KeyCode::Char('?') => {
                    self.help.close();
                }
                _ => {}
            }
            return;
        }

        if let KeyCode::Char(c) = key.code
            && self.handle_stopwatch_key(c)
        {
            return;
        }

        match key.code {
            KeyCode::Char('s') => self.show_stats = !self.show_stats,
            KeyCode::Char('?') | KeyCode::F(1) => self.help.toggle(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => {}
        }
    }

    /// Dispatch a configured stopwatch key. Returns true if `c` is bound.
    fn handle_stopwatch_key(&mut self, c: char) -> bool {
        let keys = self.keys;

        if c.eq_ignore_ascii_case(&keys.toggle) {
            self.engine.toggle_start_stop();
            self.status_message = None;
        } else if c.eq_ignore_ascii_case(&keys.pause) {
            self.engine.pause();
        } else if c.eq_ignore_ascii_case(&keys.reset) {
            self.engine.reset();
            self.status_message = None;
        } else if c.eq_ignore_ascii_case(&keys.lap) {
            if let Some(lap) = self.engine.record_lap() {
                self.status_message =
                    Some(format!("Lap {} recorded at {}", lap.number(), lap.formatted_time()));
            }
        } else {
            return false;
        }

        true
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
