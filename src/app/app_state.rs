use std::time::Duration;

use crate::config::{Config, KeyBindings};
use crate::help::HelpPopupState;
use crate::stats::LapStats;
use crate::timer::{IntervalScheduler, PauseKind, TimerEngine, TimerStatus};

/// How long to wait for input when no tick is scheduled
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    pub engine: TimerEngine<IntervalScheduler>,
    pub keys: KeyBindings,
    pub show_stats: bool,
    pub help: HelpPopupState,
    /// One-line message shown in place of the help hints
    pub status_message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            engine: TimerEngine::new(IntervalScheduler::new()),
            keys: config.keys,
            show_stats: config.display.show_stats,
            help: HelpPopupState::new(),
            status_message: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Poll timeout for the host loop: time until the next tick, or the idle
    /// interval while stopped
    pub fn tick_timeout(&self) -> Duration {
        self.engine
            .scheduler()
            .time_until_due()
            .unwrap_or(IDLE_POLL_INTERVAL)
    }

    /// Tick the engine if the scheduler has a tick due
    pub fn poll_tick(&mut self) {
        if self.engine.scheduler_mut().fire_if_due() {
            self.engine.tick();
        }
    }

    /// Start/stop button label
    pub fn start_stop_label(&self) -> &'static str {
        match (self.engine.status(), self.engine.pause_kind()) {
            (TimerStatus::Running, _) => "Stop",
            (_, Some(PauseKind::Paused)) => "Resume",
            _ => "Start",
        }
    }

    /// Pause and lap only make sense while running
    pub fn running_controls_enabled(&self) -> bool {
        self.engine.is_running()
    }

    pub fn lap_stats(&self) -> LapStats {
        LapStats::compute(self.engine.laps())
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
