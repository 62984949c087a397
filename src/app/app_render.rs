use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::help::key_label;
use crate::timer::Lap;

const NO_VALUE: &str = "--:--:--";

/// One lap list row, e.g. "Lap 3   00:12:34"
pub fn lap_row(lap: &Lap) -> String {
    format!("Lap {:<4}{}", lap.number(), lap.formatted_time())
}

/// Lap rows, most recent first
pub fn lap_rows(laps: &[Lap]) -> Vec<String> {
    laps.iter().rev().map(lap_row).collect()
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(4), // Time display
            Constraint::Length(1), // Controls
            Constraint::Min(3),    // Laps and stats
            Constraint::Length(1), // Help line
        ])
        .split(frame.area());

        self.render_time(frame, layout[0]);
        self.render_controls(frame, layout[1]);
        self.render_body(frame, layout[2]);

        crate::help::help_line_render::render_line(self, frame, layout[3]);

        if self.help.visible {
            crate::help::help_popup_render::render_popup(self, frame);
        }
    }

    fn render_time(&self, frame: &mut Frame, area: Rect) {
        let running = self.engine.is_running();
        let (border_color, time_color) = if running {
            (Color::Cyan, Color::Green)
        } else {
            (Color::DarkGray, Color::White)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" lapwatch ")
            .border_style(Style::default().fg(border_color));

        let lines = vec![
            Line::from(Span::styled(
                self.engine.formatted_time(),
                Style::default().fg(time_color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.engine.status().to_string(),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let content = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(content, area);
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect) {
        let enabled = Style::default().fg(Color::Yellow);
        let disabled = Style::default().fg(Color::DarkGray);
        let running_style = if self.running_controls_enabled() {
            enabled
        } else {
            disabled
        };

        let control = |key: char, label: &str, style: Style| {
            Span::styled(format!(" [{}] {} ", key_label(key), label), style)
        };

        let line = Line::from(vec![
            control(self.keys.toggle, self.start_stop_label(), enabled),
            control(self.keys.pause, "Pause", running_style),
            control(self.keys.reset, "Reset", enabled),
            control(self.keys.lap, "Lap", running_style),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        let show_laps = !self.engine.laps().is_empty();

        match (show_laps, self.show_stats) {
            (true, true) => {
                let columns =
                    Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                        .split(area);
                self.render_laps(frame, columns[0]);
                self.render_stats(frame, columns[1]);
            }
            (true, false) => self.render_laps(frame, area),
            (false, true) => self.render_stats(frame, area),
            (false, false) => {}
        }
    }

    fn render_laps(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Laps ")
            .border_style(Style::default().fg(Color::DarkGray));

        let lines: Vec<Line> = lap_rows(self.engine.laps())
            .into_iter()
            .map(Line::from)
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Stats ")
            .border_style(Style::default().fg(Color::DarkGray));

        let stats = self.lap_stats();
        let label_style = Style::default().fg(Color::Cyan);
        let row = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<9}", label), label_style),
                Span::raw(value),
            ])
        };

        let value_or_placeholder =
            |value: Option<String>| value.unwrap_or_else(|| NO_VALUE.to_string());

        let lines = vec![
            row("Fastest", value_or_placeholder(stats.fastest.map(|r| r.to_string()))),
            row("Slowest", value_or_placeholder(stats.slowest.map(|r| r.to_string()))),
            row("Average", value_or_placeholder(stats.average.map(|a| a.to_string()))),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
