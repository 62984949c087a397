//! Help line rendering
//!
//! This module handles rendering of the help line at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::App;

/// Render the help line (bottom of screen)
///
/// A pending status message (config warning, last lap) replaces the hints.
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let help = match &app.status_message {
        Some(message) => {
            Paragraph::new(format!(" {}", message)).style(Style::default().fg(Color::Yellow))
        }
        None => Paragraph::new(" F1/?: Help | s: Stats | q: Quit")
            .style(Style::default().fg(Color::DarkGray)),
    };

    frame.render_widget(help, area);
}
