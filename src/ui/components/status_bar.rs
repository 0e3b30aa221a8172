//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

const HINTS: &str = "Shift+↑/↓: stories • G / Ctrl+L: logs • i: icons • q / Ctrl+C: quit";

/// One-line footer: the latest status message, or the global shortcuts
#[derive(Default)]
pub struct StatusBar {
    message: Option<String>,
    busy: usize,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Number of background tasks in flight
    pub fn set_busy(&mut self, busy: usize) {
        self.busy = busy;
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let (text, color) = match &self.message {
            Some(message) if message.starts_with('❌') => (message.clone(), Color::Red),
            Some(message) => (message.clone(), Color::Yellow),
            None => (HINTS.to_string(), Color::Gray),
        };
        let text = if self.busy > 0 {
            format!("{} • ⟳ {} pending", text, self.busy)
        } else {
            text
        };

        let status_bar = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));

        f.render_widget(status_bar, area);
    }
}
