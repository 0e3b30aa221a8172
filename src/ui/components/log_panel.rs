use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::components::common::{centered_rect, create_story_block};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Color,
    widgets::{Clear, List, ListItem},
    Frame,
};

/// Overlay listing the in-memory log, newest first
#[derive(Default)]
pub struct LogPanel {
    visible: bool,
    scroll: usize,
}

impl LogPanel {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        self.scroll = 0;
    }

    /// Scroll keys. Returns false for keys the panel does not use.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.scroll += 1,
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Home => self.scroll = 0,
            _ => return false,
        }
        true
    }

    pub fn render(&self, f: &mut Frame, rect: Rect, logger: &Logger) {
        let area = centered_rect(80, 80, rect);
        f.render_widget(Clear, area);

        let logs = logger.get_logs();
        let start = self.scroll.min(logs.len().saturating_sub(1));
        let items: Vec<ListItem> = logs.into_iter().skip(start).map(ListItem::new).collect();

        f.render_widget(
            List::new(items).block(create_story_block(DIALOG_TITLE_LOGS, Color::Cyan)),
            area,
        );
    }
}
