//! Story list shown on the left of the gallery.
//!
//! Shift+Up/Down move between stories from anywhere, so they work even while
//! a text field has focus. Mouse clicks and the wheel select directly.

use crate::ui::core::component::contains;
use crate::ui::core::{actions::Action, Component, StoryKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct SidebarComponent {
    pub selection: StoryKind,
    list_state: ListState,
    area: Rect,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new(StoryKind::default())
    }
}

impl SidebarComponent {
    pub fn new(selection: StoryKind) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(selection.index()));
        Self {
            selection,
            list_state,
            area: Rect::default(),
        }
    }

    fn step(&self, forward: bool) -> StoryKind {
        let stories = StoryKind::all();
        let current = self.selection.index();
        let next = if forward {
            (current + 1) % stories.len()
        } else {
            (current + stories.len() - 1) % stories.len()
        };
        stories[next]
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !key.modifiers.contains(KeyModifiers::SHIFT) {
            return Action::None;
        }
        match key.code {
            KeyCode::Down => Action::SelectStory(self.step(true)),
            KeyCode::Up => Action::SelectStory(self.step(false)),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let area = self.area;
        if !contains(area, mouse.column, mouse.row) {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if mouse.row > area.y && mouse.row < area.y + area.height - 1 {
                    let clicked_index = self.list_state.offset() + (mouse.row - area.y - 1) as usize;
                    // Guard against clicks beyond the available stories
                    match StoryKind::all().get(clicked_index) {
                        Some(story) => Action::SelectStory(*story),
                        None => Action::None,
                    }
                } else {
                    Action::None
                }
            }
            MouseEventKind::ScrollUp => Action::SelectStory(self.step(false)),
            MouseEventKind::ScrollDown => Action::SelectStory(self.step(true)),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::SelectStory(story) = &action {
            self.selection = *story;
            self.list_state.select(Some(story.index()));
        }
        // Pass the action through to the gallery for further processing
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;

        let items: Vec<ListItem> = StoryKind::all()
            .iter()
            .map(|story| ListItem::new(format!(" {}", story.title())))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title("Stories")
                    .title_style(Style::default().fg(Color::White))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .style(Style::default().fg(Color::White))
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .highlight_symbol("▸");

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
