//! Vertical navigation bar with icons.

use crate::constants::NAV_BAR_COMPACT_WIDTH;
use crate::icons::IconService;
use crate::navigation::NavItem;
use crate::ui::core::component::contains;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Narrower than [`NAV_BAR_COMPACT_WIDTH`] only the icons are shown.
pub struct NavBarComponent {
    items: Vec<NavItem<Action>>,
    list_state: ListState,
    icons: IconService,
    area: Rect,
}

impl NavBarComponent {
    pub fn new(items: Vec<NavItem<Action>>, icons: IconService) -> Self {
        let mut list_state = ListState::default();
        if !items.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            items,
            list_state,
            icons,
            area: Rect::default(),
        }
    }

    pub fn items(&self) -> &[NavItem<Action>] {
        &self.items
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn is_compact(width: u16) -> bool {
        width < NAV_BAR_COMPACT_WIDTH
    }

    fn activate_selected(&self) -> Action {
        self.list_state
            .selected()
            .and_then(|index| self.items.get(index))
            .map(NavItem::activate)
            .unwrap_or(Action::None)
    }

    fn move_selection(&mut self, forward: bool) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.list_state.select(Some(next));
    }
}

impl Component for NavBarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(true);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(false);
                Action::None
            }
            KeyCode::Enter => self.activate_selected(),
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
                    if clicked_index >= self.items.len() {
                        return Action::None;
                    }
                    self.list_state.select(Some(clicked_index));
                    self.activate_selected()
                } else {
                    Action::None
                }
            }
            MouseEventKind::ScrollUp => {
                self.move_selection(false);
                Action::None
            }
            MouseEventKind::ScrollDown => {
                self.move_selection(true);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;
        let compact = Self::is_compact(rect.width);

        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| {
                let icon = item.icon.map(|i| self.icons.nav(i)).unwrap_or(" ");
                if compact {
                    ListItem::new(format!(" {}", icon))
                } else {
                    ListItem::new(format!(" {}  {}", icon, item.label))
                }
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .style(Style::default().fg(Color::White))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
