//! Horizontal breadcrumb trail.

use crate::icons::IconService;
use crate::navigation::NavItem;
use crate::ui::core::component::contains;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders `items` joined by the separator. Choosing an item (Enter on the
/// highlighted one, or a click) dispatches its `on_activate` action verbatim.
pub struct BreadcrumbComponent {
    items: Vec<NavItem<Action>>,
    separator: String,
    highlighted: usize,
    icons: IconService,
    /// Column ranges of the rendered items, for mouse hits
    hit_boxes: Vec<(u16, u16, usize)>,
    area: Rect,
}

impl BreadcrumbComponent {
    pub fn new(separator: impl Into<String>, icons: IconService) -> Self {
        Self {
            items: Vec::new(),
            separator: separator.into(),
            highlighted: 0,
            icons,
            hit_boxes: Vec::new(),
            area: Rect::default(),
        }
    }

    pub fn set_items(&mut self, items: Vec<NavItem<Action>>) {
        self.highlighted = items.len().saturating_sub(1);
        self.items = items;
    }

    pub fn items(&self) -> &[NavItem<Action>] {
        &self.items
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    /// Plain text of the trail, as rendered
    pub fn trail_text(&self) -> String {
        self.items
            .iter()
            .map(|item| match item.icon {
                Some(icon) => format!("{} {}", self.icons.nav(icon), item.label),
                None => item.label.clone(),
            })
            .collect::<Vec<_>>()
            .join(&format!(" {} ", self.separator))
    }

    fn activate(&self, index: usize) -> Action {
        self.items.get(index).map(NavItem::activate).unwrap_or(Action::None)
    }
}

impl Component for BreadcrumbComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Left if !self.items.is_empty() => {
                self.highlighted = self.highlighted.saturating_sub(1);
                Action::Status(format!("Breadcrumb: {}", self.items[self.highlighted].label))
            }
            KeyCode::Right if !self.items.is_empty() => {
                self.highlighted = (self.highlighted + 1).min(self.items.len() - 1);
                Action::Status(format!("Breadcrumb: {}", self.items[self.highlighted].label))
            }
            KeyCode::Enter => self.activate(self.highlighted),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
            || !contains(self.area, mouse.column, mouse.row)
        {
            return Action::None;
        }
        let hit = self
            .hit_boxes
            .iter()
            .find(|(start, end, _)| mouse.column >= *start && mouse.column < *end)
            .map(|(_, _, index)| *index);
        match hit {
            Some(index) => {
                self.highlighted = index;
                self.activate(index)
            }
            None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;
        self.hit_boxes.clear();

        let last = self.items.len().saturating_sub(1);
        let mut spans = Vec::new();
        let mut x = rect.x;
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                let sep = format!(" {} ", self.separator);
                x += sep.chars().count() as u16;
                spans.push(Span::styled(sep, Style::default().fg(Color::DarkGray)));
            }

            let text = match item.icon {
                Some(icon) => format!("{} {}", self.icons.nav(icon), item.label),
                None => item.label.clone(),
            };
            let mut style = if index == last {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)
            };
            if index == self.highlighted {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let width = text.chars().count() as u16;
            self.hit_boxes.push((x, x + width, index));
            x += width;
            spans.push(Span::styled(text, style));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}
