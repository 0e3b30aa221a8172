//! Side-by-side panels that can be toggled on and off.

use crate::constants::MESSAGE_NO_PANELS;
use crate::icons::{IconService, NavIcon};
use crate::panels::PanelSelection;
use crate::ui::core::component::contains;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub value: String,
    pub icon: NavIcon,
    pub body: String,
}

impl Panel {
    pub fn new(value: impl Into<String>, icon: NavIcon, body: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            icon,
            body: body.into(),
        }
    }
}

pub struct SplitLayoutComponent {
    panels: Vec<Panel>,
    selection: PanelSelection,
    cursor: usize,
    icons: IconService,
    /// Toggle button column ranges, for mouse hits
    toggle_boxes: Vec<(u16, u16, usize)>,
    toggle_row: Rect,
}

impl SplitLayoutComponent {
    pub fn new(
        panels: Vec<Panel>,
        initial: Option<&str>,
        minimum: usize,
        maximum: Option<usize>,
        icons: IconService,
    ) -> Self {
        let ids = panels.iter().map(|p| p.value.clone()).collect();
        Self {
            selection: PanelSelection::new(ids, initial, minimum, maximum),
            panels,
            cursor: 0,
            icons,
            toggle_boxes: Vec::new(),
            toggle_row: Rect::default(),
        }
    }

    pub fn selection(&self) -> &PanelSelection {
        &self.selection
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    fn toggle_action(&self, index: usize) -> Action {
        self.panels
            .get(index)
            .map(|p| Action::TogglePanel(p.value.clone()))
            .unwrap_or(Action::None)
    }

    fn render_toggles(&mut self, f: &mut Frame, rect: Rect) {
        self.toggle_row = rect;
        self.toggle_boxes.clear();

        let mut spans = Vec::new();
        let mut x = rect.x;
        for (index, panel) in self.panels.iter().enumerate() {
            let active = self.selection.is_active(&panel.value);
            let text = format!(" {} {} ", self.icons.nav(panel.icon), panel.value);
            let mut style = if active {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            if index == self.cursor {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            let span = Span::styled(text, style);
            // Display columns; emoji glyphs take two
            let width = span.width() as u16;
            self.toggle_boxes.push((x, x + width, index));
            x += width + 1;
            spans.push(span);
            spans.push(Span::raw(" "));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}

impl Component for SplitLayoutComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let len = self.panels.len();
        if len == 0 {
            return Action::None;
        }
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor = (self.cursor + len - 1) % len;
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cursor = (self.cursor + 1) % len;
                Action::None
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_action(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < len {
                    self.cursor = index;
                    self.toggle_action(index)
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
            || !contains(self.toggle_row, mouse.column, mouse.row)
        {
            return Action::None;
        }
        let hit = self
            .toggle_boxes
            .iter()
            .find(|(start, end, _)| mouse.column >= *start && mouse.column < *end)
            .map(|(_, _, index)| *index);
        match hit {
            Some(index) => {
                self.cursor = index;
                self.toggle_action(index)
            }
            None => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::TogglePanel(id) => {
                if self.selection.toggle(&id) {
                    Action::Status(format!("Panels: {}", self.selection.active().join(", ")))
                } else {
                    Action::Status(format!(
                        "Panels: toggling '{}' rejected ({}..={} active)",
                        id,
                        self.selection.minimum(),
                        self.selection.maximum()
                    ))
                }
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [toggle_area, body_area] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(rect);
        self.render_toggles(f, toggle_area);

        let active: Vec<&Panel> = self
            .panels
            .iter()
            .filter(|p| self.selection.is_active(&p.value))
            .collect();

        if active.is_empty() {
            let placeholder = Paragraph::new(MESSAGE_NO_PANELS)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::DarkGray)),
                );
            f.render_widget(placeholder, body_area);
            return;
        }

        let columns = Layout::horizontal(active.iter().map(|_| Constraint::Fill(1))).split(body_area);
        for (panel, area) in active.iter().zip(columns.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(" {} {} ", self.icons.nav(panel.icon), panel.value))
                .border_style(Style::default().fg(Color::Cyan));
            f.render_widget(
                Paragraph::new(panel.body.as_str()).wrap(Wrap { trim: true }).block(block),
                *area,
            );
        }
    }
}
