use crate::icons::IconService;
use crate::ui::core::component::contains;
use crate::ui::core::{Action, Component};
use crate::wizard::WizardState;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Step header of a wizard. Clicking a step asks to jump to it.
pub struct StepperComponent {
    labels: Vec<String>,
    state: WizardState,
    icons: IconService,
    hit_boxes: Vec<(u16, u16, usize)>,
    area: Rect,
}

impl StepperComponent {
    pub fn new(labels: Vec<String>, state: WizardState, icons: IconService) -> Self {
        Self {
            labels,
            state,
            icons,
            hit_boxes: Vec::new(),
            area: Rect::default(),
        }
    }

    pub fn set_state(&mut self, state: WizardState) {
        self.state = state;
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }
}

impl Component for StepperComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
            || !contains(self.area, mouse.column, mouse.row)
        {
            return Action::None;
        }
        self.hit_boxes
            .iter()
            .find(|(start, end, _)| mouse.column >= *start && mouse.column < *end)
            .map(|(_, _, index)| Action::WizardGoTo(*index))
            .unwrap_or(Action::None)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;
        self.hit_boxes.clear();

        let mut spans = Vec::new();
        let mut x = rect.x;
        for (index, label) in self.labels.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
                x += 4;
            }
            let text = format!("{} {}. {}", self.icons.step(index, self.state.active_index), index + 1, label);
            let style = if index == self.state.active_index {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else if index < self.state.active_index {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };
            let width = text.chars().count() as u16;
            self.hit_boxes.push((x, x + width, index));
            x += width;
            spans.push(Span::styled(text, style));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}
