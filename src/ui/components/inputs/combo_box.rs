use super::field_label::{error_line, field_label};
use super::text_input::{InputEdit, TextInput};
use super::FieldOutcome;
use crate::constants::COMBO_BOX_VISIBLE_OPTIONS;
use crate::form::{FieldSpec, FieldValue};
use crate::icons::IconService;
use crate::ui::components::common::{create_field_block, create_input_paragraph};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Text input filtering a fixed option list.
///
/// Picking an option commits it. With `free_solo` whatever is typed is
/// committed as well; otherwise typed text only filters.
pub struct ComboBoxField {
    spec: FieldSpec,
    options: Vec<String>,
    free_solo: bool,
    input: TextInput,
    highlighted: usize,
}

impl ComboBoxField {
    pub fn new(spec: FieldSpec, options: Vec<String>, free_solo: bool, initial: &str) -> Self {
        Self {
            spec,
            options,
            free_solo,
            input: TextInput::new(initial),
            highlighted: 0,
        }
    }

    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    pub fn text(&self) -> &str {
        self.input.value()
    }

    /// Options matching the typed text, case-insensitively. An exact match
    /// (the committed value) shows every option again.
    pub fn visible_options(&self) -> Vec<&str> {
        let query = self.input.value().to_lowercase();
        if query.is_empty() || self.options.iter().any(|o| o.to_lowercase() == query) {
            return self.options.iter().map(String::as_str).collect();
        }
        self.options
            .iter()
            .filter(|o| o.to_lowercase().contains(&query))
            .map(String::as_str)
            .collect()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FieldOutcome {
        let visible = self.visible_options().len();
        match key.code {
            KeyCode::Down => {
                if visible > 0 {
                    self.highlighted = (self.highlighted + 1) % visible;
                }
                return FieldOutcome::Handled;
            }
            KeyCode::Up => {
                if visible > 0 {
                    self.highlighted = (self.highlighted + visible - 1) % visible;
                }
                return FieldOutcome::Handled;
            }
            KeyCode::Enter => {
                let picked = self.visible_options().get(self.highlighted).map(|o| o.to_string());
                return match picked {
                    Some(option) => {
                        self.input.set_value(option.clone());
                        self.highlighted = 0;
                        FieldOutcome::Commit(FieldValue::Text(option))
                    }
                    None => FieldOutcome::Handled,
                };
            }
            _ => {}
        }

        match self.input.handle_key(key) {
            InputEdit::Changed => {
                self.highlighted = 0;
                if self.free_solo {
                    FieldOutcome::Commit(FieldValue::Text(self.input.value().to_string()))
                } else {
                    FieldOutcome::Handled
                }
            }
            InputEdit::Moved => FieldOutcome::Handled,
            InputEdit::Ignored => FieldOutcome::Ignored,
        }
    }

    /// Without free-form input, leaving the field restores the committed value
    pub fn on_blur(&mut self, committed: &str) {
        if !self.free_solo && self.input.value() != committed {
            self.input.set_value(committed);
        }
        self.highlighted = 0;
    }

    pub fn height(&self, focused: bool) -> u16 {
        if focused {
            4 + self.visible_options().len().min(COMBO_BOX_VISIBLE_OPTIONS) as u16
        } else {
            4
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, focused: bool, error: Option<&str>, icons: &IconService) {
        let [box_area, error_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let title = field_label(&self.spec.label, self.spec.required, focused, Some(("▾", Color::DarkGray)));
        let block = create_field_block(title, focused, error.is_some());
        f.render_widget(
            create_input_paragraph(self.input.value(), self.input.cursor(), focused, block),
            box_area,
        );
        f.render_widget(Paragraph::new(error_line(error)), error_area);

        if focused {
            let lines = option_lines(&self.visible_options(), self.highlighted, icons);
            f.render_widget(Paragraph::new(lines), list_area);
        }
    }
}

/// Dropdown rows with the highlighted option marked
pub(super) fn option_lines<'a>(options: &[&str], highlighted: usize, icons: &IconService) -> Vec<Line<'a>> {
    options
        .iter()
        .take(COMBO_BOX_VISIBLE_OPTIONS)
        .enumerate()
        .map(|(index, option)| {
            if index == highlighted {
                Line::from(vec![
                    Span::styled(format!(" {} ", icons.selected()), Style::default().fg(Color::Cyan)),
                    Span::styled(
                        option.to_string(),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(format!("   {}", option))
            }
        })
        .collect()
}
