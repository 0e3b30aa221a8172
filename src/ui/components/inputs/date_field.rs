use super::text_field::render_text_box;
use super::text_input::{InputEdit, TextInput};
use super::FieldOutcome;
use crate::form::{FieldSpec, FieldValue};
use crate::utils::datetime;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, style::Color, Frame};

/// `YYYY-MM-DD` input. Every edit commits the normalized value: an ISO
/// timestamp, the invalid-date sentinel, or empty when cleared.
pub struct DateField {
    spec: FieldSpec,
    input: TextInput,
}

impl DateField {
    pub fn new(spec: FieldSpec, stored: &str) -> Self {
        let shown = if stored.is_empty() {
            String::new()
        } else {
            datetime::display_date_value(stored)
        };
        Self {
            spec,
            input: TextInput::new(shown),
        }
    }

    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    pub fn text(&self) -> &str {
        self.input.value()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FieldOutcome {
        match self.input.handle_key(key) {
            InputEdit::Changed => FieldOutcome::Commit(FieldValue::date_from_input(self.input.value())),
            InputEdit::Moved => FieldOutcome::Handled,
            InputEdit::Ignored => FieldOutcome::Ignored,
        }
    }

    pub fn height(&self) -> u16 {
        4
    }

    pub fn render(&self, f: &mut Frame, area: Rect, focused: bool, error: Option<&str>) {
        let hint = if self.input.value().is_empty() {
            Some((datetime::INPUT_DATE_FORMAT_HINT, Color::DarkGray))
        } else {
            None
        };
        render_text_box(f, area, &self.spec, &self.input, focused, error, hint);
    }
}
