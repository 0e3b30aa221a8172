use super::field_label::{error_line, field_label};
use super::text_input::{InputEdit, TextInput};
use super::FieldOutcome;
use crate::form::FieldSpec;
use crate::ui::components::common::{create_field_block, create_input_paragraph};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

/// Free text input. Number fields use it too; the spec converts what was
/// typed into the right value kind on every edit.
pub struct TextField {
    spec: FieldSpec,
    input: TextInput,
}

impl TextField {
    pub fn new(spec: FieldSpec, initial: &str) -> Self {
        Self {
            spec,
            input: TextInput::new(initial),
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
            InputEdit::Changed => FieldOutcome::Commit(self.spec.value_from_input(self.input.value())),
            InputEdit::Moved => FieldOutcome::Handled,
            InputEdit::Ignored => FieldOutcome::Ignored,
        }
    }

    pub fn height(&self) -> u16 {
        4
    }

    pub fn render(&self, f: &mut Frame, area: Rect, focused: bool, error: Option<&str>) {
        render_text_box(f, area, &self.spec, &self.input, focused, error, None);
    }
}

/// Bordered input box plus its validation line
pub(super) fn render_text_box(
    f: &mut Frame,
    area: Rect,
    spec: &FieldSpec,
    input: &TextInput,
    focused: bool,
    error: Option<&str>,
    marker: Option<(&str, ratatui::style::Color)>,
) {
    let [box_area, error_area] = Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

    let title = field_label(&spec.label, spec.required, focused, marker);
    let block = create_field_block(title, focused, error.is_some());
    f.render_widget(
        create_input_paragraph(input.value(), input.cursor(), focused, block),
        box_area,
    );
    f.render_widget(Paragraph::new(error_line(error)), error_area);
}
