//! Form input widgets.
//!
//! [`FieldWidget::from_spec`] picks the widget for a [`FieldSpec`] by its
//! [`FieldKind`]. Widgets keep their own edit buffers and report changes as
//! [`FieldOutcome`]s; the owning story writes them into its form.

pub mod combo_box;
pub mod date_field;
pub mod field_label;
pub mod remote_combo_box;
pub mod rows_field;
pub mod text_field;
pub mod text_input;

pub use combo_box::ComboBoxField;
pub use date_field::DateField;
pub use remote_combo_box::RemoteComboBoxField;
pub use rows_field::RowsField;
pub use text_field::TextField;
pub use text_input::{InputEdit, TextInput};

use crate::form::{FieldKind, FieldSpec, FieldValue, FormController, FormRow};
use crate::icons::IconService;
use crate::search::{SearchConfig, TimerHandle};
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldOutcome {
    /// Not a key for this field
    Ignored,
    /// Consumed, nothing to store
    Handled,
    Commit(FieldValue),
    /// Search text changed; arm `handle`, and store `commit` if present
    Typed {
        handle: TimerHandle,
        delay: Duration,
        commit: Option<FieldValue>,
    },
    /// An option was picked (`None` clears the selection)
    Selected {
        handle: TimerHandle,
        delay: Duration,
        label: Option<String>,
    },
    RowAdded(FormRow),
    RowRemoved(usize),
    CellChanged {
        row: usize,
        column: String,
        value: FieldValue,
    },
}

pub enum FieldWidget {
    Text(TextField),
    Date(DateField),
    ComboBox(ComboBoxField),
    RemoteComboBox(RemoteComboBoxField),
    Rows(RowsField),
}

impl FieldWidget {
    /// Build the widget for a field, seeded from the form's current value
    pub fn from_spec(spec: &FieldSpec, form: &FormController, search: &SearchConfig) -> Self {
        let current = form.value(&spec.name).cloned().unwrap_or_else(|| spec.empty_value());
        let shown = current.display();
        match &spec.kind {
            FieldKind::Text | FieldKind::Number => FieldWidget::Text(TextField::new(spec.clone(), &shown)),
            FieldKind::Date => FieldWidget::Date(DateField::new(spec.clone(), current.as_str().unwrap_or_default())),
            FieldKind::ComboBox { options, free_solo } => {
                FieldWidget::ComboBox(ComboBoxField::new(spec.clone(), options.clone(), *free_solo, &shown))
            }
            FieldKind::RemoteComboBox { free_solo } => {
                let config = SearchConfig {
                    free_solo: *free_solo,
                    ..search.clone()
                };
                FieldWidget::RemoteComboBox(RemoteComboBoxField::new(spec.clone(), config, &shown))
            }
            FieldKind::Rows { columns } => {
                FieldWidget::Rows(RowsField::new(spec.clone(), columns.clone(), form.rows(&spec.name)))
            }
        }
    }

    pub fn spec(&self) -> &FieldSpec {
        match self {
            FieldWidget::Text(field) => field.spec(),
            FieldWidget::Date(field) => field.spec(),
            FieldWidget::ComboBox(field) => field.spec(),
            FieldWidget::RemoteComboBox(field) => field.spec(),
            FieldWidget::Rows(field) => field.spec(),
        }
    }

    pub fn name(&self) -> &str {
        &self.spec().name
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FieldOutcome {
        match self {
            FieldWidget::Text(field) => field.handle_key(key),
            FieldWidget::Date(field) => field.handle_key(key),
            FieldWidget::ComboBox(field) => field.handle_key(key),
            FieldWidget::RemoteComboBox(field) => field.handle_key(key),
            FieldWidget::Rows(field) => field.handle_key(key),
        }
    }

    /// Focus left the field; `committed` is the form's display value for it
    pub fn on_blur(&mut self, committed: &str) {
        match self {
            FieldWidget::ComboBox(field) => field.on_blur(committed),
            FieldWidget::RemoteComboBox(field) => field.on_blur(committed),
            _ => {}
        }
    }

    pub fn as_remote_mut(&mut self) -> Option<&mut RemoteComboBoxField> {
        match self {
            FieldWidget::RemoteComboBox(field) => Some(field),
            _ => None,
        }
    }

    pub fn height(&self, focused: bool) -> u16 {
        match self {
            FieldWidget::Text(field) => field.height(),
            FieldWidget::Date(field) => field.height(),
            FieldWidget::ComboBox(field) => field.height(focused),
            FieldWidget::RemoteComboBox(field) => field.height(focused),
            FieldWidget::Rows(field) => field.height(),
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, focused: bool, form: &FormController, icons: &IconService) {
        let error = form.error(self.name());
        match self {
            FieldWidget::Text(field) => field.render(f, area, focused, error),
            FieldWidget::Date(field) => field.render(f, area, focused, error),
            FieldWidget::ComboBox(field) => field.render(f, area, focused, error, icons),
            FieldWidget::RemoteComboBox(field) => field.render(f, area, focused, error, icons),
            FieldWidget::Rows(field) => field.render(f, area, focused, form.errors()),
        }
    }
}

/// Write a field outcome into the form. Returns true when the form changed.
pub fn apply_outcome(form: &mut FormController, name: &str, outcome: &FieldOutcome) -> bool {
    match outcome {
        FieldOutcome::Commit(value) => {
            form.set_value(name, value.clone());
            true
        }
        FieldOutcome::Typed { commit: Some(value), .. } => {
            form.set_value(name, value.clone());
            true
        }
        FieldOutcome::Selected { label, .. } => {
            form.set_value(name, FieldValue::Text(label.clone().unwrap_or_default()));
            true
        }
        FieldOutcome::RowAdded(row) => {
            form.append_row(name, row.clone());
            true
        }
        FieldOutcome::RowRemoved(index) => form.remove_row(name, *index),
        FieldOutcome::CellChanged { row, column, value } => form.set_row_value(name, *row, column, value.clone()),
        FieldOutcome::Ignored | FieldOutcome::Handled | FieldOutcome::Typed { commit: None, .. } => false,
    }
}
