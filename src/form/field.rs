//! Declarative description of the inputs a form renders.
//!
//! A [`FieldSpec`] is what a wizard step carries instead of a pre-built UI
//! fragment: the [`FieldKind`] tag selects which input widget renders it.

use super::value::{FieldValue, NumberValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    /// Fixed option list; `free_solo` also accepts text outside the list
    ComboBox { options: Vec<String>, free_solo: bool },
    /// Options come from a remote fetch driven by a debounced search
    RemoteComboBox { free_solo: bool },
    /// Repeated group of sub-fields (e.g. a list of friends)
    Rows { columns: Vec<FieldSpec> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Empty value matching the field kind
    pub fn empty_value(&self) -> FieldValue {
        match &self.kind {
            FieldKind::Number => FieldValue::Number(NumberValue::Valid(0)),
            FieldKind::Date => FieldValue::Date(String::new()),
            FieldKind::Rows { .. } => FieldValue::Rows(Vec::new()),
            _ => FieldValue::Text(String::new()),
        }
    }

    /// Convert raw typed text into a value of this field's kind
    pub fn value_from_input(&self, input: &str) -> FieldValue {
        match &self.kind {
            FieldKind::Number => FieldValue::Number(NumberValue::parse(input)),
            FieldKind::Date => FieldValue::date_from_input(input),
            _ => FieldValue::Text(input.to_string()),
        }
    }
}
