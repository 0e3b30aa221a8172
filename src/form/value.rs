//! Field values held by a form.

use crate::utils::datetime;
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Snapshot of every field in a form, keyed by field name.
pub type FormData = BTreeMap<String, FieldValue>;

/// A numeric field value. Unparsable input is kept as the `Invalid` sentinel
/// instead of being rejected at the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NumberValue {
    Valid(i64),
    Invalid,
}

impl NumberValue {
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(n) => Self::Valid(n),
            Err(_) => Self::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// One row of a repeated group of fields (e.g. one friend in a friends list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormRow {
    #[serde(skip)]
    pub id: Uuid,
    #[serde(flatten)]
    pub values: BTreeMap<String, FieldValue>,
}

impl FormRow {
    pub fn new(values: impl IntoIterator<Item = (String, FieldValue)>) -> Self {
        Self {
            id: Uuid::new_v4(),
            values: values.into_iter().collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(NumberValue),
    /// Normalized date string, see [`crate::utils::datetime`]
    Date(String),
    Rows(Vec<FormRow>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Build a date value from what the user typed
    pub fn date_from_input(input: &str) -> Self {
        Self::Date(datetime::normalize_date_input(input))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Date(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_rows(&self) -> Option<&[FormRow]> {
        match self {
            Self::Rows(rows) => Some(rows),
            _ => None,
        }
    }

    /// True when the value counts as "not filled in" for `required` rules.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) | Self::Date(s) => s.trim().is_empty(),
            Self::Number(_) => false,
            Self::Rows(rows) => rows.is_empty(),
        }
    }

    /// Text shown in an input box for this value
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(NumberValue::Valid(n)) => n.to_string(),
            Self::Number(NumberValue::Invalid) => String::new(),
            Self::Date(s) => datetime::display_date_value(s),
            Self::Rows(rows) => format!("{} rows", rows.len()),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}
