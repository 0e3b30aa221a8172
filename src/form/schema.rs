//! Rule-based validation schema.
//!
//! Messages follow the wording users of schema validators expect
//! (`"email is a required field"`), keyed by the field path. Paths of row
//! fields use dotted indices: `friends.0.name`.

use super::value::{FieldValue, NumberValue};
use crate::constants::MESSAGE_INVALID_DATE;
use crate::utils::datetime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Required,
    /// Like `Required`, with a custom message
    RequiredWith(String),
    /// Minimum number of characters of a text value
    MinLength(usize),
    /// Value must be a normalized, real calendar date
    ValidDate,
    /// Minimum number of rows of a repeated group
    MinItems { min: usize, message: String },
    /// Rules applied to every row of a repeated group
    Each(Vec<FieldRules>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    pub name: String,
    pub rules: Vec<Rule>,
}

impl FieldRules {
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    fn new(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldRules>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, rules: Vec<Rule>) -> Self {
        self.fields.push(FieldRules::new(name, rules));
        self
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn rules_for(&self, name: &str) -> Option<&[Rule]> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.rules.as_slice())
    }

    /// Validate one top-level field. Fields without rules always pass.
    pub fn validate_field(&self, name: &str, value: Option<&FieldValue>) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if let Some(rules) = self.rules_for(name) {
            check(name, value, rules, &mut errors);
        }
        errors
    }
}

fn check(path: &str, value: Option<&FieldValue>, rules: &[Rule], errors: &mut Vec<FieldError>) {
    // Sentinel numbers are reported no matter which rules are declared
    if let Some(FieldValue::Number(NumberValue::Invalid)) = value {
        errors.push(FieldError::new(path, format!("{} must be a number", path)));
        return;
    }

    for rule in rules {
        match rule {
            Rule::Required => {
                if value.map_or(true, FieldValue::is_blank) {
                    errors.push(FieldError::new(path, format!("{} is a required field", path)));
                    return;
                }
            }
            Rule::RequiredWith(message) => {
                if value.map_or(true, FieldValue::is_blank) {
                    errors.push(FieldError::new(path, message.clone()));
                    return;
                }
            }
            Rule::MinLength(min) => {
                let len = value.and_then(FieldValue::as_str).map_or(0, |s| s.chars().count());
                if len < *min {
                    errors.push(FieldError::new(
                        path,
                        format!("{} must be at least {} characters", path, min),
                    ));
                    return;
                }
            }
            Rule::ValidDate => {
                let valid = value
                    .and_then(FieldValue::as_str)
                    .is_some_and(datetime::is_valid_date_value);
                if !valid {
                    errors.push(FieldError::new(path, MESSAGE_INVALID_DATE));
                    return;
                }
            }
            Rule::MinItems { min, message } => {
                let count = value.and_then(FieldValue::as_rows).map_or(0, <[_]>::len);
                if count < *min {
                    errors.push(FieldError::new(path, message.clone()));
                }
            }
            Rule::Each(columns) => {
                let rows = value.and_then(FieldValue::as_rows).unwrap_or_default();
                for (index, row) in rows.iter().enumerate() {
                    for column in columns {
                        let row_path = format!("{}.{}.{}", path, index, column.name);
                        check(&row_path, row.get(&column.name), &column.rules, errors);
                    }
                }
            }
        }
    }
}
