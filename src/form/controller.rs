use super::schema::Schema;
use super::value::{FieldValue, FormData, FormRow};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// The form-validation collaborator a wizard talks to.
///
/// Validation errors are owned and surfaced by the collaborator; callers only
/// learn whether the requested fields passed.
#[async_trait]
pub trait FormCollaborator: Send {
    /// Validate the named fields, recording their errors. Returns true when
    /// every named field passed.
    async fn trigger(&mut self, fields: &[String]) -> bool;

    /// Validate the whole form and, if it passes, hand the data to the submit
    /// handler. Returns true when the handler was invoked.
    async fn handle_submit(&mut self) -> bool;
}

/// Receives the validated data of a successful submit.
#[async_trait]
pub trait SubmitHandler: Send {
    async fn on_submit(&mut self, data: FormData);
}

/// Form store: values, schema and per-field errors.
pub struct FormController {
    values: FormData,
    schema: Schema,
    errors: BTreeMap<String, String>,
    submit_handler: Box<dyn SubmitHandler>,
    submit_attempted: bool,
    submit_count: usize,
}

impl FormController {
    pub fn new(schema: Schema, defaults: FormData, submit_handler: Box<dyn SubmitHandler>) -> Self {
        Self {
            values: defaults,
            schema,
            errors: BTreeMap::new(),
            submit_handler,
            submit_attempted: false,
            submit_count: 0,
        }
    }

    pub fn values(&self) -> &FormData {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text of a field as shown in its input box
    pub fn display_value(&self, name: &str) -> String {
        self.values.get(name).map(FieldValue::display).unwrap_or_default()
    }

    /// Set a field value. Once a submit has been attempted, the field is
    /// re-validated on every change so stale messages disappear as the user
    /// fixes them.
    pub fn set_value(&mut self, name: &str, value: FieldValue) {
        self.values.insert(name.to_string(), value);
        if self.submit_attempted {
            self.validate_fields(&[name.to_string()]);
        }
    }

    pub fn rows(&self, name: &str) -> &[FormRow] {
        self.values.get(name).and_then(FieldValue::as_rows).unwrap_or_default()
    }

    pub fn append_row(&mut self, name: &str, row: FormRow) {
        let mut rows = self.rows(name).to_vec();
        rows.push(row);
        self.set_value(name, FieldValue::Rows(rows));
    }

    pub fn remove_row(&mut self, name: &str, index: usize) -> bool {
        let mut rows = self.rows(name).to_vec();
        if index >= rows.len() {
            return false;
        }
        rows.remove(index);
        self.set_value(name, FieldValue::Rows(rows));
        true
    }

    pub fn set_row_value(&mut self, name: &str, index: usize, column: &str, value: FieldValue) -> bool {
        let mut rows = self.rows(name).to_vec();
        let Some(row) = rows.get_mut(index) else {
            return false;
        };
        row.values.insert(column.to_string(), value);
        self.set_value(name, FieldValue::Rows(rows));
        true
    }

    pub fn error(&self, path: &str) -> Option<&str> {
        self.errors.get(path).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn submit_count(&self) -> usize {
        self.submit_count
    }

    pub fn snapshot(&self) -> FormData {
        self.values.clone()
    }

    /// Synchronously validate the named fields, replacing their previous
    /// errors (including errors of their rows).
    pub fn validate_fields(&mut self, fields: &[String]) -> bool {
        let mut passed = true;
        for field in fields {
            let row_prefix = format!("{}.", field);
            self.errors
                .retain(|path, _| path != field && !path.starts_with(&row_prefix));

            let field_errors = self.schema.validate_field(field, self.values.get(field));
            if !field_errors.is_empty() {
                passed = false;
            }
            for error in field_errors {
                self.errors.entry(error.path).or_insert(error.message);
            }
        }
        passed
    }

    fn all_field_names(&self) -> Vec<String> {
        self.schema.field_names().map(str::to_string).collect()
    }
}

#[async_trait]
impl FormCollaborator for FormController {
    async fn trigger(&mut self, fields: &[String]) -> bool {
        let passed = self.validate_fields(fields);
        log::debug!("Form: validated {:?} -> {}", fields, if passed { "ok" } else { "failed" });
        passed
    }

    async fn handle_submit(&mut self) -> bool {
        self.submit_attempted = true;
        self.errors.clear();
        let fields = self.all_field_names();
        if !self.validate_fields(&fields) {
            log::info!("Form: submit blocked by {} validation errors", self.errors.len());
            return false;
        }

        let data = self.snapshot();
        self.submit_handler.on_submit(data).await;
        self.submit_count += 1;
        true
    }
}
