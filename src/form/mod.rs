//! Form state, validation and the collaborator seam used by the wizard.
//!
//! - [`value`] - Field values and the serializable [`FormData`] snapshot
//! - [`field`] - Declarative field descriptions selecting an input widget
//! - [`schema`] - Validation rules and messages
//! - [`controller`] - The [`FormController`] store and the collaborator traits

pub mod controller;
pub mod field;
pub mod schema;
pub mod value;

pub use controller::{FormCollaborator, FormController, SubmitHandler};
pub use field::{FieldKind, FieldSpec};
pub use schema::{FieldError, FieldRules, Rule, Schema};
pub use value::{FieldValue, FormData, FormRow, NumberValue};
