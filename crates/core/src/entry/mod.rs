//! Activity-entry workflow
//!
//! Owns the activity form lifecycle: validation, debounced preview, submit
//! and the activity-saved notification to host consumers.

pub mod controller;
pub mod validation;

pub use controller::{ActivityEntryController, EntryError};
pub use validation::{validate, ActivityForm, Field, FieldError, ValidationErrors};
