//! Client-side activity form validation
//!
//! Runs before any network call. Every failing field is reported, not just
//! the first, so hosts can mark the whole form at once.

use chrono::Utc;
use ecotrack_domain::constants::units_for;
use ecotrack_domain::{ActivityDetails, Category, NewActivity, Quantity};

/// Raw form state as the host collects it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityForm {
    pub activity_name: String,
    pub activity_type: Option<Category>,
    pub description: String,
    /// Raw text from the quantity field
    pub quantity_value: String,
    pub quantity_unit: String,
    pub details: ActivityDetails,
}

/// Form field a validation error is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ActivityName,
    ActivityType,
    Description,
    QuantityValue,
    QuantityUnit,
    TransportMode,
    EnergySource,
    FoodType,
    WasteType,
}

/// One failed validation rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Collected validation failures; never leaves the entry controller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: Field, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The message for a specific field, if it failed
    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a form and build the submission draft
///
/// The timestamp is stamped at validation time, matching the entry dialog's
/// "logged at" display.
///
/// # Errors
/// Returns every failed rule when the form is incomplete or inconsistent.
pub fn validate(form: &ActivityForm) -> Result<NewActivity, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if form.activity_name.trim().is_empty() {
        errors.push(Field::ActivityName, "Activity name is required");
    }
    if form.activity_type.is_none() {
        errors.push(Field::ActivityType, "Activity type is required");
    }
    if form.description.trim().is_empty() {
        errors.push(Field::Description, "Description is required");
    }

    let value = form.quantity_value.trim().parse::<f64>().ok();
    match value {
        Some(v) if v > 0.0 && v.is_finite() => {}
        _ => errors.push(Field::QuantityValue, "Quantity value must be greater than 0"),
    }

    let unit = form.quantity_unit.trim();
    if unit.is_empty() {
        errors.push(Field::QuantityUnit, "Quantity unit is required");
    } else if let Some(category) = form.activity_type {
        if !units_for(category).contains(&unit) {
            errors.push(Field::QuantityUnit, "Quantity unit is not valid for this activity type");
        }
    }

    if let Some(category) = form.activity_type {
        match category {
            Category::Transport if form.details.transport_mode.is_none() => errors.push(
                Field::TransportMode,
                "Transport mode is required for transport activities",
            ),
            Category::Energy if form.details.energy_source.is_none() => errors.push(
                Field::EnergySource,
                "Energy source is required for energy activities",
            ),
            Category::Food if form.details.food_type.is_none() => {
                errors.push(Field::FoodType, "Food type is required for food activities");
            }
            Category::Waste if form.details.waste_type.is_none() => {
                errors.push(Field::WasteType, "Waste type is required for waste activities");
            }
            _ => {}
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // Both verified present above
    let category = form.activity_type.ok_or_else(ValidationErrors::default)?;
    let value = value.ok_or_else(ValidationErrors::default)?;

    Ok(NewActivity {
        activity_name: form.activity_name.trim().to_string(),
        activity_type: category,
        description: form.description.trim().to_string(),
        quantity: Quantity::new(value, unit),
        activity_details: form.details.clone(),
        date: Utc::now(),
    })
}
