//! Activity-entry controller
//!
//! Drives the activity form: fetches the goal snapshot on open, feeds the
//! preview coordinator on input changes, validates and submits on confirm,
//! and fans the persisted activity (with any server tip) out to registered
//! handlers. A submit cannot be cancelled; only pre-submit input changes
//! abort preview work.

use std::sync::Arc;
use std::time::Duration;

use ecotrack_domain::{ApiError, CreatedActivity, GoalStatus};
use parking_lot::Mutex;
use thiserror::Error;
use tracing::{info, warn};

use crate::ports::{ActivityApi, ActivitySavedHandler, InsightsApi};
use crate::preview::{PreviewCoordinator, PreviewInput, PreviewState};

use super::validation::{validate, ActivityForm, ValidationErrors};

/// Errors surfaced by a submit
#[derive(Debug, Error)]
pub enum EntryError {
    /// The form is incomplete or inconsistent; nothing was sent
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// The create call failed; the form is left intact
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Controller owning the activity form lifecycle
pub struct ActivityEntryController {
    activities: Arc<dyn ActivityApi>,
    insights: Arc<dyn InsightsApi>,
    preview: PreviewCoordinator,
    form: Mutex<ActivityForm>,
    goal: Mutex<GoalStatus>,
    handlers: Mutex<Vec<Arc<dyn ActivitySavedHandler>>>,
}

impl ActivityEntryController {
    pub fn new(activities: Arc<dyn ActivityApi>, insights: Arc<dyn InsightsApi>) -> Self {
        let preview = PreviewCoordinator::new(Arc::clone(&activities), Arc::clone(&insights));
        Self::with_preview(activities, insights, preview)
    }

    /// Construct with a custom debounce window (tests use a short one)
    pub fn with_debounce(
        activities: Arc<dyn ActivityApi>,
        insights: Arc<dyn InsightsApi>,
        debounce: Duration,
    ) -> Self {
        let preview = PreviewCoordinator::with_debounce(
            Arc::clone(&activities),
            Arc::clone(&insights),
            debounce,
        );
        Self::with_preview(activities, insights, preview)
    }

    fn with_preview(
        activities: Arc<dyn ActivityApi>,
        insights: Arc<dyn InsightsApi>,
        preview: PreviewCoordinator,
    ) -> Self {
        Self {
            activities,
            insights,
            preview,
            form: Mutex::new(ActivityForm::default()),
            goal: Mutex::new(GoalStatus::default()),
            handlers: Mutex::new(Vec::new()),
        }
    }

    /// Register an activity-saved handler; invoked in registration order
    pub fn on_activity_saved(&self, handler: Arc<dyn ActivitySavedHandler>) {
        self.handlers.lock().push(handler);
    }

    /// Open the form: reset state and fetch the goal snapshot for display
    ///
    /// A failed goal fetch downgrades to "no active goal"; the preview
    /// coordinator re-fetches its own snapshot per request anyway.
    pub async fn open(&self) {
        *self.form.lock() = ActivityForm::default();
        self.preview.reset();

        let goal = match self.insights.emission_goal_progress().await {
            Ok(status) => status,
            Err(e) => {
                warn!(error = %e, "failed to fetch goal status on open");
                GoalStatus::default()
            }
        };
        *self.goal.lock() = goal;
    }

    /// Close the form, discarding state and pending preview work
    pub fn close(&self) {
        *self.form.lock() = ActivityForm::default();
        self.preview.reset();
    }

    /// Apply a form change and reschedule the preview
    pub fn form_changed(&self, form: ActivityForm) {
        let input = PreviewInput {
            activity_type: form.activity_type,
            quantity_value: form.quantity_value.clone(),
            quantity_unit: form.quantity_unit.clone(),
            details: form.details.clone(),
        };
        *self.form.lock() = form;
        self.preview.input_changed(input);
    }

    /// Current form state
    pub fn form(&self) -> ActivityForm {
        self.form.lock().clone()
    }

    /// Goal snapshot fetched on open, for host display
    pub fn goal_status(&self) -> GoalStatus {
        self.goal.lock().clone()
    }

    /// Current preview output
    pub fn preview_state(&self) -> PreviewState {
        self.preview.state()
    }

    /// The coordinator, for observer registration
    pub fn preview(&self) -> &PreviewCoordinator {
        &self.preview
    }

    /// Validate and submit the form
    ///
    /// On success the form is reset, the preview cleared and every
    /// registered handler notified with the persisted activity and the
    /// server tip. On failure the form is left intact for correction.
    ///
    /// # Errors
    /// `EntryError::Validation` before any network call, `EntryError::Api`
    /// when the create call fails.
    pub async fn submit(&self) -> Result<CreatedActivity, EntryError> {
        let form = self.form.lock().clone();
        let draft = validate(&form).map_err(EntryError::Validation)?;

        let created = self.activities.create_activity(&draft).await?;
        info!(
            activity = %created.activity.activity_name,
            impact = created.activity.calculated_carbon_footprint,
            "activity saved"
        );

        let handlers = self.handlers.lock().clone();
        for handler in handlers {
            handler.activity_saved(&created.activity, created.real_time_tip.as_ref());
        }

        *self.form.lock() = ActivityForm::default();
        self.preview.reset();

        Ok(created)
    }
}
