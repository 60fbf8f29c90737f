//! Debounced preview coordination
//!
//! Watches the activity form's impact-relevant fields. Any change schedules
//! a preview attempt after the debounce window; a further change cancels
//! and reschedules. At most one preview request is in flight, and a result
//! whose inputs were superseded is discarded by generation comparison.
//!
//! The goal snapshot is re-fetched on every preview request rather than
//! cached, so a goal edited elsewhere is reflected by the next preview.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use ecotrack_domain::constants::PREVIEW_DEBOUNCE_MS;
use ecotrack_domain::{
    ActivityDetails, Category, GoalStatus, PreviewRequest, PreviewResponse, Quantity, Tip,
};
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::ports::{ActivityApi, InsightsApi};

use super::classifier::classify_preview;

/// The form fields the coordinator watches
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewInput {
    pub activity_type: Option<Category>,
    /// Raw text from the quantity field; must parse to a finite number
    pub quantity_value: String,
    pub quantity_unit: String,
    pub details: ActivityDetails,
}

impl PreviewInput {
    /// The preview request for this input, when every required field holds
    fn ready(&self) -> Option<PreviewRequest> {
        let activity_type = self.activity_type?;
        let value: f64 = self.quantity_value.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        let unit = self.quantity_unit.trim();
        if unit.is_empty() {
            return None;
        }
        Some(PreviewRequest {
            activity_type,
            quantity: Quantity::new(value, unit),
            activity_details: self.details.clone(),
        })
    }
}

/// Output snapshot of the coordinator
#[derive(Debug, Clone, Default)]
pub struct PreviewState {
    pub preview: Option<PreviewResponse>,
    pub tip: Option<Tip>,
    /// A preview request is past the debounce window and in flight
    pub calculating: bool,
}

/// Observer notified whenever the preview state changes
pub trait PreviewObserver: Send + Sync {
    fn preview_updated(&self, state: &PreviewState);
}

struct Inner {
    activities: Arc<dyn ActivityApi>,
    insights: Arc<dyn InsightsApi>,
    debounce: Duration,
    generation: AtomicU64,
    state: Mutex<PreviewState>,
    observers: Mutex<Vec<Arc<dyn PreviewObserver>>>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Inner {
    fn publish(&self, state: PreviewState) {
        *self.state.lock() = state.clone();
        let observers = self.observers.lock().clone();
        for observer in observers {
            observer.preview_updated(&state);
        }
    }
}

/// Debounced preview driver
pub struct PreviewCoordinator {
    inner: Arc<Inner>,
}

impl PreviewCoordinator {
    pub fn new(activities: Arc<dyn ActivityApi>, insights: Arc<dyn InsightsApi>) -> Self {
        Self::with_debounce(activities, insights, Duration::from_millis(PREVIEW_DEBOUNCE_MS))
    }

    /// Construct with a custom debounce window (tests use a short one)
    pub fn with_debounce(
        activities: Arc<dyn ActivityApi>,
        insights: Arc<dyn InsightsApi>,
        debounce: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                activities,
                insights,
                debounce,
                generation: AtomicU64::new(0),
                state: Mutex::new(PreviewState::default()),
                observers: Mutex::new(Vec::new()),
                pending: Mutex::new(None),
            }),
        }
    }

    /// Register a state observer
    pub fn add_observer(&self, observer: Arc<dyn PreviewObserver>) {
        self.inner.observers.lock().push(observer);
    }

    /// Current output snapshot
    pub fn state(&self) -> PreviewState {
        self.inner.state.lock().clone()
    }

    /// Feed a changed input; cancels any pending attempt and reschedules
    pub fn input_changed(&self, input: PreviewInput) {
        let inner = Arc::clone(&self.inner);
        let generation = inner.generation.fetch_add(1, Ordering::SeqCst) + 1;

        // Replace, never merge: the previous window or in-flight request
        // dies with its task.
        if let Some(previous) = self.inner.pending.lock().take() {
            previous.abort();
        }

        let Some(request) = input.ready() else {
            debug!("preview input incomplete, clearing preview and tip");
            inner.publish(PreviewState::default());
            return;
        };

        let handle = tokio::spawn(run_preview(inner, generation, request));
        *self.inner.pending.lock() = Some(handle);
    }

    /// Drop any pending attempt and clear the output
    pub fn reset(&self) {
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(previous) = self.inner.pending.lock().take() {
            previous.abort();
        }
        self.inner.publish(PreviewState::default());
    }
}

async fn run_preview(inner: Arc<Inner>, generation: u64, request: PreviewRequest) {
    tokio::time::sleep(inner.debounce).await;
    if inner.generation.load(Ordering::SeqCst) != generation {
        return;
    }

    let snapshot = inner.state.lock().clone();
    inner.publish(PreviewState { calculating: true, ..snapshot });

    // Fresh goal snapshot per request; a fetch failure downgrades to
    // no-goal classification.
    let goal = match inner.insights.emission_goal_progress().await {
        Ok(status) => status,
        Err(e) => {
            warn!(error = %e, "failed to fetch goal status for preview");
            GoalStatus::default()
        }
    };

    let result = inner.activities.preview_impact(&request).await;
    if inner.generation.load(Ordering::SeqCst) != generation {
        debug!("discarding stale preview result");
        return;
    }

    match result {
        Ok(preview) => {
            let tip = classify_preview(
                preview.calculated_carbon_footprint,
                &goal,
                request.activity_type,
                &request.activity_details,
            );
            debug!(
                carbon = preview.calculated_carbon_footprint,
                has_tip = tip.is_some(),
                "preview computed"
            );
            inner.publish(PreviewState { preview: Some(preview), tip, calculating: false });
        }
        Err(e) => {
            // Preview errors are swallowed; the host just loses the preview.
            warn!(error = %e, "preview request failed");
            inner.publish(PreviewState::default());
        }
    }
}
