//! Preview computation and classification
//!
//! Translates in-progress form data into a preliminary impact figure and a
//! preliminary tip, without persisting anything. The classifier is a pure
//! function; the coordinator owns the debounce window and the in-flight
//! request.

pub mod classifier;
pub mod coordinator;
pub mod suggestions;

pub use classifier::classify_preview;
pub use coordinator::{PreviewCoordinator, PreviewInput, PreviewObserver, PreviewState};
