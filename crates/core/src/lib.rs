//! # EcoTrack Core
//!
//! Business logic of the EcoTrack client, written against port traits so
//! infrastructure (HTTP, sockets, keychains) can be substituted in tests.
//!
//! This crate contains:
//! - Port traits for the activity/insights API, credential storage and
//!   session events
//! - The preview classifier and the debounced preview coordinator
//! - The activity-entry controller and its form validation

pub mod entry;
pub mod ports;
pub mod preview;

pub use entry::{ActivityEntryController, ActivityForm, EntryError, ValidationErrors};
pub use ports::{
    ActivityApi, ActivitySavedHandler, CredentialStore, InsightsApi, SessionEvents,
};
pub use preview::{PreviewCoordinator, PreviewInput, PreviewObserver, PreviewState};
