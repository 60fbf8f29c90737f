//! Authenticated API client and façade
//!
//! [`ApiClient`] is the transport adapter: it injects the bearer
//! credential, applies the fixed timeout, intercepts 401 responses and
//! normalizes errors. [`ActivityApiClient`] and [`InsightsApiClient`]
//! implement the core port traits on top of it, one named operation per
//! endpoint.

pub mod activities;
pub mod client;
pub mod insights;
pub mod query;

pub use activities::ActivityApiClient;
pub use client::ApiClient;
pub use insights::InsightsApiClient;
