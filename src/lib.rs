//! Core library for the Lucid weather app.
//!
//! This crate defines:
//! - Credential configuration loaded at startup
//! - The weather API client (city and coordinate queries)
//! - The location-permission state machine gating coordinate fetches
//! - The saved-search history store with incremental change notification
//! - Unit-system tagging and pure unit conversions
//!
//! It carries no UI: the presentation layer calls in on user actions and
//! renders whatever snapshots, records, and failures come back.

pub mod client;
pub mod config;
pub mod error;
pub mod history;
pub mod location;
pub mod model;
pub mod units;

pub use client::{WeatherApi, WeatherApiClient};
pub use config::Config;
pub use error::{ApiError, LocationError, StorageError, WeatherError};
pub use history::{HistoryChange, HistoryRecord, HistoryStore};
pub use location::{
    Authorization, LocationProvider, LocationService, PermissionState, WeatherObserver,
};
pub use model::WeatherSnapshot;
pub use units::Units;
