//! Core library for the `wearcast` CLI.
//!
//! This crate defines:
//! - The weather snapshot model and the rules that turn it into alerts and
//!   outfit suggestions
//! - Configuration & credentials handling
//! - Abstraction over the weather provider that supplies snapshots
//!
//! The rule engine (`alert`, `outfit`, `advice`) is pure and does no I/O; it is
//! used by `wearcast-cli`, but can also be reused by other binaries or services.

pub mod advice;
pub mod alert;
pub mod condition;
pub mod config;
pub mod error;
pub mod model;
pub mod ordered;
pub mod outfit;
pub mod provider;

pub use advice::{Advice, advise};
pub use alert::{Alert, AlertKind, derive_alerts};
pub use config::Config;
pub use error::FetchError;
pub use model::{CityMatch, Observation, WeatherReport, WeatherSnapshot};
pub use outfit::recommend_outfit;
pub use provider::{WeatherProvider, provider_from_config, report_for};
