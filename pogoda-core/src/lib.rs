//! Core library for the `pogoda` CLI.
//!
//! This crate defines:
//! - The popular-city suggestion list and its substring filter
//! - The search flow state machine and its session driver
//! - The OpenWeather provider behind the [`WeatherProvider`] trait
//! - Configuration & credentials handling
//!
//! It is used by `pogoda-cli`, but can also be reused by other binaries or services.

pub mod cities;
pub mod config;
pub mod model;
pub mod provider;
pub mod search;

pub use config::Config;
pub use model::{ConditionKind, CurrentConditions};
pub use provider::openweather::OpenWeatherProvider;
pub use provider::{ProviderError, WeatherProvider};
pub use search::{LOOKUP_FAILED_MESSAGE, SearchEvent, SearchSession, SearchState};
