//! Data models for the weather reports
//!
//! - Location: fixed coordinate table and report orderings
//! - Tide: tide extrema grouped by date, sun phase and daylight
//! - Forecast: text forecast periods

pub mod forecast;
pub mod location;
pub mod tide;

// Re-export all public types for convenient access
pub use forecast::{FORECAST_PERIODS, ForecastPeriod};
pub use location::Location;
pub use tide::{Daylight, SunPhase, TideDay, TideEvent, TideKind, TideReading};
