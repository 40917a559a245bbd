//! `akweather` - weather, tide and marine reports for the Kenai Peninsula
//!
//! This library fetches Weather Underground and NWS data for a fixed set of
//! Alaskan coastal locations and renders daily, current and marine text
//! reports.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod weather;

// Re-export core types for public API
pub use config::ReportConfig;
pub use error::WeatherReportError;
pub use models::{ForecastPeriod, Location, SunPhase, TideDay, TideEvent};
pub use reports::{ReportKind, WeatherReportBuilder};
pub use weather::{Fetcher, WeatherClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Printed ahead of every report
pub const USAGE_NOTICE: &str = "IMPORTANT:  DO NOT USE THIS SCRIPT MORE THAN ONCE EVERY HALF HOUR";

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherReportError>;
