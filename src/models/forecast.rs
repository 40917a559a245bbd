//! Text forecast model

/// Number of forecast periods kept per location (day and night for two days)
pub const FORECAST_PERIODS: usize = 4;

/// One titled block of text forecast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastPeriod {
    /// Period title, e.g. "Tuesday Night"
    pub title: String,
    /// Forecast prose
    pub text: String,
}

impl ForecastPeriod {
    #[must_use]
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}
