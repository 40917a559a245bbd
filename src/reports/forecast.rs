//! Multi-day text forecast

use crate::models::ForecastPeriod;

/// Forecast periods for one place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceForecast {
    pub heading: String,
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastReport {
    pub places: Vec<PlaceForecast>,
}

impl ForecastReport {
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("\nForecast\n");
        for place in &self.places {
            out.push_str(&format!("  {}\n", place.heading));
            for period in &place.periods {
                out.push_str(&format!("    {}:  {}\n", period.title, period.text));
            }
            out.push('\n');
        }
        out
    }
}
