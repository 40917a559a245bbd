//! Weather Underground API access and response structures
//!
//! Every request has the shape `{base}/{key}/{feature}/q/{lat,lon}.json`.
//! The service answers a bad key or feature with HTTP 200 and an error object
//! under `response.error`, so bodies are checked for that before being
//! deserialized into the feature's shape.

use super::Fetcher;
use crate::models::{
    FORECAST_PERIODS, ForecastPeriod, Location, SunPhase, TideEvent, TideKind, TideReading,
};
use crate::{Result, WeatherReportError};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::debug;

const TYPE_SUNRISE: &str = "Sunrise";
const TYPE_SUNSET: &str = "Sunset";
const TYPE_HIGH_TIDE: &str = "High Tide";
const TYPE_LOW_TIDE: &str = "Low Tide";

/// Data set requested from the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Tide,
    Conditions,
    Forecast,
}

impl Feature {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Feature::Tide => "tide",
            Feature::Conditions => "conditions",
            Feature::Forecast => "forecast",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weather Underground endpoint bound to a fetcher and an API key
pub struct Wunderground<'a, F: Fetcher> {
    fetcher: &'a F,
    base_url: &'a str,
    api_key: &'a str,
}

impl<'a, F: Fetcher> Wunderground<'a, F> {
    pub fn new(fetcher: &'a F, base_url: &'a str, api_key: &'a str) -> Self {
        Self {
            fetcher,
            base_url,
            api_key,
        }
    }

    /// Request URL for a feature at a location
    #[must_use]
    pub fn url(&self, feature: Feature, location: &Location) -> String {
        format!(
            "{}/{}/{}/q/{}.json",
            self.base_url.trim_end_matches('/'),
            self.api_key,
            feature,
            location.query()
        )
    }

    /// Fetch a feature for a location and deserialize it
    pub fn get<T: DeserializeOwned>(&self, feature: Feature, location: &Location) -> Result<T> {
        debug!("Requesting {} for {}", feature, location.key);
        let body = self.fetcher.fetch_text(&self.url(feature, location))?;
        parse_body(&body).map_err(|e| match e {
            WeatherReportError::DataFormat { message } => WeatherReportError::data_format(format!(
                "{feature} response for {}: {message}",
                location.key
            )),
            other => other,
        })
    }

    pub fn tide(&self, location: &Location) -> Result<TideResponse> {
        self.get(Feature::Tide, location)
    }

    pub fn conditions(&self, location: &Location) -> Result<ConditionsResponse> {
        self.get(Feature::Conditions, location)
    }

    pub fn forecast(&self, location: &Location) -> Result<ForecastResponse> {
        self.get(Feature::Forecast, location)
    }
}

/// Parse a response body, surfacing API-reported errors as fetch errors
pub fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    if let Some(error) = value.pointer("/response/error") {
        let api_error: ApiError = serde_json::from_value(error.clone())?;
        return Err(WeatherReportError::fetch(format!(
            "weather service rejected the request ({}): {}",
            api_error.kind, api_error.description
        )));
    }

    Ok(serde_json::from_value(value)?)
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    description: String,
}

/// `tide` feature response
#[derive(Debug, Deserialize)]
pub struct TideResponse {
    pub tide: TideData,
}

#[derive(Debug, Deserialize)]
pub struct TideData {
    #[serde(rename = "tideSummary")]
    pub tide_summary: Vec<TideSummaryEntry>,
}

/// One tide extremum or sun event
#[derive(Debug, Deserialize)]
pub struct TideSummaryEntry {
    pub date: SummaryDate,
    pub data: SummaryData,
}

/// Local date and time of a summary entry, all fields are numeric text
#[derive(Debug, Deserialize)]
pub struct SummaryDate {
    pub year: String,
    pub mon: String,
    pub mday: String,
    pub hour: String,
    pub min: String,
}

#[derive(Debug, Deserialize)]
pub struct SummaryData {
    #[serde(rename = "type")]
    pub kind: String,
    /// Present on tide entries only
    pub height: Option<String>,
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        WeatherReportError::data_format(format!("{field} is not a number: {value:?}"))
    })
}

impl SummaryDate {
    /// Calendar date of the entry
    pub fn calendar_date(&self) -> Result<NaiveDate> {
        let year = parse_number("year", &self.year)?;
        let month = parse_number("mon", &self.mon)?;
        let day = parse_number("mday", &self.mday)?;
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            WeatherReportError::data_format(format!("invalid date {year}-{month}-{day}"))
        })
    }

    /// Time of day of the entry
    pub fn time_of_day(&self) -> Result<NaiveTime> {
        let hour = parse_number("hour", &self.hour)?;
        let minute = parse_number("min", &self.min)?;
        NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            WeatherReportError::data_format(format!("invalid time {hour}:{minute}"))
        })
    }
}

impl TideResponse {
    /// High and low tide events in feed order; sun and moon events are skipped
    pub fn tide_events(&self) -> Result<Vec<TideEvent>> {
        let mut events = Vec::new();

        for entry in &self.tide.tide_summary {
            let kind = match entry.data.kind.as_str() {
                TYPE_HIGH_TIDE => TideKind::High,
                TYPE_LOW_TIDE => TideKind::Low,
                _ => continue,
            };
            let height = entry.data.height.clone().ok_or_else(|| {
                WeatherReportError::data_format(format!(
                    "{} entry has no height",
                    entry.data.kind
                ))
            })?;
            events.push(TideEvent {
                kind,
                date: entry.date.calendar_date()?,
                reading: TideReading {
                    hour: entry.date.hour.clone(),
                    minute: entry.date.min.clone(),
                    height,
                },
            });
        }

        Ok(events)
    }

    /// Sunrise and sunset on `date`. An event missing from the feed stays at midnight.
    pub fn sun_phase(&self, date: NaiveDate) -> Result<SunPhase> {
        let mut sunrise = NaiveTime::default();
        let mut sunset = NaiveTime::default();

        for entry in &self.tide.tide_summary {
            if entry.date.calendar_date()? != date {
                continue;
            }
            match entry.data.kind.as_str() {
                TYPE_SUNRISE => sunrise = entry.date.time_of_day()?,
                TYPE_SUNSET => sunset = entry.date.time_of_day()?,
                _ => {}
            }
        }

        Ok(SunPhase {
            sunrise: date.and_time(sunrise),
            sunset: date.and_time(sunset),
        })
    }
}

/// `conditions` feature response
#[derive(Debug, Deserialize)]
pub struct ConditionsResponse {
    pub current_observation: CurrentObservation,
}

#[derive(Debug, Deserialize)]
pub struct CurrentObservation {
    /// Temperature in degrees Fahrenheit
    pub temp_f: f64,
}

/// `forecast` feature response
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub forecast: ForecastData,
}

#[derive(Debug, Deserialize)]
pub struct ForecastData {
    pub txt_forecast: TextForecast,
}

#[derive(Debug, Deserialize)]
pub struct TextForecast {
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastDay {
    pub period: u32,
    pub title: String,
    pub fcttext: String,
}

impl ForecastResponse {
    /// Leading forecast periods, stopping before period 4
    #[must_use]
    pub fn periods(&self) -> Vec<ForecastPeriod> {
        self.forecast
            .txt_forecast
            .forecastday
            .iter()
            .take_while(|day| day.period as usize != FORECAST_PERIODS)
            .take(FORECAST_PERIODS)
            .map(|day| ForecastPeriod::new(day.title.clone(), day.fcttext.clone()))
            .collect()
    }
}
