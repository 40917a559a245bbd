//! Daylight and tide report

use crate::models::{SunPhase, TideDay, TideReading};
use crate::{Result, WeatherReportError};
use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use chrono_tz::US::Alaska;

/// Rendered in place of tide fields the feed has no entry for
pub const MISSING_FIELD: &str = "XX";

/// Tide days for one station
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationTides {
    pub heading: String,
    pub days: Vec<TideDay>,
}

/// Tomorrow's daylight plus upcoming tides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyReport {
    pub sun_phase: SunPhase,
    pub stations: Vec<StationTides>,
}

/// The calendar date after `now`, as observed in Alaska
pub fn tomorrow_in_alaska(now: DateTime<Utc>) -> Result<NaiveDate> {
    now.with_timezone(&Alaska)
        .date_naive()
        .succ_opt()
        .ok_or_else(|| WeatherReportError::data_format(format!("no calendar day after {now}")))
}

impl DailyReport {
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self.render_daylight();
        out.push_str("\nTides\n");
        for station in &self.stations {
            out.push_str(&format!("  {}\n", station.heading));
            for day in &station.days {
                out.push_str(&render_tide_day(day));
            }
            out.push('\n');
        }
        out
    }

    fn render_daylight(&self) -> String {
        let SunPhase { sunrise, sunset } = self.sun_phase;
        let daylight = self.sun_phase.daylight();
        format!(
            "\nDaylight {:02}/{:02}\n  Sunrise:  {:02}:{:02}\n  Sunset:   {:02}:{:02}\n  Total:    {} hours and {} minutes\n\n",
            sunrise.month(),
            sunrise.day(),
            sunrise.hour(),
            sunrise.minute(),
            sunset.hour(),
            sunset.minute(),
            daylight.hours,
            daylight.minutes
        )
    }
}

fn render_tide_day(day: &TideDay) -> String {
    let (high_hour, high_minute, high_height) = reading_fields(day.high.as_ref());
    let (low_hour, low_minute, low_height) = reading_fields(day.low.as_ref());
    format!(
        "    {:02}/{:02}\n      High tide:  {high_hour}:{high_minute} ({high_height})\n      Low tide:   {low_hour}:{low_minute} ({low_height})\n",
        day.date.month(),
        day.date.day()
    )
}

fn reading_fields(reading: Option<&TideReading>) -> (&str, &str, &str) {
    match reading {
        Some(r) => (&r.hour, &r.minute, &r.height),
        None => (MISSING_FIELD, MISSING_FIELD, MISSING_FIELD),
    }
}
