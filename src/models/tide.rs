//! Tide extrema and sun phase models

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// Kind of tide extremum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TideKind {
    High,
    Low,
}

/// Time and height of one extremum, as text from the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TideReading {
    pub hour: String,
    pub minute: String,
    pub height: String,
}

/// A recorded high or low tide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TideEvent {
    pub kind: TideKind,
    pub date: NaiveDate,
    pub reading: TideReading,
}

/// High and low tide for one calendar date. Either may be missing
/// when the feed window cuts a day short.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TideDay {
    pub date: NaiveDate,
    pub high: Option<TideReading>,
    pub low: Option<TideReading>,
}

impl TideDay {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            high: None,
            low: None,
        }
    }
}

/// Group tide events by calendar date, earliest date first.
///
/// A later event of the same kind on the same date replaces an earlier one.
#[must_use]
pub fn group_by_date(events: impl IntoIterator<Item = TideEvent>) -> Vec<TideDay> {
    let mut days: BTreeMap<NaiveDate, TideDay> = BTreeMap::new();

    for event in events {
        let day = days
            .entry(event.date)
            .or_insert_with(|| TideDay::new(event.date));
        match event.kind {
            TideKind::High => day.high = Some(event.reading),
            TideKind::Low => day.low = Some(event.reading),
        }
    }

    days.into_values().collect()
}

/// Sunrise and sunset for one calendar date, in local time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunPhase {
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
}

/// Length of the day as whole hours and remaining minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Daylight {
    pub hours: i64,
    pub minutes: i64,
}

impl SunPhase {
    /// Time between sunrise and sunset.
    ///
    /// Hours truncate toward zero and minutes stay in `0..60`, which matters
    /// when a missing sunset leaves the total negative.
    #[must_use]
    pub fn daylight(&self) -> Daylight {
        let total_minutes = (self.sunset - self.sunrise).num_minutes();
        Daylight {
            hours: total_minutes / 60,
            minutes: total_minutes.rem_euclid(60),
        }
    }
}
