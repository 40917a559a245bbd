//! Report assembly
//!
//! [`WeatherReportBuilder`] turns fetched payloads into structured reports.
//! Each report type renders itself to text, so extraction and layout can be
//! tested separately.

pub mod current;
pub mod daily;
pub mod forecast;
pub mod marine;

pub use current::{CurrentReport, TemperatureReading};
pub use daily::{DailyReport, StationTides, tomorrow_in_alaska};
pub use forecast::{ForecastReport, PlaceForecast};
pub use marine::{MarineReport, MarineSection};

use crate::{Result, WeatherReportError};
use crate::config::ReportConfig;
use crate::models::location::{
    CURRENT_TEMPERATURE_ORDER, FORECAST_ORDER, MARINE_REGION_ORDER, SUN_PHASE_LOCATION,
    TIDE_ORDER,
};
use crate::models::tide::group_by_date;
use crate::weather::{Fetcher, Wunderground};
use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{debug, info};

/// Which report to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportKind {
    /// Tomorrow's daylight, tides and a two-day forecast
    Daily,
    /// Current temperatures around the peninsula
    Current,
    /// Coastal waters forecast
    Marine,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportKind::Daily => "daily",
            ReportKind::Current => "current",
            ReportKind::Marine => "marine",
        };
        f.write_str(name)
    }
}

/// Fetches and assembles the reports, one request at a time
pub struct WeatherReportBuilder<F: Fetcher> {
    fetcher: F,
    config: ReportConfig,
}

impl<F: Fetcher> WeatherReportBuilder<F> {
    pub fn new(fetcher: F, config: ReportConfig) -> Self {
        Self { fetcher, config }
    }

    fn wunderground(&self) -> Result<Wunderground<'_, F>> {
        let api_key = self.config.require_api_key()?;
        Ok(Wunderground::new(
            &self.fetcher,
            &self.config.weather.api_base_url,
            api_key,
        ))
    }

    /// Tomorrow's sunrise and sunset plus tide extrema for each tide station
    pub fn sun_phase_and_tides(&self, now: DateTime<Utc>) -> Result<DailyReport> {
        let api = self.wunderground()?;
        let tomorrow = tomorrow_in_alaska(now)?;
        debug!("Reading sun phase for {}", tomorrow);

        let mut sun_phase = None;
        let mut stations = Vec::with_capacity(TIDE_ORDER.len());

        for (location, heading) in &TIDE_ORDER {
            let response = api.tide(location)?;
            if *location == SUN_PHASE_LOCATION {
                sun_phase = Some(response.sun_phase(tomorrow)?);
            }
            let days = group_by_date(response.tide_events()?);
            debug!("{} tide days for {}", days.len(), location.key);
            stations.push(StationTides {
                heading: (*heading).to_string(),
                days,
            });
        }

        let sun_phase = sun_phase.ok_or_else(|| {
            WeatherReportError::data_format("no tide station supplies sunrise and sunset")
        })?;

        Ok(DailyReport {
            sun_phase,
            stations,
        })
    }

    /// Current temperature at every table location
    pub fn current_temperatures(&self) -> Result<CurrentReport> {
        let api = self.wunderground()?;

        let readings = CURRENT_TEMPERATURE_ORDER
            .iter()
            .map(|(location, name)| -> Result<TemperatureReading> {
                let conditions = api.conditions(location)?;
                Ok(TemperatureReading {
                    name: (*name).to_string(),
                    temperature_f: conditions.current_observation.temp_f,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CurrentReport { readings })
    }

    /// Leading text forecast periods for each forecast location
    pub fn forecast(&self) -> Result<ForecastReport> {
        let api = self.wunderground()?;

        let places = FORECAST_ORDER
            .iter()
            .map(|(location, heading)| -> Result<PlaceForecast> {
                let response = api.forecast(location)?;
                Ok(PlaceForecast {
                    heading: (*heading).to_string(),
                    periods: response.periods(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ForecastReport { places })
    }

    /// Coastal waters forecast sections in region order
    pub fn marine_forecast(&self) -> Result<MarineReport> {
        let raw = self
            .fetcher
            .fetch_text(&self.config.weather.marine_forecast_url)?;
        MarineReport::from_raw(&raw, &MARINE_REGION_ORDER)
    }

    /// Produce the text of one report
    pub fn build(&self, kind: ReportKind, now: DateTime<Utc>) -> Result<String> {
        let text = match kind {
            ReportKind::Daily => {
                let daily = self.sun_phase_and_tides(now)?;
                let forecast = self.forecast()?;
                daily.render() + &forecast.render()
            }
            ReportKind::Current => self.current_temperatures()?.render(),
            ReportKind::Marine => self.marine_forecast()?.render(),
        };
        info!("Built {} report ({} bytes)", kind, text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::testing::CannedFetcher;
    use crate::weather::wunderground::fixtures::{
        KEY_NOT_FOUND, conditions_json, forecast_json, tide_json,
    };
    use chrono::TimeZone;

    const BASE: &str = "http://wu.test/api";
    const MARINE_URL: &str = "http://nws.test/fzak51.txt";

    fn config(api_key: Option<&str>) -> ReportConfig {
        let mut config = ReportConfig::default();
        config.weather.api_key = api_key.map(str::to_string);
        config.weather.api_base_url = BASE.to_string();
        config.weather.marine_forecast_url = MARINE_URL.to_string();
        config
    }

    fn url(feature: &str, query: &str) -> String {
        format!("{BASE}/KEY/{feature}/q/{query}.json")
    }

    // 2017-06-01 10:00 in Alaska
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2017, 6, 1, 18, 0, 0).unwrap()
    }

    fn daily_fetcher() -> CannedFetcher {
        CannedFetcher::new()
            .with(
                url("tide", "59.4394,-151.7122"),
                tide_json(&[
                    ("2017-06-02", "04", "30", "Sunrise", ""),
                    ("2017-06-02", "07", "41", "High Tide", "18.2 ft"),
                    ("2017-06-01", "13", "55", "Low Tide", "-1.3 ft"),
                    ("2017-06-01", "20", "02", "High Tide", "17.9 ft"),
                ]),
            )
            .with(
                url("tide", "60.5439,-151.2786"),
                tide_json(&[
                    ("2017-06-02", "06", "00", "Sunrise", ""),
                    ("2017-06-02", "09", "12", "Low Tide", "2.0 ft"),
                    ("2017-06-02", "22", "30", "Sunset", ""),
                    ("2017-06-03", "05", "00", "Sunrise", ""),
                ]),
            )
            .with(
                url("forecast", "59.8861,-151.6338"),
                forecast_json(&[
                    (0, "Thursday", "Rain."),
                    (1, "Thursday Night", "Showers."),
                    (2, "Friday", "Cloudy."),
                    (3, "Friday Night", "Fog."),
                    (4, "Saturday", "Sun."),
                ]),
            )
            .with(
                url("forecast", "61.2167,-149.9000"),
                forecast_json(&[(0, "Thursday", "Breezy.")]),
            )
    }

    #[test]
    fn test_daily_report() {
        let builder = WeatherReportBuilder::new(daily_fetcher(), config(Some("KEY")));
        let text = builder.build(ReportKind::Daily, now()).unwrap();

        let expected = concat!(
            "\nDaylight 06/02\n",
            "  Sunrise:  06:00\n",
            "  Sunset:   22:30\n",
            "  Total:    16 hours and 30 minutes\n\n",
            "\nTides\n",
            "  Kachemak Bay, Seldovia\n",
            "    06/01\n",
            "      High tide:  20:02 (17.9 ft)\n",
            "      Low tide:   13:55 (-1.3 ft)\n",
            "    06/02\n",
            "      High tide:  07:41 (18.2 ft)\n",
            "      Low tide:   XX:XX (XX)\n",
            "\n",
            "  Kenai River\n",
            "    06/02\n",
            "      High tide:  XX:XX (XX)\n",
            "      Low tide:   09:12 (2.0 ft)\n",
            "\n",
            "\nForecast\n",
            "  Western Kenai Peninsula\n",
            "    Thursday:  Rain.\n",
            "    Thursday Night:  Showers.\n",
            "    Friday:  Cloudy.\n",
            "    Friday Night:  Fog.\n",
            "\n",
            "  Anchorage\n",
            "    Thursday:  Breezy.\n",
            "\n",
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_daily_requests_in_order() {
        let fetcher = daily_fetcher();
        let builder = WeatherReportBuilder::new(&fetcher, config(Some("KEY")));
        builder.build(ReportKind::Daily, now()).unwrap();

        assert_eq!(
            *fetcher.requests.borrow(),
            vec![
                url("tide", "59.4394,-151.7122"),
                url("tide", "60.5439,-151.2786"),
                url("forecast", "59.8861,-151.6338"),
                url("forecast", "61.2167,-149.9000"),
            ]
        );
    }

    #[test]
    fn test_current_report() {
        let mut fetcher = CannedFetcher::new();
        for (i, (location, _)) in CURRENT_TEMPERATURE_ORDER.iter().enumerate() {
            fetcher = fetcher.with(
                url("conditions", location.query()),
                conditions_json(30.0 + i as f64),
            );
        }
        let builder = WeatherReportBuilder::new(fetcher, config(Some("KEY")));
        let report = builder.current_temperatures().unwrap();

        assert_eq!(report.readings.len(), 10);
        assert_eq!(report.readings[0].name, "Homer");
        assert_eq!(report.readings[3].name, "Seldovia");
        assert_eq!(report.padding(), 14);

        let text = report.render();
        assert!(text.starts_with("\nCurrent temperature\n  Homer:          30\n"));
        assert!(text.contains("  Cooper Landing:  38\n"));
        assert!(text.ends_with("  Anchorage:      39\n\n"));
    }

    #[test]
    fn test_current_report_aborts_on_first_failure() {
        let fetcher = CannedFetcher::new()
            .with(url("conditions", "59.6425,-152.5483"), conditions_json(50.0))
            .with(url("conditions", "59.7775,-151.7702"), KEY_NOT_FOUND);
        let builder = WeatherReportBuilder::new(&fetcher, config(Some("KEY")));

        let err = builder.build(ReportKind::Current, now()).unwrap_err();
        assert!(matches!(err, WeatherReportError::Fetch { .. }));
        assert_eq!(fetcher.requests.borrow().len(), 2);
    }

    #[test]
    fn test_missing_api_key_fails_before_any_request() {
        let fetcher = daily_fetcher();
        let builder = WeatherReportBuilder::new(&fetcher, config(None));

        let err = builder.build(ReportKind::Daily, now()).unwrap_err();
        assert!(matches!(err, WeatherReportError::Config { .. }));
        assert!(fetcher.requests.borrow().is_empty());
    }

    #[test]
    fn test_marine_report_does_not_need_api_key() {
        let raw: String = MARINE_REGION_ORDER
            .iter()
            .rev()
            .map(|region| format!("\nPKZ000-\n{region}-\nWIND 10 KT.\n$$"))
            .collect();
        let fetcher = CannedFetcher::new().with(MARINE_URL, format!("HEADER\n$${raw}"));
        let builder = WeatherReportBuilder::new(fetcher, config(None));

        let text = builder.build(ReportKind::Marine, now()).unwrap();
        let positions: Vec<usize> = MARINE_REGION_ORDER
            .iter()
            .map(|region| text.find(&format!("\n{region}-\n")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!text.contains("HEADER"));
    }

    #[test]
    fn test_malformed_tide_payload_is_data_format() {
        let fetcher = CannedFetcher::new().with(
            url("tide", "59.4394,-151.7122"),
            r#"{"tide": {"tideSummary": [{"date": {}}]}}"#,
        );
        let builder = WeatherReportBuilder::new(fetcher, config(Some("KEY")));
        let err = builder.sun_phase_and_tides(now()).unwrap_err();
        assert!(matches!(err, WeatherReportError::DataFormat { .. }));
    }

    #[test]
    fn test_report_kind_display() {
        assert_eq!(ReportKind::Daily.to_string(), "daily");
        assert_eq!(ReportKind::Marine.to_string(), "marine");
    }
}
