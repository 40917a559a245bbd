//! HTTP access to the weather services
//!
//! [`Fetcher`] is the single GET primitive every report goes through.
//! [`WeatherClient`] implements it with a blocking `reqwest` client; tests
//! substitute canned bodies.

use crate::config::WeatherConfig;
use crate::{Result, VERSION, WeatherReportError};
use reqwest::blocking::Client;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub mod wunderground;

pub use wunderground::{Feature, Wunderground};

/// Retrieves a URL and returns the response body as text
pub trait Fetcher {
    fn fetch_text(&self, url: &str) -> Result<String>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch_text(&self, url: &str) -> Result<String> {
        (**self).fetch_text(url)
    }
}

/// Blocking HTTP client shared by every request of a run
#[derive(Debug)]
pub struct WeatherClient {
    client: Client,
}

impl WeatherClient {
    /// Create a new client with the configured timeout
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(format!("akweather/{VERSION}"))
            .build()
            .map_err(|e| WeatherReportError::fetch(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl Fetcher for WeatherClient {
    fn fetch_text(&self, url: &str) -> Result<String> {
        debug!("GET {}", redact_key(url));
        let start_time = Instant::now();

        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                401 | 403 => WeatherReportError::fetch(format!(
                    "request rejected with {status}; check the weather API key"
                )),
                _ => WeatherReportError::fetch(format!(
                    "{} returned {status}",
                    redact_key(url)
                )),
            });
        }

        let body = response.text()?;

        let elapsed = start_time.elapsed();
        debug!(
            "received {} bytes in {:.3}s",
            body.len(),
            elapsed.as_secs_f64()
        );
        if elapsed.as_secs() > 5 {
            warn!("Slow response detected: {:.3}s", elapsed.as_secs_f64());
        }

        Ok(body)
    }
}

/// Hide the API key path segment of a Weather Underground URL for logging
fn redact_key(url: &str) -> String {
    match url.find("/api/") {
        Some(start) => {
            let key_start = start + "/api/".len();
            match url[key_start..].find('/') {
                Some(key_len) => format!("{}***{}", &url[..key_start], &url[key_start + key_len..]),
                None => url.to_string(),
            }
        }
        None => url.to_string(),
    }
}
