//! Error types and handling for `akweather`

use thiserror::Error;

/// Main error type for report generation
#[derive(Error, Debug)]
pub enum WeatherReportError {
    /// Network or transport failure, including errors reported by the API itself
    #[error("Fetch error: {message}")]
    Fetch { message: String },

    /// Payload did not have the expected shape
    #[error("Data format error: {message}")]
    DataFormat { message: String },

    /// An expected entry was absent from the fetched data
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WeatherReportError {
    /// Create a new fetch error
    pub fn fetch<S: Into<String>>(message: S) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create a new data format error
    pub fn data_format<S: Into<String>>(message: S) -> Self {
        Self::DataFormat {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherReportError::Fetch { .. } => {
                "Unable to retrieve weather data. Please check your internet connection and API key."
                    .to_string()
            }
            WeatherReportError::DataFormat { .. } => {
                "The weather service returned data in an unexpected format.".to_string()
            }
            WeatherReportError::NotFound { message } => {
                format!("Missing from the forecast: {message}")
            }
            WeatherReportError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            WeatherReportError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for WeatherReportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::fetch(format!("request timed out: {err}"))
        } else {
            Self::fetch(err.to_string())
        }
    }
}

impl From<serde_json::Error> for WeatherReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::data_format(err.to_string())
    }
}
