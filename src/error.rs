/// Why the one-shot weather fetch produced no data.
///
/// Carried inside `Message`, so every variant holds owned, cloneable data
/// instead of the underlying `reqwest`/`serde_json` errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForecastError {
    #[error("Hourly series length mismatch: {times} timestamps, {temperatures} temperatures")]
    IndexMismatch { times: usize, temperatures: usize },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("FORECAST_API_URL is not set.\nHint: export it or add it to a .env file.")]
    MissingApiUrl,
    #[error("FORECAST_API_URL '{value}' is not a valid http(s) URL: {reason}")]
    InvalidApiUrl { value: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("UI error: {0}")]
    Ui(#[from] iced::Error),
}
