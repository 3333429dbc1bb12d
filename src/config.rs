use crate::error::ConfigError;
use reqwest::Url;

pub const API_URL_VAR: &str = "FORECAST_API_URL";

/// Startup configuration. The forecast endpoint is the only setting.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
}

impl Config {
    /// Load from the process environment, reading a `.env` file first if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(API_URL_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingApiUrl)?;

        let url = Url::parse(&raw).map_err(|e| ConfigError::InvalidApiUrl {
            value: raw.clone(),
            reason: e.to_string(),
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidApiUrl {
                reason: format!("unsupported scheme '{}'", url.scheme()),
                value: raw,
            });
        }

        Ok(Self { api_url: raw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_with(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            assert_eq!(key, API_URL_VAR);
            value.map(str::to_string)
        }
    }

    #[test]
    fn missing_url_is_a_config_error() {
        let err = Config::from_lookup(lookup_with(None)).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiUrl);
    }

    #[test]
    fn blank_url_counts_as_missing() {
        let err = Config::from_lookup(lookup_with(Some("   "))).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiUrl);
    }

    #[test]
    fn relative_url_is_rejected() {
        let err = Config::from_lookup(lookup_with(Some("/v1/forecast"))).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidApiUrl { .. }));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let err = Config::from_lookup(lookup_with(Some("ftp://example.com/forecast"))).unwrap_err();
        match err {
            ConfigError::InvalidApiUrl { value, reason } => {
                assert_eq!(value, "ftp://example.com/forecast");
                assert!(reason.contains("ftp"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn url_is_kept_verbatim_with_query() {
        let url = "https://api.open-meteo.com/v1/forecast?latitude=52.52&longitude=13.41&current=temperature_2m&hourly=temperature_2m";
        let config = Config::from_lookup(lookup_with(Some(url))).unwrap();
        assert_eq!(config.api_url, url);
    }
}
