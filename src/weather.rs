use crate::error::FetchError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPERATURE_UNIT: &str = "°C";

// Response shape of the forecast endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub current: CurrentConditions,
    #[serde(default)]
    pub current_units: Option<TemperatureUnits>,
    pub hourly: HourlySeries,
    #[serde(default)]
    pub hourly_units: Option<TemperatureUnits>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    #[serde(default)]
    pub time: Option<String>,
    pub temperature_2m: f64,
}

/// Two index-aligned sequences: `time[i]` pairs with `temperature_2m[i]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureUnits {
    #[serde(default)]
    pub temperature_2m: Option<String>,
}

impl WeatherResponse {
    pub fn current_unit(&self) -> &str {
        unit_or_default(self.current_units.as_ref())
    }

    pub fn hourly_unit(&self) -> &str {
        unit_or_default(self.hourly_units.as_ref())
    }
}

fn unit_or_default(units: Option<&TemperatureUnits>) -> &str {
    units
        .and_then(|u| u.temperature_2m.as_deref())
        .unwrap_or(DEFAULT_TEMPERATURE_UNIT)
}

/// Format a temperature the way it is shown on screen: shortest numeric form plus unit.
pub fn format_temperature(value: f64, unit: &str) -> String {
    format!("{}{}", value, unit)
}

// The async function to fetch weather data. Called exactly once per run.
pub async fn fetch_weather(url: String) -> Result<WeatherResponse, FetchError> {
    tracing::info!("Fetching weather from: {}", url);
    let response = reqwest::get(&url).await.map_err(|e| {
        tracing::error!("Request failed: {}", e);
        FetchError::from(e)
    })?;

    let status = response.status();
    tracing::debug!("Got response with status: {}", status);
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    let data = serde_json::from_slice::<WeatherResponse>(&body)?;
    tracing::info!(
        "Weather loaded: {} hourly timestamps, {} hourly temperatures",
        data.hourly.time.len(),
        data.hourly.temperature_2m.len()
    );
    Ok(data)
}
