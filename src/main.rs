mod app;
mod clock;
mod components;
mod config;
mod error;
mod forecast;
mod view;
mod weather;

use app::WeatherApp;
use config::Config;
use error::AppError;
use iced::{window, Application, Settings, Size};

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;

    // Close requests go through the app so the clock is stopped first.
    let settings = Settings {
        window: window::Settings {
            size: Size::new(480.0, 800.0),
            exit_on_close_request: false,
            ..window::Settings::default()
        },
        ..Settings::with_flags(config)
    };

    WeatherApp::run(settings)?;
    Ok(())
}
