use crate::clock::{ClockState, TICK_INTERVAL};
use crate::config::Config;
use crate::error::FetchError;
use crate::forecast::{self, DateGroup};
use crate::view;
use crate::weather::{self, WeatherResponse};
use chrono::Local;
use iced::{event, window, Application, Command, Element, Event, Subscription, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    WeatherFetched(Result<WeatherResponse, FetchError>),
    Tick,
    CloseRequested(window::Id),
}

/// `Loading` until the single fetch resolves; both loaded states are terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    WithData(WeatherResponse),
    NoData,
}

pub struct WeatherApp {
    pub load_state: LoadState,
    pub clock: ClockState,
}

impl WeatherApp {
    pub fn with_clock(clock: ClockState) -> Self {
        Self {
            load_state: LoadState::Loading,
            clock,
        }
    }

    pub fn weather_data(&self) -> Option<&WeatherResponse> {
        match &self.load_state {
            LoadState::WithData(data) => Some(data),
            LoadState::Loading | LoadState::NoData => None,
        }
    }

    /// Future hourly entries grouped by date, computed against the current clock reading.
    pub fn grouped_forecast(&self) -> Vec<DateGroup> {
        match self.weather_data() {
            Some(data) => forecast::grouped_forecast(&data.hourly, self.clock.cutoff()),
            None => Vec::new(),
        }
    }

    pub fn apply_fetch_result(&mut self, result: Result<WeatherResponse, FetchError>) {
        if self.load_state != LoadState::Loading {
            tracing::warn!("Ignoring fetch result; weather is already loaded");
            return;
        }

        self.load_state = match result {
            Ok(data) => LoadState::WithData(data),
            Err(error) => {
                tracing::error!("Error fetching weather data: {}", error);
                LoadState::NoData
            }
        };
    }

    /// Cancel the clock. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.clock.cancel() {
            tracing::info!("Clock stopped");
        }
    }
}

impl Application for WeatherApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = Config;

    fn new(config: Config) -> (WeatherApp, Command<Message>) {
        let command = Command::perform(
            weather::fetch_weather(config.api_url),
            Message::WeatherFetched,
        );
        let app = WeatherApp::with_clock(ClockState::default());
        (app, command)
    }

    fn title(&self) -> String {
        String::from("Hourly Forecast")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::WeatherFetched(result) => {
                self.apply_fetch_result(result);
                Command::none()
            }
            Message::Tick => {
                if !self.clock.tick(Local::now()) {
                    tracing::debug!("Dropping tick after clock was stopped");
                }
                Command::none()
            }
            Message::CloseRequested(id) => {
                self.teardown();
                window::close(id)
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let close_requests = event::listen_with(|event, _status| match event {
            Event::Window(id, window::Event::CloseRequested) => Some(Message::CloseRequested(id)),
            _ => None,
        });

        if self.clock.is_running() {
            Subscription::batch([
                close_requests,
                iced::time::every(TICK_INTERVAL).map(|_| Message::Tick),
            ])
        } else {
            close_requests
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn view(&self) -> Element<Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::{CurrentConditions, HourlySeries};
    use chrono::{DateTime, NaiveDateTime, TimeZone};

    fn local(raw: &str) -> DateTime<Local> {
        let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").unwrap();
        Local.from_local_datetime(&naive).earliest().unwrap()
    }

    fn app_at(raw: &str) -> WeatherApp {
        WeatherApp::with_clock(ClockState::starting_at(local(raw)))
    }

    fn sample_response() -> WeatherResponse {
        WeatherResponse {
            current: CurrentConditions {
                time: None,
                temperature_2m: 4.5,
            },
            current_units: None,
            hourly: HourlySeries {
                time: vec![
                    "2024-01-01T10:00".to_string(),
                    "2024-01-01T11:00".to_string(),
                    "2024-01-02T09:00".to_string(),
                ],
                temperature_2m: vec![5.0, 6.0, 7.0],
            },
            hourly_units: None,
        }
    }

    #[test]
    fn starts_loading_with_no_groups() {
        let app = app_at("2024-01-01T10:30");
        assert_eq!(app.load_state, LoadState::Loading);
        assert!(app.grouped_forecast().is_empty());
    }

    #[test]
    fn successful_fetch_shows_future_hours() {
        let mut app = app_at("2024-01-01T10:30");
        let _ = app.update(Message::WeatherFetched(Ok(sample_response())));

        assert_eq!(app.load_state, LoadState::WithData(sample_response()));
        let labels: Vec<String> = app.grouped_forecast().iter().map(DateGroup::label).collect();
        assert_eq!(labels, vec!["1/1/2024", "1/2/2024"]);
    }

    #[test]
    fn failed_fetch_ends_in_no_data() {
        let mut app = app_at("2024-01-01T10:30");
        let _ = app.update(Message::WeatherFetched(Err(FetchError::Network(
            "connection refused".to_string(),
        ))));

        assert_eq!(app.load_state, LoadState::NoData);
        assert!(app.weather_data().is_none());
    }

    #[test]
    fn parse_failure_collapses_to_no_data() {
        let mut app = app_at("2024-01-01T10:30");
        app.apply_fetch_result(Err(FetchError::Parse("expected value".to_string())));
        assert_eq!(app.load_state, LoadState::NoData);
    }

    #[test]
    fn loaded_state_is_terminal() {
        let mut app = app_at("2024-01-01T10:30");
        app.apply_fetch_result(Err(FetchError::Status(500)));
        app.apply_fetch_result(Ok(sample_response()));
        assert_eq!(app.load_state, LoadState::NoData);
    }

    #[test]
    fn clock_advancing_past_all_entries_empties_groups() {
        let mut app = app_at("2024-01-01T10:30");
        app.apply_fetch_result(Ok(sample_response()));
        assert_eq!(app.grouped_forecast().len(), 2);

        assert!(app.clock.tick(local("2024-01-02T09:00")));

        assert!(app.grouped_forecast().is_empty());
        assert!(app.weather_data().is_some());
    }

    #[test]
    fn tick_before_fetch_completes_is_fine() {
        let mut app = app_at("2024-01-01T08:00");
        let _ = app.update(Message::Tick);
        app.apply_fetch_result(Ok(sample_response()));
        assert!(matches!(app.load_state, LoadState::WithData(_)));
    }

    #[test]
    fn teardown_stops_ticks_and_is_idempotent() {
        let mut app = app_at("2024-01-01T10:30");
        let before = app.clock.now();

        let _ = app.update(Message::CloseRequested(window::Id::MAIN));
        app.teardown();
        let _ = app.update(Message::Tick);

        assert!(!app.clock.is_running());
        assert_eq!(app.clock.now(), before);
    }
}
