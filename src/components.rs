use crate::app::Message;
use crate::clock::ClockState;
use crate::forecast::{self, DateGroup, HourlyEntry};
use crate::weather::{self, WeatherResponse};
use iced::{
    font, theme,
    widget::{column, container, row, scrollable, text, Space},
    Alignment, Background, Color, Element, Font, Length, Theme,
};

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Translucent dark backdrop with white text behind the whole screen.
pub struct Backdrop;

impl container::StyleSheet for Backdrop {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(Color::WHITE),
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
            ..Default::default()
        }
    }
}

pub fn backdrop() -> theme::Container {
    theme::Container::Custom(Box::new(Backdrop))
}

pub fn create_loading_display<'a>() -> Element<'a, Message> {
    container(text("Loading weather data...").size(18))
        .padding(20)
        .center_x()
        .center_y()
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

pub fn create_error_text<'a>() -> Element<'a, Message> {
    text("No weather data available")
        .size(18)
        .style(Color::from_rgb(1.0, 0.0, 0.0))
        .into()
}

pub fn create_clock<'a>(clock: &ClockState) -> Element<'a, Message> {
    text(forecast::format_clock(&clock.now()))
        .size(24)
        .font(BOLD)
        .into()
}

pub fn create_current_temperature<'a>(data: &WeatherResponse) -> Element<'a, Message> {
    column![
        text("Current Temperature").size(24).font(BOLD),
        Space::with_height(Length::Fixed(10.0)),
        text(weather::format_temperature(
            data.current.temperature_2m,
            data.current_unit()
        ))
        .size(48)
        .font(BOLD),
    ]
    .align_items(Alignment::Center)
    .into()
}

pub fn create_section_title<'a>(title: &str) -> Element<'a, Message> {
    text(title).size(20).font(BOLD).into()
}

pub fn create_date_section<'a>(group: &DateGroup, unit: &str) -> Element<'a, Message> {
    let hourly_row = group
        .entries
        .iter()
        .fold(row![].spacing(10), |hourly_row, entry| {
            hourly_row.push(create_hourly_item(entry, unit))
        });

    let hourly_scroll = scrollable(hourly_row).direction(scrollable::Direction::Horizontal(
        scrollable::Properties::default(),
    ));

    column![
        text(group.label()).size(32).font(BOLD),
        Space::with_height(Length::Fixed(10.0)),
        hourly_scroll,
    ]
    .width(Length::Fill)
    .align_items(Alignment::Center)
    .into()
}

fn create_hourly_item<'a>(entry: &HourlyEntry, unit: &str) -> Element<'a, Message> {
    container(
        column![
            text(forecast::format_hour_label(entry.time)).size(16),
            text(weather::format_temperature(entry.temp, unit)).size(18),
        ]
        .align_items(Alignment::Center),
    )
    .padding(5)
    .into()
}
