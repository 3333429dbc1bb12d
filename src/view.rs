use crate::app::{LoadState, Message, WeatherApp};
use crate::components;
use crate::weather::WeatherResponse;
use iced::{
    widget::{column, container, scrollable, Column, Space},
    Alignment, Element, Length,
};

pub fn view(app: &WeatherApp) -> Element<Message> {
    let content: Element<Message> = match &app.load_state {
        LoadState::Loading => return screen(components::create_loading_display()),
        LoadState::NoData => column![
            components::create_clock(&app.clock),
            Space::with_height(Length::Fixed(20.0)),
            components::create_error_text(),
        ]
        .align_items(Alignment::Center)
        .into(),
        LoadState::WithData(data) => create_forecast(app, data),
    };

    let page = container(content)
        .width(Length::Fill)
        .padding(20)
        .center_x();

    screen(scrollable(page).height(Length::Fill).into())
}

fn create_forecast<'a>(app: &WeatherApp, data: &WeatherResponse) -> Element<'a, Message> {
    let unit = data.hourly_unit();

    let sections = app
        .grouped_forecast()
        .iter()
        .fold(Column::new().spacing(20), |sections, group| {
            sections.push(components::create_date_section(group, unit))
        });

    column![
        components::create_clock(&app.clock),
        Space::with_height(Length::Fixed(20.0)),
        components::create_current_temperature(data),
        Space::with_height(Length::Fixed(20.0)),
        components::create_section_title("Hourly Temperature"),
        Space::with_height(Length::Fixed(10.0)),
        sections.width(Length::Fill).align_items(Alignment::Center),
    ]
    .align_items(Alignment::Center)
    .into()
}

fn screen(content: Element<Message>) -> Element<Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(components::backdrop())
        .into()
}
