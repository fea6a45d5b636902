use iced::widget::{button, checkbox, column, container, row, text, text_input, Column, Row};
use iced::{Alignment, Element, Length};

use crate::app::{Message, PawAdopt};
use crate::state::data::{AgeBucket, Species};
use crate::state::seed::CITIES;
use crate::ui::{heading, pet_card};

pub fn view(app: &PawAdopt) -> Element<'_, Message> {
    let criteria = app.criteria();

    let filters_label = match criteria.active_filters() {
        0 => "Filters".to_string(),
        n => format!("Filters ({n})"),
    };

    let search = row![
        text_input("Search by name, breed or location…", &criteria.query)
            .on_input(Message::SearchChanged)
            .padding(10)
            .width(Length::Fill),
        button(text(filters_label))
            .on_press(Message::ToggleFilterPanel)
            .padding(10)
            .style(if app.show_filters() {
                button::primary
            } else {
                button::secondary
            }),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let page = column![
        heading(
            "Adopt a Pet",
            Some("Meet rescued pets waiting for their forever homes")
        ),
        search,
    ]
    .spacing(20)
    .push_maybe(app.show_filters().then(|| filter_panel(app)));

    page.push(results(app)).into()
}

fn filter_panel(app: &PawAdopt) -> Element<'_, Message> {
    let criteria = app.criteria();

    let species = Row::with_children(Species::ALL.iter().map(|&s| {
        checkbox(s.label(), criteria.species.contains(&s))
            .on_toggle(move |_| Message::ToggleSpecies(s))
            .into()
    }))
    .spacing(16);

    let ages = Row::with_children(AgeBucket::ALL.iter().map(|&a| {
        checkbox(a.label(), criteria.ages.contains(&a))
            .on_toggle(move |_| Message::ToggleAge(a))
            .into()
    }))
    .spacing(16);

    let cities = Row::with_children(CITIES.iter().map(|&city| {
        checkbox(city, criteria.cities.contains(city))
            .on_toggle(move |_| Message::ToggleCity(city.to_string()))
            .into()
    }))
    .spacing(16);

    container(
        column![
            group("Pet type", species),
            group("Age", ages),
            group("City", cities),
            checkbox("Vaccinated only", criteria.vaccinated_only)
                .on_toggle(Message::VaccinatedOnly),
            button("Clear all filters")
                .on_press_maybe((!criteria.is_empty()).then_some(Message::ClearFilters))
                .style(button::text),
        ]
        .spacing(14),
    )
    .padding(16)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}

fn results(app: &PawAdopt) -> Element<'_, Message> {
    if app.is_loading() {
        return text("Loading pets…").size(16).into();
    }

    let pets = app.filtered();
    if pets.is_empty() {
        return Column::new()
            .push(text("No pets found").size(22))
            .push(text("Try adjusting your search or filters.").style(text::secondary))
            .push(
                button("Clear filters")
                    .on_press(Message::ClearFilters)
                    .style(button::secondary),
            )
            .spacing(10)
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .into();
    }

    let count = match pets.len() {
        1 => "Showing 1 pet".to_string(),
        n => format!("Showing {n} pets"),
    };

    column![
        text(count).size(14).style(text::secondary),
        pet_card::grid(app, &pets),
    ]
    .spacing(12)
    .into()
}

fn group<'a>(title: &'a str, body: Row<'a, Message>) -> Element<'a, Message> {
    column![text(title).size(14).style(text::secondary), body]
        .spacing(6)
        .into()
}
