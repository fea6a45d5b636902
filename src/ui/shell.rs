/// Navigation bar, notice banner and footer around every screen
use iced::widget::{button, column, container, horizontal_rule, row, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::app::{Message, PawAdopt};
use crate::route::Route;
use crate::state::filter::Criteria;

use super::notice;

pub fn view<'a>(app: &'a PawAdopt, page: Element<'a, Message>) -> Element<'a, Message> {
    let body = column![
        container(page).padding([24, 40]).width(Length::Fill),
        footer(),
    ]
    .spacing(24);

    column![navbar(app)]
        .push_maybe(app.notice().map(notice::view))
        .push(scrollable(body).height(Length::Fill))
        .into()
}

fn navbar(app: &PawAdopt) -> Element<'_, Message> {
    let current = app.route();
    let link = |label: String, route: Route| {
        let active = std::mem::discriminant(current) == std::mem::discriminant(&route);
        button(text(label).size(15))
            .on_press(Message::Navigate(route))
            .style(if active { button::primary } else { button::text })
    };

    let favorites = match app.favorites().len() {
        0 => "Favorites".to_string(),
        n => format!("Favorites ({n})"),
    };

    let account: Element<'_, Message> = match app.session() {
        Some(_) => button(text("Sign out").size(15))
            .on_press(Message::SignOut)
            .style(button::secondary)
            .into(),
        None if app.backend().is_offline() => text("Offline").size(13).style(text::secondary).into(),
        None => link("Sign in".into(), Route::SignIn).into(),
    };

    container(
        row![
            button(text("🐾 PawAdopt").size(22))
                .on_press(Message::Navigate(Route::Home))
                .style(button::text),
            container(
                row![
                    link("Adopt".into(), Route::Adopt(Criteria::default())),
                    link("List a Pet".into(), Route::ListPet),
                    link("How It Works".into(), Route::HowItWorks),
                    link("Resources".into(), Route::Resources),
                    link("About".into(), Route::About),
                    link("Contact".into(), Route::Contact),
                    link(favorites, Route::Favorites),
                ]
                .spacing(4)
                .align_y(Alignment::Center)
            )
            .width(Length::Fill)
            .center_x(Length::Fill),
            account,
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding([10, 20])
    .width(Length::Fill)
    .into()
}

fn footer<'a>() -> Element<'a, Message> {
    let links = row![
        button(text("About Us").size(13))
            .on_press(Message::Navigate(Route::About))
            .style(button::text),
        button(text("Pet Care Resources").size(13))
            .on_press(Message::Navigate(Route::Resources))
            .style(button::text),
        button(text("Contact").size(13))
            .on_press(Message::Navigate(Route::Contact))
            .style(button::text),
    ]
    .spacing(8);

    container(
        column![
            horizontal_rule(1),
            text("PawAdopt").size(18),
            text("Connecting rescued pets with loving families across India.")
                .size(13)
                .style(text::secondary),
            links,
            text("© PawAdopt. Made with love for animals.")
                .size(12)
                .style(text::secondary),
        ]
        .spacing(8),
    )
    .padding([16, 40])
    .width(Length::Fill)
    .into()
}
