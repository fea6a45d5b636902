use iced::widget::{button, column, text};
use iced::{Alignment, Element, Length};

use crate::app::{Message, PawAdopt};
use crate::route::Route;
use crate::state::filter::Criteria;
use crate::ui::{heading, pet_card};

pub fn view(app: &PawAdopt) -> Element<'_, Message> {
    let header = heading(
        "Your Favorite Pets",
        Some("Keep track of pets you're interested in adopting."),
    );

    if app.backend().requires_sign_in() && app.session().is_none() {
        return column![
            header,
            text("Sign in to see and save your favorite pets."),
            button("Sign in")
                .on_press(Message::Navigate(Route::SignIn))
                .style(button::primary),
        ]
        .spacing(16)
        .into();
    }

    let pets = app.favorite_pets();
    if pets.is_empty() {
        return column![
            header,
            column![
                text("No favorites yet").size(24),
                text(
                    "Start browsing our adorable pets and click the heart icon to save your \
                     favorites here."
                )
                .style(text::secondary),
                button("Browse Pets")
                    .on_press(Message::Navigate(Route::Adopt(Criteria::default())))
                    .style(button::primary),
            ]
            .spacing(12)
            .align_x(Alignment::Center)
            .width(Length::Fill),
        ]
        .spacing(24)
        .into();
    }

    column![header, pet_card::grid(app, &pets)].spacing(24).into()
}
