/// Pet cards and the wrapping grid used by the browse and favorites screens
use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::app::{Message, PawAdopt, Thumb};
use crate::route::Route;
use crate::state::data::Pet;

const CARD_WIDTH: f32 = 280.0;
const CARD_PHOTO_HEIGHT: f32 = 200.0;

/// Cards laid out left to right, wrapping onto new lines
pub fn grid<'a>(app: &'a PawAdopt, pets: &[&'a Pet]) -> Element<'a, Message> {
    let cards = pets.iter().map(|&pet| card(app, pet)).collect();
    Wrap::with_elements(cards)
        .spacing(16.0)
        .line_spacing(16.0)
        .into()
}

pub fn card<'a>(app: &'a PawAdopt, pet: &'a Pet) -> Element<'a, Message> {
    let facts = format!("{} • {}", pet.breed, pet.age);
    let badges = row![text(pet.species_label()).size(12)]
        .push_maybe(pet.vaccinated.then(|| text("Vaccinated").size(12).style(text::success)))
        .push_maybe(pet.gender.map(|g| text(g.to_string()).size(12)))
        .spacing(8);

    let body = column![
        photo(app, pet.cover_image(), CARD_WIDTH, CARD_PHOTO_HEIGHT),
        row![
            text(&pet.name).size(20).width(Length::Fill),
            favorite_button(app, &pet.id),
        ]
        .align_y(Alignment::Center),
        text(facts).size(14),
        text(&pet.location).size(13).style(text::secondary),
        badges,
        button(text(format!("Meet {}", pet.name)))
            .on_press(Message::Navigate(Route::PetDetails(pet.id.clone())))
            .style(button::primary)
            .width(Length::Fill),
    ]
    .spacing(8)
    .width(Length::Fixed(CARD_WIDTH));

    container(body)
        .padding(12)
        .style(container::rounded_box)
        .into()
}

/// Heart toggle for a listing
pub fn favorite_button<'a>(app: &PawAdopt, pet_id: &str) -> Element<'a, Message> {
    let label = if app.is_favorite(pet_id) { "♥ Saved" } else { "♡ Save" };
    button(text(label).size(13))
        .on_press(Message::ToggleFavorite(pet_id.to_string()))
        .style(button::secondary)
        .into()
}

/// A fixed-size photo, or a placeholder while it loads or when it is missing
pub fn photo<'a>(
    app: &PawAdopt,
    uri: Option<&str>,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    match uri.and_then(|u| app.thumbnail(u)) {
        Some(Thumb::Ready(handle)) => image(handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Thumb::Loading) => placeholder("Loading photo…", width, height),
        _ => placeholder("No photo", width, height),
    }
}

fn placeholder<'a>(label: &'a str, width: f32, height: f32) -> Element<'a, Message> {
    container(text(label).size(14).style(text::secondary))
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .style(container::bordered_box)
        .into()
}
