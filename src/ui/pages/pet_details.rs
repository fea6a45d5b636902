use iced::widget::{button, column, container, row, text, text_input, Column, Row};
use iced::{Alignment, Element, Length};

use crate::app::{Detail, Message, PawAdopt};
use crate::route::Route;
use crate::state::data::Pet;
use crate::state::filter::Criteria;
use crate::state::forms::{InquiryField, InquiryForm};
use crate::state::wizard::Wizard;
use crate::ui::{field, pet_card};

const PHOTO_WIDTH: f32 = 560.0;
const PHOTO_HEIGHT: f32 = 400.0;
const STRIP_SIZE: f32 = 96.0;

pub fn view(app: &PawAdopt) -> Element<'_, Message> {
    match app.detail() {
        Some(Detail::Found {
            pet,
            photo,
            inquiry,
        }) => profile(app, pet, *photo, inquiry),
        Some(Detail::Missing(id)) => missing(id),
        Some(Detail::Loading(_)) | None => text("Loading pet profile…").size(18).into(),
    }
}

fn missing(id: &str) -> Element<'_, Message> {
    column![
        text("Pet not found").size(32),
        text(format!(
            "We couldn't find a pet with id \"{id}\". They may have been adopted already."
        )),
        button("Browse other pets")
            .on_press(Message::Navigate(Route::Adopt(Criteria::default())))
            .style(button::primary),
    ]
    .spacing(16)
    .into()
}

fn profile<'a>(
    app: &'a PawAdopt,
    pet: &'a Pet,
    photo: usize,
    inquiry: &'a Wizard<InquiryForm>,
) -> Element<'a, Message> {
    let back = button("← Back to all pets")
        .on_press(Message::Navigate(Route::Adopt(Criteria::default())))
        .style(button::text);

    column![
        back,
        row![gallery(app, pet, photo), facts(app, pet)].spacing(32),
        about(pet),
        inquiry_form(pet, inquiry),
    ]
    .spacing(28)
    .into()
}

fn gallery<'a>(app: &'a PawAdopt, pet: &'a Pet, selected: usize) -> Element<'a, Message> {
    let main = pet_card::photo(
        app,
        pet.images.get(selected).map(String::as_str),
        PHOTO_WIDTH,
        PHOTO_HEIGHT,
    );

    let strip = Row::with_children(pet.images.iter().enumerate().map(|(i, uri)| {
        button(pet_card::photo(app, Some(uri), STRIP_SIZE, STRIP_SIZE))
            .on_press(Message::SelectPhoto(i))
            .padding(2)
            .style(if i == selected {
                button::primary
            } else {
                button::text
            })
            .into()
    }))
    .spacing(8);

    column![main]
        .push_maybe((pet.images.len() > 1).then_some(strip))
        .spacing(12)
        .into()
}

fn facts<'a>(app: &'a PawAdopt, pet: &'a Pet) -> Element<'a, Message> {
    let yes_no = |v: bool| if v { "Yes" } else { "No" };

    let mut rows = vec![
        ("Type", pet.species_label()),
        ("Breed", pet.breed.clone()),
        ("Age", pet.age.clone()),
    ];
    if let Some(gender) = pet.gender {
        rows.push(("Gender", gender.to_string()));
    }
    rows.push(("Location", pet.location.clone()));
    rows.push(("Vaccinated", yes_no(pet.vaccinated).to_string()));
    rows.push(("Neutered", yes_no(pet.neutered).to_string()));

    let table = Column::with_children(rows.into_iter().map(|(label, value)| {
        row![
            text(label).size(14).style(text::secondary).width(Length::Fixed(110.0)),
            text(value).size(15),
        ]
        .into()
    }))
    .spacing(6);

    let listed = match pet.listed_date {
        Some(date) => format!("Listed by {} on {}", pet.listed_by, date.format("%d %b %Y")),
        None => format!("Listed by {}", pet.listed_by),
    };

    column![
        row![
            text(&pet.name).size(36).width(Length::Fill),
            pet_card::favorite_button(app, &pet.id),
        ]
        .align_y(Alignment::Center),
        text(format!("Status: {}", pet.status.as_str())).size(14),
        table,
        text(listed).size(13).style(text::secondary),
    ]
    .spacing(12)
    .width(Length::Fill)
    .into()
}

fn about(pet: &Pet) -> Element<'_, Message> {
    let compat = [
        ("Good with kids", pet.compatibility.kids),
        ("Good with other pets", pet.compatibility.other_pets),
        ("Apartment friendly", pet.compatibility.apartment),
    ];
    let compat = Column::with_children(compat.into_iter().map(|(label, ok)| {
        let mark = if ok { "✓" } else { "✗" };
        text(format!("{mark} {label}")).size(14).into()
    }))
    .spacing(4);

    let personality = Row::with_children(pet.personality.iter().map(|tag| {
        container(text(tag).size(13))
            .padding([4, 10])
            .style(container::rounded_box)
            .into()
    }))
    .spacing(8);

    let mut section = Column::new()
        .push(text(format!("About {}", pet.name)).size(24))
        .push(text(&pet.description).size(15))
        .spacing(12);

    if !pet.personality.is_empty() {
        section = section.push(text("Personality").size(18)).push(personality);
    }
    section = section.push(text("Compatibility").size(18)).push(compat);
    if !pet.health_notes.is_empty() {
        section = section
            .push(text("Health notes").size(18))
            .push(text(&pet.health_notes).size(14));
    }
    section.into()
}

fn inquiry_form<'a>(pet: &'a Pet, inquiry: &'a Wizard<InquiryForm>) -> Element<'a, Message> {
    if inquiry.is_submitted() {
        return container(
            column![
                text("Request sent!").size(22).style(text::success),
                text(format!(
                    "Thanks for your interest in {}. The lister will get in touch with you soon.",
                    pet.name
                )),
            ]
            .spacing(8),
        )
        .padding(20)
        .style(container::rounded_box)
        .into();
    }

    let form = &inquiry.form;
    let input = |placeholder: &'a str, value: &'a str, field: InquiryField| {
        text_input(placeholder, value)
            .on_input(move |v| Message::InquiryInput(field, v))
            .padding(8)
    };

    let submit_label = if inquiry.is_submitting() {
        "Sending…"
    } else {
        "Send Adoption Request"
    };

    container(
        column![
            text(format!("Interested in adopting {}?", pet.name)).size(22),
            field(
                "Your name",
                input("Full name", &form.name, InquiryField::Name),
                inquiry.error_for("name"),
            ),
            field(
                "Phone",
                input("+91 98765 43210", &form.phone, InquiryField::Phone),
                inquiry.error_for("phone"),
            ),
            field(
                "Email",
                input("you@example.com", &form.email, InquiryField::Email),
                inquiry.error_for("email"),
            ),
            field(
                "Message",
                input(
                    "Tell the lister about your home and experience with pets",
                    &form.message,
                    InquiryField::Message,
                ),
                inquiry.error_for("message"),
            ),
            button(text(submit_label))
                .on_press_maybe((!inquiry.is_submitting()).then_some(Message::SubmitInquiry))
                .padding(10)
                .style(button::primary),
        ]
        .spacing(12)
        .max_width(640),
    )
    .padding(20)
    .style(container::bordered_box)
    .into()
}
